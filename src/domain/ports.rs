use crate::domain::model::{CoverageArea, FgfsStatus, JobDescriptor, JobId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 工作伺服器提供的 HTTP 操作。
///
/// 只有 `start_job` 會檢查 HTTP 狀態碼；`coverage_data` 遇到非 OK 狀態回傳空清單；
/// 其餘操作直接回報傳輸層或 JSON 解碼的錯誤。
#[async_trait]
pub trait JobServerApi: Send + Sync {
    async fn start_job(&self, params: &serde_json::Value) -> Result<JobDescriptor>;
    async fn completed_jobs(&self) -> Result<Vec<JobId>>;
    async fn connect_to_fgfs(&self, port: u16) -> Result<reqwest::Response>;
    async fn disconnect_from_fgfs(&self) -> Result<reqwest::Response>;
    async fn fgfs_status(&self) -> Result<FgfsStatus>;
    async fn coverage_data(&self) -> Result<Vec<CoverageArea>>;
    async fn shutdown_server(&self) -> Result<reqwest::Response>;

    /// Relative preview URL for a tile. Never issues a request.
    fn tile_preview_url(&self, id: &str, width: Option<u32>) -> String {
        crate::client::preview::tile_preview_url(id, width)
    }
}
