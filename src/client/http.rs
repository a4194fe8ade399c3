use crate::client::preview::tile_preview_url;
use crate::config::toml_config::ClientConfig;
use crate::domain::model::{ConnectRequest, CoverageArea, FgfsStatus, JobDescriptor, JobId};
use crate::domain::ports::JobServerApi;
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, StatusCode};
use url::Url;

pub const START_JOB_PATH: &str = "/api/start-job";
pub const COMPLETED_JOBS_PATH: &str = "/api/completed-jobs";
pub const CONNECT_PATH: &str = "/api/connect";
pub const DISCONNECT_PATH: &str = "/api/disconnect";
pub const FGFS_STATUS_PATH: &str = "/api/fgfs-status";
pub const SHUTDOWN_PATH: &str = "/api/shutdown";
pub const DEFAULT_COVERAGE_PATH: &str = "coverage.json";

/// reqwest 實作的工作伺服器客戶端。
///
/// 路徑以瀏覽器解析頁面 URL 的方式對 `base_url` 解析：`/api/...` 取代整個路徑，
/// coverage 資源則相對於 base 所在目錄。
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    coverage_path: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(base_url)?,
            coverage_path: DEFAULT_COVERAGE_PATH.to_string(),
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(user_agent) = &config.server.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        Ok(Self {
            client: builder.build()?,
            base_url: Url::parse(&config.server.base_url)?,
            coverage_path: config.coverage_path().to_string(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 預覽圖的絕對 URL，供瀏覽器以外的呼叫端使用
    pub fn tile_preview_absolute_url(&self, id: &str, width: Option<u32>) -> Result<Url> {
        self.resolve(&tile_preview_url(id, width))
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}

/// 伺服器實際送出的 reason phrase；hyper 只在它與標準不同時才保留
fn status_text(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => canonical_status_text(response.status()),
    }
}

fn canonical_status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[async_trait]
impl JobServerApi for ApiClient {
    async fn start_job(&self, params: &serde_json::Value) -> Result<JobDescriptor> {
        tracing::info!("API: Sending job request");
        tracing::debug!("API: job parameters: {}", params);

        let url = self.resolve(START_JOB_PATH)?;
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(params).send().await?;

        if !response.status().is_success() {
            tracing::warn!("API: start-job rejected with status {}", response.status());
            return Err(ClientError::Server {
                status_text: status_text(&response),
            });
        }

        Ok(response.json().await?)
    }

    async fn completed_jobs(&self) -> Result<Vec<JobId>> {
        let url = self.resolve(COMPLETED_JOBS_PATH)?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Ok(response.json().await?)
    }

    async fn connect_to_fgfs(&self, port: u16) -> Result<reqwest::Response> {
        tracing::info!("API: Requesting FGFS connection on port {}", port);

        let url = self.resolve(CONNECT_PATH)?;
        tracing::debug!("POST {}", url);
        Ok(self
            .client
            .post(url)
            .json(&ConnectRequest { port })
            .send()
            .await?)
    }

    async fn disconnect_from_fgfs(&self) -> Result<reqwest::Response> {
        tracing::info!("API: Requesting FGFS disconnection.");

        let url = self.resolve(DISCONNECT_PATH)?;
        tracing::debug!("POST {}", url);
        Ok(self.client.post(url).send().await?)
    }

    async fn fgfs_status(&self) -> Result<FgfsStatus> {
        let url = self.resolve(FGFS_STATUS_PATH)?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Ok(response.json().await?)
    }

    async fn coverage_data(&self) -> Result<Vec<CoverageArea>> {
        let url = self.resolve(&self.coverage_path)?;
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            tracing::debug!(
                "Coverage request returned {}, using empty coverage",
                response.status()
            );
            return Ok(Vec::new());
        }

        Ok(response.json().await?)
    }

    async fn shutdown_server(&self) -> Result<reqwest::Response> {
        tracing::info!("API: Sending shutdown command.");

        let url = self.resolve(SHUTDOWN_PATH)?;
        tracing::debug!("POST {}", url);
        Ok(self.client.post(url).send().await?)
    }
}
