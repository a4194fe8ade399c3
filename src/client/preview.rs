pub const DEFAULT_PREVIEW_WIDTH: u32 = 512;

/// 組出圖磚預覽圖的相對 URL，不做任何檢查或跳脫
pub fn tile_preview_url(id: &str, width: Option<u32>) -> String {
    format!(
        "/preview?id={}&w={}",
        id,
        width.unwrap_or(DEFAULT_PREVIEW_WIDTH)
    )
}
