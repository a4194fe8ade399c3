pub mod http;
pub mod preview;

pub use http::ApiClient;
pub use preview::{tile_preview_url, DEFAULT_PREVIEW_WIDTH};
