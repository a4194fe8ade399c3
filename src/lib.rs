pub mod client;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use client::{tile_preview_url, ApiClient};
pub use config::ClientConfig;
pub use domain::model::{CoverageArea, FgfsStatus, JobDescriptor, JobId};
pub use domain::ports::JobServerApi;
pub use utils::error::{ClientError, Result};
