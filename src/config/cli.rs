use crate::config::toml_config::ClientConfig;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fgtile")]
#[command(about = "Command-line client for the map tile job server")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Server base URL, e.g. http://localhost:8000/")]
    pub base_url: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Submit a processing job
    StartJob {
        #[arg(long, help = "JSON file with job parameters, or - for stdin")]
        params: String,
    },
    /// List completed job identifiers
    CompletedJobs,
    /// Connect the server to a FlightGear telnet port
    Connect {
        #[arg(long)]
        port: u16,
    },
    /// Disconnect the server from FlightGear
    Disconnect,
    /// Show FlightGear connection status
    Status,
    /// Show tile coverage areas
    Coverage,
    /// Print a tile preview URL
    Preview {
        #[arg(long)]
        id: String,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long, help = "Resolve against the base URL")]
        absolute: bool,
    },
    /// Shut the server down
    Shutdown,
}

impl CliConfig {
    /// 合併設定：CLI 參數優先於 TOML 檔案
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => {
                let base_url = validate_required_field("base_url", &self.base_url)?;
                ClientConfig::new(base_url.clone())
            }
        };

        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }

        let logging = config.logging.get_or_insert_with(Default::default);
        if self.verbose {
            logging.verbose = Some(true);
        }
        if self.log_json {
            logging.json = Some(true);
        }

        Ok(config)
    }
}
