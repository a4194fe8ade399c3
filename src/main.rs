use clap::Parser;
use fgtile_client::utils::error::ClientError;
use fgtile_client::utils::{logger, validation::Validate};
use fgtile_client::{ApiClient, CliConfig, Command, JobServerApi};
use std::io::Read;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if config.json_logs() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose());
    }
    tracing::debug!("Client config: {:?}", config);

    let client = match ApiClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = run(&client, cli.command).await {
        tracing::error!(
            "❌ Command failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        exit_with(&e);
    }

    Ok(())
}

fn exit_with(e: &ClientError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn read_params(source: &str) -> fgtile_client::Result<serde_json::Value> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)?
    };
    Ok(serde_json::from_str(&content)?)
}

async fn run(client: &ApiClient, command: Command) -> fgtile_client::Result<()> {
    match command {
        Command::StartJob { params } => {
            let params = read_params(&params)?;
            let job = client.start_job(&params).await?;
            println!("{}", serde_json::to_string_pretty(&job)?);
        }
        Command::CompletedJobs => {
            for id in client.completed_jobs().await? {
                println!("{}", id);
            }
        }
        Command::Connect { port } => {
            let response = client.connect_to_fgfs(port).await?;
            println!("{}", response.status());
        }
        Command::Disconnect => {
            let response = client.disconnect_from_fgfs().await?;
            println!("{}", response.status());
        }
        Command::Status => {
            let status = client.fgfs_status().await?;
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        Command::Coverage => {
            let coverage = client.coverage_data().await?;
            tracing::info!("📦 {} coverage areas", coverage.len());
            println!("{}", serde_json::to_string_pretty(&coverage)?);
        }
        Command::Preview { id, width, absolute } => {
            if absolute {
                println!("{}", client.tile_preview_absolute_url(&id, width)?);
            } else {
                println!("{}", client.tile_preview_url(&id, width));
            }
        }
        Command::Shutdown => {
            let response = client.shutdown_server().await?;
            println!("{}", response.status());
        }
    }

    Ok(())
}
