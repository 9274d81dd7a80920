mod broadcaster;
mod identifiers;
mod move_log;
mod server_config;
mod session_handler;
mod web_server;
mod ws_handler;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use common::config::ConfigManager;
use common::games::tictactoe::GameEngine;
use common::{log, logger};

use broadcaster::Broadcaster;
use move_log::FileMoveLog;
use server_config::{DEFAULT_CONFIG_PATH, ServerConfig};
use session_handler::SessionHandler;
use web_server::{WebServerState, run_web_server};

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Overrides `bind_address` from the config file.
    #[arg(long)]
    bind: Option<String>,

    /// Saves the effective config back to `--config` before starting.
    #[arg(long)]
    write_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, ServerConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let mut config = config_manager.get_config()?;
    if let Some(bind) = args.bind {
        config.bind_address = bind;
    }
    if args.write_config {
        config_manager.set_config(&config)?;
        log!("Config written to {}", args.config.display());
    }
    let addr = config.socket_addr()?;

    let broadcaster = Broadcaster::new();
    let move_log = Arc::new(FileMoveLog::new(&config.move_log_path));
    let session_handler = SessionHandler::new(GameEngine::new(), broadcaster.clone(), move_log);
    let state = WebServerState {
        broadcaster,
        session_handler,
    };

    log!("Tic-tac-toe server starting, move log at {}", config.move_log_path);

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    run_web_server(
        state,
        addr,
        config.static_files_path.map(PathBuf::from),
        shutdown_signal,
    )
    .await?;

    log!("Server shut down gracefully");

    Ok(())
}
