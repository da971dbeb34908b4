// PropTerm - Serial terminal for microcontroller development
mod cli;
mod core;
mod domain;
mod infrastructure;
mod tui;

use anyhow::Context;
use clap::Parser;
use cli::args::{Args, Command};
use cli::commands::execute_command;
use domain::config::PropTermConfig;
use infrastructure::config::ConfigManager;
use infrastructure::logging::init_logging;
use tui::app::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_manager = ConfigManager::new().context("failed to locate configuration")?;
    let mut config: PropTermConfig = if let Some(path) = &args.config {
        config_manager.load_config_from_path(path.as_ref())?
    } else {
        config_manager.load_config()?
    };

    // Command-line overrides
    if let Some(port) = &args.port {
        config.terminal.port = port.clone();
    }
    if let Some(baud) = args.baud {
        config.terminal.baud_rate = baud;
    }

    if !args.quiet {
        let level = if args.verbose {
            "debug"
        } else {
            &config.global.log_level
        };
        if let Err(e) = init_logging(level) {
            eprintln!("Warning: failed to initialize logging: {}", e);
        }
    }

    match &args.command {
        Some(Command::Tui) | None => {
            let mut app = App::new(&config).context("failed to start terminal")?;
            app.run().await?;
            Ok(())
        }
        _ => {
            match execute_command(args).await {
                Ok(()) => Ok(()),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
