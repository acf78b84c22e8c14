// file: src/main.rs
// version: 1.0.0
// guid: e1f7b3c8-0d26-4a59-b4e8-9c5a2d6f0e71

//! image-to-svg - Main entry point

use clap::Parser;
use image_to_svg::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    config::ConfigLoader,
    logging::logger,
};
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }

    logger::init_logger(cli.verbose, cli.quiet, !cli.no_color)?;

    let mut config = ConfigLoader::new().load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    let style = cli.console_style();

    let command_future = async {
        match cli.command {
            Commands::Convert { ref files } => convert_command(&config, files, style).await,
            Commands::Invoke { ref name, ref file } => {
                invoke_command(&config, name, file.as_deref(), style).await
            }
            Commands::ListCommands => list_commands_command(&config, cli.json).map(|_| true),
            Commands::Check => check_command(&config, style),
            Commands::Config => show_config_command(&config).map(|_| true),
        }
    };

    // Running scripts are not cancelled; Ctrl+C only ends the host
    let succeeded = tokio::select! {
        result = command_future => result?,
        Ok(()) = signal::ctrl_c() => {
            warn!("Interrupted by user");
            std::process::exit(130);
        }
    };

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}
