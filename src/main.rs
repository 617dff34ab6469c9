// src/main.rs
use clap::Parser;
use gaming_room::cli::Args;
use gaming_room::commands;
use gaming_room::config::Config;
use gaming_room::error::AppError;
use gaming_room::logging::setup_logging;
use std::io::{Write, stdout};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    if args.version {
        return commands::handle_version_command(&mut stdout());
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if args.is_config_update() {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let mut out = stdout().lock();

    // First access creates the process-wide registry
    let registry = commands::obtain_registry(&mut out)?;
    commands::run_demo(registry, &mut out)?;

    if !args.games.is_empty() {
        writeln!(out)?;
        commands::add_named_games(registry, &args.games, &mut out)?;
    }

    if !args.skip_singleton_check {
        commands::run_singleton_check(&mut out)?;
    }

    out.flush()?;
    Ok(())
}
