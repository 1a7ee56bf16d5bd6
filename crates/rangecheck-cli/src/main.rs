//! Rangecheck CLI - Test values against canonical range literals.

use anyhow::Context;
use clap::Parser;
use rangecheck_cli::commands;
use rangecheck_cli::repl;
use rangecheck_cli::{Cli, Command, Config, Formatter};
use rangecheck_service::RangeService;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // An explicit config file must load; the default one falls back to defaults
    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Using default configuration: {}", e);
            Config::default()
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);
    let service = RangeService::default();
    let default_type = config.settings.default_type.as_str();

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &service, &formatter)?;
        }
        Some(Command::Check(args)) => {
            commands::execute_check(args, &service, default_type, &formatter)?;
        }
        Some(Command::Render(args)) => {
            commands::execute_render(args, &service, default_type, &formatter)?;
        }
        Some(Command::Batch(args)) => {
            commands::execute_batch(args, &service, default_type, &formatter)
                .context("Batch failed")?;
        }
        Some(Command::Types) => {
            commands::execute_types(&formatter)?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `-v`.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
