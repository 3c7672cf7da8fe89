//! Seedkey CLI - Generate, inspect and create accounts from seeds.

pub mod commands;
pub mod config;
pub mod output;
pub mod telemetry;

use clap::Parser;
use config::CliConfig;

fn main() {
    let cli = commands::Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: commands::Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;

    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    telemetry::init_telemetry(&log_level, config.json_logs)?;
    tracing::debug!(config = ?cli.config, dev = cli.dev, json = cli.json, "starting");

    let mut session = commands::Session::new(&cli, config)?;
    commands::execute(cli.command, &mut session)
}
