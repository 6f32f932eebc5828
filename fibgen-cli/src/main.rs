//! fibgen-demo - Command-line demo for the Fibonacci generators

mod cli;
mod config;
mod dictionary;
mod error;
mod output;
mod runner;

use clap::Parser;
use cli::Args;
use config::Config;
use output::OutputFormatter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_logging(&config)?;
    tracing::debug!(?config, "configuration resolved");

    let formatter = OutputFormatter::new(config.quiet);

    if config.runs_fibonacci() {
        let report = runner::run_fibonacci(&config)?;
        formatter.print_fibonacci(&report);
        formatter.print_summary(&report);
    }

    if config.runs_dictionaries() {
        let lines = dictionary::run_dictionaries()?;
        formatter.print_dictionaries(&lines);
    }

    Ok(())
}

/// Logs go to stderr so stdout only carries demo output
fn init_logging(config: &Config) -> Result<(), error::CliError> {
    let env_filter_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let mut filter = EnvFilter::from_default_env();
    for directive in config.log_directives(env_filter_set) {
        let directive = directive
            .parse()
            .map_err(|e| error::CliError::Config(format!("Invalid log directive: {}", e)))?;
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}
