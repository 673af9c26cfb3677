// ABOUTME: Main entry point for the Linear CLI application
// ABOUTME: Loads configuration, builds the HTTP client and runs one command

use anyhow::{Context, Result};
use clap::Parser;
use linear_cli::cli::{Cli, Commands};
use linear_cli::cli_output::CliOutput;
use linear_cli::commands::{Settings, execute};
use linear_cli::completions::write_completions;
use linear_cli::config::{Config, api_key};
use linear_core::constants::timeouts;
use linear_core::{LinearClient, OperationError};
use std::env;
use std::io::IsTerminal;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Determine if color should be used for a stream
fn should_use_color(no_color_flag: bool, is_terminal: bool) -> bool {
    !no_color_flag
        && is_terminal
        && env::var_os("NO_COLOR").is_none()
        && env::var("TERM").unwrap_or_default() != "dumb"
}

fn build_client(config: &Config) -> Result<LinearClient> {
    LinearClient::builder()
        .auth_token(api_key()?)
        .timeout(config.timeout().unwrap_or(timeouts::HTTP_REQUEST_TIMEOUT))
        .base_url(config.api_url.clone())
        .build()
        .context("Failed to create Linear client")
}

async fn run(cli: Cli) -> Result<String> {
    let config = Config::load()?;
    let client = build_client(&config)?;

    let settings = Settings {
        use_color: should_use_color(cli.no_color, std::io::stdout().is_terminal()),
        prefer_json: config.prefers_json(),
        default_team: config.default_team.clone(),
    };

    execute(&client, cli.command, &settings).await
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = CliOutput::with_color(should_use_color(
        cli.no_color,
        std::io::stderr().is_terminal(),
    ));

    // Completions need neither configuration nor credentials
    if let Commands::Completions { shell } = cli.command {
        write_completions(shell, &mut std::io::stdout());
        return;
    }

    match run(cli).await {
        Ok(text) => println!("{text}"),
        Err(err) => {
            match err.downcast_ref::<OperationError>() {
                Some(op_err) => output.operation_error(op_err),
                None => output.error(&format!("{err:#}")),
            }
            log::debug!("{err:?}");
            std::process::exit(1);
        }
    }
}
