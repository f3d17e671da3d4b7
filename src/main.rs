//! rolestore CLI - manage role-store users from the command line
//!
//! This CLI enables operators to:
//! - List and search local and external users
//! - Inspect users and their settings
//! - Grant and revoke roles
//! - Enable, disable or reset multifactor authentication

use clap::{Parser, Subcommand};
use rolestore_cli::api::ApiClient;
use rolestore_cli::commands;
use rolestore_cli::config::{Config, ConfigPaths};
use rolestore_cli::error::CliResult;
use rolestore_cli::logging::{init_logging, LogLevel};
use rolestore_cli::output::OutputFormat;
use std::path::PathBuf;

/// rolestore CLI - Identity platform user management
#[derive(Parser)]
#[command(name = "rolestore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: <config dir>/rolestore/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Role-store base URL, overrides config and ROLESTORE_API_URL
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Output format for command results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Log each step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log HTTP requests to stderr
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List and manage users
    Users(commands::users::UsersArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = LogLevel::from_flags(cli.verbose, cli.debug);
    init_logging(level);
    tracing::debug!(%level, "logging initialized");

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) if e.is_fatal() => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Users(args) => commands::users::preflight(args)?,
    }

    let paths = match cli.config {
        Some(ref file) => ConfigPaths::from_file(file),
        None => ConfigPaths::new()?,
    };
    let config = Config::load(&paths)?.with_api_url(cli.api_url);
    tracing::debug!(api_url = %config.api_url, config_file = %paths.config_file.display(), "configuration loaded");

    let client = ApiClient::new(config)?;

    match cli.command {
        Commands::Users(args) => commands::users::execute(args, &client, cli.format).await,
    }
}
