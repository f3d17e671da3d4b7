//! User management CLI commands

pub mod handlers;
pub mod options;

pub use options::{MfaMode, UserOptions};

use crate::api::DirectoryClient;
use crate::error::{CliError, CliResult};
use crate::models::{Role, Settings, User};
use crate::output::{emit, OutputFormat};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// List and manage users
#[derive(Args, Debug)]
#[command(after_help = "Examples:\n  rolestore users --keywords <KEYWORD> --keywords <KEYWORD>")]
#[command(args_conflicts_with_subcommands = true)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: Option<UsersCommands>,

    /// Search keywords for listing users (repeatable, not valid with a subcommand)
    #[arg(long)]
    pub keywords: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// Show one or more users; IDs are separated by commas
    Show(IdListArgs),
    /// Show a user's settings
    Settings(IdArgs),
    /// Update a user's settings from a JSON file
    UpdateSettings(UpdateSettingsArgs),
    /// Show and manage a user's roles
    Roles(RolesArgs),
    /// Enable, disable or reset multifactor authentication
    Mfa(MfaArgs),
    /// Search external users
    Search(SearchArgs),
}

/// Arguments for commands taking a comma-separated list of user IDs
#[derive(Args, Debug)]
pub struct IdListArgs {
    /// User IDs, comma separated
    #[arg(long, required = true, value_name = "USER-ID[,USER-ID...]")]
    pub id: String,
}

/// Arguments for commands taking a single user ID
#[derive(Args, Debug)]
pub struct IdArgs {
    /// User ID
    #[arg(long, required = true, value_name = "USER-ID")]
    pub id: String,
}

/// Arguments for the update-settings command
#[derive(Args, Debug)]
pub struct UpdateSettingsArgs {
    /// JSON file holding the settings patch
    #[arg(value_name = "JSON-FILE")]
    pub file: PathBuf,

    /// User ID
    #[arg(long, required = true, value_name = "USER-ID")]
    pub id: String,
}

/// Arguments for the roles command
#[derive(Args, Debug)]
#[command(after_help = "Examples:\n  rolestore users roles --id <USER-ID>\n  rolestore users roles --id <USER-ID> --grant <ROLE-ID>\n  rolestore users roles --id <USER-ID> --revoke <ROLE-ID>")]
pub struct RolesArgs {
    /// User ID
    #[arg(long, required = true, value_name = "USER-ID")]
    pub id: String,

    /// Grant a role to the user (role ID, repeatable)
    #[arg(long, value_name = "ROLE-ID")]
    pub grant: Vec<String>,

    /// Revoke a role from the user (role ID, repeatable)
    #[arg(long, value_name = "ROLE-ID")]
    pub revoke: Vec<String>,
}

/// Arguments for the mfa command
#[derive(Args, Debug)]
pub struct MfaArgs {
    /// User IDs, comma separated
    #[arg(long, required = true, value_name = "USER-ID[,USER-ID...]")]
    pub id: String,

    /// Turn on multifactor authentication
    #[arg(short, long)]
    pub enable: bool,

    /// Turn off multifactor authentication
    #[arg(short, long)]
    pub disable: bool,

    /// Reset multifactor authentication
    #[arg(short, long)]
    pub reset: bool,
}

/// Arguments for the external search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search keywords (repeatable)
    #[arg(long)]
    pub keywords: Vec<String>,

    /// Source ID to search from (repeatable)
    #[arg(long)]
    pub sources: Vec<String>,
}

/// Data produced by a `users` command
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UsersOutput {
    Users(Vec<User>),
    Roles(Vec<Role>),
    Settings(Settings),
}

/// Check flag combinations that do not depend on configuration.
///
/// Runs before the config file is read so a broken config cannot mask a
/// usage diagnostic.
pub fn preflight(args: &UsersArgs) -> CliResult<()> {
    if let Some(UsersCommands::Mfa(a)) = &args.command {
        let mode = MfaMode::from_flags(a.enable, a.disable, a.reset)?;
        if mode.state().is_none() {
            return Err(CliError::FatalUsage(handlers::MFA_MODE_REQUIRED.to_string()));
        }
    }
    Ok(())
}

/// Execute user commands and print their result
pub async fn execute(
    args: UsersArgs,
    client: &dyn DirectoryClient,
    format: OutputFormat,
) -> CliResult<()> {
    if let Some(output) = run(args, client).await? {
        emit(&output, format);
    }
    Ok(())
}

/// Run the selected handler. `None` means the command has nothing to display.
pub async fn run(args: UsersArgs, client: &dyn DirectoryClient) -> CliResult<Option<UsersOutput>> {
    let Some(command) = args.command else {
        let options = UserOptions {
            keywords: args.keywords,
            ..UserOptions::default()
        };
        return Ok(Some(UsersOutput::Users(
            handlers::list(client, &options).await?,
        )));
    };

    match command {
        UsersCommands::Show(a) => {
            let options = UserOptions::with_id_list(&a.id);
            Ok(Some(UsersOutput::Users(
                handlers::show(client, &options).await?,
            )))
        }
        UsersCommands::Settings(a) => {
            let options = UserOptions::with_single_id(&a.id);
            Ok(Some(UsersOutput::Settings(
                handlers::show_settings(client, &options).await?,
            )))
        }
        UsersCommands::UpdateSettings(a) => {
            let options = UserOptions::with_single_id(&a.id);
            handlers::update_settings(client, &options, &a.file).await?;
            Ok(None)
        }
        UsersCommands::Roles(a) => {
            let options = UserOptions {
                role_grants: a.grant,
                role_revokes: a.revoke,
                ..UserOptions::with_single_id(&a.id)
            };
            Ok(Some(UsersOutput::Roles(
                handlers::roles(client, &options).await?,
            )))
        }
        UsersCommands::Mfa(a) => {
            let options = UserOptions {
                mfa_mode: MfaMode::from_flags(a.enable, a.disable, a.reset)?,
                ..UserOptions::with_id_list(&a.id)
            };
            handlers::mfa(client, &options).await?;
            Ok(None)
        }
        UsersCommands::Search(a) => {
            let options = UserOptions {
                keywords: a.keywords,
                sources: a.sources,
                ..UserOptions::default()
            };
            Ok(Some(UsersOutput::Users(
                handlers::search_external(client, &options).await?,
            )))
        }
    }
}
