//! Orchestration of directory calls for each `users` subcommand
//!
//! Handlers never print and never exit. They return the value to display, or
//! `()` for commands that only change state, or the first error hit.

use super::options::UserOptions;
use crate::api::DirectoryClient;
use crate::batch::fail_fast;
use crate::error::{CliError, CliResult};
use crate::models::{Role, Settings, User};
use crate::output::join_list;
use std::path::Path;

/// Diagnostic for `users mfa` without a mode flag
pub const MFA_MODE_REQUIRED: &str =
    "you have to specify one of the following flags: --enable, --disable or --reset";

/// `users`: search local users by keyword
pub async fn list(client: &dyn DirectoryClient, options: &UserOptions) -> CliResult<Vec<User>> {
    let keywords = join_list(&options.keywords);
    tracing::info!(keywords = %keywords, "searching users");

    client.search_users(&keywords, "").await
}

/// `users search`: search external directories
pub async fn search_external(
    client: &dyn DirectoryClient,
    options: &UserOptions,
) -> CliResult<Vec<User>> {
    let keywords = join_list(&options.keywords);
    let sources = join_list(&options.sources);
    tracing::info!(keywords = %keywords, sources = %sources, "searching external users");

    client.search_external(&keywords, &sources).await
}

/// `users show`: fetch every listed user, in order, stopping at the first failure
pub async fn show(client: &dyn DirectoryClient, options: &UserOptions) -> CliResult<Vec<User>> {
    let ids = options.require_identifiers()?;
    tracing::info!(count = ids.len(), "fetching users");

    fail_fast(ids, |id| client.get_user(id)).await
}

/// `users settings`
pub async fn show_settings(
    client: &dyn DirectoryClient,
    options: &UserOptions,
) -> CliResult<Settings> {
    let id = options.require_single_identifier()?;
    tracing::info!(user = %id, "fetching settings");

    client.get_settings(id).await
}

/// `users update-settings`: the patch is read before any remote call is made
pub async fn update_settings(
    client: &dyn DirectoryClient,
    options: &UserOptions,
    patch_file: &Path,
) -> CliResult<()> {
    let id = options.require_single_identifier()?;
    let patch = read_patch(patch_file)?;
    tracing::info!(user = %id, file = %patch_file.display(), "updating settings");

    client.update_settings(id, &patch).await
}

/// `users roles`: grants, then revokes, then the resulting role list
pub async fn roles(client: &dyn DirectoryClient, options: &UserOptions) -> CliResult<Vec<Role>> {
    let id = options.require_single_identifier()?;
    options.validate_role_changes()?;

    fail_fast(&options.role_grants, |role| {
        tracing::info!(user = %id, role = %role, "granting role");
        client.grant_role(id, role)
    })
    .await?;

    fail_fast(&options.role_revokes, |role| {
        tracing::info!(user = %id, role = %role, "revoking role");
        client.revoke_role(id, role)
    })
    .await?;

    client.list_roles(id).await
}

/// `users mfa`: one batched state change for all listed users.
///
/// A missing mode is [`CliError::FatalUsage`] and is detected before the
/// identifier list is looked at.
pub async fn mfa(client: &dyn DirectoryClient, options: &UserOptions) -> CliResult<()> {
    let state = options
        .mfa_mode
        .state()
        .ok_or_else(|| CliError::FatalUsage(MFA_MODE_REQUIRED.to_string()))?;
    let ids = options.require_identifiers()?;
    tracing::info!(state = %state, count = ids.len(), "changing MFA state");

    client.set_mfa(ids, state).await
}

/// Read a JSON settings patch from disk
pub fn read_patch(path: &Path) -> CliResult<Settings> {
    let patch_error = |reason: String| CliError::PatchFile {
        path: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path).map_err(|e| patch_error(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| patch_error(e.to_string()))
}
