//! Directory client interface consumed by the command handlers

use crate::error::CliResult;
use crate::models::{MfaState, Role, Settings, User};
use async_trait::async_trait;

/// Operations the role store exposes for user records.
///
/// Every call is a single remote operation that may fail; callers decide
/// ordering, batching and when to stop.
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Search local users. `keywords` and `source` are comma-joined lists.
    async fn search_users(&self, keywords: &str, source: &str) -> CliResult<Vec<User>>;

    /// Fetch one user by ID
    async fn get_user(&self, id: &str) -> CliResult<User>;

    async fn get_settings(&self, id: &str) -> CliResult<Settings>;

    async fn update_settings(&self, id: &str, patch: &Settings) -> CliResult<()>;

    async fn list_roles(&self, id: &str) -> CliResult<Vec<Role>>;

    async fn grant_role(&self, id: &str, role_id: &str) -> CliResult<()>;

    async fn revoke_role(&self, id: &str, role_id: &str) -> CliResult<()>;

    /// Apply one MFA state change to every user in `ids` with a single request
    async fn set_mfa(&self, ids: &[String], state: MfaState) -> CliResult<()>;

    /// Search external directories. `sources` is a comma-joined list of source IDs.
    async fn search_external(&self, keywords: &str, sources: &str) -> CliResult<Vec<User>>;
}
