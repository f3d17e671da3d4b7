//! Shared fixtures for integration tests
//!
//! - `RecordingDirectory`: in-memory `DirectoryClient` that records every call
//! - `TestContext`: wiremock server plus an `ApiClient` pointed at it

#![allow(dead_code)]

use async_trait::async_trait;
use rolestore_cli::api::{ApiClient, DirectoryClient};
use rolestore_cli::config::Config;
use rolestore_cli::error::{CliError, CliResult};
use rolestore_cli::models::{MfaState, Role, Settings, User};
use serde_json::{json, Map, Value};
use std::collections::HashSet;
use std::sync::Mutex;
use wiremock::MockServer;

pub const API_PREFIX: &str = "/role-store/api/v1";
pub const TEST_TOKEN: &str = "test-token";

/// A directory call as seen by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SearchUsers { keywords: String, source: String },
    GetUser(String),
    GetSettings(String),
    UpdateSettings { id: String, patch: Value },
    ListRoles(String),
    GrantRole { id: String, role: String },
    RevokeRole { id: String, role: String },
    SetMfa { ids: Vec<String>, state: MfaState },
    SearchExternal { keywords: String, sources: String },
}

impl Call {
    /// Key used to select which calls fail, e.g. `get_user:b` or `grant_role:r1`
    fn key(&self) -> String {
        match self {
            Call::SearchUsers { .. } => "search_users".to_string(),
            Call::GetUser(id) => format!("get_user:{id}"),
            Call::GetSettings(id) => format!("get_settings:{id}"),
            Call::UpdateSettings { id, .. } => format!("update_settings:{id}"),
            Call::ListRoles(id) => format!("list_roles:{id}"),
            Call::GrantRole { role, .. } => format!("grant_role:{role}"),
            Call::RevokeRole { role, .. } => format!("revoke_role:{role}"),
            Call::SetMfa { .. } => "set_mfa".to_string(),
            Call::SearchExternal { .. } => "search_external".to_string(),
        }
    }
}

/// Fake directory that records calls and fails the ones marked with `fail_on`
#[derive(Default)]
pub struct RecordingDirectory {
    calls: Mutex<Vec<Call>>,
    failing: HashSet<String>,
}

impl RecordingDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the call with this key fail with `CliError::NotFound`
    pub fn fail_on(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> CliResult<()> {
        let key = call.key();
        self.calls.lock().unwrap().push(call);
        if self.failing.contains(&key) {
            Err(CliError::NotFound(key))
        } else {
            Ok(())
        }
    }
}

pub fn user_fixture(id: &str) -> User {
    User {
        id: id.to_string(),
        principal: Some(format!("{id}-principal")),
        source_id: None,
        email: None,
        extra: Map::new(),
    }
}

pub fn role_fixture(id: &str) -> Role {
    Role {
        id: id.to_string(),
        name: Some(format!("role {id}")),
        explicit: Some(true),
        extra: Map::new(),
    }
}

#[async_trait]
impl DirectoryClient for RecordingDirectory {
    async fn search_users(&self, keywords: &str, source: &str) -> CliResult<Vec<User>> {
        self.record(Call::SearchUsers {
            keywords: keywords.to_string(),
            source: source.to_string(),
        })?;
        Ok(vec![user_fixture("found")])
    }

    async fn get_user(&self, id: &str) -> CliResult<User> {
        self.record(Call::GetUser(id.to_string()))?;
        Ok(user_fixture(id))
    }

    async fn get_settings(&self, id: &str) -> CliResult<Settings> {
        self.record(Call::GetSettings(id.to_string()))?;
        Ok(json!({ "user_id": id, "locale": "en" }))
    }

    async fn update_settings(&self, id: &str, patch: &Settings) -> CliResult<()> {
        self.record(Call::UpdateSettings {
            id: id.to_string(),
            patch: patch.clone(),
        })
    }

    async fn list_roles(&self, id: &str) -> CliResult<Vec<Role>> {
        self.record(Call::ListRoles(id.to_string()))?;
        Ok(vec![role_fixture("r-current")])
    }

    async fn grant_role(&self, id: &str, role_id: &str) -> CliResult<()> {
        self.record(Call::GrantRole {
            id: id.to_string(),
            role: role_id.to_string(),
        })
    }

    async fn revoke_role(&self, id: &str, role_id: &str) -> CliResult<()> {
        self.record(Call::RevokeRole {
            id: id.to_string(),
            role: role_id.to_string(),
        })
    }

    async fn set_mfa(&self, ids: &[String], state: MfaState) -> CliResult<()> {
        self.record(Call::SetMfa {
            ids: ids.to_vec(),
            state,
        })
    }

    async fn search_external(&self, keywords: &str, sources: &str) -> CliResult<Vec<User>> {
        self.record(Call::SearchExternal {
            keywords: keywords.to_string(),
            sources: sources.to_string(),
        })?;
        Ok(vec![user_fixture("external")])
    }
}

/// Test context holding a mock role-store server
pub struct TestContext {
    pub server: MockServer,
}

impl TestContext {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Full mock path for an API path such as `/users/abc`
    pub fn api_path(path: &str) -> String {
        format!("{API_PREFIX}{path}")
    }

    /// Client authenticated with [`TEST_TOKEN`]
    pub fn client(&self) -> ApiClient {
        let config = Config {
            api_url: self.base_url(),
            access_token: Some(TEST_TOKEN.to_string()),
            timeout_secs: 5,
        };
        ApiClient::new(config).expect("client")
    }

    /// Client with no access token configured
    pub fn anonymous_client(&self) -> ApiClient {
        let config = Config {
            api_url: self.base_url(),
            access_token: None,
            timeout_secs: 5,
        };
        ApiClient::new(config).expect("client")
    }
}
