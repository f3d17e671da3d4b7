//! Role data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Role held by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Granted directly rather than through a rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Role list wrapper returned by `GET /users/{id}/roles`
#[derive(Debug, Serialize, Deserialize)]
pub struct RoleListResponse {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub items: Vec<Role>,
}
