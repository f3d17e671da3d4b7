//! User data models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record as returned by the role store
///
/// Only the identifying fields are typed; everything else the service sends
/// is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Paged list wrapper used by the search endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub items: Vec<User>,
}

/// Body of the local and external user search endpoints
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub keywords: &'a str,
    pub source: &'a str,
}
