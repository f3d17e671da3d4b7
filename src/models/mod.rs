//! Data models for the role-store API

pub mod mfa;
pub mod role;
pub mod user;

pub use mfa::MfaState;
pub use role::{Role, RoleListResponse};
pub use user::{SearchRequest, User, UserListResponse};

/// Arbitrary settings document returned and accepted by the settings endpoints
pub type Settings = serde_json::Value;
