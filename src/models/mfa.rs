//! Multi-factor authentication state changes

use serde::{Deserialize, Serialize};
use std::fmt;

/// MFA action applied to a batch of users in a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MfaState {
    Enable,
    Disable,
    Reset,
}

impl MfaState {
    /// Path segment of the `/users/mfa/{action}` endpoint
    pub fn as_path(&self) -> &'static str {
        match self {
            MfaState::Enable => "enable",
            MfaState::Disable => "disable",
            MfaState::Reset => "reset",
        }
    }
}

impl fmt::Display for MfaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}
