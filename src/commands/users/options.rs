//! Per-invocation options shared by the user handlers

use crate::error::{CliError, CliResult};
use crate::models::MfaState;
use crate::output::parse_comma_list;

/// MFA operation selected by `--enable`, `--disable` or `--reset`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MfaMode {
    /// No mode flag given
    #[default]
    Unspecified,
    Enable,
    Disable,
    Reset,
}

impl MfaMode {
    /// Resolve the three mode flags. Setting more than one is rejected
    /// instead of being resolved by precedence.
    pub fn from_flags(enable: bool, disable: bool, reset: bool) -> CliResult<Self> {
        match (enable, disable, reset) {
            (false, false, false) => Ok(Self::Unspecified),
            (true, false, false) => Ok(Self::Enable),
            (false, true, false) => Ok(Self::Disable),
            (false, false, true) => Ok(Self::Reset),
            _ => Err(CliError::Validation(
                "--enable, --disable and --reset are mutually exclusive".to_string(),
            )),
        }
    }

    /// State to send to the directory, if a mode was selected
    pub fn state(self) -> Option<MfaState> {
        match self {
            Self::Unspecified => None,
            Self::Enable => Some(MfaState::Enable),
            Self::Disable => Some(MfaState::Disable),
            Self::Reset => Some(MfaState::Reset),
        }
    }
}

/// Parsed flags of a single `users` invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserOptions {
    /// User IDs in the order given
    pub identifiers: Vec<String>,
    pub keywords: Vec<String>,
    pub sources: Vec<String>,
    pub mfa_mode: MfaMode,
    pub role_grants: Vec<String>,
    pub role_revokes: Vec<String>,
}

impl UserOptions {
    /// Options for commands accepting a comma-separated `--id` list
    pub fn with_id_list(raw: &str) -> Self {
        Self {
            identifiers: parse_comma_list(raw),
            ..Self::default()
        }
    }

    /// Options for commands taking exactly one `--id`; the value is not split
    pub fn with_single_id(raw: &str) -> Self {
        let id = raw.trim();
        Self {
            identifiers: if id.is_empty() {
                Vec::new()
            } else {
                vec![id.to_string()]
            },
            ..Self::default()
        }
    }

    /// The identifier list, or a usage error when it is empty
    pub fn require_identifiers(&self) -> CliResult<&[String]> {
        if self.identifiers.is_empty() {
            return Err(CliError::Validation(
                "At least one user ID is required (--id <USER-ID>[,<USER-ID>...])".to_string(),
            ));
        }
        Ok(&self.identifiers)
    }

    /// The single identifier of a one-user command
    pub fn require_single_identifier(&self) -> CliResult<&str> {
        match self.identifiers.as_slice() {
            [id] => Ok(id.as_str()),
            [] => Err(CliError::Validation(
                "A user ID is required (--id <USER-ID>)".to_string(),
            )),
            _ => Err(CliError::Validation(
                "This command accepts exactly one user ID".to_string(),
            )),
        }
    }

    /// Reject a role that is both granted and revoked in the same invocation
    pub fn validate_role_changes(&self) -> CliResult<()> {
        if let Some(role) = self
            .role_grants
            .iter()
            .find(|role| self.role_revokes.contains(role))
        {
            return Err(CliError::Validation(format!(
                "Role '{role}' cannot be granted and revoked in the same command"
            )));
        }
        Ok(())
    }
}
