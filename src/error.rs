//! CLI error types and exit codes

use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error (configuration, I/O, fatal usage)
/// - 2: Authentication required
/// - 3: Network error
/// - 4: Validation error
/// - 5: Server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No access token configured. Set ROLESTORE_TOKEN or add access_token to the config file.")]
    NotAuthenticated,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check your internet connection\n  - Verify the API endpoint is correct\n  - Try again in a few moments")]
    ConnectionFailed(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Usage error that terminates the process instead of being reported
    /// like the other errors.
    #[error("{0}")]
    FatalUsage(String),

    #[error("Cannot read settings patch '{path}': {reason}")]
    PatchFile { path: String, reason: String },

    #[error("Server error: {0}")]
    Server(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotAuthenticated => 2,
            CliError::Network(_) | CliError::ConnectionFailed(_) => 3,
            CliError::Validation(_) | CliError::PatchFile { .. } => 4,
            CliError::NotFound(_) => 4,
            CliError::Server(_) => 5,
            CliError::Api { status, .. } => {
                if *status >= 500 {
                    5
                } else if *status == 401 || *status == 403 {
                    2
                } else {
                    4
                }
            }
            CliError::FatalUsage(_) => 1,
            CliError::Config(_) => 1,
            CliError::Io(_) => 1,
        }
    }

    /// Whether the top level should terminate immediately on this error
    /// rather than report it through the regular error path.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CliError::FatalUsage(_))
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::NotAuthenticated => {
                Some("Export ROLESTORE_TOKEN=<token> or run with --config <file>.")
            }
            CliError::ConnectionFailed(_) => Some("Check your network connection and try again."),
            CliError::PatchFile { .. } => Some("The settings patch must be a readable JSON file."),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            CliError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            CliError::Network("Request timed out".to_string())
        } else if e.is_decode() {
            CliError::Server(format!("Unexpected response body: {e}"))
        } else {
            CliError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("JSON error: {}", e))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Config(format!("YAML error: {}", e))
    }
}
