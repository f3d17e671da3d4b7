//! Verbosity levels selected by the global `--verbose` / `--debug` flags

use std::fmt;

/// Verbosity level for diagnostic output on stderr
///
/// Levels are ordered: Normal < Verbose < Debug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Warnings and errors only (default)
    #[default]
    Normal,
    /// One line per handler step
    Verbose,
    /// Every HTTP request with status and timing
    Debug,
}

impl LogLevel {
    /// Create LogLevel from CLI flags; debug takes precedence over verbose
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::Normal => "warn",
            Self::Verbose => "warn,rolestore=info,rolestore_cli=info",
            Self::Debug => "warn,rolestore=debug,rolestore_cli=debug",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
