//! Platform-specific configuration paths

use crate::error::{CliError, CliResult};
use std::path::{Path, PathBuf};

/// Configuration paths for the rolestore CLI
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Path to config.json
    pub config_file: PathBuf,
}

impl ConfigPaths {
    /// Get configuration paths for the current platform
    ///
    /// Paths:
    /// - Linux: ~/.config/rolestore/
    /// - macOS: ~/Library/Application Support/rolestore/
    /// - Windows: %APPDATA%\rolestore\
    pub fn new() -> CliResult<Self> {
        Ok(Self {
            config_file: Self::get_config_dir()?.join("config.json"),
        })
    }

    /// Paths rooted at an explicit config file (`--config`)
    pub fn from_file(file: &Path) -> Self {
        Self {
            config_file: file.to_path_buf(),
        }
    }

    /// Get the configuration directory, respecting ROLESTORE_CONFIG_DIR env var
    fn get_config_dir() -> CliResult<PathBuf> {
        if let Ok(dir) = std::env::var("ROLESTORE_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let base_dir = dirs::config_dir().ok_or_else(|| {
            CliError::Config("Could not determine configuration directory".to_string())
        })?;

        Ok(base_dir.join("rolestore"))
    }
}
