//! Configuration management for the rolestore CLI

mod paths;
mod settings;

pub use paths::ConfigPaths;
pub use settings::Config;

/// Default role-store endpoint used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Path prefix of the role-store REST API
pub const API_PREFIX: &str = "/role-store/api/v1";
