//! Structured output of command results

use crate::error::CliResult;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON (default)
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Render a value in the requested format
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
    }
}

/// Print a command result to stdout.
///
/// Never fails: a value that cannot be serialized is reported on stderr.
pub fn emit<T: Serialize + ?Sized>(value: &T, format: OutputFormat) {
    match render(value, format) {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => eprintln!("Error: failed to render output: {e}"),
    }
}
