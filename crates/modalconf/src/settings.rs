//! Configuration sections.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Query defaults used when the command line leaves an argument out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Root pitch class.
    /// Default: C
    #[serde(default = "DefaultsConfig::default_root")]
    pub root: String,

    /// Parent scale family.
    /// Default: major
    #[serde(default = "DefaultsConfig::default_scale")]
    pub scale: String,

    /// Mode index within the family (0..7).
    /// Default: 0
    #[serde(default)]
    pub mode: usize,

    /// Extension level for interval classification (3, 7, 9, 11, 13).
    /// Default: 13
    #[serde(default = "DefaultsConfig::default_level")]
    pub level: u8,
}

impl DefaultsConfig {
    fn default_root() -> String {
        "C".to_string()
    }

    fn default_scale() -> String {
        "major".to_string()
    }

    fn default_level() -> u8 {
        13
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            scale: Self::default_scale(),
            mode: 0,
            level: Self::default_level(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format {0:?}: expected markdown or json")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// How results are printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default: markdown
    #[serde(default)]
    pub format: OutputFormat,

    /// Printed where no chord template matched.
    /// Default: unclassified
    #[serde(default = "OutputConfig::default_unclassified")]
    pub unclassified: String,
}

impl OutputConfig {
    fn default_unclassified() -> String {
        "unclassified".to_string()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            unclassified: Self::default_unclassified(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log filter (trace, debug, info, warn, error, or an EnvFilter directive).
    /// Default: warn
    #[serde(default = "TelemetryConfig::default_log_level")]
    pub log_level: String,
}

impl TelemetryConfig {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
        }
    }
}
