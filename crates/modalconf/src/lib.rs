//! Minimal configuration loading for the modal CLI.
//!
//! # Config File Locations
//!
//! Files are loaded in order (later wins):
//! 1. `/etc/modal/config.toml` (system)
//! 2. `~/.config/modal/config.toml` (user)
//! 3. `./modal.toml` (local override), or the path passed with `--config`
//! 4. Environment variables (`MODAL_*`, `RUST_LOG`)
//!
//! # Example Config
//!
//! ```toml
//! [defaults]
//! root = "D"
//! scale = "melodic minor"
//! mode = 3
//! level = 11
//!
//! [output]
//! format = "json"
//! unclassified = "n/a"
//!
//! [telemetry]
//! log_level = "debug"
//! ```

pub mod loader;
pub mod settings;

pub use loader::{discover_config_files_with_override, ConfigSources};
pub use settings::{DefaultsConfig, OutputConfig, OutputFormat, TelemetryConfig, UnknownFormat};

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Complete modal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModalConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl ModalConfig {
    /// Load configuration from all standard sources, with `config_path`
    /// replacing `./modal.toml`, and report which files and env vars
    /// contributed.
    pub fn load_with_sources_from(
        config_path: Option<&Path>,
    ) -> Result<(Self, ConfigSources), ConfigError> {
        let mut sources = ConfigSources::default();
        let mut config = ModalConfig::default();

        for path in loader::discover_config_files_with_override(config_path) {
            loader::load_file_into(&mut config, &path)?;
            sources.files.push(path);
        }

        loader::apply_env_overrides(&mut config, &mut sources);

        Ok((config, sources))
    }

    /// Serialize config to TOML string. Loading the result back yields the
    /// same configuration.
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# modal configuration\n\n");

        output.push_str("[defaults]\n");
        let _ = writeln!(output, "root = {}", toml_string(&self.defaults.root));
        let _ = writeln!(output, "scale = {}", toml_string(&self.defaults.scale));
        let _ = writeln!(output, "mode = {}", self.defaults.mode);
        let _ = writeln!(output, "level = {}", self.defaults.level);

        output.push_str("\n[output]\n");
        let _ = writeln!(output, "format = \"{}\"", self.output.format);
        let _ = writeln!(output, "unclassified = {}", toml_string(&self.output.unclassified));

        output.push_str("\n[telemetry]\n");
        let _ = writeln!(output, "log_level = {}", toml_string(&self.telemetry.log_level));

        output
    }
}

/// A TOML basic string, escaped the way TOML expects.
fn toml_string(value: &str) -> toml::Value {
    toml::Value::String(value.to_string())
}
