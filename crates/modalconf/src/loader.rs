//! Config file discovery, loading, and environment variable overlay.

use crate::{ConfigError, ModalConfig, OutputFormat};
use std::env;
use std::path::{Path, PathBuf};

/// Information about where config values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config files that were loaded (in order)
    pub files: Vec<PathBuf>,
    /// Environment variables that overrode config values
    pub env_overrides: Vec<String>,
}

/// Discover config files in load order (system, user, local).
///
/// Only files that exist are returned, except a CLI path: it replaces the
/// local `modal.toml` and is kept even when missing so that loading it
/// reports the error.
pub fn discover_config_files_with_override(cli_path: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let system = PathBuf::from("/etc/modal/config.toml");
    if system.exists() {
        files.push(system);
    }

    // XDG_CONFIG_HOME or ~/.config
    if let Some(config_dir) = directories::BaseDirs::new().map(|d| d.config_dir().to_path_buf()) {
        let user = config_dir.join("modal/config.toml");
        if user.exists() {
            files.push(user);
        }
    }

    if let Some(path) = cli_path {
        files.push(path.to_path_buf());
        return files;
    }

    let local = PathBuf::from("modal.toml");
    if local.exists() {
        files.push(local);
    }

    files
}

/// Load config from a TOML file on top of the defaults.
pub fn load_from_file(path: &Path) -> Result<ModalConfig, ConfigError> {
    let mut config = ModalConfig::default();
    load_file_into(&mut config, path)?;
    Ok(config)
}

/// Overlay the keys present in `path` onto `config`.
pub(crate) fn load_file_into(config: &mut ModalConfig, path: &Path) -> Result<(), ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    apply_toml(config, &contents, path)
}

/// Parse `contents` and overwrite only the keys it sets.
///
/// A known key holding the wrong TOML type is a parse error; unknown keys
/// are ignored.
fn apply_toml(config: &mut ModalConfig, contents: &str, path: &Path) -> Result<(), ConfigError> {
    let parse_error = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    let table: toml::Table = contents
        .parse()
        .map_err(|e: toml::de::Error| parse_error(e.to_string()))?;

    if let Some(defaults) = section(&table, "defaults").map_err(parse_error)? {
        if let Some(v) = string(defaults, "defaults", "root").map_err(parse_error)? {
            config.defaults.root = v.to_string();
        }
        if let Some(v) = string(defaults, "defaults", "scale").map_err(parse_error)? {
            config.defaults.scale = v.to_string();
        }
        if let Some(v) = integer(defaults, "defaults", "mode").map_err(parse_error)? {
            config.defaults.mode = usize::try_from(v)
                .map_err(|_| parse_error(format!("defaults.mode must be 0..7, got {v}")))?;
        }
        if let Some(v) = integer(defaults, "defaults", "level").map_err(parse_error)? {
            config.defaults.level = u8::try_from(v).map_err(|_| {
                parse_error(format!("defaults.level must be 3, 7, 9, 11 or 13, got {v}"))
            })?;
        }
    }

    if let Some(output) = section(&table, "output").map_err(parse_error)? {
        if let Some(v) = string(output, "output", "format").map_err(parse_error)? {
            config.output.format = v
                .parse::<OutputFormat>()
                .map_err(|e| parse_error(e.to_string()))?;
        }
        if let Some(v) = string(output, "output", "unclassified").map_err(parse_error)? {
            config.output.unclassified = v.to_string();
        }
    }

    if let Some(telemetry) = section(&table, "telemetry").map_err(parse_error)? {
        if let Some(v) = string(telemetry, "telemetry", "log_level").map_err(parse_error)? {
            config.telemetry.log_level = v.to_string();
        }
    }

    Ok(())
}

fn section<'t>(table: &'t toml::Table, name: &str) -> Result<Option<&'t toml::Table>, String> {
    match table.get(name) {
        None => Ok(None),
        Some(toml::Value::Table(section)) => Ok(Some(section)),
        Some(other) => Err(format!("[{name}] must be a table, got {}", other.type_str())),
    }
}

fn string<'t>(table: &'t toml::Table, section: &str, key: &str) -> Result<Option<&'t str>, String> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::String(v)) => Ok(Some(v.as_str())),
        Some(other) => Err(format!(
            "{section}.{key} must be a string, got {}",
            other.type_str()
        )),
    }
}

fn integer(table: &toml::Table, section: &str, key: &str) -> Result<Option<i64>, String> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::Integer(v)) => Ok(Some(*v)),
        Some(other) => Err(format!(
            "{section}.{key} must be an integer, got {}",
            other.type_str()
        )),
    }
}

/// Apply environment variable overrides to config.
pub fn apply_env_overrides(config: &mut ModalConfig, sources: &mut ConfigSources) {
    apply_overrides_from(config, sources, |key| env::var(key).ok());
}

/// Overrides from an arbitrary lookup. Unparseable numeric or format values
/// are ignored and leave the file value in place.
pub(crate) fn apply_overrides_from(
    config: &mut ModalConfig,
    sources: &mut ConfigSources,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(v) = lookup("MODAL_ROOT") {
        config.defaults.root = v;
        sources.env_overrides.push("MODAL_ROOT".to_string());
    }
    if let Some(v) = lookup("MODAL_SCALE") {
        config.defaults.scale = v;
        sources.env_overrides.push("MODAL_SCALE".to_string());
    }
    if let Some(v) = lookup("MODAL_MODE") {
        if let Ok(mode) = v.parse() {
            config.defaults.mode = mode;
            sources.env_overrides.push("MODAL_MODE".to_string());
        }
    }
    if let Some(v) = lookup("MODAL_LEVEL") {
        if let Ok(level) = v.parse() {
            config.defaults.level = level;
            sources.env_overrides.push("MODAL_LEVEL".to_string());
        }
    }
    if let Some(v) = lookup("MODAL_FORMAT") {
        if let Ok(format) = v.parse() {
            config.output.format = format;
            sources.env_overrides.push("MODAL_FORMAT".to_string());
        }
    }

    if let Some(v) = lookup("MODAL_LOG_LEVEL") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("MODAL_LOG_LEVEL".to_string());
    }
    // RUST_LOG wins over MODAL_LOG_LEVEL
    if let Some(v) = lookup("RUST_LOG") {
        config.telemetry.log_level = v;
        sources.env_overrides.push("RUST_LOG".to_string());
    }
}
