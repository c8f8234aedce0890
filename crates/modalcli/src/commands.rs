//! Subcommand implementations. Each returns the text to print on stdout.

use std::fmt::Write;

use anyhow::{Context, Result};
use modal::render::{harmonization_table, mode_summary};
use modal::{Interval, ModalEngine, ScaleFamily};
use modalconf::{ModalConfig, OutputFormat};
use serde_json::json;
use tracing::debug;

/// Root, scale and mode as given on the command line, before defaults.
#[derive(Debug, Default)]
pub struct ModeQuery {
    pub root: Option<String>,
    pub scale: Option<String>,
    pub mode: Option<usize>,
}

impl ModeQuery {
    fn fill<'a>(&'a self, config: &'a ModalConfig) -> (&'a str, &'a str, usize) {
        (
            self.root.as_deref().unwrap_or(&config.defaults.root),
            self.scale.as_deref().unwrap_or(&config.defaults.scale),
            self.mode.unwrap_or(config.defaults.mode),
        )
    }
}

pub fn mode(
    engine: &ModalEngine,
    config: &ModalConfig,
    format: OutputFormat,
    query: &ModeQuery,
) -> Result<String> {
    let (root, scale, index) = query.fill(config);
    debug!(root, scale, index, "resolving mode");

    let mode = engine
        .resolve_named(root, scale, index)
        .with_context(|| format!("cannot resolve mode {index} of {root} {scale}"))?;

    match format {
        OutputFormat::Markdown => Ok(mode_summary(&mode, &config.output.unclassified)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&mode)?),
    }
}

pub fn harmonize(
    engine: &ModalEngine,
    config: &ModalConfig,
    format: OutputFormat,
    query: &ModeQuery,
) -> Result<String> {
    let (root, scale, index) = query.fill(config);
    debug!(root, scale, index, "harmonizing");

    let harmonization = engine
        .harmonize_named(root, scale, index)
        .with_context(|| format!("cannot harmonize mode {index} of {root} {scale}"))?;

    match format {
        OutputFormat::Markdown => Ok(harmonization_table(
            &harmonization,
            &config.output.unclassified,
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&harmonization)?),
    }
}

pub fn chord(
    engine: &ModalEngine,
    config: &ModalConfig,
    format: OutputFormat,
    intervals: &[Interval],
    level: Option<u8>,
) -> Result<String> {
    let level = level.unwrap_or(config.defaults.level);
    let symbol = engine
        .classify(intervals, level)
        .with_context(|| format!("cannot classify {intervals:?}"))?
        .map(|symbol| symbol.to_string());

    match format {
        OutputFormat::Markdown => {
            Ok(symbol.unwrap_or_else(|| config.output.unclassified.clone()) + "\n")
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "intervals": intervals,
            "level": level,
            "chord": symbol,
        }))?),
    }
}

pub fn modes(
    engine: &ModalEngine,
    config: &ModalConfig,
    format: OutputFormat,
    scale: Option<&str>,
) -> Result<String> {
    let scale = scale.unwrap_or(&config.defaults.scale);
    let family: ScaleFamily = scale
        .parse()
        .with_context(|| format!("cannot list modes of {scale:?}"))?;
    let names = engine.list_mode_names(family);

    match format {
        OutputFormat::Markdown => {
            let mut out = format!("## {family}\n\n");
            for (index, name) in names.iter().enumerate() {
                let _ = writeln!(out, "{index}. {name}");
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "scale": family.name(),
            "modes": names,
        }))?),
    }
}

pub fn show_config(config: &ModalConfig) -> String {
    config.to_toml()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(root: &str, scale: &str, mode: usize) -> ModeQuery {
        ModeQuery {
            root: Some(root.to_string()),
            scale: Some(scale.to_string()),
            mode: Some(mode),
        }
    }

    #[test]
    fn omitted_arguments_use_config_defaults() {
        let mut config = ModalConfig::default();
        config.defaults.root = "D".to_string();
        config.defaults.mode = 1;

        let out = mode(
            &ModalEngine::new(),
            &config,
            OutputFormat::Markdown,
            &ModeQuery::default(),
        )
        .unwrap();
        assert!(out.starts_with("## D Dorian"), "{out}");
    }

    #[test]
    fn json_mode_has_chords() {
        let out = mode(
            &ModalEngine::new(),
            &ModalConfig::default(),
            OutputFormat::Json,
            &query("G", "major", 4),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["seventh"], "G7");
        assert_eq!(value["notes"][0], "G");
    }

    #[test]
    fn invalid_root_keeps_message() {
        let err = harmonize(
            &ModalEngine::new(),
            &ModalConfig::default(),
            OutputFormat::Markdown,
            &query("H", "major", 0),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid root note"));
    }

    #[test]
    fn chord_miss_prints_marker() {
        let mut config = ModalConfig::default();
        config.output.unclassified = "--".to_string();
        let out = chord(
            &ModalEngine::new(),
            &config,
            OutputFormat::Markdown,
            &[0, 1, 2],
            None,
        )
        .unwrap();
        assert_eq!(out, "--\n");
    }

    #[test]
    fn modes_listing() {
        let out = modes(
            &ModalEngine::new(),
            &ModalConfig::default(),
            OutputFormat::Markdown,
            Some("melodic minor"),
        )
        .unwrap();
        assert!(out.contains("6. super locrian"), "{out}");
    }
}
