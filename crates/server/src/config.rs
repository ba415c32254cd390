use std::{fs, path::Path};

use anyhow::Context;
use schedule_core::ReferenceOrder;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub schedule_source: String,
    pub default_first_day: bool,
    pub reference: ReferenceOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            schedule_source: "./data/schedule.csv".into(),
            default_first_day: true,
            reference: ReferenceOrder::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    bind_addr: Option<String>,
    schedule_source: Option<String>,
    default_first_day: Option<bool>,
    canonical_days: Option<Vec<String>>,
    canonical_venues: Option<Vec<String>>,
}

/// Defaults, then `server.toml` when present, then environment variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = load_file_settings(Path::new(DEFAULT_CONFIG_PATH))?;
    Ok(apply_env_overrides(settings, |key| std::env::var(key).ok()))
}

pub fn load_file_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    if !path.exists() {
        return Ok(settings);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    let file_cfg: FileConfig = toml::from_str(&raw)
        .with_context(|| format!("invalid config file '{}'", path.display()))?;

    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.schedule_source {
        settings.schedule_source = v;
    }
    if let Some(v) = file_cfg.default_first_day {
        settings.default_first_day = v;
    }
    if let Some(v) = file_cfg.canonical_days {
        settings.reference.days = v;
    }
    if let Some(v) = file_cfg.canonical_venues {
        settings.reference.venues = v;
    }
    Ok(settings)
}

/// Later keys in each list win.
pub fn apply_env_overrides<F>(mut settings: Settings, lookup: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    for key in ["SERVER_BIND", "APP__BIND_ADDR"] {
        if let Some(v) = lookup(key) {
            settings.server_bind = v;
        }
    }
    for key in ["SCHEDULE_SOURCE", "APP__SCHEDULE_SOURCE"] {
        if let Some(v) = lookup(key) {
            settings.schedule_source = v;
        }
    }
    if let Some(v) = lookup("APP__DEFAULT_FIRST_DAY") {
        match parse_flag(&v) {
            Some(flag) => settings.default_first_day = flag,
            None => tracing::warn!(value = %v, "ignoring unparseable APP__DEFAULT_FIRST_DAY"),
        }
    }
    settings
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
