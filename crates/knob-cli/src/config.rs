//! CLI configuration management.
//!
//! The knob config is resolved from defaults, then a JSON config file, then
//! `KNOB_*` environment variables. The file location is the platform config
//! directory unless `--config` / `KNOB_CONFIG` points elsewhere.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use knob_core::KnobConfig;

/// Environment variables that override individual config fields.
pub const ENV_OVERRIDES: [(&str, &str); 9] = [
    ("KNOB_MIN_ANGLE", "min-angle"),
    ("KNOB_MAX_ANGLE", "max-angle"),
    ("KNOB_REST_ANGLE", "rest-angle"),
    ("KNOB_REST_SATURATION", "rest-saturation"),
    ("KNOB_REST_BRIGHTNESS", "rest-brightness"),
    ("KNOB_DRAG_SATURATION", "drag-saturation"),
    ("KNOB_DRAG_BRIGHTNESS", "drag-brightness"),
    ("KNOB_OFF_BRIGHTNESS", "off-brightness"),
    ("KNOB_OFF_ALPHA", "off-alpha"),
];

/// Keys accepted by `knob config get/set`.
pub const KEYS: [&str; 9] = [
    "min-angle",
    "max-angle",
    "rest-angle",
    "rest-saturation",
    "rest-brightness",
    "drag-saturation",
    "drag-brightness",
    "off-brightness",
    "off-alpha",
];

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Knob arc and colors.
    pub knob: KnobConfig,

    /// Config file this configuration reads from and saves to.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::load_file(explicit_path)?;

        // Environment variables take precedence over the file
        config.apply_overrides(|var| std::env::var(var).ok())?;

        config.knob.validate()?;
        Ok(config)
    }

    /// Apply every `KNOB_*` override that `lookup` resolves.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        for (var, key) in ENV_OVERRIDES {
            if let Some(value) = lookup(var) {
                self.set(key, &value)
                    .with_context(|| format!("Invalid value in {}", var))?;
            }
        }
        Ok(())
    }

    /// Load configuration from the config file only (no environment overrides).
    pub fn load_file(explicit_path: Option<&Path>) -> Result<Self> {
        let path = explicit_path
            .map(Path::to_path_buf)
            .or_else(Self::config_file_path);

        let knob = match &path {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path).with_context(|| {
                    format!("Failed to read config from {}", path.display())
                })?;
                KnobConfig::from_json(&contents)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))?
            }
            _ => KnobConfig::default(),
        };

        Ok(Self { knob, path })
    }

    /// Save the knob configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let Some(config_path) = &self.path else {
            anyhow::bail!("No config file location available; pass --config <path>");
        };
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
        }
        let contents = self.knob.to_json_pretty()?;
        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        Ok(())
    }

    /// Get the path to the default config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "colors-knob", "knob")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Read a config value by key.
    pub fn get(&self, key: &str) -> Result<f64> {
        let knob = &self.knob;
        let value = match key {
            "min-angle" => knob.min_angle_deg,
            "max-angle" => knob.max_angle_deg,
            "rest-angle" => knob.rest_angle_deg,
            "rest-saturation" => knob.rest_color.saturation,
            "rest-brightness" => knob.rest_color.brightness,
            "drag-saturation" => knob.drag_color.saturation,
            "drag-brightness" => knob.drag_color.brightness,
            "off-brightness" => knob.off_color.brightness,
            "off-alpha" => knob.off_color.alpha,
            _ => anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, KEYS.join(", ")),
        };
        Ok(value)
    }

    /// Set a config value by key. Does not validate the whole config.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("Not a number: {}", value))?;

        let knob = &mut self.knob;
        let slot = match key {
            "min-angle" => &mut knob.min_angle_deg,
            "max-angle" => &mut knob.max_angle_deg,
            "rest-angle" => &mut knob.rest_angle_deg,
            "rest-saturation" => &mut knob.rest_color.saturation,
            "rest-brightness" => &mut knob.rest_color.brightness,
            "drag-saturation" => &mut knob.drag_color.saturation,
            "drag-brightness" => &mut knob.drag_color.brightness,
            "off-brightness" => &mut knob.off_color.brightness,
            "off-alpha" => &mut knob.off_color.alpha,
            _ => anyhow::bail!("Unknown config key: {}. Valid keys: {}", key, KEYS.join(", ")),
        };
        *slot = parsed;
        Ok(())
    }
}
