//! Config command implementation.
//!
//! Manages the knob configuration file.

use anyhow::Result;
use knob_core::KnobConfig;

use crate::config::Config;

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    let knob = &config.knob;
    println!("Colors Knob Configuration");
    println!("{:-<40}", "");
    println!(
        "Arc:              {}° .. {}°",
        knob.min_angle_deg, knob.max_angle_deg
    );
    println!("Rest Angle:       {}°", knob.rest_angle_deg);
    println!(
        "Rest Color:       s={} b={}",
        knob.rest_color.saturation, knob.rest_color.brightness
    );
    println!(
        "Drag Color:       s={} b={}",
        knob.drag_color.saturation, knob.drag_color.brightness
    );
    println!(
        "Off Color:        h={} s={} b={} a={} ({})",
        knob.off_color.hue,
        knob.off_color.saturation,
        knob.off_color.brightness,
        knob.off_color.alpha,
        knob.off_color.to_hex()
    );

    match &config.path {
        Some(path) if path.exists() => println!("\nConfig file: {}", path.display()),
        Some(path) => println!("\nConfig file: {} (not created)", path.display()),
        None => println!("\nConfig file: (no location available)"),
    }

    Ok(())
}

/// Set a configuration value and save it.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    config.knob.validate()?;
    config.save()?;
    println!("Set {} to: {}", key, config.get(key)?);
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    println!("{}", config.get(key)?);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset(config: &mut Config) -> Result<()> {
    config.knob = KnobConfig::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
