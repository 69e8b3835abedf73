//! Replay command implementation.
//!
//! Feeds a recorded session through a fresh controller and prints every
//! effect the controller emits, followed by the final state.

use std::path::Path;

use anyhow::{Context, Result};
use knob_core::{KnobController, KnobEffect, KnobState, Session};
use serde::Serialize;
use tracing::info;

use super::OutputFormat;
use crate::config::Config;

/// Outcome of a replayed session.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub effects: Vec<KnobEffect>,
    pub state: KnobState,
}

/// Run `load()` then every session event through a controller.
pub fn run(config: &Config, session: &Session) -> Result<ReplayReport> {
    let mut controller = KnobController::with_config(config.knob.clone())?;
    let mut effects = controller.load();
    effects.extend(controller.replay(session));
    Ok(ReplayReport {
        effects,
        state: *controller.state(),
    })
}

/// Replay a session file and print the result.
pub fn execute(config: &Config, path: &Path, format: OutputFormat) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {}", path.display()))?;
    let session = Session::from_json(&contents)
        .with_context(|| format!("Failed to parse session {}", path.display()))?;

    info!(
        path = %path.display(),
        events = session.events.len(),
        "Replaying session"
    );
    let report = run(config, &session)?;

    match format {
        OutputFormat::Text => {
            for effect in &report.effects {
                println!("{}", describe(effect));
            }
            println!(
                "final: on={} angle={:.2}° dragging={}",
                report.state.is_on,
                report.state.current_angle_deg(),
                report.state.is_dragging()
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// One-line description of an effect.
pub fn describe(effect: &KnobEffect) -> String {
    match effect {
        KnobEffect::SwitchSelected(selected) => format!("switch_selected {}", selected),
        KnobEffect::KnobVisible(visible) => format!("knob_visible {}", visible),
        KnobEffect::Background(color) => format!(
            "background h={:.4} s={:.2} b={:.2} a={:.2} {}",
            color.hue,
            color.saturation,
            color.brightness,
            color.alpha,
            color.to_hex()
        ),
        KnobEffect::KnobRotation(transform) => format!(
            "knob_rotation {:.2}°",
            transform.rotation_angle().to_degrees()
        ),
    }
}
