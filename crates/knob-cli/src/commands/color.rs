//! Color command implementation.
//!
//! Shows the background a given knob angle produces while dragging.

use anyhow::Result;
use knob_core::{Hsba, KnobController};
use serde_json::json;

use super::OutputFormat;
use crate::config::Config;

/// Drag color for an angle in degrees, or an error if it is off the arc.
pub fn color_for(config: &Config, degrees: f64) -> Result<Hsba> {
    let knob = &config.knob;
    if !(knob.min_angle_deg..=knob.max_angle_deg).contains(&degrees) {
        anyhow::bail!(
            "Angle {}° lies outside the knob arc [{}°, {}°]",
            degrees,
            knob.min_angle_deg,
            knob.max_angle_deg
        );
    }
    let controller = KnobController::with_config(knob.clone())?;
    Ok(controller.color_from_angle(degrees.to_radians()))
}

/// Print the drag color for an angle.
pub fn execute(config: &Config, degrees: f64, format: OutputFormat) -> Result<()> {
    let color = color_for(config, degrees)?;
    let [r, g, b, a] = color.to_rgba8();

    match format {
        OutputFormat::Text => {
            println!("angle:      {:.2}°", degrees);
            println!("hue:        {:.4}", color.hue);
            println!("saturation: {:.2}", color.saturation);
            println!("brightness: {:.2}", color.brightness);
            println!("rgb:        {}", color.to_hex());
        }
        OutputFormat::Json => {
            let output = json!({
                "angle_deg": degrees,
                "color": color,
                "rgba": [r, g, b, a],
                "hex": color.to_hex(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
