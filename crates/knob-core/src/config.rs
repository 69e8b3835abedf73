//! Configuration schema for the knob.
//!
//! Angles are stored in degrees so config files stay readable; the controller
//! works in radians through the accessor methods. Every field has a serde
//! default, so `{}` deserializes to the stock knob.

use serde::{Deserialize, Serialize};

use crate::color::Hsba;
use crate::error::{KnobError, KnobResult};

/// Saturation and brightness paired with a computed hue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPreset {
    pub saturation: f64,
    pub brightness: f64,
}

impl ColorPreset {
    pub const fn new(saturation: f64, brightness: f64) -> Self {
        Self {
            saturation,
            brightness,
        }
    }

    /// Opaque color with the given hue.
    pub fn with_hue(&self, hue: f64) -> Hsba {
        Hsba::opaque(hue, self.saturation, self.brightness)
    }
}

/// Knob arc limits and color presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnobConfig {
    /// Lower end of the rotation arc, in degrees.
    #[serde(default = "default_min_angle")]
    pub min_angle_deg: f64,
    /// Upper end of the rotation arc, in degrees.
    #[serde(default = "default_max_angle")]
    pub max_angle_deg: f64,
    /// Angle the knob returns to whenever the switch is turned on.
    #[serde(default = "default_rest_angle")]
    pub rest_angle_deg: f64,
    /// Background preset applied when the switch turns on.
    #[serde(default = "default_rest_color")]
    pub rest_color: ColorPreset,
    /// Background preset applied while dragging.
    #[serde(default = "default_drag_color")]
    pub drag_color: ColorPreset,
    /// Background shown while the switch is off.
    #[serde(default = "default_off_color")]
    pub off_color: Hsba,
}

fn default_min_angle() -> f64 {
    -30.0
}

fn default_max_angle() -> f64 {
    210.0
}

fn default_rest_angle() -> f64 {
    90.0
}

fn default_rest_color() -> ColorPreset {
    ColorPreset::new(0.5, 0.75)
}

fn default_drag_color() -> ColorPreset {
    ColorPreset::new(0.75, 0.75)
}

fn default_off_color() -> Hsba {
    Hsba::opaque(0.5, 0.0, 0.2)
}

impl Default for KnobConfig {
    fn default() -> Self {
        Self {
            min_angle_deg: default_min_angle(),
            max_angle_deg: default_max_angle(),
            rest_angle_deg: default_rest_angle(),
            rest_color: default_rest_color(),
            drag_color: default_drag_color(),
            off_color: default_off_color(),
        }
    }
}

impl KnobConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> KnobResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> KnobResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn min_angle(&self) -> f64 {
        self.min_angle_deg.to_radians()
    }

    pub fn max_angle(&self) -> f64 {
        self.max_angle_deg.to_radians()
    }

    pub fn rest_angle(&self) -> f64 {
        self.rest_angle_deg.to_radians()
    }

    /// Check arc ordering, rest placement and color ranges.
    pub fn validate(&self) -> KnobResult<()> {
        let (min_deg, max_deg) = (self.min_angle_deg, self.max_angle_deg);
        if !min_deg.is_finite() || !max_deg.is_finite() || min_deg >= max_deg {
            return Err(KnobError::InvalidArc { min_deg, max_deg });
        }

        let rest_deg = self.rest_angle_deg;
        if !(min_deg..=max_deg).contains(&rest_deg) {
            return Err(KnobError::RestAngleOutsideArc {
                rest_deg,
                min_deg,
                max_deg,
            });
        }

        let components = [
            ("rest_color.saturation", self.rest_color.saturation),
            ("rest_color.brightness", self.rest_color.brightness),
            ("drag_color.saturation", self.drag_color.saturation),
            ("drag_color.brightness", self.drag_color.brightness),
            ("off_color.hue", self.off_color.hue),
            ("off_color.saturation", self.off_color.saturation),
            ("off_color.brightness", self.off_color.brightness),
            ("off_color.alpha", self.off_color.alpha),
        ];
        for (component, value) in components {
            if !(0.0..=1.0).contains(&value) {
                return Err(KnobError::ColorOutOfRange { component, value });
            }
        }

        Ok(())
    }
}
