//! Hue/saturation/brightness colors sent to the host.

use serde::{Deserialize, Serialize};

/// A color in HSB space with alpha, every component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsba {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    #[serde(default = "opaque")]
    pub alpha: f64,
}

fn opaque() -> f64 {
    1.0
}

impl Hsba {
    pub const fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    /// Fully opaque color.
    pub const fn opaque(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::new(hue, saturation, brightness, 1.0)
    }

    /// Convert to 8-bit RGBA.
    ///
    /// A hue of exactly 1.0 wraps to red, like 0.0.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let h = (self.hue.clamp(0.0, 1.0) * 6.0) % 6.0;
        let s = self.saturation.clamp(0.0, 1.0);
        let v = self.brightness.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |channel: f64| ((channel + m) * 255.0).round() as u8;
        let alpha = (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to_u8(r), to_u8(g), to_u8(b), alpha]
    }

    /// `#rrggbb` hex string, alpha dropped.
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}
