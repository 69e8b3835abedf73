//! Layout and display settings for the knob screen.

/// Sizing and overlay toggles.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    /// Knob view side as a fraction of the shorter screen side.
    pub knob_fraction: f32,
    /// Knob face radius relative to the base radius.
    pub face_ratio: f32,
    /// Switch button size in points.
    pub switch_size: egui::Vec2,
    /// Gap between the top edge and the switch.
    pub switch_margin: f32,
    /// Indicator stroke width.
    pub indicator_width: f32,
    /// Show the angle/hue readout.
    pub show_readout: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            knob_fraction: 0.6,
            face_ratio: 0.8,
            switch_size: egui::vec2(72.0, 36.0),
            switch_margin: 32.0,
            indicator_width: 4.0,
            show_readout: false,
        }
    }
}

impl ViewSettings {
    /// Side of the square knob view for an available area.
    pub fn knob_side(&self, available: egui::Vec2) -> f32 {
        (available.x.min(available.y) * self.knob_fraction).max(1.0)
    }
}
