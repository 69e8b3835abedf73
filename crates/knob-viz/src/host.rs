//! Presentation state the app renders from.

use egui::Color32;
use knob_core::{Affine2, Hsba, KnobConfig, PresentationHost};

/// Convert a core color to an egui color.
pub fn to_color32(color: Hsba) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// What is currently on screen, as last set by the controller.
#[derive(Debug, Clone)]
pub struct HostView {
    pub background: Hsba,
    pub knob_visible: bool,
    pub switch_selected: bool,
    pub knob_rotation: Affine2,
}

impl HostView {
    /// View before any effect arrives: the configured off background.
    pub fn new(config: &KnobConfig) -> Self {
        Self {
            background: config.off_color,
            knob_visible: false,
            switch_selected: false,
            knob_rotation: Affine2::IDENTITY,
        }
    }

    pub fn background_color(&self) -> Color32 {
        to_color32(self.background)
    }
}

impl PresentationHost for HostView {
    fn set_switch_selected(&mut self, selected: bool) {
        self.switch_selected = selected;
    }

    fn set_knob_visible(&mut self, visible: bool) {
        self.knob_visible = visible;
    }

    fn set_background(&mut self, color: Hsba) {
        self.background = color;
    }

    fn set_knob_rotation(&mut self, transform: Affine2) {
        self.knob_rotation = transform;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knob_core::{KnobController, KnobEffect};

    #[test]
    fn test_off_background_is_dark_gray() {
        let view = HostView::new(&KnobConfig::default());
        assert_eq!(view.background_color(), Color32::from_rgb(51, 51, 51));
    }

    #[test]
    fn test_switch_on_updates_view() {
        let mut knob = KnobController::new();
        let mut view = HostView::new(knob.config());
        KnobEffect::apply_all(&knob.set_switch(true), &mut view);

        assert!(view.knob_visible);
        assert!(view.switch_selected);
        assert_eq!(view.background_color(), Color32::from_rgb(96, 191, 191));
    }
}
