//! Fixtures for exercising the controller without a UI.
//!
//! Provides a recording host plus helpers that place touches at a given
//! angle around the knob center.

use crate::color::Hsba;
use crate::controller::KnobController;
use crate::effect::{KnobEffect, PresentationHost};
use crate::geometry::{Affine2, KnobGeometry, Point};

/// Host that records every effect it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub switch_selected: Option<bool>,
    pub knob_visible: Option<bool>,
    pub backgrounds: Vec<Hsba>,
    pub rotations: Vec<Affine2>,
    /// Every effect, in arrival order.
    pub received: Vec<KnobEffect>,
}

impl RecordingHost {
    pub fn last_background(&self) -> Option<Hsba> {
        self.backgrounds.last().copied()
    }

    pub fn last_rotation(&self) -> Option<Affine2> {
        self.rotations.last().copied()
    }
}

impl PresentationHost for RecordingHost {
    fn set_switch_selected(&mut self, selected: bool) {
        self.switch_selected = Some(selected);
        self.received.push(KnobEffect::SwitchSelected(selected));
    }

    fn set_knob_visible(&mut self, visible: bool) {
        self.knob_visible = Some(visible);
        self.received.push(KnobEffect::KnobVisible(visible));
    }

    fn set_background(&mut self, color: Hsba) {
        self.backgrounds.push(color);
        self.received.push(KnobEffect::Background(color));
    }

    fn set_knob_rotation(&mut self, transform: Affine2) {
        self.rotations.push(transform);
        self.received.push(KnobEffect::KnobRotation(transform));
    }
}

/// Knob of radius 100 centered in a 200 x 200 view.
pub fn knob_geometry() -> KnobGeometry {
    KnobGeometry::default()
}

/// Point halfway out from the center at `deg` degrees (atan2 convention).
pub fn touch_point(geometry: &KnobGeometry, deg: f64) -> Point {
    let reach = geometry.radius() / 2.0;
    let (sin, cos) = deg.to_radians().sin_cos();
    let center = geometry.center();
    Point::new(center.x + reach * cos, center.y + reach * sin)
}

/// Controller with the switch already on.
pub fn switched_on() -> KnobController {
    let mut knob = KnobController::new();
    knob.set_switch(true);
    knob
}

/// Begin a touch at `from_deg` and move it to `to_deg` in a single step.
pub fn drag_to(
    knob: &mut KnobController,
    geometry: &KnobGeometry,
    from_deg: f64,
    to_deg: f64,
) -> Vec<KnobEffect> {
    knob.handle_touch_begin(touch_point(geometry, from_deg), geometry);
    knob.handle_touch_move(touch_point(geometry, to_deg), geometry, true)
}
