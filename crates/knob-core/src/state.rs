//! Knob state: switch flag, committed angle and the active drag origin.

use serde::{Deserialize, Serialize};

use crate::geometry::Affine2;

/// Where the active drag started.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragOrigin {
    /// Touch angle recorded at touch begin. Never re-based during the drag.
    pub start_angle: f64,
    /// Knob image rotation the next accepted move composes onto.
    pub reference_rotation: Affine2,
}

/// Complete state of the knob screen.
///
/// `drag_origin` is `Some` only while a touch that began inside the hit
/// radius is being tracked. `current_angle` stays within the configured arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnobState {
    pub is_on: bool,
    /// Committed knob angle in radians.
    pub current_angle: f64,
    pub drag_origin: Option<DragOrigin>,
}

impl KnobState {
    /// Switch off, knob at `rest_angle`, no drag.
    pub fn new(rest_angle: f64) -> Self {
        Self {
            is_on: false,
            current_angle: rest_angle,
            drag_origin: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Committed angle in degrees.
    pub fn current_angle_deg(&self) -> f64 {
        self.current_angle.to_degrees()
    }
}
