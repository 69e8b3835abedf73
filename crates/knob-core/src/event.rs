//! Input events delivered by the host, and recorded sessions of them.

use serde::{Deserialize, Serialize};

use crate::error::KnobResult;
use crate::geometry::{KnobGeometry, Point};

/// A discrete input event, in delivery order.
///
/// Touch points are in knob-local coordinates. `on_knob` tells whether the
/// touch's originating view is the knob; it defaults to `true` in recorded
/// sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KnobEvent {
    /// The switch button was tapped.
    Toggle,
    /// The switch was set to an explicit position.
    SetSwitch { on: bool },
    TouchBegin { point: Point },
    TouchMove {
        point: Point,
        #[serde(default = "on_knob")]
        on_knob: bool,
    },
    TouchEnd {
        #[serde(default = "on_knob")]
        on_knob: bool,
    },
}

fn on_knob() -> bool {
    true
}

/// A recorded sequence of events against one knob geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub geometry: KnobGeometry,
    #[serde(default)]
    pub events: Vec<KnobEvent>,
}

impl Session {
    pub fn new(geometry: KnobGeometry, events: Vec<KnobEvent>) -> Self {
        Self { geometry, events }
    }

    /// Decode a session from JSON. Geometry is validated while decoding.
    pub fn from_json(json: &str) -> KnobResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
