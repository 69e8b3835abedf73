//! Painting helpers for the switch, the knob and the readout overlay.

mod widgets;

pub use widgets::{draw_knob, draw_readout, draw_switch, indicator_tip};
