//! Bounded-angle knob gesture tracking with a linear angle-to-hue mapping.
//!
//! This crate holds the whole behaviour of the "Colors" screen: a switch that
//! reveals a knob, a drag gesture that rotates the knob within a fixed arc, and
//! a background color derived from the knob angle. It knows nothing about any
//! UI toolkit. A host feeds it discrete input events and renders the effects
//! it returns.
//!
//! ## Core Concepts
//!
//! - **KnobState**: switch flag, current angle and the optional drag origin
//! - **KnobEvent**: a toggle or touch event delivered by the host
//! - **KnobEffect**: a rendering instruction (visibility, background, rotation)
//! - **PresentationHost**: the rendering sink effects are applied to
//! - **KnobController**: owns the state and turns events into effects
//!
//! ## The Gesture Model
//!
//! ```text
//! touch begin  inside radius  -> drag_origin = (atan2 at touch, visual rotation)
//! touch move   on the knob    -> delta     = origin.start_angle - atan2 at touch
//!                                candidate = current_angle + delta
//!                                candidate in [min, max] ? commit + rotate(-delta) : reject
//! touch end    on the knob    -> drag_origin = None
//! ```
//!
//! The start angle is never re-based between moves, so deltas chain onto the
//! committed angle. A move that would leave the arc is dropped whole, which
//! gives a hard stop at both limits.

mod color;
pub mod config;
mod controller;
mod effect;
mod error;
mod event;
mod geometry;
mod state;
#[cfg(any(test, feature = "test-fixtures"))]
pub mod test_fixtures;

pub use color::Hsba;
pub use config::{ColorPreset, KnobConfig};
pub use controller::KnobController;
pub use effect::{KnobEffect, PresentationHost};
pub use error::{KnobError, KnobResult};
pub use event::{KnobEvent, Session};
pub use geometry::{Affine2, KnobGeometry, Point};
pub use state::{DragOrigin, KnobState};
