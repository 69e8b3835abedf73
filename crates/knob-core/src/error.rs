//! Error types for knob construction and session loading.
//!
//! Gesture handling itself never fails; these errors only surface when a
//! configuration, a geometry or a recorded session is built from outside data.

use thiserror::Error;

/// Result type alias for knob operations.
pub type KnobResult<T> = Result<T, KnobError>;

/// Errors that can occur while building knob inputs.
#[derive(Debug, Error)]
pub enum KnobError {
    /// The rotation arc is empty, inverted or not finite.
    #[error("invalid arc: min {min_deg}° must be finite and below max {max_deg}°")]
    InvalidArc { min_deg: f64, max_deg: f64 },

    /// The rest angle does not lie on the rotation arc.
    #[error("rest angle {rest_deg}° lies outside [{min_deg}°, {max_deg}°]")]
    RestAngleOutsideArc {
        rest_deg: f64,
        min_deg: f64,
        max_deg: f64,
    },

    /// A color component is outside `[0, 1]`.
    #[error("color component {component} = {value} is outside [0, 1]")]
    ColorOutOfRange { component: &'static str, value: f64 },

    /// The knob radius is zero, negative or not finite.
    #[error("degenerate knob geometry: radius {radius}")]
    DegenerateGeometry { radius: f64 },

    /// A session or config document could not be decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
