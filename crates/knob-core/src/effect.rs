//! Rendering effects and the host that applies them.

use serde::{Deserialize, Serialize};

use crate::color::Hsba;
use crate::geometry::Affine2;

/// A rendering instruction emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum KnobEffect {
    /// Show the switch in its selected (on) or deselected (off) appearance.
    SwitchSelected(bool),
    /// Show or hide the knob and its base.
    KnobVisible(bool),
    /// Repaint the screen background.
    Background(Hsba),
    /// Transform to apply to the knob image.
    KnobRotation(Affine2),
}

impl KnobEffect {
    /// Route this effect to the matching host callback.
    pub fn apply<H: PresentationHost + ?Sized>(&self, host: &mut H) {
        match *self {
            KnobEffect::SwitchSelected(selected) => host.set_switch_selected(selected),
            KnobEffect::KnobVisible(visible) => host.set_knob_visible(visible),
            KnobEffect::Background(color) => host.set_background(color),
            KnobEffect::KnobRotation(transform) => host.set_knob_rotation(transform),
        }
    }

    /// Apply a batch of effects in order.
    pub fn apply_all<H: PresentationHost + ?Sized>(effects: &[KnobEffect], host: &mut H) {
        for effect in effects {
            effect.apply(host);
        }
    }

    pub fn as_background(&self) -> Option<Hsba> {
        match self {
            KnobEffect::Background(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_rotation(&self) -> Option<Affine2> {
        match self {
            KnobEffect::KnobRotation(transform) => Some(*transform),
            _ => None,
        }
    }
}

/// Rendering sink supplied by the host.
///
/// Hosts without a distinct switch appearance can keep the default no-op
/// `set_switch_selected`.
pub trait PresentationHost {
    fn set_switch_selected(&mut self, _selected: bool) {}

    fn set_knob_visible(&mut self, visible: bool);

    fn set_background(&mut self, color: Hsba);

    fn set_knob_rotation(&mut self, transform: Affine2);
}
