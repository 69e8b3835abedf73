//! Pointer-to-touch translation.
//!
//! egui reports a single primary pointer. A press starts a gesture; the
//! gesture belongs to the knob only if the press landed inside the knob's
//! view. Moves and the release carry that ownership to the controller.

use knob_core::{KnobEvent, Point};

/// Phase of the primary pointer in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Pressed,
    Moved,
    Released,
}

/// Tracks the active pointer gesture.
#[derive(Debug, Clone, Default)]
pub struct PointerGesture {
    /// Whether a press is being tracked
    pub tracking: bool,
    /// Whether the tracked press started inside the knob view
    pub on_knob: bool,
    /// Last knob-local position seen
    pub last_point: Option<Point>,
}

impl PointerGesture {
    /// Translate one pointer phase into a knob event.
    ///
    /// `point` is in knob-local coordinates; `inside_view` tells whether the
    /// pointer is over the knob's view rectangle.
    pub fn translate(
        &mut self,
        phase: PointerPhase,
        point: Point,
        inside_view: bool,
    ) -> Option<KnobEvent> {
        match phase {
            PointerPhase::Pressed => {
                self.tracking = true;
                self.on_knob = inside_view;
                self.last_point = Some(point);
                inside_view.then_some(KnobEvent::TouchBegin { point })
            }
            PointerPhase::Moved => {
                if !self.tracking || self.last_point == Some(point) {
                    return None;
                }
                self.last_point = Some(point);
                Some(KnobEvent::TouchMove {
                    point,
                    on_knob: self.on_knob,
                })
            }
            PointerPhase::Released => {
                if !self.tracking {
                    return None;
                }
                let on_knob = self.on_knob;
                self.clear();
                Some(KnobEvent::TouchEnd { on_knob })
            }
        }
    }

    pub fn clear(&mut self) {
        self.tracking = false;
        self.on_knob = false;
        self.last_point = None;
    }
}
