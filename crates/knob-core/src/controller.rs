//! The knob controller: owns `KnobState` and turns input events into effects.

use tracing::{debug, trace};

use crate::color::Hsba;
use crate::config::KnobConfig;
use crate::effect::{KnobEffect, PresentationHost};
use crate::error::KnobResult;
use crate::event::{KnobEvent, Session};
use crate::geometry::{Affine2, KnobGeometry, Point};
use crate::state::{DragOrigin, KnobState};

/// Slack allowed on the arc bounds so a move landing exactly on a limit is
/// not lost to rounding. Committed angles are still clamped into the arc.
const ANGLE_TOLERANCE: f64 = 1e-9;

/// Single-screen knob controller.
///
/// All operations run synchronously on the host's event thread and never
/// fail. Events must be handed over in delivery order: accepted move deltas
/// chain onto the committed angle.
#[derive(Debug, Clone)]
pub struct KnobController {
    config: KnobConfig,
    state: KnobState,
    /// Mirror of the transform currently applied to the knob image.
    knob_rotation: Affine2,
}

impl Default for KnobController {
    fn default() -> Self {
        Self::new()
    }
}

impl KnobController {
    /// Controller with the stock -30°..210° arc.
    pub fn new() -> Self {
        let config = KnobConfig::default();
        let state = KnobState::new(config.rest_angle());
        Self {
            config,
            state,
            knob_rotation: Affine2::IDENTITY,
        }
    }

    /// Controller with a custom configuration, validated first.
    pub fn with_config(config: KnobConfig) -> KnobResult<Self> {
        config.validate()?;
        let state = KnobState::new(config.rest_angle());
        Ok(Self {
            config,
            state,
            knob_rotation: Affine2::IDENTITY,
        })
    }

    pub fn state(&self) -> &KnobState {
        &self.state
    }

    pub fn config(&self) -> &KnobConfig {
        &self.config
    }

    pub fn knob_rotation(&self) -> Affine2 {
        self.knob_rotation
    }

    /// Initial presentation: switch off, knob hidden, off background.
    ///
    /// Also returns the state to its freshly created value.
    pub fn load(&mut self) -> Vec<KnobEffect> {
        self.state = KnobState::new(self.config.rest_angle());
        self.knob_rotation = Affine2::IDENTITY;
        vec![
            KnobEffect::SwitchSelected(false),
            KnobEffect::KnobRotation(self.knob_rotation),
            KnobEffect::KnobVisible(false),
            KnobEffect::Background(self.config.off_color),
        ]
    }

    /// Flip the switch.
    pub fn toggle_switch(&mut self) -> Vec<KnobEffect> {
        self.set_switch(!self.state.is_on)
    }

    /// Set the switch position.
    ///
    /// Turning on always resets the knob to its rest angle, even if it was
    /// already on.
    pub fn set_switch(&mut self, on: bool) -> Vec<KnobEffect> {
        self.state.is_on = on;
        self.state.drag_origin = None;

        if on {
            self.state.current_angle = self.config.rest_angle();
            self.knob_rotation = Affine2::IDENTITY;
            let background = self
                .config
                .rest_color
                .with_hue(self.hue_for_angle(self.state.current_angle));
            debug!(angle_deg = self.state.current_angle_deg(), "Switch on");
            vec![
                KnobEffect::SwitchSelected(true),
                KnobEffect::KnobRotation(self.knob_rotation),
                KnobEffect::KnobVisible(true),
                KnobEffect::Background(background),
            ]
        } else {
            debug!("Switch off");
            vec![
                KnobEffect::SwitchSelected(false),
                KnobEffect::Background(self.config.off_color),
                KnobEffect::KnobVisible(false),
            ]
        }
    }

    /// Start tracking a drag if `point` lies within the knob radius.
    ///
    /// Returns whether a drag origin was recorded. Touches are ignored while
    /// the switch is off.
    pub fn handle_touch_begin(&mut self, point: Point, geometry: &KnobGeometry) -> bool {
        if !self.state.is_on {
            trace!("Touch began while switched off");
            return false;
        }
        if !geometry.contains(point) {
            trace!(
                distance = point.distance(geometry.center()),
                radius = geometry.radius(),
                "Touch began outside knob"
            );
            return false;
        }

        let start_angle = geometry.angle_of(point);
        self.state.drag_origin = Some(DragOrigin {
            start_angle,
            reference_rotation: self.knob_rotation,
        });
        debug!(start_angle, "Drag started");
        true
    }

    /// Advance the drag.
    ///
    /// The delta is measured from the angle recorded at touch begin and added
    /// to the committed angle. A candidate outside the arc is dropped without
    /// touching state or emitting anything.
    pub fn handle_touch_move(
        &mut self,
        point: Point,
        geometry: &KnobGeometry,
        on_knob: bool,
    ) -> Vec<KnobEffect> {
        if !on_knob {
            return Vec::new();
        }
        let Some(origin) = self.state.drag_origin else {
            return Vec::new();
        };

        let angle_delta = origin.start_angle - geometry.angle_of(point);
        let candidate = self.state.current_angle + angle_delta;
        let (min, max) = (self.config.min_angle(), self.config.max_angle());

        if candidate < min - ANGLE_TOLERANCE || candidate > max + ANGLE_TOLERANCE {
            trace!(
                candidate_deg = candidate.to_degrees(),
                angle_deg = self.state.current_angle_deg(),
                "Move rejected outside arc"
            );
            return Vec::new();
        }

        self.state.current_angle = candidate.clamp(min, max);
        let rotation = origin.reference_rotation.rotated(-angle_delta);
        self.state.drag_origin = Some(DragOrigin {
            start_angle: origin.start_angle,
            reference_rotation: rotation,
        });
        self.knob_rotation = rotation;

        trace!(angle_deg = self.state.current_angle_deg(), "Move accepted");
        vec![
            KnobEffect::KnobRotation(rotation),
            KnobEffect::Background(self.color_from_angle(self.state.current_angle)),
        ]
    }

    /// Stop tracking the drag if the ended touch belongs to the knob.
    pub fn handle_touch_end(&mut self, on_knob: bool) {
        if on_knob && self.state.drag_origin.take().is_some() {
            debug!(angle_deg = self.state.current_angle_deg(), "Drag ended");
        }
    }

    /// Hue for an angle on the arc: min maps to 0, max maps to 1.
    pub fn hue_for_angle(&self, angle: f64) -> f64 {
        let (min, max) = (self.config.min_angle(), self.config.max_angle());
        (angle - min) / (max - min)
    }

    /// Background color while dragging at `angle`.
    pub fn color_from_angle(&self, angle: f64) -> Hsba {
        self.config.drag_color.with_hue(self.hue_for_angle(angle))
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: KnobEvent, geometry: &KnobGeometry) -> Vec<KnobEffect> {
        match event {
            KnobEvent::Toggle => self.toggle_switch(),
            KnobEvent::SetSwitch { on } => self.set_switch(on),
            KnobEvent::TouchBegin { point } => {
                self.handle_touch_begin(point, geometry);
                Vec::new()
            }
            KnobEvent::TouchMove { point, on_knob } => {
                self.handle_touch_move(point, geometry, on_knob)
            }
            KnobEvent::TouchEnd { on_knob } => {
                self.handle_touch_end(on_knob);
                Vec::new()
            }
        }
    }

    /// Dispatch one event and apply its effects to `host`.
    pub fn dispatch<H: PresentationHost + ?Sized>(
        &mut self,
        event: KnobEvent,
        geometry: &KnobGeometry,
        host: &mut H,
    ) {
        let effects = self.handle(event, geometry);
        KnobEffect::apply_all(&effects, host);
    }

    /// Run every event of a session in order, collecting all effects.
    pub fn replay(&mut self, session: &Session) -> Vec<KnobEffect> {
        session
            .events
            .iter()
            .flat_map(|event| self.handle(*event, &session.geometry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{drag_to, knob_geometry, switched_on, touch_point};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_new_controller_starts_off_at_rest() {
        let knob = KnobController::new();
        assert!(!knob.state().is_on);
        assert!((knob.state().current_angle_deg() - 90.0).abs() < EPS);
        assert!(knob.state().drag_origin.is_none());
    }

    #[test]
    fn test_color_from_angle_endpoints() {
        let knob = KnobController::new();
        let min = knob.config().min_angle();
        let max = knob.config().max_angle();

        assert!(knob.color_from_angle(min).hue.abs() < EPS);
        assert!((knob.color_from_angle(max).hue - 1.0).abs() < EPS);

        let mid = knob.color_from_angle(90f64.to_radians());
        assert!((mid.hue - 0.5).abs() < EPS);
        assert_eq!(mid.saturation, 0.75);
        assert_eq!(mid.brightness, 0.75);
        assert_eq!(mid.alpha, 1.0);
    }

    #[test]
    fn test_color_from_angle_is_linear_and_increasing() {
        let knob = KnobController::new();
        let mut previous = f64::NEG_INFINITY;
        for step in 0..=24 {
            let deg = -30.0 + step as f64 * 10.0;
            let hue = knob.color_from_angle(deg.to_radians()).hue;
            assert!(hue > previous);
            assert!((hue - step as f64 / 24.0).abs() < EPS);
            previous = hue;
        }
    }

    #[test]
    fn test_switch_on_emits_rest_presentation() {
        let mut knob = KnobController::new();
        let effects = knob.set_switch(true);

        assert!(knob.state().is_on);
        assert_eq!(effects[0], KnobEffect::SwitchSelected(true));
        assert_eq!(effects[1], KnobEffect::KnobRotation(Affine2::IDENTITY));
        assert_eq!(effects[2], KnobEffect::KnobVisible(true));
        let background = effects[3].as_background().unwrap();
        assert!((background.hue - 0.5).abs() < EPS);
        assert_eq!(background.saturation, 0.5);
        assert_eq!(background.brightness, 0.75);
    }

    #[test]
    fn test_switch_on_resets_after_drag() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        drag_to(&mut knob, &geometry, 0.0, -30.0);
        assert!(knob.state().drag_origin.is_some());
        assert!((knob.state().current_angle_deg() - 120.0).abs() < 1e-6);

        knob.set_switch(true);
        assert!((knob.state().current_angle_deg() - 90.0).abs() < EPS);
        assert!(knob.state().drag_origin.is_none());
        assert!(knob.knob_rotation().is_identity());
    }

    #[test]
    fn test_switch_off_hides_knob_and_clears_drag() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        assert!(knob.handle_touch_begin(touch_point(&geometry, 0.0), &geometry));

        let effects = knob.set_switch(false);
        assert!(!knob.state().is_on);
        assert!(knob.state().drag_origin.is_none());
        assert_eq!(
            effects,
            vec![
                KnobEffect::SwitchSelected(false),
                KnobEffect::Background(Hsba::opaque(0.5, 0.0, 0.2)),
                KnobEffect::KnobVisible(false),
            ]
        );
    }

    #[test]
    fn test_toggle_flips_switch() {
        let mut knob = KnobController::new();
        knob.toggle_switch();
        assert!(knob.state().is_on);
        knob.toggle_switch();
        assert!(!knob.state().is_on);
    }

    #[test]
    fn test_touch_outside_radius_never_starts_drag() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        let outside = Point::new(geometry.center().x + 100.1, geometry.center().y);
        assert!(!knob.handle_touch_begin(outside, &geometry));
        assert!(knob.state().drag_origin.is_none());

        assert!(knob
            .handle_touch_move(touch_point(&geometry, 45.0), &geometry, true)
            .is_empty());
    }

    #[test]
    fn test_touch_ignored_while_off() {
        let geometry = knob_geometry();
        let mut knob = KnobController::new();
        assert!(!knob.handle_touch_begin(geometry.center(), &geometry));
        assert!(knob.state().drag_origin.is_none());
    }

    #[test]
    fn test_touch_begin_records_origin() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        assert!(knob.handle_touch_begin(touch_point(&geometry, 90.0), &geometry));
        let origin = knob.state().drag_origin.unwrap();
        assert!((origin.start_angle - 90f64.to_radians()).abs() < EPS);
        assert!(origin.reference_rotation.is_identity());
    }

    #[test]
    fn test_move_from_other_view_is_ignored() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        knob.handle_touch_begin(touch_point(&geometry, 0.0), &geometry);
        let effects = knob.handle_touch_move(touch_point(&geometry, -20.0), &geometry, false);
        assert!(effects.is_empty());
        assert!((knob.state().current_angle_deg() - 90.0).abs() < EPS);
    }

    #[test]
    fn test_accepted_move_rotates_and_recolors() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        knob.handle_touch_begin(touch_point(&geometry, 0.0), &geometry);
        let effects = knob.handle_touch_move(touch_point(&geometry, -45.0), &geometry, true);

        assert!((knob.state().current_angle_deg() - 135.0).abs() < 1e-6);
        let rotation = effects[0].as_rotation().unwrap();
        assert!((rotation.rotation_angle().to_degrees() + 45.0).abs() < 1e-6);
        let background = effects[1].as_background().unwrap();
        assert!((background.hue - 165.0 / 240.0).abs() < 1e-6);
        assert_eq!(knob.knob_rotation(), rotation);
        assert_eq!(knob.state().drag_origin.unwrap().reference_rotation, rotation);
    }

    #[test]
    fn test_move_deltas_chain_from_fixed_start() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        knob.handle_touch_begin(touch_point(&geometry, 0.0), &geometry);

        knob.handle_touch_move(touch_point(&geometry, -10.0), &geometry, true);
        assert!((knob.state().current_angle_deg() - 100.0).abs() < 1e-6);

        // Same start angle, so the second delta is 20° on top of 100°.
        knob.handle_touch_move(touch_point(&geometry, -20.0), &geometry, true);
        assert!((knob.state().current_angle_deg() - 120.0).abs() < 1e-6);
        let start = knob.state().drag_origin.unwrap().start_angle;
        assert!(start.abs() < EPS);
        assert!((knob.knob_rotation().rotation_angle().to_degrees() + 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_move_past_max_is_rejected() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        knob.handle_touch_begin(touch_point(&geometry, 0.0), &geometry);

        knob.handle_touch_move(touch_point(&geometry, -100.0), &geometry, true);
        assert!((knob.state().current_angle_deg() - 190.0).abs() < 1e-6);
        let rotation_before = knob.knob_rotation();

        let effects = knob.handle_touch_move(touch_point(&geometry, -30.0), &geometry, true);
        assert!(effects.is_empty());
        assert!((knob.state().current_angle_deg() - 190.0).abs() < 1e-6);
        assert_eq!(knob.knob_rotation(), rotation_before);
    }

    #[test]
    fn test_move_past_min_is_rejected() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        knob.handle_touch_begin(touch_point(&geometry, 0.0), &geometry);

        let effects = knob.handle_touch_move(touch_point(&geometry, 121.0), &geometry, true);
        assert!(effects.is_empty());
        assert!((knob.state().current_angle_deg() - 90.0).abs() < EPS);

        let effects = knob.handle_touch_move(touch_point(&geometry, 120.0), &geometry, true);
        assert_eq!(effects.len(), 2);
        assert!((knob.state().current_angle_deg() + 30.0).abs() < 1e-6);
        assert!(knob.state().current_angle >= knob.config().min_angle());
    }

    #[test]
    fn test_touch_end_is_idempotent() {
        let geometry = knob_geometry();
        let mut knob = switched_on();
        knob.handle_touch_begin(touch_point(&geometry, 0.0), &geometry);

        knob.handle_touch_end(false);
        assert!(knob.state().drag_origin.is_some());

        knob.handle_touch_end(true);
        assert!(knob.state().drag_origin.is_none());
        knob.handle_touch_end(true);
        assert!(knob.state().drag_origin.is_none());
    }

    #[test]
    fn test_load_resets_to_initial_presentation() {
        let mut knob = switched_on();
        let effects = knob.load();
        assert!(!knob.state().is_on);
        assert_eq!(effects[0], KnobEffect::SwitchSelected(false));
        assert_eq!(effects[2], KnobEffect::KnobVisible(false));
        assert_eq!(
            effects[3].as_background(),
            Some(knob.config().off_color)
        );
    }

    #[test]
    fn test_custom_config_changes_arc() {
        let config = KnobConfig {
            min_angle_deg: 0.0,
            max_angle_deg: 180.0,
            ..Default::default()
        };
        let knob = KnobController::with_config(config).unwrap();
        assert!((knob.hue_for_angle(90f64.to_radians()) - 0.5).abs() < EPS);
        assert!(knob.hue_for_angle(0.0).abs() < EPS);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = KnobConfig {
            min_angle_deg: 10.0,
            max_angle_deg: -10.0,
            ..Default::default()
        };
        assert!(KnobController::with_config(config).is_err());
    }

    #[test]
    fn test_drag_across_branch_cut_is_rejected() {
        let g = knob_geometry();
        let mut knob = switched_on();
        let before = knob.state().current_angle;

        // atan2 jumps from +170° to -170°, so the delta is +340°.
        let effects = drag_to(&mut knob, &g, 170.0, -170.0);

        assert!(effects.is_empty());
        assert_eq!(knob.state().current_angle, before);
        assert!(knob.knob_rotation().is_identity());
        assert!(knob.state().is_dragging());
    }
}
