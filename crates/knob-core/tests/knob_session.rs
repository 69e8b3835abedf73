//! End-to-end tests driving the controller through a recording host.

use knob_core::test_fixtures::{knob_geometry, touch_point, RecordingHost};
use knob_core::{KnobController, KnobEffect, KnobEvent, Session};

const EPS: f64 = 1e-6;

#[test]
fn switch_drag_and_hard_stop() {
    let geometry = knob_geometry();
    let mut knob = KnobController::new();
    let mut host = RecordingHost::default();

    KnobEffect::apply_all(&knob.load(), &mut host);
    assert_eq!(host.knob_visible, Some(false));
    assert!(!knob.state().is_on);

    // Switch on: background hue for the 90° rest angle.
    knob.dispatch(KnobEvent::SetSwitch { on: true }, &geometry, &mut host);
    assert_eq!(host.knob_visible, Some(true));
    assert_eq!(host.switch_selected, Some(true));
    let rest = host.last_background().unwrap();
    assert!((rest.hue - 0.5).abs() < EPS);

    // Drag +45° within bounds.
    knob.dispatch(
        KnobEvent::TouchBegin {
            point: touch_point(&geometry, 0.0),
        },
        &geometry,
        &mut host,
    );
    knob.dispatch(
        KnobEvent::TouchMove {
            point: touch_point(&geometry, -45.0),
            on_knob: true,
        },
        &geometry,
        &mut host,
    );
    assert!((knob.state().current_angle_deg() - 135.0).abs() < EPS);
    let dragged = host.last_background().unwrap();
    assert!((dragged.hue - 165.0 / 240.0).abs() < EPS);
    assert_eq!(dragged.saturation, 0.75);

    // Landing exactly on the upper limit is accepted.
    knob.dispatch(
        KnobEvent::TouchMove {
            point: touch_point(&geometry, -75.0),
            on_knob: true,
        },
        &geometry,
        &mut host,
    );
    assert!((knob.state().current_angle - knob.config().max_angle()).abs() < 1e-9);
    assert!((host.last_background().unwrap().hue - 1.0).abs() < EPS);
    let backgrounds_at_limit = host.backgrounds.len();
    let rotations_at_limit = host.rotations.len();

    // Pushing further is rejected outright.
    knob.dispatch(
        KnobEvent::TouchMove {
            point: touch_point(&geometry, -80.0),
            on_knob: true,
        },
        &geometry,
        &mut host,
    );
    let at_limit = knob.state().current_angle;
    assert!(at_limit <= knob.config().max_angle());
    assert!((at_limit - knob.config().max_angle()).abs() < 1e-9);
    assert_eq!(host.backgrounds.len(), backgrounds_at_limit);
    assert_eq!(host.rotations.len(), rotations_at_limit);

    knob.dispatch(KnobEvent::TouchEnd { on_knob: true }, &geometry, &mut host);
    assert!(knob.state().drag_origin.is_none());
}

#[test]
fn rotation_tracks_committed_angle() {
    let geometry = knob_geometry();
    let mut knob = KnobController::new();
    knob.set_switch(true);

    knob.handle_touch_begin(touch_point(&geometry, 30.0), &geometry);
    for deg in [20.0, 10.0, 5.0] {
        knob.handle_touch_move(touch_point(&geometry, deg), &geometry, true);
    }
    knob.handle_touch_end(true);

    // Rotation always equals rest angle minus committed angle.
    let expected = 90.0 - knob.state().current_angle_deg();
    let actual = knob.knob_rotation().rotation_angle().to_degrees();
    assert!((expected - actual).abs() < EPS);

    // A second gesture starts from the rotation left by the first.
    knob.handle_touch_begin(touch_point(&geometry, 0.0), &geometry);
    let origin = knob.state().drag_origin.unwrap();
    assert_eq!(origin.reference_rotation, knob.knob_rotation());
}

#[test]
fn replayed_session_matches_live_dispatch() -> anyhow::Result<()> {
    let session = Session::from_json(
        r#"{
            "geometry": {"center": {"x": 100.0, "y": 100.0}, "radius": 100.0},
            "events": [
                {"type": "toggle"},
                {"type": "touch_begin", "point": {"x": 150.0, "y": 100.0}},
                {"type": "touch_move", "point": {"x": 150.0, "y": 50.0}},
                {"type": "touch_end"},
                {"type": "touch_begin", "point": {"x": 500.0, "y": 500.0}},
                {"type": "touch_move", "point": {"x": 100.0, "y": 150.0}}
            ]
        }"#,
    )?;

    let mut replayed = KnobController::new();
    let effects = replayed.replay(&session);

    let mut live = KnobController::new();
    let mut host = RecordingHost::default();
    for event in &session.events {
        live.dispatch(*event, &session.geometry, &mut host);
    }

    assert_eq!(effects, host.received);
    assert_eq!(replayed.state(), live.state());

    // Toggle (4 effects) plus one accepted move (2 effects); the second
    // gesture starts outside the knob and is ignored.
    assert_eq!(effects.len(), 6);
    assert!((replayed.state().current_angle_deg() - 135.0).abs() < EPS);
    Ok(())
}
