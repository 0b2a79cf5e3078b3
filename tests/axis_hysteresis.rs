//! Deadzone hysteresis over a slow analog sweep.

use omni_input::axislike::BipolarAxis;
use omni_input::keys::gamepad::axis_keys;
use omni_input::{InputState, TransitionKind};

#[test]
fn sweep_emits_one_press_changing_updates_one_release() {
    let (positive, negative) = axis_keys(0, 0);
    let axis = BipolarAxis::new(positive, negative).with_deadzone(0.15);
    let mut state = InputState::default();

    // 0.00 → 0.20 in hundredths, then back down to 0.
    let mut previous = 0.0_f32;
    for step in (0..=20).chain((0..20).rev()) {
        let current = step as f32 / 100.0;
        axis.apply(&mut state, current, previous);
        previous = current;
    }

    let mut presses = 0;
    let mut releases = 0;
    let mut updates = 0;
    let mut last_pressure = 0.0_f32;
    while let Some(event) = state.consume_pending() {
        assert_eq!(event.key, positive);
        match event.kind {
            TransitionKind::Pressed => presses += 1,
            TransitionKind::Released => releases += 1,
            TransitionKind::Updated => {
                // Every update carries a pressure different from the last.
                assert_ne!(event.pressure, last_pressure);
                updates += 1;
            }
        }
        last_pressure = event.pressure;
    }

    assert_eq!(presses, 1);
    assert_eq!(releases, 1);
    // Engaged at 0.16..=0.20 rising (press at 0.16, 4 updates) and
    // 0.19..=0.16 falling (4 updates) before releasing at 0.15.
    assert_eq!(updates, 8);
    assert!(!state.is_active(positive));
    assert!(!state.is_active(negative));
}

#[test]
fn values_inside_deadzone_emit_nothing() {
    let (positive, negative) = axis_keys(0, 1);
    let axis = BipolarAxis::new(positive, negative).with_deadzone(0.15);
    let mut state = InputState::default();

    let mut previous = 0.0_f32;
    for step in [0.05_f32, 0.1, 0.14, 0.15, 0.1, -0.1, -0.15, 0.0] {
        axis.apply(&mut state, step, previous);
        previous = step;
    }
    assert_eq!(state.pending_len(), 0);
}

#[test]
fn full_deflection_reaches_pressure_one() {
    let (positive, negative) = axis_keys(1, 0);
    let axis = BipolarAxis::new(positive, negative).with_deadzone(0.15);
    let mut state = InputState::default();

    axis.apply(&mut state, 1.0, 0.0);
    assert_eq!(state.active_event(positive).unwrap().pressure, 1.0);

    axis.apply(&mut state, -1.0, 1.0);
    assert!(!state.is_active(positive));
    assert_eq!(state.active_event(negative).unwrap().pressure, 1.0);
}
