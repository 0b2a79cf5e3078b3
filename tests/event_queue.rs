//! Cross-cutting properties of the pending queue and the held-key map.

use omni_input::keys::keyboard::{KEY_A, KEY_B, KEY_C};
use omni_input::{InputState, TransitionKind, NO_POSITION};

fn add(state: &mut InputState, key: omni_input::KeyId, kind: TransitionKind, pressure: f32) {
    state.add_event(key, kind, pressure, NO_POSITION, NO_POSITION, None);
}

#[test]
fn active_tracks_most_recent_transition() {
    let mut state = InputState::default();

    add(&mut state, KEY_A, TransitionKind::Pressed, 1.0);
    assert!(state.is_active(KEY_A));

    add(&mut state, KEY_A, TransitionKind::Updated, 0.5);
    assert!(state.is_active(KEY_A));
    assert_eq!(state.active_event(KEY_A).unwrap().pressure, 0.5);

    add(&mut state, KEY_A, TransitionKind::Released, 0.0);
    assert!(!state.is_active(KEY_A));

    // An update with no press before it does not resurrect the key.
    add(&mut state, KEY_A, TransitionKind::Updated, 0.7);
    assert!(!state.is_active(KEY_A));
}

#[test]
fn drain_yields_events_in_order_exactly_once() {
    let mut state = InputState::default();
    add(&mut state, KEY_A, TransitionKind::Pressed, 1.0);
    add(&mut state, KEY_B, TransitionKind::Pressed, 1.0);
    add(&mut state, KEY_A, TransitionKind::Released, 0.0);

    let drained: Vec<_> = std::iter::from_fn(|| state.consume_pending().copied()).collect();
    assert_eq!(drained.len(), 3);
    assert_eq!(drained[0].key, KEY_A);
    assert_eq!(drained[0].kind, TransitionKind::Pressed);
    assert_eq!(drained[1].key, KEY_B);
    assert_eq!(drained[2].kind, TransitionKind::Released);

    // A second pass in the same tick observes nothing.
    assert!(state.consume_pending().is_none());
    assert!(state.consume_pending().is_none());
}

#[test]
fn full_drain_resets_cursors() {
    let mut state = InputState::with_capacity(4);
    add(&mut state, KEY_A, TransitionKind::Pressed, 1.0);
    add(&mut state, KEY_A, TransitionKind::Released, 0.0);
    while state.consume_pending().is_some() {}

    assert_eq!(state.pending_len(), 0);

    // The next burst starts writing from slot 0 again.
    add(&mut state, KEY_B, TransitionKind::Pressed, 1.0);
    assert_eq!(state.pending_len(), 1);
    assert_eq!(state.unconsumed_len(), 1);
    assert_eq!(state.unconsumed()[0].key, KEY_B);
}

#[test]
fn clear_pending_flushes_without_touching_active() {
    let mut state = InputState::default();
    add(&mut state, KEY_A, TransitionKind::Pressed, 1.0);
    add(&mut state, KEY_B, TransitionKind::Pressed, 1.0);

    state.clear_pending();
    assert_eq!(state.pending_len(), 0);
    assert!(state.consume_pending().is_none());
    assert!(state.is_active(KEY_A));
    assert!(state.is_active(KEY_B));
}

#[test]
fn partial_drain_keeps_remaining_events() {
    let mut state = InputState::default();
    add(&mut state, KEY_A, TransitionKind::Pressed, 1.0);
    add(&mut state, KEY_B, TransitionKind::Pressed, 1.0);
    add(&mut state, KEY_C, TransitionKind::Pressed, 1.0);

    assert_eq!(state.consume_pending().unwrap().key, KEY_A);
    assert_eq!(state.unconsumed_len(), 2);
    assert_eq!(state.unconsumed()[0].key, KEY_B);
}

#[test]
fn capacity_four_scenario() {
    let mut state = InputState::with_capacity(4);

    state.add_event(KEY_A, TransitionKind::Pressed, 1.0, NO_POSITION, NO_POSITION, None);
    assert_eq!(state.active_len(), 1);
    assert_eq!(state.pending_len(), 1);

    state.add_event(KEY_A, TransitionKind::Updated, 0.5, NO_POSITION, NO_POSITION, None);
    assert_eq!(state.active_event(KEY_A).unwrap().pressure, 0.5);
    assert_eq!(state.pending_len(), 2);

    let first = state.consume_pending().copied().unwrap();
    assert_eq!(first.kind, TransitionKind::Pressed);
    let second = state.consume_pending().copied().unwrap();
    assert_eq!(second.kind, TransitionKind::Updated);
    assert_eq!(second.pressure, 0.5);

    assert!(state.consume_pending().is_none());
    assert_eq!(state.pending_len(), 0);
}
