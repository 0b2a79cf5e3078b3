//! Chord (key-combination) queries over [`InputState`].
//!
//! A chord is an ordered, non-empty set of key ids that may span device
//! families: `ControlLeft` + `Gamepad0Button3` is as valid as
//! `ControlLeft` + `KeyS`. All three queries are read-only and idempotent
//! within a frame: they scan only the unconsumed portion of the pending
//! queue and never advance the read cursor, so repeated calls between
//! mutations agree.

use crate::event::TransitionKind;
use crate::input_state::InputState;
use crate::keys::KeyId;
use std::collections::HashSet;

impl InputState {
    /// Is every key of the chord currently held?
    ///
    /// An empty chord is never held; "a combination of nothing" is treated
    /// as vacuously unsatisfiable rather than trivially true.
    #[must_use]
    pub fn chord_held(&self, keys: &[KeyId]) -> bool {
        !keys.is_empty() && keys.iter().all(|key| self.is_active(*key))
    }

    /// Was the chord completed within the current unconsumed window?
    ///
    /// True iff some member was pressed in the window and the whole chord
    /// is held right now. That is, the last missing member arrived while
    /// the others were already down. A press-then-release of another member
    /// inside the same window does not suppress the result; only the
    /// held-state at call time is re-verified.
    #[must_use]
    pub fn chord_just_completed(&self, keys: &[KeyId]) -> bool {
        if keys.is_empty() {
            return false;
        }
        let pressed_member = self.unconsumed().iter().any(|event| {
            event.kind == TransitionKind::Pressed && keys.contains(&event.key)
        });
        pressed_member && self.chord_held(keys)
    }

    /// Was the chord broken within the current unconsumed window?
    ///
    /// True iff some member was released in the window and every member
    /// was part of the fully-held chord immediately before it: each key
    /// must either still be held or have been released within the same
    /// window. Several members releasing in one window still counts as a
    /// single break; a member that was never held at all means the chord
    /// was never complete, so the release is not a break.
    #[must_use]
    pub fn chord_just_broken(&self, keys: &[KeyId]) -> bool {
        if keys.is_empty() {
            return false;
        }
        let released_member = self.unconsumed().iter().any(|event| {
            event.kind == TransitionKind::Released && keys.contains(&event.key)
        });
        if !released_member {
            return false;
        }

        let released_this_window: HashSet<KeyId> = self
            .unconsumed()
            .iter()
            .filter(|event| event.kind == TransitionKind::Released)
            .map(|event| event.key)
            .collect();

        keys.iter()
            .all(|key| self.is_active(*key) || released_this_window.contains(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NO_POSITION;
    use crate::keys::keyboard::{KEY_A, KEY_B, KEY_C};

    fn press(state: &mut InputState, key: KeyId) {
        state.add_event(key, TransitionKind::Pressed, 1.0, NO_POSITION, NO_POSITION, None);
    }

    fn release(state: &mut InputState, key: KeyId) {
        state.add_event(key, TransitionKind::Released, 0.0, NO_POSITION, NO_POSITION, None);
    }

    fn drain(state: &mut InputState) {
        while state.consume_pending().is_some() {}
    }

    #[test]
    fn empty_chord_is_never_satisfied() {
        let state = InputState::default();
        assert!(!state.chord_held(&[]));
        assert!(!state.chord_just_completed(&[]));
        assert!(!state.chord_just_broken(&[]));
    }

    #[test]
    fn completion_requires_all_members_held() {
        let mut state = InputState::default();
        press(&mut state, KEY_A);
        drain(&mut state);

        press(&mut state, KEY_B);
        assert!(state.chord_just_completed(&[KEY_A, KEY_B]));
        // C was never pressed, so the wider chord is incomplete.
        assert!(!state.chord_just_completed(&[KEY_A, KEY_B, KEY_C]));
    }

    #[test]
    fn completion_requires_a_press_in_window() {
        let mut state = InputState::default();
        press(&mut state, KEY_A);
        press(&mut state, KEY_B);
        drain(&mut state);

        // Held, but nothing new this window.
        assert!(state.chord_held(&[KEY_A, KEY_B]));
        assert!(!state.chord_just_completed(&[KEY_A, KEY_B]));
    }

    #[test]
    fn queries_are_idempotent_within_a_frame() {
        let mut state = InputState::default();
        press(&mut state, KEY_A);
        press(&mut state, KEY_B);
        for _ in 0..3 {
            assert!(state.chord_just_completed(&[KEY_A, KEY_B]));
        }
        assert_eq!(state.unconsumed_len(), 2);
    }

    #[test]
    fn break_detected_when_one_member_releases() {
        let mut state = InputState::default();
        press(&mut state, KEY_A);
        press(&mut state, KEY_B);
        drain(&mut state);

        release(&mut state, KEY_A);
        assert!(state.chord_just_broken(&[KEY_A, KEY_B]));
    }

    #[test]
    fn break_detected_when_all_members_release_together() {
        let mut state = InputState::default();
        press(&mut state, KEY_A);
        press(&mut state, KEY_B);
        drain(&mut state);

        release(&mut state, KEY_A);
        release(&mut state, KEY_B);
        assert!(state.chord_just_broken(&[KEY_A, KEY_B]));
    }

    #[test]
    fn no_break_when_a_member_was_never_held() {
        let mut state = InputState::default();
        press(&mut state, KEY_A);
        drain(&mut state);

        release(&mut state, KEY_A);
        assert!(!state.chord_just_broken(&[KEY_A, KEY_B]));
    }

    #[test]
    fn no_break_without_a_release_in_window() {
        let mut state = InputState::default();
        press(&mut state, KEY_A);
        press(&mut state, KEY_B);
        release(&mut state, KEY_A);
        drain(&mut state);

        assert!(!state.chord_just_broken(&[KEY_A, KEY_B]));
    }
}
