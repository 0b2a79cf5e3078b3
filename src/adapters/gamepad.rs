//! Gamepad adapter: polled button and axis samples for up to eight pads.

use super::{release_family, ButtonSample, DeviceAdapter};
use crate::axislike::{BipolarAxis, DEFAULT_DEADZONE};
use crate::event::{TransitionKind, NO_POSITION};
use crate::input_state::InputState;
use crate::keys::gamepad::{
    axis_keys, button_key, MAX_GAMEPADS, MAX_GAMEPAD_AXES, MAX_GAMEPAD_BUTTONS,
};
use crate::keys::KeyFamily;
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// One pad's raw state for a single poll.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GamepadSample {
    /// Button states, in platform order; entries past
    /// [`MAX_GAMEPAD_BUTTONS`] are ignored.
    pub buttons: Vec<ButtonSample>,
    /// Raw axis values in `[-1, 1]`; entries past [`MAX_GAMEPAD_AXES`]
    /// are ignored.
    pub axes: Vec<f32>,
}

#[derive(Debug, Clone, Default)]
struct PadState {
    buttons: ArrayVec<ButtonSample, MAX_GAMEPAD_BUTTONS>,
    axes: ArrayVec<f32, MAX_GAMEPAD_AXES>,
}

/// Translates polled pad samples into transitions.
///
/// The caller polls its platform's pad list once per tick and hands the
/// result to [`poll`](GamepadAdapter::poll) as one optional sample per
/// pad slot; the adapter diffs each pad against the previous poll. A slot
/// going empty releases everything that pad held.
#[derive(Debug, Clone)]
pub struct GamepadAdapter {
    previous: [Option<PadState>; MAX_GAMEPADS],
    deadzone: f32,
}

impl Default for GamepadAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl GamepadAdapter {
    /// Creates an adapter with the default axis deadzone.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: std::array::from_fn(|_| None),
            deadzone: DEFAULT_DEADZONE,
        }
    }

    /// Overrides the axis deadzone.
    #[must_use]
    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }

    fn axis(&self, pad: usize, index: usize) -> BipolarAxis {
        let (positive, negative) = axis_keys(pad, index);
        BipolarAxis::new(positive, negative).with_deadzone(self.deadzone)
    }

    /// Feeds one poll of the pad list; `pads[i]` is the sample for pad
    /// slot `i`, or `None` when nothing is connected there. Slots past
    /// [`MAX_GAMEPADS`] are ignored.
    pub fn poll(&mut self, state: &mut InputState, pads: &[Option<GamepadSample>]) {
        for pad in 0..MAX_GAMEPADS {
            match pads.get(pad).and_then(|slot| slot.as_ref()) {
                Some(sample) => self.diff_pad(state, pad, sample),
                None => {
                    if let Some(prev) = self.previous[pad].take() {
                        self.release_pad(state, pad, &prev);
                    }
                }
            }
        }
    }

    fn diff_pad(&mut self, state: &mut InputState, pad: usize, sample: &GamepadSample) {
        let prev = self.previous[pad].take().unwrap_or_default();

        for (index, button) in sample.buttons.iter().take(MAX_GAMEPAD_BUTTONS).enumerate() {
            let was_pressed = prev.buttons.get(index).is_some_and(|b| b.pressed);
            let key = button_key(pad, index);
            if button.pressed && !was_pressed {
                state.add_event(
                    key,
                    TransitionKind::Pressed,
                    button.value,
                    NO_POSITION,
                    NO_POSITION,
                    None,
                );
            } else if !button.pressed && was_pressed {
                state.add_event(key, TransitionKind::Released, 0.0, NO_POSITION, NO_POSITION, None);
            } else if button.pressed
                && state
                    .active_event(key)
                    .is_some_and(|held| held.pressure != button.value)
            {
                state.add_event(
                    key,
                    TransitionKind::Updated,
                    button.value,
                    NO_POSITION,
                    NO_POSITION,
                    None,
                );
            }
        }

        for (index, &current) in sample.axes.iter().take(MAX_GAMEPAD_AXES).enumerate() {
            let previous = prev.axes.get(index).copied().unwrap_or(0.0);
            self.axis(pad, index).apply(state, current, previous);
        }

        let mut next = PadState::default();
        next.buttons
            .extend(sample.buttons.iter().take(MAX_GAMEPAD_BUTTONS).copied());
        next.axes
            .extend(sample.axes.iter().take(MAX_GAMEPAD_AXES).copied());
        self.previous[pad] = Some(next);
    }

    fn release_pad(&self, state: &mut InputState, pad: usize, prev: &PadState) {
        log::debug!("gamepad {pad} disconnected; releasing held keys");
        for (index, button) in prev.buttons.iter().enumerate() {
            let key = button_key(pad, index);
            if button.pressed && state.is_active(key) {
                state.add_event(key, TransitionKind::Released, 0.0, NO_POSITION, NO_POSITION, None);
            }
        }
        for (index, &previous) in prev.axes.iter().enumerate() {
            self.axis(pad, index).release(state, previous);
        }
    }
}

impl DeviceAdapter for GamepadAdapter {
    fn family(&self) -> KeyFamily {
        KeyFamily::Gamepad
    }

    fn teardown(&mut self, state: &mut InputState) {
        release_family(state, KeyFamily::Gamepad, false);
        self.previous = std::array::from_fn(|_| None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(buttons: &[(bool, f32)], axes: &[f32]) -> GamepadSample {
        GamepadSample {
            buttons: buttons
                .iter()
                .map(|&(pressed, value)| ButtonSample { pressed, value })
                .collect(),
            axes: axes.to_vec(),
        }
    }

    #[test]
    fn button_edges_and_value_updates() {
        let mut state = InputState::default();
        let mut adapter = GamepadAdapter::new();

        adapter.poll(&mut state, &[Some(sample(&[(true, 0.8)], &[]))]);
        assert!(state.is_active(button_key(0, 0)));
        assert_eq!(state.active_event(button_key(0, 0)).unwrap().pressure, 0.8);

        // Same pressure: no new event.
        let len = state.pending_len();
        adapter.poll(&mut state, &[Some(sample(&[(true, 0.8)], &[]))]);
        assert_eq!(state.pending_len(), len);

        adapter.poll(&mut state, &[Some(sample(&[(true, 1.0)], &[]))]);
        assert_eq!(state.active_event(button_key(0, 0)).unwrap().pressure, 1.0);

        adapter.poll(&mut state, &[Some(sample(&[(false, 0.0)], &[]))]);
        assert!(!state.is_active(button_key(0, 0)));
    }

    #[test]
    fn axis_deflection_presses_direction_key() {
        let mut state = InputState::default();
        let mut adapter = GamepadAdapter::new();
        let (positive, negative) = axis_keys(0, 0);

        adapter.poll(&mut state, &[Some(sample(&[], &[0.5]))]);
        assert!(state.is_active(positive));
        assert!(!state.is_active(negative));

        adapter.poll(&mut state, &[Some(sample(&[], &[-0.5]))]);
        assert!(!state.is_active(positive));
        assert!(state.is_active(negative));
    }

    #[test]
    fn disconnect_releases_everything_held() {
        let mut state = InputState::default();
        let mut adapter = GamepadAdapter::new();

        adapter.poll(&mut state, &[Some(sample(&[(true, 1.0)], &[0.9]))]);
        assert_eq!(state.active_len(), 2);

        adapter.poll(&mut state, &[None]);
        assert_eq!(state.active_len(), 0);
    }

    #[test]
    fn second_pad_uses_its_own_range() {
        let mut state = InputState::default();
        let mut adapter = GamepadAdapter::new();

        adapter.poll(&mut state, &[None, Some(sample(&[(true, 1.0)], &[]))]);
        assert!(state.is_active(button_key(1, 0)));
        assert!(!state.is_active(button_key(0, 0)));
    }
}
