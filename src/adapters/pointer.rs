//! Pointer adapter: buttons, wheel notches and a motion virtual key.

use super::{release_family, DeviceAdapter};
use crate::event::TransitionKind;
use crate::input_state::InputState;
use crate::keys::pointer::{POINTER_LEFT, POINTER_MIDDLE, POINTER_MOTION, POINTER_RIGHT, WHEEL_DOWN, WHEEL_UP};
use crate::keys::{KeyFamily, KeyId};
use std::time::{Duration, Instant};

/// How long the pointer must sit still before the motion key releases,
/// when no other timeout is configured.
pub const DEFAULT_MOTION_TIMEOUT: Duration = Duration::from_millis(200);

/// A pointer button, by conventional ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button.
    Left,
    /// The auxiliary (middle) button.
    Middle,
    /// The secondary button.
    Right,
}

impl PointerButton {
    /// The virtual key this button maps to.
    #[must_use]
    pub const fn key(self) -> KeyId {
        match self {
            PointerButton::Left => POINTER_LEFT,
            PointerButton::Middle => POINTER_MIDDLE,
            PointerButton::Right => POINTER_RIGHT,
        }
    }
}

/// Translates pointer samples into transitions.
///
/// Motion is exposed as a virtual key: `Pressed` on the first move,
/// `Updated` on each further move, and `Released` once
/// [`poll`](PointerAdapter::poll) observes that no move arrived within the
/// timeout. The deadline lives here, not in the core; the caller polls
/// once per tick with its own clock.
#[derive(Debug, Clone)]
pub struct PointerAdapter {
    x: f32,
    y: f32,
    last_motion: Option<Instant>,
    motion_timeout: Duration,
}

impl Default for PointerAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerAdapter {
    /// Creates an adapter with the default motion timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            last_motion: None,
            motion_timeout: DEFAULT_MOTION_TIMEOUT,
        }
    }

    /// Overrides the stillness timeout after which motion releases.
    #[must_use]
    pub fn with_motion_timeout(mut self, timeout: Duration) -> Self {
        self.motion_timeout = timeout;
        self
    }

    /// Feeds a button-down sample; repeats while held are ignored.
    pub fn button_down(&mut self, state: &mut InputState, button: PointerButton, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        let key = button.key();
        if state.is_active(key) {
            return;
        }
        state.add_event(key, TransitionKind::Pressed, 1.0, x, y, None);
    }

    /// Feeds a button-up sample; ignored unless the button is held.
    pub fn button_up(&mut self, state: &mut InputState, button: PointerButton, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        let key = button.key();
        if !state.is_active(key) {
            return;
        }
        state.add_event(key, TransitionKind::Released, 0.0, x, y, None);
    }

    /// Feeds a motion sample.
    pub fn moved(&mut self, state: &mut InputState, x: f32, y: f32, now: Instant) {
        self.x = x;
        self.y = y;
        if state.is_active(POINTER_MOTION) {
            state.add_event(POINTER_MOTION, TransitionKind::Updated, 1.0, x, y, None);
        } else {
            state.add_event(POINTER_MOTION, TransitionKind::Pressed, 1.0, x, y, None);
        }
        self.last_motion = Some(now);
    }

    /// Feeds a wheel sample: one notch becomes a press-then-release pulse
    /// on the matching wheel key within the same frame.
    pub fn wheel(&mut self, state: &mut InputState, delta_y: f32, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        let key = if delta_y < 0.0 { WHEEL_UP } else { WHEEL_DOWN };
        state.add_event(key, TransitionKind::Pressed, 1.0, x, y, None);
        state.add_event(key, TransitionKind::Released, 0.0, x, y, None);
    }

    /// Releases the motion key if the pointer has been still for the
    /// configured timeout. Call once per tick.
    pub fn poll(&mut self, state: &mut InputState, now: Instant) {
        let Some(last) = self.last_motion else {
            return;
        };
        if !state.is_active(POINTER_MOTION) {
            self.last_motion = None;
            return;
        }
        if now.duration_since(last) >= self.motion_timeout {
            state.add_event(POINTER_MOTION, TransitionKind::Released, 0.0, self.x, self.y, None);
            self.last_motion = None;
        }
    }

    /// Releases every held pointer key, e.g. on focus loss.
    pub fn focus_lost(&mut self, state: &mut InputState) {
        release_family(state, KeyFamily::Pointer, false);
        self.last_motion = None;
    }
}

impl DeviceAdapter for PointerAdapter {
    fn family(&self) -> KeyFamily {
        KeyFamily::Pointer
    }

    fn teardown(&mut self, state: &mut InputState) {
        self.focus_lost(state);
    }
}
