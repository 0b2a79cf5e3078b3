//! Keyboard adapter: key-down/key-up samples addressed by W3C code
//! strings.

use super::{release_family, DeviceAdapter};
use crate::event::{TransitionKind, NO_POSITION};
use crate::input_state::InputState;
use crate::keys::{keyboard, KeyFamily};

/// Translates keyboard samples into transitions.
///
/// Keyboard events carry the most recent pointer position (so a hotkey
/// knows where the cursor was); feed it with
/// [`pointer_moved`](KeyboardAdapter::pointer_moved) if the surface
/// tracks one.
#[derive(Debug, Clone)]
pub struct KeyboardAdapter {
    pointer_x: f32,
    pointer_y: f32,
}

impl Default for KeyboardAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardAdapter {
    /// Creates an adapter with no known pointer position.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pointer_x: NO_POSITION,
            pointer_y: NO_POSITION,
        }
    }

    /// Records the pointer position attached to subsequent key events.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    /// Feeds a key-down sample.
    ///
    /// Unknown codes and repeats of an already-held key are ignored.
    /// `character` is the typed character, if the press produced one; it
    /// appears only on this initiating press.
    pub fn key_down(&mut self, state: &mut InputState, code: &str, character: Option<char>) {
        let Some(key) = keyboard::from_code(code) else {
            log::trace!("ignoring unknown key code {code:?}");
            return;
        };
        if state.is_active(key) {
            return;
        }
        state.add_event(
            key,
            TransitionKind::Pressed,
            1.0,
            self.pointer_x,
            self.pointer_y,
            character,
        );
    }

    /// Feeds a key-up sample; ignored unless the key is held.
    pub fn key_up(&mut self, state: &mut InputState, code: &str) {
        let Some(key) = keyboard::from_code(code) else {
            return;
        };
        if !state.is_active(key) {
            return;
        }
        state.add_event(
            key,
            TransitionKind::Released,
            0.0,
            self.pointer_x,
            self.pointer_y,
            None,
        );
    }

    /// Releases every held keyboard key, e.g. when the surface loses
    /// focus and key-up events will never arrive.
    pub fn focus_lost(&mut self, state: &mut InputState) {
        release_family(state, KeyFamily::Keyboard, false);
    }
}

impl DeviceAdapter for KeyboardAdapter {
    fn family(&self) -> KeyFamily {
        KeyFamily::Keyboard
    }

    fn teardown(&mut self, state: &mut InputState) {
        self.focus_lost(state);
    }
}
