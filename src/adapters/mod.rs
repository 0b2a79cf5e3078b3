//! Sample-driven adapters, one per device family.
//!
//! An adapter translates raw device samples into [`InputState`] transitions.
//! It does not talk to any native API: the embedder captures a sample (a
//! key code string, a pad's button array, a sensor reading, a pose) from
//! whatever platform layer it sits on and hands it to the adapter, which
//! diffs it against its remembered state and calls
//! [`InputState::add_event`]. Nothing here blocks or keeps time; where a
//! deadline matters (movement-stop synthesis) the caller passes an
//! [`Instant`](std::time::Instant) and polls.
//!
//! Every adapter upholds the shared contract for its family range:
//!
//! - it only writes keys inside its own family;
//! - it never presses an already-held key and never updates or releases a
//!   key it did not press;
//! - its teardown releases every key of its family still held, so the
//!   state never retains stale entries after the adapter goes away.

use crate::event::{TransitionKind, NO_POSITION};
use crate::input_state::InputState;
use crate::keys::{KeyFamily, KeyId};
use serde::{Deserialize, Serialize};

pub mod gamepad;
pub mod geolocation;
pub mod keyboard;
pub mod pointer;
pub mod sensor;
pub mod spatial;
pub mod touch;

/// The lifecycle seam every adapter implements.
pub trait DeviceAdapter {
    /// The family whose key range this adapter owns.
    fn family(&self) -> KeyFamily;

    /// Stops this adapter's contribution to `state`: synthesizes
    /// `Released` for every key of its family still held and forgets any
    /// remembered device state.
    fn teardown(&mut self, state: &mut InputState);
}

/// One button of a sampled device.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ButtonSample {
    /// Is the button past its actuation point?
    pub pressed: bool,
    /// Analog travel in `[0, 1]`; equals `pressed` as 0/1 on digital
    /// buttons.
    pub value: f32,
}

/// Releases every held key of `family`.
///
/// With `preserve_position` the release event reuses the held entry's
/// last coordinates; otherwise it carries the no-position sentinel.
pub(crate) fn release_family(state: &mut InputState, family: KeyFamily, preserve_position: bool) {
    let held: Vec<KeyId> = state
        .active_keys()
        .filter(|key| family.contains(*key))
        .collect();
    for key in held {
        let (x, y) = if preserve_position {
            state
                .active_event(key)
                .map_or((NO_POSITION, NO_POSITION), |event| (event.x, event.y))
        } else {
            (NO_POSITION, NO_POSITION)
        };
        state.add_event(key, TransitionKind::Released, 0.0, x, y, None);
    }
}
