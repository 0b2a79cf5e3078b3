//! Gamepad key ids.
//!
//! Each of the [`MAX_GAMEPADS`] pad slots owns a block of
//! [`PAD_ID_RANGE`] ids: buttons at the block start, axis direction pairs
//! at [`AXIS_OFFSET`].

use super::{KeyId, GAMEPAD_BASE_ID};
use std::fmt;

/// Maximum pads tracked simultaneously.
pub const MAX_GAMEPADS: usize = 8;
/// Ids reserved per pad.
pub const PAD_ID_RANGE: u32 = 1_000;
/// Offset of the button block inside a pad's range.
pub const BUTTON_OFFSET: u32 = 0;
/// Offset of the axis block inside a pad's range.
pub const AXIS_OFFSET: u32 = 100;
/// Maximum buttons tracked per pad.
pub const MAX_GAMEPAD_BUTTONS: usize = 20;
/// Maximum axes tracked per pad.
pub const MAX_GAMEPAD_AXES: usize = 8;

/// The key for one pad button.
#[must_use]
pub fn button_key(pad: usize, button: usize) -> KeyId {
    debug_assert!(pad < MAX_GAMEPADS && button < MAX_GAMEPAD_BUTTONS);
    KeyId::new(GAMEPAD_BASE_ID + (pad as u32) * PAD_ID_RANGE + BUTTON_OFFSET + button as u32)
}

/// The (positive, negative) key pair for one pad axis.
#[must_use]
pub fn axis_keys(pad: usize, axis: usize) -> (KeyId, KeyId) {
    debug_assert!(pad < MAX_GAMEPADS && axis < MAX_GAMEPAD_AXES);
    let base = GAMEPAD_BASE_ID + (pad as u32) * PAD_ID_RANGE + AXIS_OFFSET + (axis as u32) * 2;
    (KeyId::new(base), KeyId::new(base + 1))
}

pub(crate) fn write_label(f: &mut fmt::Formatter<'_>, raw: u32) -> fmt::Result {
    let index = raw - GAMEPAD_BASE_ID;
    let pad = index / PAD_ID_RANGE;
    let rest = index % PAD_ID_RANGE;
    if rest < AXIS_OFFSET {
        if (rest as usize) < MAX_GAMEPAD_BUTTONS {
            write!(f, "Gamepad{pad}Button{rest}")
        } else {
            write!(f, "Gamepad({raw})")
        }
    } else if ((rest - AXIS_OFFSET) as usize) < MAX_GAMEPAD_AXES * 2 {
        let pair = rest - AXIS_OFFSET;
        let sign = if pair % 2 == 0 { '+' } else { '-' };
        write!(f, "Gamepad{pad}Axis{}{sign}", pair / 2)
    } else {
        write!(f, "Gamepad({raw})")
    }
}
