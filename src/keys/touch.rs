//! Touch-contact key ids.
//!
//! Each of the [`MAX_TOUCH_CONTACTS`] simultaneously tracked contacts owns
//! two keys: a contact key held while the finger is down, and a motion key
//! held while it is moving.

use super::{KeyId, TOUCH_BASE_ID};
use std::fmt;

/// Maximum number of simultaneously tracked touch contacts.
pub const MAX_TOUCH_CONTACTS: usize = 10;

/// First contact key; contact `n` is `TOUCH_CONTACT_BASE.offset(n)`.
pub const TOUCH_CONTACT_BASE: KeyId = KeyId::new(TOUCH_BASE_ID);
/// First motion key; contact `n`'s motion key is `TOUCH_MOTION_BASE.offset(n)`.
pub const TOUCH_MOTION_BASE: KeyId = KeyId::new(TOUCH_BASE_ID + MAX_TOUCH_CONTACTS as u32);

/// The contact key for a slot.
#[must_use]
pub fn contact_key(slot: usize) -> KeyId {
    debug_assert!(slot < MAX_TOUCH_CONTACTS);
    TOUCH_CONTACT_BASE.offset(slot as u32)
}

/// The motion key for a slot.
#[must_use]
pub fn motion_key(slot: usize) -> KeyId {
    debug_assert!(slot < MAX_TOUCH_CONTACTS);
    TOUCH_MOTION_BASE.offset(slot as u32)
}

pub(crate) fn write_label(f: &mut fmt::Formatter<'_>, raw: u32) -> fmt::Result {
    let index = raw - TOUCH_BASE_ID;
    let contacts = MAX_TOUCH_CONTACTS as u32;
    if index < contacts {
        write!(f, "Touch{index}")
    } else if index < contacts * 2 {
        write!(f, "TouchMotion{}", index - contacts)
    } else {
        write!(f, "Touch({raw})")
    }
}
