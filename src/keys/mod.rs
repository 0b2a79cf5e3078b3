//! The flat key-identifier space shared by every device family.
//!
//! Every observable signal, whether a physical key, a pointer button, a
//! touch contact, a gamepad axis direction or a sensor channel, is
//! addressed by a [`KeyId`]: a small opaque integer drawn from a
//! contiguous range owned by exactly one [`KeyFamily`]. Ranges are
//! disjoint, ordered and fixed at compile time; membership is a half-open
//! interval check.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

pub mod gamepad;
pub mod geolocation;
pub mod keyboard;
pub mod pointer;
pub mod sensor;
pub mod spatial;
pub mod touch;

/// First id of the keyboard range.
pub const KEYBOARD_BASE_ID: u32 = 0;
/// First id of the pointer range.
pub const POINTER_BASE_ID: u32 = 10_000;
/// First id of the touch range.
pub const TOUCH_BASE_ID: u32 = 11_000;
/// First id of the ambient-sensor range.
pub const SENSOR_BASE_ID: u32 = 12_000;
/// First id of the geolocation range.
pub const GEOLOCATION_BASE_ID: u32 = 13_000;
/// First id of the spatial-tracking range.
pub const SPATIAL_BASE_ID: u32 = 14_000;
/// First id of the gamepad range.
pub const GAMEPAD_BASE_ID: u32 = 20_000;
/// One past the last id of the gamepad range, and of the whole space.
pub const GAMEPAD_END_ID: u32 = 28_000;

/// An opaque identifier for a single virtual key.
///
/// The numeric value is only meaningful to this crate's range arithmetic;
/// consumers should treat ids as tokens and compare them against the
/// constants and constructors exported by the [`keys`](crate::keys)
/// submodules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct KeyId(u32);

impl KeyId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the id `delta` places after this one.
    ///
    /// Used to build per-instance ids inside a family's range (touch slot
    /// keys, per-pad gamepad keys and so on).
    #[must_use]
    pub const fn offset(self, delta: u32) -> Self {
        Self(self.0 + delta)
    }

    /// Returns the family whose range contains this id, if any.
    #[must_use]
    pub fn family(self) -> Option<KeyFamily> {
        KeyFamily::ALL
            .iter()
            .copied()
            .find(|family| family.contains(self))
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.family() {
            Some(KeyFamily::Keyboard) => match keyboard::code_of(*self) {
                Some(code) => f.write_str(code),
                None => write!(f, "Keyboard({})", self.0),
            },
            Some(KeyFamily::Pointer) => match pointer::label_of(*self) {
                Some(label) => f.write_str(label),
                None => write!(f, "Pointer({})", self.0),
            },
            Some(KeyFamily::Touch) => touch::write_label(f, self.0),
            Some(KeyFamily::AmbientSensor) => match sensor::label_of(*self) {
                Some(label) => f.write_str(label),
                None => write!(f, "Sensor({})", self.0),
            },
            Some(KeyFamily::Geolocation) => match geolocation::label_of(*self) {
                Some(label) => f.write_str(label),
                None => write!(f, "Geolocation({})", self.0),
            },
            Some(KeyFamily::SpatialTracking) => spatial::write_label(f, self.0),
            Some(KeyFamily::Gamepad) => gamepad::write_label(f, self.0),
            None => write!(f, "Key({})", self.0),
        }
    }
}

/// The device families partitioning the key-id space.
///
/// Each family owns one contiguous range; by convention a single adapter
/// owns all ids of its family. The [`RangeRegistry`](crate::registry)
/// turns that convention into a checked claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyFamily {
    /// Physical keyboard keys.
    Keyboard,
    /// Pointer buttons, wheel notches and pointer motion.
    Pointer,
    /// Touch contacts and per-contact motion.
    Touch,
    /// Ambient device sensors: acceleration, rotation rate, orientation.
    AmbientSensor,
    /// Geolocation position and accuracy.
    Geolocation,
    /// Spatial-tracking poses, controller buttons and axes.
    SpatialTracking,
    /// Gamepad buttons and axes.
    Gamepad,
}

impl KeyFamily {
    /// All families, in id order.
    pub const ALL: [KeyFamily; 7] = [
        KeyFamily::Keyboard,
        KeyFamily::Pointer,
        KeyFamily::Touch,
        KeyFamily::AmbientSensor,
        KeyFamily::Geolocation,
        KeyFamily::SpatialTracking,
        KeyFamily::Gamepad,
    ];

    /// The half-open id range owned by this family.
    #[must_use]
    pub const fn key_range(self) -> Range<u32> {
        match self {
            KeyFamily::Keyboard => KEYBOARD_BASE_ID..POINTER_BASE_ID,
            KeyFamily::Pointer => POINTER_BASE_ID..TOUCH_BASE_ID,
            KeyFamily::Touch => TOUCH_BASE_ID..SENSOR_BASE_ID,
            KeyFamily::AmbientSensor => SENSOR_BASE_ID..GEOLOCATION_BASE_ID,
            KeyFamily::Geolocation => GEOLOCATION_BASE_ID..SPATIAL_BASE_ID,
            KeyFamily::SpatialTracking => SPATIAL_BASE_ID..GAMEPAD_BASE_ID,
            KeyFamily::Gamepad => GAMEPAD_BASE_ID..GAMEPAD_END_ID,
        }
    }

    /// Does this family's range contain `key`?
    #[inline]
    #[must_use]
    pub fn contains(self, key: KeyId) -> bool {
        self.key_range().contains(&key.raw())
    }
}
