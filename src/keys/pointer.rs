//! Pointer (mouse-like) key ids.

use super::{KeyId, POINTER_BASE_ID};

/// Primary pointer button.
pub const POINTER_LEFT: KeyId = KeyId::new(POINTER_BASE_ID);
/// Auxiliary (usually middle/wheel) pointer button.
pub const POINTER_MIDDLE: KeyId = KeyId::new(POINTER_BASE_ID + 1);
/// Secondary pointer button.
pub const POINTER_RIGHT: KeyId = KeyId::new(POINTER_BASE_ID + 2);
/// One upward wheel notch, reported as a press-then-release pulse.
pub const WHEEL_UP: KeyId = KeyId::new(POINTER_BASE_ID + 3);
/// One downward wheel notch, reported as a press-then-release pulse.
pub const WHEEL_DOWN: KeyId = KeyId::new(POINTER_BASE_ID + 4);
/// Virtual key held while the pointer is moving.
pub const POINTER_MOTION: KeyId = KeyId::new(POINTER_BASE_ID + 5);

const LABELS: &[(KeyId, &str)] = &[
    (POINTER_LEFT, "PointerLeft"),
    (POINTER_MIDDLE, "PointerMiddle"),
    (POINTER_RIGHT, "PointerRight"),
    (WHEEL_UP, "WheelUp"),
    (WHEEL_DOWN, "WheelDown"),
    (POINTER_MOTION, "PointerMotion"),
];

pub(crate) fn label_of(key: KeyId) -> Option<&'static str> {
    LABELS
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, label)| *label)
}
