//! Keyboard key ids, addressed by W3C `KeyboardEvent.code` names.
//!
//! Ids follow the physical key, not the active layout: [`KEY_A`] is the
//! key that produces 'A' on a US-QWERTY board regardless of the user's
//! layout.

use super::KeyId;
use once_cell::sync::Lazy;
use std::collections::HashMap;

macro_rules! keyboard_keys {
    ($($name:ident = $raw:literal => $code:literal),* $(,)?) => {
        $(
            #[doc = concat!("Physical key `", $code, "`.")]
            pub const $name: KeyId = KeyId::new($raw);
        )*

        /// Every defined keyboard key, paired with its W3C code string.
        pub const CODE_TABLE: &[(&str, KeyId)] = &[$(($code, $name),)*];
    };
}

keyboard_keys! {
    KEY_A = 0 => "KeyA",
    KEY_B = 1 => "KeyB",
    KEY_C = 2 => "KeyC",
    KEY_D = 3 => "KeyD",
    KEY_E = 4 => "KeyE",
    KEY_F = 5 => "KeyF",
    KEY_G = 6 => "KeyG",
    KEY_H = 7 => "KeyH",
    KEY_I = 8 => "KeyI",
    KEY_J = 9 => "KeyJ",
    KEY_K = 10 => "KeyK",
    KEY_L = 11 => "KeyL",
    KEY_M = 12 => "KeyM",
    KEY_N = 13 => "KeyN",
    KEY_O = 14 => "KeyO",
    KEY_P = 15 => "KeyP",
    KEY_Q = 16 => "KeyQ",
    KEY_R = 17 => "KeyR",
    KEY_S = 18 => "KeyS",
    KEY_T = 19 => "KeyT",
    KEY_U = 20 => "KeyU",
    KEY_V = 21 => "KeyV",
    KEY_W = 22 => "KeyW",
    KEY_X = 23 => "KeyX",
    KEY_Y = 24 => "KeyY",
    KEY_Z = 25 => "KeyZ",
    DIGIT_0 = 26 => "Digit0",
    DIGIT_1 = 27 => "Digit1",
    DIGIT_2 = 28 => "Digit2",
    DIGIT_3 = 29 => "Digit3",
    DIGIT_4 = 30 => "Digit4",
    DIGIT_5 = 31 => "Digit5",
    DIGIT_6 = 32 => "Digit6",
    DIGIT_7 = 33 => "Digit7",
    DIGIT_8 = 34 => "Digit8",
    DIGIT_9 = 35 => "Digit9",
    F1 = 36 => "F1",
    F2 = 37 => "F2",
    F3 = 38 => "F3",
    F4 = 39 => "F4",
    F5 = 40 => "F5",
    F6 = 41 => "F6",
    F7 = 42 => "F7",
    F8 = 43 => "F8",
    F9 = 44 => "F9",
    F10 = 45 => "F10",
    F11 = 46 => "F11",
    F12 = 47 => "F12",
    ARROW_LEFT = 48 => "ArrowLeft",
    ARROW_UP = 49 => "ArrowUp",
    ARROW_RIGHT = 50 => "ArrowRight",
    ARROW_DOWN = 51 => "ArrowDown",
    SPACE = 52 => "Space",
    ENTER = 53 => "Enter",
    ESCAPE = 54 => "Escape",
    TAB = 55 => "Tab",
    BACKSPACE = 56 => "Backspace",
    DELETE = 57 => "Delete",
    INSERT = 58 => "Insert",
    HOME = 59 => "Home",
    END = 60 => "End",
    PAGE_UP = 61 => "PageUp",
    PAGE_DOWN = 62 => "PageDown",
    SHIFT_LEFT = 63 => "ShiftLeft",
    SHIFT_RIGHT = 64 => "ShiftRight",
    CONTROL_LEFT = 65 => "ControlLeft",
    CONTROL_RIGHT = 66 => "ControlRight",
    ALT_LEFT = 67 => "AltLeft",
    ALT_RIGHT = 68 => "AltRight",
    META_LEFT = 69 => "MetaLeft",
    META_RIGHT = 70 => "MetaRight",
    CAPS_LOCK = 71 => "CapsLock",
    MINUS = 72 => "Minus",
    EQUAL = 73 => "Equal",
    BRACKET_LEFT = 74 => "BracketLeft",
    BRACKET_RIGHT = 75 => "BracketRight",
    BACKSLASH = 76 => "Backslash",
    SEMICOLON = 77 => "Semicolon",
    QUOTE = 78 => "Quote",
    BACKQUOTE = 79 => "Backquote",
    COMMA = 80 => "Comma",
    PERIOD = 81 => "Period",
    SLASH = 82 => "Slash",
    NUMPAD_0 = 83 => "Numpad0",
    NUMPAD_1 = 84 => "Numpad1",
    NUMPAD_2 = 85 => "Numpad2",
    NUMPAD_3 = 86 => "Numpad3",
    NUMPAD_4 = 87 => "Numpad4",
    NUMPAD_5 = 88 => "Numpad5",
    NUMPAD_6 = 89 => "Numpad6",
    NUMPAD_7 = 90 => "Numpad7",
    NUMPAD_8 = 91 => "Numpad8",
    NUMPAD_9 = 92 => "Numpad9",
    NUMPAD_ADD = 93 => "NumpadAdd",
    NUMPAD_SUBTRACT = 94 => "NumpadSubtract",
    NUMPAD_MULTIPLY = 95 => "NumpadMultiply",
    NUMPAD_DIVIDE = 96 => "NumpadDivide",
    NUMPAD_DECIMAL = 97 => "NumpadDecimal",
    NUMPAD_ENTER = 98 => "NumpadEnter",
}

static CODE_LOOKUP: Lazy<HashMap<&'static str, KeyId>> =
    Lazy::new(|| CODE_TABLE.iter().copied().collect());

/// Looks up the key id for a W3C `KeyboardEvent.code` string.
///
/// Returns `None` for codes this crate does not define; adapters ignore
/// those events.
#[must_use]
pub fn from_code(code: &str) -> Option<KeyId> {
    CODE_LOOKUP.get(code).copied()
}

/// Returns the code string of a defined keyboard key.
#[must_use]
pub fn code_of(key: KeyId) -> Option<&'static str> {
    CODE_TABLE
        .iter()
        .find(|(_, entry)| *entry == key)
        .map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for (code, key) in CODE_TABLE {
            assert_eq!(from_code(code), Some(*key));
            assert_eq!(code_of(*key), Some(*code));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(from_code("IntlBackslash"), None);
        assert_eq!(from_code(""), None);
    }

    #[test]
    fn ids_are_unique() {
        let mut raws: Vec<u32> = CODE_TABLE.iter().map(|(_, key)| key.raw()).collect();
        raws.sort_unstable();
        raws.dedup();
        assert_eq!(raws.len(), CODE_TABLE.len());
    }
}
