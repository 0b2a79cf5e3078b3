//! The uniform transition record produced by every device family.

use crate::keys::KeyId;
use serde::{Deserialize, Serialize};

/// Sentinel coordinate meaning "no surface position applies".
pub const NO_POSITION: f32 = -1.0;

/// The three ways a virtual key can change.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionKind {
    /// The key became held.
    Pressed,
    /// The key stopped being held.
    Released,
    /// A held key's pressure or position changed.
    #[default]
    Updated,
}

/// One transition of one virtual key.
///
/// Events in the pending queue live in pooled storage that is overwritten
/// on later writes; the type is `Copy` so a consumer that needs to keep an
/// event past the current frame copies it out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputEvent {
    /// The key that changed.
    pub key: KeyId,
    /// What happened to it.
    pub kind: TransitionKind,
    /// Normalized magnitude in `[0, 1]`; 0 or 1 for purely digital keys.
    pub pressure: f32,
    /// Surface-relative X, or [`NO_POSITION`].
    pub x: f32,
    /// Surface-relative Y, or [`NO_POSITION`].
    pub y: f32,
    /// The character produced by the initiating press of a
    /// character-producing key; never set on updates or releases.
    pub character: Option<char>,
}

impl Default for InputEvent {
    fn default() -> Self {
        Self {
            key: KeyId::default(),
            kind: TransitionKind::default(),
            pressure: 0.0,
            x: NO_POSITION,
            y: NO_POSITION,
            character: None,
        }
    }
}

impl InputEvent {
    /// Does this event carry a surface position?
    #[inline]
    #[must_use]
    pub fn has_position(&self) -> bool {
        self.x != NO_POSITION || self.y != NO_POSITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn default_event_has_no_position() {
        let event = InputEvent::default();
        assert!(!event.has_position());
        assert_eq!(event.kind, TransitionKind::Updated);
        assert_eq!(event.character, None);
    }

    #[test]
    fn event_serialization() {
        let event = InputEvent {
            key: KeyId::new(5),
            kind: TransitionKind::Pressed,
            pressure: 1.0,
            x: -1.0,
            y: -1.0,
            character: Some('a'),
        };
        assert_tokens(
            &event,
            &[
                Token::Struct {
                    name: "InputEvent",
                    len: 6,
                },
                Token::Str("key"),
                Token::NewtypeStruct { name: "KeyId" },
                Token::U32(5),
                Token::Str("kind"),
                Token::UnitVariant {
                    name: "TransitionKind",
                    variant: "Pressed",
                },
                Token::Str("pressure"),
                Token::F32(1.0),
                Token::Str("x"),
                Token::F32(-1.0),
                Token::Str("y"),
                Token::F32(-1.0),
                Token::Str("character"),
                Token::Some,
                Token::Char('a'),
                Token::StructEnd,
            ],
        );
    }
}
