#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod adapters;
pub mod axislike;
mod chords;
pub mod event;
pub mod input_state;
pub mod keys;
pub mod registry;
pub mod slot_pool;

pub use event::{InputEvent, TransitionKind, NO_POSITION};
pub use input_state::InputState;
pub use keys::{KeyFamily, KeyId};

/// Everything you need to get started.
pub mod prelude {
    pub use crate::adapters::{ButtonSample, DeviceAdapter};
    pub use crate::axislike::{BipolarAxis, RangedChannel, UnipolarChannel, DEFAULT_DEADZONE};
    pub use crate::event::{InputEvent, TransitionKind, NO_POSITION};
    pub use crate::input_state::{InputState, DEFAULT_PENDING_CAPACITY};
    pub use crate::keys::{KeyFamily, KeyId};
    pub use crate::registry::{RangeRegistry, RegistryError};
    pub use crate::slot_pool::SlotPool;
}
