//! The shared input state: the pending-event queue and the held-key map.
//!
//! [`InputState`] is created once per logical input session and fed by any
//! number of adapters, each owning a disjoint key range. All mutation
//! funnels through [`InputState::add_event`]; the application drains the
//! queue once per frame with [`InputState::consume_pending`] and queries
//! held keys and chords in between.
//!
//! # Storage discipline
//!
//! The pending queue is an arena: it is pre-filled to the chosen capacity
//! and slots below the write cursor are overwritten in place on later
//! frames, so steady-state operation allocates nothing. Writes past the
//! initial capacity fall back to plain appends. A reference returned by
//! [`add_event`](InputState::add_event) or
//! [`consume_pending`](InputState::consume_pending) points into that
//! arena; the borrow checker prevents holding it across the next write,
//! and a consumer that needs an event for longer copies it out.
//!
//! # Example
//!
//! ```rust
//! use omni_input::keys::keyboard::SPACE;
//! use omni_input::{InputState, TransitionKind, NO_POSITION};
//!
//! let mut state = InputState::default();
//! state.add_event(SPACE, TransitionKind::Pressed, 1.0, NO_POSITION, NO_POSITION, Some(' '));
//! assert!(state.is_active(SPACE));
//!
//! let event = state.consume_pending().copied().unwrap();
//! assert_eq!(event.kind, TransitionKind::Pressed);
//! assert!(state.consume_pending().is_none());
//! ```

use crate::event::{InputEvent, TransitionKind};
use crate::keys::KeyId;
use std::collections::HashMap;

/// Default initial capacity of the pending queue.
pub const DEFAULT_PENDING_CAPACITY: usize = 64;

/// The pending-event queue plus the persistent held-key map.
#[derive(Debug, Clone)]
pub struct InputState {
    /// Arena backing the pending queue; only `[0, length)` is meaningful.
    pending: Vec<InputEvent>,
    /// Write cursor: events produced since the last full drain.
    length: usize,
    /// Read cursor: events already handed to the consumer this cycle.
    consumed: usize,
    /// Currently held keys, mapped to the event that pressed them
    /// (position/pressure kept current by `Updated` transitions).
    active: HashMap<KeyId, InputEvent>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_PENDING_CAPACITY)
    }
}

impl InputState {
    /// Creates a state whose pending queue holds `capacity` events before
    /// falling back to heap growth.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: vec![InputEvent::default(); capacity],
            length: 0,
            consumed: 0,
            active: HashMap::new(),
        }
    }

    /// Records one transition; the sole mutation entry point.
    ///
    /// The event is appended to the pending queue (reusing a pooled slot
    /// when one is free) and mirrored into the held-key map:
    ///
    /// - `Pressed` stores an independent copy under `key`, replacing any
    ///   prior entry. Adapters are expected to check [`is_active`] first
    ///   so a key is never pressed twice; the store itself does not
    ///   enforce that.
    /// - `Released` removes `key` unconditionally.
    /// - `Updated` rewrites the held entry's pressure and position in
    ///   place, leaving its `character` untouched. An update for a key
    ///   that is not held is recorded in the queue but otherwise a no-op.
    ///
    /// Returns a reference to the just-written queue slot; copy it out if
    /// it must outlive the next call.
    ///
    /// [`is_active`]: InputState::is_active
    pub fn add_event(
        &mut self,
        key: KeyId,
        kind: TransitionKind,
        pressure: f32,
        x: f32,
        y: f32,
        character: Option<char>,
    ) -> &InputEvent {
        let event = InputEvent {
            key,
            kind,
            pressure,
            x,
            y,
            character,
        };
        if self.length >= self.pending.len() {
            // Burst beyond the pooled capacity; grow and keep going.
            self.pending.push(event);
        } else {
            self.pending[self.length] = event;
        }
        self.length += 1;

        match kind {
            TransitionKind::Pressed => {
                self.active.insert(key, event);
            }
            TransitionKind::Released => {
                self.active.remove(&key);
            }
            TransitionKind::Updated => {
                if let Some(held) = self.active.get_mut(&key) {
                    held.pressure = pressure;
                    held.x = x;
                    held.y = y;
                }
            }
        }

        &self.pending[self.length - 1]
    }

    /// Hands out the next unconsumed event, or `None` once the queue is
    /// drained.
    ///
    /// Draining is single-cursor and single-consumer: a second pass in the
    /// same cycle observes nothing. Reaching the end resets both cursors
    /// to zero, so the next burst of events writes from slot 0 again; that
    /// full-drain reset is the only reset point besides
    /// [`clear_pending`](InputState::clear_pending).
    pub fn consume_pending(&mut self) -> Option<&InputEvent> {
        if self.consumed >= self.length {
            self.length = 0;
            self.consumed = 0;
            return None;
        }
        let index = self.consumed;
        self.consumed += 1;
        Some(&self.pending[index])
    }

    /// Discards all pending events without inspecting them.
    ///
    /// Used for an explicit flush, e.g. on device reinitialization; held
    /// keys are unaffected.
    pub fn clear_pending(&mut self) {
        self.length = 0;
        self.consumed = 0;
    }

    /// The events produced but not yet consumed this cycle.
    #[inline]
    #[must_use]
    pub fn unconsumed(&self) -> &[InputEvent] {
        &self.pending[self.consumed..self.length]
    }

    /// Number of events produced since the last full drain or flush,
    /// including already-consumed ones.
    #[inline]
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.length
    }

    /// Number of events still waiting to be consumed.
    #[inline]
    #[must_use]
    pub fn unconsumed_len(&self) -> usize {
        self.length - self.consumed
    }

    /// Is `key` currently held?
    #[inline]
    #[must_use]
    pub fn is_active(&self, key: KeyId) -> bool {
        self.active.contains_key(&key)
    }

    /// The held entry for `key`: the pressing event, with pressure and
    /// position kept current.
    #[inline]
    #[must_use]
    pub fn active_event(&self, key: KeyId) -> Option<&InputEvent> {
        self.active.get(&key)
    }

    /// Iterates over all currently held keys, in no particular order.
    pub fn active_keys(&self) -> impl Iterator<Item = KeyId> + '_ {
        self.active.keys().copied()
    }

    /// Number of currently held keys.
    #[inline]
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }
}
