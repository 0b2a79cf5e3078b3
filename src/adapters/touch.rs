//! Touch adapter: multi-contact tracking over a fixed pool of slots.

use super::{release_family, DeviceAdapter};
use crate::event::{TransitionKind, NO_POSITION};
use crate::input_state::InputState;
use crate::keys::touch::{contact_key, motion_key, MAX_TOUCH_CONTACTS};
use crate::keys::KeyFamily;
use crate::slot_pool::SlotPool;
use std::time::{Duration, Instant};

/// How long a contact must sit still before its motion key releases,
/// when no other timeout is configured.
pub const DEFAULT_MOTION_TIMEOUT: Duration = Duration::from_millis(200);

/// Translates touch samples into transitions.
///
/// Platform contact identifiers are mapped to stable slots by a
/// [`SlotPool`]; each slot owns a contact key (held while the finger is
/// down) and a motion key (held while it is moving, with the same
/// caller-polled stillness timeout as the pointer adapter). When all
/// slots are taken, further contacts are dropped.
#[derive(Debug, Clone)]
pub struct TouchAdapter {
    slots: SlotPool<MAX_TOUCH_CONTACTS>,
    last_motion: [Option<Instant>; MAX_TOUCH_CONTACTS],
    motion_timeout: Duration,
}

impl Default for TouchAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchAdapter {
    /// Creates an adapter with the default motion timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: SlotPool::new(),
            last_motion: [None; MAX_TOUCH_CONTACTS],
            motion_timeout: DEFAULT_MOTION_TIMEOUT,
        }
    }

    /// Overrides the stillness timeout after which a contact's motion key
    /// releases.
    #[must_use]
    pub fn with_motion_timeout(mut self, timeout: Duration) -> Self {
        self.motion_timeout = timeout;
        self
    }

    /// Feeds a contact-start sample.
    ///
    /// `force` in `(0, 1]` becomes the pressure; platforms that do not
    /// report force pass 0 and get pressure 1. The sample is dropped when
    /// every slot is in use or the identifier is already tracked.
    pub fn touch_started(&mut self, state: &mut InputState, id: u64, x: f32, y: f32, force: f32) {
        if self.slots.slot(id).is_some() {
            return;
        }
        let Some(slot) = self.slots.acquire(id) else {
            log::warn!("touch contact {id} dropped: all {MAX_TOUCH_CONTACTS} slots in use");
            return;
        };
        let pressure = if force > 0.0 { force } else { 1.0 };
        state.add_event(contact_key(slot), TransitionKind::Pressed, pressure, x, y, None);
    }

    /// Feeds a contact-move sample: updates the contact key and presses
    /// or updates the motion key. Unknown identifiers are ignored.
    pub fn touch_moved(
        &mut self,
        state: &mut InputState,
        id: u64,
        x: f32,
        y: f32,
        force: f32,
        now: Instant,
    ) {
        let Some(slot) = self.slots.slot(id) else {
            return;
        };
        let pressure = if force > 0.0 { force } else { 1.0 };
        state.add_event(contact_key(slot), TransitionKind::Updated, pressure, x, y, None);

        let motion = motion_key(slot);
        if state.is_active(motion) {
            state.add_event(motion, TransitionKind::Updated, pressure, x, y, None);
        } else {
            state.add_event(motion, TransitionKind::Pressed, pressure, x, y, None);
        }
        self.last_motion[slot] = Some(now);
    }

    /// Feeds a contact-end (or cancel) sample, releasing the contact key
    /// and, if engaged, the motion key at its last known position.
    pub fn touch_ended(&mut self, state: &mut InputState, id: u64, x: f32, y: f32) {
        let Some(slot) = self.slots.release(id) else {
            return;
        };
        state.add_event(contact_key(slot), TransitionKind::Released, 0.0, x, y, None);

        let motion = motion_key(slot);
        if let Some(held) = state.active_event(motion).copied() {
            state.add_event(motion, TransitionKind::Released, 0.0, held.x, held.y, None);
        }
        self.last_motion[slot] = None;
    }

    /// Releases motion keys for contacts that have been still past the
    /// timeout. Call once per tick.
    pub fn poll(&mut self, state: &mut InputState, now: Instant) {
        for slot in 0..MAX_TOUCH_CONTACTS {
            let Some(last) = self.last_motion[slot] else {
                continue;
            };
            let motion = motion_key(slot);
            if !state.is_active(motion) {
                self.last_motion[slot] = None;
                continue;
            }
            if now.duration_since(last) >= self.motion_timeout {
                let (x, y) = state
                    .active_event(motion)
                    .map_or((NO_POSITION, NO_POSITION), |held| (held.x, held.y));
                state.add_event(motion, TransitionKind::Released, 0.0, x, y, None);
                self.last_motion[slot] = None;
            }
        }
    }

    /// Releases every held touch key and forgets all contacts, e.g. on
    /// focus loss.
    pub fn focus_lost(&mut self, state: &mut InputState) {
        release_family(state, KeyFamily::Touch, false);
        self.slots.reset();
        self.last_motion = [None; MAX_TOUCH_CONTACTS];
    }
}

impl DeviceAdapter for TouchAdapter {
    fn family(&self) -> KeyFamily {
        KeyFamily::Touch
    }

    fn teardown(&mut self, state: &mut InputState) {
        self.focus_lost(state);
    }
}
