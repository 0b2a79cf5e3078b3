//! Analog-to-digital channels: the normalization step that turns a
//! continuous device value into virtual-key transitions.
//!
//! Three shapes cover every analog source in the crate:
//!
//! - [`BipolarAxis`] splits a signed value (thumbstick deflection, an
//!   acceleration component) into two independent virtual keys, one per
//!   sign, with a deadzone and a pressure proportional to how far past the
//!   deadzone the value sits.
//! - [`UnipolarChannel`] maps a one-sided value (compass heading, an
//!   availability flag) onto a single always-held key whose pressure
//!   tracks the reading.
//! - [`RangedChannel`] maps a bounded signed value (tilt angles, pose
//!   components) linearly onto a single always-held key.
//!
//! The same [`BipolarAxis`] algorithm serves gamepad thumbsticks,
//! spatial-controller thumbsticks and bipolar sensor channels; only the
//! deadzone, the magnitude scale and the key pair differ per caller.

use crate::event::{TransitionKind, NO_POSITION};
use crate::input_state::InputState;
use crate::keys::KeyId;
use serde::{Deserialize, Serialize};

/// Deadzone applied to stick-like axes when none is configured.
pub const DEFAULT_DEADZONE: f32 = 0.15;

/// A signed analog value exposed as two virtual direction keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct BipolarAxis {
    positive: KeyId,
    negative: KeyId,
    deadzone: f32,
    max_magnitude: f32,
}

impl BipolarAxis {
    /// Creates an axis over the given direction keys with the default
    /// deadzone and a full-deflection magnitude of 1.
    pub const fn new(positive: KeyId, negative: KeyId) -> Self {
        Self {
            positive,
            negative,
            deadzone: DEFAULT_DEADZONE,
            max_magnitude: 1.0,
        }
    }

    /// Sets the deadzone magnitude; values at or below it read as 0.
    pub const fn with_deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }

    /// Sets the magnitude that maps to pressure 1.0.
    pub const fn with_max_magnitude(mut self, max_magnitude: f32) -> Self {
        self.max_magnitude = max_magnitude;
        self
    }

    /// The key engaged by positive values.
    #[must_use]
    pub const fn positive_key(&self) -> KeyId {
        self.positive
    }

    /// The key engaged by negative values.
    #[must_use]
    pub const fn negative_key(&self) -> KeyId {
        self.negative
    }

    fn pressure(&self, magnitude: f32) -> f32 {
        ((magnitude - self.deadzone) / (self.max_magnitude - self.deadzone)).clamp(0.0, 1.0)
    }

    /// Advances one side of the axis given its engagement edge.
    fn step(
        &self,
        state: &mut InputState,
        key: KeyId,
        magnitude: f32,
        engaged: bool,
        was_engaged: bool,
    ) {
        if engaged && !was_engaged {
            let pressure = self.pressure(magnitude);
            state.add_event(
                key,
                TransitionKind::Pressed,
                pressure,
                NO_POSITION,
                NO_POSITION,
                None,
            );
        } else if !engaged && was_engaged {
            state.add_event(
                key,
                TransitionKind::Released,
                0.0,
                NO_POSITION,
                NO_POSITION,
                None,
            );
        } else if engaged {
            let pressure = self.pressure(magnitude);
            if state
                .active_event(key)
                .is_some_and(|held| held.pressure != pressure)
            {
                state.add_event(
                    key,
                    TransitionKind::Updated,
                    pressure,
                    NO_POSITION,
                    NO_POSITION,
                    None,
                );
            }
        }
    }

    /// Feeds one sample, deriving the previous engagement from the
    /// previous raw value (0 if unknown).
    ///
    /// Emits at most one transition per side: `Pressed` on crossing the
    /// deadzone outward, `Released` on crossing back, `Updated` while
    /// engaged and only when the recomputed pressure differs from the
    /// stored one. The two sides are treated as unrelated virtual keys.
    pub fn apply(&self, state: &mut InputState, current: f32, previous: f32) {
        self.step(
            state,
            self.positive,
            current,
            current > self.deadzone,
            previous > self.deadzone,
        );
        self.step(
            state,
            self.negative,
            current.abs(),
            current < -self.deadzone,
            previous < -self.deadzone,
        );
    }

    /// Feeds one sample, deriving the previous engagement from the
    /// held-key map instead of a remembered value.
    ///
    /// Suits channels without a caller-side previous sample, such as
    /// sensor readings delivered by callback.
    pub fn apply_latched(&self, state: &mut InputState, current: f32) {
        let was_positive = state.is_active(self.positive);
        let was_negative = state.is_active(self.negative);
        self.step(
            state,
            self.positive,
            current,
            current > self.deadzone,
            was_positive,
        );
        self.step(
            state,
            self.negative,
            current.abs(),
            current < -self.deadzone,
            was_negative,
        );
    }

    /// Releases whichever side the previous value held engaged.
    ///
    /// Used on device disconnect, when no further samples will arrive.
    /// Only keys actually held are released.
    pub fn release(&self, state: &mut InputState, previous: f32) {
        if previous > self.deadzone && state.is_active(self.positive) {
            state.add_event(
                self.positive,
                TransitionKind::Released,
                0.0,
                NO_POSITION,
                NO_POSITION,
                None,
            );
        }
        if previous < -self.deadzone && state.is_active(self.negative) {
            state.add_event(
                self.negative,
                TransitionKind::Released,
                0.0,
                NO_POSITION,
                NO_POSITION,
                None,
            );
        }
    }
}

/// Writes the press-then-update discipline shared by the single-key
/// channels: `Pressed` on first observation, `Updated` when the pressure
/// changes, never `Released` (release is the owning adapter's lifecycle).
fn press_or_update(state: &mut InputState, key: KeyId, pressure: f32) {
    match state.active_event(key) {
        None => {
            state.add_event(
                key,
                TransitionKind::Pressed,
                pressure,
                NO_POSITION,
                NO_POSITION,
                None,
            );
        }
        Some(held) if held.pressure != pressure => {
            state.add_event(
                key,
                TransitionKind::Updated,
                pressure,
                NO_POSITION,
                NO_POSITION,
                None,
            );
        }
        Some(_) => {}
    }
}

/// A one-sided value normalized onto a single key's pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct UnipolarChannel {
    key: KeyId,
    max_value: f32,
}

impl UnipolarChannel {
    /// Creates a channel mapping `[0, max_value]` to pressure `[0, 1]`.
    pub const fn new(key: KeyId, max_value: f32) -> Self {
        Self { key, max_value }
    }

    /// Feeds one reading.
    pub fn update(&self, state: &mut InputState, value: f32) {
        let pressure = (value / self.max_value).clamp(0.0, 1.0);
        press_or_update(state, self.key, pressure);
    }

    /// Feeds a boolean reading as pressure 0 or 1.
    pub fn update_flag(&self, state: &mut InputState, engaged: bool) {
        press_or_update(state, self.key, f32::from(engaged));
    }
}

/// A bounded signed value normalized linearly onto a single key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct RangedChannel {
    key: KeyId,
    min: f32,
    max: f32,
}

impl RangedChannel {
    /// Creates a channel mapping `[min, max]` to pressure `[0, 1]`.
    pub const fn new(key: KeyId, min: f32, max: f32) -> Self {
        Self { key, min, max }
    }

    /// Feeds one reading.
    pub fn update(&self, state: &mut InputState, value: f32) {
        let pressure = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        press_or_update(state, self.key, pressure);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::sensor::{
        ACCELERATION_X_NEGATIVE, ACCELERATION_X_POSITIVE, ORIENTATION_HEADING, ORIENTATION_PITCH,
    };

    #[test]
    fn pressure_scales_past_deadzone() {
        let axis =
            BipolarAxis::new(ACCELERATION_X_POSITIVE, ACCELERATION_X_NEGATIVE).with_deadzone(0.2);
        assert_eq!(axis.pressure(0.2), 0.0);
        assert_eq!(axis.pressure(1.0), 1.0);
        assert!((axis.pressure(0.6) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn sides_are_independent() {
        let axis = BipolarAxis::new(ACCELERATION_X_POSITIVE, ACCELERATION_X_NEGATIVE);
        let mut state = InputState::default();

        axis.apply(&mut state, 0.5, 0.0);
        assert!(state.is_active(ACCELERATION_X_POSITIVE));
        assert!(!state.is_active(ACCELERATION_X_NEGATIVE));

        axis.apply(&mut state, -0.5, 0.5);
        assert!(!state.is_active(ACCELERATION_X_POSITIVE));
        assert!(state.is_active(ACCELERATION_X_NEGATIVE));
    }

    #[test]
    fn latched_release_on_zero_sample() {
        let axis = BipolarAxis::new(ACCELERATION_X_POSITIVE, ACCELERATION_X_NEGATIVE)
            .with_deadzone(0.1)
            .with_max_magnitude(100.0);
        let mut state = InputState::default();

        axis.apply_latched(&mut state, 5.0);
        assert!(state.is_active(ACCELERATION_X_POSITIVE));

        axis.apply_latched(&mut state, 0.0);
        assert!(!state.is_active(ACCELERATION_X_POSITIVE));
    }

    #[test]
    fn unipolar_presses_then_updates() {
        let channel = UnipolarChannel::new(ORIENTATION_HEADING, 360.0);
        let mut state = InputState::default();

        channel.update(&mut state, 90.0);
        assert_eq!(
            state.active_event(ORIENTATION_HEADING).unwrap().pressure,
            0.25
        );
        assert_eq!(state.pending_len(), 1);

        // Same reading: no event.
        channel.update(&mut state, 90.0);
        assert_eq!(state.pending_len(), 1);

        channel.update(&mut state, 180.0);
        assert_eq!(state.pending_len(), 2);
        assert_eq!(
            state.active_event(ORIENTATION_HEADING).unwrap().pressure,
            0.5
        );
    }

    #[test]
    fn ranged_maps_midpoint_to_half() {
        let channel = RangedChannel::new(ORIENTATION_PITCH, -180.0, 180.0);
        let mut state = InputState::default();
        channel.update(&mut state, 0.0);
        assert_eq!(state.active_event(ORIENTATION_PITCH).unwrap().pressure, 0.5);
    }
}
