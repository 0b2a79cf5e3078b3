//! Ambient-sensor adapter: acceleration, rotation rate and orientation
//! readings.

use super::{release_family, DeviceAdapter};
use crate::axislike::{BipolarAxis, RangedChannel, UnipolarChannel};
use crate::input_state::InputState;
use crate::keys::sensor::{
    ACCELERATION_X_NEGATIVE, ACCELERATION_X_POSITIVE, ACCELERATION_Y_NEGATIVE,
    ACCELERATION_Y_POSITIVE, ACCELERATION_Z_NEGATIVE, ACCELERATION_Z_POSITIVE,
    GRAVITY_ACCELERATION_X_NEGATIVE, GRAVITY_ACCELERATION_X_POSITIVE,
    GRAVITY_ACCELERATION_Y_NEGATIVE, GRAVITY_ACCELERATION_Y_POSITIVE,
    GRAVITY_ACCELERATION_Z_NEGATIVE, GRAVITY_ACCELERATION_Z_POSITIVE, ORIENTATION_ABSOLUTE,
    ORIENTATION_HEADING, ORIENTATION_PITCH, ORIENTATION_ROLL, ROTATION_RATE_PITCH_NEGATIVE,
    ROTATION_RATE_PITCH_POSITIVE, ROTATION_RATE_ROLL_NEGATIVE, ROTATION_RATE_ROLL_POSITIVE,
    ROTATION_RATE_YAW_NEGATIVE, ROTATION_RATE_YAW_POSITIVE,
};
use crate::keys::{KeyFamily, KeyId};
use itertools::izip;

/// Acceleration magnitude mapping to pressure 1.0, in m/s² (≈ ±10 g).
pub const MAX_ACCELERATION: f32 = 100.0;
/// Rotation rate mapping to pressure 1.0, in degrees per second.
pub const MAX_ROTATION_RATE: f32 = 2_000.0;
/// Deadzone applied to bipolar sensor channels to filter noise, when none
/// is configured.
pub const DEFAULT_SENSOR_DEADZONE: f32 = 0.1;

/// Translates sensor readings into transitions.
///
/// Bipolar channels derive their previous engagement from the held-key
/// map, so a reading of `None` (sensor stopped reporting) reads as 0 and
/// releases whatever the channel held. Orientation channels follow the
/// press-then-update discipline and never release on their own; only
/// [`teardown`](DeviceAdapter::teardown) releases them.
#[derive(Debug, Clone)]
pub struct SensorAdapter {
    deadzone: f32,
}

impl Default for SensorAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorAdapter {
    /// Creates an adapter with the default noise deadzone.
    #[must_use]
    pub fn new() -> Self {
        Self {
            deadzone: DEFAULT_SENSOR_DEADZONE,
        }
    }

    /// Overrides the noise deadzone.
    #[must_use]
    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }

    fn channel(&self, positive: KeyId, negative: KeyId, max_magnitude: f32) -> BipolarAxis {
        BipolarAxis::new(positive, negative)
            .with_deadzone(self.deadzone)
            .with_max_magnitude(max_magnitude)
    }

    fn triplet(
        &self,
        state: &mut InputState,
        values: [Option<f32>; 3],
        positives: [KeyId; 3],
        negatives: [KeyId; 3],
        max_magnitude: f32,
    ) {
        for (value, positive, negative) in izip!(values, positives, negatives) {
            self.channel(positive, negative, max_magnitude)
                .apply_latched(state, value.unwrap_or(0.0));
        }
    }

    /// Feeds a linear-acceleration reading (gravity excluded), in m/s².
    pub fn acceleration(
        &mut self,
        state: &mut InputState,
        x: Option<f32>,
        y: Option<f32>,
        z: Option<f32>,
    ) {
        self.triplet(
            state,
            [x, y, z],
            [
                ACCELERATION_X_POSITIVE,
                ACCELERATION_Y_POSITIVE,
                ACCELERATION_Z_POSITIVE,
            ],
            [
                ACCELERATION_X_NEGATIVE,
                ACCELERATION_Y_NEGATIVE,
                ACCELERATION_Z_NEGATIVE,
            ],
            MAX_ACCELERATION,
        );
    }

    /// Feeds an acceleration-including-gravity reading, in m/s².
    pub fn acceleration_with_gravity(
        &mut self,
        state: &mut InputState,
        x: Option<f32>,
        y: Option<f32>,
        z: Option<f32>,
    ) {
        self.triplet(
            state,
            [x, y, z],
            [
                GRAVITY_ACCELERATION_X_POSITIVE,
                GRAVITY_ACCELERATION_Y_POSITIVE,
                GRAVITY_ACCELERATION_Z_POSITIVE,
            ],
            [
                GRAVITY_ACCELERATION_X_NEGATIVE,
                GRAVITY_ACCELERATION_Y_NEGATIVE,
                GRAVITY_ACCELERATION_Z_NEGATIVE,
            ],
            MAX_ACCELERATION,
        );
    }

    /// Feeds a rotation-rate reading, in degrees per second.
    pub fn rotation_rate(
        &mut self,
        state: &mut InputState,
        yaw: Option<f32>,
        pitch: Option<f32>,
        roll: Option<f32>,
    ) {
        self.triplet(
            state,
            [yaw, pitch, roll],
            [
                ROTATION_RATE_YAW_POSITIVE,
                ROTATION_RATE_PITCH_POSITIVE,
                ROTATION_RATE_ROLL_POSITIVE,
            ],
            [
                ROTATION_RATE_YAW_NEGATIVE,
                ROTATION_RATE_PITCH_NEGATIVE,
                ROTATION_RATE_ROLL_NEGATIVE,
            ],
            MAX_ROTATION_RATE,
        );
    }

    /// Feeds an orientation reading: compass heading 0–360°, front-back
    /// tilt −180..180°, left-right tilt −90..90°.
    ///
    /// An absent heading is skipped (its key keeps its last pressure);
    /// absent tilts read as the neutral midpoint.
    pub fn orientation(
        &mut self,
        state: &mut InputState,
        heading: Option<f32>,
        pitch: Option<f32>,
        roll: Option<f32>,
    ) {
        if let Some(heading) = heading {
            UnipolarChannel::new(ORIENTATION_HEADING, 360.0).update(state, heading);
        }
        RangedChannel::new(ORIENTATION_PITCH, -180.0, 180.0).update(state, pitch.unwrap_or(0.0));
        RangedChannel::new(ORIENTATION_ROLL, -90.0, 90.0).update(state, roll.unwrap_or(0.0));
    }

    /// Reports whether an absolute orientation reference is available.
    pub fn orientation_available(&mut self, state: &mut InputState, available: bool) {
        UnipolarChannel::new(ORIENTATION_ABSOLUTE, 1.0).update_flag(state, available);
    }
}

impl DeviceAdapter for SensorAdapter {
    fn family(&self) -> KeyFamily {
        KeyFamily::AmbientSensor
    }

    fn teardown(&mut self, state: &mut InputState) {
        release_family(state, KeyFamily::AmbientSensor, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::TransitionKind;

    #[test]
    fn acceleration_pressure_is_scaled_to_range() {
        let mut state = InputState::default();
        let mut adapter = SensorAdapter::new();

        adapter.acceleration(&mut state, Some(50.0), None, None);
        let held = state.active_event(ACCELERATION_X_POSITIVE).unwrap();
        // (50 - 0.1) / (100 - 0.1)
        assert!((held.pressure - 0.499_499_5).abs() < 1e-4);
        assert!(!state.is_active(ACCELERATION_Y_POSITIVE));
    }

    #[test]
    fn absent_reading_releases_held_channel() {
        let mut state = InputState::default();
        let mut adapter = SensorAdapter::new();

        adapter.acceleration(&mut state, Some(20.0), None, None);
        assert!(state.is_active(ACCELERATION_X_POSITIVE));

        adapter.acceleration(&mut state, None, None, None);
        assert!(!state.is_active(ACCELERATION_X_POSITIVE));
    }

    #[test]
    fn orientation_never_releases_on_its_own() {
        let mut state = InputState::default();
        let mut adapter = SensorAdapter::new();

        adapter.orientation(&mut state, Some(180.0), Some(0.0), Some(0.0));
        adapter.orientation(&mut state, None, None, None);
        assert!(state.is_active(ORIENTATION_HEADING));
        assert!(state.is_active(ORIENTATION_PITCH));

        adapter.teardown(&mut state);
        assert!(!state.is_active(ORIENTATION_HEADING));
    }

    #[test]
    fn availability_flag_toggles_pressure() {
        let mut state = InputState::default();
        let mut adapter = SensorAdapter::new();

        adapter.orientation_available(&mut state, true);
        assert_eq!(state.active_event(ORIENTATION_ABSOLUTE).unwrap().pressure, 1.0);

        adapter.orientation_available(&mut state, false);
        let last = state.active_event(ORIENTATION_ABSOLUTE).unwrap();
        assert_eq!(last.pressure, 0.0);
        assert_eq!(state.unconsumed().last().unwrap().kind, TransitionKind::Updated);
    }
}
