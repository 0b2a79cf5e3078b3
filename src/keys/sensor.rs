//! Ambient-sensor key ids.
//!
//! Bipolar channels (acceleration, rotation rate) own a pair of ids, one
//! per sign; orientation channels own a single id whose pressure carries
//! the normalized reading.

use super::{KeyId, SENSOR_BASE_ID};

/// Linear acceleration, X axis, positive direction.
pub const ACCELERATION_X_POSITIVE: KeyId = KeyId::new(SENSOR_BASE_ID);
/// Linear acceleration, X axis, negative direction.
pub const ACCELERATION_X_NEGATIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 1);
/// Linear acceleration, Y axis, positive direction.
pub const ACCELERATION_Y_POSITIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 2);
/// Linear acceleration, Y axis, negative direction.
pub const ACCELERATION_Y_NEGATIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 3);
/// Linear acceleration, Z axis, positive direction.
pub const ACCELERATION_Z_POSITIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 4);
/// Linear acceleration, Z axis, negative direction.
pub const ACCELERATION_Z_NEGATIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 5);

/// Acceleration including gravity, X axis, positive direction.
pub const GRAVITY_ACCELERATION_X_POSITIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 10);
/// Acceleration including gravity, X axis, negative direction.
pub const GRAVITY_ACCELERATION_X_NEGATIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 11);
/// Acceleration including gravity, Y axis, positive direction.
pub const GRAVITY_ACCELERATION_Y_POSITIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 12);
/// Acceleration including gravity, Y axis, negative direction.
pub const GRAVITY_ACCELERATION_Y_NEGATIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 13);
/// Acceleration including gravity, Z axis, positive direction.
pub const GRAVITY_ACCELERATION_Z_POSITIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 14);
/// Acceleration including gravity, Z axis, negative direction.
pub const GRAVITY_ACCELERATION_Z_NEGATIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 15);

/// Rotation rate around the vertical axis, positive direction.
pub const ROTATION_RATE_YAW_POSITIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 20);
/// Rotation rate around the vertical axis, negative direction.
pub const ROTATION_RATE_YAW_NEGATIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 21);
/// Rotation rate around the lateral axis, positive direction.
pub const ROTATION_RATE_PITCH_POSITIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 22);
/// Rotation rate around the lateral axis, negative direction.
pub const ROTATION_RATE_PITCH_NEGATIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 23);
/// Rotation rate around the longitudinal axis, positive direction.
pub const ROTATION_RATE_ROLL_POSITIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 24);
/// Rotation rate around the longitudinal axis, negative direction.
pub const ROTATION_RATE_ROLL_NEGATIVE: KeyId = KeyId::new(SENSOR_BASE_ID + 25);

/// Compass heading, 0–360° normalized to pressure `[0, 1]`.
pub const ORIENTATION_HEADING: KeyId = KeyId::new(SENSOR_BASE_ID + 100);
/// Front-back tilt, −180..180° normalized to pressure `[0, 1]`.
pub const ORIENTATION_PITCH: KeyId = KeyId::new(SENSOR_BASE_ID + 101);
/// Left-right tilt, −90..90° normalized to pressure `[0, 1]`.
pub const ORIENTATION_ROLL: KeyId = KeyId::new(SENSOR_BASE_ID + 102);
/// Whether an absolute orientation reference is available (pressure 0 or 1).
pub const ORIENTATION_ABSOLUTE: KeyId = KeyId::new(SENSOR_BASE_ID + 103);

const LABELS: &[(KeyId, &str)] = &[
    (ACCELERATION_X_POSITIVE, "AccelerationX+"),
    (ACCELERATION_X_NEGATIVE, "AccelerationX-"),
    (ACCELERATION_Y_POSITIVE, "AccelerationY+"),
    (ACCELERATION_Y_NEGATIVE, "AccelerationY-"),
    (ACCELERATION_Z_POSITIVE, "AccelerationZ+"),
    (ACCELERATION_Z_NEGATIVE, "AccelerationZ-"),
    (GRAVITY_ACCELERATION_X_POSITIVE, "GravityAccelerationX+"),
    (GRAVITY_ACCELERATION_X_NEGATIVE, "GravityAccelerationX-"),
    (GRAVITY_ACCELERATION_Y_POSITIVE, "GravityAccelerationY+"),
    (GRAVITY_ACCELERATION_Y_NEGATIVE, "GravityAccelerationY-"),
    (GRAVITY_ACCELERATION_Z_POSITIVE, "GravityAccelerationZ+"),
    (GRAVITY_ACCELERATION_Z_NEGATIVE, "GravityAccelerationZ-"),
    (ROTATION_RATE_YAW_POSITIVE, "RotationRateYaw+"),
    (ROTATION_RATE_YAW_NEGATIVE, "RotationRateYaw-"),
    (ROTATION_RATE_PITCH_POSITIVE, "RotationRatePitch+"),
    (ROTATION_RATE_PITCH_NEGATIVE, "RotationRatePitch-"),
    (ROTATION_RATE_ROLL_POSITIVE, "RotationRateRoll+"),
    (ROTATION_RATE_ROLL_NEGATIVE, "RotationRateRoll-"),
    (ORIENTATION_HEADING, "OrientationHeading"),
    (ORIENTATION_PITCH, "OrientationPitch"),
    (ORIENTATION_ROLL, "OrientationRoll"),
    (ORIENTATION_ABSOLUTE, "OrientationAbsolute"),
];

pub(crate) fn label_of(key: KeyId) -> Option<&'static str> {
    LABELS
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, label)| *label)
}
