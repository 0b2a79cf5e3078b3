//! Spatial-tracking key ids: headset and controller poses, controller
//! buttons and axes.
//!
//! Each tracked device owns a block of [`DEVICE_ID_RANGE`] ids: pose
//! components at the block start, buttons at [`BUTTON_OFFSET`], axis
//! direction pairs at [`AXIS_OFFSET`].

use super::{KeyId, SPATIAL_BASE_ID};
use std::fmt;

/// Ids reserved per tracked device.
pub const DEVICE_ID_RANGE: u32 = 1_000;
/// Offset of the pose block inside a device's range.
pub const POSE_OFFSET: u32 = 0;
/// Offset of the button block inside a device's range.
pub const BUTTON_OFFSET: u32 = 100;
/// Offset of the axis block inside a device's range.
pub const AXIS_OFFSET: u32 = 200;

/// Device index of the headset.
pub const HEADSET_DEVICE: u32 = 0;
/// Device index of the left-hand controller.
pub const LEFT_DEVICE: u32 = 1;
/// Device index of the right-hand controller.
pub const RIGHT_DEVICE: u32 = 2;

/// Maximum buttons tracked per controller.
pub const MAX_SPATIAL_BUTTONS: usize = 10;
/// Maximum axes tracked per controller (two thumbstick pairs).
pub const MAX_SPATIAL_AXES: usize = 4;

/// One component of a tracked pose: position vector then orientation
/// quaternion, in id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseComponent {
    /// Position along X, metres.
    PositionX,
    /// Position along Y, metres.
    PositionY,
    /// Position along Z, metres.
    PositionZ,
    /// Orientation quaternion X.
    OrientationX,
    /// Orientation quaternion Y.
    OrientationY,
    /// Orientation quaternion Z.
    OrientationZ,
    /// Orientation quaternion W.
    OrientationW,
}

impl PoseComponent {
    /// All components, in id order.
    pub const ALL: [PoseComponent; 7] = [
        PoseComponent::PositionX,
        PoseComponent::PositionY,
        PoseComponent::PositionZ,
        PoseComponent::OrientationX,
        PoseComponent::OrientationY,
        PoseComponent::OrientationZ,
        PoseComponent::OrientationW,
    ];

    /// Id offset of this component inside the pose block.
    #[must_use]
    pub const fn offset(self) -> u32 {
        self as u32
    }

    /// Is this a position (rather than orientation) component?
    #[must_use]
    pub const fn is_position(self) -> bool {
        (self as u32) < 3
    }
}

/// The key for one pose component of a device.
#[must_use]
pub fn pose_key(device: u32, component: PoseComponent) -> KeyId {
    debug_assert!(device <= RIGHT_DEVICE);
    KeyId::new(SPATIAL_BASE_ID + device * DEVICE_ID_RANGE + POSE_OFFSET + component.offset())
}

/// The key for one controller button.
#[must_use]
pub fn button_key(device: u32, button: usize) -> KeyId {
    debug_assert!(device <= RIGHT_DEVICE && button < MAX_SPATIAL_BUTTONS);
    KeyId::new(SPATIAL_BASE_ID + device * DEVICE_ID_RANGE + BUTTON_OFFSET + button as u32)
}

/// The (positive, negative) key pair for one controller axis.
#[must_use]
pub fn axis_keys(device: u32, axis: usize) -> (KeyId, KeyId) {
    debug_assert!(device <= RIGHT_DEVICE && axis < MAX_SPATIAL_AXES);
    let base = SPATIAL_BASE_ID + device * DEVICE_ID_RANGE + AXIS_OFFSET + (axis as u32) * 2;
    (KeyId::new(base), KeyId::new(base + 1))
}

const POSE_NAMES: [&str; 7] = [
    "PositionX",
    "PositionY",
    "PositionZ",
    "OrientationX",
    "OrientationY",
    "OrientationZ",
    "OrientationW",
];

pub(crate) fn write_label(f: &mut fmt::Formatter<'_>, raw: u32) -> fmt::Result {
    let index = raw - SPATIAL_BASE_ID;
    let device = index / DEVICE_ID_RANGE;
    let rest = index % DEVICE_ID_RANGE;
    let device_name = match device {
        HEADSET_DEVICE => "Hmd",
        LEFT_DEVICE => "Left",
        RIGHT_DEVICE => "Right",
        _ => return write!(f, "Spatial({raw})"),
    };
    if rest < BUTTON_OFFSET {
        match POSE_NAMES.get(rest as usize) {
            Some(name) => write!(f, "{device_name}{name}"),
            None => write!(f, "Spatial({raw})"),
        }
    } else if rest < AXIS_OFFSET {
        write!(f, "{device_name}Button{}", rest - BUTTON_OFFSET)
    } else if ((rest - AXIS_OFFSET) as usize) < MAX_SPATIAL_AXES * 2 {
        let pair = rest - AXIS_OFFSET;
        let sign = if pair % 2 == 0 { '+' } else { '-' };
        write!(f, "{device_name}Axis{}{sign}", pair / 2)
    } else {
        write!(f, "Spatial({raw})")
    }
}
