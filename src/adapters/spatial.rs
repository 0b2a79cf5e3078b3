//! Spatial-tracking adapter: headset and controller poses, controller
//! buttons and axes.

use super::{release_family, ButtonSample, DeviceAdapter};
use crate::axislike::{BipolarAxis, RangedChannel, DEFAULT_DEADZONE};
use crate::event::{TransitionKind, NO_POSITION};
use crate::input_state::InputState;
use crate::keys::spatial::{
    axis_keys, button_key, pose_key, PoseComponent, HEADSET_DEVICE, LEFT_DEVICE,
    MAX_SPATIAL_AXES, MAX_SPATIAL_BUTTONS, RIGHT_DEVICE,
};
use crate::keys::KeyFamily;
use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

/// Distance from the origin mapping to pressure 1.0, in metres.
pub const MAX_TRACKED_DISTANCE: f32 = 10.0;

/// Which hand a controller reports itself as.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    /// The left hand.
    Left,
    /// The right hand.
    Right,
    /// The platform does not say.
    #[default]
    Unknown,
}

/// A tracked pose: position vector plus orientation quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseSample {
    /// Position in metres, `[x, y, z]`.
    pub position: [f32; 3],
    /// Orientation quaternion, `[x, y, z, w]`.
    pub orientation: [f32; 4],
}

/// One controller's raw state for a single frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerSample {
    /// Reported hand; `Unknown` hands claim the first free side.
    pub handedness: Handedness,
    /// Grip pose, when tracking has one this frame.
    pub pose: Option<PoseSample>,
    /// Button states; entries past [`MAX_SPATIAL_BUTTONS`] are ignored.
    pub buttons: Vec<ButtonSample>,
    /// Raw axis values in `[-1, 1]`; entries past [`MAX_SPATIAL_AXES`]
    /// are ignored.
    pub axes: Vec<f32>,
}

#[derive(Debug, Clone, Default)]
struct ControllerState {
    buttons: ArrayVec<ButtonSample, MAX_SPATIAL_BUTTONS>,
    axes: ArrayVec<f32, MAX_SPATIAL_AXES>,
}

/// Translates tracked-session frames into transitions.
///
/// Pose components are ranged channels: positions map ±[`MAX_TRACKED_DISTANCE`]
/// metres onto `[0, 1]`, quaternion components map ±1. Controllers are
/// assigned to the left/right device slots by reported handedness;
/// `Unknown` hands take the first free side in arrival order, and
/// controllers beyond two are ignored. A controller missing from a frame
/// releases everything its device held.
#[derive(Debug, Clone)]
pub struct SpatialAdapter {
    previous: [Option<ControllerState>; 2],
    deadzone: f32,
}

impl Default for SpatialAdapter {
    fn default() -> Self {
        Self::new()
    }
}

const SIDE_DEVICES: [u32; 2] = [LEFT_DEVICE, RIGHT_DEVICE];

impl SpatialAdapter {
    /// Creates an adapter with the default thumbstick deadzone.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: [None, None],
            deadzone: DEFAULT_DEADZONE,
        }
    }

    /// Overrides the thumbstick deadzone.
    #[must_use]
    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }

    fn axis(&self, device: u32, index: usize) -> BipolarAxis {
        let (positive, negative) = axis_keys(device, index);
        BipolarAxis::new(positive, negative).with_deadzone(self.deadzone)
    }

    fn write_pose(state: &mut InputState, device: u32, pose: &PoseSample) {
        let values = pose.position.iter().chain(pose.orientation.iter());
        for (component, &value) in PoseComponent::ALL.iter().zip(values) {
            let half_range = if component.is_position() {
                MAX_TRACKED_DISTANCE
            } else {
                1.0
            };
            RangedChannel::new(pose_key(device, *component), -half_range, half_range)
                .update(state, value);
        }
    }

    /// Feeds the headset pose for this frame.
    pub fn headset_pose(&mut self, state: &mut InputState, pose: &PoseSample) {
        Self::write_pose(state, HEADSET_DEVICE, pose);
    }

    /// Feeds this frame's controller list.
    pub fn poll_controllers(&mut self, state: &mut InputState, controllers: &[ControllerSample]) {
        let mut seen = [false; 2];

        for sample in controllers {
            let side = match sample.handedness {
                Handedness::Left => 0,
                Handedness::Right => 1,
                Handedness::Unknown => {
                    if !seen[0] {
                        0
                    } else if !seen[1] {
                        1
                    } else {
                        continue;
                    }
                }
            };
            if seen[side] {
                continue;
            }
            seen[side] = true;
            self.diff_controller(state, side, sample);
        }

        for side in 0..2 {
            if !seen[side] {
                if let Some(prev) = self.previous[side].take() {
                    self.release_controller(state, SIDE_DEVICES[side], &prev);
                }
            }
        }
    }

    fn diff_controller(&mut self, state: &mut InputState, side: usize, sample: &ControllerSample) {
        let device = SIDE_DEVICES[side];
        let prev = self.previous[side].take().unwrap_or_default();

        if let Some(pose) = &sample.pose {
            Self::write_pose(state, device, pose);
        }

        for (index, button) in sample.buttons.iter().take(MAX_SPATIAL_BUTTONS).enumerate() {
            let was_pressed = prev.buttons.get(index).is_some_and(|b| b.pressed);
            let key = button_key(device, index);
            if button.pressed && !was_pressed {
                state.add_event(
                    key,
                    TransitionKind::Pressed,
                    button.value,
                    NO_POSITION,
                    NO_POSITION,
                    None,
                );
            } else if !button.pressed && was_pressed {
                state.add_event(key, TransitionKind::Released, 0.0, NO_POSITION, NO_POSITION, None);
            } else if button.pressed
                && state
                    .active_event(key)
                    .is_some_and(|held| held.pressure != button.value)
            {
                state.add_event(
                    key,
                    TransitionKind::Updated,
                    button.value,
                    NO_POSITION,
                    NO_POSITION,
                    None,
                );
            }
        }

        for (index, &current) in sample.axes.iter().take(MAX_SPATIAL_AXES).enumerate() {
            let previous = prev.axes.get(index).copied().unwrap_or(0.0);
            self.axis(device, index).apply(state, current, previous);
        }

        let mut next = ControllerState::default();
        next.buttons
            .extend(sample.buttons.iter().take(MAX_SPATIAL_BUTTONS).copied());
        next.axes
            .extend(sample.axes.iter().take(MAX_SPATIAL_AXES).copied());
        self.previous[side] = Some(next);
    }

    fn release_controller(&self, state: &mut InputState, device: u32, prev: &ControllerState) {
        log::debug!("spatial controller on device {device} vanished; releasing held keys");
        for component in PoseComponent::ALL {
            let key = pose_key(device, component);
            if state.is_active(key) {
                state.add_event(key, TransitionKind::Released, 0.0, NO_POSITION, NO_POSITION, None);
            }
        }
        for (index, button) in prev.buttons.iter().enumerate() {
            let key = button_key(device, index);
            if button.pressed && state.is_active(key) {
                state.add_event(key, TransitionKind::Released, 0.0, NO_POSITION, NO_POSITION, None);
            }
        }
        for (index, &previous) in prev.axes.iter().enumerate() {
            self.axis(device, index).release(state, previous);
        }
    }

    /// Ends the tracked session: releases every spatial key still held
    /// and forgets controller state.
    pub fn session_ended(&mut self, state: &mut InputState) {
        release_family(state, KeyFamily::SpatialTracking, true);
        self.previous = [None, None];
    }
}

impl DeviceAdapter for SpatialAdapter {
    fn family(&self) -> KeyFamily {
        KeyFamily::SpatialTracking
    }

    fn teardown(&mut self, state: &mut InputState) {
        self.session_ended(state);
    }
}
