//! Geolocation adapter: position fixes from a platform watch.

use super::{release_family, DeviceAdapter};
use crate::event::{TransitionKind, NO_POSITION};
use crate::input_state::InputState;
use crate::keys::geolocation::{GEOLOCATION_ACCURACY, GEOLOCATION_CHANGE};
use crate::keys::KeyFamily;

/// Altitude mapping to pressure 1.0, in metres (100 km).
pub const ALTITUDE_RANGE: f32 = 100_000.0;

/// Maps a fix accuracy in metres onto the accuracy key's pressure.
///
/// Logarithmic: 1 mm accuracy reads as 1.0 and the scale reaches 0.0 at
/// 100 km; unknown or non-positive accuracy reads as 0.
#[must_use]
pub fn accuracy_pressure(accuracy: Option<f32>) -> f32 {
    match accuracy {
        Some(metres) if metres > 0.0 => (1.0 - (metres.log10() + 3.0) / 8.0).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Translates geolocation fixes into transitions.
///
/// The change key is held while a watch is delivering fixes; its `x`/`y`
/// carry longitude/latitude and its pressure the altitude normalized by
/// [`ALTITUDE_RANGE`]. The accuracy key tracks fix quality on the
/// [`accuracy_pressure`] scale. Both follow the press-then-update
/// discipline and release only on [`teardown`](DeviceAdapter::teardown).
#[derive(Debug, Clone, Copy, Default)]
pub struct GeolocationAdapter;

impl GeolocationAdapter {
    /// Creates the adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Feeds a successful fix.
    pub fn position_updated(
        &mut self,
        state: &mut InputState,
        longitude: f32,
        latitude: f32,
        altitude: Option<f32>,
        accuracy: Option<f32>,
    ) {
        let pressure = (altitude.unwrap_or(0.0) / ALTITUDE_RANGE).clamp(0.0, 1.0);
        match state.active_event(GEOLOCATION_CHANGE) {
            None => {
                state.add_event(
                    GEOLOCATION_CHANGE,
                    TransitionKind::Pressed,
                    pressure,
                    longitude,
                    latitude,
                    None,
                );
            }
            Some(held)
                if held.x != longitude || held.y != latitude || held.pressure != pressure =>
            {
                state.add_event(
                    GEOLOCATION_CHANGE,
                    TransitionKind::Updated,
                    pressure,
                    longitude,
                    latitude,
                    None,
                );
            }
            Some(_) => {}
        }
        self.write_accuracy(state, accuracy);
    }

    /// Feeds a watch error (permission denied, signal lost); the state
    /// simply reflects that no usable fix exists.
    pub fn position_error(&mut self, state: &mut InputState) {
        self.write_accuracy(state, None);
    }

    fn write_accuracy(&mut self, state: &mut InputState, accuracy: Option<f32>) {
        let pressure = accuracy_pressure(accuracy);
        match state.active_event(GEOLOCATION_ACCURACY) {
            None => {
                state.add_event(
                    GEOLOCATION_ACCURACY,
                    TransitionKind::Pressed,
                    pressure,
                    NO_POSITION,
                    NO_POSITION,
                    None,
                );
            }
            Some(held) if held.pressure != pressure => {
                state.add_event(
                    GEOLOCATION_ACCURACY,
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
}

impl DeviceAdapter for GeolocationAdapter {
    fn family(&self) -> KeyFamily {
        KeyFamily::Geolocation
    }

    fn teardown(&mut self, state: &mut InputState) {
        // The change key keeps its last coordinates on release.
        release_family(state, KeyFamily::Geolocation, true);
    }
}
