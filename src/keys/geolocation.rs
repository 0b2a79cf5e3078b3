//! Geolocation key ids.

use super::{KeyId, GEOLOCATION_BASE_ID};

/// Held while a position watch is delivering fixes; `x`/`y` carry
/// longitude/latitude and pressure carries normalized altitude.
pub const GEOLOCATION_CHANGE: KeyId = KeyId::new(GEOLOCATION_BASE_ID);
/// Fix accuracy on a logarithmic pressure scale (1.0 ≈ millimetric,
/// 0.0 ≈ unusable or unknown).
pub const GEOLOCATION_ACCURACY: KeyId = KeyId::new(GEOLOCATION_BASE_ID + 1);

const LABELS: &[(KeyId, &str)] = &[
    (GEOLOCATION_CHANGE, "GeolocationChange"),
    (GEOLOCATION_ACCURACY, "GeolocationAccuracy"),
];

pub(crate) fn label_of(key: KeyId) -> Option<&'static str> {
    LABELS
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, label)| *label)
}
