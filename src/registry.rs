//! Checked ownership of key-id ranges.
//!
//! By convention each adapter owns its family's entire range and never
//! writes outside it. The registry turns that convention into a claim
//! validated once, at adapter-registration time: claims must be non-empty
//! and must not overlap any earlier claim.

use crate::keys::{KeyFamily, KeyId};
use derive_more::{Display, Error};
use std::ops::Range;

/// Why a range claim was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RegistryError {
    /// The claimed range contains no ids.
    #[display(fmt = "claimed key range is empty")]
    EmptyRange,
    /// The claimed range intersects a range claimed earlier.
    #[display(fmt = "claimed key range overlaps an existing claim")]
    OverlappingRange,
}

#[derive(Debug, Clone)]
struct Claim {
    owner: String,
    range: Range<u32>,
}

/// The set of validated range claims for one input session.
#[derive(Debug, Clone, Default)]
pub struct RangeRegistry {
    claims: Vec<Claim>,
}

impl RangeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a half-open id range for `owner`.
    pub fn register(
        &mut self,
        owner: impl Into<String>,
        range: Range<u32>,
    ) -> Result<(), RegistryError> {
        if range.is_empty() {
            return Err(RegistryError::EmptyRange);
        }
        let overlapping = self
            .claims
            .iter()
            .any(|claim| claim.range.start < range.end && range.start < claim.range.end);
        if overlapping {
            return Err(RegistryError::OverlappingRange);
        }
        self.claims.push(Claim {
            owner: owner.into(),
            range,
        });
        Ok(())
    }

    /// Claims an entire family range for `owner`.
    pub fn register_family(
        &mut self,
        owner: impl Into<String>,
        family: KeyFamily,
    ) -> Result<(), RegistryError> {
        self.register(owner, family.key_range())
    }

    /// The owner whose claim contains `key`, if any.
    #[must_use]
    pub fn owner_of(&self, key: KeyId) -> Option<&str> {
        self.claims
            .iter()
            .find(|claim| claim.range.contains(&key.raw()))
            .map(|claim| claim.owner.as_str())
    }

    /// Number of registered claims.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Is the registry empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::keyboard::KEY_A;
    use crate::keys::pointer::POINTER_LEFT;

    #[test]
    fn family_claims_resolve_owners() {
        let mut registry = RangeRegistry::new();
        registry
            .register_family("keyboard", KeyFamily::Keyboard)
            .unwrap();
        registry
            .register_family("pointer", KeyFamily::Pointer)
            .unwrap();

        assert_eq!(registry.owner_of(KEY_A), Some("keyboard"));
        assert_eq!(registry.owner_of(POINTER_LEFT), Some("pointer"));
        assert_eq!(registry.owner_of(KeyId::new(26_000)), None);
    }

    #[test]
    fn empty_claim_rejected() {
        let mut registry = RangeRegistry::new();
        assert_eq!(
            registry.register("nothing", 5..5),
            Err(RegistryError::EmptyRange)
        );
    }

    #[test]
    fn overlapping_claim_rejected() {
        let mut registry = RangeRegistry::new();
        registry.register("first", 0..100).unwrap();
        assert_eq!(
            registry.register("second", 50..150),
            Err(RegistryError::OverlappingRange)
        );
        // Adjacent is fine.
        registry.register("third", 100..150).unwrap();
        assert_eq!(registry.len(), 2);
    }
}
