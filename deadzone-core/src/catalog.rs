//! Remedy metadata for presentation: descriptions, costs, and benefit
//! ratings.
//!
//! The scoring engine never reads the catalog; it exists so callers
//! can decorate a winning [`Remedy`] with display material loaded from
//! a JSON file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Remedy;

/// Errors raised while building catalog entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A benefit rating fell outside the 1–5 star scale.
    #[error("benefit rating {value} is outside the 1..=5 scale")]
    RatingOutOfRange {
        /// The rejected raw value.
        value: u8,
    },
}

/// A benefit rating on a 1–5 star scale.
///
/// # Examples
/// ```
/// use deadzone_core::BenefitRating;
///
/// let rating = BenefitRating::try_from(4).unwrap();
/// assert_eq!(rating.stars(), 4);
/// assert!(BenefitRating::try_from(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BenefitRating(u8);

impl BenefitRating {
    /// Return the number of stars, in `1..=5`.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for BenefitRating {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CatalogError::RatingOutOfRange { value })
        }
    }
}

impl From<BenefitRating> for u8 {
    fn from(rating: BenefitRating) -> Self {
        rating.stars()
    }
}

/// Display metadata for one remedy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemedyDetails {
    /// Human-readable summary of the intervention.
    pub description: String,
    /// Estimated cost in whole currency units.
    pub cost: u64,
    /// Named benefit ratings, e.g. `"Flood Mitigation": 5`.
    #[serde(default)]
    pub benefits: BTreeMap<String, BenefitRating>,
}

/// Catalog of display metadata keyed by remedy.
///
/// # Examples
/// ```
/// use deadzone_core::{Remedy, RemedyCatalog};
///
/// let json = r#"{"Park": {"description": "Open green space", "cost": 250000}}"#;
/// let catalog: RemedyCatalog = serde_json::from_str(json).unwrap();
/// assert!(catalog.details(Remedy::Park).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemedyCatalog {
    entries: BTreeMap<Remedy, RemedyDetails>,
}

impl RemedyCatalog {
    /// Construct an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or replace the entry for a remedy.
    pub fn insert(&mut self, remedy: Remedy, details: RemedyDetails) {
        self.entries.insert(remedy, details);
    }

    /// Add an entry while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_entry(mut self, remedy: Remedy, details: RemedyDetails) -> Self {
        self.insert(remedy, details);
        self
    }

    /// Return the entry for a remedy, if present.
    #[must_use]
    pub fn details(&self, remedy: Remedy) -> Option<&RemedyDetails> {
        self.entries.get(&remedy)
    }

    /// Return the number of catalogued remedies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in remedy order.
    pub fn iter(&self) -> impl Iterator<Item = (Remedy, &RemedyDetails)> + '_ {
        self.entries.iter().map(|(&remedy, details)| (remedy, details))
    }
}
