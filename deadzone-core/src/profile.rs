//! Site profiles: one site's observed feature values.
//!
//! Provides an API to set, get, and chain observations. The backing
//! map is ordered so accumulation over a profile is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Feature, FeatureValue};

/// The set of feature observations describing one site.
///
/// # Examples
/// ```
/// use deadzone_core::{Feature, FeatureValue, SiteProfile};
///
/// let profile = SiteProfile::new()
///     .with_value(Feature::FloodRisk, true)
///     .with_value(Feature::Size, 0.8);
/// assert_eq!(
///     profile.value(Feature::FloodRisk),
///     Some(FeatureValue::Flag(true)),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteProfile {
    observations: BTreeMap<Feature, FeatureValue>,
}

impl SiteProfile {
    /// Construct an empty profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            observations: BTreeMap::new(),
        }
    }

    /// Return the observed value for a feature, if present.
    #[must_use]
    pub fn value(&self, feature: Feature) -> Option<FeatureValue> {
        self.observations.get(&feature).copied()
    }

    /// Insert or replace an observation.
    pub fn set_value(&mut self, feature: Feature, value: impl Into<FeatureValue>) {
        self.observations.insert(feature, value.into());
    }

    /// Add an observation while returning `self` for chaining.
    #[must_use]
    pub fn with_value(mut self, feature: Feature, value: impl Into<FeatureValue>) -> Self {
        self.set_value(feature, value);
        self
    }

    /// Iterate over observations in feature order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, FeatureValue)> + '_ {
        self.observations
            .iter()
            .map(|(&feature, &value)| (feature, value))
    }

    /// Return the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Report whether the profile holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
