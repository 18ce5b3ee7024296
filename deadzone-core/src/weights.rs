//! Weight tables: the signed influence of each feature on each remedy.
//!
//! A [`WeightTable`] is an explicit configuration object built once and
//! passed into the engine, so tests can substitute alternatives without
//! touching global state. [`WeightTable::default`] carries the
//! canonical production weights.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{Feature, Remedy};

/// Canonical production weights, one row per feature.
const CANONICAL_WEIGHTS: &[(Feature, &[(Remedy, f32)])] = &[
    (
        Feature::Size,
        &[
            (Remedy::CommunityGarden, -1.0),
            (Remedy::SportsField, 2.0),
            (Remedy::Park, 2.0),
            (Remedy::Stormwater, 1.0),
        ],
    ),
    (
        Feature::ProximityToResidential,
        &[
            (Remedy::CommunityGarden, 2.0),
            (Remedy::Park, 2.0),
            (Remedy::CommunityCenter, 2.0),
        ],
    ),
    (
        Feature::ProximityToSchools,
        &[(Remedy::School, 3.0), (Remedy::SportsField, 2.0)],
    ),
    (
        Feature::ProximityToTransport,
        &[(Remedy::Transportation, 3.0), (Remedy::CommunityCenter, 1.0)],
    ),
    (
        Feature::PopulationDensity,
        &[
            (Remedy::Park, 2.0),
            (Remedy::CommunityCenter, 2.0),
            (Remedy::UrbanForestry, -1.0),
        ],
    ),
    (
        Feature::FloodRisk,
        &[(Remedy::Stormwater, 3.0), (Remedy::ResiliencePlans, 2.0)],
    ),
    (
        Feature::HeatIslandEffect,
        &[(Remedy::UrbanForestry, 3.0), (Remedy::GreenStreets, 2.0)],
    ),
    (
        Feature::ExistingGreenSpace,
        &[
            (Remedy::Park, -2.0),
            (Remedy::CommunityGarden, -1.0),
            (Remedy::UrbanForestry, -1.0),
        ],
    ),
    (
        Feature::SoilQuality,
        &[(Remedy::CommunityGarden, 2.0), (Remedy::UrbanForestry, 2.0)],
    ),
    (Feature::AirQuality, &[(Remedy::UrbanForestry, 3.0)]),
    (
        Feature::SocioeconomicStatus,
        &[
            (Remedy::CommunityGarden, 2.0),
            (Remedy::ResiliencePlans, 2.0),
        ],
    ),
    (
        Feature::ExistingCommunityFacilities,
        &[(Remedy::CommunityCenter, -2.0), (Remedy::SportsField, -1.0)],
    ),
    (
        Feature::TrafficDensity,
        &[(Remedy::GreenStreets, 2.0), (Remedy::Transportation, 2.0)],
    ),
    (
        Feature::SunlightExposure,
        &[(Remedy::CommunityGarden, 2.0), (Remedy::Park, 1.0)],
    ),
    (Feature::ProximityToWater, &[(Remedy::Stormwater, 2.0)]),
];

/// Mapping from feature to per-remedy signed weights.
///
/// Positive weights favour a remedy when the feature's multiplier is
/// positive; negative weights disfavour it. The implicit remedy
/// universe is the union of all remedy keys in the table.
///
/// # Examples
/// ```
/// use deadzone_core::{Feature, Remedy, WeightTable};
///
/// let table = WeightTable::new().with_weight(Feature::FloodRisk, Remedy::Stormwater, 3.0);
/// assert_eq!(table.weight(Feature::FloodRisk, Remedy::Stormwater), Some(3.0));
/// assert_eq!(table.remedy_universe().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightTable {
    weights: BTreeMap<Feature, BTreeMap<Remedy, f32>>,
}

impl WeightTable {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Insert or replace one feature-remedy weight.
    pub fn insert(&mut self, feature: Feature, remedy: Remedy, weight: f32) {
        self.weights.entry(feature).or_default().insert(remedy, weight);
    }

    /// Add a weight while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_weight(mut self, feature: Feature, remedy: Remedy, weight: f32) -> Self {
        self.insert(feature, remedy, weight);
        self
    }

    /// Return one feature-remedy weight, if configured.
    #[must_use]
    pub fn weight(&self, feature: Feature, remedy: Remedy) -> Option<f32> {
        self.weights
            .get(&feature)
            .and_then(|row| row.get(&remedy))
            .copied()
    }

    /// Return the per-remedy weights for a feature, if configured.
    #[must_use]
    pub fn feature_weights(&self, feature: Feature) -> Option<&BTreeMap<Remedy, f32>> {
        self.weights.get(&feature)
    }

    /// Collect the remedy universe: every remedy named anywhere in the
    /// table.
    #[must_use]
    pub fn remedy_universe(&self) -> BTreeSet<Remedy> {
        self.weights
            .values()
            .flat_map(|row| row.keys().copied())
            .collect()
    }

    /// Return the number of configured features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Report whether the table configures no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for WeightTable {
    /// The canonical production table.
    fn default() -> Self {
        let mut table = Self::new();
        for &(feature, row) in CANONICAL_WEIGHTS {
            for &(remedy, weight) in row {
                table.insert(feature, remedy, weight);
            }
        }
        table
    }
}
