//! Weighted multi-criteria scoring engine for site remedies.
//!
//! [`WeightedScorer`] converts a site's mixed-type feature
//! observations into per-remedy scores: each observation is reduced to
//! a signed multiplier and applied to every weight its feature carries
//! in the configured [`WeightTable`]. Selection of the winner, with
//! its documented tie-break, lives on
//! [`ScoreBoard::leader`](deadzone_core::ScoreBoard::leader).
//!
//! The engine is a pure, synchronous computation: no I/O, no shared
//! mutable state, one score board per call.
//!
//! # Examples
//!
//! ```
//! use deadzone_core::{Feature, Remedy, RemedyScorer, SiteProfile, WeightTable};
//! use deadzone_scorer::WeightedScorer;
//!
//! let scorer = WeightedScorer::with_default_weights();
//! let profile = SiteProfile::new()
//!     .with_value(Feature::FloodRisk, true)
//!     .with_value(Feature::ProximityToWater, "high");
//! assert_eq!(scorer.recommend(&profile), Ok(Remedy::Stormwater));
//! ```

#![forbid(unsafe_code)]

use std::collections::BTreeSet;

use log::debug;
use thiserror::Error;

use deadzone_core::{Remedy, RemedyScorer, ScoreBoard, SiteProfile, WeightTable};

/// Errors raised while constructing the weighted scorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WeightedScorerError {
    /// The weight table names no remedies, so the remedy universe
    /// cannot be derived. Fatal configuration error.
    #[error("weight table is empty; the remedy universe cannot be derived")]
    EmptyRemedyUniverse,
}

/// Scores remedies by accumulating `multiplier * weight` over every
/// observed feature present in the weight table.
///
/// Observations for features the table does not cover are skipped
/// silently; unmatched category labels contribute nothing. Both are
/// degraded inputs, not errors.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedScorer {
    table: WeightTable,
    universe: BTreeSet<Remedy>,
}

impl WeightedScorer {
    /// Build a scorer over an explicit weight table.
    ///
    /// # Errors
    /// Returns [`WeightedScorerError::EmptyRemedyUniverse`] when the
    /// table names no remedies.
    pub fn new(table: WeightTable) -> Result<Self, WeightedScorerError> {
        let universe = table.remedy_universe();
        if universe.is_empty() {
            return Err(WeightedScorerError::EmptyRemedyUniverse);
        }
        Ok(Self { table, universe })
    }

    /// Build a scorer over the canonical production weights.
    #[must_use]
    pub fn with_default_weights() -> Self {
        let table = WeightTable::default();
        Self {
            universe: table.remedy_universe(),
            table,
        }
    }

    /// Return the configured weight table.
    #[must_use]
    pub const fn table(&self) -> &WeightTable {
        &self.table
    }

    /// Return the remedy universe derived from the table.
    #[must_use]
    pub const fn universe(&self) -> &BTreeSet<Remedy> {
        &self.universe
    }
}

impl RemedyScorer for WeightedScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "score accumulation multiplies observation multipliers by weights"
    )]
    fn score(&self, profile: &SiteProfile) -> ScoreBoard {
        let mut board = ScoreBoard::zeroed(self.universe.iter().copied());
        for (feature, value) in profile.iter() {
            let Some(row) = self.table.feature_weights(feature) else {
                debug!("feature '{feature}' is not in the weight table; ignoring");
                continue;
            };
            let multiplier = value.multiplier();
            for (&remedy, &weight) in row {
                board.add(remedy, multiplier * weight);
            }
        }
        board
    }
}

/// One-shot convenience: score `profile` against `table` and select
/// the winner.
///
/// # Errors
/// Returns [`WeightedScorerError::EmptyRemedyUniverse`] when the table
/// names no remedies.
pub fn select_remedy(
    table: WeightTable,
    profile: &SiteProfile,
) -> Result<Remedy, WeightedScorerError> {
    let scorer = WeightedScorer::new(table)?;
    scorer
        .recommend(profile)
        .map_err(|_| WeightedScorerError::EmptyRemedyUniverse)
}
