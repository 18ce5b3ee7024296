//! Core domain types for the Deadzone remedy engine.
//!
//! The engine recommends an intervention ("remedy") for a site from a
//! heterogeneous set of observed features. This crate provides the
//! vocabulary types, the weight-table configuration object, the score
//! board with its documented tie-break, the [`RemedyScorer`] seam, and
//! the presentation-only remedy catalog. The scoring implementation
//! itself lives in `deadzone-scorer`.
//!
//! # Examples
//!
//! ```
//! use deadzone_core::{Feature, Remedy, ScoreBoard, WeightTable};
//!
//! let table = WeightTable::default();
//! let universe = table.remedy_universe();
//! let board = ScoreBoard::zeroed(universe);
//! assert_eq!(board.get(Remedy::Park), Some(0.0));
//! assert!(table.weight(Feature::AirQuality, Remedy::UrbanForestry).is_some());
//! ```

#![forbid(unsafe_code)]

mod catalog;
mod feature;
mod profile;
mod remedy;
mod score;
mod scorer;
mod value;
mod weights;

pub use catalog::{BenefitRating, CatalogError, RemedyCatalog, RemedyDetails};
pub use feature::Feature;
pub use profile::SiteProfile;
pub use remedy::Remedy;
pub use score::ScoreBoard;
pub use scorer::{RecommendError, RemedyScorer};
pub use value::{CategoryLevel, FeatureValue};
pub use weights::WeightTable;
