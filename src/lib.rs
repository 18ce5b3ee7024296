//! Facade crate for the Deadzone remedy recommendation engine.
//!
//! This crate re-exports the core domain types and the weighted
//! scoring engine so callers need a single dependency.

#![forbid(unsafe_code)]

pub use deadzone_core::{
    BenefitRating, CatalogError, CategoryLevel, Feature, FeatureValue, RecommendError, Remedy,
    RemedyCatalog, RemedyDetails, RemedyScorer, ScoreBoard, SiteProfile, WeightTable,
};

pub use deadzone_scorer::{WeightedScorer, WeightedScorerError, select_remedy};
