//! Score site profiles and recommend a remedy.
//!
//! The `RemedyScorer` trait turns a [`SiteProfile`](crate::SiteProfile)
//! into per-remedy scores and selects the winner.

use thiserror::Error;

use crate::{Remedy, ScoreBoard, SiteProfile};

/// Errors raised while selecting a winning remedy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// The score board held no remedies, so no winner exists. Only an
    /// empty weight table can produce this.
    #[error("remedy universe is empty; the weight table defines no remedies")]
    EmptyRemedyUniverse,
}

/// Calculate per-remedy scores for a site profile.
///
/// Implementations must be pure functions of the profile and their own
/// configuration: no I/O, no shared mutable state, and thread-safe
/// (`Send` + `Sync`) so scorers can serve concurrent requests without
/// locking.
///
/// # Examples
///
/// ```rust
/// use deadzone_core::{Remedy, RemedyScorer, ScoreBoard, SiteProfile};
///
/// struct ParkBooster;
///
/// impl RemedyScorer for ParkBooster {
///     fn score(&self, _profile: &SiteProfile) -> ScoreBoard {
///         let mut board = ScoreBoard::zeroed([Remedy::Park]);
///         board.add(Remedy::Park, 1.0);
///         board
///     }
/// }
///
/// let winner = ParkBooster.recommend(&SiteProfile::new());
/// assert_eq!(winner, Ok(Remedy::Park));
/// ```
pub trait RemedyScorer: Send + Sync {
    /// Return accumulated scores for `profile` over the full remedy
    /// universe.
    fn score(&self, profile: &SiteProfile) -> ScoreBoard;

    /// Score `profile` and select the winning remedy.
    ///
    /// # Errors
    /// Returns [`RecommendError::EmptyRemedyUniverse`] when the score
    /// board is empty.
    fn recommend(&self, profile: &SiteProfile) -> Result<Remedy, RecommendError> {
        self.score(profile)
            .leader()
            .ok_or(RecommendError::EmptyRemedyUniverse)
    }
}
