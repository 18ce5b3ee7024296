//! Score boards: accumulated per-remedy totals and winner selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Remedy;

/// Running score totals keyed by remedy.
///
/// A board is built per scoring call and discarded afterwards. Every
/// remedy in the universe gets a zero entry before accumulation, so a
/// remedy untouched by any observation still holds a defined score and
/// can still win when all real contributions are negative.
///
/// # Examples
/// ```
/// use deadzone_core::{Remedy, ScoreBoard};
///
/// let mut board = ScoreBoard::zeroed([Remedy::Park, Remedy::School]);
/// board.add(Remedy::School, 3.0);
/// assert_eq!(board.get(Remedy::School), Some(3.0));
/// assert_eq!(board.leader(), Some(Remedy::School));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBoard {
    scores: BTreeMap<Remedy, f32>,
}

impl ScoreBoard {
    /// Build a board with a zero entry per remedy in `universe`.
    #[must_use]
    pub fn zeroed(universe: impl IntoIterator<Item = Remedy>) -> Self {
        Self {
            scores: universe.into_iter().map(|remedy| (remedy, 0.0)).collect(),
        }
    }

    /// Add a contribution to one remedy's running total.
    ///
    /// Remedies outside the initial universe gain an entry on first
    /// contribution.
    #[expect(
        clippy::float_arithmetic,
        reason = "score accumulation is a weighted sum"
    )]
    pub fn add(&mut self, remedy: Remedy, amount: f32) {
        *self.scores.entry(remedy).or_insert(0.0) += amount;
    }

    /// Return the score for a remedy, if present.
    #[must_use]
    pub fn get(&self, remedy: Remedy) -> Option<f32> {
        self.scores.get(&remedy).copied()
    }

    /// Iterate over scores in remedy order.
    pub fn iter(&self) -> impl Iterator<Item = (Remedy, f32)> + '_ {
        self.scores.iter().map(|(&remedy, &score)| (remedy, score))
    }

    /// Return the number of scored remedies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Report whether the board holds no scores.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Consume the board and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<Remedy, f32> {
        self.scores
    }

    /// Select the remedy with the maximum score.
    ///
    /// Ties resolve to the lexicographically least remedy name: the
    /// board iterates in [`Remedy`] order (alphabetical by display
    /// name) and a later remedy only displaces the leader with a
    /// strictly greater score. Returns `None` only for an empty board.
    #[must_use]
    pub fn leader(&self) -> Option<Remedy> {
        let mut best: Option<(Remedy, f32)> = None;
        for (remedy, score) in self.iter() {
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((remedy, score));
            }
        }
        best.map(|(remedy, _)| remedy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_board_covers_the_universe() {
        let board = ScoreBoard::zeroed([Remedy::Park, Remedy::Stormwater]);
        assert_eq!(board.len(), 2);
        assert_eq!(board.get(Remedy::Park), Some(0.0));
        assert!(board.get(Remedy::School).is_none());
    }

    #[test]
    fn contributions_accumulate() {
        let mut board = ScoreBoard::zeroed([Remedy::Park]);
        board.add(Remedy::Park, 2.0);
        board.add(Remedy::Park, -0.5);
        assert_eq!(board.get(Remedy::Park), Some(1.5));
    }

    #[test]
    fn leader_prefers_the_maximum_score() {
        let mut board = ScoreBoard::zeroed([Remedy::Park, Remedy::School, Remedy::Stormwater]);
        board.add(Remedy::School, 3.0);
        board.add(Remedy::Park, 1.0);
        assert_eq!(board.leader(), Some(Remedy::School));
    }

    #[test]
    fn ties_resolve_to_the_lexicographically_least_name() {
        let mut board = ScoreBoard::zeroed([Remedy::UrbanForestry, Remedy::Stormwater]);
        board.add(Remedy::UrbanForestry, 3.0);
        board.add(Remedy::Stormwater, 3.0);
        assert_eq!(board.leader(), Some(Remedy::Stormwater));
    }

    #[test]
    fn all_zero_board_falls_back_to_the_tie_break() {
        let board = ScoreBoard::zeroed([Remedy::Transportation, Remedy::CommunityGarden]);
        assert_eq!(board.leader(), Some(Remedy::CommunityGarden));
    }

    #[test]
    fn empty_board_has_no_leader() {
        assert!(ScoreBoard::default().leader().is_none());
    }
}
