//! Remedies: the closed vocabulary of interventions the engine can
//! recommend.
//!
//! Variants are declared in alphabetical order of their display names
//! so the derived [`Ord`] is lexicographic over names. Score ties
//! resolve to the smallest remedy in this ordering; see
//! [`ScoreBoard::leader`](crate::ScoreBoard::leader).
//!
//! # Examples
//! ```
//! use deadzone_core::Remedy;
//!
//! assert_eq!(Remedy::UrbanForestry.as_str(), "Urban Forestry");
//! assert!(Remedy::Stormwater < Remedy::UrbanForestry);
//! ```

use serde::{Deserialize, Serialize};

/// A named category of intervention the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Remedy {
    /// Shared indoor space for community programmes.
    #[serde(rename = "Community Center")]
    CommunityCenter,
    /// Allotment-style growing plots for residents.
    #[serde(rename = "Community Garden")]
    CommunityGarden,
    /// Street-level planting and traffic calming.
    #[serde(rename = "Green Streets")]
    GreenStreets,
    /// General-purpose public park.
    #[serde(rename = "Park")]
    Park,
    /// Climate-resilience planning measures.
    #[serde(rename = "Resilience Plans")]
    ResiliencePlans,
    /// New or expanded school facilities.
    #[serde(rename = "School")]
    School,
    /// Outdoor pitches and courts.
    #[serde(rename = "Sports Field")]
    SportsField,
    /// Stormwater capture and drainage infrastructure.
    #[serde(rename = "Stormwater")]
    Stormwater,
    /// Transit stops and mobility infrastructure.
    #[serde(rename = "Transportation")]
    Transportation,
    /// Tree planting at urban-forest scale.
    #[serde(rename = "Urban Forestry")]
    UrbanForestry,
}

impl Remedy {
    /// Return the remedy's display name.
    ///
    /// # Examples
    /// ```
    /// use deadzone_core::Remedy;
    ///
    /// assert_eq!(Remedy::GreenStreets.as_str(), "Green Streets");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommunityCenter => "Community Center",
            Self::CommunityGarden => "Community Garden",
            Self::GreenStreets => "Green Streets",
            Self::Park => "Park",
            Self::ResiliencePlans => "Resilience Plans",
            Self::School => "School",
            Self::SportsField => "Sports Field",
            Self::Stormwater => "Stormwater",
            Self::Transportation => "Transportation",
            Self::UrbanForestry => "Urban Forestry",
        }
    }
}

impl std::fmt::Display for Remedy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Remedy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "community center" => Ok(Self::CommunityCenter),
            "community garden" => Ok(Self::CommunityGarden),
            "green streets" => Ok(Self::GreenStreets),
            "park" => Ok(Self::Park),
            "resilience plans" => Ok(Self::ResiliencePlans),
            "school" => Ok(Self::School),
            "sports field" => Ok(Self::SportsField),
            "stormwater" => Ok(Self::Stormwater),
            "transportation" => Ok(Self::Transportation),
            "urban forestry" => Ok(Self::UrbanForestry),
            _ => Err(format!("unknown remedy '{s}'")),
        }
    }
}
