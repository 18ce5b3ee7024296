//! Feature values and their normalisation into signed multipliers.
//!
//! A [`FeatureValue`] is an explicit tagged variant rather than a
//! runtime type check: a continuous measurement, a presence flag, or a
//! categorical rating. [`FeatureValue::multiplier`] reduces any value
//! to the signed scalar that scales the feature's weights.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A categorical rating parsed from a `low`/`medium`/`high` label.
///
/// Labels are matched case-insensitively; anything else is
/// [`CategoryLevel::Unknown`], which contributes nothing to a score.
///
/// # Examples
/// ```
/// use deadzone_core::CategoryLevel;
///
/// assert_eq!(CategoryLevel::from_label("HIGH"), CategoryLevel::High);
/// assert_eq!(CategoryLevel::from_label("mispelt"), CategoryLevel::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryLevel {
    /// Rated low; pulls affected scores down.
    Low,
    /// Rated medium; neutral.
    Medium,
    /// Rated high; pushes affected scores up.
    High,
    /// Unmatched label; neutral.
    Unknown,
}

impl CategoryLevel {
    /// Parse a label case-insensitively, mapping unmatched input to
    /// [`CategoryLevel::Unknown`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }

    /// Return the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }

    /// Signed multiplier applied to weights under this rating.
    #[must_use]
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::Low => -1.0,
            Self::Medium | Self::Unknown => 0.0,
            Self::High => 1.0,
        }
    }
}

impl Serialize for CategoryLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}

impl std::fmt::Display for CategoryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed value for a site feature.
///
/// Serde representation is untagged, so a JSON profile can mix raw
/// booleans, numbers, and rating labels:
/// `{"flood_risk": true, "size": 0.8, "air_quality": "low"}`.
///
/// # Examples
/// ```
/// use deadzone_core::FeatureValue;
///
/// assert_eq!(FeatureValue::Flag(true).multiplier(), 1.0);
/// assert_eq!(FeatureValue::Continuous(0.7).multiplier(), 0.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Presence or absence of a site condition.
    Flag(bool),
    /// A continuous measurement, normalised into `0.0..=1.0` by the
    /// profile provider.
    Continuous(f32),
    /// A categorical rating label.
    Category(CategoryLevel),
}

impl FeatureValue {
    /// Reduce the value to a signed scalar multiplier.
    ///
    /// Continuous values pass through unchanged; a flag flips the sign
    /// of every weight it touches (`true` is `+1`, `false` is `-1`);
    /// category levels map to `-1`, `0`, or `+1`.
    #[must_use]
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::Continuous(value) => value,
            Self::Flag(true) => 1.0,
            Self::Flag(false) => -1.0,
            Self::Category(level) => level.multiplier(),
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<f32> for FeatureValue {
    fn from(value: f32) -> Self {
        Self::Continuous(value)
    }
}

impl From<CategoryLevel> for FeatureValue {
    fn from(level: CategoryLevel) -> Self {
        Self::Category(level)
    }
}

impl From<&str> for FeatureValue {
    fn from(label: &str) -> Self {
        Self::Category(CategoryLevel::from_label(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("low", CategoryLevel::Low)]
    #[case("Medium", CategoryLevel::Medium)]
    #[case("HIGH", CategoryLevel::High)]
    #[case("", CategoryLevel::Unknown)]
    #[case("severe", CategoryLevel::Unknown)]
    fn labels_parse_case_insensitively(#[case] label: &str, #[case] expected: CategoryLevel) {
        assert_eq!(CategoryLevel::from_label(label), expected);
    }

    #[rstest]
    #[case(FeatureValue::Flag(true), 1.0)]
    #[case(FeatureValue::Flag(false), -1.0)]
    #[case(FeatureValue::Continuous(0.25), 0.25)]
    #[case(FeatureValue::Category(CategoryLevel::Low), -1.0)]
    #[case(FeatureValue::Category(CategoryLevel::Medium), 0.0)]
    #[case(FeatureValue::Category(CategoryLevel::High), 1.0)]
    #[case(FeatureValue::Category(CategoryLevel::Unknown), 0.0)]
    fn multipliers_follow_the_normaliser_contract(
        #[case] value: FeatureValue,
        #[case] expected: f32,
    ) {
        assert_eq!(value.multiplier(), expected);
    }

    #[rstest]
    #[case("true", FeatureValue::Flag(true))]
    #[case("0.8", FeatureValue::Continuous(0.8))]
    #[case("\"high\"", FeatureValue::Category(CategoryLevel::High))]
    #[case("\"mystery\"", FeatureValue::Category(CategoryLevel::Unknown))]
    fn json_values_deserialise_untagged(#[case] json: &str, #[case] expected: FeatureValue) {
        let parsed: FeatureValue = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn json_shapes_outside_the_contract_are_rejected() {
        assert!(serde_json::from_str::<FeatureValue>("[1, 2]").is_err());
        assert!(serde_json::from_str::<FeatureValue>("null").is_err());
    }
}
