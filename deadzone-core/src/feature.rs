//! Site features: the closed vocabulary of observable attributes.
//!
//! The enum offers compile-time safety for weight-table and profile
//! lookups.
//!
//! # Examples
//! ```
//! use deadzone_core::Feature;
//!
//! assert_eq!(Feature::FloodRisk.as_str(), "flood_risk");
//! assert_eq!(Feature::Size.to_string(), "size");
//! ```

use serde::{Deserialize, Serialize};

/// A named, observable attribute of a site used as scoring input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Normalised site footprint in `0.0..=1.0`.
    Size,
    /// Closeness to residential areas.
    ProximityToResidential,
    /// Closeness to schools.
    ProximityToSchools,
    /// Closeness to public transport.
    ProximityToTransport,
    /// Normalised population density in `0.0..=1.0`.
    PopulationDensity,
    /// Whether the site lies in a flood-prone area.
    FloodRisk,
    /// Severity of the local urban heat island.
    HeatIslandEffect,
    /// Amount of green space already nearby.
    ExistingGreenSpace,
    /// Suitability of the soil for planting.
    SoilQuality,
    /// Local air quality.
    AirQuality,
    /// Socioeconomic status of the surrounding community.
    SocioeconomicStatus,
    /// Whether community facilities already exist nearby.
    ExistingCommunityFacilities,
    /// Volume of road traffic around the site.
    TrafficDensity,
    /// Daily sunlight received by the site.
    SunlightExposure,
    /// Closeness to a body of water.
    ProximityToWater,
}

impl Feature {
    /// Return the feature as its `snake_case` `&str` key.
    ///
    /// # Examples
    /// ```
    /// use deadzone_core::Feature;
    ///
    /// assert_eq!(Feature::HeatIslandEffect.as_str(), "heat_island_effect");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::ProximityToResidential => "proximity_to_residential",
            Self::ProximityToSchools => "proximity_to_schools",
            Self::ProximityToTransport => "proximity_to_transport",
            Self::PopulationDensity => "population_density",
            Self::FloodRisk => "flood_risk",
            Self::HeatIslandEffect => "heat_island_effect",
            Self::ExistingGreenSpace => "existing_green_space",
            Self::SoilQuality => "soil_quality",
            Self::AirQuality => "air_quality",
            Self::SocioeconomicStatus => "socioeconomic_status",
            Self::ExistingCommunityFacilities => "existing_community_facilities",
            Self::TrafficDensity => "traffic_density",
            Self::SunlightExposure => "sunlight_exposure",
            Self::ProximityToWater => "proximity_to_water",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "size" => Ok(Self::Size),
            "proximity_to_residential" => Ok(Self::ProximityToResidential),
            "proximity_to_schools" => Ok(Self::ProximityToSchools),
            "proximity_to_transport" => Ok(Self::ProximityToTransport),
            "population_density" => Ok(Self::PopulationDensity),
            "flood_risk" => Ok(Self::FloodRisk),
            "heat_island_effect" => Ok(Self::HeatIslandEffect),
            "existing_green_space" => Ok(Self::ExistingGreenSpace),
            "soil_quality" => Ok(Self::SoilQuality),
            "air_quality" => Ok(Self::AirQuality),
            "socioeconomic_status" => Ok(Self::SocioeconomicStatus),
            "existing_community_facilities" => Ok(Self::ExistingCommunityFacilities),
            "traffic_density" => Ok(Self::TrafficDensity),
            "sunlight_exposure" => Ok(Self::SunlightExposure),
            "proximity_to_water" => Ok(Self::ProximityToWater),
            _ => Err(format!("unknown feature '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            Feature::ProximityToWater.to_string(),
            Feature::ProximityToWater.as_str()
        );
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Feature::from_str("noise_level").unwrap_err();
        assert!(err.contains("unknown feature"));
    }

    #[test]
    fn serialises_as_snake_case() {
        let json = serde_json::to_string(&Feature::FloodRisk).unwrap();
        assert_eq!(json, "\"flood_risk\"");
    }
}
