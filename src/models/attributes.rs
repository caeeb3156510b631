use serde::{Deserialize, Serialize};
use std::fmt;

/// Movement a joint cover can accommodate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementType {
    Thermal,
    Settlement,
    Seismic,
}

/// Where in a building the joint is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    Podium,
    #[serde(rename = "Roof Top")]
    RoofTop,
    Parking,
    Landscape,
    Interior,
    Exterior,
}

/// Kind of construction project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "New Construction")]
    NewConstruction,
    Retrofit,
}

/// Heaviest traffic the cover is rated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadingType {
    Pedestrian,
    #[serde(rename = "SUV")]
    Suv,
    #[serde(rename = "Light Duty Truck")]
    LightDutyTruck,
    #[serde(rename = "Fire Tender")]
    FireTender,
    #[serde(rename = "Heavy Duty Truck")]
    HeavyDutyTruck,
}

/// Surface the joint sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointPlacement {
    Floor,
    Wall,
    Ceiling,
    Roof,
}

/// Extra performance requirements a project may impose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialRequirement {
    #[serde(rename = "Fire Protection")]
    FireProtection,
    Waterproofing,
}

/// Building category the product is marketed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingType {
    Commercial,
    Residential,
    Industrial,
    Hospitality,
    Healthcare,
    Stadium,
    Metro,
    Airport,
    #[serde(rename = "Mixed Use")]
    MixedUse,
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MovementType::Thermal => "Thermal",
            MovementType::Settlement => "Settlement",
            MovementType::Seismic => "Seismic",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Location::Podium => "Podium",
            Location::RoofTop => "Roof Top",
            Location::Parking => "Parking",
            Location::Landscape => "Landscape",
            Location::Interior => "Interior",
            Location::Exterior => "Exterior",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectType::NewConstruction => "New Construction",
            ProjectType::Retrofit => "Retrofit",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for LoadingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LoadingType::Pedestrian => "Pedestrian",
            LoadingType::Suv => "SUV",
            LoadingType::LightDutyTruck => "Light Duty Truck",
            LoadingType::FireTender => "Fire Tender",
            LoadingType::HeavyDutyTruck => "Heavy Duty Truck",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for JointPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JointPlacement::Floor => "Floor",
            JointPlacement::Wall => "Wall",
            JointPlacement::Ceiling => "Ceiling",
            JointPlacement::Roof => "Roof",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for SpecialRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpecialRequirement::FireProtection => "Fire Protection",
            SpecialRequirement::Waterproofing => "Waterproofing",
        };
        write!(f, "{}", label)
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BuildingType::Commercial => "Commercial",
            BuildingType::Residential => "Residential",
            BuildingType::Industrial => "Industrial",
            BuildingType::Hospitality => "Hospitality",
            BuildingType::Healthcare => "Healthcare",
            BuildingType::Stadium => "Stadium",
            BuildingType::Metro => "Metro",
            BuildingType::Airport => "Airport",
            BuildingType::MixedUse => "Mixed Use",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiword_labels_round_trip() {
        let json = serde_json::to_string(&Location::RoofTop).unwrap();
        assert_eq!(json, "\"Roof Top\"");

        let parsed: LoadingType = serde_json::from_str("\"Light Duty Truck\"").unwrap();
        assert_eq!(parsed, LoadingType::LightDutyTruck);
    }

    #[test]
    fn test_display_matches_serialized_label() {
        assert_eq!(SpecialRequirement::FireProtection.to_string(), "Fire Protection");
        assert_eq!(BuildingType::MixedUse.to_string(), "Mixed Use");
        assert_eq!(LoadingType::Suv.to_string(), "SUV");
    }

    #[test]
    fn test_unknown_label_rejected() {
        let result: Result<MovementType, _> = serde_json::from_str("\"Rotational\"");
        assert!(result.is_err());
    }
}
