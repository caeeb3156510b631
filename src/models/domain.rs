use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::attributes::{
    BuildingType, JointPlacement, LoadingType, Location, MovementType, ProjectType,
    SpecialRequirement,
};

/// Catalog entry for an expansion joint cover
///
/// Products are produced by the catalog supplier and read-only afterwards.
/// All widths are in millimetres. Set-valued attributes hold values from the
/// fixed enumerations, without duplicates; `catalog::validate_catalog`
/// enforces this before a catalog reaches the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[serde(rename = "nominalJointWidth")]
    pub nominal_joint_width: u32,
    #[serde(rename = "minJointWidth")]
    pub min_joint_width: u32,
    #[serde(rename = "maxJointWidth")]
    pub max_joint_width: u32,
    #[serde(rename = "compatibleMovementTypes")]
    pub compatible_movement_types: Vec<MovementType>,
    #[serde(rename = "suitableLocations")]
    pub suitable_locations: Vec<Location>,
    #[serde(rename = "suitableProjectTypes")]
    pub suitable_project_types: Vec<ProjectType>,
    #[serde(rename = "maxLoadingCapacity")]
    pub max_loading_capacity: Vec<LoadingType>,
    #[serde(rename = "suitableJointPlacements")]
    pub suitable_joint_placements: Vec<JointPlacement>,
    #[serde(rename = "specialFeatures")]
    pub special_features: Vec<SpecialRequirement>,
    #[serde(rename = "suitableBuildingTypes")]
    pub suitable_building_types: Vec<BuildingType>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "technicalDetails", default)]
    pub technical_details: Option<String>,
}

/// One questionnaire submission
///
/// Every field is optional: `None` / an empty list means the user left that
/// step unconstrained. `skip_width` suppresses all three width constraints
/// even when the width fields carry values, mirroring the questionnaire's
/// "Skip Width Filtering" checkbox. `Default` is the fully unconstrained
/// criteria, under which the matcher returns the catalog unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "nominalJointWidth", default)]
    pub nominal_joint_width: Option<u32>,
    #[serde(rename = "minJointWidth", default)]
    pub min_joint_width: Option<u32>,
    #[serde(rename = "maxJointWidth", default)]
    pub max_joint_width: Option<u32>,
    #[serde(rename = "skipWidth", default)]
    pub skip_width: bool,
    #[serde(rename = "movementTypes", default)]
    pub movement_types: Vec<MovementType>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(rename = "projectType", default)]
    pub project_type: Option<ProjectType>,
    #[serde(rename = "maxLoadings", default)]
    pub max_loadings: Vec<LoadingType>,
    #[serde(rename = "jointPlacements", default)]
    pub joint_placements: Vec<JointPlacement>,
    #[serde(rename = "specialRequirements", default)]
    pub special_requirements: Vec<SpecialRequirement>,
    #[serde(rename = "buildingTypes", default)]
    pub building_types: Vec<BuildingType>,
}

impl FilterCriteria {
    /// True when no field constrains the catalog
    pub fn is_unconstrained(&self) -> bool {
        let width_unconstrained = self.skip_width
            || (self.nominal_joint_width.is_none()
                && self.min_joint_width.is_none()
                && self.max_joint_width.is_none());

        width_unconstrained
            && self.movement_types.is_empty()
            && self.locations.is_empty()
            && self.project_type.is_none()
            && self.max_loadings.is_empty()
            && self.joint_placements.is_empty()
            && self.special_requirements.is_empty()
            && self.building_types.is_empty()
    }
}

/// Per-attribute weights for similarity scoring
///
/// Shared special features are the most discriminating attribute and count
/// double by default.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityWeights {
    pub movement: u32,
    pub location: u32,
    pub placement: u32,
    pub special_feature: u32,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            movement: 1,
            location: 1,
            placement: 1,
            special_feature: 2,
        }
    }
}
