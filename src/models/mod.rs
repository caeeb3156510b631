// Model exports
pub mod attributes;
pub mod domain;

pub use attributes::{
    BuildingType, JointPlacement, LoadingType, Location, MovementType, ProjectType,
    SpecialRequirement,
};
pub use domain::{FilterCriteria, Product, SimilarityWeights};
