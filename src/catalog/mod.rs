//! Catalog supplier: built-in sample data, JSON loading and validation
//!
//! The matching engine assumes well-formed products (unique ids, ordered
//! width envelopes, duplicate-free attribute sets) and never re-checks
//! them. Everything that enforces those preconditions lives here, on the
//! supplier side of the boundary.

use std::fs;
use std::path::Path;
use thiserror::Error;
use validator::Validate;

use crate::models::{
    BuildingType, JointPlacement, LoadingType, Location, MovementType, Product, ProjectType,
    SpecialRequirement,
};

/// Errors that can occur while supplying a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    #[error("invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },
}

/// Load and validate a catalog from a JSON file
///
/// The file must contain a JSON array of products in the documented
/// camelCase shape.
pub fn load_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();
    tracing::debug!("Loading catalog from {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_catalog(&contents)
}

/// Parse and validate a catalog from a JSON string
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    validate_catalog(&products)?;

    tracing::info!("Catalog loaded: {} products", products.len());
    Ok(products)
}

/// Check the preconditions the matching engine relies on
///
/// Rejects empty identity fields, duplicate ids, width envelopes that are
/// not ordered `min <= nominal <= max`, and repeated values inside a
/// set-valued attribute.
pub fn validate_catalog(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen_ids: Vec<&str> = Vec::with_capacity(products.len());

    for product in products {
        if seen_ids.contains(&product.id.as_str()) {
            return Err(CatalogError::DuplicateId(product.id.clone()));
        }
        seen_ids.push(&product.id);

        validate_product(product)?;
    }

    Ok(())
}

fn validate_product(product: &Product) -> Result<(), CatalogError> {
    product
        .validate()
        .map_err(|e| CatalogError::InvalidProduct {
            id: product.id.clone(),
            reason: e.to_string(),
        })?;

    if product.min_joint_width > product.nominal_joint_width
        || product.nominal_joint_width > product.max_joint_width
    {
        return Err(CatalogError::InvalidProduct {
            id: product.id.clone(),
            reason: format!(
                "width envelope not ordered: min {} / nominal {} / max {}",
                product.min_joint_width, product.nominal_joint_width, product.max_joint_width
            ),
        });
    }

    let set_attributes_ok = !has_duplicates(&product.compatible_movement_types)
        && !has_duplicates(&product.suitable_locations)
        && !has_duplicates(&product.suitable_project_types)
        && !has_duplicates(&product.max_loading_capacity)
        && !has_duplicates(&product.suitable_joint_placements)
        && !has_duplicates(&product.special_features)
        && !has_duplicates(&product.suitable_building_types);

    if !set_attributes_ok {
        return Err(CatalogError::InvalidProduct {
            id: product.id.clone(),
            reason: "set-valued attribute contains a duplicate value".to_string(),
        });
    }

    Ok(())
}

fn has_duplicates<T: PartialEq>(values: &[T]) -> bool {
    values
        .iter()
        .enumerate()
        .any(|(i, value)| values[..i].contains(value))
}

/// The built-in sample catalog
///
/// Five representative products used by the questionnaire demo and the test
/// suite. A production deployment replaces this with a real catalog via
/// `load_from_json`.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "FlexJoint 100".to_string(),
            company: "JointTech".to_string(),
            nominal_joint_width: 100,
            min_joint_width: 80,
            max_joint_width: 120,
            compatible_movement_types: vec![MovementType::Thermal, MovementType::Settlement],
            suitable_locations: vec![Location::Interior, Location::Exterior],
            suitable_project_types: vec![ProjectType::NewConstruction, ProjectType::Retrofit],
            max_loading_capacity: vec![LoadingType::Pedestrian, LoadingType::Suv],
            suitable_joint_placements: vec![JointPlacement::Floor, JointPlacement::Wall],
            special_features: vec![SpecialRequirement::Waterproofing],
            suitable_building_types: vec![BuildingType::Commercial, BuildingType::Residential],
            image_url: None,
            description: Some(
                "A versatile expansion joint cover suitable for moderate movement \
                 applications in commercial and residential settings."
                    .to_string(),
            ),
            technical_details: Some(
                "Made with high-grade aluminum and EPDM rubber for durability and water \
                 resistance."
                    .to_string(),
            ),
        },
        Product {
            id: "2".to_string(),
            name: "SeismicGuard 200".to_string(),
            company: "SeismicSolutions".to_string(),
            nominal_joint_width: 200,
            min_joint_width: 150,
            max_joint_width: 250,
            compatible_movement_types: vec![
                MovementType::Seismic,
                MovementType::Thermal,
                MovementType::Settlement,
            ],
            suitable_locations: vec![Location::Interior, Location::Exterior, Location::Podium],
            suitable_project_types: vec![ProjectType::NewConstruction],
            max_loading_capacity: vec![
                LoadingType::Pedestrian,
                LoadingType::Suv,
                LoadingType::LightDutyTruck,
            ],
            suitable_joint_placements: vec![
                JointPlacement::Floor,
                JointPlacement::Wall,
                JointPlacement::Ceiling,
            ],
            special_features: vec![
                SpecialRequirement::FireProtection,
                SpecialRequirement::Waterproofing,
            ],
            suitable_building_types: vec![
                BuildingType::Commercial,
                BuildingType::Healthcare,
                BuildingType::MixedUse,
            ],
            image_url: None,
            description: Some(
                "High-performance seismic expansion joint cover designed for buildings \
                 requiring significant movement accommodation."
                    .to_string(),
            ),
            technical_details: Some(
                "Engineered with a multi-directional movement design, fire barrier \
                 integration, and waterproofing membrane."
                    .to_string(),
            ),
        },
        Product {
            id: "3".to_string(),
            name: "IndustrialJoint 300".to_string(),
            company: "IndustrialCovers Inc.".to_string(),
            nominal_joint_width: 150,
            min_joint_width: 120,
            max_joint_width: 180,
            compatible_movement_types: vec![MovementType::Thermal, MovementType::Settlement],
            suitable_locations: vec![Location::Interior, Location::Parking],
            suitable_project_types: vec![ProjectType::NewConstruction, ProjectType::Retrofit],
            max_loading_capacity: vec![
                LoadingType::Pedestrian,
                LoadingType::Suv,
                LoadingType::LightDutyTruck,
                LoadingType::FireTender,
                LoadingType::HeavyDutyTruck,
            ],
            suitable_joint_placements: vec![JointPlacement::Floor],
            special_features: vec![],
            suitable_building_types: vec![BuildingType::Industrial, BuildingType::Commercial],
            image_url: None,
            description: Some(
                "Heavy-duty expansion joint cover designed for industrial environments \
                 with high traffic loads."
                    .to_string(),
            ),
            technical_details: Some(
                "Constructed with reinforced steel plates and high-density rubber inserts \
                 for maximum durability."
                    .to_string(),
            ),
        },
        Product {
            id: "4".to_string(),
            name: "RoofFlex 120".to_string(),
            company: "RoofingSystems".to_string(),
            nominal_joint_width: 120,
            min_joint_width: 100,
            max_joint_width: 140,
            compatible_movement_types: vec![MovementType::Thermal],
            suitable_locations: vec![Location::RoofTop, Location::Exterior],
            suitable_project_types: vec![ProjectType::NewConstruction, ProjectType::Retrofit],
            max_loading_capacity: vec![LoadingType::Pedestrian],
            suitable_joint_placements: vec![JointPlacement::Roof],
            special_features: vec![SpecialRequirement::Waterproofing],
            suitable_building_types: vec![
                BuildingType::Commercial,
                BuildingType::Residential,
                BuildingType::Industrial,
            ],
            image_url: None,
            description: Some(
                "Specialized expansion joint cover for roof applications, providing \
                 excellent waterproofing capabilities."
                    .to_string(),
            ),
            technical_details: Some(
                "Features TPO/EPDM compatibility and UV-resistant materials for extended \
                 longevity."
                    .to_string(),
            ),
        },
        Product {
            id: "5".to_string(),
            name: "ArcJoint 150".to_string(),
            company: "Architectural Joints Co.".to_string(),
            nominal_joint_width: 150,
            min_joint_width: 130,
            max_joint_width: 170,
            compatible_movement_types: vec![MovementType::Thermal, MovementType::Settlement],
            suitable_locations: vec![Location::Interior, Location::Exterior],
            suitable_project_types: vec![ProjectType::NewConstruction, ProjectType::Retrofit],
            max_loading_capacity: vec![LoadingType::Pedestrian],
            suitable_joint_placements: vec![JointPlacement::Wall, JointPlacement::Ceiling],
            special_features: vec![SpecialRequirement::FireProtection],
            suitable_building_types: vec![
                BuildingType::Hospitality,
                BuildingType::Healthcare,
                BuildingType::Commercial,
            ],
            image_url: None,
            description: Some(
                "Aesthetic expansion joint cover for visible areas, combining function \
                 with elegant design."
                    .to_string(),
            ),
            technical_details: Some(
                "Available in multiple finishes and custom colors to match architectural \
                 requirements."
                    .to_string(),
            ),
        },
    ]
}
