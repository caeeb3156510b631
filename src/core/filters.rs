use crate::models::{FilterCriteria, Product};

/// Check a product against the width criteria
///
/// The nominal width must match exactly when specified. The min/max bounds
/// check that the product's operating range covers the requested bound: a
/// `min_joint_width` criterion keeps products whose own minimum is at or
/// below it, a `max_joint_width` criterion keeps products whose own maximum
/// is at or above it. `skip_width` turns all three checks off regardless of
/// the width fields.
#[inline]
pub fn matches_width(product: &Product, criteria: &FilterCriteria) -> bool {
    if criteria.skip_width {
        return true;
    }

    if let Some(nominal) = criteria.nominal_joint_width {
        if product.nominal_joint_width != nominal {
            return false;
        }
    }

    if let Some(min) = criteria.min_joint_width {
        if product.min_joint_width > min {
            return false;
        }
    }

    if let Some(max) = criteria.max_joint_width {
        if product.max_joint_width < max {
            return false;
        }
    }

    true
}

/// Check a product against the set-valued and project-type criteria
///
/// Every populated criteria list is conjunctive: the product must carry all
/// of the required values, not just one. An empty list imposes no
/// constraint.
#[inline]
pub fn matches_attributes(product: &Product, criteria: &FilterCriteria) -> bool {
    if !contains_all(&product.compatible_movement_types, &criteria.movement_types) {
        return false;
    }

    if !contains_all(&product.suitable_locations, &criteria.locations) {
        return false;
    }

    if let Some(project_type) = criteria.project_type {
        if !product.suitable_project_types.contains(&project_type) {
            return false;
        }
    }

    if !contains_all(&product.max_loading_capacity, &criteria.max_loadings) {
        return false;
    }

    if !contains_all(&product.suitable_joint_placements, &criteria.joint_placements) {
        return false;
    }

    if !contains_all(&product.special_features, &criteria.special_requirements) {
        return false;
    }

    if !contains_all(&product.suitable_building_types, &criteria.building_types) {
        return false;
    }

    true
}

/// True when every required value is present in the product's attribute set
#[inline]
fn contains_all<T: PartialEq>(available: &[T], required: &[T]) -> bool {
    required.iter().all(|value| available.contains(value))
}
