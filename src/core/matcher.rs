use crate::core::filters::{matches_attributes, matches_width};
use crate::models::{FilterCriteria, Product};

/// Reduce a catalog to the products satisfying every populated criterion
///
/// Filtering only: the input order is preserved and nothing is re-sorted.
/// Unconstrained criteria return the catalog unchanged, and a criteria set
/// no product satisfies returns an empty vec.
///
/// # Arguments
/// * `catalog` - All products from the catalog supplier
/// * `criteria` - The questionnaire submission
pub fn filter_products(catalog: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    catalog
        .iter()
        .filter(|product| matches_width(product, criteria))
        .filter(|product| matches_attributes(product, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, MovementType, SpecialRequirement};

    fn create_test_product(id: &str, nominal: u32) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            company: "Test Co".to_string(),
            nominal_joint_width: nominal,
            min_joint_width: nominal.saturating_sub(20),
            max_joint_width: nominal + 20,
            compatible_movement_types: vec![MovementType::Thermal],
            suitable_locations: vec![Location::Interior],
            suitable_project_types: vec![],
            max_loading_capacity: vec![],
            suitable_joint_placements: vec![],
            special_features: vec![],
            suitable_building_types: vec![],
            image_url: None,
            description: None,
            technical_details: None,
        }
    }

    #[test]
    fn test_unconstrained_criteria_return_catalog_unchanged() {
        let catalog = vec![
            create_test_product("1", 100),
            create_test_product("2", 150),
            create_test_product("3", 200),
        ];

        let result = filter_products(&catalog, &FilterCriteria::default());

        assert_eq!(result.len(), 3);
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_filtering_preserves_catalog_order() {
        let mut wide = create_test_product("wide", 300);
        wide.special_features = vec![SpecialRequirement::Waterproofing];
        let mut narrow = create_test_product("narrow", 90);
        narrow.special_features = vec![SpecialRequirement::Waterproofing];
        let plain = create_test_product("plain", 100);

        let catalog = vec![wide, plain, narrow];

        let criteria = FilterCriteria {
            special_requirements: vec![SpecialRequirement::Waterproofing],
            ..Default::default()
        };
        let result = filter_products(&catalog, &criteria);

        // "wide" stays ahead of "narrow" despite the width gap
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["wide", "narrow"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = vec![create_test_product("1", 100)];

        let criteria = FilterCriteria {
            nominal_joint_width: Some(500),
            ..Default::default()
        };

        assert!(filter_products(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_width_and_attribute_constraints_combine() {
        let catalog = vec![
            create_test_product("1", 100),
            create_test_product("2", 100),
            create_test_product("3", 200),
        ];

        // Width keeps 1 and 2; requiring Settlement then drops everything
        let criteria = FilterCriteria {
            nominal_joint_width: Some(100),
            movement_types: vec![MovementType::Settlement],
            ..Default::default()
        };

        assert!(filter_products(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let result = filter_products(&[], &FilterCriteria::default());
        assert!(result.is_empty());
    }
}
