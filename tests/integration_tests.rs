// Integration tests for Jointfinder Algo
//
// End-to-end runs of the questionnaire pipeline against the built-in sample
// catalog: filter on submitted criteria, then rank alternatives for a
// selected product.

use jointfinder_algo::catalog;
use jointfinder_algo::core::{filter_products, similarity_score, Ranker};
use jointfinder_algo::models::{
    FilterCriteria, LoadingType, MovementType, ProjectType, SimilarityWeights, SpecialRequirement,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn names(products: &[jointfinder_algo::Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_unconstrained_criteria_return_full_catalog() {
    init_tracing();
    let products = catalog::sample_products();

    let result = filter_products(&products, &FilterCriteria::default());

    assert_eq!(
        names(&result),
        vec![
            "FlexJoint 100",
            "SeismicGuard 200",
            "IndustrialJoint 300",
            "RoofFlex 120",
            "ArcJoint 150"
        ]
    );
}

#[test]
fn test_nominal_width_100_matches_flexjoint_only() {
    let products = catalog::sample_products();

    let criteria = FilterCriteria {
        nominal_joint_width: Some(100),
        ..Default::default()
    };

    let result = filter_products(&products, &criteria);
    assert_eq!(names(&result), vec!["FlexJoint 100"]);
}

#[test]
fn test_thermal_and_settlement_excludes_roofflex() {
    let products = catalog::sample_products();

    let criteria = FilterCriteria {
        movement_types: vec![MovementType::Thermal, MovementType::Settlement],
        ..Default::default()
    };

    let result = filter_products(&products, &criteria);

    // RoofFlex 120 handles Thermal only; under any-of semantics it would
    // wrongly survive here
    assert_eq!(
        names(&result),
        vec![
            "FlexJoint 100",
            "SeismicGuard 200",
            "IndustrialJoint 300",
            "ArcJoint 150"
        ]
    );
}

#[test]
fn test_fire_protection_keeps_seismicguard_and_arcjoint() {
    let products = catalog::sample_products();

    let criteria = FilterCriteria {
        special_requirements: vec![SpecialRequirement::FireProtection],
        ..Default::default()
    };

    let result = filter_products(&products, &criteria);
    assert_eq!(names(&result), vec!["SeismicGuard 200", "ArcJoint 150"]);
}

#[test]
fn test_min_width_bound_selects_products_that_close_down_to_it() {
    let products = catalog::sample_products();

    // Products whose own minimum is at or below 100 mm: FlexJoint (80) and
    // RoofFlex (100)
    let criteria = FilterCriteria {
        min_joint_width: Some(100),
        ..Default::default()
    };

    let result = filter_products(&products, &criteria);
    assert_eq!(names(&result), vec!["FlexJoint 100", "RoofFlex 120"]);

    for product in &result {
        assert!(product.min_joint_width <= 100);
    }
}

#[test]
fn test_max_width_bound_selects_products_that_open_up_to_it() {
    let products = catalog::sample_products();

    // Only SeismicGuard's envelope reaches 200 mm
    let criteria = FilterCriteria {
        max_joint_width: Some(200),
        ..Default::default()
    };

    let result = filter_products(&products, &criteria);
    assert_eq!(names(&result), vec!["SeismicGuard 200"]);

    for product in &result {
        assert!(product.max_joint_width >= 200);
    }
}

#[test]
fn test_skip_width_ignores_populated_width_fields() {
    let products = catalog::sample_products();

    let criteria = FilterCriteria {
        nominal_joint_width: Some(100),
        min_joint_width: Some(100),
        max_joint_width: Some(200),
        skip_width: true,
        ..Default::default()
    };

    let result = filter_products(&products, &criteria);
    assert_eq!(result.len(), 5);
}

#[test]
fn test_retrofit_excludes_new_construction_only_products() {
    let products = catalog::sample_products();

    let criteria = FilterCriteria {
        project_type: Some(ProjectType::Retrofit),
        ..Default::default()
    };

    let result = filter_products(&products, &criteria);
    assert_eq!(
        names(&result),
        vec![
            "FlexJoint 100",
            "IndustrialJoint 300",
            "RoofFlex 120",
            "ArcJoint 150"
        ]
    );
}

#[test]
fn test_heavy_duty_loading_matches_industrial_only() {
    let products = catalog::sample_products();

    let criteria = FilterCriteria {
        max_loadings: vec![LoadingType::HeavyDutyTruck],
        ..Default::default()
    };

    let result = filter_products(&products, &criteria);
    assert_eq!(names(&result), vec!["IndustrialJoint 300"]);
}

#[test]
fn test_combined_criteria_narrow_step_by_step() {
    let products = catalog::sample_products();

    // Thermal+Settlement keeps four products; requiring Fire Protection on
    // top narrows to SeismicGuard and ArcJoint; a 150 mm nominal width
    // leaves ArcJoint alone
    let criteria = FilterCriteria {
        nominal_joint_width: Some(150),
        movement_types: vec![MovementType::Thermal, MovementType::Settlement],
        special_requirements: vec![SpecialRequirement::FireProtection],
        ..Default::default()
    };

    let result = filter_products(&products, &criteria);
    assert_eq!(names(&result), vec!["ArcJoint 150"]);
}

#[test]
fn test_alternatives_for_flexjoint() {
    init_tracing();
    let products = catalog::sample_products();
    let reference = products[0].clone();
    assert_eq!(reference.name, "FlexJoint 100");

    let ranker = Ranker::with_default_weights();
    let alternatives = ranker.find_alternatives(&reference, &products);

    // Manual scoring against FlexJoint 100:
    //   SeismicGuard 200:    width 1 + movement 2 + location 2 + placement 2 + special 2 = 9
    //   RoofFlex 120:        width 3 + movement 1 + location 1 + placement 0 + special 2 = 7
    //   ArcJoint 150:        width 2 + movement 2 + location 2 + placement 1 + special 0 = 7
    //   IndustrialJoint 300: width 2 + movement 2 + location 1 + placement 1 + special 0 = 6
    // All four clear the threshold; the top three survive the cut, and the
    // RoofFlex/ArcJoint tie resolves to catalog order
    assert_eq!(
        names(&alternatives),
        vec!["SeismicGuard 200", "RoofFlex 120", "ArcJoint 150"]
    );
}

#[test]
fn test_alternatives_properties_hold_for_every_reference() {
    let products = catalog::sample_products();
    let ranker = Ranker::with_default_weights();
    let weights = SimilarityWeights::default();

    for reference in &products {
        let alternatives = ranker.find_alternatives(reference, &products);

        assert!(alternatives.len() <= 3);
        assert!(alternatives.iter().all(|p| p.id != reference.id));

        let scores: Vec<u32> = alternatives
            .iter()
            .map(|candidate| similarity_score(reference, candidate, &weights))
            .collect();

        assert!(scores.iter().all(|&score| score > 3));
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}

#[test]
fn test_catalog_json_round_trips_through_supplier() {
    let products = catalog::sample_products();
    let json = serde_json::to_string(&products).unwrap();

    let reloaded = catalog::parse_catalog(&json).unwrap();

    // The reloaded catalog drives the same pipeline results
    let criteria = FilterCriteria {
        nominal_joint_width: Some(100),
        ..Default::default()
    };
    assert_eq!(names(&filter_products(&reloaded, &criteria)), vec!["FlexJoint 100"]);
}
