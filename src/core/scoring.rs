use crate::models::{Product, SimilarityWeights};

/// Nominal width difference (mm) still considered a close fit
const CLOSE_WIDTH_MM: u32 = 20;
/// Width difference scoring the middle proximity tier
const NEAR_WIDTH_MM: u32 = 50;
/// Largest width difference that still contributes to the score
const FAR_WIDTH_MM: u32 = 100;

/// Score how close two products' nominal widths are
///
/// Banded rather than linear: 3 points within 20 mm, 2 within 50 mm,
/// 1 within 100 mm, 0 beyond that. Width proximity alone therefore never
/// exceeds 3 points.
#[inline]
pub fn width_proximity_score(reference: &Product, candidate: &Product) -> u32 {
    let diff = reference
        .nominal_joint_width
        .abs_diff(candidate.nominal_joint_width);

    if diff <= CLOSE_WIDTH_MM {
        3
    } else if diff <= NEAR_WIDTH_MM {
        2
    } else if diff <= FAR_WIDTH_MM {
        1
    } else {
        0
    }
}

/// Count the reference's attribute values that the candidate also carries
///
/// Directional on purpose: values the candidate has beyond the reference do
/// not count.
#[inline]
fn shared_count<T: PartialEq>(reference: &[T], candidate: &[T]) -> u32 {
    reference
        .iter()
        .filter(|value| candidate.contains(value))
        .count() as u32
}

/// Compute the total similarity score of a candidate against a reference
///
/// The score is the sum of the width proximity band and the weighted
/// overlap counts for movement types, locations, joint placements and
/// special features. No normalization is applied.
pub fn similarity_score(
    reference: &Product,
    candidate: &Product,
    weights: &SimilarityWeights,
) -> u32 {
    let mut score = width_proximity_score(reference, candidate);

    score += weights.movement
        * shared_count(
            &reference.compatible_movement_types,
            &candidate.compatible_movement_types,
        );

    score += weights.location
        * shared_count(&reference.suitable_locations, &candidate.suitable_locations);

    score += weights.placement
        * shared_count(
            &reference.suitable_joint_placements,
            &candidate.suitable_joint_placements,
        );

    score += weights.special_feature
        * shared_count(&reference.special_features, &candidate.special_features);

    score
}
