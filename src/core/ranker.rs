use crate::config::Settings;
use crate::core::scoring::similarity_score;
use crate::models::{Product, SimilarityWeights};

/// Scores a candidate must exceed to qualify as an alternative
const MIN_SIMILARITY_SCORE: u32 = 3;
/// How many alternatives are presented alongside a product
const MAX_ALTERNATIVES: usize = 3;

/// A candidate paired with its similarity score, used only while ranking
#[derive(Debug)]
struct ScoredAlternative {
    product: Product,
    score: u32,
}

/// Ranks alternative products by weighted attribute overlap
///
/// Candidates scoring at or below `min_score` are discarded; survivors are
/// sorted by score descending and cut to `max_alternatives`. The sort is
/// stable, so candidates with equal scores keep their catalog order.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: SimilarityWeights,
    min_score: u32,
    max_alternatives: usize,
}

impl Ranker {
    pub fn new(weights: SimilarityWeights, min_score: u32, max_alternatives: usize) -> Self {
        Self {
            weights,
            min_score,
            max_alternatives,
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: SimilarityWeights::default(),
            min_score: MIN_SIMILARITY_SCORE,
            max_alternatives: MAX_ALTERNATIVES,
        }
    }

    /// Build a ranker from loaded settings, falling back to the defaults
    /// for anything the configuration leaves unset
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            weights: SimilarityWeights {
                movement: settings.scoring.weights.movement,
                location: settings.scoring.weights.location,
                placement: settings.scoring.weights.placement,
                special_feature: settings.scoring.weights.special_feature,
            },
            min_score: settings
                .matching
                .min_similarity_score
                .unwrap_or(MIN_SIMILARITY_SCORE),
            max_alternatives: settings
                .matching
                .max_alternatives
                .unwrap_or(MAX_ALTERNATIVES),
        }
    }

    /// Find the closest alternatives to a reference product
    ///
    /// The reference itself is excluded by id. Scoring is directional
    /// (reference attributes found on the candidate), so the result is not
    /// symmetric between two products.
    ///
    /// # Arguments
    /// * `reference` - The product the user is looking at
    /// * `catalog` - All products from the catalog supplier
    ///
    /// # Returns
    /// At most `max_alternatives` products, best score first
    pub fn find_alternatives(&self, reference: &Product, catalog: &[Product]) -> Vec<Product> {
        let mut scored: Vec<ScoredAlternative> = catalog
            .iter()
            .filter(|candidate| candidate.id != reference.id)
            .filter_map(|candidate| {
                let score = similarity_score(reference, candidate, &self.weights);

                if score > self.min_score {
                    Some(ScoredAlternative {
                        product: candidate.clone(),
                        score,
                    })
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable: equal scores keep catalog order
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.max_alternatives);

        scored.into_iter().map(|entry| entry.product).collect()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
