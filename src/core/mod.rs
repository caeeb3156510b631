// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod ranker;
pub mod scoring;

pub use filters::{matches_attributes, matches_width};
pub use matcher::filter_products;
pub use ranker::Ranker;
pub use scoring::{similarity_score, width_proximity_score};
