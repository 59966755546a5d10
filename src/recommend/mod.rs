pub mod blend;
pub mod collaborative;
pub mod content;
pub mod trending;

pub use blend::BlendWeights;
pub use trending::TrendingConfig;

use std::cmp::Ordering;

use crate::RecommendationScore;

// Descending by score, post id ascending among equals, so rankings are
// reproducible regardless of store iteration order.
pub fn rank(scores: &mut [RecommendationScore]) {
    scores.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.post_id.cmp(&b.post_id))
    });
}
