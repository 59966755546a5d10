use serde::{Deserialize, Serialize};

use crate::{PostRecord, RecommendationScore};

pub const TRENDING_REASON: &str = "Trending now";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingConfig {
    pub scan_limit: usize,
    pub comment_weight: f64,
    pub recency_window_ms: i64,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            scan_limit: 50,
            comment_weight: 2.0,
            recency_window_ms: 7 * 24 * 60 * 60 * 1000,
        }
    }
}

// Deliberately unpersonalized: no requester, no own-post or already-seen
// exclusions, unlike the content and collaborative passes.
pub fn score(
    config: &TrendingConfig,
    posts: &[PostRecord],
    now_ms: i64,
) -> Vec<RecommendationScore> {
    let mut ordered: Vec<&PostRecord> = posts.iter().collect();
    ordered.sort_by(|a, b| {
        b.likes
            .len()
            .cmp(&a.likes.len())
            .then_with(|| a.id.cmp(&b.id))
    });
    ordered.truncate(config.scan_limit);

    let mut scores = Vec::new();
    for post in ordered {
        let engagement =
            post.likes.len() as f64 + config.comment_weight * post.comments.len() as f64;
        let age_ms = now_ms - post.timestamp;
        let recency_factor =
            (1.0 - age_ms as f64 / config.recency_window_ms as f64).max(0.0);
        scores.push(RecommendationScore {
            post_id: post.id.clone(),
            score: engagement * recency_factor,
            reason: TRENDING_REASON.to_string(),
        });
    }

    super::rank(&mut scores);
    scores
}
