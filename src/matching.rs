use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::behavior::UserBehavior;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub liked_weight: f64,
    pub followed_weight: f64,
    pub max_results: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            liked_weight: 0.7,
            followed_weight: 0.3,
            max_results: 10,
        }
    }
}

pub fn similarity(config: &MatcherConfig, a: &UserBehavior, b: &UserBehavior) -> f64 {
    let liked_overlap = a.liked_posts.intersection(&b.liked_posts).count();
    let followed_overlap = a.followed_users.intersection(&b.followed_users).count();
    liked_overlap as f64 * config.liked_weight + followed_overlap as f64 * config.followed_weight
}

pub fn rank_similar_users(
    config: &MatcherConfig,
    requester: &UserBehavior,
    others: &[UserBehavior],
) -> Vec<String> {
    let mut scored: Vec<(String, f64)> = others
        .iter()
        .filter(|other| other.user_id != requester.user_id)
        .map(|other| (other.user_id.clone(), similarity(config, requester, other)))
        .filter(|(_, value)| *value > 0.0)
        .collect();

    // Stable sort keeps scan order among equal similarities.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(config.max_results);
    scored.into_iter().map(|(user_id, _)| user_id).collect()
}
