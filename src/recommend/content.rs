use std::collections::HashMap;

use crate::behavior::UserBehavior;
use crate::features::extract_features;
use crate::{PostRecord, RecommendationScore};

pub const CONTENT_REASON: &str = "Based on your interests";

pub fn preference_counts(behavior: &UserBehavior, posts: &[PostRecord]) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for post in posts {
        if !behavior.liked_posts.contains(&post.id) {
            continue;
        }
        for feature in extract_features(&post.content) {
            *counts.entry(feature).or_insert(0) += 1;
        }
    }
    counts
}

pub fn score(
    user_id: &str,
    behavior: &UserBehavior,
    posts: &[PostRecord],
) -> Vec<RecommendationScore> {
    let preferences = preference_counts(behavior, posts);
    let mut scores = Vec::new();

    for post in posts {
        if behavior.liked_posts.contains(&post.id) || behavior.commented_posts.contains(&post.id)
        {
            continue;
        }
        if post.user_id == user_id {
            continue;
        }

        let features = extract_features(&post.content);
        let mut raw: f64 = features
            .iter()
            .map(|feature| preferences.get(feature).copied().unwrap_or(0) as f64)
            .sum();
        if !features.is_empty() {
            raw /= features.len() as f64;
        }

        if raw > 0.0 {
            scores.push(RecommendationScore {
                post_id: post.id.clone(),
                score: raw,
                reason: CONTENT_REASON.to_string(),
            });
        }
    }

    super::rank(&mut scores);
    scores
}
