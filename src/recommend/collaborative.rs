use std::collections::HashMap;

use crate::behavior::UserBehavior;
use crate::RecommendationScore;

pub fn score(requester: &UserBehavior, similar: &[UserBehavior]) -> Vec<RecommendationScore> {
    let mut like_counts: HashMap<String, u32> = HashMap::new();

    for other in similar {
        for post_id in &other.liked_posts {
            if requester.liked_posts.contains(post_id) {
                continue;
            }
            *like_counts.entry(post_id.clone()).or_insert(0) += 1;
        }
    }

    let mut scores: Vec<RecommendationScore> = like_counts
        .into_iter()
        .map(|(post_id, count)| RecommendationScore {
            post_id,
            score: count as f64,
            reason: format!("Liked by {} users similar to you", count),
        })
        .collect();

    super::rank(&mut scores);
    scores
}
