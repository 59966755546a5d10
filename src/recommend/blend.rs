use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::RecommendationScore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendWeights {
    pub content: f64,
    pub collaborative: f64,
    pub trending: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            content: 0.4,
            collaborative: 0.4,
            trending: 0.2,
        }
    }
}

pub fn merge(
    weights: &BlendWeights,
    content: Vec<RecommendationScore>,
    collaborative: Vec<RecommendationScore>,
    trending: Vec<RecommendationScore>,
    limit: usize,
) -> Vec<RecommendationScore> {
    let mut merged: HashMap<String, RecommendationScore> = HashMap::new();

    accumulate(&mut merged, content, weights.content);
    accumulate(&mut merged, collaborative, weights.collaborative);
    accumulate(&mut merged, trending, weights.trending);

    let mut scores: Vec<RecommendationScore> = merged.into_values().collect();
    super::rank(&mut scores);
    scores.truncate(limit);
    scores
}

fn accumulate(
    merged: &mut HashMap<String, RecommendationScore>,
    scores: Vec<RecommendationScore>,
    weight: f64,
) {
    for mut entry in scores {
        entry.score *= weight;
        match merged.get_mut(&entry.post_id) {
            Some(existing) => {
                existing.score += entry.score;
                existing.reason = format!("{} and {}", existing.reason, entry.reason);
            }
            None => {
                merged.insert(entry.post_id.clone(), entry);
            }
        }
    }
}
