use serde::{Deserialize, Serialize};

use feedrank::{now_ms, stable_hash64, InteractionKind, PostRecord, RecommendationScore};

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub user_id: String,
    pub limit: Option<usize>,
}

impl RecommendationsQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.user_id.trim().is_empty() {
            return Err("user_id is required".to_string());
        }
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err("limit must be positive".to_string());
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub user_id: String,
    pub recommendations: Vec<RecommendationScore>,
}

#[derive(Debug, Deserialize)]
pub struct CaptionQuery {
    pub draft: String,
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub suggestion: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InteractionRequest {
    pub user_id: String,
    pub post_id: String,
    pub kind: String,
}

impl InteractionRequest {
    pub fn into_parts(self) -> Result<(String, String, InteractionKind), String> {
        if self.user_id.trim().is_empty() {
            return Err("user_id is required".to_string());
        }
        if self.post_id.trim().is_empty() {
            return Err("post_id is required".to_string());
        }
        let kind = InteractionKind::from_str(&self.kind)
            .ok_or_else(|| format!("invalid interaction kind: {}", self.kind))?;
        Ok((self.user_id, self.post_id, kind))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub user_id: String,
    pub content: String,
}

impl CreatePostRequest {
    pub fn into_post(self) -> Result<PostRecord, String> {
        let user_id = self.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err("user_id is required".to_string());
        }
        let content = self.content.trim().to_string();
        if content.is_empty() {
            return Err("content is required".to_string());
        }

        let timestamp = now_ms();
        let payload = format!("{}:{}:{}", user_id, content, timestamp);
        Ok(PostRecord {
            id: format!("post_{:x}", stable_hash64(&payload)),
            user_id,
            content,
            likes: Vec::new(),
            comments: Vec::new(),
            timestamp,
        })
    }
}
