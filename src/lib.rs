pub mod behavior;
pub mod caption;
pub mod config;
pub mod engine;
pub mod features;
pub mod matching;
pub mod recommend;
pub mod store;

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub likes: Vec<String>,
    pub comments: Vec<CommentRecord>,
    pub timestamp: i64,
}

impl PostRecord {
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|uid| uid == user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub user_id: String,
    pub text: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub uid: String,
    pub display_name: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Like,
    Comment,
    Save,
    View,
}

impl InteractionKind {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "like" => Some(InteractionKind::Like),
            "comment" => Some(InteractionKind::Comment),
            "save" => Some(InteractionKind::Save),
            "view" => Some(InteractionKind::View),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InteractionKind::Like => "like",
            InteractionKind::Comment => "comment",
            InteractionKind::Save => "save",
            InteractionKind::View => "view",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationScore {
    pub post_id: String,
    pub score: f64,
    pub reason: String,
}

pub fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as i64)
        .unwrap_or(0)
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}
