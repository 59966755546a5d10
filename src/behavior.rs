use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::PostRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBehavior {
    pub user_id: String,
    pub liked_posts: BTreeSet<String>,
    pub commented_posts: BTreeSet<String>,
    pub saved_posts: BTreeSet<String>,
    pub followed_users: BTreeSet<String>,
    pub last_activity: i64,
}

impl UserBehavior {
    pub fn empty(user_id: &str, at_ms: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            liked_posts: BTreeSet::new(),
            commented_posts: BTreeSet::new(),
            saved_posts: BTreeSet::new(),
            followed_users: BTreeSet::new(),
            last_activity: at_ms,
        }
    }
}

// Comments and saves are recorded on the write path but never folded back
// into the derived profile; aggregation only sees likes and follows.
pub fn aggregate(
    user_id: &str,
    posts: &[PostRecord],
    following: &[String],
    at_ms: i64,
) -> UserBehavior {
    let liked_posts = posts
        .iter()
        .filter(|post| post.liked_by(user_id))
        .map(|post| post.id.clone())
        .collect();

    UserBehavior {
        user_id: user_id.to_string(),
        liked_posts,
        commented_posts: BTreeSet::new(),
        saved_posts: BTreeSet::new(),
        followed_users: following.iter().cloned().collect(),
        last_activity: at_ms,
    }
}
