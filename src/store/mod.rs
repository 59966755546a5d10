pub mod json;
pub mod memory;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tokio::sync::broadcast;

use crate::{InteractionKind, PostRecord, UserRecord};

pub use json::JsonStore;
pub use memory::MemoryStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorRecord {
    pub user_id: String,
    pub liked_posts: BTreeSet<String>,
    pub commented_posts: BTreeSet<String>,
    pub saved_posts: BTreeSet<String>,
    pub viewed_posts: BTreeSet<String>,
    pub last_activity: i64,
}

impl BehaviorRecord {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            liked_posts: BTreeSet::new(),
            commented_posts: BTreeSet::new(),
            saved_posts: BTreeSet::new(),
            viewed_posts: BTreeSet::new(),
            last_activity: 0,
        }
    }

    // Set-union merge: recording the same interaction twice is a no-op.
    pub fn merge(&mut self, post_id: &str, kind: InteractionKind, at_ms: i64) {
        let target = match kind {
            InteractionKind::Like => &mut self.liked_posts,
            InteractionKind::Comment => &mut self.commented_posts,
            InteractionKind::Save => &mut self.saved_posts,
            InteractionKind::View => &mut self.viewed_posts,
        };
        target.insert(post_id.to_string());
        self.last_activity = at_ms;
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    PostCreated {
        post_id: String,
        user_id: String,
    },
    InteractionRecorded {
        user_id: String,
        post_id: String,
        kind: InteractionKind,
    },
    FollowAdded {
        user_id: String,
        target_id: String,
    },
}

#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, String>;
    async fn get_post(&self, post_id: &str) -> Result<Option<PostRecord>, String>;
    async fn create_post(&self, post: PostRecord) -> Result<PostRecord, String>;
    async fn list_users(&self) -> Result<Vec<UserRecord>, String>;
    async fn create_user(&self, user: UserRecord) -> Result<UserRecord, String>;
    async fn list_following(&self, user_id: &str) -> Result<Vec<String>, String>;
    async fn follow(&self, user_id: &str, target_id: &str) -> Result<(), String>;
    async fn behavior_record(&self, user_id: &str) -> Result<Option<BehaviorRecord>, String>;
    async fn merge_interaction(
        &self,
        user_id: &str,
        post_id: &str,
        kind: InteractionKind,
        at_ms: i64,
    ) -> Result<(), String>;
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}
