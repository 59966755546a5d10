use std::collections::HashMap;
use tokio::sync::{broadcast, RwLock};

use crate::store::{BehaviorRecord, DocumentStore, StoreEvent};
use crate::{InteractionKind, PostRecord, UserRecord};

pub struct MemoryStore {
    posts: RwLock<Vec<PostRecord>>,
    users: RwLock<Vec<UserRecord>>,
    follows: RwLock<HashMap<String, Vec<String>>>,
    behavior: RwLock<HashMap<String, BehaviorRecord>>,
    events: broadcast::Sender<StoreEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            posts: RwLock::new(Vec::new()),
            users: RwLock::new(Vec::new()),
            follows: RwLock::new(HashMap::new()),
            behavior: RwLock::new(HashMap::new()),
            events,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, String> {
        let guard = self.posts.read().await;
        Ok(guard.clone())
    }

    async fn get_post(&self, post_id: &str) -> Result<Option<PostRecord>, String> {
        let guard = self.posts.read().await;
        Ok(guard.iter().find(|post| post.id == post_id).cloned())
    }

    async fn create_post(&self, post: PostRecord) -> Result<PostRecord, String> {
        let mut guard = self.posts.write().await;
        guard.push(post.clone());
        let _ = self.events.send(StoreEvent::PostCreated {
            post_id: post.id.clone(),
            user_id: post.user_id.clone(),
        });
        Ok(post)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>, String> {
        let guard = self.users.read().await;
        Ok(guard.clone())
    }

    async fn create_user(&self, user: UserRecord) -> Result<UserRecord, String> {
        let mut guard = self.users.write().await;
        guard.retain(|existing| existing.uid != user.uid);
        guard.push(user.clone());
        Ok(user)
    }

    async fn list_following(&self, user_id: &str) -> Result<Vec<String>, String> {
        let guard = self.follows.read().await;
        Ok(guard.get(user_id).cloned().unwrap_or_default())
    }

    async fn follow(&self, user_id: &str, target_id: &str) -> Result<(), String> {
        let mut guard = self.follows.write().await;
        let targets = guard.entry(user_id.to_string()).or_default();
        if !targets.iter().any(|uid| uid == target_id) {
            targets.push(target_id.to_string());
        }
        let _ = self.events.send(StoreEvent::FollowAdded {
            user_id: user_id.to_string(),
            target_id: target_id.to_string(),
        });
        Ok(())
    }

    async fn behavior_record(&self, user_id: &str) -> Result<Option<BehaviorRecord>, String> {
        let guard = self.behavior.read().await;
        Ok(guard.get(user_id).cloned())
    }

    async fn merge_interaction(
        &self,
        user_id: &str,
        post_id: &str,
        kind: InteractionKind,
        at_ms: i64,
    ) -> Result<(), String> {
        let mut guard = self.behavior.write().await;
        let record = guard
            .entry(user_id.to_string())
            .or_insert_with(|| BehaviorRecord::new(user_id));
        record.merge(post_id, kind, at_ms);
        let _ = self.events.send(StoreEvent::InteractionRecorded {
            user_id: user_id.to_string(),
            post_id: post_id.to_string(),
            kind,
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
