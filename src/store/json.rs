use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, RwLock};

use crate::store::{BehaviorRecord, DocumentStore, StoreEvent};
use crate::{InteractionKind, PostRecord, UserRecord};

pub struct JsonStore {
    dir: PathBuf,
    posts: RwLock<Vec<PostRecord>>,
    users: RwLock<Vec<UserRecord>>,
    follows: RwLock<HashMap<String, Vec<String>>>,
    behavior: RwLock<HashMap<String, BehaviorRecord>>,
    events: broadcast::Sender<StoreEvent>,
}

impl JsonStore {
    pub async fn open(dir: PathBuf) -> Result<Self, String> {
        let posts = read_json(&dir.join("posts.json")).await?;
        let users = read_json(&dir.join("users.json")).await?;
        let follows = read_json(&dir.join("follows.json")).await?;
        let behavior = read_json(&dir.join("behavior.json")).await?;
        let (events, _) = broadcast::channel(64);

        Ok(Self {
            dir,
            posts: RwLock::new(posts),
            users: RwLock::new(users),
            follows: RwLock::new(follows),
            behavior: RwLock::new(behavior),
            events,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentStore for JsonStore {
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
        write_json(&self.dir.join("posts.json"), &*guard).await?;
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
        write_json(&self.dir.join("users.json"), &*guard).await?;
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
        write_json(&self.dir.join("follows.json"), &*guard).await?;
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
        write_json(&self.dir.join("behavior.json"), &*guard).await?;
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

async fn read_json<T>(path: &Path) -> Result<T, String>
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return Ok(T::default());
    }
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    if data.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&data)
        .map_err(|err| format!("failed to parse {}: {}", path.display(), err))
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize {}: {}", path.display(), err))?;
    let tmp_path = path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, payload)
        .await
        .map_err(|err| format!("failed to write {}: {}", path.display(), err))?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|err| format!("failed to finalize {}: {}", path.display(), err))?;
    Ok(())
}

async fn ensure_dir(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|err| format!("failed to create data dir: {}", err))
}
