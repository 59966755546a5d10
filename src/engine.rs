use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::behavior::{self, UserBehavior};
use crate::caption::{self, CaptionChains};
use crate::config::RankingConfig;
use crate::matching;
use crate::recommend::{blend, collaborative, content, trending};
use crate::store::DocumentStore;
use crate::{now_ms, InteractionKind, RecommendationScore};

// Every public entry point is best-effort: store failures are logged and
// replaced with empty defaults, never propagated to the caller.
pub struct RecommendationEngine<S> {
    store: S,
    config: RankingConfig,
}

impl<S: DocumentStore> RecommendationEngine<S> {
    pub fn new(store: S, config: RankingConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    pub async fn user_behavior(&self, user_id: &str) -> UserBehavior {
        let posts = match self.store.list_posts().await {
            Ok(posts) => posts,
            Err(err) => {
                warn!(user_id, error = %err, "behavior aggregation failed, using empty profile");
                return UserBehavior::empty(user_id, now_ms());
            }
        };
        let following = match self.store.list_following(user_id).await {
            Ok(following) => following,
            Err(err) => {
                warn!(user_id, error = %err, "behavior aggregation failed, using empty profile");
                return UserBehavior::empty(user_id, now_ms());
            }
        };
        behavior::aggregate(user_id, &posts, &following, now_ms())
    }

    pub async fn similar_users(&self, user_id: &str, requester: &UserBehavior) -> Vec<String> {
        let users = match self.store.list_users().await {
            Ok(users) => users,
            Err(err) => {
                warn!(user_id, error = %err, "similar-user scan failed");
                return Vec::new();
            }
        };

        let mut others = Vec::new();
        for user in &users {
            if user.uid == user_id {
                continue;
            }
            others.push(self.user_behavior(&user.uid).await);
        }

        matching::rank_similar_users(&self.config.matching, requester, &others)
    }

    pub async fn content_based(
        &self,
        user_id: &str,
        requester: &UserBehavior,
    ) -> Vec<RecommendationScore> {
        match self.store.list_posts().await {
            Ok(posts) => content::score(user_id, requester, &posts),
            Err(err) => {
                warn!(user_id, error = %err, "content-based pass failed");
                Vec::new()
            }
        }
    }

    pub async fn collaborative(
        &self,
        user_id: &str,
        similar_users: &[String],
    ) -> Vec<RecommendationScore> {
        let requester = self.user_behavior(user_id).await;
        let mut similar = Vec::new();
        for other_id in similar_users {
            similar.push(self.user_behavior(other_id).await);
        }
        collaborative::score(&requester, &similar)
    }

    pub async fn trending(&self) -> Vec<RecommendationScore> {
        match self.store.list_posts().await {
            Ok(posts) => trending::score(&self.config.trending, &posts, now_ms()),
            Err(err) => {
                warn!(error = %err, "trending pass failed");
                Vec::new()
            }
        }
    }

    pub async fn personalized(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Vec<RecommendationScore> {
        let limit = limit.unwrap_or(self.config.default_limit);
        let requester = self.user_behavior(user_id).await;
        let similar = self.similar_users(user_id, &requester).await;

        let content_scores = self.content_based(user_id, &requester).await;
        let collaborative_scores = self.collaborative(user_id, &similar).await;
        let trending_scores = self.trending().await;

        blend::merge(
            &self.config.weights,
            content_scores,
            collaborative_scores,
            trending_scores,
            limit,
        )
    }

    pub async fn track_interaction(&self, user_id: &str, post_id: &str, kind: InteractionKind) {
        if let Err(err) = self
            .store
            .merge_interaction(user_id, post_id, kind, now_ms())
            .await
        {
            warn!(user_id, post_id, error = %err, "failed to record interaction");
        }
    }

    pub async fn caption_chains(&self) -> CaptionChains {
        match self.store.list_posts().await {
            Ok(posts) => CaptionChains::build(posts.iter().map(|post| post.content.as_str())),
            Err(err) => {
                warn!(error = %err, "caption chain build failed");
                CaptionChains::default()
            }
        }
    }

    pub async fn suggest_caption(&self, draft: &str) -> Option<String> {
        let mut rng = StdRng::from_entropy();
        self.suggest_caption_with(draft, &mut rng).await
    }

    pub async fn suggest_caption_with<R: Rng>(&self, draft: &str, rng: &mut R) -> Option<String> {
        let chains = self.caption_chains().await;
        let seed = caption::seed_from_draft(&chains, draft)?;
        Some(caption::generate(
            &chains,
            &seed,
            self.config.caption.max_words,
            rng,
        ))
    }
}
