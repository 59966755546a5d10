use std::collections::BTreeSet;

use feedrank::behavior::UserBehavior;
use feedrank::matching::{rank_similar_users, MatcherConfig};
use feedrank::recommend::{blend, collaborative, content, trending};
use feedrank::recommend::{BlendWeights, TrendingConfig};
use feedrank::{CommentRecord, PostRecord, RecommendationScore};

const NOW_MS: i64 = 1_750_000_000_000;

fn post(id: &str, author: &str, caption: &str, likes: &[&str], timestamp: i64) -> PostRecord {
    PostRecord {
        id: id.to_string(),
        user_id: author.to_string(),
        content: caption.to_string(),
        likes: likes.iter().map(|uid| uid.to_string()).collect(),
        comments: Vec::new(),
        timestamp,
    }
}

fn engaged_post(id: &str, like_count: usize, comment_count: usize, timestamp: i64) -> PostRecord {
    let likes = (0..like_count).map(|idx| format!("liker_{}", idx)).collect();
    let comments = (0..comment_count)
        .map(|idx| CommentRecord {
            user_id: format!("commenter_{}", idx),
            text: "nice shot".to_string(),
            timestamp,
        })
        .collect();
    PostRecord {
        id: id.to_string(),
        user_id: "author".to_string(),
        content: String::new(),
        likes,
        comments,
        timestamp,
    }
}

fn behavior(user_id: &str, liked: &[&str], followed: &[&str]) -> UserBehavior {
    UserBehavior {
        user_id: user_id.to_string(),
        liked_posts: liked.iter().map(|id| id.to_string()).collect(),
        commented_posts: BTreeSet::new(),
        saved_posts: BTreeSet::new(),
        followed_users: followed.iter().map(|id| id.to_string()).collect(),
        last_activity: NOW_MS,
    }
}

fn raw(post_id: &str, score: f64, reason: &str) -> RecommendationScore {
    RecommendationScore {
        post_id: post_id.to_string(),
        score,
        reason: reason.to_string(),
    }
}

#[test]
fn content_based_scores_by_preference_overlap() {
    let posts = vec![
        post("p_liked", "bob", "travel photography", &["alice"], NOW_MS),
        post("p_cand", "bob", "travel photography", &[], NOW_MS),
        post("p_misc", "carol", "cooking dinner tonight", &[], NOW_MS),
    ];
    let alice = behavior("alice", &["p_liked"], &[]);

    let scores = content::score("alice", &alice, &posts);

    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].post_id, "p_cand");
    assert!((scores[0].score - 1.0).abs() < 1e-6);
    assert_eq!(scores[0].reason, "Based on your interests");
}

#[test]
fn content_based_excludes_own_posts() {
    let posts = vec![
        post("p_liked", "bob", "travel photography", &["alice"], NOW_MS),
        post("p_own", "alice", "travel photography", &[], NOW_MS),
    ];
    let alice = behavior("alice", &["p_liked"], &[]);

    let scores = content::score("alice", &alice, &posts);

    assert!(scores.iter().all(|entry| entry.post_id != "p_own"));
}

#[test]
fn content_based_excludes_liked_and_commented_posts() {
    let posts = vec![
        post("p_liked", "bob", "travel photography", &["alice"], NOW_MS),
        post("p_commented", "bob", "travel photography", &[], NOW_MS),
    ];
    let mut alice = behavior("alice", &["p_liked"], &[]);
    alice.commented_posts.insert("p_commented".to_string());

    let scores = content::score("alice", &alice, &posts);

    assert!(scores.is_empty());
}

#[test]
fn collaborative_counts_distinct_similar_likers() {
    let requester = behavior("alice", &["p1"], &[]);
    let similar = vec![
        behavior("bob", &["p1", "p2"], &[]),
        behavior("carol", &["p2", "p3"], &[]),
    ];

    let scores = collaborative::score(&requester, &similar);

    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].post_id, "p2");
    assert!((scores[0].score - 2.0).abs() < 1e-6);
    assert_eq!(scores[0].reason, "Liked by 2 users similar to you");
    assert_eq!(scores[1].post_id, "p3");
    assert!((scores[1].score - 1.0).abs() < 1e-6);
}

#[test]
fn collaborative_excludes_posts_requester_already_liked() {
    let requester = behavior("alice", &["p1"], &[]);
    let similar = vec![behavior("bob", &["p1"], &[])];

    let scores = collaborative::score(&requester, &similar);

    assert!(scores.is_empty());
}

#[test]
fn trending_decays_older_posts_toward_zero() {
    let config = TrendingConfig::default();
    let fresh = engaged_post("p_fresh", 100, 50, NOW_MS);
    let stale = engaged_post("p_stale", 100, 50, NOW_MS - 8 * 24 * 60 * 60 * 1000);

    let scores = trending::score(&config, &[stale, fresh], NOW_MS);

    assert_eq!(scores[0].post_id, "p_fresh");
    assert!((scores[0].score - 200.0).abs() < 1e-6);
    assert_eq!(scores[0].reason, "Trending now");
    assert_eq!(scores[1].post_id, "p_stale");
    assert!((scores[1].score - 0.0).abs() < 1e-6);
}

#[test]
fn trending_scans_only_the_most_liked_posts() {
    let config = TrendingConfig {
        scan_limit: 2,
        ..TrendingConfig::default()
    };
    let posts = vec![
        engaged_post("p_small", 1, 0, NOW_MS),
        engaged_post("p_big", 3, 0, NOW_MS),
        engaged_post("p_mid", 2, 0, NOW_MS),
    ];

    let scores = trending::score(&config, &posts, NOW_MS);

    assert_eq!(scores.len(), 2);
    assert!(scores.iter().any(|entry| entry.post_id == "p_big"));
    assert!(scores.iter().any(|entry| entry.post_id == "p_mid"));
}

#[test]
fn merge_applies_weights_and_concatenates_reasons() {
    let weights = BlendWeights::default();
    let content_scores = vec![raw("p", 10.0, "Based on your interests")];
    let collaborative_scores = vec![raw("p", 5.0, "Liked by 5 users similar to you")];

    let merged = blend::merge(&weights, content_scores, collaborative_scores, Vec::new(), 20);

    assert_eq!(merged.len(), 1);
    assert!((merged[0].score - 6.0).abs() < 1e-6);
    assert_eq!(
        merged[0].reason,
        "Based on your interests and Liked by 5 users similar to you"
    );
}

#[test]
fn merge_weights_trending_contributions() {
    let weights = BlendWeights::default();
    let trending_scores = vec![raw("p", 10.0, "Trending now")];

    let merged = blend::merge(&weights, Vec::new(), Vec::new(), trending_scores, 20);

    assert_eq!(merged.len(), 1);
    assert!((merged[0].score - 2.0).abs() < 1e-6);
    assert_eq!(merged[0].reason, "Trending now");
}

#[test]
fn merge_breaks_score_ties_by_post_id() {
    let weights = BlendWeights::default();
    let content_scores = vec![raw("p_b", 5.0, "Based on your interests")];
    let collaborative_scores = vec![raw("p_a", 5.0, "Liked by 5 users similar to you")];

    let merged = blend::merge(&weights, content_scores, collaborative_scores, Vec::new(), 20);

    assert_eq!(merged[0].post_id, "p_a");
    assert_eq!(merged[1].post_id, "p_b");
}

#[test]
fn merge_truncates_to_requested_limit() {
    let weights = BlendWeights::default();
    let trending_scores = vec![
        raw("p1", 3.0, "Trending now"),
        raw("p2", 2.0, "Trending now"),
        raw("p3", 1.0, "Trending now"),
    ];

    let merged = blend::merge(&weights, Vec::new(), Vec::new(), trending_scores, 2);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].post_id, "p1");
    assert_eq!(merged[1].post_id, "p2");
}

#[test]
fn similar_users_ranked_by_weighted_overlap() {
    let config = MatcherConfig::default();
    let requester = behavior("alice", &["p1", "p2"], &["u9"]);
    let others = vec![
        behavior("carol", &["p1"], &[]),
        behavior("bob", &["p1", "p2"], &["u9"]),
        behavior("dave", &[], &[]),
        behavior("alice", &["p1", "p2"], &["u9"]),
    ];

    let ranked = rank_similar_users(&config, &requester, &others);

    assert_eq!(ranked, vec!["bob".to_string(), "carol".to_string()]);
}

#[test]
fn similar_users_capped_at_configured_maximum() {
    let config = MatcherConfig {
        max_results: 1,
        ..MatcherConfig::default()
    };
    let requester = behavior("alice", &["p1", "p2"], &[]);
    let others = vec![
        behavior("bob", &["p1", "p2"], &[]),
        behavior("carol", &["p1"], &[]),
    ];

    let ranked = rank_similar_users(&config, &requester, &others);

    assert_eq!(ranked, vec!["bob".to_string()]);
}
