use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use feedrank::store::{DocumentStore, JsonStore};
use feedrank::{now_ms, stable_hash64, CommentRecord, PostRecord, UserRecord};

const CAPTION_POOL: &[&str] = &[
    "golden hour photography never gets old.",
    "street photography walk through the old town.",
    "travel diaries from the coast this weekend.",
    "travel light and chase the sunrise.",
    "homemade pasta cooking night with friends.",
    "cooking experiments with garden vegetables today.",
    "morning fitness routine before the city wakes.",
    "nature trails and quiet forest light.",
    "weekend art market finds and gallery visits.",
    "music festival lights and late night energy.",
    "pets of the park being very photogenic.",
    "fashion details from the vintage fair.",
];

pub struct SeedSummary {
    pub users: usize,
    pub posts: usize,
    pub follows: usize,
}

pub async fn populate(
    store: &JsonStore,
    user_count: usize,
    post_count: usize,
    rng_seed: u64,
) -> Result<SeedSummary, String> {
    let mut rng = StdRng::seed_from_u64(rng_seed);
    let now = now_ms();

    let users: Vec<UserRecord> = (0..user_count)
        .map(|idx| UserRecord {
            uid: format!("user_{}", idx),
            display_name: format!("User {}", idx),
            photo_url: None,
        })
        .collect();
    for user in &users {
        store.create_user(user.clone()).await?;
    }

    let mut follows = 0;
    for user in &users {
        for target in &users {
            if target.uid != user.uid && rng.gen::<f64>() < 0.25 {
                store.follow(&user.uid, &target.uid).await?;
                follows += 1;
            }
        }
    }

    for idx in 0..post_count {
        let author = users[rng.gen_range(0..users.len())].clone();
        let caption = CAPTION_POOL[rng.gen_range(0..CAPTION_POOL.len())];
        let age_hours: i64 = rng.gen_range(0..240);
        let timestamp = now - age_hours * 3_600_000;

        let likes: Vec<String> = users
            .iter()
            .filter(|user| user.uid != author.uid && rng.gen::<f64>() < 0.3)
            .map(|user| user.uid.clone())
            .collect();
        let comments: Vec<CommentRecord> = users
            .iter()
            .filter(|user| user.uid != author.uid && rng.gen::<f64>() < 0.1)
            .map(|user| CommentRecord {
                user_id: user.uid.clone(),
                text: "love this".to_string(),
                timestamp,
            })
            .collect();

        let payload = format!("{}:{}:{}", author.uid, caption, idx);
        let post = PostRecord {
            id: format!("post_{:x}", stable_hash64(&payload)),
            user_id: author.uid,
            content: caption.to_string(),
            likes,
            comments,
            timestamp,
        };
        store.create_post(post).await?;
    }

    Ok(SeedSummary {
        users: users.len(),
        posts: post_count,
        follows,
    })
}
