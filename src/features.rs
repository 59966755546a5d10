use std::collections::HashSet;

pub const CATEGORY_TAGS: [&str; 20] = [
    "food",
    "travel",
    "fashion",
    "beauty",
    "fitness",
    "art",
    "music",
    "photography",
    "nature",
    "pets",
    "technology",
    "lifestyle",
    "sports",
    "cooking",
    "diy",
    "crafts",
    "gaming",
    "books",
    "movies",
    "cars",
];

pub fn extract_features(caption: &str) -> Vec<String> {
    let sanitized: String = caption
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_' || ch.is_whitespace())
        .collect();

    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for word in sanitized.split_whitespace() {
        if word.len() <= 2 {
            continue;
        }
        let keep =
            CATEGORY_TAGS.contains(&word) || word.starts_with('#') || word.len() > 4;
        if keep && seen.insert(word.to_string()) {
            tags.push(word.to_string());
        }
    }

    tags
}

pub fn content_similarity(caption_a: &str, caption_b: &str) -> f64 {
    let features_a = extract_features(caption_a);
    let features_b = extract_features(caption_b);

    if features_a.is_empty() && features_b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = features_a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = features_b.iter().map(String::as_str).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    intersection as f64 / union as f64
}
