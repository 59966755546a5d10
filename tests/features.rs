use feedrank::features::{content_similarity, extract_features};

#[test]
fn extracts_category_words_and_drops_fillers() {
    let features = extract_features("I love Photography and #Travel!!");

    assert!(features.iter().any(|tag| tag == "photography"));
    assert!(features.iter().any(|tag| tag == "travel"));
    assert!(!features.iter().any(|tag| tag == "and"));
    assert!(!features.iter().any(|tag| tag == "love"));
}

#[test]
fn keeps_long_words() {
    let features = extract_features("wonderful sunset vibes");

    assert_eq!(features, vec!["wonderful", "sunset", "vibes"]);
}

#[test]
fn drops_short_words_entirely() {
    let features = extract_features("the sun is up");

    assert!(features.is_empty());
}

#[test]
fn strips_punctuation_before_matching() {
    let features = extract_features("cooking, cooking... COOKING!");

    assert_eq!(features, vec!["cooking"]);
}

#[test]
fn empty_caption_yields_no_features() {
    assert!(extract_features("").is_empty());
}

#[test]
fn similarity_of_two_empty_captions_is_zero() {
    let similarity = content_similarity("", "");

    assert!((similarity - 0.0).abs() < 1e-6);
}

#[test]
fn similarity_of_identical_captions_is_one() {
    let similarity = content_similarity("travel photography", "travel photography");

    assert!((similarity - 1.0).abs() < 1e-6);
}

#[test]
fn similarity_of_disjoint_captions_is_zero() {
    let similarity = content_similarity("travel", "cooking");

    assert!((similarity - 0.0).abs() < 1e-6);
}

#[test]
fn similarity_of_partial_overlap_is_jaccard_ratio() {
    let similarity = content_similarity("travel photography", "travel cooking");

    assert!((similarity - 1.0 / 3.0).abs() < 1e-6);
}
