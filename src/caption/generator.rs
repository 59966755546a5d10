use rand::Rng;

use crate::caption::chains::CaptionChains;

pub const DEFAULT_MAX_WORDS: usize = 15;

pub fn generate<R: Rng + ?Sized>(
    chains: &CaptionChains,
    seed_words: &[String],
    max_words: usize,
    rng: &mut R,
) -> String {
    let mut caption: Vec<String> = seed_words.to_vec();

    while caption.len() < max_words {
        let third_key = tail_key(&caption, 3);
        let second_key = tail_key(&caption, 2);

        let candidates = chains
            .third_order(&third_key)
            .or_else(|| chains.second_order(&second_key));
        let Some(candidates) = candidates else {
            break;
        };

        let total: u32 = candidates.values().sum();
        let mut draw = rng.gen_range(0.0..total as f64);
        let mut next_word = None;
        for (word, count) in candidates {
            draw -= *count as f64;
            if draw <= 0.0 {
                next_word = Some(word.clone());
                break;
            }
        }

        let Some(word) = next_word else {
            break;
        };
        let terminal = word.ends_with('.');
        caption.push(word);
        if terminal {
            break;
        }
    }

    caption.join(" ")
}

// Mirrors the composer behavior: prefer a known three-word prefix, fall
// back to a known two-word prefix, otherwise offer nothing.
pub fn seed_from_draft(chains: &CaptionChains, draft: &str) -> Option<Vec<String>> {
    let words: Vec<String> = draft
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    if words.len() >= 3 && chains.third_order(&words[..3].join(" ")).is_some() {
        return Some(words[..3].to_vec());
    }
    if words.len() >= 2 && chains.second_order(&words[..2].join(" ")).is_some() {
        return Some(words[..2].to_vec());
    }
    None
}

fn tail_key(words: &[String], n: usize) -> String {
    words[words.len().saturating_sub(n)..].join(" ")
}
