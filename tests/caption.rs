use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use feedrank::caption::{generate, seed_from_draft, CaptionChains};

// Draws zero entropy, so the weighted sampler always lands on the first
// enumerated candidate.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        dest.fill(0);
        Ok(())
    }
}

fn sample_chains() -> CaptionChains {
    CaptionChains::build(["the cat sat on the mat.", "the cat ran in the park."])
}

fn words(values: &[&str]) -> Vec<String> {
    values.iter().map(|word| word.to_string()).collect()
}

#[test]
fn builds_second_order_counts() {
    let chains = sample_chains();

    let next = chains.second_order("the cat").expect("key missing");
    assert_eq!(next.len(), 2);
    assert_eq!(next.get("sat"), Some(&1));
    assert_eq!(next.get("ran"), Some(&1));
}

#[test]
fn builds_third_order_counts() {
    let chains = sample_chains();

    let next = chains.third_order("the cat sat").expect("key missing");
    assert_eq!(next.get("on"), Some(&1));
}

#[test]
fn lowercases_captions_before_chaining() {
    let chains = CaptionChains::build(["The Cat SAT on the mat."]);

    assert!(chains.second_order("the cat").is_some());
}

#[test]
fn fixed_rng_reproduces_a_known_continuation() {
    let chains = sample_chains();
    let mut rng = ZeroRng;

    let caption = generate(&chains, &words(&["the", "cat"]), 15, &mut rng);

    assert_eq!(caption, "the cat ran in the park.");
}

#[test]
fn seeded_rng_produces_one_of_the_known_continuations() {
    let chains = sample_chains();
    let mut rng = StdRng::seed_from_u64(7);

    let caption = generate(&chains, &words(&["the", "cat"]), 15, &mut rng);

    assert!(
        caption == "the cat ran in the park." || caption == "the cat sat on the mat.",
        "unexpected caption: {}",
        caption
    );
}

#[test]
fn stops_after_a_terminal_period() {
    let chains = CaptionChains::build(["end it now."]);
    let mut rng = ZeroRng;

    let caption = generate(&chains, &words(&["end", "it"]), 15, &mut rng);

    assert_eq!(caption, "end it now.");
}

#[test]
fn stops_at_the_word_budget() {
    let chains = CaptionChains::build(["go go go go go go"]);
    let mut rng = ZeroRng;

    let caption = generate(&chains, &words(&["go", "go"]), 5, &mut rng);

    assert_eq!(caption, "go go go go go");
}

#[test]
fn falls_back_from_third_to_second_order() {
    let chains = sample_chains();
    let mut rng = ZeroRng;

    let caption = generate(&chains, &words(&["hey", "the", "cat"]), 15, &mut rng);

    assert_eq!(caption, "hey the cat ran in the park.");
}

#[test]
fn returns_seed_unchanged_when_no_table_matches() {
    let chains = CaptionChains::build(Vec::<String>::new());
    let mut rng = ZeroRng;

    let caption = generate(&chains, &words(&["hello", "world"]), 15, &mut rng);

    assert_eq!(caption, "hello world");
}

#[test]
fn seed_from_draft_prefers_three_word_prefix() {
    let chains = sample_chains();

    let seed = seed_from_draft(&chains, "The cat sat somewhere new");

    assert_eq!(seed, Some(words(&["the", "cat", "sat"])));
}

#[test]
fn seed_from_draft_falls_back_to_two_word_prefix() {
    let chains = sample_chains();

    let seed = seed_from_draft(&chains, "the cat");

    assert_eq!(seed, Some(words(&["the", "cat"])));
}

#[test]
fn seed_from_draft_rejects_unknown_prefixes() {
    let chains = sample_chains();

    assert_eq!(seed_from_draft(&chains, "completely unknown words"), None);
    assert_eq!(seed_from_draft(&chains, ""), None);
}
