use std::collections::{BTreeMap, HashMap};

// Next-word tables are ordered maps so that enumeration during the
// weighted draw is deterministic for a fixed random source.
#[derive(Debug, Clone, Default)]
pub struct CaptionChains {
    second: HashMap<String, BTreeMap<String, u32>>,
    third: HashMap<String, BTreeMap<String, u32>>,
}

impl CaptionChains {
    pub fn build<I, S>(captions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut chains = CaptionChains::default();
        for caption in captions {
            chains.ingest(caption.as_ref());
        }
        chains
    }

    fn ingest(&mut self, caption: &str) {
        let words: Vec<String> = caption
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if words.len() < 3 {
            return;
        }

        for i in 0..words.len() - 2 {
            let second_key = format!("{} {}", words[i], words[i + 1]);
            let next_word = words[i + 2].clone();
            *self
                .second
                .entry(second_key)
                .or_default()
                .entry(next_word)
                .or_insert(0) += 1;

            if i + 3 < words.len() {
                let third_key = format!("{} {} {}", words[i], words[i + 1], words[i + 2]);
                let next_word = words[i + 3].clone();
                *self
                    .third
                    .entry(third_key)
                    .or_default()
                    .entry(next_word)
                    .or_insert(0) += 1;
            }
        }
    }

    pub fn second_order(&self, key: &str) -> Option<&BTreeMap<String, u32>> {
        self.second.get(key)
    }

    pub fn third_order(&self, key: &str) -> Option<&BTreeMap<String, u32>> {
        self.third.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.second.is_empty() && self.third.is_empty()
    }
}
