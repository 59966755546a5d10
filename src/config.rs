use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::caption::DEFAULT_MAX_WORDS;
use crate::matching::MatcherConfig;
use crate::recommend::{BlendWeights, TrendingConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionConfig {
    pub max_words: usize,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    pub weights: BlendWeights,
    pub trending: TrendingConfig,
    pub matching: MatcherConfig,
    pub caption: CaptionConfig,
    pub default_limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            weights: BlendWeights::default(),
            trending: TrendingConfig::default(),
            matching: MatcherConfig::default(),
            caption: CaptionConfig::default(),
            default_limit: 20,
        }
    }
}

impl RankingConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                RankingConfig::default()
            }
        } else {
            RankingConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(weight) = env::var("FEEDRANK_CONTENT_WEIGHT") {
            if let Ok(value) = weight.parse::<f64>() {
                self.weights.content = value;
            }
        }
        if let Ok(weight) = env::var("FEEDRANK_COLLAB_WEIGHT") {
            if let Ok(value) = weight.parse::<f64>() {
                self.weights.collaborative = value;
            }
        }
        if let Ok(weight) = env::var("FEEDRANK_TRENDING_WEIGHT") {
            if let Ok(value) = weight.parse::<f64>() {
                self.weights.trending = value;
            }
        }
        if let Ok(limit) = env::var("FEEDRANK_DEFAULT_LIMIT") {
            if let Ok(value) = limit.parse::<usize>() {
                if value > 0 {
                    self.default_limit = value;
                }
            }
        }
        if let Ok(max_words) = env::var("FEEDRANK_CAPTION_MAX_WORDS") {
            if let Ok(value) = max_words.parse::<usize>() {
                if value > 0 {
                    self.caption.max_words = value;
                }
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("FEEDRANK_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/feedrank.toml")))
}
