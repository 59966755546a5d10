pub mod chains;
pub mod generator;

pub use chains::CaptionChains;
pub use generator::{generate, seed_from_draft, DEFAULT_MAX_WORDS};
