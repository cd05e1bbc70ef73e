//! Wisdom domain: problem classification, prompts, and fallback responses.

mod category;
mod fallback;
mod language;
mod prompt;

pub use category::ResponseCategory;
pub use fallback::{dream_fallback, fallback_response};
pub use language::Language;
pub use prompt::{build_dream_prompt, build_prompt};
