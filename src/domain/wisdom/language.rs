//! Response languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages a wisdom response can be produced in.
///
/// Unknown language strings fall back to English rather than erroring, so
/// the lookup never blocks a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
        }
    }

    /// Parses a language name, falling back to English for anything
    /// unrecognized.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or(Language::English)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "hindi" => Ok(Language::Hindi),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_default_falls_back_to_english() {
        assert_eq!(Language::parse_or_default("hindi"), Language::Hindi);
        assert_eq!(Language::parse_or_default("HINDI"), Language::Hindi);
        assert_eq!(Language::parse_or_default("klingon"), Language::English);
    }
}
