//! Problem category classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed category set a free-text problem is mapped into.
///
/// Classification is a keyword heuristic; anything that matches nothing
/// lands in `General`, which always has a fallback response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    Relationships,
    Career,
    Health,
    Anxiety,
    Spirituality,
    General,
}

/// Keyword table checked in order; the first category with a hit wins.
const KEYWORDS: &[(ResponseCategory, &[&str])] = &[
    (
        ResponseCategory::Anxiety,
        &[
            "anxiety", "anxious", "worry", "worried", "fear", "afraid", "stress", "stressed",
            "overwhelmed", "depressed", "sad", "lonely",
        ],
    ),
    (
        ResponseCategory::Relationships,
        &[
            "relationship", "love", "partner", "marriage", "wife", "husband", "friend", "family",
            "parents", "breakup", "divorce",
        ],
    ),
    (
        ResponseCategory::Career,
        &[
            "career", "job", "work", "business", "money", "boss", "promotion", "office", "study",
            "exam", "failure", "success",
        ],
    ),
    (
        ResponseCategory::Health,
        &[
            "health", "sick", "illness", "disease", "body", "sleep", "tired", "pain", "addiction",
        ],
    ),
    (
        ResponseCategory::Spirituality,
        &[
            "god", "soul", "meditation", "purpose", "meaning", "karma", "dharma", "spiritual",
            "peace", "enlightenment", "prayer",
        ],
    ),
];

impl ResponseCategory {
    /// Maps free text to a category by keyword match.
    pub fn classify(text: &str) -> Self {
        let lowered = text.to_lowercase();
        for (category, keywords) in KEYWORDS {
            if keywords.iter().any(|kw| lowered.contains(kw)) {
                return *category;
            }
        }
        ResponseCategory::General
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::Relationships => "relationships",
            ResponseCategory::Career => "career",
            ResponseCategory::Health => "health",
            ResponseCategory::Anxiety => "anxiety",
            ResponseCategory::Spirituality => "spirituality",
            ResponseCategory::General => "general",
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "relationships" => Ok(ResponseCategory::Relationships),
            "career" => Ok(ResponseCategory::Career),
            "health" => Ok(ResponseCategory::Health),
            "anxiety" => Ok(ResponseCategory::Anxiety),
            "spirituality" => Ok(ResponseCategory::Spirituality),
            "general" => Ok(ResponseCategory::General),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_keywords() {
        assert_eq!(
            ResponseCategory::classify("I am anxious about everything"),
            ResponseCategory::Anxiety
        );
        assert_eq!(
            ResponseCategory::classify("My marriage is struggling"),
            ResponseCategory::Relationships
        );
        assert_eq!(
            ResponseCategory::classify("I hate my job"),
            ResponseCategory::Career
        );
        assert_eq!(
            ResponseCategory::classify("I cannot sleep at night"),
            ResponseCategory::Health
        );
        assert_eq!(
            ResponseCategory::classify("What is the purpose of life?"),
            ResponseCategory::Spirituality
        );
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(
            ResponseCategory::classify("STRESSED beyond measure"),
            ResponseCategory::Anxiety
        );
    }

    #[test]
    fn unmatched_text_is_general() {
        assert_eq!(
            ResponseCategory::classify("xyzzy plugh"),
            ResponseCategory::General
        );
    }
}
