//! Mood-keyed mantra reference data.

use super::verse::Localized;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Moods a mantra can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Anxious,
    Sad,
    Angry,
    Confused,
    Grateful,
    Peaceful,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Anxious => "anxious",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Confused => "confused",
            Mood::Grateful => "grateful",
            Mood::Peaceful => "peaceful",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anxious" => Ok(Mood::Anxious),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "confused" => Ok(Mood::Confused),
            "grateful" => Ok(Mood::Grateful),
            "peaceful" => Ok(Mood::Peaceful),
            _ => Err(()),
        }
    }
}

/// A mantra with transliteration and rendered meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mantra {
    pub mood: Mood,
    pub sanskrit: &'static str,
    pub transliteration: &'static str,
    pub meaning: Localized,
}

static MANTRAS: Lazy<Vec<Mantra>> = Lazy::new(|| {
    vec![
        Mantra {
            mood: Mood::Anxious,
            sanskrit: "ॐ शान्तिः शान्तिः शान्तिः",
            transliteration: "Om Shantih Shantih Shantih",
            meaning: Localized {
                english: "Peace in body, peace in mind, peace in spirit.",
                hindi: "शरीर में शांति, मन में शांति, आत्मा में शांति।",
            },
        },
        Mantra {
            mood: Mood::Sad,
            sanskrit: "ॐ नमो भगवते वासुदेवाय",
            transliteration: "Om Namo Bhagavate Vasudevaya",
            meaning: Localized {
                english: "I bow to the divine that dwells within all; sorrow passes, the self endures.",
                hindi: "सबमें बसे दिव्य को प्रणाम; दुख बीत जाता है, आत्मा रहती है।",
            },
        },
        Mantra {
            mood: Mood::Angry,
            sanskrit: "ॐ क्षमा सागराय नमः",
            transliteration: "Om Kshama Sagaraya Namah",
            meaning: Localized {
                english: "Salutations to the ocean of forgiveness; anger dissolves in its vastness.",
                hindi: "क्षमा के सागर को नमन; उसकी विशालता में क्रोध घुल जाता है।",
            },
        },
        Mantra {
            mood: Mood::Confused,
            sanskrit: "ॐ असतो मा सद्गमय",
            transliteration: "Om Asato Ma Sadgamaya",
            meaning: Localized {
                english: "Lead me from the unreal to the real, from darkness to light.",
                hindi: "मुझे असत्य से सत्य की ओर, अंधकार से प्रकाश की ओर ले चलो।",
            },
        },
        Mantra {
            mood: Mood::Grateful,
            sanskrit: "ॐ पूर्णमदः पूर्णमिदं",
            transliteration: "Om Purnamadah Purnamidam",
            meaning: Localized {
                english: "That is whole, this is whole; from wholeness, wholeness arises.",
                hindi: "वह पूर्ण है, यह पूर्ण है; पूर्ण से ही पूर्ण उत्पन्न होता है।",
            },
        },
        Mantra {
            mood: Mood::Peaceful,
            sanskrit: "ॐ सर्वे भवन्तु सुखिनः",
            transliteration: "Om Sarve Bhavantu Sukhinah",
            meaning: Localized {
                english: "May all beings be happy, may all beings be free from illness.",
                hindi: "सभी सुखी हों, सभी निरोगी हों।",
            },
        },
    ]
});

/// Looks up the mantra for a mood. Total over the `Mood` enum.
pub fn mantra_for_mood(mood: Mood) -> &'static Mantra {
    MANTRAS
        .iter()
        .find(|m| m.mood == mood)
        .unwrap_or(&MANTRAS[0])
}
