//! Prompt composition for the generative backend.

use super::{Language, ResponseCategory};

/// Builds the generation prompt for a user's problem.
///
/// The framing asks for Gita-grounded guidance in contemporary language;
/// Hindi requests append an instruction to answer in conversational Hindi.
pub fn build_prompt(question: &str, category: ResponseCategory, language: Language) -> String {
    let mut prompt = format!(
        "You are both a wise spiritual guide knowledgeable in the Bhagavad Gita AND a modern \
         psychologist or life coach. Respond to this problem in a way that today's generation \
         would relate to while providing authentic wisdom.\n\n\
         The user's problem is: \"{question}\" (category: {category})\n\n\
         Your response should:\n\
         1. Acknowledge their struggle with empathy in 1-2 sentences\n\
         2. Provide one or two relevant principles from the Bhagavad Gita, explaining the \
         concept in modern language\n\
         3. Outline 2-3 practical steps they can take, rooted in this wisdom but presented in \
         contemporary terms\n\
         4. End with a brief encouraging statement\n\n\
         Use accessible language while preserving the depth of the wisdom. Avoid religious \
         jargon that might alienate someone unfamiliar with Hindu concepts - instead, focus on \
         the psychological insights.\n\n\
         Keep your response concise (200-400 words)."
    );

    if language == Language::Hindi {
        prompt.push_str(
            "\nPlease respond in conversational Hindi language that's easy to understand.",
        );
    }

    prompt
}

/// Builds the generation prompt for a dream interpretation.
pub fn build_dream_prompt(dream: &str, language: Language) -> String {
    let mut prompt = format!(
        "You are a wise spiritual guide versed in the Bhagavad Gita and Vedic symbolism. \
         Interpret this dream with warmth and insight.\n\n\
         The dream: \"{dream}\"\n\n\
         Your response should:\n\
         1. Reflect the dream's imagery back in 1-2 sentences\n\
         2. Offer a symbolic interpretation drawing on Gita teachings about the mind, desire, \
         and the self\n\
         3. Suggest one gentle reflection or practice the dreamer can carry into the day\n\n\
         Avoid superstition and fortune-telling; focus on the psychological and spiritual \
         meaning of the imagery.\n\n\
         Keep your response concise (150-300 words)."
    );

    if language == Language::Hindi {
        prompt.push_str(
            "\nPlease respond in conversational Hindi language that's easy to understand.",
        );
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_question_and_category() {
        let prompt = build_prompt(
            "I fear failing my exams",
            ResponseCategory::Career,
            Language::English,
        );
        assert!(prompt.contains("I fear failing my exams"));
        assert!(prompt.contains("category: career"));
    }

    #[test]
    fn hindi_prompt_requests_hindi_response() {
        let english = build_prompt("help", ResponseCategory::General, Language::English);
        let hindi = build_prompt("help", ResponseCategory::General, Language::Hindi);
        assert!(!english.contains("Hindi language"));
        assert!(hindi.contains("Hindi language"));
    }

    #[test]
    fn dream_prompt_embeds_the_dream() {
        let prompt = build_dream_prompt("I was flying over a river", Language::English);
        assert!(prompt.contains("I was flying over a river"));

        let hindi = build_dream_prompt("I was flying", Language::Hindi);
        assert!(hindi.contains("Hindi language"));
    }
}
