//! Prompt sent to the LLM to turn a note into flashcards.

use super::models::{AMBIGUOUS_ANSWER, MAX_CARDS};

/// Study domain used when none is configured.
pub const DEFAULT_SUBJECT: &str = "Torah study";

/// Build the flashcard prompt for `content`.
///
/// The note content is embedded verbatim between quote lines, after the
/// instructions. `subject` names the domain the notes are expected to cover;
/// anything outside it must produce zero cards.
pub fn build_flashcard_prompt(subject: &str, content: &str) -> String {
    format!(
        "You are a focused flashcard generator for {subject}.\n\
         Input: a block of study notes about {subject}.\n\
         Output: valid JSON only. No commentary, no markdown, no extra text.\n\
         \n\
         REQUIREMENTS:\n\
         1. Read the notes and write concise question/answer flashcards covering the key \
         rulings, definitions, reasons, stories, contrasts, disagreements and ideas.\n\
         2. Produce at most {max_cards} cards, fewer for short notes. Never make up \
         information that is not in the notes just to create more cards.\n\
         3. If the notes are empty, return zero cards.\n\
         4. If the notes do not give enough information, do not fill the gap with outside \
         knowledge.\n\
         5. Each card has exactly: \"id\" (integer, starting at 1 and increasing by 1), \
         \"question\" (string), \"answer\" (string).\n\
         6. The top-level JSON object has exactly one key: \"cards\" (array).\n\
         7. Do not include tags, timestamps, language markers, titles or any other metadata.\n\
         8. If an item in the notes is ambiguous or has no clear answer, set its answer to \
         \"{ambiguous}\".\n\
         9. Do not invent sources or facts.\n\
         10. If the notes are not about {subject}, return zero cards.\n\
         11. Return parsable JSON only.\n\
         \n\
         Output format (valid JSON only):\n\
         {{\n\
         \x20 \"cards\": [\n\
         \x20   {{ \"id\": 1, \"question\": \"<question text>\", \"answer\": \"<answer text>\" }}\n\
         \x20 ]\n\
         }}\n\
         \n\
         Zero cards looks like: {{ \"cards\": [] }}\n\
         \n\
         Now process the notes below and return ONLY the JSON object.\n\
         \n\
         \"\n\
         {content}\n\
         \"",
        subject = subject,
        max_cards = MAX_CARDS,
        ambiguous = AMBIGUOUS_ANSWER,
        content = content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_content_verbatim() {
        let content = "  ב.\nMishna:\n•\tBegin reading ק״ש  \n";
        let prompt = build_flashcard_prompt(DEFAULT_SUBJECT, content);
        assert!(prompt.contains(content));
        assert!(prompt.ends_with(&format!("\"\n{}\n\"", content)));
    }

    #[test]
    fn test_prompt_states_output_contract() {
        let prompt = build_flashcard_prompt(DEFAULT_SUBJECT, "notes");
        assert!(prompt.contains("at most 25 cards"));
        assert!(prompt.contains("exactly one key: \"cards\""));
        assert!(prompt.contains("\"id\" (integer, starting at 1"));
        assert!(prompt.contains("\"Ambiguous / not stated\""));
        assert!(prompt.contains("If the notes are empty, return zero cards"));
        assert!(prompt.contains("{ \"cards\": [] }"));
    }

    #[test]
    fn test_prompt_uses_subject() {
        let prompt = build_flashcard_prompt("organic chemistry", "notes");
        assert!(prompt.starts_with("You are a focused flashcard generator for organic chemistry."));
        assert!(prompt.contains("If the notes are not about organic chemistry, return zero cards."));
        assert!(!prompt.contains(DEFAULT_SUBJECT));
    }

    #[test]
    fn test_prompt_with_empty_content() {
        let prompt = build_flashcard_prompt(DEFAULT_SUBJECT, "");
        assert!(prompt.ends_with("\"\n\n\""));
    }
}
