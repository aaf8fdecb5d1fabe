//! Untrusted LLM output → validated flashcards
//!
//! The response goes through a fixed sequence of stages; the first failure
//! wins and names a specific [`MalformedReason`]:
//!
//! 1. parse the first JSON object found in the raw text
//! 2. require a `cards` array
//! 3. require numeric `id` and string `question`/`answer` on every card
//! 4. run the [`CARD_CHECKS`] in order (count limit, text bounds)
//!
//! Accepted cards keep their text exactly as the model wrote it; the bounds
//! are checked on the trimmed text.
//!
//! New checks go at the end of [`CARD_CHECKS`] so existing reasons keep
//! their precedence.

use super::models::{Flashcard, FlashcardSet, MAX_CARDS, MAX_FIELD_CHARS};
use crate::error::{CardField, MalformedReason};
use crate::notes::User;
use serde_json::Value;

/// A card that passed the type check, borrowing from the parsed JSON.
#[derive(Debug, Clone, Copy)]
pub struct RawCard<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

/// A validator over the whole list of type-checked cards.
pub type CardCheck = for<'a> fn(&[RawCard<'a>]) -> Result<(), MalformedReason>;

/// Card-level validators, run in order after the type check.
pub const CARD_CHECKS: &[CardCheck] = &[check_card_count, check_text_bounds];

/// Parse and validate a raw LLM response into a flashcard set for `user`.
///
/// All-or-nothing: either every card is valid or an error is returned.
/// An empty `cards` array is a valid, empty set.
pub fn parse_flashcards(response: &str, user: &User) -> Result<FlashcardSet, MalformedReason> {
    let value = extract_json_object(response)?;

    let cards = typed_cards(cards_array(&value)?)?;
    for check in CARD_CHECKS {
        check(&cards)?;
    }

    Ok(FlashcardSet {
        user: user.clone(),
        cards: cards
            .iter()
            .map(|card| Flashcard {
                question: card.question.to_string(),
                answer: card.answer.to_string(),
            })
            .collect(),
    })
}

/// Parse the first JSON object embedded in `text`.
///
/// Tries each `{` in turn and lets serde_json read one value from there,
/// ignoring whatever follows it. Prose and code fences around the object
/// are skipped, as are brace pairs in the prose that are not JSON.
///
/// Returns `NoJsonObject` when `text` has no `{` at all, and `InvalidJson`
/// with the first parse error when no `{` starts a valid object.
pub fn extract_json_object(text: &str) -> Result<Value, MalformedReason> {
    let mut first_error = None;

    for (start, _) in text.match_indices('{') {
        match serde_json::Deserializer::from_str(&text[start..])
            .into_iter::<Value>()
            .next()
        {
            Some(Ok(value @ Value::Object(_))) => return Ok(value),
            Some(Err(e)) => {
                first_error.get_or_insert_with(|| e.to_string());
            }
            _ => {}
        }
    }

    Err(first_error.map_or(MalformedReason::NoJsonObject, MalformedReason::InvalidJson))
}

fn cards_array(value: &Value) -> Result<&[Value], MalformedReason> {
    value
        .get("cards")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or(MalformedReason::MissingCardsArray)
}

fn typed_cards(cards: &[Value]) -> Result<Vec<RawCard<'_>>, MalformedReason> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let id_ok = card.get("id").is_some_and(Value::is_number);
            let question = card.get("question").and_then(Value::as_str);
            let answer = card.get("answer").and_then(Value::as_str);
            match (id_ok, question, answer) {
                (true, Some(question), Some(answer)) => Ok(RawCard { question, answer }),
                _ => Err(MalformedReason::InvalidCardFormat { index }),
            }
        })
        .collect()
}

fn check_card_count(cards: &[RawCard<'_>]) -> Result<(), MalformedReason> {
    if cards.len() > MAX_CARDS {
        return Err(MalformedReason::TooManyCards {
            count: cards.len(),
            limit: MAX_CARDS,
        });
    }
    Ok(())
}

fn check_text_bounds(cards: &[RawCard<'_>]) -> Result<(), MalformedReason> {
    for (index, card) in cards.iter().enumerate() {
        for (field, text) in [
            (CardField::Question, card.question),
            (CardField::Answer, card.answer),
        ] {
            let text = text.trim();
            if text.is_empty() {
                return Err(MalformedReason::EmptyField { index, field });
            }
            if text.chars().count() > MAX_FIELD_CHARS {
                return Err(MalformedReason::FieldTooLong {
                    index,
                    field,
                    max: MAX_FIELD_CHARS,
                });
            }
        }
    }
    Ok(())
}
