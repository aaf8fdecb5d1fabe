//! Test helper factories
//!
//! Convenience constructors for users, sample notes and canned LLM replies.
#![allow(dead_code)]

use crate::notes::User;
use serde_json::json;

/// Sample study notes (Talmud, tractate Brachos, daf 2).
pub const BRACHOS_NOTES: &str = "Brachos Summaries:
ב.
Mishna:
•\tBegin reading ק״ש של ערבית when the Kohanim begin eating trumah
o\tGm' explains this is צאת
•\t3 opinions of until when:
o\tר אליאזר: עד סוף האשמורה הראשונה
o\tחכמים: חצות
o\tרבן גמליאל: עמוד השחר
•\tWe pasken like the chachamim, but still say it after chatzos if forgot
";

/// Create a user.
pub fn test_user(id: u64, username: &str) -> User {
    User::new(id, username)
}

/// A well-formed LLM reply with `count` cards `Q1/A1 .. Qn/An`.
pub fn cards_json(count: usize) -> String {
    let cards: Vec<_> = (1..=count)
        .map(|i| json!({"id": i, "question": format!("Q{i}"), "answer": format!("A{i}")}))
        .collect();
    json!({ "cards": cards }).to_string()
}
