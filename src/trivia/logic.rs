//! Answer evaluation.
//!
//! Player input is always a raw string; each question kind normalizes and
//! judges it without ever raising an error. A malformed answer is simply a
//! wrong answer.

use super::types::{Answer, Question};

/// Lowercase + trim. All text comparison goes through this.
fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn parse_bool_token(raw: &str) -> Option<bool> {
    match normalize(raw).as_str() {
        "true" | "t" => Some(true),
        "false" | "f" => Some(false),
        _ => None,
    }
}

/// Judge a raw answer string against the question's correct answer.
pub fn is_correct(question: &Question, raw_answer: &str) -> bool {
    match &question.answer {
        Answer::TrueFalse { value } => parse_bool_token(raw_answer) == Some(*value),
        Answer::MultipleChoice { options, correct } => {
            // Out-of-range or non-numeric input resolves to incorrect
            match normalize(raw_answer).parse::<usize>() {
                Ok(index) => index < options.len() && index == *correct,
                Err(_) => false,
            }
        }
        Answer::FillInBlank { accepted } => normalize(raw_answer) == normalize(accepted),
    }
}

/// Terse representation of the correct answer for the cheat/reveal feature.
pub fn cheat_token(question: &Question) -> String {
    match &question.answer {
        Answer::TrueFalse { value } => if *value { "T" } else { "F" }.to_string(),
        Answer::MultipleChoice { options, correct } => options[*correct].clone(),
        Answer::FillInBlank { accepted } => accepted.clone(),
    }
}
