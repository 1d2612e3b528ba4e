//! Trivia question data structures.
//!
//! A question is one immutable prompt plus a tagged [`Answer`] variant; the
//! three kinds share a single evaluation contract in [`crate::trivia::logic`]
//! rather than an open-ended trait hierarchy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three supported question kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    TrueFalse,
    MultipleChoice,
    FillInBlank,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 3] = [
        QuestionKind::TrueFalse,
        QuestionKind::MultipleChoice,
        QuestionKind::FillInBlank,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::TrueFalse => "true/false",
            QuestionKind::MultipleChoice => "multiple choice",
            QuestionKind::FillInBlank => "fill in the blank",
        }
    }
}

/// Correct-answer definition, tagged by question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    TrueFalse { value: bool },
    MultipleChoice { options: Vec<String>, correct: usize },
    FillInBlank { accepted: String },
}

/// A single trivia question. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    #[serde(default)]
    pub hint: Option<String>,
    /// Difficulty rating, 1 = easiest. Used for source range filtering.
    pub difficulty: u32,
    #[serde(flatten)]
    pub answer: Answer,
}

/// Structural defects in a question definition. These fail fast at
/// construction (or bank-load) time, never during play.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionDefError {
    #[error("multiple-choice question needs at least 2 options, got {0}")]
    TooFewOptions(usize),
    #[error("correct option index {correct} out of range for {options} options")]
    CorrectIndexOutOfRange { correct: usize, options: usize },
}

impl Question {
    pub fn true_false(prompt: impl Into<String>, value: bool, difficulty: u32) -> Self {
        Self {
            prompt: prompt.into(),
            hint: None,
            difficulty,
            answer: Answer::TrueFalse { value },
        }
    }

    pub fn multiple_choice(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct: usize,
        difficulty: u32,
    ) -> Result<Self, QuestionDefError> {
        let question = Self {
            prompt: prompt.into(),
            hint: None,
            difficulty,
            answer: Answer::MultipleChoice { options, correct },
        };
        question.validate()?;
        Ok(question)
    }

    pub fn fill_in_blank(
        prompt: impl Into<String>,
        accepted: impl Into<String>,
        difficulty: u32,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            hint: None,
            difficulty,
            answer: Answer::FillInBlank {
                accepted: accepted.into(),
            },
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn kind(&self) -> QuestionKind {
        match self.answer {
            Answer::TrueFalse { .. } => QuestionKind::TrueFalse,
            Answer::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            Answer::FillInBlank { .. } => QuestionKind::FillInBlank,
        }
    }

    /// Re-check structural invariants. Deserialized questions must pass
    /// through this before use.
    pub fn validate(&self) -> Result<(), QuestionDefError> {
        if let Answer::MultipleChoice { options, correct } = &self.answer {
            if options.len() < 2 {
                return Err(QuestionDefError::TooFewOptions(options.len()));
            }
            if *correct >= options.len() {
                return Err(QuestionDefError::CorrectIndexOutOfRange {
                    correct: *correct,
                    options: options.len(),
                });
            }
        }
        Ok(())
    }
}
