//! Trivia questions and answer evaluation.

pub mod logic;
pub mod types;

pub use logic::{cheat_token, is_correct};
pub use types::{Answer, Question, QuestionDefError, QuestionKind};
