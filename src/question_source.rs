//! Question supply: the narrow interface the engine consumes questions
//! through, plus an in-memory bank implementation.
//!
//! The engine never reaches into storage on its own; a session is handed a
//! [`QuestionSource`] at construction so tests can script the supply exactly.

use crate::trivia::types::{Question, QuestionDefError, QuestionKind};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External question supplier. Returning `None` means "nothing available for
/// that kind/range": a data-unavailable condition, never a crash.
pub trait QuestionSource {
    fn next(&mut self, kind: QuestionKind, difficulty: (u32, u32)) -> Option<Question>;
}

/// Errors loading a bank from JSON.
#[derive(Debug, Error)]
pub enum QuestionBankError {
    #[error("failed to parse question bank JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid question at index {index} ({prompt:?}): {source}")]
    InvalidQuestion {
        index: usize,
        prompt: String,
        source: QuestionDefError,
    },
}

/// Vec-backed question bank. Draws are sequential (first match wins) so a
/// hand-ordered bank behaves deterministically; call [`shuffle`](Self::shuffle)
/// for variety.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse and validate a JSON array of questions.
    pub fn from_json(json: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        for (index, question) in questions.iter().enumerate() {
            question
                .validate()
                .map_err(|source| QuestionBankError::InvalidQuestion {
                    index,
                    prompt: question.prompt.clone(),
                    source,
                })?;
        }
        Ok(Self { questions })
    }

    /// Small compiled-in starter set so demos and the simulator run without
    /// any external data.
    pub fn builtin() -> Self {
        let mc = |prompt: &str, options: &[&str], correct: usize, difficulty: u32| {
            Question::multiple_choice(
                prompt,
                options.iter().map(|s| s.to_string()).collect(),
                correct,
                difficulty,
            )
            .expect("builtin bank is statically valid")
        };

        Self::new(vec![
            Question::true_false("The sun is a star.", true, 1),
            Question::true_false("Sound travels faster than light.", false, 1)
                .with_hint("Think about thunderstorms."),
            Question::true_false("Octopuses have three hearts.", true, 2),
            Question::true_false("The Great Wall of China is visible from the Moon.", false, 3)
                .with_hint("Astronauts have weighed in on this one."),
            Question::true_false("Venus is the hottest planet in the solar system.", true, 4),
            mc("Which planet is largest?", &["Mars", "Jupiter", "Venus", "Mercury"], 1, 1),
            mc("How many continents are there?", &["5", "6", "7", "8"], 2, 1),
            mc(
                "Which metal is liquid at room temperature?",
                &["Iron", "Mercury", "Tin", "Zinc"],
                1,
                2,
            ),
            mc(
                "What is the smallest prime number?",
                &["0", "1", "2", "3"],
                2,
                3,
            ),
            mc(
                "Which ocean is the deepest?",
                &["Atlantic", "Indian", "Arctic", "Pacific"],
                3,
                4,
            ),
            Question::fill_in_blank("What is the capital of France?", "Paris", 1),
            Question::fill_in_blank("How many sides does a hexagon have?", "6", 1),
            Question::fill_in_blank("What gas do plants absorb from the air?", "carbon dioxide", 2)
                .with_hint("You exhale it."),
            Question::fill_in_blank("What is the chemical symbol for gold?", "Au", 3)
                .with_hint("From the Latin aurum."),
            Question::fill_in_blank("In what year did the Apollo 11 moon landing happen?", "1969", 4),
        ])
    }

    /// Shuffle the draw order.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl QuestionSource for QuestionBank {
    fn next(&mut self, kind: QuestionKind, difficulty: (u32, u32)) -> Option<Question> {
        let (min, max) = difficulty;
        let index = self
            .questions
            .iter()
            .position(|q| q.kind() == kind && q.difficulty >= min && q.difficulty <= max)?;
        Some(self.questions.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question::true_false("easy tf", true, 1),
            Question::true_false("hard tf", false, 5),
            Question::fill_in_blank("easy fib", "x", 2),
        ])
    }

    #[test]
    fn test_draws_filter_by_kind_and_range() {
        let mut bank = sample_bank();
        let q = bank.next(QuestionKind::TrueFalse, (1, 3)).unwrap();
        assert_eq!(q.prompt, "easy tf");

        // the hard one is out of range
        assert!(bank.next(QuestionKind::TrueFalse, (1, 3)).is_none());
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_draws_are_consumed() {
        let mut bank = sample_bank();
        assert!(bank.next(QuestionKind::FillInBlank, (1, 5)).is_some());
        assert!(bank.next(QuestionKind::FillInBlank, (1, 5)).is_none());
    }

    #[test]
    fn test_missing_kind_returns_none() {
        let mut bank = sample_bank();
        assert!(bank.next(QuestionKind::MultipleChoice, (1, 5)).is_none());
    }

    #[test]
    fn test_builtin_bank_covers_every_kind() {
        let mut bank = QuestionBank::builtin();
        assert!(!bank.is_empty());
        for kind in QuestionKind::ALL {
            assert!(
                bank.next(kind, (1, 5)).is_some(),
                "builtin bank missing {}",
                kind.name()
            );
        }
    }

    #[test]
    fn test_from_json_valid() {
        let json = r#"[
            {"prompt": "The sun is a star.", "difficulty": 1, "kind": "true_false", "value": true},
            {"prompt": "Pick b", "difficulty": 2, "kind": "multiple_choice",
             "options": ["a", "b"], "correct": 1, "hint": "second one"}
        ]"#;
        let bank = QuestionBank::from_json(json).unwrap();
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_bad_correct_index() {
        let json = r#"[
            {"prompt": "Broken", "difficulty": 1, "kind": "multiple_choice",
             "options": ["a", "b"], "correct": 7}
        ]"#;
        let err = QuestionBank::from_json(json).unwrap_err();
        assert!(matches!(err, QuestionBankError::InvalidQuestion { index: 0, .. }));
    }

    #[test]
    fn test_shuffle_keeps_contents() {
        use rand::SeedableRng;
        let mut bank = QuestionBank::builtin();
        let before = bank.len();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        bank.shuffle(&mut rng);
        assert_eq!(bank.len(), before);
    }
}
