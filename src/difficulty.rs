//! Difficulty configuration: a validated settings bundle plus named presets.

use crate::constants::{
    DEFAULT_CORRECT_POINTS, DEFAULT_DIFFICULTY_MAX, DEFAULT_DIFFICULTY_MIN, DEFAULT_HINT_PENALTY,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_HINTS, DEFAULT_SKIP_PENALTY, DEFAULT_WRONG_PENALTY,
    MAX_MAZE_DIM, MIN_MAZE_DIM,
};
use serde::{Deserialize, Serialize};

/// What to do with a door when the question source has nothing left to supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingQuestionPolicy {
    /// Build the door already open as a structural passage.
    OpenDoor,
    /// Refuse to build the maze at all.
    FailBuild,
}

/// Immutable difficulty configuration for a session.
///
/// Construct through [`DifficultySettings::builder`], which clamps
/// out-of-range inputs, or start from a [`DifficultyPreset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub rows: usize,
    pub cols: usize,
    /// Wrong answers allowed per door before it seals permanently.
    pub max_attempts_per_door: u32,
    /// Hint budget for the whole session.
    pub max_hints: u32,
    pub correct_points: i64,
    pub wrong_penalty: i64,
    pub hint_penalty: i64,
    pub skip_penalty: i64,
    pub allow_skipping: bool,
    /// Inclusive (min, max) difficulty rating requested from the question source.
    pub question_difficulty: (u32, u32),
    /// Play-time limit in seconds; `None` = untimed.
    pub time_limit_seconds: Option<u64>,
    pub missing_question: MissingQuestionPolicy,
}

impl DifficultySettings {
    pub fn builder() -> DifficultyBuilder {
        DifficultyBuilder::default()
    }
}

impl Default for DifficultySettings {
    fn default() -> Self {
        DifficultyBuilder::default().build()
    }
}

/// Builder for [`DifficultySettings`]. All clamping happens in [`build`](Self::build):
/// dimensions to [3, 20], negative point deltas to 0, difficulty range min to ≥ 1
/// and max to ≥ min, attempts to ≥ 1.
#[derive(Debug, Clone)]
pub struct DifficultyBuilder {
    rows: usize,
    cols: usize,
    max_attempts_per_door: u32,
    max_hints: u32,
    correct_points: i64,
    wrong_penalty: i64,
    hint_penalty: i64,
    skip_penalty: i64,
    allow_skipping: bool,
    question_difficulty: (u32, u32),
    time_limit_seconds: Option<u64>,
    missing_question: MissingQuestionPolicy,
}

impl Default for DifficultyBuilder {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            max_attempts_per_door: DEFAULT_MAX_ATTEMPTS,
            max_hints: DEFAULT_MAX_HINTS,
            correct_points: DEFAULT_CORRECT_POINTS,
            wrong_penalty: DEFAULT_WRONG_PENALTY,
            hint_penalty: DEFAULT_HINT_PENALTY,
            skip_penalty: DEFAULT_SKIP_PENALTY,
            allow_skipping: true,
            question_difficulty: (DEFAULT_DIFFICULTY_MIN, DEFAULT_DIFFICULTY_MAX),
            time_limit_seconds: None,
            missing_question: MissingQuestionPolicy::OpenDoor,
        }
    }
}

impl DifficultyBuilder {
    pub fn dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn max_attempts_per_door(mut self, attempts: u32) -> Self {
        self.max_attempts_per_door = attempts;
        self
    }

    pub fn max_hints(mut self, hints: u32) -> Self {
        self.max_hints = hints;
        self
    }

    pub fn correct_points(mut self, points: i64) -> Self {
        self.correct_points = points;
        self
    }

    pub fn wrong_penalty(mut self, penalty: i64) -> Self {
        self.wrong_penalty = penalty;
        self
    }

    pub fn hint_penalty(mut self, penalty: i64) -> Self {
        self.hint_penalty = penalty;
        self
    }

    pub fn skip_penalty(mut self, penalty: i64) -> Self {
        self.skip_penalty = penalty;
        self
    }

    pub fn allow_skipping(mut self, allowed: bool) -> Self {
        self.allow_skipping = allowed;
        self
    }

    pub fn question_difficulty(mut self, min: u32, max: u32) -> Self {
        self.question_difficulty = (min, max);
        self
    }

    pub fn time_limit_seconds(mut self, limit: Option<u64>) -> Self {
        self.time_limit_seconds = limit;
        self
    }

    pub fn missing_question(mut self, policy: MissingQuestionPolicy) -> Self {
        self.missing_question = policy;
        self
    }

    /// Clamp every field into its legal range and freeze the settings.
    pub fn build(self) -> DifficultySettings {
        let min = self.question_difficulty.0.max(1);
        let max = self.question_difficulty.1.max(min);
        DifficultySettings {
            rows: self.rows.clamp(MIN_MAZE_DIM, MAX_MAZE_DIM),
            cols: self.cols.clamp(MIN_MAZE_DIM, MAX_MAZE_DIM),
            max_attempts_per_door: self.max_attempts_per_door.max(1),
            max_hints: self.max_hints,
            correct_points: self.correct_points.max(0),
            wrong_penalty: self.wrong_penalty.max(0),
            hint_penalty: self.hint_penalty.max(0),
            skip_penalty: self.skip_penalty.max(0),
            allow_skipping: self.allow_skipping,
            question_difficulty: (min, max),
            time_limit_seconds: self.time_limit_seconds,
            missing_question: self.missing_question,
        }
    }
}

/// Named difficulty tiers with hand-tuned settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyPreset {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

impl DifficultyPreset {
    pub const ALL: [DifficultyPreset; 4] = [
        DifficultyPreset::Novice,
        DifficultyPreset::Apprentice,
        DifficultyPreset::Journeyman,
        DifficultyPreset::Master,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DifficultyPreset::Novice => "Novice",
            DifficultyPreset::Apprentice => "Apprentice",
            DifficultyPreset::Journeyman => "Journeyman",
            DifficultyPreset::Master => "Master",
        }
    }

    pub fn settings(&self) -> DifficultySettings {
        match self {
            DifficultyPreset::Novice => DifficultySettings::builder()
                .dimensions(4, 4)
                .max_attempts_per_door(3)
                .max_hints(5)
                .question_difficulty(1, 2)
                .build(),
            DifficultyPreset::Apprentice => DifficultySettings::builder()
                .dimensions(6, 6)
                .max_attempts_per_door(3)
                .max_hints(3)
                .question_difficulty(1, 3)
                .build(),
            DifficultyPreset::Journeyman => DifficultySettings::builder()
                .dimensions(8, 8)
                .max_attempts_per_door(2)
                .max_hints(2)
                .wrong_penalty(8)
                .question_difficulty(2, 4)
                .build(),
            DifficultyPreset::Master => DifficultySettings::builder()
                .dimensions(10, 10)
                .max_attempts_per_door(1)
                .max_hints(1)
                .wrong_penalty(10)
                .allow_skipping(false)
                .question_difficulty(3, 5)
                .time_limit_seconds(Some(900))
                .build(),
        }
    }
}
