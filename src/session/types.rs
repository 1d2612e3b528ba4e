//! Session-level types: phases, operation outcomes, events, and errors.

use crate::maze::types::{Direction, DoorId};
use crate::trivia::types::QuestionKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The session phase machine. Transitions happen only inside
/// [`GameSession`](crate::session::GameSession) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    MainMenu,
    Playing,
    Paused,
    /// A move hit a locked door; its question must be answered, skipped, or
    /// failed out before anything else happens.
    AwaitingAnswer,
    GameOver,
    Victory,
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::MainMenu => "main menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::AwaitingAnswer => "awaiting answer",
            GamePhase::GameOver => "game over",
            GamePhase::Victory => "victory",
        }
    }

    /// Terminal phases never transition again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost(LossReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// Every remaining route to the exit is permanently blocked.
    NoPathToExit,
    /// The configured play-time limit ran out.
    TimeExpired,
}

/// Final scoreboard recorded at the terminal transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub final_score: i64,
    pub questions_answered: u32,
    pub last_position: (usize, usize),
    pub play_time_seconds: u64,
}

/// What sealed a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SealCause {
    AttemptsExhausted,
    Skipped,
}

/// Why a move attempt did not advance the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockedReason {
    /// Boundary wall, no door in that direction.
    NoDoor,
    /// Permanently blocked door.
    DoorSealed,
}

/// The pending question as shown to the player: everything needed to render
/// the challenge, nothing that gives the answer away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeView {
    pub door: DoorId,
    pub prompt: String,
    pub kind: QuestionKind,
    /// Present for multiple-choice questions.
    pub options: Option<Vec<String>>,
    pub attempts_left: u32,
    pub hint_available: bool,
    pub can_skip: bool,
}

/// Result of [`GameSession::attempt_move`](crate::session::GameSession::attempt_move).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved { to: (usize, usize) },
    /// Moved onto the exit room; the session is now won.
    ReachedExit,
    Blocked { reason: BlockedReason },
    /// A locked door raised its question; the session is awaiting an answer.
    ChallengeIssued(ChallengeView),
}

/// Result of [`GameSession::submit_answer`](crate::session::GameSession::submit_answer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    /// Wrong answer; 0 attempts left means the door just sealed.
    Incorrect { attempts_left: u32 },
}

/// Recoverable operation rejections. None of these disturb session state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("operation not valid while the session is in the {0} phase")]
    NotPlaying(GamePhase),
    #[error("a question is pending; answer or skip it first")]
    AnswerPending,
    #[error("no question is pending")]
    NoPendingChallenge,
    #[error("skipping questions is disabled by the difficulty settings")]
    SkippingDisabled,
    /// Data-integrity fault: a locked door with no attached question. The
    /// engine neither opens nor walls it; the caller decides remediation.
    #[error("locked door at ({0}, {1}) has no question attached")]
    MissingQuestion(usize, usize),
}

/// Events produced by session operations, drained by the presentation layer.
///
/// Each variant carries its data plus a preformatted human-readable message
/// so a thin UI can simply log them in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    // ── Phase ───────────────────────────────────────────────────
    PhaseChanged {
        from: GamePhase,
        to: GamePhase,
    },

    // ── Movement ────────────────────────────────────────────────
    MoveSucceeded {
        to: (usize, usize),
        message: String,
    },
    MoveBlocked {
        direction: Direction,
        reason: BlockedReason,
        message: String,
    },
    /// A locked door raised its question.
    AnswerPending {
        door: DoorId,
        direction: Direction,
        attempts_left: u32,
        message: String,
    },

    // ── Doors ───────────────────────────────────────────────────
    DoorOpened {
        door: DoorId,
        message: String,
    },
    DoorSealed {
        door: DoorId,
        cause: SealCause,
        message: String,
    },

    // ── Hint / skip economy ─────────────────────────────────────
    HintGranted {
        hint: String,
        hints_remaining: u32,
        message: String,
    },
    QuestionSkipped {
        door: DoorId,
        message: String,
    },

    // ── Terminal ────────────────────────────────────────────────
    SessionWon {
        final_score: i64,
        message: String,
    },
    SessionLost {
        reason: LossReason,
        final_score: i64,
        message: String,
    },
}
