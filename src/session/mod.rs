//! Game session orchestration: the phase machine that ties maze, trivia,
//! and progression together and feeds events to the presentation layer.

pub mod logic;
pub mod types;

pub use logic::GameSession;
pub use types::{
    AnswerOutcome, BlockedReason, ChallengeView, GameEvent, GameOutcome, GamePhase, GameSummary,
    LossReason, MoveOutcome, SealCause, SessionError,
};
