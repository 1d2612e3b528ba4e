//! The game session: one run of the trivia maze from main menu to a
//! terminal phase.
//!
//! Every operation is a discrete synchronous call. State changes happen only
//! here; the maze, trivia, and progression modules stay policy-free. Each
//! operation appends [`GameEvent`]s to an internal buffer that the
//! presentation layer drains and renders in order.

use super::types::{
    AnswerOutcome, BlockedReason, ChallengeView, GameEvent, GameOutcome, GamePhase, GameSummary,
    LossReason, MoveOutcome, SealCause, SessionError,
};
use crate::difficulty::DifficultySettings;
use crate::maze::generation::{build_maze, MazeBuildError};
use crate::maze::logic::{self as maze_logic, MoveAttempt};
use crate::maze::types::{Direction, DoorId, Maze};
use crate::player::{Player, PlayerSnapshot};
use crate::progression::ProgressionRules;
use crate::question_source::QuestionSource;
use crate::trivia::logic::{cheat_token, is_correct};
use crate::trivia::types::Answer;
use uuid::Uuid;

/// Coordinates maze, player, trivia evaluation, and scoring for one game.
#[derive(Debug)]
pub struct GameSession {
    /// Stable id for logs and external bookkeeping.
    pub session_id: String,
    settings: DifficultySettings,
    maze: Maze,
    player: Player,
    rules: ProgressionRules,
    phase: GamePhase,
    pending_door: Option<DoorId>,
    play_time_seconds: f64,
    events: Vec<GameEvent>,
    summary: Option<GameSummary>,
}

impl GameSession {
    /// Build a fresh session in the main-menu phase. The question source is
    /// only consulted here and in [`restart`](Self::restart); a running
    /// session never performs external calls.
    pub fn new(
        settings: DifficultySettings,
        source: &mut dyn QuestionSource,
    ) -> Result<Self, MazeBuildError> {
        let maze = build_maze(settings.rows, settings.cols, &settings, source)?;
        let rules = ProgressionRules::new(&settings);
        Ok(Self {
            session_id: Uuid::new_v4().to_string(),
            settings,
            maze,
            player: Player::new(),
            rules,
            phase: GamePhase::MainMenu,
            pending_door: None,
            play_time_seconds: 0.0,
            events: Vec::new(),
            summary: None,
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn settings(&self) -> &DifficultySettings {
        &self.settings
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Mutable topology access for editors and tests. Sessions keep no
    /// derived caches, so direct edits cannot go stale; loss detection
    /// only runs inside session operations.
    pub fn maze_mut(&mut self) -> &mut Maze {
        &mut self.maze
    }

    pub fn player(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.maze.player_position,
            score: self.player.score,
            questions_answered: self.player.questions_answered,
        }
    }

    /// Lifetime counters beyond the snapshot (hints used, doors opened).
    pub fn stats(&self) -> &Player {
        &self.player
    }

    pub fn hints_remaining(&self) -> u32 {
        self.rules.hints_remaining
    }

    pub fn play_time_seconds(&self) -> u64 {
        self.play_time_seconds as u64
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        maze_logic::can_move(&self.maze, direction)
    }

    pub fn is_at_exit(&self) -> bool {
        maze_logic::is_at_exit(&self.maze)
    }

    pub fn has_path_to_exit(&self) -> bool {
        maze_logic::has_path_to_exit(&self.maze)
    }

    /// The pending question, if the session is awaiting an answer.
    pub fn pending_challenge(&self) -> Option<ChallengeView> {
        self.challenge_view(self.pending_door?)
    }

    /// Terse reveal of the pending question's correct answer. Always
    /// available while a question is pending, whatever the attempt count.
    pub fn cheat_token(&self) -> Option<String> {
        let door = self.maze.door(self.pending_door?);
        door.question.as_ref().map(cheat_token)
    }

    /// Final scoreboard; `Some` once the session reaches a terminal phase.
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    /// Take all events accumulated since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Operations ──────────────────────────────────────────────

    /// Leave the main menu and begin play. Returns false from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::MainMenu {
            return false;
        }
        self.set_phase(GamePhase::Playing);
        true
    }

    /// Try to walk one step. A locked, questioned door switches the session
    /// to `AwaitingAnswer` and surfaces the challenge; landing on the exit
    /// wins immediately.
    pub fn attempt_move(&mut self, direction: Direction) -> Result<MoveOutcome, SessionError> {
        match self.phase {
            GamePhase::Playing => {}
            GamePhase::AwaitingAnswer => return Err(SessionError::AnswerPending),
            other => return Err(SessionError::NotPlaying(other)),
        }

        match maze_logic::attempt_move(&mut self.maze, direction) {
            MoveAttempt::Moved { to } => {
                self.events.push(GameEvent::MoveSucceeded {
                    to,
                    message: format!("You step into the room at ({}, {}).", to.0, to.1),
                });
                if maze_logic::is_at_exit(&self.maze) {
                    self.finish(GameOutcome::Won);
                    Ok(MoveOutcome::ReachedExit)
                } else {
                    Ok(MoveOutcome::Moved { to })
                }
            }
            MoveAttempt::NoDoor => {
                self.events.push(GameEvent::MoveBlocked {
                    direction,
                    reason: BlockedReason::NoDoor,
                    message: format!("A solid wall blocks the way {}.", direction.name()),
                });
                Ok(MoveOutcome::Blocked {
                    reason: BlockedReason::NoDoor,
                })
            }
            MoveAttempt::DoorSealed(_) => {
                self.events.push(GameEvent::MoveBlocked {
                    direction,
                    reason: BlockedReason::DoorSealed,
                    message: format!("The {} door is sealed shut.", direction.name()),
                });
                Ok(MoveOutcome::Blocked {
                    reason: BlockedReason::DoorSealed,
                })
            }
            MoveAttempt::DoorLocked(id) => {
                let door = self.maze.door(id);
                if door.question.is_none() {
                    // Corrupted topology: questionless doors are built open
                    let (row, col) = door
                        .other_side(self.maze.player_position)
                        .unwrap_or(self.maze.player_position);
                    return Err(SessionError::MissingQuestion(row, col));
                }
                let attempts_left = door.attempts_left;
                self.pending_door = Some(id);
                self.set_phase(GamePhase::AwaitingAnswer);
                self.events.push(GameEvent::AnswerPending {
                    door: id,
                    direction,
                    attempts_left,
                    message: format!(
                        "A locked door bars the way {}: {} attempt{} left.",
                        direction.name(),
                        attempts_left,
                        if attempts_left == 1 { "" } else { "s" }
                    ),
                });
                let view = self
                    .challenge_view(id)
                    .expect("pending door carries a question");
                Ok(MoveOutcome::ChallengeIssued(view))
            }
        }
    }

    /// Judge a raw answer against the pending question.
    pub fn submit_answer(&mut self, raw_answer: &str) -> Result<AnswerOutcome, SessionError> {
        let door_id = self.pending_door.ok_or(SessionError::NoPendingChallenge)?;
        let question = match self.maze.door(door_id).question.clone() {
            Some(question) => question,
            None => {
                let (row, col) = self.maze.door(door_id).rooms[1];
                return Err(SessionError::MissingQuestion(row, col));
            }
        };

        if is_correct(&question, raw_answer) {
            self.maze.door_mut(door_id).open();
            self.rules.award_correct(&mut self.player);
            self.player.doors_opened += 1;
            self.pending_door = None;
            self.events.push(GameEvent::DoorOpened {
                door: door_id,
                message: "Correct! The door swings open.".to_string(),
            });
            self.set_phase(GamePhase::Playing);
            // reachability is rechecked after every door state change
            self.check_loss();
            return Ok(AnswerOutcome::Correct);
        }

        let attempts_left = self.maze.door_mut(door_id).record_wrong_answer();
        self.rules.penalize_wrong(&mut self.player);

        if attempts_left == 0 {
            self.events.push(GameEvent::DoorSealed {
                door: door_id,
                cause: SealCause::AttemptsExhausted,
                message: "Out of attempts! The door seals permanently.".to_string(),
            });
            self.pending_door = None;
            self.check_loss();
            if !self.phase.is_terminal() {
                self.set_phase(GamePhase::Playing);
            }
        }

        Ok(AnswerOutcome::Incorrect { attempts_left })
    }

    /// Reveal the pending question's hint, charging the hint budget and
    /// penalty once per door. Returns `None` when no question is pending,
    /// the question has no hint, or the budget is spent.
    pub fn use_hint(&mut self) -> Option<String> {
        let door_id = self.pending_door?;
        let hint = self.maze.door(door_id).question.as_ref()?.hint.clone()?;

        if self.maze.door(door_id).hint_used {
            // Already charged for this door's question
            return Some(hint);
        }
        if !self.rules.hint_available() {
            return None;
        }

        self.rules.charge_hint(&mut self.player);
        self.maze.door_mut(door_id).hint_used = true;
        self.events.push(GameEvent::HintGranted {
            hint: hint.clone(),
            hints_remaining: self.rules.hints_remaining,
            message: format!("Hint: {hint}"),
        });
        Some(hint)
    }

    /// Walk away from the pending question. The door seals permanently
    /// (skipping never opens a door) and the skip penalty applies.
    pub fn skip_question(&mut self) -> Result<(), SessionError> {
        let door_id = self.pending_door.ok_or(SessionError::NoPendingChallenge)?;
        if !self.rules.can_skip() {
            return Err(SessionError::SkippingDisabled);
        }

        self.rules.charge_skip(&mut self.player);
        self.maze.door_mut(door_id).seal();
        self.events.push(GameEvent::QuestionSkipped {
            door: door_id,
            message: "You skip the question.".to_string(),
        });
        self.events.push(GameEvent::DoorSealed {
            door: door_id,
            cause: SealCause::Skipped,
            message: "The door seals behind its unanswered riddle.".to_string(),
        });
        self.pending_door = None;
        self.check_loss();
        if !self.phase.is_terminal() {
            self.set_phase(GamePhase::Playing);
        }
        Ok(())
    }

    /// Playing → Paused. Returns false from any other phase.
    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.set_phase(GamePhase::Paused);
        true
    }

    /// Paused → Playing. Returns false from any other phase.
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.set_phase(GamePhase::Playing);
        true
    }

    /// Accumulate play time. Only Playing and AwaitingAnswer count, so a
    /// paused session's clock stands still while the caller keeps ticking.
    /// Crossing the configured time limit ends the session.
    pub fn advance_clock(&mut self, delta_seconds: f64) {
        if !matches!(self.phase, GamePhase::Playing | GamePhase::AwaitingAnswer) {
            return;
        }
        self.play_time_seconds += delta_seconds.max(0.0);
        if let Some(limit) = self.settings.time_limit_seconds {
            if self.play_time_seconds >= limit as f64 {
                self.finish(GameOutcome::Lost(LossReason::TimeExpired));
            }
        }
    }

    /// Full reset: rebuild the maze from the source, zero the player and
    /// budgets, and go straight to Playing.
    pub fn restart(&mut self, source: &mut dyn QuestionSource) -> Result<(), MazeBuildError> {
        self.maze = build_maze(self.settings.rows, self.settings.cols, &self.settings, source)?;
        self.player.reset();
        self.rules.reset();
        self.pending_door = None;
        self.play_time_seconds = 0.0;
        self.summary = None;
        self.set_phase(GamePhase::Playing);
        Ok(())
    }

    // ── Internals ───────────────────────────────────────────────

    fn challenge_view(&self, id: DoorId) -> Option<ChallengeView> {
        let door = self.maze.door(id);
        let question = door.question.as_ref()?;
        let options = match &question.answer {
            Answer::MultipleChoice { options, .. } => Some(options.clone()),
            _ => None,
        };
        Some(ChallengeView {
            door: id,
            prompt: question.prompt.clone(),
            kind: question.kind(),
            options,
            attempts_left: door.attempts_left,
            hint_available: question.hint.is_some()
                && (door.hint_used || self.rules.hint_available()),
            can_skip: self.rules.can_skip(),
        })
    }

    fn set_phase(&mut self, to: GamePhase) {
        if self.phase == to {
            return;
        }
        let from = self.phase;
        self.phase = to;
        tracing::debug!(session = %self.session_id, %from, %to, "phase change");
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Loss check after a door state change: if the exit is no longer
    /// reachable and the player is not standing on it, the run is over.
    fn check_loss(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        if !maze_logic::is_at_exit(&self.maze) && !maze_logic::has_path_to_exit(&self.maze) {
            self.finish(GameOutcome::Lost(LossReason::NoPathToExit));
        }
    }

    /// Latch a terminal phase exactly once and record the summary.
    fn finish(&mut self, outcome: GameOutcome) {
        if self.phase.is_terminal() {
            return;
        }
        self.pending_door = None;
        let final_score = self.player.score;
        self.summary = Some(GameSummary {
            outcome,
            final_score,
            questions_answered: self.player.questions_answered,
            last_position: self.maze.player_position,
            play_time_seconds: self.play_time_seconds as u64,
        });
        match outcome {
            GameOutcome::Won => {
                self.events.push(GameEvent::SessionWon {
                    final_score,
                    message: format!("You reached the exit! Final score: {final_score}."),
                });
                self.set_phase(GamePhase::Victory);
            }
            GameOutcome::Lost(reason) => {
                let message = match reason {
                    LossReason::NoPathToExit => {
                        format!("No route to the exit remains. Final score: {final_score}.")
                    }
                    LossReason::TimeExpired => {
                        format!("Time is up! Final score: {final_score}.")
                    }
                };
                self.events.push(GameEvent::SessionLost {
                    reason,
                    final_score,
                    message,
                });
                self.set_phase(GamePhase::GameOver);
            }
        }
    }
}
