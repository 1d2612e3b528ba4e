//! Integration test: door gating economy.
//!
//! Attempt exhaustion, hint charging, and skipping, driven through the
//! session API.

use quizmaze::difficulty::DifficultySettings;
use quizmaze::maze::Direction;
use quizmaze::question_source::QuestionBank;
use quizmaze::session::{
    AnswerOutcome, BlockedReason, GamePhase, GameSession, MoveOutcome, SessionError,
};
use quizmaze::trivia::Question;

/// Predictable bank: the build rotates TF → MC → FIB, so door 0 (east of the
/// start room) always takes the first true/false question.
fn scripted_bank() -> QuestionBank {
    let mut questions = Vec::new();
    for i in 0..30 {
        questions.push(Question::true_false(format!("tf {i}"), true, 1).with_hint("say true"));
        questions.push(
            Question::multiple_choice(
                format!("mc {i}"),
                vec!["a".into(), "b".into(), "c".into()],
                1,
                1,
            )
            .unwrap()
            .with_hint("second option"),
        );
        questions.push(Question::fill_in_blank(format!("fib {i}"), "x", 1).with_hint("say x"));
    }
    QuestionBank::new(questions)
}

fn session_with(settings: DifficultySettings) -> GameSession {
    let mut bank = scripted_bank();
    let mut session = GameSession::new(settings, &mut bank).unwrap();
    assert!(session.start());
    session
}

#[test]
fn test_door_seals_after_exactly_n_wrong_answers() {
    let settings = DifficultySettings::builder()
        .dimensions(3, 3)
        .max_attempts_per_door(3)
        .question_difficulty(1, 1)
        .build();
    let mut session = session_with(settings);

    session.attempt_move(Direction::East).unwrap();

    // attempts 1 and 2: still answerable
    assert_eq!(
        session.submit_answer("false").unwrap(),
        AnswerOutcome::Incorrect { attempts_left: 2 }
    );
    assert_eq!(session.phase(), GamePhase::AwaitingAnswer);
    assert_eq!(
        session.submit_answer("false").unwrap(),
        AnswerOutcome::Incorrect { attempts_left: 1 }
    );
    assert_eq!(session.phase(), GamePhase::AwaitingAnswer);

    // attempt 3 seals the door and ends the challenge
    assert_eq!(
        session.submit_answer("false").unwrap(),
        AnswerOutcome::Incorrect { attempts_left: 0 }
    );
    assert_eq!(session.phase(), GamePhase::Playing);
    assert!(session.pending_challenge().is_none());

    // the sealed door now blocks without raising a question
    assert_eq!(
        session.attempt_move(Direction::East).unwrap(),
        MoveOutcome::Blocked { reason: BlockedReason::DoorSealed }
    );
}

#[test]
fn test_correct_answer_on_last_attempt_still_opens() {
    let settings = DifficultySettings::builder()
        .dimensions(3, 3)
        .max_attempts_per_door(2)
        .question_difficulty(1, 1)
        .build();
    let mut session = session_with(settings);

    session.attempt_move(Direction::East).unwrap();
    session.submit_answer("nope").unwrap();
    assert_eq!(session.submit_answer("true").unwrap(), AnswerOutcome::Correct);
    assert!(session.can_move(Direction::East));
}

#[test]
fn test_hint_budget_spans_doors_and_charges_once_each() {
    let settings = DifficultySettings::builder()
        .dimensions(3, 3)
        .max_hints(1)
        .hint_penalty(3)
        .question_difficulty(1, 1)
        .build();
    let mut session = session_with(settings);

    // first door: hint charged
    session.attempt_move(Direction::East).unwrap();
    assert_eq!(session.use_hint().as_deref(), Some("say true"));
    assert_eq!(session.player().score, -3);
    assert_eq!(session.hints_remaining(), 0);

    // asking again on the same question is free
    assert_eq!(session.use_hint().as_deref(), Some("say true"));
    assert_eq!(session.player().score, -3);

    // clear the door, walk to the next one: budget is spent
    session.submit_answer("true").unwrap();
    session.attempt_move(Direction::East).unwrap();
    session.attempt_move(Direction::East).unwrap();
    assert_eq!(session.phase(), GamePhase::AwaitingAnswer);
    assert!(session.use_hint().is_none());

    let view = session.pending_challenge().unwrap();
    assert!(!view.hint_available);
}

#[test]
fn test_skip_seals_the_door_without_opening_it() {
    let settings = DifficultySettings::builder()
        .dimensions(3, 3)
        .skip_penalty(8)
        .question_difficulty(1, 1)
        .build();
    let mut session = session_with(settings);

    session.attempt_move(Direction::East).unwrap();
    session.skip_question().unwrap();

    assert_eq!(session.phase(), GamePhase::Playing);
    assert_eq!(session.player().score, -8);
    assert!(!session.can_move(Direction::East));
    assert_eq!(
        session.attempt_move(Direction::East).unwrap(),
        MoveOutcome::Blocked { reason: BlockedReason::DoorSealed }
    );
}

#[test]
fn test_skip_rejected_when_disallowed() {
    let settings = DifficultySettings::builder()
        .dimensions(3, 3)
        .allow_skipping(false)
        .question_difficulty(1, 1)
        .build();
    let mut session = session_with(settings);

    session.attempt_move(Direction::East).unwrap();
    let view = session.pending_challenge().unwrap();
    assert!(!view.can_skip);
    assert_eq!(session.skip_question(), Err(SessionError::SkippingDisabled));

    // the question is still pending and answerable
    assert_eq!(session.phase(), GamePhase::AwaitingAnswer);
    assert_eq!(session.submit_answer("true").unwrap(), AnswerOutcome::Correct);
}

#[test]
fn test_skip_without_pending_question_is_rejected() {
    let settings = DifficultySettings::builder()
        .dimensions(3, 3)
        .question_difficulty(1, 1)
        .build();
    let mut session = session_with(settings);
    assert_eq!(session.skip_question(), Err(SessionError::NoPendingChallenge));
}

#[test]
fn test_multiple_choice_gating_end_to_end() {
    let settings = DifficultySettings::builder()
        .dimensions(3, 3)
        .question_difficulty(1, 1)
        .build();
    let mut session = session_with(settings);

    // south of the start room is the second door built: multiple choice
    session.attempt_move(Direction::South).unwrap();
    let view = session.pending_challenge().unwrap();
    let options = view.options.unwrap();
    assert_eq!(options.len(), 3);

    // out-of-range and junk input are wrong answers, not errors
    session.submit_answer("17").unwrap();
    session.submit_answer("banana").unwrap();
    assert_eq!(session.submit_answer("1").unwrap(), AnswerOutcome::Correct);
    assert!(session.can_move(Direction::South));
}
