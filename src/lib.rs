//! Quizmaze: a trivia-gated maze game engine.
//!
//! The player walks a grid of rooms whose connecting doors are locked behind
//! trivia questions: a correct answer opens a door permanently, running out
//! of attempts (or skipping) seals it permanently, and the run ends in
//! victory at the exit room or defeat when no route to the exit survives.
//!
//! This crate is the engine only: movement validation, door/question
//! gating, the hint/skip/penalty economy, exit reachability, and the session
//! phase machine. Rendering, input wiring, and question storage live behind
//! narrow seams. A frontend drains [`session::GameEvent`]s, and questions
//! arrive through the [`question_source::QuestionSource`] trait.

pub mod build_info;
pub mod constants;
pub mod difficulty;
pub mod maze;
pub mod player;
pub mod progression;
pub mod question_source;
pub mod session;
pub mod simulator;
pub mod trivia;
