//! Maze topology and traversal: the room/door grid, its construction, and
//! movement + reachability queries over it.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::{build_maze, MazeBuildError};
pub use logic::{
    attempt_move, can_move, has_path_to_exit, is_at_exit, reset_exploration, MoveAttempt,
};
pub use types::{Direction, Door, DoorId, DoorState, MazeError, Maze, Room};
