//! Maze traversal: movement validation and exit reachability.

use super::types::{Direction, DoorId, DoorState, Maze};
use std::collections::{HashSet, VecDeque};

/// Outcome of a single movement attempt. Only `Moved` mutates the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAttempt {
    /// Moved; the destination room is now current and marked visited.
    Moved { to: (usize, usize) },
    /// Boundary wall, no door in that direction.
    NoDoor,
    /// A locked door still gated by its question.
    DoorLocked(DoorId),
    /// A permanently blocked door.
    DoorSealed(DoorId),
}

/// True iff a door exists in that direction and is open.
pub fn can_move(maze: &Maze, direction: Direction) -> bool {
    match maze.door_in_direction(maze.player_position, direction) {
        Some(id) => maze.door(id).is_open(),
        None => false,
    }
}

/// Try to walk one step. Blocked attempts leave the maze untouched.
pub fn attempt_move(maze: &mut Maze, direction: Direction) -> MoveAttempt {
    let from = maze.player_position;
    let id = match maze.door_in_direction(from, direction) {
        Some(id) => id,
        None => return MoveAttempt::NoDoor,
    };
    match maze.door(id).state {
        DoorState::Locked => MoveAttempt::DoorLocked(id),
        DoorState::Sealed => MoveAttempt::DoorSealed(id),
        DoorState::Open => {
            let to = maze
                .door(id)
                .other_side(from)
                .expect("a room's own door has that room as an endpoint");
            maze.player_position = to;
            if let Some(room) = maze.room_mut(to.0, to.1) {
                room.visited = true;
            }
            MoveAttempt::Moved { to }
        }
    }
}

pub fn is_at_exit(maze: &Maze) -> bool {
    maze.player_position == maze.exit
}

/// BFS from the current room to the exit over doors that are not sealed.
///
/// A locked door still counts as passable here: it can be opened by a correct
/// answer, so only permanent blocks cut a path. This is the loss-detection
/// predicate and must be re-evaluated after every door state change.
pub fn has_path_to_exit(maze: &Maze) -> bool {
    let start = maze.player_position;
    if start == maze.exit {
        return true;
    }

    let mut visited: HashSet<(usize, usize)> = HashSet::new();
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(position) = queue.pop_front() {
        for direction in Direction::ALL {
            let id = match maze.door_in_direction(position, direction) {
                Some(id) => id,
                None => continue,
            };
            if maze.door(id).is_sealed() {
                continue;
            }
            let next = match maze.door(id).other_side(position) {
                Ok(next) => next,
                Err(_) => continue,
            };
            if next == maze.exit {
                return true;
            }
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    false
}

/// Clear visited flags and return the player to the start room. Door states
/// are untouched; a full reset rebuilds the maze at session level.
pub fn reset_exploration(maze: &mut Maze) {
    for room in &mut maze.rooms {
        room.visited = false;
    }
    let (row, col) = maze.start;
    maze.player_position = maze.start;
    if let Some(room) = maze.room_mut(row, col) {
        room.visited = true;
    }
}
