//! Maze data structures.
//!
//! Rooms and doors live in index-backed arenas on [`Maze`]: rooms are
//! addressed by `(row, col)` and doors by [`DoorId`], so the cyclic
//! room/door relationship needs no shared ownership. A room stores door
//! ids, a door stores the coordinates of its two endpoints.

use crate::trivia::types::Question;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four cardinal movement directions. Row 0 is the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Slot index into a room's door array.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// (row delta, col delta) of one step this way.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

/// Index of a door in the maze's door arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoorId(pub usize);

/// Door lifecycle. Both transitions out of `Locked` are permanent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoorState {
    /// Gated by its question; answerable while attempts remain.
    Locked,
    /// Freely traversable in both directions.
    Open,
    /// Permanently impassable (attempts exhausted or skipped).
    Sealed,
}

/// Structural maze errors. These indicate caller bugs or corrupted topology,
/// not gameplay outcomes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("room ({0}, {1}) is not an endpoint of this door")]
    NotConnected(usize, usize),
}

/// A door between two adjacent rooms, optionally gated by a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    /// The two endpoint room coordinates.
    pub rooms: [(usize, usize); 2],
    /// Absent on structural doors, which are never locked.
    pub question: Option<Question>,
    pub state: DoorState,
    pub attempts_left: u32,
    /// Hint already charged for this door's question.
    pub hint_used: bool,
}

impl Door {
    /// A door starts locked when it carries a question and open otherwise.
    pub fn new(
        a: (usize, usize),
        b: (usize, usize),
        question: Option<Question>,
        max_attempts: u32,
    ) -> Self {
        let state = if question.is_some() {
            DoorState::Locked
        } else {
            DoorState::Open
        };
        Self {
            rooms: [a, b],
            question,
            state,
            attempts_left: max_attempts,
            hint_used: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    pub fn is_sealed(&self) -> bool {
        self.state == DoorState::Sealed
    }

    pub fn is_locked(&self) -> bool {
        self.state == DoorState::Locked
    }

    /// Unlock permanently. Idempotent; a sealed door stays sealed.
    pub fn open(&mut self) {
        if self.state == DoorState::Locked {
            self.state = DoorState::Open;
        }
    }

    /// Block permanently. Idempotent; an open door stays open.
    pub fn seal(&mut self) {
        if self.state == DoorState::Locked {
            self.state = DoorState::Sealed;
        }
    }

    /// The endpoint opposite `from`. Errors if `from` is neither endpoint;
    /// doors are symmetric but only between their own two rooms.
    pub fn other_side(&self, from: (usize, usize)) -> Result<(usize, usize), MazeError> {
        if from == self.rooms[0] {
            Ok(self.rooms[1])
        } else if from == self.rooms[1] {
            Ok(self.rooms[0])
        } else {
            Err(MazeError::NotConnected(from.0, from.1))
        }
    }

    /// Consume one attempt; seals the door when the last one goes.
    /// Returns the attempts remaining afterwards.
    pub fn record_wrong_answer(&mut self) -> u32 {
        self.attempts_left = self.attempts_left.saturating_sub(1);
        if self.attempts_left == 0 {
            self.seal();
        }
        self.attempts_left
    }
}

/// A single room in the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// (row, col) grid position.
    pub position: (usize, usize),
    pub visited: bool,
    /// Door per direction, indexed by [`Direction::index`]; `None` = boundary wall.
    pub doors: [Option<DoorId>; 4],
}

impl Room {
    pub fn new(position: (usize, usize)) -> Self {
        Self {
            position,
            visited: false,
            doors: [None; 4],
        }
    }
}

/// The full maze: room grid, door arena, and player position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    pub rows: usize,
    pub cols: usize,
    /// Row-major room arena, `rows * cols` entries.
    pub rooms: Vec<Room>,
    pub doors: Vec<Door>,
    pub player_position: (usize, usize),
    pub start: (usize, usize),
    pub exit: (usize, usize),
}

impl Maze {
    /// An empty grid of unconnected rooms. [`crate::maze::generation`] wires
    /// the doors in.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut rooms = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                rooms.push(Room::new((row, col)));
            }
        }
        Self {
            rows,
            cols,
            rooms,
            doors: Vec::new(),
            player_position: (0, 0),
            start: (0, 0),
            exit: (rows.saturating_sub(1), cols.saturating_sub(1)),
        }
    }

    fn room_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn room(&self, row: usize, col: usize) -> Option<&Room> {
        let index = self.room_index(row, col)?;
        self.rooms.get(index)
    }

    pub fn room_mut(&mut self, row: usize, col: usize) -> Option<&mut Room> {
        let index = self.room_index(row, col)?;
        self.rooms.get_mut(index)
    }

    pub fn current_room(&self) -> &Room {
        let (row, col) = self.player_position;
        self.room(row, col)
            .expect("player position stays inside the grid")
    }

    /// Door lookup by id. Ids come from this maze's own rooms, so a missing
    /// entry is a caller bug and panics.
    pub fn door(&self, id: DoorId) -> &Door {
        &self.doors[id.0]
    }

    pub fn door_mut(&mut self, id: DoorId) -> &mut Door {
        &mut self.doors[id.0]
    }

    /// The door leaving `position` in `direction`, if any.
    pub fn door_in_direction(
        &self,
        position: (usize, usize),
        direction: Direction,
    ) -> Option<DoorId> {
        self.room(position.0, position.1)?.doors[direction.index()]
    }

    /// The adjacent coordinate one step away, bounds-checked; ignores doors.
    pub fn neighbor(
        &self,
        position: (usize, usize),
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (d_row, d_col) = direction.offset();
        let row = position.0 as i32 + d_row;
        let col = position.1 as i32 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        self.room_index(row, col).map(|_| (row, col))
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Doors built without a question (and therefore open from the start).
    pub fn structural_door_count(&self) -> usize {
        self.doors.iter().filter(|d| d.question.is_none()).count()
    }

    pub fn visited_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.visited).count()
    }
}
