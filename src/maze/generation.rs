//! Maze construction: a fully connected grid with one door per adjacent
//! room pair, each door drawing a question from the supplied source.

use super::types::{Direction, Door, DoorId, Maze};
use crate::difficulty::{DifficultySettings, MissingQuestionPolicy};
use crate::question_source::QuestionSource;
use crate::trivia::types::QuestionKind;
use thiserror::Error;

/// Construction failures. Both are fatal; a half-built maze is never returned.
#[derive(Debug, Error)]
pub enum MazeBuildError {
    #[error("maze dimensions {rows}x{cols} are invalid: both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("question source ran dry after filling {doors_filled} of {doors_total} doors")]
    QuestionSupplyExhausted {
        doors_filled: usize,
        doors_total: usize,
    },
}

/// Build a `rows x cols` maze with every adjacent pair of rooms connected by
/// exactly one shared door. Start is (0, 0), exit is (rows-1, cols-1).
///
/// Door question kinds rotate through true/false → multiple choice → fill-in
/// so every bank kind gets drawn evenly. When the source returns `None` the
/// door follows `settings.missing_question`: open structural passage, or
/// fail the whole build.
pub fn build_maze(
    rows: usize,
    cols: usize,
    settings: &DifficultySettings,
    source: &mut dyn QuestionSource,
) -> Result<Maze, MazeBuildError> {
    if rows < 1 || cols < 1 {
        return Err(MazeBuildError::InvalidDimensions { rows, cols });
    }

    let doors_total = rows * (cols - 1) + cols * (rows - 1);
    let mut maze = Maze::new(rows, cols);
    let mut kind_cursor = 0usize;
    let mut undrawn = 0usize;

    for row in 0..rows {
        for col in 0..cols {
            // Wiring east and south from every room covers each pair once
            for direction in [Direction::East, Direction::South] {
                let neighbor = match maze.neighbor((row, col), direction) {
                    Some(n) => n,
                    None => continue,
                };

                let kind = QuestionKind::ALL[kind_cursor % QuestionKind::ALL.len()];
                kind_cursor += 1;

                let question = source.next(kind, settings.question_difficulty);
                if question.is_none() {
                    match settings.missing_question {
                        MissingQuestionPolicy::OpenDoor => undrawn += 1,
                        MissingQuestionPolicy::FailBuild => {
                            return Err(MazeBuildError::QuestionSupplyExhausted {
                                doors_filled: maze.doors.len() - undrawn,
                                doors_total,
                            });
                        }
                    }
                }

                let id = DoorId(maze.doors.len());
                maze.doors.push(Door::new(
                    (row, col),
                    neighbor,
                    question,
                    settings.max_attempts_per_door,
                ));

                if let Some(room) = maze.room_mut(row, col) {
                    room.doors[direction.index()] = Some(id);
                }
                if let Some(room) = maze.room_mut(neighbor.0, neighbor.1) {
                    room.doors[direction.opposite().index()] = Some(id);
                }
            }
        }
    }

    // The player begins in the start room
    if let Some(room) = maze.room_mut(0, 0) {
        room.visited = true;
    }

    if undrawn > 0 {
        tracing::warn!(
            undrawn,
            doors_total,
            "question source ran dry; doors left open as structural passages"
        );
    }
    tracing::debug!(
        rows,
        cols,
        doors = maze.doors.len(),
        structural = maze.structural_door_count(),
        "maze built"
    );

    Ok(maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_source::QuestionBank;
    use crate::trivia::types::Question;

    fn ample_bank() -> QuestionBank {
        // Plenty of every kind at difficulty 1
        let mut questions = Vec::new();
        for i in 0..200 {
            questions.push(Question::true_false(format!("tf {i}"), true, 1));
            questions.push(
                Question::multiple_choice(
                    format!("mc {i}"),
                    vec!["a".into(), "b".into()],
                    0,
                    1,
                )
                .unwrap(),
            );
            questions.push(Question::fill_in_blank(format!("fib {i}"), "x", 1));
        }
        QuestionBank::new(questions)
    }

    fn settings() -> DifficultySettings {
        DifficultySettings::builder().question_difficulty(1, 1).build()
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        let mut bank = ample_bank();
        let err = build_maze(0, 5, &settings(), &mut bank).unwrap_err();
        assert!(matches!(err, MazeBuildError::InvalidDimensions { rows: 0, cols: 5 }));

        let err = build_maze(5, 0, &settings(), &mut bank).unwrap_err();
        assert!(matches!(err, MazeBuildError::InvalidDimensions { .. }));
    }

    #[test]
    fn test_grid_room_and_door_counts() {
        for (rows, cols) in [(3, 3), (4, 7), (20, 20)] {
            let mut bank = ample_bank();
            let maze = build_maze(rows, cols, &settings(), &mut bank).unwrap();
            assert_eq!(maze.rooms.len(), rows * cols);
            assert_eq!(maze.door_count(), rows * (cols - 1) + cols * (rows - 1));
        }
    }

    #[test]
    fn test_per_room_door_counts() {
        let mut bank = ample_bank();
        let maze = build_maze(3, 3, &settings(), &mut bank).unwrap();
        for room in &maze.rooms {
            let (row, col) = room.position;
            let expected = match (
                row == 0 || row == maze.rows - 1,
                col == 0 || col == maze.cols - 1,
            ) {
                (true, true) => 2,   // corner
                (true, false) | (false, true) => 3, // edge
                (false, false) => 4, // interior
            };
            let actual = room.doors.iter().filter(|d| d.is_some()).count();
            assert_eq!(actual, expected, "room {:?}", room.position);
        }
    }

    #[test]
    fn test_door_endpoints_are_adjacent() {
        let mut bank = ample_bank();
        let maze = build_maze(4, 5, &settings(), &mut bank).unwrap();
        for door in &maze.doors {
            let [(r1, c1), (r2, c2)] = door.rooms;
            let row_gap = r1.abs_diff(r2);
            let col_gap = c1.abs_diff(c2);
            assert_eq!(row_gap + col_gap, 1, "door {:?} not adjacent", door.rooms);
        }
    }

    #[test]
    fn test_shared_door_visible_from_both_rooms() {
        let mut bank = ample_bank();
        let maze = build_maze(3, 3, &settings(), &mut bank).unwrap();
        let east = maze.door_in_direction((0, 0), Direction::East).unwrap();
        let west = maze.door_in_direction((0, 1), Direction::West).unwrap();
        assert_eq!(east, west);
    }

    #[test]
    fn test_question_kinds_rotate() {
        let mut bank = ample_bank();
        let maze = build_maze(3, 3, &settings(), &mut bank).unwrap();
        let kinds: Vec<_> = maze
            .doors
            .iter()
            .filter_map(|d| d.question.as_ref().map(|q| q.kind()))
            .collect();
        assert_eq!(kinds[0], QuestionKind::TrueFalse);
        assert_eq!(kinds[1], QuestionKind::MultipleChoice);
        assert_eq!(kinds[2], QuestionKind::FillInBlank);
        assert_eq!(kinds[3], QuestionKind::TrueFalse);
    }

    #[test]
    fn test_empty_source_open_door_policy() {
        let mut bank = QuestionBank::default();
        let maze = build_maze(3, 3, &settings(), &mut bank).unwrap();
        assert_eq!(maze.structural_door_count(), maze.door_count());
        assert!(maze.doors.iter().all(|d| d.is_open()));
    }

    #[test]
    fn test_empty_source_fail_build_policy() {
        let mut bank = QuestionBank::default();
        let strict = DifficultySettings::builder()
            .missing_question(MissingQuestionPolicy::FailBuild)
            .build();
        let err = build_maze(3, 3, &strict, &mut bank).unwrap_err();
        assert!(matches!(
            err,
            MazeBuildError::QuestionSupplyExhausted { doors_filled: 0, doors_total: 12 }
        ));
    }

    #[test]
    fn test_start_room_visited_at_build() {
        let mut bank = ample_bank();
        let maze = build_maze(3, 3, &settings(), &mut bank).unwrap();
        assert!(maze.room(0, 0).unwrap().visited);
        assert_eq!(maze.visited_count(), 1);
        assert_eq!(maze.player_position, maze.start);
    }
}
