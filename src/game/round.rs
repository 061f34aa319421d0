//! The game-round state machine: snake segments, direction, and score.
//!
//! This is plain data plus one `advance` step per tick, deliberately free of
//! queries and commands so the movement and collision rules can be exercised
//! directly in tests. The ECS side mirrors `segments` into renderable
//! entities after each tick.

use bevy::prelude::*;

use super::{Direction, Position};

/// Outcome of advancing the snake by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Moved into a free cell; length unchanged.
    Moved,
    /// Moved onto the food cell; length and score grew by one.
    Ate,
    /// Hit a wall or its own body; the round is over.
    Died,
}

/// State of the current round. Head at index 0, tail last.
#[derive(Resource, Default)]
pub struct GameRound {
    pub segments: Vec<Position>,
    pub direction: Direction,
    pub score: u32,
}

impl GameRound {
    /// A fresh round: the head plus one trailing segment behind it.
    pub fn start(head: Position, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        let tail = Position {
            x: head.x - dx,
            y: head.y - dy,
        };
        GameRound {
            segments: vec![head, tail],
            direction,
            score: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Update the movement direction. A reversal onto the snake's own neck
    /// is ignored; everything else takes effect on the next tick.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.direction = direction;
        }
    }

    /// Advance the head one cell. The round ends when the new head leaves
    /// the grid or lands on any pre-move segment, the tail cell included.
    /// Eating food grows the snake by one; otherwise the tail is popped and
    /// the length stays constant.
    pub fn advance(&mut self, food: Position, cols: u32, rows: u32) -> TickResult {
        let new_head = self.head().step(self.direction);

        let out_of_bounds = new_head.x < 0
            || new_head.y < 0
            || new_head.x >= cols as i32
            || new_head.y >= rows as i32;
        if out_of_bounds || self.segments.contains(&new_head) {
            return TickResult::Died;
        }

        self.segments.insert(0, new_head);

        if new_head == food {
            self.score += 1;
            TickResult::Ate
        } else {
            self.segments.pop();
            TickResult::Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLS: u32 = 30;
    const ROWS: u32 = 30;

    // Somewhere the snake never reaches in these tests.
    const FAR_FOOD: Position = Position { x: 28, y: 28 };

    #[test]
    fn twenty_ticks_right_from_origin() {
        let mut round = GameRound::start(Position { x: 0, y: 0 }, Direction::Right);

        for _ in 0..20 {
            assert_eq!(round.advance(FAR_FOOD, COLS, ROWS), TickResult::Moved);
        }

        assert_eq!(round.head(), Position { x: 20, y: 0 });
        assert_eq!(round.segments.len(), 2);
        assert_eq!(round.score, 0);
    }

    #[test]
    fn moving_up_then_down_is_blocked_as_reversal() {
        let mut round = GameRound::start(Position { x: 5, y: 5 }, Direction::Up);
        round.advance(FAR_FOOD, COLS, ROWS);

        round.set_direction(Direction::Down);
        assert_eq!(round.direction, Direction::Up);

        round.set_direction(Direction::Left);
        assert_eq!(round.direction, Direction::Left);
    }

    #[test]
    fn wall_collision_ends_the_round() {
        let mut round = GameRound::start(Position { x: COLS as i32 - 1, y: 3 }, Direction::Right);
        let len_before = round.segments.len();

        assert_eq!(round.advance(FAR_FOOD, COLS, ROWS), TickResult::Died);
        assert_eq!(round.segments.len(), len_before);
    }

    #[test]
    fn leaving_through_every_wall_ends_the_round() {
        for (head, dir) in [
            (Position { x: 0, y: 3 }, Direction::Left),
            (Position { x: 3, y: 0 }, Direction::Up),
            (Position { x: 3, y: ROWS as i32 - 1 }, Direction::Down),
        ] {
            let mut round = GameRound::start(head, dir);
            assert_eq!(round.advance(FAR_FOOD, COLS, ROWS), TickResult::Died);
        }
    }

    #[test]
    fn self_collision_ends_the_round() {
        let mut round = GameRound::start(Position { x: 5, y: 5 }, Direction::Left);
        round.segments = vec![
            Position { x: 5, y: 4 },
            Position { x: 5, y: 5 },
            Position { x: 4, y: 5 },
            Position { x: 3, y: 5 },
            Position { x: 3, y: 4 },
            Position { x: 4, y: 4 },
        ];
        round.direction = Direction::Left;

        // Head at (5,4) moving left runs into (4,4).
        assert_eq!(round.advance(FAR_FOOD, COLS, ROWS), TickResult::Died);
    }

    #[test]
    fn moving_onto_the_tail_cell_ends_the_round() {
        // The tail would vacate this tick, but the pre-move body is what
        // the new head is checked against.
        let mut round = GameRound::start(Position { x: 5, y: 5 }, Direction::Up);
        round.segments = vec![
            Position { x: 5, y: 5 },
            Position { x: 5, y: 6 },
            Position { x: 4, y: 6 },
            Position { x: 4, y: 5 },
        ];
        round.direction = Direction::Left;

        assert_eq!(round.advance(FAR_FOOD, COLS, ROWS), TickResult::Died);
    }

    #[test]
    fn eating_food_grows_and_scores() {
        let mut round = GameRound::start(Position { x: 5, y: 5 }, Direction::Right);
        let food = Position { x: 6, y: 5 };

        assert_eq!(round.advance(food, COLS, ROWS), TickResult::Ate);
        assert_eq!(round.segments.len(), 3);
        assert_eq!(round.score, 1);
        assert_eq!(round.head(), food);

        // The next plain move keeps the grown length.
        assert_eq!(round.advance(FAR_FOOD, COLS, ROWS), TickResult::Moved);
        assert_eq!(round.segments.len(), 3);
        assert_eq!(round.score, 1);
    }

    #[test]
    fn length_is_invariant_across_plain_moves() {
        let mut round = GameRound::start(Position { x: 2, y: 2 }, Direction::Down);

        for _ in 0..10 {
            round.advance(FAR_FOOD, COLS, ROWS);
            assert_eq!(round.segments.len(), 2);
        }
    }
}
