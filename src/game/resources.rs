//! Game resources (singleton state).

use bevy::prelude::*;
use std::time::Duration;

use super::Direction;

/// The single screen-flow state machine. Every system that touches the
/// simulation or a screen checks this instead of running its own wait loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    StartScreen,
    Playing,
    Paused,
    GameOver,
}

/// Tracks the current phase and the entities mirroring the round's segments
/// (index-aligned with `GameRound::segments`, head first).
#[derive(Resource, Default)]
pub struct GameState {
    pub phase: GamePhase,
    pub segment_entities: Vec<Entity>,
}

/// Input buffer to queue direction changes between ticks.
#[derive(Resource, Default)]
pub struct InputBuffer {
    queued_directions: Vec<Direction>,
}

impl InputBuffer {
    /// Queue a direction change (max 2 buffered inputs).
    pub fn queue_direction(&mut self, direction: Direction) {
        if self.queued_directions.len() < 2 {
            self.queued_directions.push(direction);
        }
    }

    /// Pop the next queued direction.
    pub fn pop_direction(&mut self) -> Option<Direction> {
        if self.queued_directions.is_empty() {
            None
        } else {
            Some(self.queued_directions.remove(0))
        }
    }

    /// Get the last queued direction without removing it.
    pub fn last_direction(&self) -> Option<Direction> {
        self.queued_directions.last().copied()
    }

    /// Clear all queued directions.
    pub fn clear(&mut self) {
        self.queued_directions.clear();
    }
}

/// Resource to track time since the last tick for interpolation.
#[derive(Resource, Default)]
pub struct MoveTimer {
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_buffer_holds_at_most_two() {
        let mut buffer = InputBuffer::default();
        buffer.queue_direction(Direction::Up);
        buffer.queue_direction(Direction::Left);
        buffer.queue_direction(Direction::Down);

        assert_eq!(buffer.pop_direction(), Some(Direction::Up));
        assert_eq!(buffer.pop_direction(), Some(Direction::Left));
        assert_eq!(buffer.pop_direction(), None);
    }
}
