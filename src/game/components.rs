//! ECS components shared across the game plugins.

use bevy::prelude::*;

/// Grid position component for entities on the board. `y` grows downward,
/// matching the grid coordinate system the round logic uses.
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// The neighbouring cell one step in the given direction.
    pub fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Component to track previous position for smooth interpolation.
#[derive(Component, Clone, Copy, Debug)]
pub struct PreviousPosition {
    pub pos: Position,
}

/// Movement direction of the snake.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit vector in grid coordinates (y down).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Returns the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Reads held keys and returns the corresponding direction.
    pub fn from_input(keyboard_input: &ButtonInput<KeyCode>, current: Direction) -> Direction {
        if keyboard_input.pressed(KeyCode::ArrowLeft) || keyboard_input.pressed(KeyCode::KeyA) {
            Direction::Left
        } else if keyboard_input.pressed(KeyCode::ArrowRight)
            || keyboard_input.pressed(KeyCode::KeyD)
        {
            Direction::Right
        } else if keyboard_input.pressed(KeyCode::ArrowUp) || keyboard_input.pressed(KeyCode::KeyW)
        {
            Direction::Up
        } else if keyboard_input.pressed(KeyCode::ArrowDown)
            || keyboard_input.pressed(KeyCode::KeyS)
        {
            Direction::Down
        } else {
            current
        }
    }

    /// The direction whose key was pressed this frame, if any. Used by the
    /// start screen, where the first arrow key also starts the round.
    pub fn from_just_pressed(keyboard_input: &ButtonInput<KeyCode>) -> Option<Direction> {
        if keyboard_input.any_just_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
            Some(Direction::Left)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
            Some(Direction::Right)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
            Some(Direction::Up)
        } else if keyboard_input.any_just_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Component to mark the snake's head.
#[derive(Component)]
pub struct SnakeHead;

/// Component to mark snake body segments.
#[derive(Component)]
pub struct SnakeSegment;

/// Component to mark the food entity.
#[derive(Component)]
pub struct Food;

/// Component for the food pulsing animation.
#[derive(Component)]
pub struct FoodPulse {
    pub timer: Timer,
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the start screen UI.
#[derive(Component)]
pub struct StartScreenUi;

/// Component to mark the pause overlay UI.
#[derive(Component)]
pub struct PauseUi;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUi;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_vectors() {
        for dir in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            let (dx, dy) = dir.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn step_moves_one_cell() {
        let pos = Position { x: 5, y: 5 };
        assert_eq!(pos.step(Direction::Up), Position { x: 5, y: 4 });
        assert_eq!(pos.step(Direction::Down), Position { x: 5, y: 6 });
        assert_eq!(pos.step(Direction::Left), Position { x: 4, y: 5 });
        assert_eq!(pos.step(Direction::Right), Position { x: 6, y: 5 });
    }
}
