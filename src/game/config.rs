//! Immutable game configuration, built once in `main` and shared as a resource.

use bevy::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

use super::Position;

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_GRID: f32 = 0.1;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;

/// All tunables in one place: grid dimensions, cell size, tick rate, palette,
/// and the high-score file location. Immutable after construction.
#[derive(Resource, Clone)]
pub struct GameConfig {
    pub grid_cols: u32,
    pub grid_rows: u32,
    pub cell_size: f32,
    pub tick_interval: Duration,
    pub highscore_path: PathBuf,
    pub background_color: Color,
    pub grid_color: Color,
    pub snake_head_color: Color,
    pub snake_body_color: Color,
    pub food_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_cols: 30,
            grid_rows: 30,
            cell_size: 20.0,
            // 10 simulation ticks per second
            tick_interval: Duration::from_millis(100),
            highscore_path: PathBuf::from("highscore.txt"),
            background_color: Color::srgb(0.0, 0.0, 0.0),
            grid_color: Color::srgb(0.16, 0.16, 0.16),
            snake_head_color: Color::srgb(0.6, 1.0, 0.6),
            snake_body_color: Color::srgb(0.0, 1.0, 0.0),
            food_color: Color::srgb(1.0, 0.0, 0.0),
        }
    }
}

impl GameConfig {
    /// Window (and arena) size in pixels: grid dimensions times cell size.
    pub fn arena_size(&self) -> Vec2 {
        Vec2::new(
            self.grid_cols as f32 * self.cell_size,
            self.grid_rows as f32 * self.cell_size,
        )
    }

    /// Grid cell the snake starts from.
    pub fn grid_center(&self) -> Position {
        Position {
            x: self.grid_cols as i32 / 2,
            y: self.grid_rows as i32 / 2,
        }
    }

    /// World-space center of a grid cell. Grid y grows downward while world
    /// y grows upward, so the row index is flipped here.
    pub fn cell_center(&self, pos: Position) -> Vec2 {
        Vec2::new(
            (pos.x as f32 - self.grid_cols as f32 / 2.0 + 0.5) * self.cell_size,
            (self.grid_rows as f32 / 2.0 - pos.y as f32 - 0.5) * self.cell_size,
        )
    }
}
