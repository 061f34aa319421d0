//! Board plugin - camera, arena background, and the cell grid lines.

use bevy::prelude::*;

use crate::game::{GameConfig, Z_BACKGROUND, Z_GRID};

const GRID_LINE_WIDTH: f32 = 1.0;

/// Plugin that draws the static playing field.
pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_board);
    }
}

fn setup_board(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn(Camera2d);

    let arena = config.arena_size();

    // Arena background
    commands.spawn((
        Sprite {
            color: config.background_color,
            custom_size: Some(arena),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
    ));

    // Vertical grid lines, one per column boundary
    for col in 0..=config.grid_cols {
        let x = (col as f32 - config.grid_cols as f32 / 2.0) * config.cell_size;
        commands.spawn((
            Sprite {
                color: config.grid_color,
                custom_size: Some(Vec2::new(GRID_LINE_WIDTH, arena.y)),
                ..default()
            },
            Transform::from_xyz(x, 0.0, Z_GRID),
        ));
    }

    // Horizontal grid lines, one per row boundary
    for row in 0..=config.grid_rows {
        let y = (row as f32 - config.grid_rows as f32 / 2.0) * config.cell_size;
        commands.spawn((
            Sprite {
                color: config.grid_color,
                custom_size: Some(Vec2::new(arena.x, GRID_LINE_WIDTH)),
                ..default()
            },
            Transform::from_xyz(0.0, y, Z_GRID),
        ));
    }
}
