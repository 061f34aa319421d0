//! Rendering plugin - inter-tick position interpolation and head rotation.

use bevy::prelude::*;

use crate::game::{
    Food, GameConfig, GameRound, MoveTimer, Position, PreviousPosition, SnakeHead, SnakeSegment,
    Z_BACKGROUND, Z_FOOD, Z_SNAKE_HEAD, Z_SNAKE_SEGMENT,
};

/// Plugin for rendering concerns layered on top of the grid simulation.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (update_move_timer, position_translation, update_head_rotation).chain(),
        );
    }
}

// Type alias for the transform interpolation query
type TransformInterpolationQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static Position,
        &'static PreviousPosition,
        &'static mut Transform,
        Option<&'static SnakeHead>,
        Option<&'static SnakeSegment>,
        Option<&'static Food>,
    ),
>;

/// System to track elapsed time since the last tick.
fn update_move_timer(mut move_timer: ResMut<MoveTimer>, time: Res<Time>) {
    move_timer.elapsed += time.delta();
}

/// System to interpolate entity transforms between their previous and
/// current grid cells for smooth movement.
fn position_translation(
    config: Res<GameConfig>,
    move_timer: Res<MoveTimer>,
    mut transforms: TransformInterpolationQuery,
) {
    // Interpolation progress across the current tick (0.0 to 1.0)
    let progress =
        (move_timer.elapsed.as_secs_f32() / config.tick_interval.as_secs_f32()).min(1.0);

    for (pos, prev_pos, mut transform, head, segment, food) in transforms.iter_mut() {
        // Z-index based on entity type to ensure proper layering
        let z = if head.is_some() {
            Z_SNAKE_HEAD
        } else if segment.is_some() {
            Z_SNAKE_SEGMENT
        } else if food.is_some() {
            Z_FOOD
        } else {
            Z_BACKGROUND
        };

        let current = config.cell_center(*pos);
        let previous = config.cell_center(prev_pos.pos);
        let interpolated = previous.lerp(current, progress);

        transform.translation = interpolated.extend(z);
    }
}

/// System to rotate the snake head toward its travel direction.
fn update_head_rotation(
    round: Res<GameRound>,
    mut heads: Query<&mut Transform, With<SnakeHead>>,
) {
    use crate::game::Direction;

    for mut transform in heads.iter_mut() {
        let rotation = match round.direction {
            Direction::Right => 0.0,
            Direction::Up => std::f32::consts::FRAC_PI_2,
            Direction::Left => std::f32::consts::PI,
            Direction::Down => -std::f32::consts::FRAC_PI_2,
        };

        transform.rotation = Quat::from_rotation_z(rotation);
    }
}
