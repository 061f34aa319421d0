//! Snake plugin - buffered direction input, the fixed-tick round advance,
//! growth, and mirroring the round's segments into renderable entities.

use bevy::{prelude::*, time::common_conditions::on_timer};
use bevy_vector_shapes::prelude::*;
use std::time::Duration;

use crate::food::random_cell;
use crate::game::{
    Direction, Food, GameConfig, GamePhase, GameRound, GameState, GrowthEvent, InputBuffer,
    MoveTimer, Position, PreviousPosition, SnakeHead, SnakeSegment, TickResult,
};
use crate::highscore::{self, Highscore};

const CORNER_RADIUS: f32 = 4.0;

/// Plugin for snake-related systems. The advance system runs on the fixed
/// tick; input and entity bookkeeping run every frame.
pub struct SnakePlugin {
    pub tick_interval: Duration,
}

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                direction_input,
                advance_round.run_if(on_timer(self.tick_interval)),
                grow_segments,
                sync_segments,
            )
                .chain(),
        );
    }
}

/// Spawns the snake head entity at the given cell.
pub fn spawn_snake_head(commands: &mut Commands, config: &GameConfig, position: Position) -> Entity {
    let size = config.cell_size * 0.9;
    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    let corner_radius_normalized = CORNER_RADIUS / (size / 2.0);

    commands
        .spawn((
            ShapeBundle::rect(
                &ShapeConfig {
                    color: config.snake_head_color,
                    corner_radii: Vec4::splat(corner_radius_normalized),
                    ..ShapeConfig::default_2d()
                },
                Vec2::splat(size),
            ),
            SnakeHead,
            position,
            PreviousPosition { pos: position },
        ))
        .id()
}

/// Spawns a snake body segment at the given cell.
pub fn spawn_snake_segment(
    commands: &mut Commands,
    config: &GameConfig,
    position: Position,
) -> Entity {
    let size = config.cell_size;
    let corner_radius_normalized = CORNER_RADIUS / (size / 2.0);

    commands
        .spawn((
            ShapeBundle::rect(
                &ShapeConfig {
                    color: config.snake_body_color,
                    corner_radii: Vec4::splat(corner_radius_normalized),
                    ..ShapeConfig::default_2d()
                },
                Vec2::splat(size),
            ),
            SnakeSegment,
            position,
            PreviousPosition { pos: position },
        ))
        .id()
}

/// System to read keyboard input and queue direction changes.
fn direction_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut input_buffer: ResMut<InputBuffer>,
    round: Res<GameRound>,
    state: Res<GameState>,
) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // The direction the snake will be travelling in once the buffer drains
    let last_direction = input_buffer.last_direction().unwrap_or(round.direction);
    let new_direction = Direction::from_input(&keyboard_input, last_direction);

    if new_direction != last_direction && new_direction != last_direction.opposite() {
        input_buffer.queue_direction(new_direction);
    }
}

/// System to advance the round by one tick: consume buffered input, move the
/// head, resolve collisions, and relocate the food when it gets eaten.
#[allow(clippy::too_many_arguments)]
fn advance_round(
    config: Res<GameConfig>,
    mut state: ResMut<GameState>,
    mut round: ResMut<GameRound>,
    mut input_buffer: ResMut<InputBuffer>,
    mut move_timer: ResMut<MoveTimer>,
    mut growth_writer: MessageWriter<GrowthEvent>,
    mut highscore: ResMut<Highscore>,
    mut foods: Query<(&mut Position, &mut PreviousPosition), With<Food>>,
) {
    if state.phase != GamePhase::Playing {
        return;
    }

    // Reset the interpolation timer at the start of each tick
    move_timer.elapsed = Duration::ZERO;

    if let Some(direction) = input_buffer.pop_direction() {
        round.set_direction(direction);
    }

    let Ok((mut food_pos, mut food_prev)) = foods.single_mut() else {
        return;
    };

    match round.advance(*food_pos, config.grid_cols, config.grid_rows) {
        TickResult::Moved => {}
        TickResult::Ate => {
            growth_writer.write(GrowthEvent);

            // Relocate rather than respawn; both positions move so the food
            // teleports instead of sliding across the board.
            let cell = random_cell(&mut rand::rng(), config.grid_cols, config.grid_rows);
            *food_pos = cell;
            food_prev.pos = cell;
        }
        TickResult::Died => {
            state.phase = GamePhase::GameOver;
            info!("game over, final score {}", round.score);

            highscore.just_beaten = round.score > highscore.value;
            if highscore.just_beaten {
                highscore.value = round.score;
                if let Err(err) = highscore::save(&config.highscore_path, highscore.value) {
                    warn!(
                        "failed to write high score to {}: {err}",
                        config.highscore_path.display()
                    );
                }
            }
        }
    }
}

/// System to spawn a new tail entity when the snake has grown.
fn grow_segments(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut state: ResMut<GameState>,
    round: Res<GameRound>,
    mut growth_reader: MessageReader<GrowthEvent>,
) {
    if growth_reader.read().next().is_none() {
        return;
    }

    if let Some(&tail) = round.segments.last() {
        let entity = spawn_snake_segment(&mut commands, &config, tail);
        state.segment_entities.push(entity);
    }
}

/// System to copy the round's segment list onto the mirrored entities. Each
/// entity's previous position is recorded only on the frames where the grid
/// position actually changes, which keeps the interpolation anchored to the
/// last tick.
fn sync_segments(
    round: Res<GameRound>,
    state: Res<GameState>,
    mut positions: Query<(&mut Position, &mut PreviousPosition), Without<Food>>,
) {
    for (&entity, &target) in state.segment_entities.iter().zip(round.segments.iter()) {
        if let Ok((mut pos, mut prev)) = positions.get_mut(entity) {
            if *pos != target {
                prev.pos = *pos;
                *pos = target;
            }
        }
    }
}
