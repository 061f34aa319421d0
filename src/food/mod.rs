//! Food plugin - spawning, random placement, and the pulse animation.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use rand::Rng;

use crate::game::{Food, FoodPulse, GameConfig, Position, PreviousPosition};

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, food_pulse_animation);
    }
}

/// A cell sampled uniformly from `[0,cols) x [0,rows)`. The snake body is
/// not excluded, so food can land under a segment.
pub fn random_cell(rng: &mut impl Rng, cols: u32, rows: u32) -> Position {
    Position {
        x: rng.random_range(0..cols as i32),
        y: rng.random_range(0..rows as i32),
    }
}

/// Spawns the round's food entity at a random cell.
pub fn spawn_food(commands: &mut Commands, config: &GameConfig) -> Entity {
    let position = random_cell(&mut rand::rng(), config.grid_cols, config.grid_rows);

    commands
        .spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: config.food_color,
                    ..ShapeConfig::default_2d()
                },
                config.cell_size / 2.0,
            ),
            Food,
            position,
            PreviousPosition { pos: position },
            FoodPulse {
                timer: Timer::from_seconds(0.8, TimerMode::Repeating),
            },
        ))
        .id()
}

/// System to animate food with a pulsing effect.
fn food_pulse_animation(
    time: Res<Time>,
    mut foods: Query<(&mut Transform, &mut FoodPulse), With<Food>>,
) {
    for (mut transform, mut pulse) in foods.iter_mut() {
        pulse.timer.tick(time.delta());

        // Sine wave for smooth pulsing
        let progress = pulse.timer.fraction();
        let scale = 1.0 + (progress * std::f32::consts::PI * 2.0).sin() * 0.15;

        transform.scale = Vec3::splat(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_within_grid_bounds() {
        let mut rng = rand::rng();

        for _ in 0..1000 {
            let cell = random_cell(&mut rng, 30, 30);
            assert!((0..30).contains(&cell.x));
            assert!((0..30).contains(&cell.y));
        }
    }

    #[test]
    fn samples_cover_the_whole_range() {
        let mut rng = rand::rng();

        // Edge rows and columns must be reachable.
        let mut seen_zero_x = false;
        let mut seen_max_x = false;
        for _ in 0..5000 {
            let cell = random_cell(&mut rng, 30, 30);
            seen_zero_x |= cell.x == 0;
            seen_max_x |= cell.x == 29;
        }
        assert!(seen_zero_x && seen_max_x);
    }

    #[test]
    fn repeated_samples_are_not_all_identical() {
        let mut rng = rand::rng();

        let first = random_cell(&mut rng, 30, 30);
        let all_same = (0..10)
            .map(|_| random_cell(&mut rng, 30, 30))
            .all(|cell| cell == first);
        assert!(!all_same);
    }
}
