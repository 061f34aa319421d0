//! UI plugin - start screen, pause overlay, game-over screen, score text,
//! and the screen-flow transitions between them.

use bevy::app::AppExit;
use bevy::prelude::*;
use std::time::Duration;

use crate::food::spawn_food;
use crate::game::{
    Direction, Food, GameConfig, GameOverUi, GamePhase, GameRound, GameState, InputBuffer,
    MoveTimer, PauseUi, ScoreText, SnakeHead, SnakeSegment, StartScreenUi,
};
use crate::highscore::Highscore;
use crate::snake::{spawn_snake_head, spawn_snake_segment};

const TEXT_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 1.0);
const TEXT_HEADER_COLOR: Color = Color::srgba(0.0, 1.0, 1.0, 1.0);
const TEXT_HIGHLIGHT_COLOR: Color = Color::srgba(1.0, 1.0, 0.0, 1.0);
const TEXT_SECONDARY_COLOR: Color = Color::srgba(0.8, 0.8, 0.8, 1.0);
const TEXT_CONGRATS_COLOR: Color = Color::srgba(0.0, 1.0, 0.0, 1.0);
const GAME_OVER_COLOR: Color = Color::srgba(1.0, 0.2, 0.2, 1.0);

/// Plugin for UI and screen-flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui).add_systems(
            Update,
            (
                quit_input,
                start_screen_input,
                pause_toggle,
                restart_input,
                show_game_over,
                update_score_text,
            )
                .chain(),
        );
    }
}

// Type alias for querying all snake entities
type SnakeEntityQuery<'w, 's> = Query<'w, 's, Entity, Or<(With<SnakeHead>, With<SnakeSegment>)>>;

/// Initial setup: score text plus the start screen the app boots into.
fn setup_ui(mut commands: Commands, highscore: Res<Highscore>) {
    commands.spawn((
        Text::from("Score: 0"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(5.0),
            left: Val::Px(5.0),
            ..default()
        },
        ScoreText,
    ));

    spawn_start_screen(&mut commands, &highscore);
}

/// Full-window overlay node all screens share.
fn overlay_node() -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        flex_direction: FlexDirection::Column,
        ..default()
    }
}

fn overlay_line(text: impl Into<String>, font_size: f32, color: Color) -> impl Bundle {
    (
        Text::from(text.into()),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(15.0)),
            ..default()
        },
    )
}

/// Spawns the start screen UI.
fn spawn_start_screen(commands: &mut Commands, highscore: &Highscore) {
    commands
        .spawn((
            overlay_node(),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            StartScreenUi,
        ))
        .with_children(|parent| {
            parent.spawn(overlay_line(
                "Welcome to the SNAKE Game",
                50.0,
                TEXT_HEADER_COLOR,
            ));
            parent.spawn(overlay_line(
                "Press any arrow key to start",
                26.0,
                TEXT_COLOR,
            ));
            parent.spawn(overlay_line(
                format!("Highscore: {}", highscore.value),
                26.0,
                TEXT_HIGHLIGHT_COLOR,
            ));
            parent.spawn(overlay_line(
                "Press SPACE during game to pause",
                18.0,
                TEXT_SECONDARY_COLOR,
            ));
            parent.spawn(overlay_line(
                "X or ESC quits",
                18.0,
                TEXT_SECONDARY_COLOR,
            ));
        });
}

/// Spawns the pause overlay UI.
fn spawn_pause_overlay(commands: &mut Commands) {
    commands
        .spawn((
            overlay_node(),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            PauseUi,
        ))
        .with_children(|parent| {
            parent.spawn(overlay_line("Paused", 36.0, TEXT_COLOR));
            parent.spawn(overlay_line(
                "Press SPACE to resume or X to quit",
                20.0,
                TEXT_SECONDARY_COLOR,
            ));
        });
}

/// Spawns the game-over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, score: u32, highscore: &Highscore) {
    let just_beaten = highscore.just_beaten;
    let best = highscore.value;

    commands
        .spawn((
            overlay_node(),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            GameOverUi,
        ))
        .with_children(|parent| {
            parent.spawn(overlay_line("Game Over", 50.0, GAME_OVER_COLOR));
            parent.spawn(overlay_line(format!("Your Score: {score}"), 26.0, TEXT_COLOR));
            parent.spawn(overlay_line(
                format!("Highscore: {best}"),
                26.0,
                TEXT_HIGHLIGHT_COLOR,
            ));
            parent.spawn(overlay_line(
                "Press SPACE to restart or X to end",
                20.0,
                TEXT_SECONDARY_COLOR,
            ));

            if just_beaten {
                parent.spawn(overlay_line(
                    "Congratulations, you've cracked the high score!",
                    20.0,
                    TEXT_CONGRATS_COLOR,
                ));
            }
        });
}

/// System to start a round: on the start screen, the first arrow key both
/// chooses the initial direction and begins play.
#[allow(clippy::too_many_arguments)]
fn start_screen_input(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    mut state: ResMut<GameState>,
    mut round: ResMut<GameRound>,
    mut input_buffer: ResMut<InputBuffer>,
    mut move_timer: ResMut<MoveTimer>,
    start_ui: Query<Entity, With<StartScreenUi>>,
) {
    if state.phase != GamePhase::StartScreen {
        return;
    }
    let Some(direction) = Direction::from_just_pressed(&keyboard_input) else {
        return;
    };

    for entity in start_ui.iter() {
        commands.entity(entity).despawn_children();
        commands.entity(entity).despawn();
    }

    *round = GameRound::start(config.grid_center(), direction);
    input_buffer.clear();
    move_timer.elapsed = Duration::ZERO;

    state.segment_entities = round
        .segments
        .iter()
        .enumerate()
        .map(|(i, &pos)| {
            if i == 0 {
                spawn_snake_head(&mut commands, &config, pos)
            } else {
                spawn_snake_segment(&mut commands, &config, pos)
            }
        })
        .collect();

    spawn_food(&mut commands, &config);
    state.phase = GamePhase::Playing;
}

/// System to toggle pause with Space while playing.
fn pause_toggle(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<GameState>,
    pause_ui: Query<Entity, With<PauseUi>>,
) {
    if !keyboard_input.just_pressed(KeyCode::Space) {
        return;
    }

    match state.phase {
        GamePhase::Playing => {
            state.phase = GamePhase::Paused;
            spawn_pause_overlay(&mut commands);
        }
        GamePhase::Paused => {
            for entity in pause_ui.iter() {
                commands.entity(entity).despawn_children();
                commands.entity(entity).despawn();
            }
            state.phase = GamePhase::Playing;
        }
        _ => {}
    }
}

/// System to tear the finished round down and return to the start screen.
fn restart_input(
    mut commands: Commands,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<GameState>,
    highscore: Res<Highscore>,
    snake_entities: SnakeEntityQuery,
    food: Query<Entity, With<Food>>,
    game_over_ui: Query<Entity, With<GameOverUi>>,
) {
    if state.phase != GamePhase::GameOver || !keyboard_input.just_pressed(KeyCode::Space) {
        return;
    }

    for entity in snake_entities.iter().chain(food.iter()) {
        commands.entity(entity).despawn();
    }
    for entity in game_over_ui.iter() {
        commands.entity(entity).despawn_children();
        commands.entity(entity).despawn();
    }

    state.segment_entities.clear();
    state.phase = GamePhase::StartScreen;

    // Back on the start screen, now showing the updated high score
    spawn_start_screen(&mut commands, &highscore);
}

/// System to show the game-over screen when a round ends.
fn show_game_over(
    mut commands: Commands,
    state: Res<GameState>,
    round: Res<GameRound>,
    highscore: Res<Highscore>,
    game_over_ui: Query<Entity, With<GameOverUi>>,
) {
    if state.is_changed() && state.phase == GamePhase::GameOver && game_over_ui.is_empty() {
        spawn_game_over_screen(&mut commands, round.score, &highscore);
    }
}

/// System to update the score display.
fn update_score_text(round: Res<GameRound>, mut query: Query<&mut Text, With<ScoreText>>) {
    if let Ok(mut text) = query.single_mut() {
        *text = Text::from(format!("Score: {}", round.score));
    }
}

/// System to quit from any phase with X or Escape.
fn quit_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard_input.any_just_pressed([KeyCode::KeyX, KeyCode::Escape]) {
        exit.write(AppExit::Success);
    }
}
