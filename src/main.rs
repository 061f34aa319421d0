use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

mod board;
mod food;
mod game;
mod highscore;
mod rendering;
mod snake;
mod ui;

use game::{GameConfig, GameRound, GameState, GrowthEvent, InputBuffer, MoveTimer};
use highscore::Highscore;

fn main() {
    let config = GameConfig::default();
    let highscore = Highscore {
        value: highscore::load(&config.highscore_path),
        just_beaten: false,
    };
    let arena = config.arena_size();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(arena.x as u32, arena.y as u32),
                    title: "Snake".to_string(),
                    resizable: false,
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(config.background_color))
        .insert_resource(highscore)
        .init_resource::<GameState>()
        .init_resource::<GameRound>()
        .init_resource::<InputBuffer>()
        .init_resource::<MoveTimer>()
        .add_message::<GrowthEvent>()
        .add_plugins((
            board::BoardPlugin,
            snake::SnakePlugin {
                tick_interval: config.tick_interval,
            },
            food::FoodPlugin,
            ui::UiPlugin,
            rendering::RenderingPlugin,
        ))
        .insert_resource(config)
        .run();
}
