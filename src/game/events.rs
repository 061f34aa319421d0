//! Game events (messages).

use bevy::prelude::*;

/// Message triggered when the snake eats and should grow by one segment.
#[derive(Message)]
pub struct GrowthEvent;
