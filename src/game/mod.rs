//! Core game module containing shared components, resources, events, the
//! configuration struct, and the round state machine.

mod components;
mod config;
mod events;
mod resources;
mod round;

pub use components::*;
pub use config::*;
pub use events::*;
pub use resources::*;
pub use round::*;
