//! Arkanoid library.
//!
//! A breakout game built on a stack of game states driving `bevy_ecs`
//! schedules over a shared world. The library exposes the components,
//! resources, systems and states for the binary and for integration tests.

pub mod backend;
pub mod components;
pub mod entities;
pub mod error;
pub mod events;
pub mod game;
pub mod loader;
pub mod math;
pub mod resources;
pub mod states;
pub mod systems;
