//! Gameplay tag components.
//!
//! These mark the few entity kinds the breakout systems look for. They carry
//! only the data the systems need.

use bevy_ecs::prelude::Component;

use crate::math::Vector2;

/// The player-controlled paddle.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Paddle;

/// The ball. `speed` is the launch speed in world units per second and
/// `rest_offset` its position relative to the paddle while waiting for launch.
#[derive(Component, Clone, Copy, Debug)]
pub struct Ball {
    pub speed: f32,
    pub rest_offset: Vector2,
}

/// A destructible brick worth `points` when hit.
#[derive(Component, Clone, Copy, Debug)]
pub struct Brick {
    pub points: u32,
}
