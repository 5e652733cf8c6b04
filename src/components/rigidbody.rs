//! Kinematic body component.
//!
//! The `frozen` flag disables integration, which is how the ball stays put
//! while it rides on the paddle.

use bevy_ecs::prelude::Component;

use crate::math::Vector2;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// When true the movement system skips this entity.
    pub frozen: bool,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn freeze(&mut self) {
        self.frozen = true;
        self.velocity = Vector2::zero();
    }

    pub fn launch(&mut self, velocity: Vector2) {
        self.frozen = false;
        self.velocity = velocity;
    }
}
