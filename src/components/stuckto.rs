//! Component for attaching an entity's position to another entity.
//!
//! The ball carries [`StuckTo`] while it waits on the paddle; launching it
//! removes the component.

use bevy_ecs::prelude::{Component, Entity};

use crate::math::Vector2;

/// Makes an entity follow another entity's position plus `offset`.
#[derive(Debug, Clone, Component)]
pub struct StuckTo {
    /// The entity to follow.
    pub target: Entity,
    /// Offset from the target's position.
    pub offset: Vector2,
    /// If false, the Y axis is left alone.
    pub follow_y: bool,
}

impl StuckTo {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            offset: Vector2::zero(),
            follow_y: true,
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }
}
