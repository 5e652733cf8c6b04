//! Resolved world-space position.
//!
//! When an entity has a [`ChildOf`](bevy_ecs::hierarchy::ChildOf) parent, its
//! [`MapPosition`](super::mapposition::MapPosition) is interpreted as local to
//! the parent. The [`transform`](crate::systems::transform) systems compute the
//! resulting world-space position and store it here. The sprite renderer only
//! reads this component.

use bevy_ecs::prelude::*;

use crate::math::Vector2;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct GlobalTransform2D {
    /// World-space position.
    pub position: Vector2,
}
