use bevy_ecs::prelude::Component;

/// Entities with this marker are skipped by the render passes.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Hidden;
