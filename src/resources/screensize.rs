use bevy_ecs::prelude::Resource;

/// Render resolution in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}
