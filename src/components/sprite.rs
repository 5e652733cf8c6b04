use bevy_ecs::prelude::Component;

/// A sprite is a frame of a sprite sheet registered in
/// [`SpriteSheetStore`](crate::resources::spritesheets::SpriteSheetStore).
/// The frame is drawn centered on the entity position.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub sheet: String,
    pub index: usize,
}

impl Sprite {
    pub fn new(sheet: impl Into<String>, index: usize) -> Self {
        Self {
            sheet: sheet.into(),
            index,
        }
    }
}
