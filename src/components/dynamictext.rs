use bevy_ecs::prelude::Component;

use crate::math::Color;

#[derive(Component, Clone, Debug)]
/// Dynamic text component for rendering variable strings on screen.
pub struct DynamicText {
    /// The text content to render.
    pub content: String,
    /// Font size in screen pixels.
    pub font_size: f32,
    /// Color of the text.
    pub color: Color,
}

impl DynamicText {
    /// Creates a new DynamicText component.
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
        }
    }
    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
