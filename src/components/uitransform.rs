//! Screen-space placement for UI elements.
//!
//! A [`UITransform`] names the element (`id`, e.g. `"life"` or
//! `"cursor_restart"`) and places it relative to a screen [`Anchor`]. The
//! [`ui_system`](crate::systems::ui::ui_system) resolves `screen_pos` each
//! frame from the current screen size.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::math::Vector2;

/// Screen reference point the offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    #[default]
    TopLeft,
    Top,
    TopRight,
    Center,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// Anchor point in pixels for a screen of `w` x `h`.
    pub fn origin(&self, w: f32, h: f32) -> Vector2 {
        match self {
            Anchor::TopLeft => Vector2::new(0.0, 0.0),
            Anchor::Top => Vector2::new(w * 0.5, 0.0),
            Anchor::TopRight => Vector2::new(w, 0.0),
            Anchor::Center => Vector2::new(w * 0.5, h * 0.5),
            Anchor::BottomLeft => Vector2::new(0.0, h),
            Anchor::Bottom => Vector2::new(w * 0.5, h),
            Anchor::BottomRight => Vector2::new(w, h),
        }
    }
}

#[derive(Component, Clone, Debug, PartialEq)]
pub struct UITransform {
    /// Identifier looked up by systems and menus.
    pub id: String,
    pub anchor: Anchor,
    pub offset: Vector2,
    /// Resolved position in screen pixels.
    pub screen_pos: Vector2,
}

impl UITransform {
    pub fn new(id: impl Into<String>, anchor: Anchor, offset: Vector2) -> Self {
        Self {
            id: id.into(),
            anchor,
            offset,
            screen_pos: Vector2::zero(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_origins() {
        assert_eq!(Anchor::TopLeft.origin(640.0, 360.0), Vector2::new(0.0, 0.0));
        assert_eq!(Anchor::Center.origin(640.0, 360.0), Vector2::new(320.0, 180.0));
        assert_eq!(
            Anchor::BottomRight.origin(640.0, 360.0),
            Vector2::new(640.0, 360.0)
        );
    }

    #[test]
    fn anchor_deserializes_snake_case() {
        let a: Anchor = serde_json::from_str("\"bottom_left\"").unwrap();
        assert_eq!(a, Anchor::BottomLeft);
    }
}
