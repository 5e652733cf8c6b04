//! Boundary with the platform.
//!
//! The core never talks to a window, a keyboard or a GPU directly. Instead the
//! frame driver is handed an [`InputSource`] to poll and a [`RenderSurface`]
//! to draw on. [`headless`] provides in-memory implementations used by the
//! scripted runner and tests; [`raylib`] (feature `window`) drives a real
//! window.

use crate::math::{Color, Vector2};
use crate::resources::spritesheets::SpriteRect;

pub mod headless;
#[cfg(feature = "window")]
pub mod raylib;

/// Queries over physical input codes by name (`"Enter"`, `"GamepadButton0"`).
///
/// Unknown names are simply never pressed.
pub trait InputSource {
    /// Held down this frame.
    fn is_down(&self, code: &str) -> bool;
    /// Went down this frame.
    fn is_pressed(&self, code: &str) -> bool;
    /// Went up this frame.
    fn is_released(&self, code: &str) -> bool;
}

/// Draw target for one frame.
pub trait RenderSurface {
    fn clear(&mut self, color: Color);
    /// Draw `src` from `texture` centered on `center`.
    fn draw_sprite(&mut self, texture: &str, src: SpriteRect, center: Vector2);
    /// Draw `text` with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Vector2, font_size: f32, color: Color);
}
