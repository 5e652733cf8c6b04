//! In-memory input and render backends.
//!
//! [`ScriptedInput`] replays a fixed list of frames; [`RecordingSurface`]
//! keeps every draw call of the last frame so callers can inspect it.

use rustc_hash::FxHashSet;

use super::{InputSource, RenderSurface};
use crate::math::{Color, Vector2};
use crate::resources::spritesheets::SpriteRect;

/// Input replayed frame by frame.
///
/// A script is a comma-separated list of frames; each frame lists the codes
/// pressed on that frame joined with `+`, or `.` for an idle frame:
/// `"Down,.,Enter"` presses Down, waits a frame, then presses Enter.
/// Codes are held for exactly the frame they appear in.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<FxHashSet<String>>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn parse(script: &str) -> Self {
        let frames = script
            .split(',')
            .map(str::trim)
            .filter(|frame| !frame.is_empty())
            .map(|frame| {
                if frame == "." {
                    FxHashSet::default()
                } else {
                    frame
                        .split('+')
                        .map(str::trim)
                        .filter(|code| !code.is_empty())
                        .map(String::from)
                        .collect()
                }
            })
            .collect();
        Self { frames, cursor: 0 }
    }

    /// Number of scripted frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Move on to the next frame. Past the end the input stays idle.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    fn current(&self) -> Option<&FxHashSet<String>> {
        self.frames.get(self.cursor)
    }

    fn previous(&self) -> Option<&FxHashSet<String>> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.frames.get(i))
    }
}

impl InputSource for ScriptedInput {
    fn is_down(&self, code: &str) -> bool {
        self.current().is_some_and(|f| f.contains(code))
    }

    fn is_pressed(&self, code: &str) -> bool {
        self.is_down(code) && !self.previous().is_some_and(|f| f.contains(code))
    }

    fn is_released(&self, code: &str) -> bool {
        !self.is_down(code) && self.previous().is_some_and(|f| f.contains(code))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Sprite {
        texture: String,
        src: SpriteRect,
        center: Vector2,
    },
    Text {
        text: String,
        pos: Vector2,
    },
}

/// Surface that records draw calls. `clear` starts a new frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sprite_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Sprite { .. }))
            .count()
    }

    /// Texts drawn this frame, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(color));
    }

    fn draw_sprite(&mut self, texture: &str, src: SpriteRect, center: Vector2) {
        self.calls.push(DrawCall::Sprite {
            texture: texture.to_string(),
            src,
            center,
        });
    }

    fn draw_text(&mut self, text: &str, pos: Vector2, _font_size: f32, _color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
        });
    }
}
