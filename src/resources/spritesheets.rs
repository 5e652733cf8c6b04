//! Sprite sheet table.
//!
//! Each sheet names a texture and lists frame rectangles inside it.
//! [`Sprite`](crate::components::sprite::Sprite) components refer to frames
//! by `(sheet, index)`. The table is read from a JSON file at startup:
//!
//! ```json
//! {
//!   "sheets": {
//!     "game": {
//!       "texture": "textures/game.png",
//!       "sprites": [ { "x": 0, "y": 0, "width": 48, "height": 12 } ]
//!     }
//!   }
//! }
//! ```

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::EngineError;

/// Frame rectangle in texture pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteSheet {
    /// Texture path relative to the assets directory.
    pub texture: String,
    pub sprites: Vec<SpriteRect>,
}

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpriteSheetStore {
    pub sheets: FxHashMap<String, SpriteSheet>,
}

impl SpriteSheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file(path: &Path) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::AssetLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| EngineError::AssetLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn insert(&mut self, name: impl Into<String>, sheet: SpriteSheet) {
        self.sheets.insert(name.into(), sheet);
    }

    pub fn get(&self, name: &str) -> Option<&SpriteSheet> {
        self.sheets.get(name)
    }

    /// Texture path and frame for a sprite reference.
    pub fn frame(&self, sheet: &str, index: usize) -> Result<(&str, SpriteRect), EngineError> {
        self.sheets
            .get(sheet)
            .and_then(|s| s.sprites.get(index).map(|r| (s.texture.as_str(), *r)))
            .ok_or_else(|| EngineError::MissingSprite {
                sheet: sheet.to_string(),
                index,
            })
    }
}
