//! Declarative entity loading.
//!
//! States describe their entities in JSON files under
//! `assets/metadata/entities/`. [`load_entities`] parses one file and spawns
//! one new entity per description (plus one brick per filled grid cell),
//! tagging each with the caller's [`Group`]. Loading never reuses entities.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "entities": [
//!     {
//!       "ui_transform": { "id": "restart", "anchor": "center", "offset": { "x": 0, "y": -20 } },
//!       "text": { "content": "RESTART", "font_size": 20 },
//!       "hidden": true
//!     },
//!     {
//!       "position": { "x": 320, "y": 340 },
//!       "sprite": { "sheet": "game", "index": 0 },
//!       "collider": { "width": 48, "height": 12 },
//!       "paddle": true
//!     }
//!   ],
//!   "grids": [
//!     {
//!       "offset_x": 48, "offset_y": 40, "cell_width": 48, "cell_height": 16,
//!       "rows": ["RRGG", "YY.."],
//!       "legend": { "R": { "sprite": { "sheet": "game", "index": 2 }, "points": 10 } }
//!     }
//!   ]
//! }
//! ```
//!
//! A missing or malformed file is fatal ([`EngineError::AssetLoad`]).

use bevy_ecs::prelude::*;
use log::debug;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::components::boxcollider::BoxCollider;
use crate::components::breakout::{Ball, Brick, Paddle};
use crate::components::dynamictext::DynamicText;
use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::group::Group;
use crate::components::hidden::Hidden;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::uitransform::{Anchor, UITransform};
use crate::components::zindex::ZIndex;
use crate::error::EngineError;
use crate::math::{Color, Vector2};
use crate::resources::gameconfig::GameConfig;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct EntitiesDocument {
    #[serde(default)]
    pub entities: Vec<EntityDescription>,
    #[serde(default)]
    pub grids: Vec<BrickGrid>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct EntityDescription {
    pub ui_transform: Option<UITransformDescription>,
    pub text: Option<TextDescription>,
    pub sprite: Option<SpriteDescription>,
    pub position: Option<Vector2>,
    pub z_index: Option<i32>,
    pub collider: Option<ColliderDescription>,
    pub rigid_body: Option<RigidBodyDescription>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub paddle: bool,
    pub ball: Option<BallDescription>,
    pub brick: Option<BrickDescription>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct UITransformDescription {
    pub id: String,
    #[serde(default)]
    pub anchor: Anchor,
    #[serde(default)]
    pub offset: Vector2,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct TextDescription {
    pub content: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default)]
    pub color: Color,
}

fn default_font_size() -> f32 {
    20.0
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SpriteDescription {
    pub sheet: String,
    pub index: usize,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct ColliderDescription {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub offset: Vector2,
}

#[derive(Deserialize, Debug, Clone, Copy, Default)]
#[serde(deny_unknown_fields)]
pub struct RigidBodyDescription {
    #[serde(default)]
    pub velocity: Vector2,
    #[serde(default)]
    pub frozen: bool,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct BallDescription {
    pub speed: f32,
    #[serde(default)]
    pub rest_offset: Vector2,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct BrickDescription {
    pub points: u32,
}

/// Brick layout: each character of `rows` picks a cell type from `legend`;
/// characters missing from the legend are empty cells.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BrickGrid {
    pub offset_x: f32,
    pub offset_y: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    pub rows: Vec<String>,
    pub legend: FxHashMap<char, BrickCell>,
    #[serde(default)]
    pub z_index: i32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BrickCell {
    pub sprite: SpriteDescription,
    pub points: u32,
}

impl BrickGrid {
    /// Iterate over all filled cells with their center positions.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Vector2, &BrickCell)> {
        self.rows.iter().enumerate().flat_map(move |(row, line)| {
            line.chars().enumerate().filter_map(move |(col, ch)| {
                self.legend.get(&ch).map(|cell| {
                    let x = self.offset_x + col as f32 * self.cell_width + self.cell_width * 0.5;
                    let y = self.offset_y + row as f32 * self.cell_height + self.cell_height * 0.5;
                    (Vector2::new(x, y), cell)
                })
            })
        })
    }
}

/// Load the entity description at `path` (relative to the configured assets
/// directory) and spawn its entities tagged with `group`.
pub fn load_entities(
    world: &mut World,
    path: impl AsRef<Path>,
    group: &str,
) -> Result<Vec<Entity>, EngineError> {
    let full_path: PathBuf = match world.get_resource::<GameConfig>() {
        Some(config) => config.asset_path(path.as_ref()),
        None => path.as_ref().to_path_buf(),
    };
    let text = std::fs::read_to_string(&full_path).map_err(|e| EngineError::AssetLoad {
        path: full_path.display().to_string(),
        reason: e.to_string(),
    })?;
    let entities = spawn_document(world, &full_path.display().to_string(), &text, group)?;
    debug!(
        "Loaded {} entities from {} into group '{}'",
        entities.len(),
        full_path.display(),
        group
    );
    Ok(entities)
}

/// Same as [`load_entities`] for an in-memory document.
pub fn load_entities_from_str(
    world: &mut World,
    text: &str,
    group: &str,
) -> Result<Vec<Entity>, EngineError> {
    spawn_document(world, "<inline>", text, group)
}

fn spawn_document(
    world: &mut World,
    source: &str,
    text: &str,
    group: &str,
) -> Result<Vec<Entity>, EngineError> {
    let document: EntitiesDocument =
        serde_json::from_str(text).map_err(|e| EngineError::AssetLoad {
            path: source.to_string(),
            reason: e.to_string(),
        })?;

    let mut spawned = Vec::with_capacity(document.entities.len());
    for description in document.entities.iter() {
        spawned.push(spawn_description(world, description, group));
    }
    for grid in document.grids.iter() {
        let size = BoxCollider::new(grid.cell_width, grid.cell_height);
        for (center, cell) in grid.iter_cells() {
            let entity = world
                .spawn((
                    Group::new(group),
                    MapPosition { pos: center },
                    GlobalTransform2D { position: center },
                    Sprite::new(cell.sprite.sheet.clone(), cell.sprite.index),
                    ZIndex(grid.z_index),
                    size,
                    Brick {
                        points: cell.points,
                    },
                ))
                .id();
            spawned.push(entity);
        }
    }
    Ok(spawned)
}

fn spawn_description(world: &mut World, description: &EntityDescription, group: &str) -> Entity {
    let mut ecmd = world.spawn(Group::new(group));

    if let Some(ui) = &description.ui_transform {
        ecmd.insert(UITransform::new(ui.id.clone(), ui.anchor, ui.offset));
    }
    if let Some(text) = &description.text {
        ecmd.insert(DynamicText::new(
            text.content.clone(),
            text.font_size,
            text.color,
        ));
    }
    if let Some(sprite) = &description.sprite {
        ecmd.insert(Sprite::new(sprite.sheet.clone(), sprite.index));
    }
    if let Some(pos) = description.position {
        ecmd.insert((MapPosition { pos }, GlobalTransform2D { position: pos }));
    }
    if let Some(z) = description.z_index {
        ecmd.insert(ZIndex(z));
    }
    if let Some(collider) = description.collider {
        ecmd.insert(BoxCollider::new(collider.width, collider.height).with_offset(collider.offset));
    }
    if let Some(rb) = description.rigid_body {
        ecmd.insert(RigidBody {
            velocity: rb.velocity,
            frozen: rb.frozen,
        });
    }
    if description.hidden {
        ecmd.insert(Hidden);
    }
    if description.paddle {
        ecmd.insert(Paddle);
    }
    if let Some(ball) = description.ball {
        ecmd.insert(Ball {
            speed: ball.speed,
            rest_offset: ball.rest_offset,
        });
    }
    if let Some(brick) = description.brick {
        ecmd.insert(Brick {
            points: brick.points,
        });
    }
    ecmd.id()
}
