//! Render passes.
//!
//! These are exclusive functions rather than scheduled systems: they need the
//! frame's [`RenderSurface`], which is not a resource. States call
//! [`render_frame`] after their schedule ran, so UI layout and transform
//! resolution are always up to date when drawing.
//!
//! World sprites are drawn first (sorted by [`ZIndex`]), then UI sprites and
//! texts on top. Entities marked [`Hidden`] are skipped.

use bevy_ecs::prelude::*;

use crate::backend::RenderSurface;
use crate::components::dynamictext::DynamicText;
use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::hidden::Hidden;
use crate::components::sprite::Sprite;
use crate::components::uitransform::UITransform;
use crate::components::zindex::ZIndex;
use crate::error::EngineError;
use crate::math::{Color, Vector2};
use crate::resources::spritesheets::SpriteSheetStore;

pub const CLEAR_COLOR: Color = Color::BLACK;

/// Clear the surface and draw world sprites then UI.
pub fn render_frame(world: &mut World, surface: &mut dyn RenderSurface) -> Result<(), EngineError> {
    surface.clear(CLEAR_COLOR);
    render_sprites(world, surface)?;
    render_ui(world, surface)
}

/// Draw every visible world sprite, lowest [`ZIndex`] first.
pub fn render_sprites(
    world: &mut World,
    surface: &mut dyn RenderSurface,
) -> Result<(), EngineError> {
    let mut to_draw: Vec<(Sprite, Vector2, ZIndex)> = {
        let mut q = world.query_filtered::<(&Sprite, &GlobalTransform2D, Option<&ZIndex>), Without<Hidden>>();
        q.iter(world)
            .map(|(s, gt, z)| (s.clone(), gt.position, z.copied().unwrap_or_default()))
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z)| *z);

    let sheets = world.resource::<SpriteSheetStore>();
    for (sprite, pos, _z) in to_draw.iter() {
        let (texture, src) = sheets.frame(&sprite.sheet, sprite.index)?;
        surface.draw_sprite(texture, src, *pos);
    }
    Ok(())
}

/// Draw visible UI sprites (cursors, icons) and texts at their resolved
/// screen positions.
pub fn render_ui(world: &mut World, surface: &mut dyn RenderSurface) -> Result<(), EngineError> {
    let icons: Vec<(Sprite, Vector2)> = {
        let mut q = world.query_filtered::<(&Sprite, &UITransform), Without<Hidden>>();
        q.iter(world)
            .map(|(s, ui)| (s.clone(), ui.screen_pos))
            .collect()
    };
    let sheets = world.resource::<SpriteSheetStore>();
    for (sprite, pos) in icons.iter() {
        let (texture, src) = sheets.frame(&sprite.sheet, sprite.index)?;
        surface.draw_sprite(texture, src, *pos);
    }

    let mut texts = world.query_filtered::<(&DynamicText, &UITransform), Without<Hidden>>();
    for (text, ui) in texts.iter(world) {
        surface.draw_text(&text.content, ui.screen_pos, text.font_size, text.color);
    }
    Ok(())
}
