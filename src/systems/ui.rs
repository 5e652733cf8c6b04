//! UI layout.
//!
//! Must run before the render passes so UI elements are drawn where the
//! current screen size puts them.

use bevy_ecs::prelude::*;

use crate::components::uitransform::UITransform;
use crate::resources::screensize::ScreenSize;

/// Resolve each [`UITransform`] anchor + offset into `screen_pos`.
pub fn ui_system(screen: Res<ScreenSize>, mut query: Query<&mut UITransform>) {
    let (w, h) = (screen.w as f32, screen.h as f32);
    for mut ui in query.iter_mut() {
        let pos = ui.anchor.origin(w, h) + ui.offset;
        if ui.screen_pos != pos {
            ui.screen_pos = pos;
        }
    }
}
