use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::uitransform::UITransform;
use crate::resources::game::GameResources;

/// UI identifier of the score counter.
pub const SCORE_TEXT_ID: &str = "score";

/// Refresh the `"score"` text whenever the resource bag changed.
pub fn score_display_system(
    game: Res<GameResources>,
    mut texts: Query<(&mut DynamicText, &UITransform)>,
) {
    if game.is_changed() {
        write_score_display(game.score, &mut texts);
    }
}

pub fn write_score_display(score: u32, texts: &mut Query<(&mut DynamicText, &UITransform)>) {
    for (mut text, ui) in texts.iter_mut() {
        if ui.id == SCORE_TEXT_ID {
            text.set_content(format!("SCORE: {}", score));
        }
    }
}
