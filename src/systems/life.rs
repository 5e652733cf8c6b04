//! Life tracking.
//!
//! [`life_system`] is the only consumer of
//! [`GameEvents::life_events`](crate::resources::game::GameEvents). Each frame
//! it drains the whole queue, so every event is processed at most once.

use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::uitransform::UITransform;
use crate::resources::game::{GameResources, StateEvent};

/// UI identifier of the lives counter.
pub const LIFE_TEXT_ID: &str = "life";

/// Consume queued life events.
///
/// - every event removes one life, in queue order
/// - the `"life"` text (if any) shows the remaining lives
/// - reaching zero requests game over once, after the whole batch
/// - the queue is always left empty
pub fn life_system(
    mut game: ResMut<GameResources>,
    mut texts: Query<(&mut DynamicText, &UITransform)>,
) {
    if game.events.life_events.is_empty() {
        return;
    }
    let game = &mut *game;

    for _event in game.events.life_events.drain(..) {
        game.lives -= 1;
    }

    write_life_display(game.lives, &mut texts);

    if game.lives <= 0 {
        game.state_event = StateEvent::GameOver;
    }
}

/// Write `lives` into the `"life"` text, if such an entity exists.
pub fn write_life_display(lives: i32, texts: &mut Query<(&mut DynamicText, &UITransform)>) {
    for (mut text, ui) in texts.iter_mut() {
        if ui.id == LIFE_TEXT_ID {
            text.set_content(format!("LIVES: {}", lives.max(0)));
        }
    }
}
