//! Round reset.
//!
//! Gameplay runs [`start_round_system`] once when it starts. Lives are session
//! data living in the resource bag, so a fresh round resets them here rather
//! than in the state itself.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::breakout::{Ball, Paddle};
use crate::components::dynamictext::DynamicText;
use crate::components::rigidbody::RigidBody;
use crate::components::uitransform::UITransform;
use crate::resources::game::{GameEvents, GameResources, StateEvent};
use crate::resources::gameconfig::GameConfig;
use crate::systems::ball::stick_ball;
use crate::systems::life::write_life_display;
use crate::systems::score::write_score_display;

pub fn start_round_system(
    mut commands: Commands,
    mut game: ResMut<GameResources>,
    config: Res<GameConfig>,
    mut texts: Query<(&mut DynamicText, &UITransform)>,
    mut balls: Query<(Entity, &Ball, &mut RigidBody)>,
    paddles: Query<Entity, With<Paddle>>,
) {
    game.lives = config.lives;
    game.score = 0;
    game.events = GameEvents::default();
    game.state_event = StateEvent::None;

    write_life_display(game.lives, &mut texts);
    write_score_display(game.score, &mut texts);

    if let Some(paddle) = paddles.iter().next() {
        for (entity, ball, mut rb) in balls.iter_mut() {
            stick_ball(&mut commands, entity, ball, &mut rb, paddle);
        }
    }
    debug!("New round with {} lives", game.lives);
}
