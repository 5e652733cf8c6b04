use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::breakout::Paddle;
use crate::components::mapposition::MapPosition;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputAction, InputState};
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Move the paddle horizontally from left/right input, keeping its collider
/// inside the screen.
pub fn paddle_control_system(
    input: Res<InputState>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    mut paddles: Query<(&mut MapPosition, Option<&BoxCollider>), With<Paddle>>,
) {
    let mut dir = 0.0;
    if input.is_active(InputAction::Left) {
        dir -= 1.0;
    }
    if input.is_active(InputAction::Right) {
        dir += 1.0;
    }
    if dir == 0.0 {
        return;
    }

    for (mut pos, collider) in paddles.iter_mut() {
        let half = collider.map_or(0.0, |c| c.size.x * 0.5);
        let max_x = (screen.w as f32 - half).max(half);
        let x = pos.pos.x + dir * config.paddle_speed * time.delta;
        pos.pos.x = x.clamp(half, max_x);
    }
}
