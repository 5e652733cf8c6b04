//! Ball lifecycle and motion.
//!
//! A ball waits on the paddle with a frozen [`RigidBody`] and a [`StuckTo`]
//! component. Pressing confirm launches it upward at a random angle; from
//! then on [`movement_system`] integrates its velocity until the collision
//! system sticks it back after a lost life.

use std::f32::consts::FRAC_PI_3;

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::breakout::Ball;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::stuckto::StuckTo;
use crate::math::Vector2;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputAction, InputState};
use crate::resources::worldtime::WorldTime;

/// Largest launch deviation from straight up, in radians.
pub const MAX_LAUNCH_ANGLE: f32 = FRAC_PI_3;

/// Freeze `entity` and glue it to `paddle` at the ball's rest offset.
pub fn stick_ball(
    commands: &mut Commands,
    entity: Entity,
    ball: &Ball,
    rb: &mut RigidBody,
    paddle: Entity,
) {
    rb.freeze();
    commands
        .entity(entity)
        .insert(StuckTo::new(paddle).with_offset(ball.rest_offset));
}

/// Velocity pointing `angle` radians away from straight up (screen y grows
/// downward).
pub fn upward_velocity(speed: f32, angle: f32) -> Vector2 {
    Vector2::new(speed * angle.sin(), -speed * angle.cos())
}

/// Release stuck balls when confirm is pressed.
///
/// A ball with no speed of its own uses `GameConfig::ball_speed`.
pub fn ball_launch_system(
    mut commands: Commands,
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut balls: Query<(Entity, &Ball, &mut RigidBody), With<StuckTo>>,
) {
    if !input.just_pressed(InputAction::Confirm) {
        return;
    }
    for (entity, ball, mut rb) in balls.iter_mut() {
        let speed = if ball.speed > 0.0 {
            ball.speed
        } else {
            config.ball_speed
        };
        let angle = (fastrand::f32() * 2.0 - 1.0) * MAX_LAUNCH_ANGLE;
        rb.launch(upward_velocity(speed, angle));
        commands.entity(entity).remove::<StuckTo>();
        debug!("Ball {:?} launched at {:.2} rad", entity, angle);
    }
}

/// Integrate velocities into positions. Frozen bodies stay put.
pub fn movement_system(time: Res<WorldTime>, mut query: Query<(&mut MapPosition, &RigidBody)>) {
    for (mut position, rigidbody) in query.iter_mut() {
        if rigidbody.frozen {
            continue;
        }
        position.pos += rigidbody.velocity * time.delta;
    }
}
