//! Ball collisions.
//!
//! One pass per frame, after movement:
//! - side and top walls reflect the ball back into the playfield
//! - a ball leaving the bottom costs a life: a [`LifeEvent`] is queued and
//!   the ball is stuck back onto the paddle
//! - the paddle bounces the ball up, steering it by where it hit
//! - bricks reflect the ball on the axis of least penetration, are disposed
//!   through `Commands` and add their points to the score
//!
//! Balls that are frozen (resting on the paddle) are ignored.

use bevy_ecs::prelude::*;
use log::debug;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::breakout::{Ball, Brick, Paddle};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::life::LifeEvent;
use crate::resources::game::GameResources;
use crate::resources::screensize::ScreenSize;
use crate::systems::ball::{MAX_LAUNCH_ANGLE, stick_ball, upward_velocity};

pub fn collision_system(
    mut commands: Commands,
    screen: Res<ScreenSize>,
    mut game: ResMut<GameResources>,
    mut balls: Query<(Entity, &Ball, &mut MapPosition, &mut RigidBody, &BoxCollider)>,
    paddles: Query<(Entity, &MapPosition, &BoxCollider), (With<Paddle>, Without<Ball>)>,
    bricks: Query<(Entity, &Brick, &MapPosition, &BoxCollider), (Without<Ball>, Without<Paddle>)>,
) {
    let width = screen.w as f32;
    let height = screen.h as f32;
    let paddle = paddles.iter().next();
    let mut destroyed: FxHashSet<Entity> = FxHashSet::default();

    for (ball_entity, ball, mut pos, mut rb, collider) in balls.iter_mut() {
        if rb.frozen {
            continue;
        }
        let (min, max) = collider.aabb(pos.pos);

        // walls
        if min.x < 0.0 && rb.velocity.x < 0.0 {
            rb.velocity.x = -rb.velocity.x;
            pos.pos.x -= min.x;
        } else if max.x > width && rb.velocity.x > 0.0 {
            rb.velocity.x = -rb.velocity.x;
            pos.pos.x -= max.x - width;
        }
        if min.y < 0.0 && rb.velocity.y < 0.0 {
            rb.velocity.y = -rb.velocity.y;
            pos.pos.y -= min.y;
        }

        // bottom
        if min.y > height {
            game.events.life_events.push(LifeEvent {});
            match paddle {
                Some((paddle_entity, _, _)) => {
                    stick_ball(&mut commands, ball_entity, ball, &mut rb, paddle_entity);
                }
                None => rb.freeze(),
            }
            debug!("Ball {:?} lost", ball_entity);
            continue;
        }

        // paddle
        if let Some((_, paddle_pos, paddle_collider)) = paddle
            && rb.velocity.y > 0.0
            && collider.overlaps(pos.pos, paddle_collider, paddle_pos.pos)
        {
            let half = (paddle_collider.size.x * 0.5).max(f32::EPSILON);
            let hit = ((pos.pos.x - paddle_pos.pos.x) / half).clamp(-1.0, 1.0);
            let speed = rb.velocity.length();
            rb.velocity = upward_velocity(speed, hit * MAX_LAUNCH_ANGLE);
            let (paddle_min, _) = paddle_collider.aabb(paddle_pos.pos);
            pos.pos.y = paddle_min.y - collider.size.y * 0.5 - collider.offset.y;
            continue;
        }

        // bricks, one per ball per frame
        for (brick_entity, brick, brick_pos, brick_collider) in bricks.iter() {
            if destroyed.contains(&brick_entity) {
                continue;
            }
            let Some(depth) = collider.penetration(pos.pos, brick_collider, brick_pos.pos) else {
                continue;
            };
            if depth.x < depth.y {
                rb.velocity.x = if pos.pos.x < brick_pos.pos.x {
                    -rb.velocity.x.abs()
                } else {
                    rb.velocity.x.abs()
                };
            } else {
                rb.velocity.y = if pos.pos.y < brick_pos.pos.y {
                    -rb.velocity.y.abs()
                } else {
                    rb.velocity.y.abs()
                };
            }
            destroyed.insert(brick_entity);
            game.score = game.score.saturating_add(brick.points);
            commands.entity(brick_entity).try_despawn();
            debug!("Brick {:?} destroyed (+{})", brick_entity, brick.points);
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::stuckto::StuckTo;
    use crate::math::Vector2;
    use bevy_ecs::system::RunSystemOnce;

    fn world() -> World {
        let mut world = World::new();
        world.insert_resource(ScreenSize { w: 200, h: 100 });
        world.insert_resource(GameResources::new(3));
        world
    }

    fn spawn_ball(world: &mut World, x: f32, y: f32, velocity: Vector2) -> Entity {
        world
            .spawn((
                Ball {
                    speed: 50.0,
                    rest_offset: Vector2::new(0.0, -8.0),
                },
                MapPosition::new(x, y),
                RigidBody::new().with_velocity(velocity),
                BoxCollider::new(4.0, 4.0),
            ))
            .id()
    }

    #[test]
    fn side_wall_reflects() {
        let mut world = world();
        let b = spawn_ball(&mut world, 1.0, 50.0, Vector2::new(-10.0, 5.0));
        world.run_system_once(collision_system).unwrap();
        let rb = world.get::<RigidBody>(b).unwrap();
        assert_eq!(rb.velocity, Vector2::new(10.0, 5.0));
        assert_eq!(world.get::<MapPosition>(b).unwrap().x(), 2.0);
    }

    #[test]
    fn brick_hit_scores_and_despawns() {
        let mut world = world();
        let brick = world
            .spawn((
                Brick { points: 10 },
                MapPosition::new(100.0, 20.0),
                BoxCollider::new(20.0, 8.0),
            ))
            .id();
        let b = spawn_ball(&mut world, 100.0, 25.0, Vector2::new(0.0, -10.0));

        world.run_system_once(collision_system).unwrap();

        assert!(world.get_entity(brick).is_err());
        assert_eq!(world.resource::<GameResources>().score, 10);
        assert_eq!(world.get::<RigidBody>(b).unwrap().velocity.y, 10.0);
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let mut world = world();
        world.resource_mut::<GameResources>().score = u32::MAX - 5;
        world.spawn((
            Brick { points: 10 },
            MapPosition::new(100.0, 20.0),
            BoxCollider::new(20.0, 8.0),
        ));
        spawn_ball(&mut world, 100.0, 25.0, Vector2::new(0.0, -10.0));

        world.run_system_once(collision_system).unwrap();

        assert_eq!(world.resource::<GameResources>().score, u32::MAX);
    }

    #[test]
    fn ball_below_screen_queues_one_life_event_and_sticks() {
        let mut world = world();
        let paddle = world
            .spawn((Paddle, MapPosition::new(100.0, 90.0), BoxCollider::new(30.0, 6.0)))
            .id();
        let b = spawn_ball(&mut world, 100.0, 110.0, Vector2::new(3.0, 10.0));

        world.run_system_once(collision_system).unwrap();

        assert_eq!(world.resource::<GameResources>().events.life_events.len(), 1);
        let rb = world.get::<RigidBody>(b).unwrap();
        assert!(rb.frozen);
        assert_eq!(world.get::<StuckTo>(b).unwrap().target, paddle);

        // frozen balls are left alone afterwards
        world.run_system_once(collision_system).unwrap();
        assert_eq!(world.resource::<GameResources>().events.life_events.len(), 1);
    }

    #[test]
    fn paddle_bounces_up() {
        let mut world = world();
        world.spawn((Paddle, MapPosition::new(100.0, 90.0), BoxCollider::new(30.0, 6.0)));
        let b = spawn_ball(&mut world, 110.0, 87.0, Vector2::new(0.0, 20.0));

        world.run_system_once(collision_system).unwrap();

        let v = world.get::<RigidBody>(b).unwrap().velocity;
        assert!(v.y < 0.0);
        assert!(v.x > 0.0);
        assert!((v.length() - 20.0).abs() < 1e-3);
    }
}
