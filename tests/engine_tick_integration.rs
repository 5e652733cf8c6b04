//! Gameplay tick integration tests: the gameplay systems chained the way the
//! gameplay state runs them, over a hand-built world.
//!
//! ```sh
//! cargo test --test engine_tick_integration
//! ```

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;

use arkanoid::components::boxcollider::BoxCollider;
use arkanoid::components::breakout::{Ball, Brick, Paddle};
use arkanoid::components::dynamictext::DynamicText;
use arkanoid::components::globaltransform2d::GlobalTransform2D;
use arkanoid::components::mapposition::MapPosition;
use arkanoid::components::rigidbody::RigidBody;
use arkanoid::components::stuckto::StuckTo;
use arkanoid::components::uitransform::{Anchor, UITransform};
use arkanoid::math::{Color, Vector2};
use arkanoid::resources::game::{GameResources, StateEvent};
use arkanoid::resources::gameconfig::GameConfig;
use arkanoid::resources::input::{InputAction, InputState};
use arkanoid::resources::screensize::ScreenSize;
use arkanoid::resources::worldtime::WorldTime;
use arkanoid::systems::ball::{ball_launch_system, movement_system};
use arkanoid::systems::collision::collision_system;
use arkanoid::systems::life::life_system;
use arkanoid::systems::paddle::paddle_control_system;
use arkanoid::systems::round::start_round_system;
use arkanoid::systems::score::score_display_system;
use arkanoid::systems::time::update_world_time;
use arkanoid::systems::transform::{propagate_transforms, stuck_to_entity_system};
use arkanoid::systems::ui::ui_system;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

struct Scene {
    world: World,
    schedule: Schedule,
    paddle: Entity,
    ball: Entity,
    life_text: Entity,
    score_text: Entity,
}

fn make_scene(lives: i32) -> Scene {
    let mut world = World::new();
    let mut config = GameConfig::new();
    config.lives = lives;
    world.insert_resource(config);
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize { w: 200, h: 100 });
    world.insert_resource(InputState::default());
    world.insert_resource(GameResources::new(99));

    let paddle = world
        .spawn((Paddle, MapPosition::new(100.0, 90.0), BoxCollider::new(40.0, 6.0)))
        .id();
    let ball = world
        .spawn((
            Ball {
                speed: 60.0,
                rest_offset: Vector2::new(0.0, -7.0),
            },
            MapPosition::new(0.0, 0.0),
            RigidBody::new(),
            BoxCollider::new(4.0, 4.0),
        ))
        .id();
    let life_text = world
        .spawn((
            DynamicText::new("", 16.0, Color::WHITE),
            UITransform::new("life", Anchor::TopLeft, Vector2::new(4.0, 4.0)),
        ))
        .id();
    let score_text = world
        .spawn((
            DynamicText::new("", 16.0, Color::WHITE),
            UITransform::new("score", Anchor::TopRight, Vector2::new(-40.0, 4.0)),
        ))
        .id();

    world.run_system_once(start_round_system).unwrap();

    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            paddle_control_system,
            ball_launch_system,
            movement_system,
            collision_system,
            life_system,
            score_display_system,
            ui_system,
            stuck_to_entity_system,
            propagate_transforms,
        )
            .chain(),
    );

    Scene {
        world,
        schedule,
        paddle,
        ball,
        life_text,
        score_text,
    }
}

fn tick(scene: &mut Scene, dt: f32) {
    update_world_time(&mut scene.world, dt);
    scene.schedule.run(&mut scene.world);
    scene.world.resource_mut::<InputState>().clear();
}

fn text(scene: &Scene, entity: Entity) -> String {
    scene.world.get::<DynamicText>(entity).unwrap().content.clone()
}

#[test]
fn round_start_resets_bag_and_sticks_ball() {
    let mut scene = make_scene(3);
    {
        let game = scene.world.resource::<GameResources>();
        assert_eq!(game.lives, 3);
        assert_eq!(game.score, 0);
        assert_eq!(game.state_event, StateEvent::None);
    }
    assert_eq!(text(&scene, scene.life_text), "LIVES: 3");
    assert_eq!(text(&scene, scene.score_text), "SCORE: 0");
    assert!(scene.world.get::<StuckTo>(scene.ball).is_some());

    tick(&mut scene, 0.016);
    let pos = scene.world.get::<GlobalTransform2D>(scene.ball).unwrap().position;
    assert!(approx_eq(pos.x, 100.0));
    assert!(approx_eq(pos.y, 83.0));
}

#[test]
fn stuck_ball_rides_the_paddle() {
    let mut scene = make_scene(3);
    scene.world.resource_mut::<InputState>().press(InputAction::Right);
    tick(&mut scene, 0.1);

    let paddle_x = scene.world.get::<MapPosition>(scene.paddle).unwrap().x();
    let ball_x = scene.world.get::<MapPosition>(scene.ball).unwrap().x();
    assert!(paddle_x > 100.0);
    assert!(approx_eq(paddle_x, ball_x));
}

#[test]
fn launched_ball_moves_up() {
    let mut scene = make_scene(3);
    tick(&mut scene, 0.016);
    scene.world.resource_mut::<InputState>().press(InputAction::Confirm);
    tick(&mut scene, 0.016);

    assert!(scene.world.get::<StuckTo>(scene.ball).is_none());
    let y0 = scene.world.get::<MapPosition>(scene.ball).unwrap().y();
    tick(&mut scene, 0.1);
    let y1 = scene.world.get::<MapPosition>(scene.ball).unwrap().y();
    assert!(y1 < y0);
}

#[test]
fn losing_every_ball_ends_in_game_over() {
    let mut scene = make_scene(2);

    for round in 0..2 {
        // drop the ball below the screen
        {
            let mut entity = scene.world.entity_mut(scene.ball);
            entity.remove::<StuckTo>();
            entity.get_mut::<MapPosition>().unwrap().pos = Vector2::new(100.0, 150.0);
            entity.get_mut::<RigidBody>().unwrap().launch(Vector2::new(0.0, 10.0));
        }
        tick(&mut scene, 0.016);

        let game = scene.world.resource::<GameResources>();
        assert_eq!(game.lives, 1 - round);
        assert!(game.events.life_events.is_empty());
        assert!(scene.world.get::<StuckTo>(scene.ball).is_some());
    }

    assert_eq!(text(&scene, scene.life_text), "LIVES: 0");
    assert_eq!(
        scene.world.resource::<GameResources>().state_event,
        StateEvent::GameOver
    );
}

#[test]
fn hitting_a_brick_scores_and_removes_it() {
    let mut scene = make_scene(3);
    let brick = scene
        .world
        .spawn((
            Brick { points: 25 },
            MapPosition::new(100.0, 20.0),
            BoxCollider::new(20.0, 8.0),
        ))
        .id();
    {
        let mut entity = scene.world.entity_mut(scene.ball);
        entity.remove::<StuckTo>();
        entity.get_mut::<MapPosition>().unwrap().pos = Vector2::new(100.0, 25.0);
        entity.get_mut::<RigidBody>().unwrap().launch(Vector2::new(0.0, -60.0));
    }

    tick(&mut scene, 0.016);

    assert!(scene.world.get_entity(brick).is_err());
    assert_eq!(scene.world.resource::<GameResources>().score, 25);
    assert_eq!(text(&scene, scene.score_text), "SCORE: 25");
    assert!(scene.world.get::<RigidBody>(scene.ball).unwrap().velocity.y > 0.0);
}
