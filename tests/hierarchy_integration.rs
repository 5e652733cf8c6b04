//! Integration tests for transform resolution: stuck entities and
//! parent-child propagation into `GlobalTransform2D`.
//!
//! ```sh
//! cargo test --test hierarchy_integration
//! ```

use bevy_ecs::hierarchy::ChildOf;
use bevy_ecs::prelude::*;

use arkanoid::components::globaltransform2d::GlobalTransform2D;
use arkanoid::components::mapposition::MapPosition;
use arkanoid::components::stuckto::StuckTo;
use arkanoid::math::Vector2;
use arkanoid::systems::transform::{propagate_transforms, stuck_to_entity_system};

fn tick_transforms(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((stuck_to_entity_system, propagate_transforms).chain());
    schedule.run(world);
}

#[test]
fn root_global_mirrors_position() {
    let mut world = World::new();
    let root = world.spawn(MapPosition::new(100.0, 50.0)).id();

    tick_transforms(&mut world);

    let gt = world.get::<GlobalTransform2D>(root).unwrap();
    assert_eq!(gt.position, Vector2::new(100.0, 50.0));
}

#[test]
fn children_compose_with_parent() {
    let mut world = World::new();
    let root = world
        .spawn((MapPosition::new(100.0, 50.0), GlobalTransform2D::default()))
        .id();
    let child = world
        .spawn((
            MapPosition::new(10.0, -5.0),
            GlobalTransform2D::default(),
            ChildOf(root),
        ))
        .id();
    let grandchild = world
        .spawn((MapPosition::new(1.0, 1.0), ChildOf(child)))
        .id();

    tick_transforms(&mut world);

    assert_eq!(
        world.get::<GlobalTransform2D>(child).unwrap().position,
        Vector2::new(110.0, 45.0)
    );
    assert_eq!(
        world.get::<GlobalTransform2D>(grandchild).unwrap().position,
        Vector2::new(111.0, 46.0)
    );
}

#[test]
fn stuck_entity_follows_target_then_resolves() {
    let mut world = World::new();
    let paddle = world.spawn(MapPosition::new(320.0, 330.0)).id();
    let ball = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            StuckTo::new(paddle).with_offset(Vector2::new(0.0, -8.0)),
        ))
        .id();

    tick_transforms(&mut world);
    assert_eq!(
        world.get::<GlobalTransform2D>(ball).unwrap().position,
        Vector2::new(320.0, 322.0)
    );

    world.get_mut::<MapPosition>(paddle).unwrap().translate(15.0, 0.0);
    tick_transforms(&mut world);
    assert_eq!(
        world.get::<MapPosition>(ball).unwrap().pos,
        Vector2::new(335.0, 322.0)
    );
}

#[test]
fn follow_y_false_keeps_vertical_position() {
    let mut world = World::new();
    let target = world.spawn(MapPosition::new(50.0, 50.0)).id();
    let mut stuck = StuckTo::new(target);
    stuck.follow_y = false;
    let follower = world.spawn((MapPosition::new(0.0, 7.0), stuck)).id();

    tick_transforms(&mut world);

    assert_eq!(
        world.get::<MapPosition>(follower).unwrap().pos,
        Vector2::new(50.0, 7.0)
    );
}

#[test]
fn stuck_to_despawned_target_stays_put() {
    let mut world = World::new();
    let target = world.spawn(MapPosition::new(50.0, 50.0)).id();
    let follower = world
        .spawn((MapPosition::new(1.0, 2.0), StuckTo::new(target)))
        .id();
    assert!(world.try_despawn(target).is_ok());

    tick_transforms(&mut world);

    assert_eq!(
        world.get::<MapPosition>(follower).unwrap().pos,
        Vector2::new(1.0, 2.0)
    );
}
