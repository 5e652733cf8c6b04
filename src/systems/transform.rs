//! Transform resolution.
//!
//! Runs **after** every system that moves entities and **before** rendering:
//! 1. [`stuck_to_entity_system`] moves glued entities onto their targets.
//! 2. [`propagate_transforms`] writes [`GlobalTransform2D`] for every
//!    positioned entity, composing [`ChildOf`] hierarchies.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;

use crate::components::globaltransform2d::GlobalTransform2D;
use crate::components::mapposition::MapPosition;
use crate::components::stuckto::StuckTo;

/// Updates positions of entities with `StuckTo` to follow their targets.
pub fn stuck_to_entity_system(
    mut followers: Query<(&StuckTo, &mut MapPosition)>,
    targets: Query<&MapPosition, Without<StuckTo>>,
) {
    for (stuck_to, mut follower_pos) in followers.iter_mut() {
        if let Ok(target_pos) = targets.get(stuck_to.target) {
            follower_pos.pos.x = target_pos.pos.x + stuck_to.offset.x;
            if stuck_to.follow_y {
                follower_pos.pos.y = target_pos.pos.y + stuck_to.offset.y;
            }
        }
    }
}

/// Root entities mirror their `MapPosition`; children add theirs to the
/// parent's resolved position. Entities missing a `GlobalTransform2D` get one
/// through deferred commands.
pub fn propagate_transforms(
    roots: Query<(Entity, &MapPosition, Option<&Children>), Without<ChildOf>>,
    children_query: Query<(&MapPosition, Option<&Children>), With<ChildOf>>,
    mut globals: Query<&mut GlobalTransform2D>,
    mut commands: Commands,
) {
    for (root_entity, pos, children) in roots.iter() {
        let root_gt = GlobalTransform2D { position: pos.pos };
        write_global(root_entity, root_gt, &mut globals, &mut commands);

        if let Some(children) = children {
            propagate_children(
                &root_gt,
                children,
                &children_query,
                &mut globals,
                &mut commands,
            );
        }
    }
}

fn propagate_children(
    parent_gt: &GlobalTransform2D,
    children: &Children,
    children_query: &Query<(&MapPosition, Option<&Children>), With<ChildOf>>,
    globals: &mut Query<&mut GlobalTransform2D>,
    commands: &mut Commands,
) {
    for child_entity in children.iter() {
        let Ok((pos, maybe_grandchildren)) = children_query.get(child_entity) else {
            continue;
        };
        let child_gt = GlobalTransform2D {
            position: parent_gt.position + pos.pos,
        };
        write_global(child_entity, child_gt, globals, commands);

        if let Some(grandchildren) = maybe_grandchildren {
            propagate_children(&child_gt, grandchildren, children_query, globals, commands);
        }
    }
}

fn write_global(
    entity: Entity,
    gt: GlobalTransform2D,
    globals: &mut Query<&mut GlobalTransform2D>,
    commands: &mut Commands,
) {
    if let Ok(mut current) = globals.get_mut(entity) {
        if *current != gt {
            *current = gt;
        }
    } else {
        commands.entity(entity).insert(gt);
    }
}
