//! Entity store helpers.
//!
//! The store itself is the `bevy_ecs` [`World`]: entities are generational
//! handles, so disposing one never shifts or invalidates the others. These
//! helpers add the disposal rules states rely on.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::group::Group;
use crate::error::EngineError;

/// Despawn every entity in `entities`.
///
/// All handles are checked before anything is removed: an unknown or
/// already-disposed handle means a lifecycle bug and fails the whole call
/// with [`EngineError::UntrackedEntity`], leaving the store untouched.
pub fn dispose_entities(world: &mut World, entities: &[Entity]) -> Result<(), EngineError> {
    if let Some(missing) = entities
        .iter()
        .find(|entity| world.get_entity(**entity).is_err())
    {
        return Err(EngineError::UntrackedEntity(*missing));
    }
    for entity in entities {
        if world.try_despawn(*entity).is_err() {
            // a duplicate handle in the slice was already despawned above
            return Err(EngineError::UntrackedEntity(*entity));
        }
    }
    debug!("Disposed {} entities", entities.len());
    Ok(())
}

/// Despawn every entity tagged with `group`, returning how many were removed.
pub fn dispose_group(world: &mut World, group: &str) -> usize {
    let entities: Vec<Entity> = entities_in_group(world, group);
    for entity in entities.iter() {
        let _ = world.try_despawn(*entity);
    }
    debug!("Disposed {} entities of group '{}'", entities.len(), group);
    entities.len()
}

/// Live entities tagged with `group`.
pub fn entities_in_group(world: &mut World, group: &str) -> Vec<Entity> {
    let mut query = world.query::<(Entity, &Group)>();
    query
        .iter(world)
        .filter(|(_, g)| g.name() == group)
        .map(|(entity, _)| entity)
        .collect()
}
