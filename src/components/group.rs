//! Ownership tag.
//!
//! Every entity a state loads is tagged with a [`Group`] carrying the state
//! name, so the state can find (and dispose) its own entities and tests can
//! check that none leak across transitions.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group(pub String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
