//! Per-session game data not related to any entity.
//!
//! [`GameResources`] is the resource bag shared by all states of a session.
//! It is inserted once by [`Game::new`](crate::game::Game::new) and outlives
//! every state. Systems mutate it; the state machine only reads and clears
//! [`GameResources::state_event`].

use bevy_ecs::prelude::Resource;

use crate::events::life::LifeEvent;

/// Default number of lives for a fresh round.
pub const DEFAULT_LIVES: i32 = 3;

/// Cross-system request for the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateEvent {
    #[default]
    None,
    GameOver,
}

/// Queued domain events, drained once per frame by their systems.
#[derive(Debug, Clone, Default)]
pub struct GameEvents {
    pub life_events: Vec<LifeEvent>,
}

#[derive(Resource, Debug, Clone)]
pub struct GameResources {
    pub lives: i32,
    pub score: u32,
    pub events: GameEvents,
    pub state_event: StateEvent,
}

impl Default for GameResources {
    fn default() -> Self {
        Self::new(DEFAULT_LIVES)
    }
}

impl GameResources {
    pub fn new(lives: i32) -> Self {
        Self {
            lives,
            score: 0,
            events: GameEvents::default(),
            state_event: StateEvent::None,
        }
    }

    /// Take the pending state request, leaving [`StateEvent::None`].
    pub fn take_state_event(&mut self) -> StateEvent {
        std::mem::take(&mut self.state_event)
    }
}
