//! Game states and the stack that drives them.
//!
//! A state owns the entities it loads and a schedule of systems it runs each
//! frame. The [`machine::StateMachine`] keeps a stack of states, updates only
//! the top one and applies the [`Transition`] it returns.
//!
//! Submodules overview
//! - [`machine`] – the state stack and transition rules
//! - [`menu`] – selection handling shared by menu states
//! - [`mainmenu`], [`gameplay`], [`pause`], [`gameover`] – the concrete states

use std::fmt;

use bevy_ecs::prelude::World;
use smallvec::SmallVec;

use crate::backend::RenderSurface;
use crate::error::EngineError;

pub mod gameover;
pub mod gameplay;
pub mod machine;
pub mod mainmenu;
pub mod menu;
pub mod pause;

/// Lifecycle and per-frame contract of a state.
///
/// `on_start` runs once when the state is pushed and `on_stop` once when it
/// leaves the stack. `on_pause`/`on_resume` bracket the time another state
/// sits above it; a paused state keeps its entities untouched.
pub trait GameState {
    fn name(&self) -> &'static str;

    fn on_start(&mut self, world: &mut World) -> Result<(), EngineError>;

    fn on_pause(&mut self, _world: &mut World) -> Result<(), EngineError> {
        Ok(())
    }

    fn on_resume(&mut self, _world: &mut World) -> Result<(), EngineError> {
        Ok(())
    }

    fn on_stop(&mut self, world: &mut World) -> Result<(), EngineError>;

    /// Run one frame and say what should happen to the stack.
    fn update(
        &mut self,
        world: &mut World,
        surface: &mut dyn RenderSurface,
    ) -> Result<Transition, EngineError>;
}

/// States carried by a transition, bottom first.
pub type StateList = SmallVec<[Box<dyn GameState>; 1]>;

/// Requested change to the state stack.
pub enum Transition {
    None,
    /// Pause the top and push the given states.
    Push(StateList),
    /// Stop the top and resume the one below.
    Pop,
    /// Stop the top and put the given states in its place.
    Switch(StateList),
    /// Stop every stacked state and push the given states.
    Replace(StateList),
    /// Stop every stacked state and end the run.
    Quit,
}

impl Transition {
    pub fn push(state: impl GameState + 'static) -> Self {
        Transition::Push(single(state))
    }

    pub fn switch(state: impl GameState + 'static) -> Self {
        Transition::Switch(single(state))
    }

    pub fn replace(state: impl GameState + 'static) -> Self {
        Transition::Replace(single(state))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Transition::None)
    }

    /// Names of the states this transition brings in, bottom first.
    pub fn state_names(&self) -> Vec<&'static str> {
        match self {
            Transition::Push(states) | Transition::Switch(states) | Transition::Replace(states) => {
                states.iter().map(|s| s.name()).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn single(state: impl GameState + 'static) -> StateList {
    let mut list = StateList::new();
    list.push(Box::new(state));
    list
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::None => write!(f, "None"),
            Transition::Push(_) => write!(f, "Push({:?})", self.state_names()),
            Transition::Pop => write!(f, "Pop"),
            Transition::Switch(_) => write!(f, "Switch({:?})", self.state_names()),
            Transition::Replace(_) => write!(f, "Replace({:?})", self.state_names()),
            Transition::Quit => write!(f, "Quit"),
        }
    }
}

/// Result of one machine update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    Quit,
}
