//! The state stack.
//!
//! [`StateMachine::update`] runs the top state for one frame, turns a pending
//! [`StateEvent::GameOver`] into a switch to [`GameOver`] unless the state
//! asked to quit, then applies the resulting [`Transition`] firing the
//! lifecycle hooks in stack order.

use bevy_ecs::prelude::World;
use log::{debug, info};

use super::gameover::GameOver;
use super::{FrameStatus, GameState, StateList, Transition};
use crate::backend::RenderSurface;
use crate::error::EngineError;
use crate::resources::game::{GameResources, StateEvent};

#[derive(Default)]
pub struct StateMachine {
    stack: Vec<Box<dyn GameState>>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the initial state.
    pub fn start(
        &mut self,
        world: &mut World,
        initial: Box<dyn GameState>,
    ) -> Result<(), EngineError> {
        info!("Starting with state {}", initial.name());
        let mut states = StateList::new();
        states.push(initial);
        self.push_states(world, states)
    }

    /// Number of stacked states.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Name of the state that updates next frame.
    pub fn top_name(&self) -> Option<&'static str> {
        self.stack.last().map(|s| s.name())
    }

    /// Stacked state names, bottom first.
    pub fn names(&self) -> Vec<&'static str> {
        self.stack.iter().map(|s| s.name()).collect()
    }

    /// Update the top state and apply its transition.
    pub fn update(
        &mut self,
        world: &mut World,
        surface: &mut dyn RenderSurface,
    ) -> Result<FrameStatus, EngineError> {
        let Some(top) = self.stack.last_mut() else {
            return Ok(FrameStatus::Quit);
        };
        let mut transition = top.update(world, surface)?;

        // The event is taken every frame so it never outlives the frame that
        // raised it. Game over wins over anything but Quit.
        let event = match world.get_resource_mut::<GameResources>() {
            Some(mut game) if game.state_event != StateEvent::None => game.take_state_event(),
            _ => StateEvent::None,
        };
        match event {
            StateEvent::GameOver if !matches!(transition, Transition::Quit) => {
                if !transition.is_none() {
                    debug!("Game over overrides {:?}", transition);
                }
                transition = Transition::switch(GameOver::new());
            }
            _ => {}
        }

        self.apply(world, transition)
    }

    /// Apply `transition` to the stack.
    ///
    /// Returns [`FrameStatus::Quit`] once the stack is empty.
    pub fn apply(
        &mut self,
        world: &mut World,
        transition: Transition,
    ) -> Result<FrameStatus, EngineError> {
        if !transition.is_none() {
            info!("Transition {:?} from {:?}", transition, self.top_name());
        }
        match transition {
            Transition::None => {}
            Transition::Push(states) => {
                self.check_not_empty(&states, "push")?;
                if let Some(top) = self.stack.last_mut() {
                    debug!("Pausing {}", top.name());
                    top.on_pause(world)?;
                }
                self.push_states(world, states)?;
            }
            Transition::Pop => {
                if let Some(mut top) = self.stack.pop() {
                    debug!("Stopping {}", top.name());
                    top.on_stop(world)?;
                }
                if let Some(top) = self.stack.last_mut() {
                    debug!("Resuming {}", top.name());
                    top.on_resume(world)?;
                }
            }
            Transition::Switch(states) => {
                self.check_not_empty(&states, "switch")?;
                if let Some(mut top) = self.stack.pop() {
                    debug!("Stopping {}", top.name());
                    top.on_stop(world)?;
                }
                self.push_states(world, states)?;
            }
            Transition::Replace(states) => {
                self.check_not_empty(&states, "replace")?;
                self.stop_all(world)?;
                self.push_states(world, states)?;
            }
            Transition::Quit => {
                self.stop_all(world)?;
            }
        }

        if self.stack.is_empty() {
            info!("State stack empty, quitting");
            Ok(FrameStatus::Quit)
        } else {
            Ok(FrameStatus::Running)
        }
    }

    /// Stop every stacked state, top to bottom.
    pub fn stop_all(&mut self, world: &mut World) -> Result<(), EngineError> {
        while let Some(mut state) = self.stack.pop() {
            debug!("Stopping {}", state.name());
            state.on_stop(world)?;
        }
        Ok(())
    }

    /// Every new state is started; all but the last are then paused since
    /// another state sits above them.
    fn push_states(&mut self, world: &mut World, states: StateList) -> Result<(), EngineError> {
        let count = states.len();
        for (i, mut state) in states.into_iter().enumerate() {
            debug!("Starting {}", state.name());
            state.on_start(world)?;
            if i + 1 < count {
                debug!("Pausing {}", state.name());
                state.on_pause(world)?;
            }
            self.stack.push(state);
        }
        Ok(())
    }

    fn check_not_empty(&self, states: &StateList, kind: &'static str) -> Result<(), EngineError> {
        if states.is_empty() {
            return Err(EngineError::EmptyTransition(kind));
        }
        Ok(())
    }
}
