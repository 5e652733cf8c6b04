//! Input polling.
//!
//! [`update_input_state`] reads the frame's [`InputSource`] through the
//! [`Controls`] mapping and writes the result into [`InputState`]. An action
//! is active when any of its bound codes is.
use bevy_ecs::prelude::*;

use crate::backend::InputSource;
use crate::resources::controls::Controls;
use crate::resources::input::{BoolState, InputAction, InputState};

pub fn update_input_state(world: &mut World, source: &dyn InputSource) {
    let states: Vec<(InputAction, BoolState)> = {
        let controls = world.resource::<Controls>();
        InputAction::ALL
            .iter()
            .map(|action| {
                let codes = controls.bindings(*action);
                let active = codes.iter().any(|c| source.is_down(c));
                let just_pressed = codes.iter().any(|c| source.is_pressed(c));
                let just_released = !active && codes.iter().any(|c| source.is_released(c));
                (
                    *action,
                    BoolState {
                        active,
                        just_pressed,
                        just_released,
                    },
                )
            })
            .collect()
    };

    let mut input = world.resource_mut::<InputState>();
    for (action, state) in states {
        *input.get_mut(action) = state;
    }
}
