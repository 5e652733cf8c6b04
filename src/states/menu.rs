//! Menu capability.
//!
//! Menu states keep a selection index into a fixed list of item ids and a
//! parallel list of cursor ids. [`update_menu`] is the shared per-frame
//! logic: it moves the selection with wrap-around, shows the selected cursor
//! and hides the others, highlights the selected item text and turns a
//! confirm press into the state's transition.
//!
//! Only the entities listed by [`Menu::menu_entities`] are touched.

use bevy_ecs::prelude::*;

use super::Transition;
use crate::components::dynamictext::DynamicText;
use crate::components::hidden::Hidden;
use crate::components::uitransform::UITransform;
use crate::error::EngineError;
use crate::math::Color;
use crate::resources::input::{InputAction, InputState};
use crate::systems::transform::{propagate_transforms, stuck_to_entity_system};
use crate::systems::ui::ui_system;

pub const ITEM_COLOR: Color = Color::WHITE;
pub const SELECTED_ITEM_COLOR: Color = Color::YELLOW;

pub trait Menu {
    fn selection(&self) -> usize;
    fn set_selection(&mut self, selection: usize);
    /// Transition for the current selection. An index outside the item list
    /// is a fatal [`EngineError::InvalidMenuSelection`].
    fn confirm_selection(&self) -> Result<Transition, EngineError>;
    fn menu_ids(&self) -> &'static [&'static str];
    /// Cursor entity id per item, same length as [`Menu::menu_ids`].
    fn cursor_menu_ids(&self) -> &'static [&'static str];
    /// Entities this menu owns.
    fn menu_entities(&self) -> &[Entity];
}

/// Next selection for one frame of input, wrapping at both ends.
pub fn step_selection(selection: usize, len: usize, up: bool, down: bool) -> usize {
    if len == 0 {
        return 0;
    }
    let mut selection = selection % len;
    if down {
        selection = (selection + 1) % len;
    }
    if up {
        selection = (selection + len - 1) % len;
    }
    selection
}

pub fn update_menu<M: Menu + ?Sized>(
    menu: &mut M,
    world: &mut World,
) -> Result<Transition, EngineError> {
    let (up, down, confirm) = {
        let input = world.resource::<InputState>();
        (
            input.just_pressed(InputAction::Up),
            input.just_pressed(InputAction::Down),
            input.just_pressed(InputAction::Confirm),
        )
    };

    let selection = step_selection(menu.selection(), menu.menu_ids().len(), up, down);
    if selection != menu.selection() {
        menu.set_selection(selection);
    }

    refresh_menu_entities(menu, world);

    if confirm {
        return menu.confirm_selection();
    }
    Ok(Transition::None)
}

/// Show the selected cursor, hide the rest, highlight the selected item.
pub fn refresh_menu_entities<M: Menu + ?Sized>(menu: &M, world: &mut World) {
    let selection = menu.selection();
    let selected_item = menu.menu_ids().get(selection).copied();
    let selected_cursor = menu.cursor_menu_ids().get(selection).copied();

    for entity in menu.menu_entities().iter().copied() {
        let Ok(mut ecmd) = world.get_entity_mut(entity) else {
            continue;
        };
        let Some(id) = ecmd.get::<UITransform>().map(|ui| ui.id.clone()) else {
            continue;
        };

        if menu.cursor_menu_ids().contains(&id.as_str()) {
            if Some(id.as_str()) == selected_cursor {
                ecmd.remove::<Hidden>();
            } else if !ecmd.contains::<Hidden>() {
                ecmd.insert(Hidden);
            }
        } else if menu.menu_ids().contains(&id.as_str())
            && let Some(mut text) = ecmd.get_mut::<DynamicText>()
        {
            let color = if Some(id.as_str()) == selected_item {
                SELECTED_ITEM_COLOR
            } else {
                ITEM_COLOR
            };
            if text.color != color {
                text.color = color;
            }
        }
    }
}

/// Systems every menu runs before rendering.
pub fn menu_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((ui_system, stuck_to_entity_system, propagate_transforms).chain());
    schedule
}
