//! Pause overlay.
//!
//! Pushed above gameplay, which stays allocated and is drawn underneath.
//! Cancel resumes like the `resume` item does.

use bevy_ecs::prelude::*;

use super::mainmenu::MainMenu;
use super::menu::{Menu, menu_schedule, refresh_menu_entities, update_menu};
use super::{GameState, Transition};
use crate::backend::RenderSurface;
use crate::entities::dispose_entities;
use crate::error::EngineError;
use crate::loader::load_entities;
use crate::resources::input::{InputAction, InputState};
use crate::systems::render::render_frame;

pub const PAUSE_MENU_ENTITIES: &str = "metadata/entities/ui/pause_menu.json";
pub const PAUSE_MENU_IDS: [&str; 3] = ["resume", "main_menu", "exit"];
pub const PAUSE_MENU_CURSOR_IDS: [&str; 3] = ["cursor_resume", "cursor_main_menu", "cursor_exit"];

pub struct Pause {
    selection: usize,
    entities: Vec<Entity>,
    schedule: Schedule,
}

impl Default for Pause {
    fn default() -> Self {
        Self::new()
    }
}

impl Pause {
    pub fn new() -> Self {
        Self {
            selection: 0,
            entities: Vec::new(),
            schedule: menu_schedule(),
        }
    }
}

impl Menu for Pause {
    fn selection(&self) -> usize {
        self.selection
    }

    fn set_selection(&mut self, selection: usize) {
        self.selection = selection;
    }

    fn confirm_selection(&self) -> Result<Transition, EngineError> {
        match self.selection {
            0 => Ok(Transition::Pop),
            1 => Ok(Transition::replace(MainMenu::new())),
            2 => Ok(Transition::Quit),
            selection => Err(EngineError::InvalidMenuSelection {
                state: self.name(),
                selection,
            }),
        }
    }

    fn menu_ids(&self) -> &'static [&'static str] {
        &PAUSE_MENU_IDS
    }

    fn cursor_menu_ids(&self) -> &'static [&'static str] {
        &PAUSE_MENU_CURSOR_IDS
    }

    fn menu_entities(&self) -> &[Entity] {
        &self.entities
    }
}

impl GameState for Pause {
    fn name(&self) -> &'static str {
        "Pause"
    }

    fn on_start(&mut self, world: &mut World) -> Result<(), EngineError> {
        self.entities = load_entities(world, PAUSE_MENU_ENTITIES, self.name())?;
        self.selection = 0;
        refresh_menu_entities(self, world);
        Ok(())
    }

    fn on_stop(&mut self, world: &mut World) -> Result<(), EngineError> {
        dispose_entities(world, &self.entities)?;
        self.entities.clear();
        Ok(())
    }

    fn update(
        &mut self,
        world: &mut World,
        surface: &mut dyn RenderSurface,
    ) -> Result<Transition, EngineError> {
        let mut transition = update_menu(self, world)?;
        if transition.is_none() && world.resource::<InputState>().just_pressed(InputAction::Cancel) {
            transition = Transition::Pop;
        }
        self.schedule.run(world);
        render_frame(world, surface)?;
        Ok(transition)
    }
}
