//! Title screen: start a new game or leave.

use bevy_ecs::prelude::*;

use super::gameplay::Gameplay;
use super::menu::{Menu, menu_schedule, refresh_menu_entities, update_menu};
use super::{GameState, Transition};
use crate::backend::RenderSurface;
use crate::entities::dispose_entities;
use crate::error::EngineError;
use crate::loader::load_entities;
use crate::systems::render::render_frame;

pub const MAIN_MENU_ENTITIES: &str = "metadata/entities/ui/main_menu.json";
pub const MAIN_MENU_IDS: [&str; 2] = ["new_game", "exit"];
pub const MAIN_MENU_CURSOR_IDS: [&str; 2] = ["cursor_new_game", "cursor_exit"];

pub struct MainMenu {
    selection: usize,
    entities: Vec<Entity>,
    schedule: Schedule,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            selection: 0,
            entities: Vec::new(),
            schedule: menu_schedule(),
        }
    }
}

impl Menu for MainMenu {
    fn selection(&self) -> usize {
        self.selection
    }

    fn set_selection(&mut self, selection: usize) {
        self.selection = selection;
    }

    fn confirm_selection(&self) -> Result<Transition, EngineError> {
        match self.selection {
            0 => Ok(Transition::switch(Gameplay::new())),
            1 => Ok(Transition::Quit),
            selection => Err(EngineError::InvalidMenuSelection {
                state: self.name(),
                selection,
            }),
        }
    }

    fn menu_ids(&self) -> &'static [&'static str] {
        &MAIN_MENU_IDS
    }

    fn cursor_menu_ids(&self) -> &'static [&'static str] {
        &MAIN_MENU_CURSOR_IDS
    }

    fn menu_entities(&self) -> &[Entity] {
        &self.entities
    }
}

impl GameState for MainMenu {
    fn name(&self) -> &'static str {
        "MainMenu"
    }

    fn on_start(&mut self, world: &mut World) -> Result<(), EngineError> {
        self.entities = load_entities(world, MAIN_MENU_ENTITIES, self.name())?;
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
        let transition = update_menu(self, world)?;
        self.schedule.run(world);
        render_frame(world, surface)?;
        Ok(transition)
    }
}
