//! Game over screen.
//!
//! Shows the final score and offers restart, main menu and exit.

use bevy_ecs::prelude::*;

use super::gameplay::Gameplay;
use super::mainmenu::MainMenu;
use super::menu::{Menu, menu_schedule, refresh_menu_entities, update_menu};
use super::{GameState, Transition};
use crate::backend::RenderSurface;
use crate::components::dynamictext::DynamicText;
use crate::components::uitransform::UITransform;
use crate::entities::dispose_entities;
use crate::error::EngineError;
use crate::loader::load_entities;
use crate::resources::game::GameResources;
use crate::systems::render::render_frame;

pub const GAME_OVER_ENTITIES: &str = "metadata/entities/ui/game_over_menu.json";
pub const GAME_OVER_IDS: [&str; 3] = ["restart", "main_menu", "exit"];
pub const GAME_OVER_CURSOR_IDS: [&str; 3] = ["cursor_restart", "cursor_main_menu", "cursor_exit"];
/// UI identifier of the final score text.
pub const FINAL_SCORE_TEXT_ID: &str = "final_score";

pub struct GameOver {
    selection: usize,
    entities: Vec<Entity>,
    schedule: Schedule,
}

impl Default for GameOver {
    fn default() -> Self {
        Self::new()
    }
}

impl GameOver {
    pub fn new() -> Self {
        Self {
            selection: 0,
            entities: Vec::new(),
            schedule: menu_schedule(),
        }
    }

    fn write_final_score(&self, world: &mut World) {
        let score = world
            .get_resource::<GameResources>()
            .map_or(0, |game| game.score);
        for entity in self.entities.iter().copied() {
            if let Ok(mut ecmd) = world.get_entity_mut(entity)
                && ecmd
                    .get::<UITransform>()
                    .is_some_and(|ui| ui.id == FINAL_SCORE_TEXT_ID)
                && let Some(mut text) = ecmd.get_mut::<DynamicText>()
            {
                text.set_content(format!("SCORE: {}", score));
            }
        }
    }
}

impl Menu for GameOver {
    fn selection(&self) -> usize {
        self.selection
    }

    fn set_selection(&mut self, selection: usize) {
        self.selection = selection;
    }

    fn confirm_selection(&self) -> Result<Transition, EngineError> {
        match self.selection {
            0 => Ok(Transition::switch(Gameplay::new())),
            1 => Ok(Transition::switch(MainMenu::new())),
            2 => Ok(Transition::Quit),
            selection => Err(EngineError::InvalidMenuSelection {
                state: self.name(),
                selection,
            }),
        }
    }

    fn menu_ids(&self) -> &'static [&'static str] {
        &GAME_OVER_IDS
    }

    fn cursor_menu_ids(&self) -> &'static [&'static str] {
        &GAME_OVER_CURSOR_IDS
    }

    fn menu_entities(&self) -> &[Entity] {
        &self.entities
    }
}

impl GameState for GameOver {
    fn name(&self) -> &'static str {
        "GameOver"
    }

    fn on_start(&mut self, world: &mut World) -> Result<(), EngineError> {
        self.entities = load_entities(world, GAME_OVER_ENTITIES, self.name())?;
        self.selection = 0;
        self.write_final_score(world);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_maps_selection() {
        let mut menu = GameOver::new();
        assert_eq!(menu.confirm_selection().unwrap().state_names(), ["Gameplay"]);
        assert!(matches!(menu.confirm_selection(), Ok(Transition::Switch(_))));
        menu.set_selection(1);
        assert_eq!(menu.confirm_selection().unwrap().state_names(), ["MainMenu"]);
        menu.set_selection(2);
        assert!(matches!(menu.confirm_selection(), Ok(Transition::Quit)));
    }

    #[test]
    fn out_of_range_selection_is_fatal() {
        let mut menu = GameOver::new();
        menu.set_selection(3);
        assert!(matches!(
            menu.confirm_selection(),
            Err(EngineError::InvalidMenuSelection {
                state: "GameOver",
                selection: 3
            })
        ));
    }
}
