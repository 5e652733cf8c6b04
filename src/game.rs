//! Game session.
//!
//! [`Game`] owns the ECS [`World`] (entity store plus every resource) and the
//! [`StateMachine`]. It is the single owner of the session's resource bag:
//! the bag is inserted once in [`init_world`] and dropped with the game.
//!
//! Each [`Game::frame`] runs: input polling → time update → state machine
//! (top state update + transition).

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::backend::{InputSource, RenderSurface};
use crate::error::EngineError;
use crate::resources::game::GameResources;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritesheets::SpriteSheetStore;
use crate::resources::worldtime::WorldTime;
use crate::states::machine::StateMachine;
use crate::states::mainmenu::MainMenu;
use crate::states::{FrameStatus, GameState};
use crate::systems::input::update_input_state;
use crate::systems::time::update_world_time;

/// Sprite sheet table, relative to the assets directory.
pub const SPRITESHEETS_PATH: &str = "metadata/spritesheets/spritesheets.json";

/// Build a world holding every session resource.
pub fn init_world(config: GameConfig) -> Result<World, EngineError> {
    let sheets = SpriteSheetStore::load_from_file(&config.asset_path(SPRITESHEETS_PATH))?;
    info!("Loaded {} sprite sheets", sheets.sheets.len());

    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: config.render_width as i32,
        h: config.render_height as i32,
    });
    world.insert_resource(config.controls.clone());
    world.insert_resource(InputState::default());
    world.insert_resource(sheets);
    world.insert_resource(GameResources::new(config.lives));
    world.insert_resource(config);
    Ok(world)
}

pub struct Game {
    world: World,
    machine: StateMachine,
}

impl Game {
    /// New session starting at the main menu.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_state(config, Box::new(MainMenu::new()))
    }

    /// New session starting at `initial`.
    pub fn with_state(
        config: GameConfig,
        initial: Box<dyn GameState>,
    ) -> Result<Self, EngineError> {
        let mut world = init_world(config)?;
        let mut machine = StateMachine::new();
        machine.start(&mut world, initial)?;
        Ok(Self { world, machine })
    }

    /// Advance one frame. `dt` is the unscaled delta in seconds.
    pub fn frame(
        &mut self,
        input: &dyn InputSource,
        surface: &mut dyn RenderSurface,
        dt: f32,
    ) -> Result<FrameStatus, EngineError> {
        update_input_state(&mut self.world, input);
        update_world_time(&mut self.world, dt);
        let status = self.machine.update(&mut self.world, surface)?;
        self.world.clear_trackers();
        Ok(status)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    /// Stop whatever is still stacked.
    pub fn shutdown(&mut self) -> Result<(), EngineError> {
        if !self.machine.is_empty() {
            warn!("Shutting down with {} states stacked", self.machine.len());
        }
        self.machine.stop_all(&mut self.world)
    }
}
