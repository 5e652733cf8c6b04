//! The breakout round.
//!
//! Loads the level and HUD, resets the resource bag through
//! [`start_round_system`] and then runs the gameplay schedule every frame:
//!
//! paddle → launch → movement → collision → life → score → ui → stuck_to →
//! propagate, followed by the render passes.
//!
//! Bricks can be destroyed during play, so on stop the state disposes its
//! whole [`Group`](crate::components::group::Group) rather than the list it
//! loaded.

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use log::debug;

use super::pause::Pause;
use super::{GameState, Transition};
use crate::backend::RenderSurface;
use crate::entities::dispose_group;
use crate::error::EngineError;
use crate::loader::load_entities;
use crate::resources::input::{InputAction, InputState};
use crate::systems::ball::{ball_launch_system, movement_system};
use crate::systems::collision::collision_system;
use crate::systems::life::life_system;
use crate::systems::paddle::paddle_control_system;
use crate::systems::render::render_frame;
use crate::systems::round::start_round_system;
use crate::systems::score::score_display_system;
use crate::systems::transform::{propagate_transforms, stuck_to_entity_system};
use crate::systems::ui::ui_system;

pub const LEVEL_ENTITIES: &str = "metadata/entities/gameplay/level.json";
pub const HUD_ENTITIES: &str = "metadata/entities/gameplay/hud.json";

pub struct Gameplay {
    schedule: Schedule,
}

impl Default for Gameplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Gameplay {
    pub fn new() -> Self {
        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                paddle_control_system,
                ball_launch_system,
                movement_system,
                collision_system,
                life_system,
                score_display_system,
                ui_system,
                stuck_to_entity_system,
                propagate_transforms,
            )
                .chain(),
        );
        Self { schedule }
    }
}

impl GameState for Gameplay {
    fn name(&self) -> &'static str {
        "Gameplay"
    }

    fn on_start(&mut self, world: &mut World) -> Result<(), EngineError> {
        let level = load_entities(world, LEVEL_ENTITIES, self.name())?;
        let hud = load_entities(world, HUD_ENTITIES, self.name())?;
        debug!("Gameplay spawned {} entities", level.len() + hud.len());
        world
            .run_system_once(start_round_system)
            .map_err(|e| EngineError::System(e.to_string()))?;
        Ok(())
    }

    fn on_pause(&mut self, _world: &mut World) -> Result<(), EngineError> {
        debug!("Gameplay paused");
        Ok(())
    }

    fn on_resume(&mut self, _world: &mut World) -> Result<(), EngineError> {
        debug!("Gameplay resumed");
        Ok(())
    }

    fn on_stop(&mut self, world: &mut World) -> Result<(), EngineError> {
        dispose_group(world, self.name());
        Ok(())
    }

    fn update(
        &mut self,
        world: &mut World,
        surface: &mut dyn RenderSurface,
    ) -> Result<Transition, EngineError> {
        if world
            .resource::<InputState>()
            .just_pressed(InputAction::Cancel)
        {
            render_frame(world, surface)?;
            return Ok(Transition::push(Pause::new()));
        }
        self.schedule.run(world);
        render_frame(world, surface)?;
        Ok(Transition::None)
    }
}
