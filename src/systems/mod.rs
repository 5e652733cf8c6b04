//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering. States assemble them into ordered schedules.
//!
//! Submodules overview
//! - [`ball`] – launch the ball from the paddle and integrate velocities
//! - [`collision`] – wall, paddle and brick collisions; queues life events
//! - [`input`] – poll an input source into [`crate::resources::input::InputState`]
//! - [`life`] – consume life events, update the lives display, request game over
//! - [`paddle`] – move the paddle from left/right input
//! - [`render`] – draw sprites and UI onto a render surface
//! - [`round`] – reset the resource bag for a fresh gameplay round
//! - [`score`] – keep the score display in sync
//! - [`time`] – update simulation time and delta
//! - [`transform`] – resolve world positions (stuck entities, hierarchies)
//! - [`ui`] – resolve anchored UI positions to screen coordinates

pub mod ball;
pub mod collision;
pub mod input;
pub mod life;
pub mod paddle;
pub mod render;
pub mod round;
pub mod score;
pub mod time;
pub mod transform;
pub mod ui;
