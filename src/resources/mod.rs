//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world once per
//! session and accessed by systems during execution.
//!
//! Overview
//! - `controls` – mapping from logical actions to physical input codes
//! - `game` – the per-session resource bag: lives, queued events, state requests
//! - `gameconfig` – settings loaded from the INI configuration file
//! - `input` – per-frame state of the logical actions
//! - `screensize` – render resolution in pixels
//! - `spritesheets` – sprite sheet table keyed by name
//! - `worldtime` – simulation time and delta
pub mod controls;
pub mod game;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod spritesheets;
pub mod worldtime;
