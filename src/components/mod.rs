//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components are plain data; systems give them behavior.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider for collision detection
//! - [`breakout`] – gameplay tags: paddle, ball and brick
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`globaltransform2d`] – resolved world-space position written by the transform system
//! - [`group`] – tag naming the state that owns an entity
//! - [`hidden`] – marker that removes an entity from rendering
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`sprite`] – reference to a frame of a loaded sprite sheet
//! - [`stuckto`] – glue an entity to another (ball waiting on the paddle)
//! - [`uitransform`] – identified, anchored screen-space placement for UI
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod boxcollider;
pub mod breakout;
pub mod dynamictext;
pub mod globaltransform2d;
pub mod group;
pub mod hidden;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;
pub mod stuckto;
pub mod uitransform;
pub mod zindex;
