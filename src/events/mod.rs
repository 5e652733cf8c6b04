//! Domain events exchanged between systems.
//!
//! Events here are queued into [`GameEvents`](crate::resources::game::GameEvents)
//! inside the resource bag and consumed exactly once per frame by the system
//! that owns them.
//!
//! Submodules:
//! - [`life`] – a life was lost (ball left the playfield)
pub mod life;
