//! Life-loss event.
//!
//! The collision system queues one [`LifeEvent`] each time the ball leaves
//! the bottom of the playfield. [`life_system`](crate::systems::life::life_system)
//! drains the queue once per frame.

/// One life lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LifeEvent {}
