use bevy_ecs::prelude::Component;

use crate::math::Vector2;

/// Axis-aligned box collider, centered on the entity position plus `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let center = position + self.offset;
        let half = Vector2::new(self.size.x.abs() * 0.5, self.size.y.abs() * 0.5);
        (center - half, center + half)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Penetration depth on each axis when overlapping, `None` otherwise.
    ///
    /// The smaller axis tells the collision system which velocity component
    /// to reflect.
    pub fn penetration(
        &self,
        position: Vector2,
        other: &Self,
        other_position: Vector2,
    ) -> Option<Vector2> {
        if !self.overlaps(position, other, other_position) {
            return None;
        }
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        let dx = (max_a.x - min_b.x).min(max_b.x - min_a.x);
        let dy = (max_a.y - min_b.y).min(max_b.y - min_a.y);
        Some(Vector2::new(dx, dy))
    }
}
