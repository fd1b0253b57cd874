//! Axis-aligned rectangle extent.
//!
//! [`BoxCollider`] is the size attribute of an entity: the rectangle that
//! starts at the entity's [`MapPosition`](super::mapposition::MapPosition)
//! (top-left) and extends `size` to the right and down. Platforms and the
//! goal are tested against it; the player's box defines where its collision
//! circle sits.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Returns (min, max) of the rectangle for a given top-left position.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        (position, position + self.size)
    }

    /// Horizontal line splitting the rectangle into its upper and lower halves.
    pub fn mid_line_y(&self, position: Vector2) -> f32 {
        position.y + self.size.y * 0.5
    }

    /// Point of the rectangle closest to `point`, found by clamping each axis
    /// to the rectangle bounds. Returns `point` itself when it lies inside.
    pub fn closest_point(&self, position: Vector2, point: Vector2) -> Vector2 {
        let (min, max) = self.aabb(position);
        Vector2::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
    }
}
