//! Circular contact envelope of the player.
//!
//! The circle is inscribed in the player's sprite box: its center is the box
//! center and its radius is half the box width. `on_floor` is recomputed from
//! scratch every tick by the contact system and is never carried over.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use super::boxcollider::BoxCollider;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CircleCollider {
    /// Offset of the circle center from the entity's top-left position.
    pub offset: Vector2,
    pub radius: f32,
    /// True once a top landing was confirmed during the current tick.
    pub on_floor: bool,
}

impl CircleCollider {
    pub fn new(offset: Vector2, radius: f32) -> Self {
        Self {
            offset,
            radius,
            on_floor: false,
        }
    }

    /// Circle inscribed in the given box.
    pub fn inscribed(bounds: &BoxCollider) -> Self {
        Self::new(
            Vector2::new(bounds.width() * 0.5, bounds.height() * 0.5),
            bounds.width() * 0.5,
        )
    }

    /// World-space center for an entity placed at `position`.
    pub fn center(&self, position: Vector2) -> Vector2 {
        position + self.offset
    }

    /// Circle vs axis-aligned rectangle touch test.
    ///
    /// Touching means the distance from the circle center to the closest point
    /// of the rectangle is at most the radius, so grazing contact counts.
    pub fn touches(&self, position: Vector2, rect: &BoxCollider, rect_position: Vector2) -> bool {
        let center = self.center(position);
        let closest = rect.closest_point(rect_position, center);
        (center - closest).length() <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_circle() -> CircleCollider {
        CircleCollider::inscribed(&BoxCollider::new(64.0, 64.0))
    }

    #[test]
    fn test_inscribed_circle_is_centered_with_half_width_radius() {
        let c = player_circle();
        assert_eq!(c.radius, 32.0);
        assert_eq!(c.offset.x, 32.0);
        assert_eq!(c.offset.y, 32.0);
        assert!(!c.on_floor);
    }

    #[test]
    fn test_resting_exactly_on_top_face_touches() {
        let c = player_circle();
        let platform = BoxCollider::new(150.0, 25.0);
        // bottom edge of the player box sits on y = 650
        assert!(c.touches(Vector2::new(20.0, 586.0), &platform, Vector2::new(0.0, 650.0)));
    }

    #[test]
    fn test_hovering_above_top_face_does_not_touch() {
        let c = player_circle();
        let platform = BoxCollider::new(150.0, 25.0);
        assert!(!c.touches(Vector2::new(20.0, 585.0), &platform, Vector2::new(0.0, 650.0)));
    }

    #[test]
    fn test_corner_uses_euclidean_distance() {
        let c = player_circle();
        let platform = BoxCollider::new(100.0, 25.0);
        // center at (-22, 618): dx = 22, dy = 32, distance ~38.8 > 32
        assert!(!c.touches(Vector2::new(-54.0, 586.0), &platform, Vector2::new(0.0, 650.0)));
    }
}
