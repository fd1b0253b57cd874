//! World-space position component.
//!
//! [`MapPosition`] stores the top-left corner of an entity's bounding box in
//! window pixels. Only the motion integrator and the death respawn move the
//! player; platform and goal positions never change after setup.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
