//! Input tuning for the player-controlled entity.
//!
//! [`PlayerControlled`] tells the force mapper in
//! [`crate::systems::playerforce`] how strongly the directional keys push and
//! how the slingshot gesture converts a drag into a launch force.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerControlled {
    /// Horizontal force added per tick while a direction key is held.
    pub move_force: f32,
    /// Multiplier applied to the slingshot release force.
    pub sling_gain: f32,
    /// Held ticks after which the slingshot force stops growing.
    pub sling_max_hold: u32,
}

impl PlayerControlled {
    pub fn new(move_force: f32, sling_gain: f32, sling_max_hold: u32) -> Self {
        Self {
            move_force,
            sling_gain,
            sling_max_hold,
        }
    }
}
