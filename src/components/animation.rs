//! Player animation state.
//!
//! The player spritesheet has five 64x64 frames: 0..=2 form the idle loop,
//! 2 doubles as the charging pose, 3 faces right and 4 faces left. The
//! [`PlayerAnimation`] component keeps the idle cycle timer; the
//! [`player_animation`](crate::systems::animation::player_animation) system
//! writes the chosen frame into the [`Sprite`](super::sprite::Sprite).

use bevy_ecs::prelude::Component;

pub const IDLE_FRAME_COUNT: u32 = 3;
pub const CHARGE_FRAME: u32 = 2;
pub const FACING_RIGHT_FRAME: u32 = 3;
pub const FACING_LEFT_FRAME: u32 = 4;

#[derive(Component, Clone, Copy, Debug)]
pub struct PlayerAnimation {
    /// Seconds each idle frame stays on screen.
    pub idle_frame_time: f32,
    pub elapsed_time: f32,
    pub idle_index: u32,
}

impl Default for PlayerAnimation {
    fn default() -> Self {
        Self {
            idle_frame_time: 0.2,
            elapsed_time: 0.0,
            idle_index: 0,
        }
    }
}

impl PlayerAnimation {
    /// Advance the idle cycle by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.elapsed_time += delta;
        if self.elapsed_time > self.idle_frame_time {
            self.idle_index = (self.idle_index + 1) % IDLE_FRAME_COUNT;
            self.elapsed_time = 0.0;
        }
    }
}
