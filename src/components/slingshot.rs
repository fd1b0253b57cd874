//! Press-hold-release slingshot bookkeeping.
//!
//! The gesture spans several ticks, so its state lives on the player entity:
//! the pointer position where the hold started and how many grounded ticks the
//! button has been held since. The release force points away from the drag
//! (pulling back launches forward) and scales with the held tick count,
//! saturating at the configured maximum.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SlingshotCharge {
    /// Pointer position when the hold started; `None` when no gesture is active.
    pub anchor: Option<Vector2>,
    /// Grounded ticks the button has been held down.
    pub held_ticks: u32,
}

impl SlingshotCharge {
    pub fn is_charging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Start a new gesture at `pointer`, discarding any previous one.
    pub fn begin(&mut self, pointer: Vector2) {
        self.anchor = Some(pointer);
        self.held_ticks = 0;
    }

    /// Count one more held tick. No-op without an active gesture.
    pub fn hold(&mut self) {
        if self.anchor.is_some() {
            self.held_ticks = self.held_ticks.saturating_add(1);
        }
    }

    /// End the gesture at `pointer` and return the launch force.
    ///
    /// Returns `None` if no gesture was active.
    pub fn release(&mut self, pointer: Vector2, gain: f32, max_hold_ticks: u32) -> Option<Vector2> {
        let anchor = self.anchor.take()?;
        let held = self.held_ticks.min(max_hold_ticks) as f32;
        self.held_ticks = 0;
        let drag = pointer - anchor;
        Some(Vector2::new(-drag.x * held * gain, -drag.y * held * gain))
    }

    /// Drop the gesture without producing a force.
    pub fn cancel(&mut self) {
        self.anchor = None;
        self.held_ticks = 0;
    }
}
