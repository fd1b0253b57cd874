//! Fixed-timestep accumulator.
//!
//! Rendered frames arrive with variable durations. [`FixedTimestep`] banks
//! each frame's delta and hands out whole ticks of exactly `step` seconds, so
//! the simulation advances the same way regardless of frame rate. Zero, one
//! or many ticks may be due after a frame; the leftover fraction simply waits
//! for the next frame. There is no interpolation of the remainder and no cap
//! on how many ticks a long frame produces.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    /// Duration of one tick in seconds.
    step: f32,
    /// Real time banked but not yet consumed by a tick.
    accumulator: f32,
    /// Ticks run since startup.
    ticks: u64,
}

impl FixedTimestep {
    /// Create a driver for `tick_rate` ticks per second.
    ///
    /// The rate is expected to be validated beforehand (see
    /// [`GameConfig::validate`](super::gameconfig::GameConfig::validate)).
    pub fn from_rate(tick_rate: f32) -> Self {
        Self::new(1.0 / tick_rate)
    }

    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Bank the delta time of a rendered frame. Negative deltas are ignored.
    pub fn accumulate(&mut self, dt: f32) {
        self.accumulator += dt.max(0.0);
    }

    /// Consume one tick from the accumulator if a whole tick is banked.
    pub fn consume_tick(&mut self) -> bool {
        if self.accumulator >= self.step {
            self.accumulator -= self.step;
            self.ticks += 1;
            true
        } else {
            false
        }
    }
}
