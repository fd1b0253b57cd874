//! Debug overlay toggle.
//!
//! While this resource is present the renderer outlines the player's
//! collision circle and every platform/goal rectangle and prints tick
//! counters. Remove it to disable the overlay.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebugMode {
    /// Simulation tick count when the overlay was switched on.
    pub since_tick: u64,
}
