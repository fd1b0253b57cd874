//! Time systems.
//!
//! - [`update_world_time`] advances the per-frame
//!   [`WorldTime`](crate::resources::worldtime::WorldTime) used by
//!   presentation (animation, HUD).
//! - [`run_fixed_ticks`] feeds the frame delta into the
//!   [`FixedTimestep`](crate::resources::fixedtimestep::FixedTimestep)
//!   accumulator and runs the tick schedule once per whole step.
use bevy_ecs::prelude::*;

use crate::resources::fixedtimestep::FixedTimestep;
use crate::resources::worldtime::WorldTime;

/// Store the last frame's duration in seconds on the `WorldTime` resource.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().delta = dt;
}

/// Run `schedule` once for every whole step in the accumulator after adding
/// `dt`. Returns the number of ticks run; the remainder carries over.
pub fn run_fixed_ticks(world: &mut World, schedule: &mut Schedule, dt: f32) -> u32 {
    world.resource_mut::<FixedTimestep>().accumulate(dt);

    let mut ran = 0;
    while world.resource_mut::<FixedTimestep>().consume_tick() {
        schedule.run(world);
        ran += 1;
    }
    ran
}

/// Run exactly `ticks` simulation steps regardless of wall-clock time.
pub fn run_ticks(world: &mut World, schedule: &mut Schedule, ticks: u32) {
    for _ in 0..ticks {
        let step = world.resource::<FixedTimestep>().step();
        run_fixed_ticks(world, schedule, step);
    }
}
