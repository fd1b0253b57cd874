//! F11 debug overlay toggle.
//!
//! [`SwitchDebugEvent`] is raised by the input system on the key press. The
//! observer flips the presence of [`DebugMode`] and, when switching on, logs
//! where the player is so the overlay can be matched against the log.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::circlecollider::CircleCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::tags::Player;
use crate::resources::debugmode::DebugMode;
use crate::resources::fixedtimestep::FixedTimestep;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
    fixed: Res<FixedTimestep>,
    players: Query<(&MapPosition, &RigidBody, &CircleCollider), With<Player>>,
) {
    if let Some(mode) = debug_mode {
        commands.remove_resource::<DebugMode>();
        info!(
            "Debug overlay off after {} ticks",
            fixed.ticks().saturating_sub(mode.since_tick)
        );
        return;
    }

    commands.insert_resource(DebugMode {
        since_tick: fixed.ticks(),
    });
    info!("Debug overlay on at tick {}", fixed.ticks());
    for (position, body, collider) in players.iter() {
        debug!(
            "Player at ({:.1}, {:.1}) velocity ({:.1}, {:.1}) on_floor: {}",
            position.pos.x, position.pos.y, body.velocity.x, body.velocity.y, collider.on_floor
        );
    }
}
