//! Window boundary checks for the player.
//!
//! Falling past the bottom edge is death: the player goes back to the spawn
//! point at rest and counts as grounded for the rest of the tick. The top,
//! left and right edges are walls: position is clamped and the velocity
//! component pushing into the wall is dropped. Each edge is checked
//! independently of the others and of platform contacts.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::slingshot::SlingshotCharge;
use crate::components::tags::Player;
use crate::events::gamestate::PlayerDiedEvent;
use crate::resources::gameconfig::GameConfig;

pub fn screen_bounds_system(
    mut players: Query<
        (
            &mut MapPosition,
            &BoxCollider,
            &mut CircleCollider,
            &mut RigidBody,
            Option<&mut SlingshotCharge>,
        ),
        With<Player>,
    >,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    let window = config.window_bounds();

    for (mut position, bounds, mut collider, mut body, sling) in players.iter_mut() {
        // Bottom edge
        if position.pos.y + bounds.height() >= window.y {
            position.pos = config.spawn_position;
            collider.on_floor = true;
            body.halt();
            if let Some(mut sling) = sling {
                sling.cancel();
            }
            commands.trigger(PlayerDiedEvent {});
        }

        // Top edge
        if position.pos.y <= 0.0 {
            body.velocity.y = 0.0;
            position.pos.y = 0.0;
        }

        // Right edge
        if position.pos.x + bounds.width() >= window.x {
            if body.velocity.x > 0.0 {
                body.velocity.x = 0.0;
            }
            position.pos.x = window.x - bounds.width();
        }

        // Left edge
        if position.pos.x <= 0.0 {
            if body.velocity.x < 0.0 {
                body.velocity.x = 0.0;
            }
            position.pos.x = 0.0;
        }
    }
}
