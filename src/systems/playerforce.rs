//! Input-to-force mapping for the player.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! adds this tick's discrete force to the player's
//! [`RigidBody`](crate::components::rigidbody::RigidBody). Input only acts
//! while the player is grounded: airborne ticks get no input force at all.
//!
//! - The direction keys each add a constant horizontal force.
//! - The slingshot: pressing the pointer button anchors a gesture, every
//!   grounded tick with the button down counts towards the hold, and
//!   releasing launches the player opposite the drag. Releasing always ends
//!   the gesture, even in the air.

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

use crate::components::circlecollider::CircleCollider;
use crate::components::inputcontrolled::PlayerControlled;
use crate::components::rigidbody::RigidBody;
use crate::components::slingshot::SlingshotCharge;
use crate::components::tags::Player;
use crate::resources::input::InputState;

pub fn player_force_system(
    mut query: Query<
        (
            &PlayerControlled,
            &CircleCollider,
            &mut RigidBody,
            &mut SlingshotCharge,
        ),
        With<Player>,
    >,
    input: Res<InputState>,
) {
    let pointer = input.pointer;

    for (controlled, collider, mut body, mut sling) in query.iter_mut() {
        if !collider.on_floor {
            if pointer.just_released {
                sling.cancel();
            }
            continue;
        }

        if input.move_left.active {
            body.add_force(Vector2 {
                x: -controlled.move_force,
                y: 0.0,
            });
        }
        if input.move_right.active {
            body.add_force(Vector2 {
                x: controlled.move_force,
                y: 0.0,
            });
        }

        if pointer.just_pressed {
            sling.begin(pointer.position);
        }
        if pointer.down {
            sling.hold();
        }
        if pointer.just_released {
            let held = sling.held_ticks;
            if let Some(force) =
                sling.release(pointer.position, controlled.sling_gain, controlled.sling_max_hold)
            {
                debug!(
                    "Slingshot release after {} ticks: force ({:.1}, {:.1})",
                    held, force.x, force.y
                );
                body.add_force(force);
            }
        }
    }
}
