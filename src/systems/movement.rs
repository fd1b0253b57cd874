//! Per-tick player integration.
//!
//! Folds the pending force into velocity, applies gravity and air drag while
//! airborne or floor friction while grounded, clamps velocity, and finally
//! advances position by `velocity * step`.

use bevy_ecs::prelude::*;

use crate::components::circlecollider::CircleCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::tags::Player;
use crate::resources::fixedtimestep::FixedTimestep;
use crate::resources::gameconfig::GameConfig;

/// Airborne gravity and drag are applied at twice the per-tick rate used for
/// floor friction.
pub const AIRBORNE_SCALE: f32 = 2.0;

pub fn motion_integration_system(
    mut query: Query<(&mut MapPosition, &CircleCollider, &mut RigidBody), With<Player>>,
    config: Res<GameConfig>,
    fixed: Res<FixedTimestep>,
) {
    let physics = &config.physics;
    let step = fixed.step();

    for (mut position, collider, mut body) in query.iter_mut() {
        body.apply_pending_force();

        if !collider.on_floor {
            body.velocity.y += physics.gravity * step * AIRBORNE_SCALE;
            let drag = body.velocity.x * physics.drag * step * AIRBORNE_SCALE;
            body.velocity.x -= drag;
        } else {
            if body.velocity.y > 0.0 {
                body.velocity.y = 0.0;
            }
            // Friction only once the player is not moving up off the floor.
            if body.velocity.y == 0.0 {
                let friction = body.velocity.x * physics.deceleration * step;
                body.velocity.x -= friction;
            }
        }

        body.clamp_velocity(
            physics.max_horizontal_velocity,
            physics.max_vertical_velocity,
        );

        position.pos = position.pos + body.velocity.scale_by(step);
    }
}
