//! Player frame selection.
//!
//! Runs once per rendered frame, after the simulation ticks, and picks the
//! spritesheet frame from what the player is doing: charging the slingshot,
//! walking, flying sideways, or resting (idle loop).
use bevy_ecs::prelude::*;

use crate::components::animation::{
    CHARGE_FRAME, FACING_LEFT_FRAME, FACING_RIGHT_FRAME, PlayerAnimation,
};
use crate::components::circlecollider::CircleCollider;
use crate::components::rigidbody::RigidBody;
use crate::components::slingshot::SlingshotCharge;
use crate::components::sprite::Sprite;
use crate::components::tags::Player;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Speed below which the player counts as resting.
const STILL_EPSILON: f32 = 0.1;

pub fn player_animation(
    mut query: Query<
        (
            &mut Sprite,
            &mut PlayerAnimation,
            &RigidBody,
            &CircleCollider,
            &SlingshotCharge,
        ),
        With<Player>,
    >,
    time: Res<WorldTime>,
    input: Res<InputState>,
) {
    for (mut sprite, mut anim, body, collider, sling) in query.iter_mut() {
        anim.advance(time.delta);

        let frame = if sling.is_charging() && input.pointer.down {
            Some(CHARGE_FRAME)
        } else if collider.on_floor && input.move_left.active {
            Some(FACING_LEFT_FRAME)
        } else if collider.on_floor && input.move_right.active {
            Some(FACING_RIGHT_FRAME)
        } else if !collider.on_floor && body.velocity.x < 0.0 {
            Some(FACING_LEFT_FRAME)
        } else if !collider.on_floor && body.velocity.x > 0.0 {
            Some(FACING_RIGHT_FRAME)
        } else if body.is_still(STILL_EPSILON) {
            Some(anim.idle_index)
        } else {
            None
        };

        if let Some(frame) = frame {
            if sprite.frame != frame {
                sprite.frame = frame;
            }
        }
    }
}
