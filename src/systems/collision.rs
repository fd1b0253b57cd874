//! Player contact detection and response.
//!
//! - [`platform_contact_system`] starts every tick by clearing the player's
//!   `on_floor` flag, then tests the player's circle against every platform
//!   rectangle in creation order. Every touching platform is handled, not
//!   just the first: a touch from above is a landing, anything else is a side
//!   contact that nudges the player's horizontal velocity.
//! - [`goal_contact_system`] runs the same circle test against the goal.
//!
//! Scoring is not applied here; the systems trigger
//! [`PointScoredEvent`] / [`GoalReachedEvent`] and the observers in
//! [`crate::events::gamestate`] update the tracker.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::mapposition::MapPosition;
use crate::components::pointawarded::PointAwarded;
use crate::components::rigidbody::RigidBody;
use crate::components::tags::{Goal, Platform, Player};
use crate::events::gamestate::{GoalReachedEvent, PointScoredEvent};
use crate::resources::gameconfig::GameConfig;

/// Outcome of the player touching one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformContact {
    /// The player's feet are at or above the platform's mid-line.
    Top,
    /// Touching from the side or from below.
    Side,
}

/// Classify a touch by comparing the player's bottom edge with the
/// platform's horizontal mid-line.
pub fn classify_contact(
    player_bottom: f32,
    platform: &BoxCollider,
    platform_position: raylib::prelude::Vector2,
) -> PlatformContact {
    if player_bottom <= platform.mid_line_y(platform_position) {
        PlatformContact::Top
    } else {
        PlatformContact::Side
    }
}

type PlayerContactQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static MapPosition,
        &'static BoxCollider,
        &'static mut CircleCollider,
        &'static mut RigidBody,
    ),
    With<Player>,
>;

type PlatformQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Platform,
        &'static MapPosition,
        &'static BoxCollider,
        &'static mut PointAwarded,
    ),
    Without<Player>,
>;

/// Recompute `on_floor` and resolve player-vs-platform contacts.
pub fn platform_contact_system(
    mut players: PlayerContactQuery,
    mut platforms: PlatformQuery,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    let bounce = config.physics.side_bounce;

    for (position, bounds, mut collider, mut body) in players.iter_mut() {
        collider.on_floor = false;

        let player_left = position.pos.x;
        let player_right = position.pos.x + bounds.width();
        let player_bottom = position.pos.y + bounds.height();

        let mut ordered: Vec<_> = platforms.iter_mut().collect();
        ordered.sort_by_key(|(_, platform, ..)| platform.index);

        for (entity, platform, platform_pos, platform_box, mut award) in ordered {
            if !collider.touches(position.pos, platform_box, platform_pos.pos) {
                continue;
            }
            match classify_contact(player_bottom, platform_box, platform_pos.pos) {
                PlatformContact::Top => {
                    collider.on_floor = true;
                    if award.try_award() {
                        debug!("First landing on platform {}", platform.index);
                        commands.trigger(PointScoredEvent { platform: entity });
                    }
                }
                PlatformContact::Side => {
                    let (platform_min, platform_max) = platform_box.aabb(platform_pos.pos);
                    // The two checks run one after the other, so the second
                    // sees the velocity the first wrote. A player fully inside
                    // the platform's span moving left is flipped twice and
                    // leaves with -bounce.
                    if player_left > platform_min.x && body.velocity.x < 0.0 {
                        body.velocity.x = bounce;
                    }
                    if player_right < platform_max.x && body.velocity.x > 0.0 {
                        body.velocity.x = -bounce;
                    }
                }
            }
        }
    }
}

/// Trigger [`GoalReachedEvent`] while the player touches the goal.
pub fn goal_contact_system(
    players: Query<(&MapPosition, &CircleCollider), With<Player>>,
    goals: Query<(&MapPosition, &BoxCollider), (With<Goal>, Without<Player>)>,
    mut commands: Commands,
) {
    for (position, collider) in players.iter() {
        let reached = goals
            .iter()
            .any(|(goal_pos, goal_box)| collider.touches(position.pos, goal_box, goal_pos.pos));
        if reached {
            commands.trigger(GoalReachedEvent {});
        }
    }
}
