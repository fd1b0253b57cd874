//! Game-state transition events and their observers.
//!
//! The contact and bounds systems report what happened during a tick by
//! triggering one of the events below. The observers in this module apply
//! the matching transition to [`GameState`]; they run when the tick's
//! commands are flushed, in the order the events were raised, so a landing
//! followed by a death in the same tick ends with the death's reset.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::resources::gamestate::GameState;

/// A platform was landed on for the first time.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointScoredEvent {
    pub platform: Entity,
}

/// The player fell below the window and was moved back to spawn.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerDiedEvent {}

/// The player touched the goal.
#[derive(Event, Debug, Clone, Copy)]
pub struct GoalReachedEvent {}

pub fn observe_point_scored(trigger: On<PointScoredEvent>, mut state: ResMut<GameState>) {
    state.award_point();
    debug!(
        "Point for platform {:?}, score is now {}",
        trigger.event().platform,
        state.score()
    );
}

pub fn observe_player_died(_trigger: On<PlayerDiedEvent>, mut state: ResMut<GameState>) {
    state.record_death();
    info!("Player died ({} deaths so far)", state.deaths());
}

pub fn observe_goal_reached(_trigger: On<GoalReachedEvent>, mut state: ResMut<GameState>) {
    let first = !state.victory();
    state.record_victory();
    if first {
        info!("Goal reached after {} deaths", state.deaths());
    }
}
