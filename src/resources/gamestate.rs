//! Run progress tracked across ticks.
//!
//! [`GameState`] owns the three scalars the HUD shows: the death counter,
//! the score and the victory flag. It only changes through the transition
//! methods below, which the observers in
//! [`crate::events::gamestate`] call when the simulation reports a landing,
//! a death or a goal touch.

use bevy_ecs::prelude::Resource;

/// Score while the player is not scoring (start of a run, after a death).
pub const NOT_SCORING: i32 = -1;
/// Score once the goal has been reached.
pub const VICTORY_SCORE: i32 = 1000;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    deaths: u32,
    score: i32,
    victory: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            deaths: 0,
            score: NOT_SCORING,
            victory: false,
        }
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn victory(&self) -> bool {
        self.victory
    }

    /// A platform was landed on for the first time.
    ///
    /// After victory the score stays pinned to [`VICTORY_SCORE`].
    pub fn award_point(&mut self) {
        if !self.victory {
            self.score += 1;
        }
    }

    /// The player fell off the bottom of the window.
    ///
    /// The counter always grows; the score drops back to [`NOT_SCORING`]
    /// unless the run is already won.
    pub fn record_death(&mut self) {
        self.deaths += 1;
        if !self.victory {
            self.score = NOT_SCORING;
        }
    }

    /// The player touched the goal.
    pub fn record_victory(&mut self) {
        self.score = VICTORY_SCORE;
        self.victory = true;
    }
}
