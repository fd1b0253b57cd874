//! Event types and observers used by the game.
//!
//! Systems raise events to report what happened during a tick; observers
//! apply the consequences elsewhere without the systems depending on them.
//!
//! Submodules:
//! - [`gamestate`] – point scored, player died and goal reached, plus the
//!   observers that update [`GameState`](crate::resources::gamestate::GameState)
//! - [`switchdebug`] – toggle debug rendering on/off
pub mod gamestate;
pub mod switchdebug;
