//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, timing, input,
//! game progress, the HUD and loaded textures.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `fixedtimestep` – accumulator that turns frame time into fixed ticks
//! - `gameconfig` – every tunable, loaded from INI
//! - `gamestate` – deaths, score and victory
//! - `hud` – widget tree for the on-screen labels and quit button
//! - `input` – sampled keyboard and pointer state
//! - `level` – platform layout, built-in or from JSON
//! - `texturestore` – loaded textures keyed by path
//! - `worldsignals` – global string flags (quit request)
//! - `worldtime` – per-frame time and delta
pub mod debugmode;
pub mod fixedtimestep;
pub mod gameconfig;
pub mod gamestate;
pub mod hud;
pub mod input;
pub mod level;
pub mod texturestore;
pub mod worldsignals;
pub mod worldtime;
