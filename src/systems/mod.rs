//! Game systems.
//!
//! This module groups all ECS systems that advance simulation, input, and
//! rendering.
//!
//! Submodules overview
//! - [`animation`] – pick the player's spritesheet frame
//! - [`bounds`] – window edges: walls on three sides, death below
//! - [`collision`] – player vs platform and goal contacts
//! - [`hud`] – HUD label refresh and quit button clicks
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`movement`] – integrate velocity and position once per tick
//! - [`playerforce`] – translate input into this tick's force
//! - [`render`] – draw the level, HUD and debug overlays using Raylib
//! - [`time`] – frame time and the fixed-step driver

pub mod animation;
pub mod bounds;
pub mod collision;
pub mod hud;
pub mod input;
pub mod movement;
pub mod playerforce;
pub mod render;
pub mod time;
