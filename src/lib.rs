//! Siopao's First Stretch.
//!
//! A small 2D platformer core: a fixed-timestep simulation of one player
//! body against static platforms, a goal and the window edges, stored in a
//! `bevy_ecs` world. The crate exposes its components, resources, systems
//! and events for the binary and the integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
