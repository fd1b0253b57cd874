//! Marker components identifying the roles of entities.

use bevy_ecs::prelude::Component;

/// The single player-controlled entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player;

/// A static platform. `index` is the creation order, used to visit platforms
/// deterministically.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Platform {
    pub index: usize,
}

/// The goal; touching it wins the run.
#[derive(Component, Clone, Copy, Debug)]
pub struct Goal;
