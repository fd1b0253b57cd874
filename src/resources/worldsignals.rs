//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource is a world-wide set of named flags used for
//! loose communication between systems and the main loop, such as
//! `"quit_game"` raised by the HUD quit button.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

/// Presence-only boolean flags; a key being present means "true".
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
