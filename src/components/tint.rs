//! Color component for flat-colored entities.
//!
//! Platforms carry a [`Tint`] that the renderer uses to fill their rectangle.
//! It is cosmetic and never changes after setup.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl From<Color> for Tint {
    fn from(color: Color) -> Self {
        Self { color }
    }
}
