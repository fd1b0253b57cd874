use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and the size of one frame. `frame`
/// selects a cell of a horizontal spritesheet: the source rectangle starts at
/// `frame * width`.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub frame: u32,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            frame: 0,
        }
    }

    /// Top-left of the current frame inside the spritesheet.
    pub fn source_offset(&self) -> Vector2 {
        Vector2 {
            x: self.frame as f32 * self.width,
            y: 0.0,
        }
    }
}
