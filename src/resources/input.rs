//! Sampled keyboard and pointer input.
//!
//! Captures the subset of device state the game cares about: two direction
//! keys, the debug toggle and the left pointer button. `active`/`down` mirror
//! the device; the edge flags (`just_pressed`/`just_released`) are latched
//! until a simulation tick has seen them, then cleared by
//! [`consume_input_edges`](crate::systems::input::consume_input_edges).
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down since the last tick.
    pub just_pressed: bool,
    /// Whether the key went up since the last tick.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }

    /// Record this frame's device state, latching edges.
    pub fn sample(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed |= pressed;
        self.just_released |= released;
    }

    pub fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Left pointer button plus cursor position in window pixels.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    pub down: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub position: Vector2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            down: false,
            just_pressed: false,
            just_released: false,
            position: Vector2::zero(),
        }
    }
}

impl PointerState {
    /// Record this frame's device state, latching edges.
    pub fn sample(&mut self, position: Vector2, down: bool, pressed: bool, released: bool) {
        self.position = position;
        self.down = down;
        self.just_pressed |= pressed;
        self.just_released |= released;
    }

    pub fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the input relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub mode_debug: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound_to(KeyboardKey::KEY_A),
            move_right: BoolState::bound_to(KeyboardKey::KEY_D),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            pointer: PointerState::default(),
        }
    }
}

impl InputState {
    /// Forget every latched edge.
    pub fn clear_edges(&mut self) {
        self.move_left.clear_edges();
        self.move_right.clear_edges();
        self.mode_debug.clear_edges();
        self.pointer.clear_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.move_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.move_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert!(!input.move_left.active);
        assert!(!input.pointer.down);
    }

    #[test]
    fn test_edges_latch_until_cleared() {
        let mut input = InputState::default();
        input
            .pointer
            .sample(Vector2::new(1.0, 2.0), true, true, false);
        // next frame: button still down, no new edge
        input
            .pointer
            .sample(Vector2::new(3.0, 4.0), true, false, false);
        assert!(input.pointer.just_pressed);
        assert_eq!(input.pointer.position.x, 3.0);

        input.clear_edges();
        assert!(!input.pointer.just_pressed);
        assert!(input.pointer.down);
    }

    #[test]
    fn test_key_sample_tracks_active() {
        let mut key = BoolState::bound_to(KeyboardKey::KEY_D);
        key.sample(true, true, false);
        assert!(key.active && key.just_pressed);
        key.sample(false, false, true);
        assert!(!key.active);
        assert!(key.just_pressed && key.just_released);
    }
}
