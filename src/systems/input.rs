//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//!   Toggling debug mode is emitted right away as a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
//! - [`consume_input_edges`] runs last in every tick and clears the latched
//!   press/release edges so each one is acted on exactly once.
use bevy_ecs::prelude::*;
use raylib::prelude::{KeyboardKey, MouseButton};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard and pointer input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);
    let is_key_released = |key: KeyboardKey| rl.is_key_released(key);

    let left = input.move_left.key_binding;
    input
        .move_left
        .sample(is_key_down(left), is_key_pressed(left), is_key_released(left));
    let right = input.move_right.key_binding;
    input
        .move_right
        .sample(is_key_down(right), is_key_pressed(right), is_key_released(right));
    let debug = input.mode_debug.key_binding;
    input
        .mode_debug
        .sample(is_key_down(debug), is_key_pressed(debug), is_key_released(debug));

    if is_key_pressed(debug) {
        commands.trigger(SwitchDebugEvent {});
    }

    let button = MouseButton::MOUSE_BUTTON_LEFT;
    input.pointer.sample(
        rl.get_mouse_position(),
        rl.is_mouse_button_down(button),
        rl.is_mouse_button_pressed(button),
        rl.is_mouse_button_released(button),
    );
}

/// Clear the edges the tick just consumed.
pub fn consume_input_edges(mut input: ResMut<InputState>) {
    input.clear_edges();
}
