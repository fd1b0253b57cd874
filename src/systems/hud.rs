//! HUD systems.
//!
//! - [`hud_click_system`] runs before the simulation ticks so a click on the
//!   quit button is seen before the tick clears the release edge.
//! - [`update_hud`] mirrors the [`GameState`] counters into the HUD labels.
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::gamestate::GameState;
use crate::resources::hud::{Hud, HudAction};
use crate::resources::input::InputState;
use crate::resources::worldsignals::WorldSignals;

/// Flag set on [`WorldSignals`] when the player asks to quit.
pub const QUIT_FLAG: &str = "quit_game";

pub fn hud_click_system(
    hud: Res<Hud>,
    input: Res<InputState>,
    mut signals: ResMut<WorldSignals>,
) {
    if !input.pointer.just_released {
        return;
    }
    if let Some(HudAction::Quit) = hud.handle_click(input.pointer.position) {
        if !signals.has_flag(QUIT_FLAG) {
            info!("Quit requested from HUD");
        }
        signals.set_flag(QUIT_FLAG);
    }
}

pub fn update_hud(mut hud: ResMut<Hud>, state: Res<GameState>) {
    if state.is_changed() {
        hud.sync(&state);
    }
}
