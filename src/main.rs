//! Siopao's First Stretch main entry point.
//!
//! A single-level 2D platformer written in Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (or the file given with `--config`) and validate it
//! 2. Build the ECS world: resources, observers, player, platforms, goal
//! 3. Every frame:
//!    - sample keyboard and pointer, handle HUD clicks
//!    - run as many fixed simulation ticks as the frame time allows
//!    - animate the player, refresh the HUD, draw
//! 4. Quit on window close or the HUD quit button
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run --release -- --simulate 600
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};

use siopao::error::ConfigError;
use siopao::game::{
    build_presentation_schedule, build_tick_schedule, init_world, load_textures, player_snapshot,
};
use siopao::resources::gameconfig::GameConfig;
use siopao::resources::gamestate::GameState;
use siopao::resources::texturestore::TextureStore;
use siopao::resources::worldsignals::WorldSignals;
use siopao::systems::animation::player_animation;
use siopao::systems::hud::{QUIT_FLAG, hud_click_system, update_hud};
use siopao::systems::input::update_input_state;
use siopao::systems::render::render_system;
use siopao::systems::time::{run_fixed_ticks, run_ticks, update_world_time};

const WINDOW_TITLE: &str = "Siopao's First Stretch";

/// Siopao's First Stretch
#[derive(Parser)]
#[command(version, about = "Fling a steamed bun across the platforms to its basket.")]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Run this many ticks without a window, print the outcome and exit.
    #[arg(long, value_name = "TICKS")]
    simulate: Option<u32>,
}

fn load_config(path: Option<PathBuf>) -> Result<GameConfig, ConfigError> {
    let mut config = match path {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if config.config_path.exists() {
        config.load_from_file()?;
        info!("Loaded config from {:?}", config.config_path);
    } else {
        info!(
            "No config file at {:?}, using defaults",
            config.config_path
        );
    }
    config.validate()?;
    Ok(config)
}

fn simulate(config: GameConfig, ticks: u32) -> Result<(), ConfigError> {
    let mut world = init_world(config)?;
    let mut tick = build_tick_schedule();
    run_ticks(&mut world, &mut tick, ticks);

    let state = *world.resource::<GameState>();
    println!(
        "ticks: {} deaths: {} score: {} victory: {}",
        ticks,
        state.deaths(),
        state.score(),
        state.victory()
    );
    if let Some(player) = player_snapshot(&mut world) {
        println!(
            "player position: ({:.2}, {:.2}) velocity: ({:.2}, {:.2}) on_floor: {}",
            player.position.x,
            player.position.y,
            player.velocity.x,
            player.velocity.y,
            player.on_floor
        );
    }
    Ok(())
}

fn run_window(config: GameConfig) -> Result<(), ConfigError> {
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(WINDOW_TITLE)
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let textures = load_textures(&mut rl, &thread);

    let mut world = init_world(config)?;
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut input = Schedule::default();
    input.add_systems((update_input_state, hud_click_system).chain());

    let mut tick = build_tick_schedule();

    let mut frame = build_presentation_schedule();
    frame.add_systems(render_system.after(player_animation).after(update_hud));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag(QUIT_FLAG)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        input.run(&mut world);
        run_fixed_ticks(&mut world, &mut tick, dt);
        frame.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }

    if let Some(mut textures) = world.remove_non_send_resource::<TextureStore>() {
        textures.unload_all();
    }
    info!("Bye!");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Early-exit: write the config file and quit (no window needed)
    if let Some(path) = cli.write_config {
        config.config_path = path;
        if let Err(e) = config.save_to_file() {
            error!("{e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    let result = match cli.simulate {
        Some(ticks) => simulate(config, ticks),
        None => run_window(config),
    };
    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}
