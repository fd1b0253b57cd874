//! Level setup and schedule wiring.
//!
//! [`init_world`] builds a ready-to-run [`World`] from a validated
//! [`GameConfig`]: resources, observers, and the level entities (player,
//! platforms in layout order, goal). Nothing here touches the window, so the
//! same world drives the headless `--simulate` mode and the tests.
//!
//! Two schedules run the game:
//! - the tick schedule ([`build_tick_schedule`]) advances the simulation by
//!   one fixed step and is driven by
//!   [`run_fixed_ticks`](crate::systems::time::run_fixed_ticks);
//! - the presentation schedule ([`build_presentation_schedule`]) runs once
//!   per rendered frame after the ticks.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::{Color, RaylibHandle, RaylibThread, Vector2};

use crate::components::animation::PlayerAnimation;
use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::inputcontrolled::PlayerControlled;
use crate::components::mapposition::MapPosition;
use crate::components::pointawarded::PointAwarded;
use crate::components::rigidbody::RigidBody;
use crate::components::slingshot::SlingshotCharge;
use crate::components::sprite::Sprite;
use crate::components::tags::{Goal, Platform, Player};
use crate::components::tint::Tint;
use crate::error::ConfigError;
use crate::events::gamestate::{observe_goal_reached, observe_player_died, observe_point_scored};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::fixedtimestep::FixedTimestep;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::hud::Hud;
use crate::resources::input::InputState;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::player_animation;
use crate::systems::bounds::screen_bounds_system;
use crate::systems::collision::{goal_contact_system, platform_contact_system};
use crate::systems::hud::update_hud;
use crate::systems::input::consume_input_edges;
use crate::systems::movement::motion_integration_system;
use crate::systems::playerforce::player_force_system;

pub const PLAYER_SPRITESHEET: &str = "assets/siopao spritesheet.png";
pub const GOAL_TEXTURE: &str = "assets/steamer.png";
pub const PLATFORM_COLOR: Color = Color::DARKBLUE;

/// Spawn the player, every platform of the layout and the goal.
///
/// Platforms get their [`Platform::index`] from their position in the
/// layout, which fixes the order contacts are resolved in.
pub fn spawn_level(commands: &mut Commands, config: &GameConfig) {
    let player_box = BoxCollider::new(config.player_size.x, config.player_size.y);
    commands.spawn((
        Player,
        MapPosition {
            pos: config.spawn_position,
        },
        player_box,
        CircleCollider::inscribed(&player_box),
        RigidBody::new(),
        SlingshotCharge::default(),
        PlayerControlled::new(
            config.physics.move_speed,
            config.sling_gain,
            config.sling_max_hold,
        ),
        Sprite::new(PLAYER_SPRITESHEET, config.player_size.x, config.player_size.y),
        PlayerAnimation::default(),
    ));

    for (index, platform) in config.layout.platforms.iter().enumerate() {
        commands.spawn((
            Platform { index },
            MapPosition::new(platform.x, platform.y),
            BoxCollider::new(platform.width, platform.height),
            Tint::from(PLATFORM_COLOR),
            PointAwarded::default(),
        ));
    }

    commands.spawn((
        Goal,
        MapPosition {
            pos: config.goal_position,
        },
        BoxCollider::new(config.goal_size.x, config.goal_size.y),
        Sprite::new(GOAL_TEXTURE, config.goal_size.x, config.goal_size.y),
    ));

    info!(
        "Spawned level with {} platforms, player at ({}, {})",
        config.layout.len(),
        config.spawn_position.x,
        config.spawn_position.y
    );
}

/// Validate `config` and build a world ready for the first tick.
pub fn init_world(config: GameConfig) -> Result<World, ConfigError> {
    config.validate()?;

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(FixedTimestep::from_rate(config.physics.tick_rate));
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameState::new());
    world.insert_resource(Hud::new(config.window_width as f32));

    world.spawn(Observer::new(observe_point_scored));
    world.spawn(Observer::new(observe_player_died));
    world.spawn(Observer::new(observe_goal_reached));
    world.spawn(Observer::new(switch_debug_observer));

    {
        let mut commands = world.commands();
        spawn_level(&mut commands, &config);
    }
    world.insert_resource(config);
    world.flush();

    Ok(world)
}

/// One fixed simulation step, in resolution order.
pub fn build_tick_schedule() -> Schedule {
    let mut tick = Schedule::default();
    tick.add_systems(
        (
            platform_contact_system,
            goal_contact_system,
            screen_bounds_system,
            player_force_system,
            motion_integration_system,
            consume_input_edges,
        )
            .chain(),
    );
    tick
}

/// Per-frame work that only reads the simulation.
pub fn build_presentation_schedule() -> Schedule {
    let mut frame = Schedule::default();
    frame.add_systems((player_animation, update_hud));
    frame
}

/// Load every texture the level draws. A missing file is logged and the
/// renderer falls back to outlines for it.
pub fn load_textures(rl: &mut RaylibHandle, thread: &RaylibThread) -> TextureStore {
    let mut store = TextureStore::new();
    for path in [PLAYER_SPRITESHEET, GOAL_TEXTURE] {
        if let Err(e) = store.get_or_load(rl, thread, path) {
            warn!("{}", e);
        }
    }
    store
}

/// Plain copy of the player's physical state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub position: Vector2,
    pub velocity: Vector2,
    pub on_floor: bool,
}

pub fn player_snapshot(world: &mut World) -> Option<PlayerSnapshot> {
    let mut q = world.query_filtered::<(&MapPosition, &RigidBody, &CircleCollider), With<Player>>();
    q.iter(world)
        .next()
        .map(|(position, body, collider)| PlayerSnapshot {
            position: position.pos,
            velocity: body.velocity,
            on_floor: collider.on_floor,
        })
}
