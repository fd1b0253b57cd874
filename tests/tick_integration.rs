//! Simulation tick integration tests: falling, landing, walls, slingshot,
//! goal and the fixed-step driver, all through the real tick schedule.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use siopao::components::circlecollider::CircleCollider;
use siopao::components::mapposition::MapPosition;
use siopao::components::pointawarded::PointAwarded;
use siopao::components::rigidbody::RigidBody;
use siopao::components::slingshot::SlingshotCharge;
use siopao::components::tags::{Platform, Player};
use siopao::game::{PlayerSnapshot, build_tick_schedule, init_world, player_snapshot};
use siopao::resources::fixedtimestep::FixedTimestep;
use siopao::resources::gameconfig::GameConfig;
use siopao::resources::gamestate::{GameState, NOT_SCORING, VICTORY_SCORE};
use siopao::resources::input::InputState;
use siopao::resources::level::{LevelLayout, PlatformSpec};
use siopao::systems::time::{run_fixed_ticks, run_ticks};

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// A single small platform well away from every test position.
fn out_of_the_way_layout() -> LevelLayout {
    LevelLayout {
        platforms: vec![PlatformSpec {
            x: 600.0,
            y: 700.0,
            width: 10.0,
            height: 25.0,
        }],
    }
}

fn make_world(config: GameConfig) -> (World, Schedule) {
    let world = init_world(config).expect("test config must be valid");
    (world, build_tick_schedule())
}

fn tick(world: &mut World, schedule: &mut Schedule) -> PlayerSnapshot {
    run_ticks(world, schedule, 1);
    player_snapshot(world).expect("player exists")
}

fn player_entity(world: &mut World) -> Entity {
    let mut q = world.query_filtered::<Entity, With<Player>>();
    q.iter(world).next().expect("player exists")
}

fn place_player(world: &mut World, position: Vector2, velocity: Vector2) {
    let player = player_entity(world);
    world.get_mut::<MapPosition>(player).unwrap().pos = position;
    world.get_mut::<RigidBody>(player).unwrap().velocity = velocity;
}

fn game_state(world: &World) -> GameState {
    *world.resource::<GameState>()
}

/// Player resting on the built-in landing pad: bottom edge on its top face.
fn resting_on_landing_pad() -> (World, Schedule) {
    let (mut world, schedule) = make_world(GameConfig::new());
    place_player(&mut world, Vector2::new(50.0, 586.0), Vector2::zero());
    (world, schedule)
}

fn press_pointer(world: &mut World, at: Vector2) {
    let mut input = world.resource_mut::<InputState>();
    input.pointer.sample(at, true, true, false);
}

fn release_pointer(world: &mut World, at: Vector2) {
    let mut input = world.resource_mut::<InputState>();
    input.pointer.sample(at, false, false, true);
}

#[test]
fn free_fall_ends_in_death_and_respawn() {
    let config = GameConfig::new().with_layout(out_of_the_way_layout());
    let (mut world, mut schedule) = make_world(config);

    let mut previous_y = 50.0;
    let mut fastest = 0.0f32;
    let mut died = false;
    for _ in 0..300 {
        let player = tick(&mut world, &mut schedule);
        if game_state(&world).deaths() == 1 {
            assert!(approx_eq(player.position.x, 50.0));
            assert!(approx_eq(player.position.y, 50.0));
            assert!(approx_eq(player.velocity.y, 0.0));
            died = true;
            break;
        }
        assert!(!player.on_floor);
        assert!(player.position.y > previous_y);
        assert!(player.velocity.y <= 800.0);
        previous_y = player.position.y;
        fastest = fastest.max(player.velocity.y);
    }

    assert!(died, "player never fell off the window");
    assert!(approx_eq(fastest, 800.0));
    assert_eq!(game_state(&world).score(), NOT_SCORING);
}

#[test]
fn spawn_falls_onto_landing_pad_and_scores_once() {
    let (mut world, mut schedule) = make_world(GameConfig::new());

    run_ticks(&mut world, &mut schedule, 180);

    let player = player_snapshot(&mut world).unwrap();
    assert!(player.on_floor);
    assert!(approx_eq(player.velocity.y, 0.0));
    let state = game_state(&world);
    assert_eq!(state.deaths(), 0);
    assert_eq!(state.score(), NOT_SCORING + 1);
}

#[test]
fn resting_on_platform_scores_only_on_first_tick() {
    let (mut world, mut schedule) = resting_on_landing_pad();

    let player = tick(&mut world, &mut schedule);
    assert!(player.on_floor);
    assert!(approx_eq(player.velocity.y, 0.0));
    assert_eq!(game_state(&world).score(), 0);

    for _ in 0..30 {
        let player = tick(&mut world, &mut schedule);
        assert!(player.on_floor);
        assert!(approx_eq(player.velocity.y, 0.0));
        assert!(approx_eq(player.position.y, 586.0));
    }
    assert_eq!(game_state(&world).score(), 0);

    let mut q = world.query::<(&Platform, &PointAwarded)>();
    let awarded: Vec<usize> = q
        .iter(&world)
        .filter(|(_, award)| award.awarded)
        .map(|(platform, _)| platform.index)
        .collect();
    assert_eq!(awarded, vec![0]);
}

#[test]
fn left_wall_stops_leftward_motion() {
    let config = GameConfig::new().with_layout(out_of_the_way_layout());
    let (mut world, mut schedule) = make_world(config);
    place_player(&mut world, Vector2::new(0.0, 300.0), Vector2::new(-10.0, 0.0));

    let player = tick(&mut world, &mut schedule);
    assert!(approx_eq(player.velocity.x, 0.0));
    assert!(approx_eq(player.position.x, 0.0));
}

#[test]
fn right_wall_and_ceiling_clamp_position() {
    let config = GameConfig::new().with_layout(out_of_the_way_layout());
    let (mut world, mut schedule) = make_world(config);
    place_player(
        &mut world,
        Vector2::new(1250.0, -20.0),
        Vector2::new(30.0, -100.0),
    );

    run_ticks(&mut world, &mut schedule, 1);
    let player = player_snapshot(&mut world).unwrap();
    assert!(approx_eq(player.velocity.x, 0.0));
    assert!(approx_eq(player.position.x, 1280.0 - 64.0));
    // velocity.y was zeroed by the ceiling, then one tick of gravity applied
    assert!(player.velocity.y > 0.0);
    assert!(player.position.y >= 0.0);
}

#[test]
fn side_contact_pushes_player_back_out() {
    let layout = LevelLayout {
        platforms: vec![PlatformSpec {
            x: 300.0,
            y: 400.0,
            width: 100.0,
            height: 25.0,
        }],
    };
    let (mut world, mut schedule) = make_world(GameConfig::new().with_layout(layout));
    place_player(
        &mut world,
        Vector2::new(240.0, 390.0),
        Vector2::new(50.0, 0.0),
    );

    let player = tick(&mut world, &mut schedule);
    assert!(!player.on_floor);
    // bounce of -5 followed by one tick of air drag
    assert!(approx_eq(player.velocity.x, -5.0 * (1.0 - 2.0 / 60.0)));
    assert_eq!(game_state(&world).score(), NOT_SCORING);
}

#[test]
fn leftward_side_contact_bounces_player_right() {
    let layout = LevelLayout {
        platforms: vec![PlatformSpec {
            x: 300.0,
            y: 400.0,
            width: 100.0,
            height: 25.0,
        }],
    };
    let (mut world, mut schedule) = make_world(GameConfig::new().with_layout(layout));
    // circle touches the platform's right face from below its mid-line
    place_player(
        &mut world,
        Vector2::new(380.0, 390.0),
        Vector2::new(-50.0, 0.0),
    );

    let player = tick(&mut world, &mut schedule);
    assert!(!player.on_floor);
    assert!(approx_eq(player.velocity.x, 5.0 * (1.0 - 2.0 / 60.0)));
}

#[test]
fn side_contact_inside_platform_span_flips_twice() {
    let layout = LevelLayout {
        platforms: vec![PlatformSpec {
            x: 300.0,
            y: 400.0,
            width: 200.0,
            height: 25.0,
        }],
    };
    let (mut world, mut schedule) = make_world(GameConfig::new().with_layout(layout));
    // player box [350, 414] lies within the platform's [300, 500] span
    place_player(
        &mut world,
        Vector2::new(350.0, 414.0),
        Vector2::new(-50.0, 0.0),
    );

    let player = tick(&mut world, &mut schedule);
    assert!(!player.on_floor);
    // +5 from the left check, then -5 from the right check in the same tick
    assert!(approx_eq(player.velocity.x, -5.0 * (1.0 - 2.0 / 60.0)));
}

#[test]
fn landing_on_two_platforms_at_once_scores_both() {
    let layout = LevelLayout {
        platforms: vec![
            PlatformSpec {
                x: 0.0,
                y: 500.0,
                width: 100.0,
                height: 25.0,
            },
            PlatformSpec {
                x: 100.0,
                y: 500.0,
                width: 100.0,
                height: 25.0,
            },
        ],
    };
    let (mut world, mut schedule) = make_world(GameConfig::new().with_layout(layout));
    // circle grazes the shared corner at (100, 500)
    place_player(&mut world, Vector2::new(68.0, 436.0), Vector2::zero());

    let player = tick(&mut world, &mut schedule);
    assert!(player.on_floor);
    assert_eq!(game_state(&world).score(), NOT_SCORING + 2);

    let mut q = world.query::<(&Platform, &PointAwarded)>();
    let mut awarded: Vec<usize> = q
        .iter(&world)
        .filter(|(_, award)| award.awarded)
        .map(|(platform, _)| platform.index)
        .collect();
    awarded.sort();
    assert_eq!(awarded, vec![0, 1]);
}

#[test]
fn landing_and_side_contact_in_the_same_tick() {
    let layout = LevelLayout {
        platforms: vec![
            PlatformSpec {
                x: 0.0,
                y: 500.0,
                width: 200.0,
                height: 25.0,
            },
            PlatformSpec {
                x: 150.0,
                y: 430.0,
                width: 100.0,
                height: 20.0,
            },
        ],
    };
    let (mut world, mut schedule) = make_world(GameConfig::new().with_layout(layout));
    place_player(
        &mut world,
        Vector2::new(100.0, 436.0),
        Vector2::new(50.0, 0.0),
    );

    let player = tick(&mut world, &mut schedule);
    // standing on the first platform, bounced off the second
    assert!(player.on_floor);
    assert!(approx_eq(player.velocity.x, -5.0 * (1.0 - 10.0 / 60.0)));
    assert_eq!(game_state(&world).score(), NOT_SCORING + 1);

    let mut q = world.query::<(&Platform, &PointAwarded)>();
    let awarded: Vec<usize> = q
        .iter(&world)
        .filter(|(_, award)| award.awarded)
        .map(|(platform, _)| platform.index)
        .collect();
    assert_eq!(awarded, vec![0]);
}

#[test]
fn walking_on_the_floor_applies_force_then_friction() {
    let (mut world, mut schedule) = resting_on_landing_pad();
    world.resource_mut::<InputState>().move_left.sample(true, true, false);

    let player = tick(&mut world, &mut schedule);
    assert!(approx_eq(player.velocity.x, -20.0 + 20.0 * 10.0 / 60.0));
}

#[test]
fn airborne_player_ignores_input() {
    let config = GameConfig::new().with_layout(out_of_the_way_layout());
    let (mut world, mut schedule) = make_world(config);
    place_player(&mut world, Vector2::new(300.0, 100.0), Vector2::zero());
    world.resource_mut::<InputState>().move_right.sample(true, true, false);

    let player = tick(&mut world, &mut schedule);
    assert!(approx_eq(player.velocity.x, 0.0));
}

fn launch_after_holding(ticks: u32) -> PlayerSnapshot {
    let (mut world, mut schedule) = resting_on_landing_pad();
    press_pointer(&mut world, Vector2::new(100.0, 600.0));
    run_ticks(&mut world, &mut schedule, ticks);
    release_pointer(&mut world, Vector2::new(100.0, 640.0));
    let player = tick(&mut world, &mut schedule);

    let entity = player_entity(&mut world);
    assert!(!world.get::<SlingshotCharge>(entity).unwrap().is_charging());
    player
}

#[test]
fn slingshot_force_grows_with_hold_then_saturates() {
    // drag of (0, 40), gain 2: force is -80 per held tick
    assert!(approx_eq(launch_after_holding(3).velocity.y, -240.0));
    assert!(approx_eq(launch_after_holding(5).velocity.y, -400.0));
    assert!(approx_eq(launch_after_holding(9).velocity.y, -400.0));
}

#[test]
fn slingshot_released_without_holding_gives_no_force() {
    let (mut world, mut schedule) = resting_on_landing_pad();
    let entity = player_entity(&mut world);
    world
        .get_mut::<SlingshotCharge>(entity)
        .unwrap()
        .begin(Vector2::new(100.0, 600.0));
    release_pointer(&mut world, Vector2::new(300.0, 900.0));

    let player = tick(&mut world, &mut schedule);
    assert!(approx_eq(player.velocity.x, 0.0));
    assert!(approx_eq(player.velocity.y, 0.0));
}

#[test]
fn velocity_stays_within_limits() {
    let (mut world, mut schedule) = resting_on_landing_pad();
    press_pointer(&mut world, Vector2::new(0.0, 0.0));
    run_ticks(&mut world, &mut schedule, 10);
    release_pointer(&mut world, Vector2::new(5000.0, 5000.0));

    let player = tick(&mut world, &mut schedule);
    assert!(approx_eq(player.velocity.x, -500.0));
    assert!(approx_eq(player.velocity.y, -800.0));

    for _ in 0..400 {
        let player = tick(&mut world, &mut schedule);
        assert!(player.velocity.x.abs() <= 500.0);
        assert!(player.velocity.y.abs() <= 800.0);
    }
}

#[test]
fn goal_victory_survives_later_deaths() {
    let mut config = GameConfig::new().with_layout(out_of_the_way_layout());
    config.spawn_position = config.goal_position;
    let (mut world, mut schedule) = make_world(config);

    tick(&mut world, &mut schedule);
    let state = game_state(&world);
    assert!(state.victory());
    assert_eq!(state.score(), VICTORY_SCORE);

    // Falls from the goal to the bottom edge, respawns on the goal again.
    for _ in 0..200 {
        tick(&mut world, &mut schedule);
        assert_eq!(game_state(&world).score(), VICTORY_SCORE);
        if game_state(&world).deaths() > 0 {
            break;
        }
    }
    assert_eq!(game_state(&world).deaths(), 1);
    assert!(game_state(&world).victory());
}

#[test]
fn death_cancels_slingshot_and_resets_floor_flag() {
    let config = GameConfig::new().with_layout(out_of_the_way_layout());
    let (mut world, mut schedule) = make_world(config);
    let entity = player_entity(&mut world);
    world
        .get_mut::<SlingshotCharge>(entity)
        .unwrap()
        .begin(Vector2::new(10.0, 10.0));
    place_player(&mut world, Vector2::new(50.0, 700.0), Vector2::new(0.0, 300.0));

    let player = tick(&mut world, &mut schedule);
    assert!(approx_eq(player.position.x, 50.0));
    assert!(approx_eq(player.position.y, 50.0));
    assert!(player.on_floor);
    assert!(!world.get::<SlingshotCharge>(entity).unwrap().is_charging());
    assert!(world.get::<CircleCollider>(entity).unwrap().on_floor);
    assert_eq!(game_state(&world).deaths(), 1);
}

#[test]
fn fixed_timestep_runs_whole_ticks_and_carries_remainder() {
    let mut config = GameConfig::new();
    config.physics.tick_rate = 4.0;
    let (mut world, mut schedule) = make_world(config);

    assert_eq!(run_fixed_ticks(&mut world, &mut schedule, 0.125), 0);
    assert_eq!(run_fixed_ticks(&mut world, &mut schedule, 0.5), 2);
    assert_eq!(run_fixed_ticks(&mut world, &mut schedule, 0.125), 1);
    assert_eq!(run_fixed_ticks(&mut world, &mut schedule, 0.0), 0);
    // a long stall is caught up all at once
    assert_eq!(run_fixed_ticks(&mut world, &mut schedule, 2.5), 10);

    let fixed = world.resource::<FixedTimestep>();
    assert_eq!(fixed.ticks(), 13);
    assert!(approx_eq(fixed.accumulator(), 0.0));
}

#[test]
fn input_edges_are_cleared_after_a_tick() {
    let (mut world, mut schedule) = resting_on_landing_pad();
    press_pointer(&mut world, Vector2::new(100.0, 600.0));

    tick(&mut world, &mut schedule);
    let input = world.resource::<InputState>();
    assert!(input.pointer.down);
    assert!(!input.pointer.just_pressed);

    let entity = player_entity(&mut world);
    let sling = world.get::<SlingshotCharge>(entity).unwrap();
    assert!(sling.is_charging());
    assert_eq!(sling.held_ticks, 1);
}
