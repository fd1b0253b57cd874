//! Game configuration resource.
//!
//! Every tunable of the game lives in [`GameConfig`]: window size, tick rate,
//! physics constants, player/goal placement and the platform layout. Defaults
//! reproduce the shipped level; an INI file can override any value, and the
//! whole structure is checked by [`GameConfig::validate`] before the loop
//! starts.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [physics]
//! tick_rate = 60
//! gravity = 500
//! drag = 1
//! move_speed = 20
//! max_horizontal_velocity = 500
//! max_vertical_velocity = 800
//! deceleration = 10
//! side_bounce = 5
//!
//! [player]
//! spawn_x = 50
//! spawn_y = 50
//! width = 64
//! height = 64
//! sling_gain = 2
//! sling_max_hold = 5
//!
//! [goal]
//! x = 1080
//! y = 40
//! width = 64
//! height = 48
//!
//! [level]
//! layout = ./assets/levels/level01.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use raylib::prelude::Vector2;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::resources::level::LevelLayout;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TICK_RATE: f32 = 60.0;
const DEFAULT_GRAVITY: f32 = 500.0;
const DEFAULT_DRAG: f32 = 1.0;
const DEFAULT_MOVE_SPEED: f32 = 20.0;
const DEFAULT_MAX_HORIZONTAL_VELOCITY: f32 = 500.0;
const DEFAULT_MAX_VERTICAL_VELOCITY: f32 = 800.0;
const DEFAULT_DECELERATION: f32 = 10.0;
const DEFAULT_SIDE_BOUNCE: f32 = 5.0;
const DEFAULT_SPAWN: (f32, f32) = (50.0, 50.0);
const DEFAULT_PLAYER_SIZE: (f32, f32) = (64.0, 64.0);
const DEFAULT_SLING_GAIN: f32 = 2.0;
const DEFAULT_SLING_MAX_HOLD: u32 = 5;
const DEFAULT_GOAL_POS: (f32, f32) = (1080.0, 40.0);
const DEFAULT_GOAL_SIZE: (f32, f32) = (64.0, 48.0);
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Highest accepted tick rate. Faster rates make the step vanish against
/// f32 frame deltas and a frame would never finish its ticks.
pub const MAX_TICK_RATE: f32 = 1000.0;

/// Physics constants consumed by the contact, bounds and motion systems.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Simulation ticks per second; one tick lasts `1 / tick_rate` seconds.
    pub tick_rate: f32,
    /// Downward acceleration applied while airborne.
    pub gravity: f32,
    /// Horizontal air drag coefficient.
    pub drag: f32,
    /// Horizontal force of the direction keys.
    pub move_speed: f32,
    pub max_horizontal_velocity: f32,
    pub max_vertical_velocity: f32,
    /// Horizontal friction coefficient while grounded.
    pub deceleration: f32,
    /// Outward velocity given on a side contact with a platform.
    pub side_bounce: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            gravity: DEFAULT_GRAVITY,
            drag: DEFAULT_DRAG,
            move_speed: DEFAULT_MOVE_SPEED,
            max_horizontal_velocity: DEFAULT_MAX_HORIZONTAL_VELOCITY,
            max_vertical_velocity: DEFAULT_MAX_VERTICAL_VELOCITY,
            deceleration: DEFAULT_DECELERATION,
            side_bounce: DEFAULT_SIDE_BOUNCE,
        }
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels; also the right play boundary.
    pub window_width: u32,
    /// Window height in pixels; reaching it with the player's feet is death.
    pub window_height: u32,
    /// Frame rate cap for rendering.
    pub target_fps: u32,
    pub physics: PhysicsConfig,
    /// Player top-left position at startup and after each death.
    pub spawn_position: Vector2,
    /// Player sprite box; the collision circle is inscribed in it.
    pub player_size: Vector2,
    pub sling_gain: f32,
    pub sling_max_hold: u32,
    pub goal_position: Vector2,
    pub goal_size: Vector2,
    pub layout: LevelLayout,
    /// Layout file the platforms were loaded from, if any.
    pub layout_path: Option<String>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the shipped level and constants.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            physics: PhysicsConfig::default(),
            spawn_position: Vector2::new(DEFAULT_SPAWN.0, DEFAULT_SPAWN.1),
            player_size: Vector2::new(DEFAULT_PLAYER_SIZE.0, DEFAULT_PLAYER_SIZE.1),
            sling_gain: DEFAULT_SLING_GAIN,
            sling_max_hold: DEFAULT_SLING_MAX_HOLD,
            goal_position: Vector2::new(DEFAULT_GOAL_POS.0, DEFAULT_GOAL_POS.1),
            goal_size: Vector2::new(DEFAULT_GOAL_SIZE.0, DEFAULT_GOAL_SIZE.1),
            layout: LevelLayout::default(),
            layout_path: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Replace the platform layout.
    pub fn with_layout(mut self, layout: LevelLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Window bounds as a vector (width, height).
    pub fn window_bounds(&self) -> Vector2 {
        Vector2::new(self.window_width as f32, self.window_height as f32)
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. When `[level]
    /// layout` is set, the platform layout is read from that JSON file.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| ConfigError::Io(format!("Failed to load config file: {}", e)))?;
        self.apply_ini(&config)
    }

    /// Apply overrides from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), ConfigError> {
        let float = |section: &str, key: &str| -> Result<Option<f32>, ConfigError> {
            config
                .getfloat(section, key)
                .map(|v| v.map(|v| v as f32))
                .map_err(|e| ConfigError::Parse(format!("[{}] {}: {}", section, key, e)))
        };
        let uint = |section: &str, key: &str| -> Result<Option<u32>, ConfigError> {
            config
                .getuint(section, key)
                .map(|v| v.map(|v| v as u32))
                .map_err(|e| ConfigError::Parse(format!("[{}] {}: {}", section, key, e)))
        };

        // [window] section
        if let Some(width) = uint("window", "width")? {
            self.window_width = width;
        }
        if let Some(height) = uint("window", "height")? {
            self.window_height = height;
        }
        if let Some(fps) = uint("window", "target_fps")? {
            self.target_fps = fps;
        }

        // [physics] section
        let physics = &mut self.physics;
        for (key, slot) in [
            ("tick_rate", &mut physics.tick_rate),
            ("gravity", &mut physics.gravity),
            ("drag", &mut physics.drag),
            ("move_speed", &mut physics.move_speed),
            ("max_horizontal_velocity", &mut physics.max_horizontal_velocity),
            ("max_vertical_velocity", &mut physics.max_vertical_velocity),
            ("deceleration", &mut physics.deceleration),
            ("side_bounce", &mut physics.side_bounce),
        ] {
            if let Some(value) = float("physics", key)? {
                *slot = value;
            }
        }

        // [player] section
        for (key, slot) in [
            ("spawn_x", &mut self.spawn_position.x),
            ("spawn_y", &mut self.spawn_position.y),
            ("width", &mut self.player_size.x),
            ("height", &mut self.player_size.y),
            ("sling_gain", &mut self.sling_gain),
        ] {
            if let Some(value) = float("player", key)? {
                *slot = value;
            }
        }
        if let Some(hold) = uint("player", "sling_max_hold")? {
            self.sling_max_hold = hold;
        }

        // [goal] section
        for (key, slot) in [
            ("x", &mut self.goal_position.x),
            ("y", &mut self.goal_position.y),
            ("width", &mut self.goal_size.x),
            ("height", &mut self.goal_size.y),
        ] {
            if let Some(value) = float("goal", key)? {
                *slot = value;
            }
        }

        // [level] section
        if let Some(path) = config.get("level", "layout") {
            self.layout = LevelLayout::load_from_file(&path)?;
            self.layout_path = Some(path);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, tick_rate={}, {} platforms",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.physics.tick_rate,
            self.layout.len()
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// The platform layout is only referenced by path; an inline layout is
    /// not written out.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        // [window] section
        set("window", "width", self.window_width.to_string());
        set("window", "height", self.window_height.to_string());
        set("window", "target_fps", self.target_fps.to_string());

        // [physics] section
        let p = &self.physics;
        set("physics", "tick_rate", p.tick_rate.to_string());
        set("physics", "gravity", p.gravity.to_string());
        set("physics", "drag", p.drag.to_string());
        set("physics", "move_speed", p.move_speed.to_string());
        set(
            "physics",
            "max_horizontal_velocity",
            p.max_horizontal_velocity.to_string(),
        );
        set(
            "physics",
            "max_vertical_velocity",
            p.max_vertical_velocity.to_string(),
        );
        set("physics", "deceleration", p.deceleration.to_string());
        set("physics", "side_bounce", p.side_bounce.to_string());

        // [player] section
        set("player", "spawn_x", self.spawn_position.x.to_string());
        set("player", "spawn_y", self.spawn_position.y.to_string());
        set("player", "width", self.player_size.x.to_string());
        set("player", "height", self.player_size.y.to_string());
        set("player", "sling_gain", self.sling_gain.to_string());
        set("player", "sling_max_hold", self.sling_max_hold.to_string());

        // [goal] section
        set("goal", "x", self.goal_position.x.to_string());
        set("goal", "y", self.goal_position.y.to_string());
        set("goal", "width", self.goal_size.x.to_string());
        set("goal", "height", self.goal_size.y.to_string());

        // [level] section
        if let Some(path) = &self.layout_path {
            set("level", "layout", path.clone());
        }

        config
            .write(&self.config_path)
            .map_err(|e| ConfigError::Io(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        if !p.tick_rate.is_finite() || p.tick_rate <= 0.0 || p.tick_rate > MAX_TICK_RATE {
            return Err(ConfigError::InvalidTickRate(p.tick_rate));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::InvalidWindow {
                width: self.window_width,
                height: self.window_height,
            });
        }
        for (name, value) in [
            ("gravity", p.gravity),
            ("drag", p.drag),
            ("move_speed", p.move_speed),
            ("max_horizontal_velocity", p.max_horizontal_velocity),
            ("max_vertical_velocity", p.max_vertical_velocity),
            ("deceleration", p.deceleration),
            ("side_bounce", p.side_bounce),
            ("sling_gain", self.sling_gain),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPhysics { name, value });
            }
        }
        let positive = |v: Vector2| v.x.is_finite() && v.y.is_finite() && v.x > 0.0 && v.y > 0.0;
        let finite = |v: Vector2| v.x.is_finite() && v.y.is_finite();
        if !positive(self.player_size) {
            return Err(ConfigError::InvalidBodySize { what: "player" });
        }
        if !positive(self.goal_size) {
            return Err(ConfigError::InvalidBodySize { what: "goal" });
        }
        if !finite(self.spawn_position) {
            return Err(ConfigError::InvalidPosition { what: "spawn" });
        }
        if !finite(self.goal_position) {
            return Err(ConfigError::InvalidPosition { what: "goal" });
        }
        if self.layout.is_empty() {
            return Err(ConfigError::EmptyLayout);
        }
        for (index, platform) in self.layout.platforms.iter().enumerate() {
            let finite = platform.x.is_finite()
                && platform.y.is_finite()
                && platform.width.is_finite()
                && platform.height.is_finite();
            // zero-width platforms are legal: the built-in layout has one
            if !finite || platform.width < 0.0 || platform.height <= 0.0 {
                return Err(ConfigError::InvalidPlatform { index });
            }
        }
        Ok(())
    }
}
