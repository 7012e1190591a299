//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 480
//! height = 600
//! target_fps = 60
//!
//! [game]
//! lives = 3
//! seed = 7
//! debug_boxes = false
//!
//! [paths]
//! level = ./assets/frogger.txt
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 480;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_LIVES: u32 = 3;
const DEFAULT_SEED: u64 = 7;
const DEFAULT_DEBUG_BOXES: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window settings, the starting lives, the random seed and the
/// level file to load. Missing keys keep the defaults.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second; the headless runner derives its fixed
    /// delta from it.
    pub target_fps: u32,
    /// Lives at the start of a game.
    pub lives: u32,
    /// Seed for the scene random source.
    pub seed: u64,
    /// Start with bounding-box overlays enabled.
    pub debug_boxes: bool,
    /// Level description file, if any.
    pub level_path: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            lives: DEFAULT_LIVES,
            seed: DEFAULT_SEED,
            debug_boxes: DEFAULT_DEBUG_BOXES,
            level_path: None,
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

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [game] section
        if let Some(lives) = config.getuint("game", "lives").ok().flatten() {
            self.lives = lives as u32;
        }
        if let Some(seed) = config.getuint("game", "seed").ok().flatten() {
            self.seed = seed;
        }
        if let Some(debug) = config.getbool("game", "debug_boxes").ok().flatten() {
            self.debug_boxes = debug;
        }

        // [paths] section
        if let Some(level) = config.get("paths", "level") {
            if !level.trim().is_empty() {
                self.level_path = Some(PathBuf::from(level.trim()));
            }
        }

        info!(
            "Loaded config: {}x{} window, fps={}, lives={}, seed={}, debug_boxes={}, level={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.lives,
            self.seed,
            self.debug_boxes,
            self.level_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("game", "lives", Some(self.lives.to_string()));
        config.set("game", "seed", Some(self.seed.to_string()));
        config.set("game", "debug_boxes", Some(self.debug_boxes.to_string()));

        if let Some(level) = &self.level_path {
            config.set("paths", "level", Some(level.display().to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Fixed simulation step derived from the target frame rate.
    pub fn frame_delta(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
