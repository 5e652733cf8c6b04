//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 360
//!
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//!
//! [game]
//! lives = 3
//! paddle_speed = 320
//! ball_speed = 240
//!
//! [assets]
//! dir = ./assets
//!
//! [controls]
//! confirm = Enter, Space
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::{Path, PathBuf};

use crate::error::EngineError;
use crate::resources::controls::Controls;
use crate::resources::game::DEFAULT_LIVES;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 360;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_PADDLE_SPEED: f32 = 320.0;
const DEFAULT_BALL_SPEED: f32 = 240.0;
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Lives at the start of every round.
    pub lives: i32,
    /// Paddle speed in world units per second.
    pub paddle_speed: f32,
    /// Ball launch speed in world units per second.
    pub ball_speed: f32,
    /// Root directory for entity descriptions and sprite sheets.
    pub assets_dir: PathBuf,
    /// Input mapping.
    pub controls: Controls,
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
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            lives: DEFAULT_LIVES,
            paddle_speed: DEFAULT_PADDLE_SPEED,
            ball_speed: DEFAULT_BALL_SPEED,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            controls: Controls::default(),
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

    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Load configuration from the INI file at `config_path`.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), EngineError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(|e| {
            EngineError::Config(format!("{}: {}", self.config_path.display(), e))
        })?;
        self.apply_ini(&config)
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), EngineError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(EngineError::Config)?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), EngineError> {
        // [render] section
        if let Some(width) = get_uint(config, "render", "width")? {
            self.render_width = width;
        }
        if let Some(height) = get_uint(config, "render", "height")? {
            self.render_height = height;
        }

        // [window] section
        if let Some(width) = get_uint(config, "window", "width")? {
            self.window_width = width;
        }
        if let Some(height) = get_uint(config, "window", "height")? {
            self.window_height = height;
        }
        if let Some(fps) = get_uint(config, "window", "target_fps")? {
            self.target_fps = fps;
        }

        // [game] section
        if let Some(lives) = config
            .getint("game", "lives")
            .map_err(|e| EngineError::Config(format!("game.lives: {}", e)))?
        {
            if lives <= 0 {
                return Err(EngineError::Config(format!(
                    "game.lives must be positive, got {}",
                    lives
                )));
            }
            self.lives = i32::try_from(lives).map_err(|_| {
                EngineError::Config(format!("game.lives out of range: {}", lives))
            })?;
        }
        if let Some(speed) = get_float(config, "game", "paddle_speed")? {
            self.paddle_speed = speed;
        }
        if let Some(speed) = get_float(config, "game", "ball_speed")? {
            self.ball_speed = speed;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }

        self.controls.apply_ini(config);

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, lives={}, assets={}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.lives,
            self.assets_dir.display()
        );

        Ok(())
    }

    /// Resolve a path relative to the assets directory.
    pub fn asset_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.assets_dir.join(relative)
    }
}

fn get_uint(config: &Ini, section: &str, key: &str) -> Result<Option<u32>, EngineError> {
    let value = config
        .getuint(section, key)
        .map_err(|e| EngineError::Config(format!("{}.{}: {}", section, key, e)))?;
    value
        .map(|v| {
            u32::try_from(v).map_err(|_| {
                EngineError::Config(format!("{}.{} out of range: {}", section, key, v))
            })
        })
        .transpose()
}

fn get_float(config: &Ini, section: &str, key: &str) -> Result<Option<f32>, EngineError> {
    config
        .getfloat(section, key)
        .map(|v| v.map(|v| v as f32))
        .map_err(|e| EngineError::Config(format!("{}.{}: {}", section, key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::InputAction;

    #[test]
    fn defaults() {
        let config = GameConfig::new();
        assert_eq!(config.render_width, 640);
        assert_eq!(config.lives, DEFAULT_LIVES);
        assert_eq!(config.asset_path("a.json"), PathBuf::from("./assets/a.json"));
    }

    #[test]
    fn load_overrides_present_values() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[render]\nwidth = 320\n[game]\nlives = 5\nball_speed = 100.5\n[controls]\ncancel = P\n",
            )
            .unwrap();
        assert_eq!(config.render_width, 320);
        assert_eq!(config.render_height, 360);
        assert_eq!(config.lives, 5);
        assert_eq!(config.ball_speed, 100.5);
        assert_eq!(config.controls.bindings(InputAction::Cancel), ["P"]);
    }

    #[test]
    fn malformed_number_is_an_error() {
        let mut config = GameConfig::new();
        let err = config
            .load_from_str("[window]\nwidth = wide\n")
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn zero_lives_rejected() {
        let mut config = GameConfig::new();
        assert!(config.load_from_str("[game]\nlives = 0\n").is_err());
    }

    #[test]
    fn lives_beyond_i32_rejected() {
        let mut config = GameConfig::new();
        let err = config
            .load_from_str("[game]\nlives = 4294967296\n")
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert_eq!(config.lives, DEFAULT_LIVES);
    }

    #[test]
    fn size_beyond_u32_rejected() {
        let mut config = GameConfig::new();
        let err = config
            .load_from_str("[render]\nwidth = 4294967296\n")
            .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert_eq!(config.render_width, 640);
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/nonexistent/arkanoid.ini");
        assert!(config.load_from_file().is_err());
    }
}
