//! Simulation configuration
//!
//! Read from a RON file. Every field has a default, so an empty file (or no
//! file at all) gives the stock 20m ring in a 400x400 window at 20 FPS.

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::sim::fight::MAX_STEP_LIMIT;
use crate::sim::FighterProfile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Frame rate cap for the render loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    /// 20 FPS, one random-walk step every 50ms
    #[default]
    Fps20,
    Fps30,
    Fps60,
    /// As fast as possible
    Unlocked,
}

impl FpsLimit {
    /// Target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps20 => Some(1.0 / 20.0),
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps20 => "20",
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

/// Ring dimensions, in metres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingSettings {
    pub name: String,
    pub x_size: f32,
    pub y_size: f32,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            name: "Square Ring 1".to_string(),
            x_size: 20.0,
            y_size: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    /// Window size in pixels
    pub width: u32,
    pub height: u32,
    pub fps_limit: FpsLimit,
    /// Radius of the circle drawn for each fighter, in pixels
    pub fighter_radius: f32,
    /// Draw name and life/energy next to each fighter
    pub show_labels: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "FA MMA Simulation".to_string(),
            width: 400,
            height: 400,
            fps_limit: FpsLimit::default(),
            fighter_radius: 10.0,
            show_labels: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    /// Largest random displacement per axis per tick, in metres
    pub max_step: f32,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self { max_step: 1.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Size scalar for randomly generated fighters (1.0 = ~175cm / 75kg)
    pub size: f32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. A random one is picked (and logged) when absent.
    pub seed: Option<u64>,
    pub ring: RingSettings,
    pub window: WindowSettings,
    pub motion: MotionSettings,
    pub generator: GeneratorSettings,
    /// Explicit red corner fighter; generated when absent
    pub red: Option<FighterProfile>,
    /// Explicit blue corner fighter; generated when absent
    pub blue: Option<FighterProfile>,
}

impl SimConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&text)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate RON text
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.ring.x_size) || !positive(self.ring.y_size) {
            return Err(ConfigError::Invalid(format!(
                "ring size must be positive, got {} x {}",
                self.ring.x_size, self.ring.y_size
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {} x {}",
                self.window.width, self.window.height
            )));
        }
        if !positive(self.window.fighter_radius) {
            return Err(ConfigError::Invalid(format!(
                "fighter_radius must be positive, got {}",
                self.window.fighter_radius
            )));
        }
        if !(0.0..=MAX_STEP_LIMIT).contains(&self.motion.max_step) {
            return Err(ConfigError::Invalid(format!(
                "max_step must be in [0, {}], got {}",
                MAX_STEP_LIMIT, self.motion.max_step
            )));
        }
        if !positive(self.generator.size) {
            return Err(ConfigError::Invalid(format!(
                "generator size must be positive, got {}",
                self.generator.size
            )));
        }
        Ok(())
    }
}
