//! Configuration for the tokei clock.
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/tokei/config.toml` on Linux). `TOKEI_CONFIG` points at a
//! different file. Every key is optional; a missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokei_core::{ColorTheme, HourHandMode};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TOKEI_CONFIG";

const DEFAULT_GLYPH: char = '●';
const TICK_MS_RANGE: (u64, u64) = (50, 60_000);
const RADIUS_RATIO_RANGE: (f64, f64) = (0.1, 1.0);

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Clock settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color of painted cells.
    pub color_theme: ColorTheme,
    /// Whether the hour hand creeps with the minutes or jumps on the hour.
    pub hour_hand: HourHandMode,
    /// Time between frames, in milliseconds.
    pub tick_ms: u64,
    /// Dial radius as a fraction of the largest circle that fits.
    pub radius_ratio: f64,
    /// Character used for painted cells; only the first char counts.
    pub glyph: String,
    /// Draw the dial outline.
    pub show_outline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            hour_hand: HourHandMode::default(),
            tick_ms: 1000,
            radius_ratio: 0.9,
            glyph: DEFAULT_GLYPH.to_string(),
            show_outline: true,
        }
    }
}

impl Config {
    /// Load the config from its default location.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML text and clamp out-of-range values.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.sanitize();
        Ok(config)
    }

    /// The glyph used for painted cells.
    pub fn glyph_char(&self) -> char {
        self.glyph.chars().next().unwrap_or(DEFAULT_GLYPH)
    }

    fn sanitize(&mut self) {
        let (lo, hi) = TICK_MS_RANGE;
        if !(lo..=hi).contains(&self.tick_ms) {
            let clamped = self.tick_ms.clamp(lo, hi);
            log::warn!("tick_ms {} out of range, using {clamped}", self.tick_ms);
            self.tick_ms = clamped;
        }

        let (lo, hi) = RADIUS_RATIO_RANGE;
        if !(lo..=hi).contains(&self.radius_ratio) {
            // NaN fails `contains` and would survive `clamp`.
            let clamped = if self.radius_ratio.is_nan() {
                Self::default().radius_ratio
            } else {
                self.radius_ratio.clamp(lo, hi)
            };
            log::warn!("radius_ratio {} out of range, using {clamped}", self.radius_ratio);
            self.radius_ratio = clamped;
        }

        if self.glyph.is_empty() {
            log::warn!("empty glyph, using {DEFAULT_GLYPH}");
            self.glyph = DEFAULT_GLYPH.to_string();
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "tokei")
}

/// Where the config file is read from.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Where the log file is written.
pub fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("tokei.log"))
}
