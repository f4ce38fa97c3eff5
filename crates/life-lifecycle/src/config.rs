//! Runtime configuration.
//!
//! Defaults, then an optional JSON file named by `LED_LIFE_CONFIG`, then
//! individual environment overrides.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use led_matrix::{MatrixResult, TileLayout};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::staleness::DEFAULT_STALE_LIMIT;

pub const CONFIG_PATH_VAR: &str = "LED_LIFE_CONFIG";
pub const DELAY_VAR: &str = "LED_LIFE_DELAY_MS";
pub const STALE_LIMIT_VAR: &str = "LED_LIFE_STALE_LIMIT";
pub const SEED_VAR: &str = "LED_LIFE_SEED";
pub const SELF_TEST_VAR: &str = "LED_LIFE_SELF_TEST";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub tile_height: usize,
    pub tile_width: usize,
    pub tiles_across: usize,
    pub tiles_down: usize,
    /// Minimum interval between generations.
    pub frame_delay_ms: u64,
    /// Unchanged generations before an automatic reseed.
    pub stale_limit: u32,
    /// Pause after each row/column of the sweep.
    pub test_pause_ms: u64,
    /// Pause after each pixel of the dot sweep.
    pub dot_pause_ms: u64,
    /// Queue the sweep for the first tick.
    pub self_test_on_start: bool,
    /// Fixed seed for the first field; wall time when absent.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        let layout = TileLayout::REFERENCE;
        Self {
            tile_height: layout.tile_height,
            tile_width: layout.tile_width,
            tiles_across: layout.tiles_across,
            tiles_down: layout.tiles_down,
            frame_delay_ms: 100,
            stale_limit: DEFAULT_STALE_LIMIT,
            test_pause_ms: 100,
            dot_pause_ms: 50,
            self_test_on_start: true,
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Load from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the environment.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };

        if let Some(delay) = parse_var(&lookup, DELAY_VAR)? {
            config.frame_delay_ms = delay;
        }
        if let Some(limit) = parse_var(&lookup, STALE_LIMIT_VAR)? {
            config.stale_limit = limit;
        }
        if let Some(seed) = parse_var(&lookup, SEED_VAR)? {
            config.seed = Some(seed);
        }
        if let Some(value) = lookup(SELF_TEST_VAR) {
            config.self_test_on_start = parse_flag(&value).ok_or(ConfigError::InvalidValue {
                key: SELF_TEST_VAR,
                value,
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_height == 0 || self.tile_width == 0 {
            return Err(ConfigError::Invalid("tile dimensions must be non-zero"));
        }
        if self.tiles_across == 0 || self.tiles_down == 0 {
            return Err(ConfigError::Invalid("tile counts must be non-zero"));
        }
        if TileLayout::checked_cells(
            self.tile_height,
            self.tile_width,
            self.tiles_across,
            self.tiles_down,
        )
        .is_none()
        {
            return Err(ConfigError::Invalid("layout too large"));
        }
        if self.stale_limit == 0 {
            return Err(ConfigError::Invalid("stale limit must be non-zero"));
        }
        Ok(())
    }

    pub fn layout(&self) -> MatrixResult<TileLayout> {
        TileLayout::new(
            self.tile_height,
            self.tile_width,
            self.tiles_across,
            self.tiles_down,
        )
    }

    pub const fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub const fn test_pause(&self) -> Duration {
        Duration::from_millis(self.test_pause_ms)
    }

    pub const fn dot_pause(&self) -> Duration {
        Duration::from_millis(self.dot_pause_ms)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    match value.trim().parse() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigError::InvalidValue { key, value }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
