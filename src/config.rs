//! Gameplay tunables and map-size presets.
//!
//! `GameConfig::default()` is the stock game. A JSON file can override any
//! subset of fields; missing fields keep their defaults.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side of one square tile in pixels. Walls are exactly one tile.
pub const TILE_SIZE: f32 = 64.0;

/// Largest simulated step; longer frames are clamped so nothing tunnels through a wall.
pub const MAX_STEP: f32 = 0.1;

/// Named play-area presets, ordered smallest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapSize {
    #[default]
    Small,
    Medium,
    Large,
    Huge,
}

impl MapSize {
    pub const ALL: [MapSize; 4] = [MapSize::Small, MapSize::Medium, MapSize::Large, MapSize::Huge];

    /// (width, height) of the play area in pixels.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            MapSize::Small => (800.0, 600.0),
            MapSize::Medium => (1200.0, 900.0),
            MapSize::Large => (1600.0, 1200.0),
            MapSize::Huge => (2000.0, 1500.0),
        }
    }

    /// 0 for the smallest preset, counting up.
    pub fn rank(self) -> usize {
        match self {
            MapSize::Small => 0,
            MapSize::Medium => 1,
            MapSize::Large => 2,
            MapSize::Huge => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MapSize::Small => "small",
            MapSize::Medium => "medium",
            MapSize::Large => "large",
            MapSize::Huge => "huge",
        }
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MapSize::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown map size '{s}' (expected small, medium, large or huge)"))
    }
}

/// Every number the simulation uses. Speeds are pixels per second.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub player_health: f32,
    pub enemy_health: f32,
    pub attack_damage: f32,
    /// Seconds between two attacks.
    pub attack_cooldown: f32,
    pub melee_radius: f32,
    pub kill_bonus: u32,
    pub coin_value: u32,
    /// Health lost per second per touching enemy.
    pub contact_dps: f32,

    pub coin_base: usize,
    pub coin_step: usize,
    pub coin_attempts: usize,
    pub coin_exclusion: f32,
    pub enemy_base: usize,
    pub enemy_step: usize,
    pub enemy_attempts: usize,
    pub enemy_exclusion: f32,

    /// Side of the square footprint shared by player and enemies.
    pub actor_size: f32,
    pub coin_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 300.0,
            enemy_speed: 120.0,
            player_health: 100.0,
            enemy_health: 50.0,
            attack_damage: 25.0,
            attack_cooldown: 0.5,
            melee_radius: TILE_SIZE * 1.5,
            kill_bonus: 50,
            coin_value: 10,
            contact_dps: 5.0,

            coin_base: 10,
            coin_step: 5,
            coin_attempts: 120,
            coin_exclusion: TILE_SIZE * 3.0,
            enemy_base: 3,
            enemy_step: 2,
            enemy_attempts: 100,
            enemy_exclusion: TILE_SIZE * 5.0,

            actor_size: 40.0,
            coin_size: 32.0,
        }
    }
}

impl GameConfig {
    /// Nominal coin count for a preset; larger maps get more.
    pub fn coin_target(&self, map: MapSize) -> usize {
        self.coin_base + self.coin_step * (map.rank() + 1)
    }

    pub fn enemy_target(&self, map: MapSize) -> usize {
        self.enemy_base + self.enemy_step * (map.rank() + 1)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
