//! Dungeon crawler core: a procedurally carved maze, coins to collect and
//! enemies that chase the player. Everything here is headless; the raylib
//! window lives in the binary behind the `frontend` feature.

pub mod config;
pub mod core;
pub mod highscore;

pub use crate::config::{GameConfig, MapSize, TILE_SIZE};
pub use crate::core::combat::Outcome;
pub use crate::core::process_events::{Direction, Input, MoveDir};
pub use crate::core::state::{Game, GameState};
pub use crate::core::world::World;
pub use crate::highscore::{HighscoreBoard, JsonHighscores, MemoryHighscores};
