//! Core game types and logic (maze, world, movement, combat, flow).
//!
//! Modules:
//! - `maze`: recursive-backtracker maze generation
//! - `world`: walls, coins, enemies, player and level setup
//! - `collision`: axis-separated movement against walls
//! - `combat`: enemy pursuit, melee, contact damage, pickups, per-tick step
//! - `process_events`: abstract inputs, movement intent, facing
//! - `state`: menu/play/pause/game-over state machine

pub mod collision;
pub mod combat;
pub mod maze;
pub mod process_events;
pub mod state;
pub mod world;
