//! Top-ten score table.
//!
//! The game only talks to [`HighscoreBoard`]. [`JsonHighscores`] keeps the
//! table in a small JSON file; read or write failures are logged and the game
//! carries on with whatever is in memory.
use std::fs;
use std::path::{Path, PathBuf};

pub const MAX_ENTRIES: usize = 10;

/// Scores shown when nothing has been recorded yet.
pub const DEFAULT_SCORES: [u32; 5] = [100, 80, 50, 30, 10];

pub trait HighscoreBoard {
    /// Recorded scores, best first.
    fn scores(&self) -> &[u32];

    /// Insert a score, keep the best ten and persist. Zero scores are ignored.
    fn add_score(&mut self, score: u32);

    fn is_high_score(&self, score: u32) -> bool {
        let scores = self.scores();
        scores.len() < MAX_ENTRIES || scores.iter().min().is_some_and(|&min| score > min)
    }
}

fn insert_sorted(scores: &mut Vec<u32>, score: u32) {
    scores.push(score);
    scores.sort_unstable_by(|a, b| b.cmp(a));
    scores.truncate(MAX_ENTRIES);
}

/// Board that lives only as long as the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryHighscores {
    scores: Vec<u32>,
}

impl MemoryHighscores {
    pub fn new(mut scores: Vec<u32>) -> Self {
        scores.sort_unstable_by(|a, b| b.cmp(a));
        scores.truncate(MAX_ENTRIES);
        Self { scores }
    }
}

impl Default for MemoryHighscores {
    fn default() -> Self {
        Self::new(DEFAULT_SCORES.to_vec())
    }
}

impl HighscoreBoard for MemoryHighscores {
    fn scores(&self) -> &[u32] {
        &self.scores
    }

    fn add_score(&mut self, score: u32) {
        if score > 0 {
            insert_sorted(&mut self.scores, score);
        }
    }
}

/// Board persisted as a JSON array of integers.
#[derive(Debug)]
pub struct JsonHighscores {
    path: PathBuf,
    scores: Vec<u32>,
}

impl JsonHighscores {
    /// Read the table at `path`; a missing or broken file means the defaults.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let scores = match Self::read(&path) {
            Ok(Some(scores)) => scores,
            Ok(None) => DEFAULT_SCORES.to_vec(),
            Err(e) => {
                log::warn!("could not load highscores from {}: {e}", path.display());
                DEFAULT_SCORES.to_vec()
            }
        };
        let mut board = Self { path, scores: Vec::new() };
        for s in scores {
            insert_sorted(&mut board.scores, s);
        }
        board
    }

    fn read(path: &Path) -> Result<Option<Vec<u32>>, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&self) {
        let text = match serde_json::to_string_pretty(&self.scores) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("could not encode highscores: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, text) {
            log::warn!("could not save highscores to {}: {e}", self.path.display());
        }
    }
}

impl HighscoreBoard for JsonHighscores {
    fn scores(&self) -> &[u32] {
        &self.scores
    }

    fn add_score(&mut self, score: u32) {
        if score > 0 {
            insert_sorted(&mut self.scores, score);
            self.save();
        }
    }
}
