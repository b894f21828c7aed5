//! Abstract input events and the movement intent they toggle.
//!
//! The frontend maps physical keys to [`Input`]; the core never sees a key code.
use glam::Vec2;

/// One of the four held movement keys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveDir {
    Up,
    Down,
    Left,
    Right,
}

/// Discrete events delivered to the state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    /// Start a new game / restart (Enter).
    Confirm,
    /// Back out of a screen (Esc).
    Cancel,
    Pause,
    /// Leave a paused game for the menu.
    Quit,
    Attack,
    OpenMapSize,
    OpenSettings,
    OpenHighscores,
    SelectMapSize(crate::config::MapSize),
    Press(MoveDir),
    Release(MoveDir),
}

/// Which movement keys are currently held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    pub fn set(&mut self, dir: MoveDir, held: bool) {
        match dir {
            MoveDir::Up => self.up = held,
            MoveDir::Down => self.down = held,
            MoveDir::Left => self.left = held,
            MoveDir::Right => self.right = held,
        }
    }

    /// Velocity for the held keys; diagonals are normalized to the same speed.
    /// Screen space: up is -y.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.up {
            v.y -= 1.0;
        }
        if self.down {
            v.y += 1.0;
        }
        if self.left {
            v.x -= 1.0;
        }
        if self.right {
            v.x += 1.0;
        }
        v.normalize_or_zero() * speed
    }
}

/// Nine-way facing used to pick animation frames.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Idle,
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// Bucket a velocity into 45 degree sectors centred on the compass points.
    pub fn from_velocity(v: Vec2) -> Direction {
        if v == Vec2::ZERO {
            return Direction::Idle;
        }
        // flip y so counter-clockwise angles read the way a player sees the screen
        let mut deg = (-v.y).atan2(v.x).to_degrees();
        if deg < 0.0 {
            deg += 360.0;
        }
        match deg {
            d if !(22.5..337.5).contains(&d) => Direction::Right,
            d if d < 67.5 => Direction::UpRight,
            d if d < 112.5 => Direction::Up,
            d if d < 157.5 => Direction::UpLeft,
            d if d < 202.5 => Direction::Left,
            d if d < 247.5 => Direction::DownLeft,
            d if d < 292.5 => Direction::Down,
            _ => Direction::DownRight,
        }
    }
}
