//! Axis-aligned movement against wall tiles.
use glam::Vec2;

use crate::config::TILE_SIZE;
use crate::core::world::Wall;

/// Axis-aligned box given by center and half extents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: f32) -> Self {
        Self { center, half: Vec2::splat(size * 0.5) }
    }

    /// Strict overlap; boxes sharing only an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let d = (self.center - other.center).abs();
        let reach = self.half + other.half;
        d.x < reach.x && d.y < reach.y
    }
}

pub fn hits_any_wall(b: &Aabb, walls: &[Wall]) -> bool {
    walls.iter().any(|w| b.overlaps(&w.aabb()))
}

/// Move a box by `delta`, one axis at a time. An axis whose step would end
/// inside a wall is reverted, so the other axis still slides along it.
///
/// Long moves are cut into sub-steps of at most half a wall plus half the
/// box, so no step can jump over a tile.
pub fn move_and_slide(center: Vec2, size: f32, delta: Vec2, walls: &[Wall]) -> Vec2 {
    let max_step = (TILE_SIZE + size) * 0.5;
    let longest = delta.x.abs().max(delta.y.abs());
    let steps = (longest / max_step).ceil().max(1.0) as u32;
    let part = delta / steps as f32;

    let mut pos = center;
    for _ in 0..steps {
        pos = slide_once(pos, size, part, walls);
    }
    pos
}

fn slide_once(center: Vec2, size: f32, delta: Vec2, walls: &[Wall]) -> Vec2 {
    let mut pos = center;

    if delta.x != 0.0 {
        let candidate = Vec2::new(pos.x + delta.x, pos.y);
        if !hits_any_wall(&Aabb::new(candidate, size), walls) {
            pos = candidate;
        }
    }
    if delta.y != 0.0 {
        let candidate = Vec2::new(pos.x, pos.y + delta.y);
        if !hits_any_wall(&Aabb::new(candidate, size), walls) {
            pos = candidate;
        }
    }
    pos
}
