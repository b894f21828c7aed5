//! Maze generation (recursive backtracker).
//!
//! The maze lives on an odd-sized logical grid; only its wall cells survive,
//! converted to pixel-space tile centers.
use glam::Vec2;
use rand::Rng;
use rand::seq::SliceRandom;

/// Logical grid of cells, `true` = open passage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub width: usize,
    pub height: usize,
    open: Vec<bool>,
}

/// Logical maze size (always odd, at least 7x7) for a play area in pixels.
/// A one-tile border on each side is kept for the boundary walls.
pub fn logical_size(play_w: f32, play_h: f32, tile: f32) -> (usize, usize) {
    let cells = |extent: f32| -> usize {
        let max_cells = ((extent - 2.0 * tile) / tile).floor() as i64;
        // degenerate areas still get a 3x3 room grid so carving terminates
        let rooms = ((max_cells - 1) / 2).max(3) as usize;
        rooms * 2 + 1
    };
    (cells(play_w), cells(play_h))
}

impl Maze {
    /// All-wall grid with nothing carved yet.
    fn solid(width: usize, height: usize) -> Self {
        Self { width, height, open: vec![false; width * height] }
    }

    /// Carve a perfect maze from cell (1,1). Same rng state => same maze.
    pub fn carve<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let mut maze = Self::solid(width, height);
        maze.set_open(1, 1);
        let mut stack = vec![(1usize, 1usize)];

        while let Some(&(x, y)) = stack.last() {
            let mut neighbors: Vec<(usize, usize)> = Vec::with_capacity(4);
            for (dx, dy) in [(2i64, 0i64), (-2, 0), (0, 2), (0, -2)] {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 1 || ny < 1 || nx >= width as i64 - 1 || ny >= height as i64 - 1 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !maze.is_open(nx, ny) {
                    neighbors.push((nx, ny));
                }
            }

            match neighbors.choose(rng) {
                Some(&(nx, ny)) => {
                    maze.set_open(nx, ny);
                    maze.set_open((x + nx) / 2, (y + ny) / 2);
                    stack.push((nx, ny));
                }
                None => {
                    stack.pop();
                }
            }
        }
        maze
    }

    #[inline]
    pub fn is_open(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height && self.open[row * self.width + col]
    }

    #[inline]
    fn set_open(&mut self, col: usize, row: usize) {
        self.open[row * self.width + col] = true;
    }

    pub fn open_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    /// Number of open cells reachable from (1,1) through 4-neighbour moves.
    pub fn reachable_from_start(&self) -> usize {
        if !self.is_open(1, 1) {
            return 0;
        }
        let mut seen = vec![false; self.open.len()];
        let mut stack = vec![(1usize, 1usize)];
        seen[self.width + 1] = true;
        let mut count = 0;
        while let Some((x, y)) = stack.pop() {
            count += 1;
            let around = [
                (x.wrapping_sub(1), y),
                (x + 1, y),
                (x, y.wrapping_sub(1)),
                (x, y + 1),
            ];
            for (nx, ny) in around {
                if self.is_open(nx, ny) && !seen[ny * self.width + nx] {
                    seen[ny * self.width + nx] = true;
                    stack.push((nx, ny));
                }
            }
        }
        count
    }

    /// Pixel center of a logical cell: the grid starts one tile in from the origin.
    pub fn cell_center(col: usize, row: usize, tile: f32) -> Vec2 {
        Vec2::new(tile + col as f32 * tile, tile + row as f32 * tile)
    }

    /// Wall tiles in pixel space, minus any tile whose footprint would cover `start`.
    pub fn wall_positions(&self, tile: f32, start: Vec2) -> Vec<Vec2> {
        let mut walls = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.is_open(col, row) {
                    continue;
                }
                let c = Self::cell_center(col, row, tile);
                if (c.x - start.x).abs() < tile && (c.y - start.y).abs() < tile {
                    continue;
                }
                walls.push(c);
            }
        }
        walls
    }
}

/// Maze wall tiles for a play area, keeping the player start clear.
pub fn generate_maze<R: Rng + ?Sized>(
    play_w: f32,
    play_h: f32,
    tile: f32,
    start: Vec2,
    rng: &mut R,
) -> Vec<Vec2> {
    let (w, h) = logical_size(play_w, play_h, tile);
    let maze = Maze::carve(w, h, rng);
    log::debug!("carved {}x{} maze, {} open cells", w, h, maze.open_count());
    maze.wall_positions(tile, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TILE: f32 = 64.0;

    #[test]
    fn small_preset_dimensions() {
        // 800 wide: (672/64)=10 cells -> 4 rooms -> 9; 600 high: 7 cells -> 3 rooms -> 7
        assert_eq!(logical_size(800.0, 600.0, TILE), (9, 7));
        assert_eq!(logical_size(2000.0, 1500.0, TILE), (29, 21));
    }

    #[test]
    fn degenerate_area_is_clamped() {
        assert_eq!(logical_size(0.0, 0.0, TILE), (7, 7));
        assert_eq!(logical_size(100.0, 300.0, TILE), (7, 7));
    }

    #[test]
    fn seven_by_seven_is_fully_connected() {
        let mut rng = StdRng::seed_from_u64(7);
        let maze = Maze::carve(7, 7, &mut rng);
        assert!(maze.is_open(1, 1));
        // every room cell (odd, odd) is carved in a perfect maze
        for row in (1..7).step_by(2) {
            for col in (1..7).step_by(2) {
                assert!(maze.is_open(col, row), "room ({col},{row}) left solid");
            }
        }
        assert_eq!(maze.reachable_from_start(), maze.open_count());
    }

    #[test]
    fn perfect_maze_has_no_cycles() {
        // spanning tree over R rooms: R rooms + (R - 1) connectors
        let mut rng = StdRng::seed_from_u64(99);
        let maze = Maze::carve(21, 15, &mut rng);
        let rooms = 10 * 7;
        assert_eq!(maze.open_count(), rooms + rooms - 1);
    }

    #[test]
    fn border_ring_stays_solid() {
        let mut rng = StdRng::seed_from_u64(3);
        let maze = Maze::carve(11, 9, &mut rng);
        for col in 0..11 {
            assert!(!maze.is_open(col, 0));
            assert!(!maze.is_open(col, 8));
        }
        for row in 0..9 {
            assert!(!maze.is_open(0, row));
            assert!(!maze.is_open(10, row));
        }
    }

    #[test]
    fn start_tile_is_never_a_wall() {
        let start = Vec2::new(96.0, 96.0);
        let mut rng = StdRng::seed_from_u64(11);
        let walls = generate_maze(800.0, 600.0, TILE, start, &mut rng);
        assert!(!walls.is_empty());
        for w in &walls {
            assert!((w.x - start.x).abs() >= TILE || (w.y - start.y).abs() >= TILE);
        }
    }

    #[test]
    fn same_seed_same_walls() {
        let start = Vec2::new(96.0, 96.0);
        let a = generate_maze(1200.0, 900.0, TILE, start, &mut StdRng::seed_from_u64(42));
        let b = generate_maze(1200.0, 900.0, TILE, start, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn any_area_yields_connected_maze(w in 0.0f32..2600.0, h in 0.0f32..2000.0, seed in any::<u64>()) {
            let (cols, rows) = logical_size(w, h, TILE);
            prop_assert!(cols % 2 == 1 && rows % 2 == 1);
            let maze = Maze::carve(cols, rows, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(maze.reachable_from_start(), maze.open_count());
        }
    }
}
