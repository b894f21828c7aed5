//! Authoritative game entities for one playthrough and their placement.
use glam::Vec2;
use rand::Rng;

use crate::config::{GameConfig, MapSize, TILE_SIZE};
use crate::core::collision::{Aabb, hits_any_wall};
use crate::core::maze::generate_maze;
use crate::core::process_events::Direction;

/// Stable handle for an entity; survives removals of its neighbours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wall {
    pub center: Vec2,
}

impl Wall {
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.center, TILE_SIZE)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coin {
    pub pos: Vec2,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
}

/// Player or enemy: a moving box with health.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: f32,
    pub direction: Direction,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, pos: Vec2, health: f32) -> Self {
        Self { id, kind, pos, vel: Vec2::ZERO, health, direction: Direction::Idle }
    }

    pub fn aabb(&self, size: f32) -> Aabb {
        Aabb::new(self.pos, size)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

/// Where the player appears: centre of the first tile inside the border.
pub fn player_spawn() -> Vec2 {
    Vec2::splat(TILE_SIZE + TILE_SIZE / 2.0)
}

/// Everything that lives on the map during one playthrough.
#[derive(Clone, Debug)]
pub struct World {
    pub map: MapSize,
    pub width: f32,
    pub height: f32,
    pub walls: Vec<Wall>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Entity>,
    pub player: Entity,
    pub score: u32,
    /// Seconds until the next attack is allowed.
    pub attack_cooldown: f32,
    next_id: u32,
}

impl World {
    /// Fresh playthrough: border, maze, coins and enemies for `map`.
    pub fn setup<R: Rng + ?Sized>(map: MapSize, cfg: &GameConfig, rng: &mut R) -> Self {
        let (width, height) = map.dimensions();
        let spawn = player_spawn();
        let mut world = World {
            map,
            width,
            height,
            walls: border_walls(width, height),
            coins: Vec::new(),
            enemies: Vec::new(),
            player: Entity::new(EntityId(0), EntityKind::Player, spawn, cfg.player_health),
            score: 0,
            attack_cooldown: 0.0,
            next_id: 1,
        };

        world
            .walls
            .extend(generate_maze(width, height, TILE_SIZE, spawn, rng).into_iter().map(|center| Wall { center }));

        let coin_target = cfg.coin_target(map);
        for _ in 0..coin_target {
            if let Some(pos) = world.place_coin(cfg, rng) {
                world.coins.push(Coin { pos });
            }
        }

        let enemy_target = cfg.enemy_target(map);
        for _ in 0..enemy_target {
            if let Some(pos) = world.place_enemy(cfg, rng) {
                let id = world.alloc_id();
                world.enemies.push(Entity::new(id, EntityKind::Enemy, pos, cfg.enemy_health));
            }
        }

        log::info!(
            "setup {map}: {} walls, {}/{} coins, {}/{} enemies",
            world.walls.len(),
            world.coins.len(),
            coin_target,
            world.enemies.len(),
            enemy_target,
        );
        world
    }

    fn alloc_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Uniform position anywhere in the interior; `None` once the attempt budget runs out.
    fn place_coin<R: Rng + ?Sized>(&self, cfg: &GameConfig, rng: &mut R) -> Option<Vec2> {
        let span_x = (self.width - 2.0 * TILE_SIZE).max(1.0);
        let span_y = (self.height - 2.0 * TILE_SIZE).max(1.0);
        for _ in 0..cfg.coin_attempts {
            let pos = Vec2::new(
                TILE_SIZE + rng.gen_range(0.0..span_x),
                TILE_SIZE + rng.gen_range(0.0..span_y),
            );
            if self.spot_is_free(pos, cfg.coin_size, cfg.coin_exclusion, cfg) {
                return Some(pos);
            }
        }
        log::debug!("coin omitted after {} attempts", cfg.coin_attempts);
        None
    }

    /// Tile-aligned interior position, far from the spawn.
    fn place_enemy<R: Rng + ?Sized>(&self, cfg: &GameConfig, rng: &mut R) -> Option<Vec2> {
        let tiles_x = (((self.width - 2.0 * TILE_SIZE) / TILE_SIZE) as i64 - 1).max(1);
        let tiles_y = (((self.height - 2.0 * TILE_SIZE) / TILE_SIZE) as i64 - 1).max(1);
        for _ in 0..cfg.enemy_attempts {
            let pos = Vec2::new(
                TILE_SIZE + rng.gen_range(1..=tiles_x) as f32 * TILE_SIZE,
                TILE_SIZE + rng.gen_range(1..=tiles_y) as f32 * TILE_SIZE,
            );
            if self.spot_is_free(pos, cfg.actor_size, cfg.enemy_exclusion, cfg) {
                return Some(pos);
            }
        }
        log::debug!("enemy omitted after {} attempts", cfg.enemy_attempts);
        None
    }

    /// Clear of walls, of everything already placed and of the spawn radius.
    fn spot_is_free(&self, pos: Vec2, size: f32, exclusion: f32, cfg: &GameConfig) -> bool {
        let b = Aabb::new(pos, size);
        if hits_any_wall(&b, &self.walls) || pos.distance(self.player.pos) < exclusion {
            return false;
        }
        if b.overlaps(&self.player.aabb(cfg.actor_size)) {
            return false;
        }
        !self.coins.iter().any(|c| b.overlaps(&Aabb::new(c.pos, cfg.coin_size)))
            && !self.enemies.iter().any(|e| b.overlaps(&e.aabb(cfg.actor_size)))
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Entity> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    /// Add an enemy outside the regular setup; returns its id.
    pub fn spawn_enemy(&mut self, pos: Vec2, health: f32) -> EntityId {
        let id = self.alloc_id();
        self.enemies.push(Entity::new(id, EntityKind::Enemy, pos, health));
        id
    }

    /// Empty map of the given preset with only the border; used to stage scenarios.
    pub fn bare(map: MapSize, cfg: &GameConfig) -> Self {
        let (width, height) = map.dimensions();
        World {
            map,
            width,
            height,
            walls: border_walls(width, height),
            coins: Vec::new(),
            enemies: Vec::new(),
            player: Entity::new(EntityId(0), EntityKind::Player, player_spawn(), cfg.player_health),
            score: 0,
            attack_cooldown: 0.0,
            next_id: 1,
        }
    }
}

/// Ring of tiles centred on the play-area edges.
pub fn border_walls(width: f32, height: f32) -> Vec<Wall> {
    let mut walls = Vec::new();
    let mut x = 0.0;
    while x < width + TILE_SIZE {
        walls.push(Wall { center: Vec2::new(x, 0.0) });
        walls.push(Wall { center: Vec2::new(x, height) });
        x += TILE_SIZE;
    }
    let mut y = TILE_SIZE;
    while y < height {
        walls.push(Wall { center: Vec2::new(0.0, y) });
        walls.push(Wall { center: Vec2::new(width, y) });
        y += TILE_SIZE;
    }
    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup(map: MapSize, seed: u64) -> (World, GameConfig) {
        let cfg = GameConfig::default();
        let world = World::setup(map, &cfg, &mut StdRng::seed_from_u64(seed));
        (world, cfg)
    }

    #[test]
    fn spawn_is_one_and_a_half_tiles_in() {
        assert_eq!(player_spawn(), Vec2::new(96.0, 96.0));
    }

    #[test]
    fn border_encloses_play_area() {
        let walls = border_walls(800.0, 600.0);
        // 14 columns top and bottom (0..=832), 9 rows each side (64..=576)
        assert_eq!(walls.len(), 14 * 2 + 9 * 2);
        assert!(walls.iter().any(|w| w.center == Vec2::new(800.0, 320.0)));
        assert!(walls.iter().any(|w| w.center == Vec2::new(832.0, 600.0)));
    }

    #[test]
    fn player_starts_clear_of_walls() {
        for map in MapSize::ALL {
            for seed in 0..8 {
                let (world, cfg) = setup(map, seed);
                assert!(!hits_any_wall(&world.player.aabb(cfg.actor_size), &world.walls));
                assert_eq!(world.player.health, cfg.player_health);
                assert_eq!(world.score, 0);
            }
        }
    }

    #[test]
    fn pickups_and_enemies_avoid_walls_and_spawn() {
        for map in MapSize::ALL {
            let (world, cfg) = setup(map, 5);
            assert!(world.coins.len() <= cfg.coin_target(map));
            assert!(world.enemies.len() <= cfg.enemy_target(map));
            for c in &world.coins {
                assert!(!hits_any_wall(&Aabb::new(c.pos, cfg.coin_size), &world.walls));
                assert!(c.pos.distance(world.player.pos) >= cfg.coin_exclusion);
            }
            for e in &world.enemies {
                assert!(!hits_any_wall(&e.aabb(cfg.actor_size), &world.walls));
                assert!(e.pos.distance(world.player.pos) >= cfg.enemy_exclusion);
                assert_eq!(e.health, cfg.enemy_health);
                assert_eq!(e.kind, EntityKind::Enemy);
            }
        }
    }

    #[test]
    fn placed_entities_never_overlap() {
        for map in MapSize::ALL {
            for seed in 0..50 {
                let (world, cfg) = setup(map, seed);
                let mut boxes = vec![world.player.aabb(cfg.actor_size)];
                boxes.extend(world.coins.iter().map(|c| Aabb::new(c.pos, cfg.coin_size)));
                boxes.extend(world.enemies.iter().map(|e| e.aabb(cfg.actor_size)));
                for (i, a) in boxes.iter().enumerate() {
                    for b in &boxes[i + 1..] {
                        assert!(!a.overlaps(b), "{map} seed {seed}: {a:?} overlaps {b:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn bigger_maps_hold_more() {
        let (small, _) = setup(MapSize::Small, 1);
        let (huge, _) = setup(MapSize::Huge, 1);
        assert!(huge.walls.len() > small.walls.len());
        assert!(huge.coins.len() > small.coins.len());
    }

    #[test]
    fn setup_is_reproducible() {
        let (a, _) = setup(MapSize::Medium, 77);
        let (b, _) = setup(MapSize::Medium, 77);
        assert_eq!(a.walls, b.walls);
        assert_eq!(a.coins, b.coins);
        assert_eq!(a.enemies, b.enemies);
    }

    #[test]
    fn exhausted_attempts_omit_the_entity() {
        let mut cfg = GameConfig::default();
        // exclusion larger than the map: nothing can ever be placed
        cfg.coin_exclusion = 10_000.0;
        cfg.enemy_exclusion = 10_000.0;
        let world = World::setup(MapSize::Small, &cfg, &mut StdRng::seed_from_u64(0));
        assert!(world.coins.is_empty());
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let (mut world, cfg) = setup(MapSize::Large, 9);
        let first = world.spawn_enemy(Vec2::new(1000.0, 700.0), cfg.enemy_health);
        let last = world.spawn_enemy(Vec2::new(1100.0, 700.0), cfg.enemy_health);
        let mut ids: Vec<_> = world.enemies.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), world.enemies.len());

        world.enemies.retain(|e| e.id != first);
        assert_eq!(world.enemy(last).map(|e| e.id), Some(last));
        assert!(world.enemy(first).is_none());
        world.enemy_mut(last).unwrap().health = 1.0;
        assert_eq!(world.enemy(last).unwrap().health, 1.0);
    }
}
