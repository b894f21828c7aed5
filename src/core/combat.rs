//! Enemy pursuit, melee, contact damage, pickups and the per-tick step.
use glam::Vec2;

use crate::config::GameConfig;
use crate::core::collision::{Aabb, move_and_slide};
use crate::core::process_events::Direction;
use crate::core::world::{EntityId, World};

/// How a playthrough ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Result of an attack request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attack {
    /// Cooldown still running; nothing happened.
    CoolingDown,
    Swung { hit: Vec<EntityId>, killed: Vec<EntityId> },
}

/// Straight-line chase velocity; zero when already on top of the target.
pub fn pursuit_velocity(from: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let to = target - from;
    let dist = to.length();
    if dist > 0.0 { to / dist * speed } else { Vec2::ZERO }
}

pub fn steer_enemies(world: &mut World, speed: f32) {
    let target = world.player.pos;
    for enemy in &mut world.enemies {
        enemy.vel = pursuit_velocity(enemy.pos, target, speed);
    }
}

/// Melee swing around the player. Every enemy strictly inside the radius
/// takes damage; the ones that drop to zero are removed and pay the bonus.
pub fn attack(world: &mut World, cfg: &GameConfig) -> Attack {
    if world.attack_cooldown > 0.0 {
        return Attack::CoolingDown;
    }
    world.attack_cooldown = cfg.attack_cooldown;

    let center = world.player.pos;
    let mut hit = Vec::new();
    let mut killed = Vec::new();
    for enemy in &mut world.enemies {
        if enemy.pos.distance(center) < cfg.melee_radius {
            enemy.health = (enemy.health - cfg.attack_damage).max(0.0);
            hit.push(enemy.id);
            if !enemy.is_alive() {
                killed.push(enemy.id);
            }
        }
    }
    world.enemies.retain(|e| e.is_alive());
    world.score += cfg.kill_bonus * killed.len() as u32;
    if !killed.is_empty() {
        log::debug!("attack killed {} enemies, score {}", killed.len(), world.score);
    }
    Attack::Swung { hit, killed }
}

/// Damage from every enemy touching the player this tick. Returns true once
/// the player is dead; health is clamped at zero.
pub fn apply_contact_damage(world: &mut World, cfg: &GameConfig, dt: f32) -> bool {
    let body = world.player.aabb(cfg.actor_size);
    let touching = world
        .enemies
        .iter()
        .filter(|e| e.aabb(cfg.actor_size).overlaps(&body))
        .count();
    if touching > 0 {
        world.player.health -= cfg.contact_dps * dt * touching as f32;
    }
    if world.player.health <= 0.0 {
        world.player.health = 0.0;
        return true;
    }
    false
}

/// Remove coins under the player; returns how many were picked up.
pub fn collect_coins(world: &mut World, cfg: &GameConfig) -> usize {
    let body = world.player.aabb(cfg.actor_size);
    let before = world.coins.len();
    world.coins.retain(|c| !body.overlaps(&Aabb::new(c.pos, cfg.coin_size)));
    let taken = before - world.coins.len();
    world.score += cfg.coin_value * taken as u32;
    taken
}

/// Advance one tick of play. `player_vel` comes from the held movement keys.
pub fn step(world: &mut World, player_vel: Vec2, cfg: &GameConfig, dt: f32) -> Option<Outcome> {
    if world.attack_cooldown > 0.0 {
        world.attack_cooldown = (world.attack_cooldown - dt).max(0.0);
    }

    world.player.vel = player_vel;
    world.player.pos = move_and_slide(world.player.pos, cfg.actor_size, player_vel * dt, &world.walls);
    world.player.direction = Direction::from_velocity(player_vel);

    steer_enemies(world, cfg.enemy_speed);
    let walls = &world.walls;
    for enemy in &mut world.enemies {
        enemy.pos = move_and_slide(enemy.pos, cfg.actor_size, enemy.vel * dt, walls);
        enemy.direction = Direction::from_velocity(enemy.vel);
    }

    collect_coins(world, cfg);

    if apply_contact_damage(world, cfg, dt) {
        return Some(Outcome::Lost);
    }
    if world.coins.is_empty() {
        return Some(Outcome::Won);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapSize;
    use crate::core::collision::hits_any_wall;
    use crate::core::world::Coin;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn arena() -> (World, GameConfig) {
        let cfg = GameConfig::default();
        let mut world = World::bare(MapSize::Small, &cfg);
        world.player.pos = Vec2::new(200.0, 200.0);
        // a far coin keeps the win check quiet
        world.coins.push(Coin { pos: Vec2::new(700.0, 500.0) });
        (world, cfg)
    }

    #[test]
    fn chase_points_at_player() {
        let v = pursuit_velocity(Vec2::new(0.0, 0.0), Vec2::new(30.0, 40.0), 120.0);
        assert!((v - Vec2::new(72.0, 96.0)).length() < 1e-3);
        assert_eq!(pursuit_velocity(Vec2::ONE, Vec2::ONE, 120.0), Vec2::ZERO);
    }

    #[test]
    fn first_hit_wounds_second_kills() {
        let (mut world, cfg) = arena();
        let id = world.spawn_enemy(Vec2::new(230.0, 200.0), 50.0);

        let first = attack(&mut world, &cfg);
        assert_eq!(first, Attack::Swung { hit: vec![id], killed: vec![] });
        assert_eq!(world.enemy(id).unwrap().health, 25.0);
        assert_eq!(world.attack_cooldown, 0.5);
        assert_eq!(world.score, 0);

        world.attack_cooldown = 0.0;
        let second = attack(&mut world, &cfg);
        assert_eq!(second, Attack::Swung { hit: vec![id], killed: vec![id] });
        assert!(world.enemy(id).is_none());
        assert_eq!(world.score, 50);
    }

    #[test]
    fn attack_during_cooldown_is_a_no_op() {
        let (mut world, cfg) = arena();
        let id = world.spawn_enemy(Vec2::new(230.0, 200.0), 50.0);
        world.attack_cooldown = 0.2;
        assert_eq!(attack(&mut world, &cfg), Attack::CoolingDown);
        assert_eq!(world.enemy(id).unwrap().health, 50.0);
        assert_eq!(world.attack_cooldown, 0.2);
    }

    #[test]
    fn only_enemies_strictly_inside_radius_are_hit() {
        let (mut world, cfg) = arena();
        let near_a = world.spawn_enemy(Vec2::new(200.0, 150.0), 50.0);
        let near_b = world.spawn_enemy(Vec2::new(140.0, 200.0), 25.0);
        let edge = world.spawn_enemy(Vec2::new(296.0, 200.0), 50.0);
        let far = world.spawn_enemy(Vec2::new(500.0, 500.0), 50.0);

        let Attack::Swung { hit, killed } = attack(&mut world, &cfg) else {
            panic!("attack should swing");
        };
        assert_eq!(hit, vec![near_a, near_b]);
        assert_eq!(killed, vec![near_b]);
        assert_eq!(world.enemy(near_a).unwrap().health, 25.0);
        assert_eq!(world.enemy(edge).unwrap().health, 50.0);
        assert_eq!(world.enemy(far).unwrap().health, 50.0);
        assert_eq!(world.score, 50);
        assert_eq!(world.enemies.len(), 3);
    }

    #[test]
    fn cooldown_runs_down_with_ticks() {
        let (mut world, cfg) = arena();
        world.attack_cooldown = 0.5;
        step(&mut world, Vec2::ZERO, &cfg, 0.3);
        assert!((world.attack_cooldown - 0.2).abs() < 1e-6);
        step(&mut world, Vec2::ZERO, &cfg, 0.3);
        assert_eq!(world.attack_cooldown, 0.0);
    }

    #[test]
    fn contact_damage_scales_with_touching_enemies() {
        let (mut world, cfg) = arena();
        world.spawn_enemy(Vec2::new(210.0, 200.0), 50.0);
        world.spawn_enemy(Vec2::new(190.0, 200.0), 50.0);
        world.spawn_enemy(Vec2::new(400.0, 400.0), 50.0);
        let dead = apply_contact_damage(&mut world, &cfg, 0.5);
        assert!(!dead);
        assert!((world.player.health - (100.0 - 5.0 * 0.5 * 2.0)).abs() < 1e-4);
    }

    #[test]
    fn dying_clamps_health_and_loses() {
        let (mut world, cfg) = arena();
        world.player.health = 0.01;
        world.spawn_enemy(Vec2::new(200.0, 200.0), 50.0);
        assert_eq!(step(&mut world, Vec2::ZERO, &cfg, 0.05), Some(Outcome::Lost));
        assert_eq!(world.player.health, 0.0);
    }

    #[test]
    fn last_coin_wins() {
        let (mut world, cfg) = arena();
        world.coins.clear();
        world.coins.push(Coin { pos: Vec2::new(210.0, 200.0) });
        world.spawn_enemy(Vec2::new(600.0, 500.0), 50.0);
        assert_eq!(step(&mut world, Vec2::ZERO, &cfg, 1.0 / 60.0), Some(Outcome::Won));
        assert_eq!(world.score, 10);
        assert_eq!(world.enemies.len(), 1);
    }

    #[test]
    fn enemies_close_in_and_slide() {
        let (mut world, cfg) = arena();
        let id = world.spawn_enemy(Vec2::new(500.0, 200.0), 50.0);
        let before = world.enemy(id).unwrap().pos.distance(world.player.pos);
        for _ in 0..10 {
            step(&mut world, Vec2::ZERO, &cfg, 1.0 / 60.0);
        }
        let e = world.enemy(id).unwrap();
        assert!(e.pos.distance(world.player.pos) < before);
        assert_eq!(e.direction, Direction::Left);
    }

    #[test]
    fn fast_player_stays_inside_the_border() {
        let (mut world, mut cfg) = arena();
        cfg.player_speed = 1500.0;
        world.player.pos = Vec2::new(96.0, 300.0);
        step(&mut world, Vec2::new(-cfg.player_speed, 0.0), &cfg, 0.1);
        assert!(world.player.pos.x > 0.0);
        assert!(!hits_any_wall(&world.player.aabb(cfg.actor_size), &world.walls));
    }

    proptest! {
        #[test]
        fn nothing_ever_ends_inside_a_wall(
            seed in any::<u64>(),
            moves in proptest::collection::vec((-1i8..=1, -1i8..=1), 1..120),
        ) {
            let cfg = GameConfig::default();
            let mut world = World::setup(MapSize::Small, &cfg, &mut StdRng::seed_from_u64(seed));
            // immortal, so every scripted tick actually runs
            world.player.health = f32::MAX;
            for (mx, my) in moves {
                let v = Vec2::new(mx as f32, my as f32).normalize_or_zero() * cfg.player_speed;
                step(&mut world, v, &cfg, 1.0 / 30.0);
                prop_assert!(!hits_any_wall(&world.player.aabb(cfg.actor_size), &world.walls));
                for e in &world.enemies {
                    prop_assert!(!hits_any_wall(&Aabb::new(e.pos, cfg.actor_size), &world.walls));
                }
            }
        }
    }
}
