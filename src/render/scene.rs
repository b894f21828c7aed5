//! Top-down drawing of the level. Shapes only; no textures.
use raylib::prelude::*;

use dungeon_crawler::config::{GameConfig, TILE_SIZE};
use dungeon_crawler::core::world::{Entity, World};
use dungeon_crawler::Direction;

const WALL: Color = Color { r: 86, g: 125, b: 70, a: 255 };
const WALL_EDGE: Color = Color { r: 58, g: 88, b: 46, a: 255 };
const PLAYER: Color = Color { r: 90, g: 160, b: 230, a: 255 };
const ENEMY: Color = Color { r: 120, g: 170, b: 90, a: 255 };

pub fn draw_world<D: RaylibDraw>(d: &mut D, world: &World, cfg: &GameConfig) {
    let t = TILE_SIZE as i32;
    for w in &world.walls {
        let x = (w.center.x - TILE_SIZE / 2.0) as i32;
        let y = (w.center.y - TILE_SIZE / 2.0) as i32;
        d.draw_rectangle(x, y, t, t, WALL);
        d.draw_rectangle_lines(x, y, t, t, WALL_EDGE);
    }

    for c in &world.coins {
        d.draw_circle(c.pos.x as i32, c.pos.y as i32, cfg.coin_size / 2.0, Color::GOLD);
        d.draw_circle(c.pos.x as i32, c.pos.y as i32, cfg.coin_size / 4.0, Color::ORANGE);
    }

    for e in &world.enemies {
        draw_actor(d, e, cfg.actor_size, ENEMY);
        health_bar(d, e, cfg.enemy_health);
    }

    draw_actor(d, &world.player, cfg.actor_size, PLAYER);
}

fn draw_actor<D: RaylibDraw>(d: &mut D, e: &Entity, size: f32, color: Color) {
    let half = size / 2.0;
    d.draw_rectangle((e.pos.x - half) as i32, (e.pos.y - half) as i32, size as i32, size as i32, color);

    // small marker on the side the actor is heading
    let (fx, fy) = facing(e.direction);
    let mx = e.pos.x + fx * half * 0.6;
    let my = e.pos.y + fy * half * 0.6;
    d.draw_circle(mx as i32, my as i32, size * 0.12, Color::BLACK);
}

fn facing(dir: Direction) -> (f32, f32) {
    let k = std::f32::consts::FRAC_1_SQRT_2;
    match dir {
        Direction::Idle => (0.0, 0.0),
        Direction::Right => (1.0, 0.0),
        Direction::UpRight => (k, -k),
        Direction::Up => (0.0, -1.0),
        Direction::UpLeft => (-k, -k),
        Direction::Left => (-1.0, 0.0),
        Direction::DownLeft => (-k, k),
        Direction::Down => (0.0, 1.0),
        Direction::DownRight => (k, k),
    }
}

fn health_bar<D: RaylibDraw>(d: &mut D, e: &Entity, max: f32) {
    let bar_w = 40;
    let bar_h = 5;
    let left = e.pos.x as i32 - bar_w / 2;
    let top = e.pos.y as i32 - 40;
    d.draw_rectangle(left, top, bar_w, bar_h, Color::RED);
    let frac = if max > 0.0 { (e.health / max).clamp(0.0, 1.0) } else { 0.0 };
    d.draw_rectangle(left, top, (bar_w as f32 * frac) as i32, bar_h, Color::GREEN);
}
