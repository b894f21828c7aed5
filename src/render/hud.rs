use raylib::prelude::*;

use dungeon_crawler::config::GameConfig;
use dungeon_crawler::World;

pub fn draw<D: RaylibDraw>(d: &mut D, world: &World, cfg: &GameConfig) {
    d.draw_text(&format!("Score: {}", world.score), 10, 10, 24, Color::WHITE);

    let health = world.player.health;
    // same bands as a 100 hp bar: below half is orange, below a quarter red
    let color = if health < cfg.player_health * 0.25 {
        Color::RED
    } else if health < cfg.player_health * 0.5 {
        Color::ORANGE
    } else {
        Color::GREEN
    };
    d.draw_text(&format!("Health: {}", health as i32), 10, 40, 20, color);

    if world.attack_cooldown > 0.0 {
        d.draw_text("Cooldown...", 10, 66, 16, Color::YELLOW);
    }
    d.draw_text(
        &format!("Coins left: {}", world.coins.len()),
        10,
        86,
        16,
        Color::LIGHTGRAY,
    );
}
