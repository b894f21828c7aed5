//! Drawing for the raylib frontend.
//!
//! Modules:
//! - `scene`: walls, coins, enemies and the player
//! - `hud`: score, health and cooldown overlay
//! - `screens`: menus, pause and game-over overlays

pub mod hud;
pub mod scene;
pub mod screens;

use raylib::prelude::*;

use dungeon_crawler::{Game, GameState, HighscoreBoard};

/// Draw a whole frame for the current state.
pub fn draw_frame<D: RaylibDraw, H: HighscoreBoard>(d: &mut D, game: &Game<H>, screen_w: i32, screen_h: i32) {
    d.clear_background(Color::new(50, 50, 56, 255));
    match game.state() {
        GameState::Menu => screens::main_menu(d, screen_w, screen_h),
        GameState::MapSizeSelect => screens::map_size_menu(d, game.map_size(), screen_w, screen_h),
        GameState::Settings => screens::controls(d, screen_w, screen_h),
        GameState::HighscoreView => screens::highscores(d, game.highscores().scores(), screen_w, screen_h),
        GameState::Playing => {
            scene::draw_world(d, game.world(), game.config());
            hud::draw(d, game.world(), game.config());
        }
        GameState::Paused => {
            scene::draw_world(d, game.world(), game.config());
            hud::draw(d, game.world(), game.config());
            screens::pause_overlay(d, screen_w, screen_h);
        }
        GameState::GameOver(outcome) => {
            scene::draw_world(d, game.world(), game.config());
            screens::game_over(d, outcome, game.world().score, game.new_high_score(), screen_w, screen_h);
        }
    }
}

/// Left edge that roughly centres `text` at `size` around `cx`.
pub(crate) fn centered_x(text: &str, size: i32, cx: i32) -> i32 {
    cx - (text.chars().count() as i32 * size) / 4
}
