//! Menu screens and the pause / game-over overlays.
use raylib::prelude::*;

use dungeon_crawler::{MapSize, Outcome};

use super::centered_x;

const SHADE: Color = Color { r: 0, g: 0, b: 0, a: 180 };

fn title<D: RaylibDraw>(d: &mut D, text: &str, cx: i32, y: i32) {
    d.draw_text(text, centered_x(text, 44, cx), y, 44, Color::WHITE);
}

fn line<D: RaylibDraw>(d: &mut D, text: &str, cx: i32, y: i32, size: i32, color: Color) {
    d.draw_text(text, centered_x(text, size, cx), y, size, color);
}

pub fn main_menu<D: RaylibDraw>(d: &mut D, w: i32, h: i32) {
    let (cx, cy) = (w / 2, h / 2);
    d.draw_text("DUNGEON CRAWLER", centered_x("DUNGEON CRAWLER", 54, cx), cy - 170, 54, Color::WHITE);
    line(d, "Press ENTER to Start", cx, cy - 60, 32, Color::WHITE);
    line(d, "Press M for Map Size", cx, cy - 10, 24, Color::WHITE);
    line(d, "Press S for Settings", cx, cy + 30, 24, Color::WHITE);
    line(d, "Press H for Highscores", cx, cy + 70, 24, Color::WHITE);
    line(d, "Press ESC to Quit", cx, cy + 110, 24, Color::WHITE);
}

pub fn map_size_menu<D: RaylibDraw>(d: &mut D, current: MapSize, w: i32, h: i32) {
    let (cx, cy) = (w / 2, h / 2);
    title(d, "SELECT MAP SIZE", cx, cy - 200);
    for (i, size) in MapSize::ALL.into_iter().enumerate() {
        let (mw, mh) = size.dimensions();
        let text = format!("{}. {}: {}x{}px", i + 1, size.name().to_uppercase(), mw, mh);
        let selected = size == current;
        let (px, color) = if selected { (28, Color::GOLD) } else { (24, Color::WHITE) };
        line(d, &text, cx, cy - 100 + i as i32 * 50, px, color);
    }
    line(d, &format!("Current: {}", current.name().to_uppercase()), cx, cy + 110, 20, Color::LIGHTGRAY);
    line(d, "Press 1-4 to select, ESC to return", cx, h - 60, 18, Color::LIGHTGRAY);
}

pub fn controls<D: RaylibDraw>(d: &mut D, w: i32, h: i32) {
    let (cx, cy) = (w / 2, h / 2);
    title(d, "CONTROLS", cx, cy - 200);
    let rows = [
        "Movement: Arrow Keys or WASD",
        "Attack: SPACE (damages nearby enemies)",
        "Pause: P or ESC",
        "",
        "OBJECTIVE:",
        "Collect all coins while avoiding/defeating zombies!",
        "Your health is shown in the top-left corner.",
    ];
    for (i, text) in rows.iter().enumerate() {
        let size = if text.ends_with(':') { 24 } else { 20 };
        line(d, text, cx, cy - 120 + i as i32 * 40, size, Color::WHITE);
    }
    line(d, "Press ESC to return to menu", cx, h - 60, 18, Color::LIGHTGRAY);
}

pub fn highscores<D: RaylibDraw>(d: &mut D, scores: &[u32], w: i32, h: i32) {
    let (cx, cy) = (w / 2, h / 2);
    title(d, "HIGH SCORES", cx, cy - 200);
    for (i, score) in scores.iter().take(10).enumerate() {
        let (size, color) = if i == 0 { (28, Color::GOLD) } else { (24, Color::WHITE) };
        line(d, &format!("{}. {}", i + 1, score), cx, cy - 120 + i as i32 * 36, size, color);
    }
    line(d, "Press ESC to return to menu", cx, h - 60, 18, Color::LIGHTGRAY);
}

pub fn pause_overlay<D: RaylibDraw>(d: &mut D, w: i32, h: i32) {
    let (cx, cy) = (w / 2, h / 2);
    d.draw_rectangle(0, 0, w, h, SHADE);
    d.draw_text("PAUSED", centered_x("PAUSED", 54, cx), cy - 100, 54, Color::WHITE);
    line(d, "Press P or ESC to Resume", cx, cy, 24, Color::WHITE);
    line(d, "Press Q to Quit to Menu", cx, cy + 40, 24, Color::WHITE);
}

pub fn game_over<D: RaylibDraw>(d: &mut D, outcome: Outcome, score: u32, new_high: bool, w: i32, h: i32) {
    let (cx, cy) = (w / 2, h / 2);
    d.draw_rectangle(0, 0, w, h, Color { a: 200, ..SHADE });
    let (text, color) = match outcome {
        Outcome::Lost => ("YOU DIED!", Color::RED),
        Outcome::Won => ("YOU WIN!", Color::GOLD),
    };
    d.draw_text(text, centered_x(text, 54, cx), cy - 130, 54, color);
    line(d, &format!("Final Score: {score}"), cx, cy - 50, 32, Color::WHITE);
    if new_high {
        line(d, "NEW HIGH SCORE!", cx, cy, 28, Color::GOLD);
    }
    line(d, "Press ENTER to Play Again", cx, cy + 60, 24, Color::WHITE);
    line(d, "Press ESC to Return to Menu", cx, cy + 100, 24, Color::WHITE);
}
