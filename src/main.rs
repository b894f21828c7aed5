// main.rs
mod keys;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

use dungeon_crawler::{Game, GameConfig, JsonHighscores, MapSize};

/// Top-down maze crawler: collect every coin before the zombies get you.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map size preset used for the first game (small, medium, large, huge).
    #[arg(long, default_value_t = MapSize::Small)]
    map_size: MapSize,

    /// Seed for maze and placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding gameplay tunables.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where the highscore table is kept.
    #[arg(long, value_name = "FILE", default_value = "highscores.json")]
    highscores: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    let board = JsonHighscores::open(&args.highscores);
    let mut game = Game::new(config, args.map_size, board, args.seed);

    let (w, h) = args.map_size.dimensions();
    let (mut screen_w, mut screen_h) = (w as i32, h as i32);
    let (mut window, raylib_thread) = raylib::init()
        .size(screen_w, screen_h)
        .title("Dungeon Crawler")
        .build();
    // Esc is a game key, not a close button
    window.set_exit_key(None);
    window.set_target_fps(60);
    log::info!("window {}x{}, highscores at {}", screen_w, screen_h, args.highscores.display());

    while !window.window_should_close() && !game.exit_requested() {
        for input in keys::poll(&window) {
            game.push_input(input);
        }
        let dt = window.get_frame_time();
        game.tick(dt);

        // follow the play area of the running level
        let world = game.world();
        let (ww, wh) = (world.width as i32, world.height as i32);
        if (ww, wh) != (screen_w, screen_h) {
            window.set_window_size(ww, wh);
            (screen_w, screen_h) = (ww, wh);
        }

        let mut d = window.begin_drawing(&raylib_thread);
        render::draw_frame(&mut d, &game, screen_w, screen_h);
    }
    Ok(())
}
