//! Keyboard to [`Input`] mapping.
//!
//! Stateless: a key may produce events for several
//! screens (S is both "settings" and "move down") and the game drops the ones
//! that do not apply.
use raylib::prelude::*;

use dungeon_crawler::{Input, MapSize, MoveDir};

const MOVES: [(KeyboardKey, MoveDir); 8] = [
    (KeyboardKey::KEY_UP, MoveDir::Up),
    (KeyboardKey::KEY_W, MoveDir::Up),
    (KeyboardKey::KEY_DOWN, MoveDir::Down),
    (KeyboardKey::KEY_S, MoveDir::Down),
    (KeyboardKey::KEY_LEFT, MoveDir::Left),
    (KeyboardKey::KEY_A, MoveDir::Left),
    (KeyboardKey::KEY_RIGHT, MoveDir::Right),
    (KeyboardKey::KEY_D, MoveDir::Right),
];

const PRESSES: [(KeyboardKey, Input); 13] = [
    (KeyboardKey::KEY_ENTER, Input::Confirm),
    (KeyboardKey::KEY_ESCAPE, Input::Cancel),
    (KeyboardKey::KEY_P, Input::Pause),
    (KeyboardKey::KEY_Q, Input::Quit),
    (KeyboardKey::KEY_SPACE, Input::Attack),
    (KeyboardKey::KEY_M, Input::OpenMapSize),
    (KeyboardKey::KEY_S, Input::OpenSettings),
    (KeyboardKey::KEY_H, Input::OpenHighscores),
    (KeyboardKey::KEY_ONE, Input::SelectMapSize(MapSize::Small)),
    (KeyboardKey::KEY_TWO, Input::SelectMapSize(MapSize::Medium)),
    (KeyboardKey::KEY_THREE, Input::SelectMapSize(MapSize::Large)),
    (KeyboardKey::KEY_FOUR, Input::SelectMapSize(MapSize::Huge)),
    (KeyboardKey::KEY_KP_ENTER, Input::Confirm),
];

/// Inputs for this frame's key edges.
pub fn poll(rl: &RaylibHandle) -> Vec<Input> {
    let mut out = Vec::new();
    for (key, input) in PRESSES {
        if rl.is_key_pressed(key) {
            out.push(input);
        }
    }
    for (key, dir) in MOVES {
        if rl.is_key_pressed(key) {
            out.push(Input::Press(dir));
        }
        if rl.is_key_released(key) {
            out.push(Input::Release(dir));
        }
    }
    out
}
