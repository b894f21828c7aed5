//! Top-level flow: menus, play, pause and game over.
//!
//! [`Game`] owns the world, the rng and the highscore board. The frontend
//! queues [`Input`]s and calls [`Game::tick`] once per frame; inputs are
//! applied before the simulation step so a frame never sees a half-applied
//! event.
use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GameConfig, MAX_STEP, MapSize};
use crate::core::combat::{self, Outcome};
use crate::core::process_events::{Input, MoveIntent};
use crate::core::world::World;
use crate::highscore::HighscoreBoard;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    MapSizeSelect,
    Settings,
    HighscoreView,
    Playing,
    Paused,
    GameOver(Outcome),
}

pub struct Game<H: HighscoreBoard> {
    state: GameState,
    map_size: MapSize,
    config: GameConfig,
    world: World,
    intent: MoveIntent,
    pending: VecDeque<Input>,
    rng: StdRng,
    highscores: H,
    new_high_score: bool,
    exit_requested: bool,
}

impl<H: HighscoreBoard> Game<H> {
    pub fn new(config: GameConfig, map_size: MapSize, highscores: H, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        // placeholder until the first setup; never simulated from the menu
        let world = World::bare(map_size, &config);
        Self {
            state: GameState::Menu,
            map_size,
            config,
            world,
            intent: MoveIntent::default(),
            pending: VecDeque::new(),
            rng,
            highscores,
            new_high_score: false,
            exit_requested: false,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn map_size(&self) -> MapSize {
        self.map_size
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn highscores(&self) -> &H {
        &self.highscores
    }

    pub fn intent(&self) -> MoveIntent {
        self.intent
    }

    /// Whether the score that ended the last game made the table.
    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    /// Esc on the main menu; the frontend should close.
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Queue an input for the next tick.
    pub fn push_input(&mut self, input: Input) {
        self.pending.push_back(input);
    }

    /// One frame: apply queued inputs, then simulate if playing.
    pub fn tick(&mut self, dt: f32) {
        while let Some(input) = self.pending.pop_front() {
            self.handle_input(input);
        }
        if self.state != GameState::Playing {
            return;
        }
        let dt = dt.clamp(0.0, MAX_STEP);
        let player_vel = self.intent.velocity(self.config.player_speed);
        if let Some(outcome) = combat::step(&mut self.world, player_vel, &self.config, dt) {
            self.finish(outcome);
        }
    }

    /// Apply one input right away. Inputs that mean nothing in the current
    /// state are dropped.
    pub fn handle_input(&mut self, input: Input) {
        // releasing a key is always honoured so nothing stays held across a pause
        if let Input::Release(dir) = input {
            self.intent.set(dir, false);
            return;
        }

        let next = match (self.state, input) {
            (GameState::Menu, Input::Confirm) => {
                self.start();
                None
            }
            (GameState::Menu, Input::OpenMapSize) => Some(GameState::MapSizeSelect),
            (GameState::Menu, Input::OpenSettings) => Some(GameState::Settings),
            (GameState::Menu, Input::OpenHighscores) => Some(GameState::HighscoreView),
            (GameState::Menu, Input::Cancel) => {
                self.exit_requested = true;
                None
            }

            (GameState::MapSizeSelect, Input::SelectMapSize(size)) => {
                log::debug!("map size {} -> {}", self.map_size, size);
                self.map_size = size;
                None
            }
            (GameState::MapSizeSelect | GameState::Settings | GameState::HighscoreView, Input::Cancel) => {
                Some(GameState::Menu)
            }

            (GameState::Playing, Input::Pause | Input::Cancel) => Some(GameState::Paused),
            (GameState::Playing, Input::Attack) => {
                combat::attack(&mut self.world, &self.config);
                None
            }
            (GameState::Playing, Input::Press(dir)) => {
                self.intent.set(dir, true);
                None
            }

            (GameState::Paused, Input::Pause | Input::Cancel) => Some(GameState::Playing),
            (GameState::Paused, Input::Quit) => {
                self.highscores.add_score(self.world.score);
                Some(GameState::Menu)
            }

            (GameState::GameOver(_), Input::Confirm) => {
                self.start();
                None
            }
            (GameState::GameOver(_), Input::Cancel) => Some(GameState::Menu),

            _ => None,
        };

        if let Some(next) = next {
            log::debug!("{:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Fresh world for the selected preset and straight into play.
    fn start(&mut self) {
        self.world = World::setup(self.map_size, &self.config, &mut self.rng);
        self.intent = MoveIntent::default();
        self.new_high_score = false;
        self.state = GameState::Playing;
    }

    fn finish(&mut self, outcome: Outcome) {
        let score = self.world.score;
        self.new_high_score = self.highscores.is_high_score(score);
        self.highscores.add_score(score);
        log::info!("game over: {outcome:?}, score {score}");
        self.state = GameState::GameOver(outcome);
    }

    /// Outcome of the game currently on the game-over screen.
    pub fn last_outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::GameOver(o) => Some(o),
            _ => None,
        }
    }
}
