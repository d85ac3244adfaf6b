//! The session driver: owns the map, config, state and RNG, and applies
//! player commands and fixed-rate ticks.

pub mod collision;
pub mod state;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::{Difficulty, GameConfig};
use crate::constants::RAW_BOARD;
use crate::entity::ghost::{GhostContext, GhostMode};
use crate::error::GameResult;
use crate::events::GameCommand;
use crate::game::state::{GameState, GameStatus, GlobalMode};
use crate::map::Map;

pub struct Game {
    pub map: Map,
    pub config: GameConfig,
    pub state: GameState,
    rng: SmallRng,
}

impl Game {
    /// Builds a session on the standard board with an OS-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in board fails validation.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let map = Map::new(RAW_BOARD)?;
        let state = GameState::new(&map);
        Ok(Self {
            map,
            config,
            state,
            rng: SmallRng::from_rng(&mut rand::rng()),
        })
    }

    /// Like [`Game::new`] but fully deterministic. Test hook.
    pub fn from_seed(config: GameConfig, seed: u64) -> GameResult<Self> {
        let mut game = Game::new(config)?;
        game.rng = SmallRng::seed_from_u64(seed);
        Ok(game)
    }

    /// Applies a player command. `Exit` is the caller's concern and is
    /// ignored here.
    pub fn handle(&mut self, command: GameCommand) {
        match command {
            GameCommand::Move(direction) => {
                if self.state.status == GameStatus::Playing {
                    self.state.pacman.queue_direction(direction);
                }
            }
            GameCommand::Start => match self.state.status {
                GameStatus::Menu => {
                    info!(difficulty = %self.config.difficulty, "game started");
                    self.state.status = GameStatus::Playing;
                }
                GameStatus::GameOver | GameStatus::Won => {
                    self.state = GameState::new(&self.map);
                    self.state.status = GameStatus::Playing;
                }
                _ => {}
            },
            GameCommand::TogglePause => match self.state.status {
                GameStatus::Playing => self.state.status = GameStatus::Paused,
                GameStatus::Paused => self.state.status = GameStatus::Playing,
                _ => {}
            },
            GameCommand::Reset => {
                self.state = GameState::new(&self.map);
            }
            GameCommand::SetDifficulty(difficulty) => {
                if self.state.status == GameStatus::Menu {
                    self.set_difficulty(difficulty);
                }
            }
            GameCommand::Exit => {}
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// Advances the simulation by one tick. A no-op unless playing.
    ///
    /// Order within a tick is fixed: global mode cadence, Pac-Man movement,
    /// ghost movement in identity order, collision resolution, power window
    /// countdown.
    pub fn tick(&mut self) {
        if self.state.status != GameStatus::Playing {
            return;
        }

        self.tick_global_mode();
        self.state.pacman.update(&self.map, self.state.animation_frame);
        self.tick_ghosts();
        collision::resolve_collisions(&mut self.state, &self.map, &self.config);

        if self.state.power_mode {
            self.state.power_mode_timer = self.state.power_mode_timer.saturating_sub(1);
            if self.state.power_mode_timer == 0 {
                info!("power mode expired");
                self.state.power_mode = false;
            }
        }

        self.state.animation_frame += 1;
    }

    /// Advances the scatter/chase cadence. Frozen while a power window is
    /// open so the schedule resumes where it left off.
    fn tick_global_mode(&mut self) {
        if self.state.power_mode {
            return;
        }
        self.state.global_mode_timer += 1;

        let phase_length = match self.state.global_mode {
            GlobalMode::Scatter => self.config.scatter_ticks,
            GlobalMode::Chase => self.config.chase_ticks,
        };
        if self.state.global_mode_timer < phase_length {
            return;
        }

        self.state.global_mode_timer = 0;
        self.state.global_mode = match self.state.global_mode {
            GlobalMode::Scatter => GlobalMode::Chase,
            GlobalMode::Chase => GlobalMode::Scatter,
        };
        info!(mode = ?self.state.global_mode, "global mode flip");

        let target = match self.state.global_mode {
            GlobalMode::Scatter => GhostMode::Scatter,
            GlobalMode::Chase => GhostMode::Chase,
        };
        for ghost in &mut self.state.ghosts {
            if matches!(ghost.mode, GhostMode::Scatter | GhostMode::Chase) {
                ghost.set_mode(target);
            }
        }
    }

    /// Updates ghosts in identity order. The red ghost moves first, and the
    /// cyan ghost's flank target reads red's position from this same tick.
    fn tick_ghosts(&mut self) {
        let power_mode = self.state.power_mode;
        let difficulty = self.config.difficulty;
        let speed_multiplier = difficulty.speed_multiplier();

        let GameState { pacman, ghosts, .. } = &mut self.state;
        for index in 0..ghosts.len() {
            let red_position = ghosts[0].position;
            let chase_with_search = difficulty.uses_search(ghosts[index].personality);
            let ctx = GhostContext {
                map: &self.map,
                pacman: &*pacman,
                red_position,
                power_mode,
                speed_multiplier,
                chase_with_search,
            };
            crate::entity::ghost::update_ghost(&mut ghosts[index], &ctx, &mut self.rng);
        }
    }
}
