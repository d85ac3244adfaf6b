//! The single mutable game state advanced by the tick loop.

use std::collections::HashSet;

use glam::IVec2;
use tracing::info;

use crate::config::GameConfig;
use crate::constants::{MapTile, INITIAL_LIVES};
use crate::entity::ghost::{Ghost, GhostMode, Personality};
use crate::entity::pacman::Pacman;
use crate::map::Map;

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum GameStatus {
    Menu,
    Playing,
    Paused,
    GameOver,
    Won,
}

/// The global scatter/chase cadence all non-frightened ghosts follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalMode {
    Scatter,
    Chase,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    pub status: GameStatus,
    pub pacman: Pacman,
    pub ghosts: [Ghost; 4],
    /// Cells still holding a dot.
    pub dots: HashSet<IVec2>,
    /// Cells still holding a power pellet.
    pub power_pellets: HashSet<IVec2>,
    pub power_mode: bool,
    /// Ticks remaining in the current power window.
    pub power_mode_timer: u32,
    /// Ghosts eaten during the current power window; indexes the bonus tiers.
    pub ghosts_eaten: u32,
    /// Monotonic tick counter driving animations.
    pub animation_frame: u64,
    pub global_mode: GlobalMode,
    pub global_mode_timer: u32,
}

impl GameState {
    /// Builds the pre-game state: full board of collectibles, everyone at
    /// spawn, waiting in the menu.
    pub fn new(map: &Map) -> Self {
        let mut dots = HashSet::new();
        let mut power_pellets = HashSet::new();
        for x in 0..map.width() as i32 {
            for y in 0..map.height() as i32 {
                let cell = IVec2::new(x, y);
                match map.get_tile(cell) {
                    Some(MapTile::Dot) => {
                        dots.insert(cell);
                    }
                    Some(MapTile::PowerPellet) => {
                        power_pellets.insert(cell);
                    }
                    _ => {}
                }
            }
        }

        let ghosts = [
            Ghost::new(Personality::Red, map.ghost_starts[0]),
            Ghost::new(Personality::Pink, map.ghost_starts[1]),
            Ghost::new(Personality::Cyan, map.ghost_starts[2]),
            Ghost::new(Personality::Orange, map.ghost_starts[3]),
        ];

        Self {
            score: 0,
            lives: INITIAL_LIVES,
            level: 1,
            status: GameStatus::Menu,
            pacman: Pacman::new(map.pacman_start),
            ghosts,
            dots,
            power_pellets,
            power_mode: false,
            power_mode_timer: 0,
            ghosts_eaten: 0,
            animation_frame: 0,
            global_mode: GlobalMode::Scatter,
            global_mode_timer: 0,
        }
    }

    /// Repositions every entity after a life is lost. Score, remaining
    /// collectibles, and the level survive; power mode does not.
    pub fn reset_round(&mut self, map: &Map) {
        info!(lives = self.lives, "round reset");
        self.pacman.reset(map.pacman_start);
        for (ghost, start) in self.ghosts.iter_mut().zip(map.ghost_starts) {
            ghost.reset(start);
        }
        self.power_mode = false;
        self.power_mode_timer = 0;
        self.ghosts_eaten = 0;
        self.global_mode = GlobalMode::Scatter;
        self.global_mode_timer = 0;
    }

    pub fn remaining_collectibles(&self) -> usize {
        self.dots.len() + self.power_pellets.len()
    }

    /// Opens the power window: every ghost not on its way home turns
    /// frightened and the bonus ladder restarts.
    pub fn enter_power_mode(&mut self, config: &GameConfig) {
        self.power_mode = true;
        self.power_mode_timer = config.power_mode_ticks;
        self.ghosts_eaten = 0;
        for ghost in &mut self.ghosts {
            if ghost.mode != GhostMode::Eaten {
                ghost.set_mode(GhostMode::Frightened);
            }
        }
    }
}
