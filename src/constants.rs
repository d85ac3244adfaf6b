//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of each cell, in pixels.
pub const CELL_SIZE: f32 = 16.0;
/// The size of the game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(21, 21);
/// The width of the game board, in pixels.
pub const BOARD_PIXEL_WIDTH: f32 = BOARD_CELL_SIZE.x as f32 * CELL_SIZE;

/// How far (in pixels) a position may sit from its cell center and still
/// count as aligned with the grid.
pub const ALIGN_TOLERANCE: f32 = 2.0;

/// Pac-Man's movement speed, in pixels per tick.
pub const PACMAN_SPEED: f32 = 2.0;
/// Ghost speed in chase and scatter modes, in pixels per tick (before the
/// difficulty multiplier).
pub const GHOST_NORMAL_SPEED: f32 = 2.0;
/// Ghost speed while frightened. Must stay below the normal speed.
pub const GHOST_FRIGHTENED_SPEED: f32 = 1.0;
/// Ghost speed while returning home as eyes. Must stay above the normal speed.
pub const GHOST_EATEN_SPEED: f32 = 4.0;

/// Points awarded for eating a dot.
pub const DOT_POINTS: u32 = 10;
/// Points awarded for eating a power pellet.
pub const POWER_PELLET_POINTS: u32 = 50;
/// Escalating points for each ghost eaten within a single power window.
/// The last tier repeats once exhausted.
pub const GHOST_POINTS: [u32; 4] = [200, 400, 800, 1600];

pub const INITIAL_LIVES: u8 = 3;

/// Contact distance between Pac-Man and a ghost, in pixels.
pub const COLLISION_RADIUS: f32 = CELL_SIZE * 0.8;

/// The mouth animation toggles every this many ticks.
pub const MOUTH_TICKS: u64 = 5;

/// Probability that a frightened ghost takes a random turn at an intersection.
pub const FRIGHT_TURN_CHANCE: f64 = 0.3;

/// Upper bound on node expansions for a single pathfinding query.
pub const MAX_SEARCH_EXPANSIONS: usize = 200;

/// An enum representing the different types of tiles on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapTile {
    /// An empty tile.
    Empty,
    /// A wall tile.
    Wall,
    /// A regular dot.
    Dot,
    /// A power pellet.
    PowerPellet,
    /// A ghost house floor tile.
    GhostHouse,
}

/// The raw layout of the game board, as a 2D array of characters.
///
/// `#` wall, `.` dot, `o` power pellet, `H` ghost house floor, `0` Pac-Man's
/// starting position, `1`-`4` ghost starting positions (red, pink, cyan,
/// orange). The open edges on the middle row are the wrap tunnel.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "#####################",
    "#o........#........o#",
    "#.##.####.#.####.##.#",
    "#...................#",
    "#.##.#.#######.#.##.#",
    "#....#....#....#....#",
    "####.####.#.####.####",
    "####.#.........#.####",
    "####.#.##HHH##.#.####",
    "#....#.#3H1H4#.#....#",
    " .....#HHH2HHH#..... ",
    "#....#.#######.#....#",
    "####.#.........#.####",
    "####.#.##.#.##.#.####",
    "#........###........#",
    "#.##.####.#.####.##.#",
    "#o.#......0......#.o#",
    "##.#.#.#######.#.#.##",
    "#....#....#....#....#",
    "#.######..#..######.#",
    "#####################",
];
