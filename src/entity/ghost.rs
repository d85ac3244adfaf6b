//! Ghost entities: the mode state machine, per-identity chase targeting, and
//! the per-tick movement rules.

use glam::{IVec2, Vec2};
use rand::Rng;
use tracing::debug;

use crate::constants::{CELL_SIZE, FRIGHT_TURN_CHANCE, GHOST_EATEN_SPEED, GHOST_FRIGHTENED_SPEED, GHOST_NORMAL_SPEED};
use crate::entity::pacman::Pacman;
use crate::map::direction::Direction;
use crate::map::{grid_to_pixel, is_aligned, pixel_to_grid, snap_to_grid, wrap_position, Map};
use crate::pathfind;

/// The behavioral phase a ghost is in. Each mode has its own targeting rule
/// and speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum GhostMode {
    /// Actively pursuing Pac-Man using the ghost's own targeting strategy.
    Chase,
    /// Heading to the ghost's home corner.
    Scatter,
    /// Wandering randomly; edible for bonus score.
    Frightened,
    /// Eyes only, returning to the ghost house after being eaten.
    Eaten,
}

/// The fixed identity of a ghost. Identity determines both the home corner
/// and the chase targeting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Personality {
    Red,
    Pink,
    Cyan,
    Orange,
}

impl Personality {
    /// All identities, in update order. Red goes first; Cyan reads Red's
    /// already-updated position within the same tick.
    pub const ALL: [Personality; 4] = [Personality::Red, Personality::Pink, Personality::Cyan, Personality::Orange];

    /// The fixed corner this ghost heads for in scatter mode.
    pub fn scatter_target(self) -> IVec2 {
        match self {
            Personality::Red => IVec2::new(19, 1),
            Personality::Pink => IVec2::new(1, 1),
            Personality::Cyan => IVec2::new(19, 19),
            Personality::Orange => IVec2::new(1, 19),
        }
    }

    /// The direction the ghost faces at spawn.
    pub fn spawn_direction(self) -> Direction {
        match self {
            Personality::Red => Direction::Left,
            _ => Direction::Up,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ghost {
    pub personality: Personality,
    pub position: Vec2,
    pub direction: Direction,
    pub mode: GhostMode,
    /// The cell the AI is currently steering toward.
    pub target_tile: IVec2,
    pub scatter_target: IVec2,
    /// Ticks spent in the current mode. Drives the frightened flash.
    pub mode_timer: u32,
}

impl Ghost {
    pub fn new(personality: Personality, start: IVec2) -> Self {
        Self {
            personality,
            position: grid_to_pixel(start),
            direction: personality.spawn_direction(),
            mode: GhostMode::Scatter,
            target_tile: start,
            scatter_target: personality.scatter_target(),
            mode_timer: 0,
        }
    }

    /// Returns the ghost to its spawn cell in scatter mode.
    pub fn reset(&mut self, start: IVec2) {
        *self = Self::new(self.personality, start);
    }

    pub fn set_mode(&mut self, mode: GhostMode) {
        if self.mode != mode {
            debug!(ghost = %self.personality, from = %self.mode, to = %mode, "ghost mode change");
            self.mode = mode;
            self.mode_timer = 0;
        }
    }

    pub fn grid_position(&self) -> IVec2 {
        pixel_to_grid(self.position)
    }

    /// Pixels advanced per tick in the current mode. Eaten ghosts are the
    /// fastest and frightened ghosts the slowest.
    pub fn speed(&self, multiplier: f32) -> f32 {
        match self.mode {
            GhostMode::Frightened => GHOST_FRIGHTENED_SPEED,
            GhostMode::Eaten => GHOST_EATEN_SPEED,
            _ => GHOST_NORMAL_SPEED * multiplier,
        }
    }
}

/// Read-only surroundings for a single ghost update.
pub struct GhostContext<'a> {
    pub map: &'a Map,
    pub pacman: &'a Pacman,
    /// The red ghost's position as already written this tick.
    pub red_position: Vec2,
    pub power_mode: bool,
    /// Difficulty speed multiplier applied to the normal mode speed.
    pub speed_multiplier: f32,
    /// Whether chase-mode steering runs the bounded search instead of the
    /// greedy heuristic.
    pub chase_with_search: bool,
}

/// The chase-mode target cell for a ghost's identity.
///
/// Red pursues directly; Pink aims four cells ahead of Pac-Man's facing;
/// Cyan reflects the two-ahead point about Red's cell; Orange pursues only
/// while more than eight cell-widths away, otherwise it retreats to its
/// scatter corner.
pub fn chase_target(ghost: &Ghost, ctx: &GhostContext) -> IVec2 {
    let pacman_cell = pixel_to_grid(ctx.pacman.position);
    let facing = ctx.pacman.direction.map_or(IVec2::ZERO, Direction::offset);

    match ghost.personality {
        Personality::Red => pacman_cell,
        Personality::Pink => pacman_cell + facing * 4,
        Personality::Cyan => {
            let ahead = pacman_cell + facing * 2;
            let red_cell = pixel_to_grid(ctx.red_position);
            ahead + (ahead - red_cell)
        }
        Personality::Orange => {
            if ghost.position.distance(ctx.pacman.position) > CELL_SIZE * 8.0 {
                pacman_cell
            } else {
                ghost.scatter_target
            }
        }
    }
}

/// Advances one ghost by one tick: resolve mode transitions, pick the target
/// tile for the mode, re-steer at alignment (or when newly blocked), move.
pub fn update_ghost(ghost: &mut Ghost, ctx: &GhostContext, rng: &mut impl Rng) {
    // Power-mode transitions. Frightened ghosts revert to chase when the
    // window closes, never back to scatter.
    if ghost.mode == GhostMode::Frightened && !ctx.power_mode {
        ghost.set_mode(GhostMode::Chase);
    }
    if ctx.power_mode && !matches!(ghost.mode, GhostMode::Frightened | GhostMode::Eaten) {
        ghost.set_mode(GhostMode::Frightened);
    }

    let mut random_turned = false;
    ghost.target_tile = match ghost.mode {
        GhostMode::Eaten => {
            let home = ctx.map.house_center;
            if ghost.position.distance(grid_to_pixel(home)) < CELL_SIZE {
                ghost.set_mode(GhostMode::Chase);
            }
            home
        }
        GhostMode::Frightened => {
            // Quasi-random walk: occasionally take a random legal turn at an
            // intersection, otherwise just keep steering at the current cell.
            if is_aligned(ghost.position) && rng.random_bool(FRIGHT_TURN_CHANCE) {
                let snapped = snap_to_grid(ghost.position);
                let legal = ctx.map.valid_directions(snapped);
                if !legal.is_empty() {
                    ghost.position = snapped;
                    ghost.direction = legal[rng.random_range(0..legal.len())];
                    random_turned = true;
                }
            }
            ghost.grid_position()
        }
        GhostMode::Scatter => ghost.scatter_target,
        GhostMode::Chase => chase_target(ghost, ctx),
    };

    // Re-steer only when aligned or the current direction is newly blocked.
    let blocked = !ctx.map.can_move(ghost.position, ghost.direction);
    if (is_aligned(ghost.position) || blocked) && !random_turned {
        if blocked {
            ghost.position = snap_to_grid(ghost.position);
        }
        let snapped = snap_to_grid(ghost.position);

        let use_search = ghost.mode == GhostMode::Eaten || (ghost.mode == GhostMode::Chase && ctx.chase_with_search);
        let desired = if use_search {
            pathfind::find_direction(ctx.map, pixel_to_grid(snapped), ghost.target_tile, ghost.direction)
        } else {
            ctx.map
                .best_direction(snapped, grid_to_pixel(ghost.target_tile), ghost.direction)
        };

        match desired {
            Some(direction) if ctx.map.can_move(snapped, direction) => ghost.direction = direction,
            _ => {
                // Both the desired and the current direction can be blocked
                // at the same time; take anything that moves so the ghost
                // never stalls permanently.
                if !ctx.map.can_move(snapped, ghost.direction) {
                    if let Some(direction) = Direction::ALL.into_iter().find(|d| ctx.map.can_move(snapped, *d)) {
                        ghost.direction = direction;
                    }
                }
            }
        }
    }

    let speed = ghost.speed(ctx.speed_multiplier);
    if ctx.map.can_move(ghost.position, ghost.direction) {
        ghost.position = wrap_position(ghost.position + ghost.direction.vector() * speed);
    } else {
        ghost.position = snap_to_grid(ghost.position);
    }

    ghost.mode_timer += 1;
}
