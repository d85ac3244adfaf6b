//! The player entity and its per-tick update.

use glam::{IVec2, Vec2};

use crate::constants::{MOUTH_TICKS, PACMAN_SPEED};
use crate::map::direction::Direction;
use crate::map::{grid_to_pixel, is_aligned, pixel_to_grid, snap_to_grid, wrap_position, Map};

/// Pac-Man. Direction changes requested by input are buffered in
/// `next_direction` and only commit once the entity is grid-aligned and the
/// requested direction is unobstructed.
#[derive(Debug, Clone)]
pub struct Pacman {
    pub position: Vec2,
    pub direction: Option<Direction>,
    pub next_direction: Option<Direction>,
    pub mouth_open: bool,
}

impl Pacman {
    pub fn new(start: IVec2) -> Self {
        Self {
            position: grid_to_pixel(start),
            direction: None,
            next_direction: None,
            mouth_open: true,
        }
    }

    /// Returns the entity to its spawn cell, standing still.
    pub fn reset(&mut self, start: IVec2) {
        *self = Self::new(start);
    }

    /// Buffers a turn request from input. The turn commits at the next
    /// aligned tick where it is unobstructed.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.next_direction = Some(direction);
    }

    /// The cell the entity currently occupies.
    pub fn grid_position(&self) -> IVec2 {
        pixel_to_grid(self.position)
    }

    /// Advances the player by one tick.
    pub fn update(&mut self, map: &Map, animation_frame: u64) {
        // Commit a buffered turn when aligned and the way is clear.
        if is_aligned(self.position) {
            if let Some(queued) = self.next_direction {
                let snapped = snap_to_grid(self.position);
                if map.can_move(snapped, queued) {
                    self.position = snapped;
                    self.direction = Some(queued);
                    self.next_direction = None;
                }
            }
        }

        if let Some(direction) = self.direction {
            if map.can_move(self.position, direction) {
                self.position = wrap_position(self.position + direction.vector() * PACMAN_SPEED);
            } else {
                // Blocked: snap to the cell center so a queued turn can
                // commit instead of wedging against the wall.
                self.position = snap_to_grid(self.position);
            }
        }

        // The mouth runs on the global frame counter, independent of movement.
        self.mouth_open = (animation_frame / MOUTH_TICKS) % 2 == 0;
    }
}
