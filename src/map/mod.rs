//! The game board and the grid geometry utilities built on top of it.

pub mod direction;
pub mod parser;

use glam::{IVec2, Vec2};
use smallvec::SmallVec;

use crate::constants::{MapTile, ALIGN_TOLERANCE, BOARD_CELL_SIZE, BOARD_PIXEL_WIDTH, CELL_SIZE};
use crate::error::ParseError;
use crate::map::direction::Direction;
use crate::map::parser::BoardParser;

/// Returns the pixel coordinate of the center of a cell index.
pub fn grid_to_pixel(cell: IVec2) -> Vec2 {
    cell.as_vec2() * CELL_SIZE + Vec2::splat(CELL_SIZE / 2.0)
}

/// Returns the cell index containing a pixel coordinate.
pub fn pixel_to_grid(position: Vec2) -> IVec2 {
    (position / CELL_SIZE).floor().as_ivec2()
}

/// Reflects a position that has left the board horizontally to the opposite
/// edge, enabling tunnel traversal. The vertical axis never wraps.
pub fn wrap_position(position: Vec2) -> Vec2 {
    let mut wrapped = position;
    if wrapped.x < -CELL_SIZE {
        wrapped.x = BOARD_PIXEL_WIDTH;
    } else if wrapped.x > BOARD_PIXEL_WIDTH {
        wrapped.x = -CELL_SIZE;
    }
    wrapped
}

/// True if the position sits within tolerance of its cell's center on both
/// axes. Alignment is the precondition for turning and re-targeting.
pub fn is_aligned(position: Vec2) -> bool {
    let center = grid_to_pixel(pixel_to_grid(position));
    (position.x - center.x).abs() < ALIGN_TOLERANCE && (position.y - center.y).abs() < ALIGN_TOLERANCE
}

/// Forces a position to the exact center of its current cell.
pub fn snap_to_grid(position: Vec2) -> Vec2 {
    grid_to_pixel(pixel_to_grid(position))
}

/// The static game board: tile layout plus the starting cells parsed from it.
#[derive(Debug)]
pub struct Map {
    tiles: [[MapTile; BOARD_CELL_SIZE.y as usize]; BOARD_CELL_SIZE.x as usize],
    /// Pac-Man's starting cell.
    pub pacman_start: IVec2,
    /// Ghost starting cells in identity order (red, pink, cyan, orange).
    pub ghost_starts: [IVec2; 4],
    /// The cell eaten ghosts return to. The red ghost's start, at the house door.
    pub house_center: IVec2,
}

impl Map {
    /// Builds a map from a raw board layout.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or any start marker is missing.
    pub fn new(raw_board: [&str; BOARD_CELL_SIZE.y as usize]) -> Result<Self, ParseError> {
        let parsed = BoardParser::parse_board(raw_board)?;

        let pacman_start = parsed.pacman_start.ok_or(ParseError::MissingPlayerStart)?;
        let mut ghost_starts = [IVec2::ZERO; 4];
        for (index, start) in parsed.ghost_starts.into_iter().enumerate() {
            ghost_starts[index] = start.ok_or(ParseError::MissingGhostStart(index as u8 + 1))?;
        }

        Ok(Self {
            tiles: parsed.tiles,
            pacman_start,
            ghost_starts,
            house_center: ghost_starts[0],
        })
    }

    /// Board width in cells.
    pub fn width(&self) -> u32 {
        BOARD_CELL_SIZE.x
    }

    /// Board height in cells.
    pub fn height(&self) -> u32 {
        BOARD_CELL_SIZE.y
    }

    /// Returns the tile at a cell, or `None` when out of bounds.
    pub fn get_tile(&self, cell: IVec2) -> Option<MapTile> {
        if cell.x < 0 || cell.x >= BOARD_CELL_SIZE.x as i32 || cell.y < 0 || cell.y >= BOARD_CELL_SIZE.y as i32 {
            return None;
        }
        Some(self.tiles[cell.x as usize][cell.y as usize])
    }

    /// True if the cell is out of bounds or a wall.
    pub fn is_wall(&self, cell: IVec2) -> bool {
        !matches!(self.get_tile(cell), Some(tile) if tile != MapTile::Wall)
    }

    /// Wraps the cell's column onto the board. Rows are never wrapped.
    pub fn wrap_cell(&self, cell: IVec2) -> IVec2 {
        IVec2::new(cell.x.rem_euclid(BOARD_CELL_SIZE.x as i32), cell.y)
    }

    /// True if an entity at `position` can advance one full cell in
    /// `direction`. The projected column is wrapped before the wall check so
    /// the tunnel edges stay traversable.
    pub fn can_move(&self, position: Vec2, direction: Direction) -> bool {
        let projected = position + direction.vector() * CELL_SIZE;
        !self.is_wall(self.wrap_cell(pixel_to_grid(projected)))
    }

    /// All directions an entity at `position` can move in.
    pub fn valid_directions(&self, position: Vec2) -> SmallVec<[Direction; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|direction| self.can_move(position, *direction))
            .collect()
    }

    /// Picks the unblocked, non-reversing direction whose one-step projection
    /// is closest to `to`. Ties go to the first candidate in the fixed
    /// direction order. Reversing is only allowed when nothing else is legal.
    pub fn best_direction(&self, from: Vec2, to: Vec2, current: Direction) -> Option<Direction> {
        let valid = self.valid_directions(from);
        let opposite = current.opposite();

        let mut best: Option<Direction> = None;
        let mut best_distance = f32::INFINITY;
        for direction in valid.iter().copied().filter(|d| *d != opposite) {
            let projected = from + direction.vector() * CELL_SIZE;
            let distance = projected.distance(to);
            if distance < best_distance {
                best_distance = distance;
                best = Some(direction);
            }
        }

        // Dead end: reversing is the only way out.
        best.or_else(|| valid.first().copied())
    }
}
