//! Bounded grid search used for ghost routing.
//!
//! The search is best-first over 4-connected passable cells with unit step
//! cost, capped at a fixed number of node expansions so a query always
//! terminates, reachable goal or not. Only the first step of the path is
//! returned; callers re-run the search every tick.

use glam::IVec2;
use pathfinding::prelude::astar;

use crate::constants::MAX_SEARCH_EXPANSIONS;
use crate::map::direction::Direction;
use crate::map::{grid_to_pixel, Map};

/// Finds the direction of the first step from `from` toward `to`.
///
/// Falls back to greedy steering (`Map::best_direction`) when the start is
/// already the target or the expansion budget runs out before the target is
/// reached. Reversing `current` on the first step is disallowed unless it is
/// the only legal move out of the start cell.
pub fn find_direction(map: &Map, from: IVec2, to: IVec2, current: Direction) -> Option<Direction> {
    if from == to {
        return map.best_direction(grid_to_pixel(from), grid_to_pixel(to), current);
    }

    let behind = map.wrap_cell(from + current.opposite().offset());
    let start_exits = Direction::ALL
        .iter()
        .filter(|direction| !map.is_wall(map.wrap_cell(from + direction.offset())))
        .count();
    let forbid_reverse = start_exits > 1;

    let mut expansions = 0usize;
    let result = astar(
        &from,
        |&cell| {
            expansions += 1;
            let exhausted = expansions > MAX_SEARCH_EXPANSIONS;
            Direction::ALL
                .iter()
                .filter_map(|direction| {
                    if exhausted {
                        return None;
                    }
                    let next = map.wrap_cell(cell + direction.offset());
                    if map.is_wall(next) {
                        return None;
                    }
                    if cell == from && forbid_reverse && next == behind {
                        return None;
                    }
                    Some((next, 1u32))
                })
                .collect::<Vec<_>>()
        },
        |&cell| ((cell.x - to.x).abs() + (cell.y - to.y).abs()) as u32,
        |&cell| cell == to,
    );

    match result {
        Some((path, _)) if path.len() > 1 => step_direction(from, path[1]),
        _ => map.best_direction(grid_to_pixel(from), grid_to_pixel(to), current),
    }
}

/// The direction of a single step between adjacent cells, accounting for a
/// horizontal wrap across the tunnel.
fn step_direction(from: IVec2, next: IVec2) -> Option<Direction> {
    let step = next - from;
    match (step.x, step.y) {
        (0, -1) => Some(Direction::Up),
        (0, 1) => Some(Direction::Down),
        (-1, 0) => Some(Direction::Left),
        (1, 0) => Some(Direction::Right),
        // Wrapped across the tunnel: a large positive jump means the entity
        // stepped off the left edge, and vice versa.
        (x, 0) if x > 1 => Some(Direction::Left),
        (x, 0) if x < -1 => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAW_BOARD;

    fn map() -> Map {
        Map::new(RAW_BOARD).unwrap()
    }

    #[test]
    fn test_first_step_along_corridor() {
        let map = map();
        // Row 3 is one open corridor.
        let direction = find_direction(&map, IVec2::new(3, 3), IVec2::new(10, 3), Direction::Right);
        assert_eq!(direction, Some(Direction::Right));
    }

    #[test]
    fn test_start_equals_target_falls_back() {
        let map = map();
        let direction = find_direction(&map, IVec2::new(3, 3), IVec2::new(3, 3), Direction::Right);
        // Greedy fallback still yields a legal move.
        assert!(direction.is_some());
    }

    #[test]
    fn test_no_first_move_reversal() {
        let map = map();
        // Target directly behind on an open corridor: the search must route
        // around rather than reverse on the first step.
        let direction = find_direction(&map, IVec2::new(10, 3), IVec2::new(3, 3), Direction::Right);
        assert_ne!(direction, Some(Direction::Left));
        assert!(direction.is_some());
    }

    #[test]
    fn test_reversal_allowed_in_dead_end() {
        let map = map();
        // Cell (1, 19) only opens upward.
        let direction = find_direction(&map, IVec2::new(1, 19), IVec2::new(10, 16), Direction::Down);
        assert_eq!(direction, Some(Direction::Up));
    }

    #[test]
    fn test_unreachable_target_falls_back_to_greedy() {
        let map = map();
        // A wall cell can never be reached; the budget runs out and greedy
        // steering takes over with some legal direction.
        let direction = find_direction(&map, IVec2::new(3, 3), IVec2::new(0, 0), Direction::Right);
        assert!(direction.is_some());
    }

    #[test]
    fn test_step_direction_wrap() {
        assert_eq!(step_direction(IVec2::new(0, 10), IVec2::new(20, 10)), Some(Direction::Left));
        assert_eq!(step_direction(IVec2::new(20, 10), IVec2::new(0, 10)), Some(Direction::Right));
        assert_eq!(step_direction(IVec2::new(4, 7), IVec2::new(4, 6)), Some(Direction::Up));
    }

    #[test]
    fn test_routes_through_tunnel_when_shorter() {
        let map = map();
        // From just inside the left tunnel mouth to the right edge of the
        // tunnel row, wrapping is the short way.
        let direction = find_direction(&map, IVec2::new(1, 10), IVec2::new(19, 10), Direction::Left);
        assert_eq!(direction, Some(Direction::Left));
    }
}
