//! Post-movement collision resolution: collectibles first, then ghost
//! contacts, then the win check.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::constants::{COLLISION_RADIUS, DOT_POINTS, GHOST_POINTS, POWER_PELLET_POINTS};
use crate::entity::ghost::GhostMode;
use crate::game::state::{GameState, GameStatus};
use crate::map::Map;

/// Resolves everything Pac-Man touched this tick.
///
/// Runs strictly after all movement. A fatal ghost contact returns
/// immediately, so collectibles consumed earlier in the same tick stay
/// consumed even on the losing tick.
pub fn resolve_collisions(state: &mut GameState, map: &Map, config: &GameConfig) {
    let pacman_cell = state.pacman.grid_position();

    if state.dots.remove(&pacman_cell) {
        state.score += DOT_POINTS;
    }

    if state.power_pellets.remove(&pacman_cell) {
        state.score += POWER_PELLET_POINTS;
        info!(score = state.score, "power pellet eaten");
        state.enter_power_mode(config);
    }

    for index in 0..state.ghosts.len() {
        let (mode, position, personality) = {
            let ghost = &state.ghosts[index];
            (ghost.mode, ghost.position, ghost.personality)
        };
        if mode == GhostMode::Eaten {
            continue;
        }
        if state.pacman.position.distance(position) >= COLLISION_RADIUS {
            continue;
        }

        if mode == GhostMode::Frightened {
            let bonus = GHOST_POINTS[(state.ghosts_eaten as usize).min(GHOST_POINTS.len() - 1)];
            state.score += bonus;
            state.ghosts_eaten += 1;
            info!(ghost = %personality, bonus, "ghost eaten");
            state.ghosts[index].set_mode(GhostMode::Eaten);
        } else {
            state.lives = state.lives.saturating_sub(1);
            info!(lives = state.lives, "caught by {}", personality);
            if state.lives == 0 {
                state.status = GameStatus::GameOver;
            } else {
                state.reset_round(map);
            }
            return;
        }
    }

    if state.remaining_collectibles() == 0 {
        debug!(score = state.score, "board cleared");
        state.status = GameStatus::Won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CELL_SIZE, RAW_BOARD};
    use crate::entity::ghost::Personality;
    use crate::map::grid_to_pixel;
    use glam::{IVec2, Vec2};

    fn setup() -> (Map, GameState, GameConfig) {
        let map = Map::new(RAW_BOARD).unwrap();
        let state = GameState::new(&map);
        (map, state, GameConfig::default())
    }

    /// Parks every ghost far from the action.
    fn isolate_ghosts(state: &mut GameState) {
        for ghost in &mut state.ghosts {
            ghost.position = Vec2::new(-100.0 * CELL_SIZE, -100.0 * CELL_SIZE);
        }
    }

    #[test]
    fn test_dot_awards_points_once() {
        let (map, mut state, config) = setup();
        isolate_ghosts(&mut state);
        let cell = IVec2::new(3, 3);
        assert!(state.dots.contains(&cell));
        state.pacman.position = grid_to_pixel(cell);

        resolve_collisions(&mut state, &map, &config);
        let first = state.score;
        assert!(first > 0);

        resolve_collisions(&mut state, &map, &config);
        assert_eq!(state.score, first);
    }

    #[test]
    fn test_power_pellet_frightens_everyone() {
        let (map, mut state, config) = setup();
        isolate_ghosts(&mut state);
        let pellet = *state.power_pellets.iter().next().unwrap();
        state.pacman.position = grid_to_pixel(pellet);

        resolve_collisions(&mut state, &map, &config);

        assert_eq!(state.score, POWER_PELLET_POINTS);
        assert!(state.power_mode);
        assert_eq!(state.power_mode_timer, config.power_mode_ticks);
        for ghost in &state.ghosts {
            assert_eq!(ghost.mode, GhostMode::Frightened);
        }
    }

    #[test]
    fn test_ghost_bonus_escalates_and_caps() {
        let (map, mut state, config) = setup();
        isolate_ghosts(&mut state);
        state.power_mode = true;

        let mut total = 0;
        for round in 0..5u32 {
            // Only one frightened ghost in range per pass.
            state.ghosts[0].set_mode(GhostMode::Chase);
            state.ghosts[0].set_mode(GhostMode::Frightened);
            state.ghosts[0].position = state.pacman.position;
            state.ghosts_eaten = round;

            let before = state.score;
            resolve_collisions(&mut state, &map, &config);
            total = state.score - before;
            isolate_ghosts(&mut state);

            let expected = GHOST_POINTS[(round as usize).min(3)];
            assert_eq!(total, expected, "bonus tier {round}");
        }
        assert_eq!(total, 1600);
    }

    #[test]
    fn test_lethal_contact_resets_round() {
        let (map, mut state, config) = setup();
        isolate_ghosts(&mut state);
        state.status = GameStatus::Playing;
        state.score = 300;
        state.ghosts[0].position = state.pacman.position;

        resolve_collisions(&mut state, &map, &config);

        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 300);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.pacman.grid_position(), map.pacman_start);
    }

    #[test]
    fn test_last_life_ends_the_game() {
        let (map, mut state, config) = setup();
        isolate_ghosts(&mut state);
        state.status = GameStatus::Playing;
        state.lives = 1;
        state.ghosts[3].position = state.pacman.position;

        resolve_collisions(&mut state, &map, &config);

        assert_eq!(state.lives, 0);
        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn test_losing_tick_keeps_consumed_dot() {
        let (map, mut state, config) = setup();
        isolate_ghosts(&mut state);
        state.status = GameStatus::Playing;
        state.lives = 1;
        let cell = IVec2::new(3, 3);
        assert!(state.dots.contains(&cell));
        state.pacman.position = grid_to_pixel(cell);
        state.ghosts[1].position = state.pacman.position;

        resolve_collisions(&mut state, &map, &config);

        assert_eq!(state.status, GameStatus::GameOver);
        assert!(!state.dots.contains(&cell));
        assert_eq!(state.score, DOT_POINTS);
    }

    #[test]
    fn test_eaten_ghost_is_harmless() {
        let (map, mut state, config) = setup();
        isolate_ghosts(&mut state);
        state.status = GameStatus::Playing;
        state.ghosts[2].set_mode(GhostMode::Eaten);
        state.ghosts[2].position = state.pacman.position;
        assert_eq!(state.ghosts[2].personality, Personality::Cyan);

        resolve_collisions(&mut state, &map, &config);

        assert_eq!(state.lives, 3);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn test_clearing_the_board_wins() {
        let (map, mut state, config) = setup();
        isolate_ghosts(&mut state);
        state.status = GameStatus::Playing;
        state.dots.clear();
        state.power_pellets.clear();

        resolve_collisions(&mut state, &map, &config);

        assert_eq!(state.status, GameStatus::Won);
    }
}
