//! Terminal rendering over crossterm's queued command API.
//!
//! One board cell maps to one character cell. Collectibles draw from the
//! live state sets, not the static map, so eaten cells go dark immediately.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use glam::IVec2;

use crate::config::Difficulty;
use crate::constants::{MapTile, BOARD_CELL_SIZE};
use crate::entity::ghost::{Ghost, GhostMode, Personality};
use crate::game::state::{GameState, GameStatus};
use crate::game::Game;
use crate::map::direction::Direction;
use crate::map::{pixel_to_grid, Map};

const WALL_GLYPH: char = '█';
const DOT_GLYPH: char = '·';

/// Ticks of power mode left below which frightened ghosts flash.
const FLASH_THRESHOLD: u32 = 120;

fn ghost_color(ghost: &Ghost, state: &GameState) -> Color {
    match ghost.mode {
        GhostMode::Eaten => Color::White,
        GhostMode::Frightened => {
            let flashing = state.power_mode_timer < FLASH_THRESHOLD && (state.animation_frame / 10) % 2 == 0;
            if flashing {
                Color::White
            } else {
                Color::Blue
            }
        }
        _ => match ghost.personality {
            Personality::Red => Color::Red,
            Personality::Pink => Color::Magenta,
            Personality::Cyan => Color::Cyan,
            Personality::Orange => Color::DarkYellow,
        },
    }
}

fn pacman_glyph(state: &GameState) -> char {
    if !state.pacman.mouth_open {
        return 'O';
    }
    // Mouth opens toward the direction of travel.
    match state.pacman.direction {
        Some(Direction::Up) => 'v',
        Some(Direction::Down) => '^',
        Some(Direction::Left) => '>',
        None | Some(Direction::Right) => '<',
    }
}

fn draw_cell(out: &mut impl Write, cell: IVec2, glyph: char, color: Color) -> io::Result<()> {
    queue!(
        out,
        MoveTo(cell.x as u16, cell.y as u16),
        SetForegroundColor(color),
        Print(glyph)
    )
}

fn draw_board(out: &mut impl Write, map: &Map, state: &GameState) -> io::Result<()> {
    for y in 0..BOARD_CELL_SIZE.y as i32 {
        for x in 0..BOARD_CELL_SIZE.x as i32 {
            let cell = IVec2::new(x, y);
            if map.get_tile(cell) == Some(MapTile::Wall) {
                draw_cell(out, cell, WALL_GLYPH, Color::DarkBlue)?;
            }
        }
    }

    for cell in &state.dots {
        draw_cell(out, *cell, DOT_GLYPH, Color::Grey)?;
    }
    let pellet_glyph = if (state.animation_frame / 10) % 2 == 0 { 'O' } else { 'o' };
    for cell in &state.power_pellets {
        draw_cell(out, *cell, pellet_glyph, Color::White)?;
    }
    Ok(())
}

fn draw_entities(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    for ghost in &state.ghosts {
        let glyph = if ghost.mode == GhostMode::Eaten { '"' } else { 'M' };
        draw_cell(out, pixel_to_grid(ghost.position), glyph, ghost_color(ghost, state))?;
    }
    draw_cell(out, state.pacman.grid_position(), pacman_glyph(state), Color::Yellow)
}

fn draw_hud(out: &mut impl Write, state: &GameState, difficulty: Difficulty) -> io::Result<()> {
    let row = BOARD_CELL_SIZE.y as u16;
    queue!(
        out,
        MoveTo(0, row),
        SetForegroundColor(Color::White),
        Print(format!(
            "Score {:>6}  Lives {}  Level {}  [{}]",
            state.score, state.lives, state.level, difficulty
        ))
    )?;

    let banner = match state.status {
        GameStatus::Menu => Some("Enter: play  1-4: difficulty  q: quit"),
        GameStatus::Paused => Some("PAUSED  p: resume"),
        GameStatus::GameOver => Some("GAME OVER  Enter: again  q: quit"),
        GameStatus::Won => Some("YOU WIN!  Enter: again  q: quit"),
        GameStatus::Playing => None,
    };
    if let Some(text) = banner {
        queue!(out, MoveTo(0, row + 1), SetForegroundColor(Color::Yellow), Print(text))?;
    }
    Ok(())
}

/// Draws a full frame and flushes it.
pub fn draw(out: &mut impl Write, game: &Game) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    draw_board(out, &game.map, &game.state)?;
    draw_entities(out, &game.state)?;
    draw_hud(out, &game.state, game.config.difficulty)?;
    queue!(out, ResetColor)?;
    out.flush()
}
