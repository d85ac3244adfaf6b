//! Player commands and their terminal key bindings.

use crossterm::event::KeyCode;

use crate::config::Difficulty;
use crate::map::direction::Direction;

/// An input-driven request to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Buffer a direction change for Pac-Man.
    Move(Direction),
    /// Begin play from the menu, or restart after a finished game.
    Start,
    TogglePause,
    /// Full reset back to the menu.
    Reset,
    SetDifficulty(Difficulty),
    Exit,
}

impl GameCommand {
    /// Maps a key press to a command. Arrows and WASD both steer.
    pub fn from_key(code: KeyCode) -> Option<Self> {
        let command = match code {
            KeyCode::Up | KeyCode::Char('w') => GameCommand::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('s') => GameCommand::Move(Direction::Down),
            KeyCode::Left | KeyCode::Char('a') => GameCommand::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('d') => GameCommand::Move(Direction::Right),
            KeyCode::Enter | KeyCode::Char(' ') => GameCommand::Start,
            KeyCode::Char('p') => GameCommand::TogglePause,
            KeyCode::Char('r') => GameCommand::Reset,
            KeyCode::Char('1') => GameCommand::SetDifficulty(Difficulty::Easy),
            KeyCode::Char('2') => GameCommand::SetDifficulty(Difficulty::Normal),
            KeyCode::Char('3') => GameCommand::SetDifficulty(Difficulty::Hard),
            KeyCode::Char('4') => GameCommand::SetDifficulty(Difficulty::Insane),
            KeyCode::Char('q') | KeyCode::Esc => GameCommand::Exit,
            _ => return None,
        };
        Some(command)
    }
}
