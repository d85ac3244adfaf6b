//! Board parsing functionality for converting raw layouts into structured data.

use crate::constants::{MapTile, BOARD_CELL_SIZE};
use crate::error::ParseError;
use glam::IVec2;

/// Represents the parsed data from a raw board layout.
#[derive(Debug)]
pub struct ParsedBoard {
    /// The parsed tile layout, indexed `[x][y]`.
    pub tiles: [[MapTile; BOARD_CELL_SIZE.y as usize]; BOARD_CELL_SIZE.x as usize],
    /// Pac-Man's starting cell.
    pub pacman_start: Option<IVec2>,
    /// Starting cells for the four ghosts, in identity order
    /// (red, pink, cyan, orange).
    pub ghost_starts: [Option<IVec2>; 4],
}

/// Parser for converting raw board layouts into structured map data.
pub struct BoardParser;

impl BoardParser {
    /// Parses a single character into a map tile.
    ///
    /// Marker characters (`0` for Pac-Man, `1`-`4` for ghosts) parse to the
    /// tile the entity stands on; their positions are tracked separately.
    pub fn parse_character(c: char) -> Result<MapTile, ParseError> {
        match c {
            '#' => Ok(MapTile::Wall),
            '.' => Ok(MapTile::Dot),
            'o' => Ok(MapTile::PowerPellet),
            ' ' => Ok(MapTile::Empty),
            'H' => Ok(MapTile::GhostHouse),
            '0' => Ok(MapTile::Empty),
            '1'..='4' => Ok(MapTile::GhostHouse),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Parses a raw board layout into structured map data.
    ///
    /// # Errors
    ///
    /// Returns an error if the board contains unknown characters or a row of
    /// the wrong length. Missing start markers are left as `None`; callers
    /// decide whether they are required.
    pub fn parse_board(raw_board: [&str; BOARD_CELL_SIZE.y as usize]) -> Result<ParsedBoard, ParseError> {
        let mut tiles = [[MapTile::Empty; BOARD_CELL_SIZE.y as usize]; BOARD_CELL_SIZE.x as usize];
        let mut pacman_start = None;
        let mut ghost_starts = [None; 4];

        for (y, line) in raw_board.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_CELL_SIZE.x as usize {
                return Err(ParseError::BadRowLength {
                    row: y,
                    len,
                    expected: BOARD_CELL_SIZE.x as usize,
                });
            }

            for (x, character) in line.chars().enumerate() {
                let tile = Self::parse_character(character)?;

                match character {
                    '0' => pacman_start = Some(IVec2::new(x as i32, y as i32)),
                    '1'..='4' => {
                        let index = character as usize - '1' as usize;
                        ghost_starts[index] = Some(IVec2::new(x as i32, y as i32));
                    }
                    _ => {}
                }

                tiles[x][y] = tile;
            }
        }

        Ok(ParsedBoard {
            tiles,
            pacman_start,
            ghost_starts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAW_BOARD;

    #[test]
    fn test_parse_character() {
        assert!(matches!(BoardParser::parse_character('#').unwrap(), MapTile::Wall));
        assert!(matches!(BoardParser::parse_character('.').unwrap(), MapTile::Dot));
        assert!(matches!(BoardParser::parse_character('o').unwrap(), MapTile::PowerPellet));
        assert!(matches!(BoardParser::parse_character(' ').unwrap(), MapTile::Empty));
        assert!(matches!(BoardParser::parse_character('H').unwrap(), MapTile::GhostHouse));
        assert!(matches!(BoardParser::parse_character('0').unwrap(), MapTile::Empty));
        assert!(matches!(BoardParser::parse_character('3').unwrap(), MapTile::GhostHouse));

        assert!(BoardParser::parse_character('Z').is_err());
    }

    #[test]
    fn test_parse_board() {
        let parsed = BoardParser::parse_board(RAW_BOARD).unwrap();

        assert_eq!(parsed.tiles.len(), BOARD_CELL_SIZE.x as usize);
        assert_eq!(parsed.tiles[0].len(), BOARD_CELL_SIZE.y as usize);

        assert!(parsed.pacman_start.is_some());
        for start in parsed.ghost_starts {
            assert!(start.is_some());
        }

        // Corners of the board are walls.
        assert_eq!(parsed.tiles[0][0], MapTile::Wall);
        assert_eq!(parsed.tiles[BOARD_CELL_SIZE.x as usize - 1][0], MapTile::Wall);
    }

    #[test]
    fn test_parse_board_invalid_character() {
        let mut invalid_board = RAW_BOARD;
        invalid_board[3] = "#..........Z........#";

        let result = BoardParser::parse_board(invalid_board);
        assert!(matches!(result.unwrap_err(), ParseError::UnknownCharacter('Z')));
    }

    #[test]
    fn test_parse_board_bad_row_length() {
        let mut invalid_board = RAW_BOARD;
        invalid_board[5] = "#....#";

        let result = BoardParser::parse_board(invalid_board);
        assert!(matches!(result.unwrap_err(), ParseError::BadRowLength { row: 5, .. }));
    }
}
