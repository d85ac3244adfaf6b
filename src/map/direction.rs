use glam::{IVec2, Vec2};

/// A cardinal movement direction.
///
/// Entities that are not moving carry `Option<Direction>::None` instead of a
/// dedicated variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the fixed order used for tie-breaking.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The unit grid offset for this direction.
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// The unit pixel vector for this direction.
    pub fn vector(self) -> Vec2 {
        self.offset().as_vec2()
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_units() {
        for direction in Direction::ALL {
            let offset = direction.offset();
            assert_eq!(offset.x.abs() + offset.y.abs(), 1);
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.offset() + direction.opposite().offset(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_tie_break_order() {
        assert_eq!(
            Direction::ALL,
            [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
    }
}
