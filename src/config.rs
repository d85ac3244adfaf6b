//! Tunable game parameters: difficulty tiers and mode scheduling.

use crate::entity::ghost::Personality;

/// Difficulty tier. Affects ghost speed and which ghosts steer with the
/// bounded graph search instead of the greedy heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display, strum_macros::EnumIter)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Insane,
}

impl Difficulty {
    /// Multiplier applied to the normal-mode ghost speed.
    pub fn speed_multiplier(self) -> f32 {
        match self {
            Difficulty::Easy => 0.85,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.0,
            Difficulty::Insane => 1.15,
        }
    }

    /// Whether this ghost pathfinds while chasing at this tier. Eaten ghosts
    /// always pathfind home regardless of tier.
    pub fn uses_search(self, personality: Personality) -> bool {
        match self {
            Difficulty::Easy | Difficulty::Normal => false,
            Difficulty::Hard => personality == Personality::Red,
            Difficulty::Insane => true,
        }
    }
}

/// Parameters fixed for the lifetime of a game session.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    /// Ticks of the global scatter phase.
    pub scatter_ticks: u32,
    /// Ticks of the global chase phase.
    pub chase_ticks: u32,
    /// Ticks a power pellet keeps ghosts frightened.
    pub power_mode_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            scatter_ticks: 420,
            chase_ticks: 1200,
            power_mode_ticks: 360,
        }
    }
}

impl GameConfig {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_easy_is_only_slowed_tier() {
        for difficulty in Difficulty::iter() {
            let multiplier = difficulty.speed_multiplier();
            if difficulty == Difficulty::Easy {
                assert!(multiplier < 1.0);
            } else {
                assert!(multiplier >= 1.0);
            }
        }
    }

    #[test]
    fn test_search_escalates_with_tier() {
        assert!(!Difficulty::Normal.uses_search(Personality::Red));
        assert!(Difficulty::Hard.uses_search(Personality::Red));
        assert!(!Difficulty::Hard.uses_search(Personality::Orange));
        assert!(Difficulty::Insane.uses_search(Personality::Orange));
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert!(config.chase_ticks > config.scatter_ticks);
    }
}
