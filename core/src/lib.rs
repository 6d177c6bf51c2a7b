#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use schedule::*;
pub use symbol::*;
pub use types::*;
pub use view::*;

mod board;
mod controller;
mod engine;
mod error;
mod generator;
mod schedule;
mod symbol;
mod types;
mod view;

/// Validated board configuration.
///
/// Holding one of these means the dimension is even, non-zero and small enough for the symbol palette, which is what
/// makes generation and restarts infallible.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Coord", into = "Coord")]
pub struct GameConfig {
    dimension: Coord,
}

impl GameConfig {
    pub const DEFAULT_DIMENSION: Coord = 4;

    /// Largest even dimension whose pairs still fit in the palette.
    pub const MAX_DIMENSION: Coord = {
        let mut dimension: Coord = 2;
        while mult(dimension + 2, dimension + 2) / 2 <= Symbol::PALETTE.len() as CardCount {
            dimension += 2;
        }
        dimension
    };

    pub fn new(dimension: Coord) -> Result<Self> {
        if dimension == 0 || dimension % 2 != 0 {
            return Err(GameError::InvalidDimension(dimension));
        }
        if dimension > Self::MAX_DIMENSION {
            return Err(GameError::PaletteExhausted {
                dimension,
                max: Self::MAX_DIMENSION,
            });
        }
        Ok(Self { dimension })
    }

    pub const fn dimension(&self) -> Coord {
        self.dimension
    }

    pub const fn total_cards(&self) -> CardCount {
        mult(self.dimension, self.dimension)
    }

    pub const fn pair_count(&self) -> CardCount {
        self.total_cards() / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: Self::DEFAULT_DIMENSION,
        }
    }
}

impl TryFrom<Coord> for GameConfig {
    type Error = GameError;

    fn try_from(dimension: Coord) -> Result<Self> {
        Self::new(dimension)
    }
}

impl From<GameConfig> for Coord {
    fn from(config: GameConfig) -> Self {
        config.dimension
    }
}

/// Outcome of flipping a card
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    NoChange,
    /// First card of an attempt is face-up
    FirstOfPair,
    /// Second card shares the first one's symbol, both are now matched
    Matched,
    /// Second card differs, both flip back after the reveal delay
    Mismatched,
    /// Last face-down card was flipped
    Won,
}

impl FlipOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Whether a pair is now face-up and must be resolved after the reveal delay
    pub const fn completes_pair(self) -> bool {
        matches!(self, Self::Matched | Self::Mismatched | Self::Won)
    }
}

/// Outcome of running a delayed action
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    NoChange,
    /// Action was scheduled for a previous board and was ignored
    Stale,
    FlippedBack,
    WinAnnounced,
}

impl ResolveOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::FlippedBack | Self::WinAnnounced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_odd_and_zero_dimensions() {
        assert_eq!(GameConfig::new(3), Err(GameError::InvalidDimension(3)));
        assert_eq!(GameConfig::new(0), Err(GameError::InvalidDimension(0)));
    }

    #[test]
    fn config_is_bounded_by_palette() {
        assert_eq!(GameConfig::MAX_DIMENSION, 4);
        assert!(GameConfig::new(4).is_ok());
        assert_eq!(
            GameConfig::new(6),
            Err(GameError::PaletteExhausted {
                dimension: 6,
                max: 4
            })
        );
    }

    #[test]
    fn config_counts_cards_and_pairs() {
        let config = GameConfig::new(2).unwrap();
        assert_eq!(config.total_cards(), 4);
        assert_eq!(config.pair_count(), 2);
        assert_eq!(GameConfig::default().total_cards(), 16);
    }
}
