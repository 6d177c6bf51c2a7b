use thiserror::Error;

use crate::{CardCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimension must be even and non-zero, got {0}")]
    InvalidDimension(Coord),
    #[error("Board dimension {dimension} needs more symbols than the palette holds, max dimension is {max}")]
    PaletteExhausted { dimension: Coord, max: Coord },
    #[error("Board layout has {actual} cards, expected {expected}")]
    InvalidLayout {
        expected: CardCount,
        actual: usize,
    },
    #[error("Every symbol on the board must appear exactly twice")]
    UnpairedSymbols,
}

pub type Result<T> = core::result::Result<T, GameError>;
