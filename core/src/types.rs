use serde::{Deserialize, Serialize};

/// Single coordinate axis, used for the board dimension and row/column positions.
pub type Coord = u8;

/// Count type used for card and pair counts.
pub type CardCount = u16;

/// Positional identity of a card, row-major over the grid.
pub type CardIndex = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Delay before a face-up pair is resolved, in milliseconds.
pub const REVEAL_DELAY_MS: u32 = 1_000;

/// Period of the elapsed-time tick, in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 1_000;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CardCount {
    let a = a as CardCount;
    let b = b as CardCount;
    a.saturating_mul(b)
}

/// Board generation marker, bumped on every restart.
///
/// Delayed actions carry the generation they were scheduled for so that a callback outliving its board can be told
/// apart from one addressed to the current board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(u32);

impl Generation {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
