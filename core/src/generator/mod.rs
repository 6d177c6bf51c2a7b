use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}

/// Validates `dimension` and generates a fresh board for it.
pub fn generate_board(dimension: Coord, generator: impl BoardGenerator) -> Result<Board> {
    let config = GameConfig::new(dimension)?;
    Ok(generator.generate(config))
}
