use alloc::vec::Vec;
use rand::prelude::*;

use super::*;

/// Generation strategy that picks distinct symbols at random, pairs them up and shuffles the result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let picks = pick_symbols(&mut rng, usize::from(config.pair_count()));
        let mut symbols: Vec<Symbol> = picks.iter().chain(picks.iter()).copied().collect();
        shuffle(&mut symbols, &mut rng);

        log::debug!(
            "generated {}x{} board from seed {}",
            config.dimension(),
            config.dimension(),
            self.seed
        );

        match Board::from_config_symbols(config, symbols) {
            Ok(board) => board,
            // a validated config always yields a correctly sized, paired layout
            Err(err) => unreachable!("generated layout rejected: {err}"),
        }
    }
}

/// Picks `count` distinct symbols from the palette without replacement.
///
/// Asking for more than the palette holds returns the whole palette in random order.
pub fn pick_symbols<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Symbol> {
    let mut remaining = Vec::from(Symbol::PALETTE);
    let count = count.min(remaining.len());
    let mut picks = Vec::with_capacity(count);
    for _ in 0..count {
        let index = rng.random_range(0..remaining.len());
        picks.push(remaining.remove(index));
    }
    picks
}

/// Unbiased in-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
