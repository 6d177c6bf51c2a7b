use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use hashbrown::HashMap;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub symbol: Symbol,
    pub flipped: bool,
    pub matched: bool,
}

impl Card {
    pub const fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            flipped: false,
            matched: false,
        }
    }

    /// Matched cards stay face-up for display even if their flip flag was cleared.
    pub const fn is_face_up(self) -> bool {
        self.flipped || self.matched
    }

    pub const fn can_flip(self) -> bool {
        !self.is_face_up()
    }

    /// Face-up as part of the current attempt.
    pub const fn is_pending(self) -> bool {
        self.flipped && !self.matched
    }
}

/// Square grid of cards, addressed row-major by [`CardIndex`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cards: Array2<Card>,
}

impl Board {
    /// Lays `symbols` out row-major on a `dimension × dimension` grid.
    pub fn from_symbols(dimension: Coord, symbols: Vec<Symbol>) -> Result<Self> {
        let config = GameConfig::new(dimension)?;
        Self::from_config_symbols(config, symbols)
    }

    pub(crate) fn from_config_symbols(config: GameConfig, symbols: Vec<Symbol>) -> Result<Self> {
        let expected = config.total_cards();
        if symbols.len() != usize::from(expected) {
            return Err(GameError::InvalidLayout {
                expected,
                actual: symbols.len(),
            });
        }

        let mut counts: HashMap<Symbol, u8> = HashMap::new();
        for &symbol in &symbols {
            *counts.entry(symbol).or_default() += 1;
        }
        if counts.values().any(|&count| count != 2) {
            return Err(GameError::UnpairedSymbols);
        }

        let dimension = usize::from(config.dimension());
        let cards = symbols.into_iter().map(Card::new).collect();
        let cards = Array2::from_shape_vec((dimension, dimension), cards).map_err(|_| {
            GameError::InvalidLayout {
                expected,
                actual: dimension * dimension,
            }
        })?;
        Ok(Self { cards })
    }

    pub fn dimension(&self) -> Coord {
        // boards are only built from a validated config, so this always fits
        self.cards.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn coords_of(&self, index: CardIndex) -> Option<Coord2> {
        let dimension = CardIndex::from(self.dimension());
        if usize::from(index) >= self.len() {
            return None;
        }
        let row = (index / dimension).try_into().ok()?;
        let col = (index % dimension).try_into().ok()?;
        Some((row, col))
    }

    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        let coords = self.coords_of(index)?;
        self.cards.get(coords.to_nd_index())
    }

    pub fn get_mut(&mut self, index: CardIndex) -> Option<&mut Card> {
        let coords = self.coords_of(index)?;
        self.cards.get_mut(coords.to_nd_index())
    }

    /// Cards in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.iter().map(|card| card.symbol)
    }

    pub fn face_down_count(&self) -> usize {
        self.iter().filter(|card| card.can_flip()).count()
    }

    pub fn matched_count(&self) -> usize {
        self.iter().filter(|card| card.matched).count()
    }

    /// Indices of flipped cards that are not matched yet.
    pub fn pending_indices(&self) -> SmallVec<[CardIndex; 2]> {
        self.iter()
            .enumerate()
            .filter(|(_, card)| card.is_pending())
            .filter_map(|(i, _)| CardIndex::try_from(i).ok())
            .collect()
    }
}

impl Index<Coord2> for Board {
    type Output = Card;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cards[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cards[coords.to_nd_index()]
    }
}
