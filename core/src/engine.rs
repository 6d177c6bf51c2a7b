use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Active,
    Won,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Gameplay state of one board: which cards are up, counters, and where the game is in its lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    generation: Generation,
    state: EngineState,
    flipped_count: u8,
    total_flips: Saturating<u32>,
    elapsed_secs: Saturating<u32>,
    win_announced: bool,
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            generation: Generation::default(),
            state: Default::default(),
            flipped_count: 0,
            total_flips: Saturating(0),
            elapsed_secs: Saturating(0),
            win_announced: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn flipped_count(&self) -> u8 {
        self.flipped_count
    }

    pub fn total_flips(&self) -> u32 {
        self.total_flips.0
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs.0
    }

    pub fn win_announced(&self) -> bool {
        self.win_announced
    }

    pub fn card_at(&self, index: CardIndex) -> Option<Card> {
        self.board.get(index).copied()
    }

    pub fn can_flip_at(&self, index: CardIndex) -> bool {
        !self.state.is_finished()
            && self.flipped_count < 2
            && self.card_at(index).is_some_and(Card::can_flip)
    }

    /// Marks the game as started. Only the first call on a fresh board has an effect.
    pub fn start(&mut self) -> bool {
        if self.state.is_ready() {
            log::debug!("game {} started", self.generation.get());
            self.state = EngineState::Active;
            true
        } else {
            false
        }
    }

    pub fn flip(&mut self, index: CardIndex) -> FlipOutcome {
        use FlipOutcome::*;

        let Some(card) = self.card_at(index) else {
            log::warn!("flip ignored, no card at index {}", index);
            return NoChange;
        };

        if !card.can_flip() || self.state.is_finished() {
            return NoChange;
        }

        if self.flipped_count >= 2 {
            log::trace!("flip ignored at {}, pair still face-up", index);
            return NoChange;
        }

        if let Some(card) = self.board.get_mut(index) {
            card.flipped = true;
        }
        self.flipped_count += 1;
        self.total_flips += 1;
        self.start();

        let outcome = if self.flipped_count == 2 {
            self.compare_pending()
        } else {
            FirstOfPair
        };

        if self.board.face_down_count() == 0 {
            self.end_game();
            Won
        } else {
            outcome
        }
    }

    /// Advances the clock by one second while the game is running.
    pub fn tick(&mut self) -> bool {
        if matches!(self.state, EngineState::Active) {
            self.elapsed_secs += 1;
            true
        } else {
            false
        }
    }

    pub fn resolve(&mut self, action: ScheduledAction) -> ResolveOutcome {
        if action.generation != self.generation {
            log::debug!(
                "ignoring stale {:?} from game {}, current is {}",
                action.kind,
                action.generation.get(),
                self.generation.get()
            );
            return ResolveOutcome::Stale;
        }

        match action.kind {
            ActionKind::FlipBack => self.flip_back(),
            ActionKind::AnnounceWin => self.announce_win(),
        }
    }

    /// Swaps in a fresh board and resets every counter.
    pub fn restart(&mut self, board: Board) {
        let generation = self.generation.next();
        *self = Self {
            generation,
            ..Self::new(board)
        };
        log::debug!("game {} ready", generation.get());
    }

    fn compare_pending(&mut self) -> FlipOutcome {
        let pending = self.board.pending_indices();
        let [a, b] = pending.as_slice() else {
            log::warn!("expected a face-up pair, found {} cards", pending.len());
            return FlipOutcome::Mismatched;
        };
        let (a, b) = (*a, *b);

        let same = matches!(
            (self.card_at(a), self.card_at(b)),
            (Some(first), Some(second)) if first.symbol == second.symbol
        );
        if !same {
            return FlipOutcome::Mismatched;
        }

        for index in [a, b] {
            if let Some(card) = self.board.get_mut(index) {
                card.matched = true;
            }
        }
        FlipOutcome::Matched
    }

    fn flip_back(&mut self) -> ResolveOutcome {
        for card in self.board.iter_mut().filter(|card| card.is_pending()) {
            card.flipped = false;
        }
        self.flipped_count = 0;
        ResolveOutcome::FlippedBack
    }

    fn announce_win(&mut self) -> ResolveOutcome {
        if self.state.is_finished() && !self.win_announced {
            self.win_announced = true;
            ResolveOutcome::WinAnnounced
        } else {
            ResolveOutcome::NoChange
        }
    }

    fn end_game(&mut self) {
        if self.state.is_finished() {
            return;
        }
        log::debug!(
            "game {} won with {} moves in {} seconds",
            self.generation.get(),
            self.total_flips,
            self.elapsed_secs
        );
        self.state = EngineState::Won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use Symbol::*;

    fn engine(dimension: Coord, symbols: Vec<Symbol>) -> PlayEngine {
        PlayEngine::new(Board::from_symbols(dimension, symbols).unwrap())
    }

    fn flip_back(engine: &mut PlayEngine) -> ResolveOutcome {
        engine.resolve(ScheduledAction {
            generation: engine.generation(),
            kind: ActionKind::FlipBack,
        })
    }

    fn four_by_four() -> PlayEngine {
        engine(
            4,
            vec![
                Corn, Corn, Mango, Grapes, //
                Mango, Grapes, Banana, Banana, //
                Carrot, Carrot, Potato, Potato, //
                Avocado, Avocado, Cherries, Cherries,
            ],
        )
    }

    #[test]
    fn first_flip_starts_game() {
        let mut engine = four_by_four();
        assert_eq!(engine.state(), EngineState::Ready);

        assert_eq!(engine.flip(2), FlipOutcome::FirstOfPair);
        assert_eq!(engine.state(), EngineState::Active);
        assert_eq!(engine.flipped_count(), 1);
        assert_eq!(engine.total_flips(), 1);
    }

    #[test]
    fn reflipping_same_card_is_noop() {
        let mut engine = four_by_four();
        engine.flip(2);
        let before = engine.clone();

        assert_eq!(engine.flip(2), FlipOutcome::NoChange);
        assert_eq!(engine, before);
    }

    #[test]
    fn out_of_range_flip_is_noop() {
        let mut engine = four_by_four();
        assert_eq!(engine.flip(16), FlipOutcome::NoChange);
        assert_eq!(engine.state(), EngineState::Ready);
        assert_eq!(engine.total_flips(), 0);
    }

    #[test]
    fn matching_pair_stays_face_up_after_delay() {
        let mut engine = four_by_four();

        assert_eq!(engine.flip(0), FlipOutcome::FirstOfPair);
        assert_eq!(engine.flip(1), FlipOutcome::Matched);
        assert_eq!(engine.total_flips(), 2);
        assert!(engine.card_at(0).unwrap().matched);
        assert!(engine.card_at(1).unwrap().matched);

        assert_eq!(flip_back(&mut engine), ResolveOutcome::FlippedBack);
        assert!(engine.card_at(0).unwrap().is_face_up());
        assert!(engine.card_at(1).unwrap().flipped);
        assert_eq!(engine.flipped_count(), 0);
    }

    #[test]
    fn mismatched_pair_flips_back_after_delay() {
        let mut engine = four_by_four();

        engine.flip(0);
        engine.flip(1);
        flip_back(&mut engine);

        assert_eq!(engine.flip(2), FlipOutcome::FirstOfPair);
        assert_eq!(engine.flip(3), FlipOutcome::Mismatched);
        assert_eq!(engine.flipped_count(), 2);
        assert_eq!(engine.total_flips(), 4);

        assert_eq!(flip_back(&mut engine), ResolveOutcome::FlippedBack);
        assert!(!engine.card_at(2).unwrap().is_face_up());
        assert!(!engine.card_at(3).unwrap().is_face_up());
        assert_eq!(engine.flipped_count(), 0);
        assert_eq!(engine.total_flips(), 4);
    }

    #[test]
    fn flips_wait_for_pair_to_resolve() {
        let mut engine = four_by_four();
        engine.flip(2);
        engine.flip(3);

        assert!(!engine.can_flip_at(4));
        assert_eq!(engine.flip(4), FlipOutcome::NoChange);
        assert_eq!(engine.total_flips(), 2);

        flip_back(&mut engine);
        assert!(engine.can_flip_at(4));
    }

    #[test]
    fn two_by_two_wins_once() {
        let mut engine = engine(2, vec![Corn, Corn, Mango, Mango]);
        let announce = |engine: &mut PlayEngine| {
            engine.resolve(ScheduledAction {
                generation: engine.generation(),
                kind: ActionKind::AnnounceWin,
            })
        };

        engine.flip(0);
        assert_eq!(engine.flip(1), FlipOutcome::Matched);
        assert_eq!(announce(&mut engine), ResolveOutcome::NoChange);
        flip_back(&mut engine);

        engine.flip(2);
        assert_eq!(engine.flip(3), FlipOutcome::Won);
        assert_eq!(engine.state(), EngineState::Won);
        assert_eq!(engine.total_flips(), 4);

        assert_eq!(flip_back(&mut engine), ResolveOutcome::FlippedBack);
        assert!(engine.board().iter().all(|card| card.is_face_up()));
        assert_eq!(announce(&mut engine), ResolveOutcome::WinAnnounced);
        assert_eq!(announce(&mut engine), ResolveOutcome::NoChange);
        assert!(engine.win_announced());
    }

    #[test]
    fn tick_counts_only_while_active() {
        let mut engine = engine(2, vec![Corn, Corn, Mango, Mango]);
        assert!(!engine.tick());

        engine.flip(0);
        assert!(engine.tick());
        assert!(engine.tick());
        assert_eq!(engine.elapsed_secs(), 2);

        engine.flip(1);
        flip_back(&mut engine);
        engine.flip(2);
        engine.flip(3);
        assert!(!engine.tick());
        assert_eq!(engine.elapsed_secs(), 2);
    }

    #[test]
    fn start_is_idempotent() {
        let mut engine = four_by_four();
        assert!(engine.start());
        assert!(!engine.start());
        assert_eq!(engine.state(), EngineState::Active);
        assert_eq!(engine.total_flips(), 0);
    }

    #[test]
    fn restart_resets_and_invalidates_pending_actions() {
        let mut engine = four_by_four();
        engine.flip(2);
        engine.flip(3);
        engine.tick();
        let stale = ScheduledAction {
            generation: engine.generation(),
            kind: ActionKind::FlipBack,
        };

        engine.restart(Board::from_symbols(2, vec![Corn, Mango, Corn, Mango]).unwrap());

        assert_eq!(engine.state(), EngineState::Ready);
        assert_eq!(engine.total_flips(), 0);
        assert_eq!(engine.elapsed_secs(), 0);
        assert_eq!(engine.flipped_count(), 0);
        assert_eq!(engine.generation(), stale.generation.next());

        engine.flip(0);
        engine.flip(1);
        assert_eq!(engine.resolve(stale), ResolveOutcome::Stale);
        assert!(engine.card_at(0).unwrap().flipped);
        assert_eq!(engine.flipped_count(), 2);
    }
}
