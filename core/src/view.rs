use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a single card cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFace {
    Hidden,
    Flipped(Symbol),
    Matched(Symbol),
}

impl CardFace {
    pub const fn from_card(card: Card) -> Self {
        if card.matched {
            Self::Matched(card.symbol)
        } else if card.flipped {
            Self::Flipped(card.symbol)
        } else {
            Self::Hidden
        }
    }

    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Hidden => None,
            Self::Flipped(symbol) | Self::Matched(symbol) => Some(symbol),
        }
    }
}

/// Player-facing lifecycle of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    Playing,
    Won,
}

impl From<EngineState> for GamePhase {
    fn from(state: EngineState) -> Self {
        match state {
            EngineState::Ready => Self::NotStarted,
            EngineState::Active => Self::Playing,
            EngineState::Won => Self::Won,
        }
    }
}

/// Renders as `N moves`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCounter(pub u32);

impl fmt::Display for MoveCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} moves", self.0)
    }
}

/// Renders as `Time: S sec`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElapsedTime(pub u32);

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time: {} sec", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    pub moves: u32,
    pub seconds: u32,
}

impl fmt::Display for WinSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You won! with {} moves under {} seconds",
            self.moves, self.seconds
        )
    }
}

/// Snapshot of everything the frontend draws, derived from the engine alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub dimension: Coord,
    pub faces: Vec<CardFace>,
    pub phase: GamePhase,
    pub start_enabled: bool,
    /// Board no longer accepts input and is shown as finished
    pub locked: bool,
    pub moves: MoveCounter,
    pub time: ElapsedTime,
    pub win: Option<WinSummary>,
}

impl BoardView {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let board = engine.board();
        let phase = GamePhase::from(engine.state());
        let locked = engine.win_announced();
        let win = locked.then(|| WinSummary {
            moves: engine.total_flips(),
            seconds: engine.elapsed_secs(),
        });

        Self {
            dimension: board.dimension(),
            faces: board.iter().copied().map(CardFace::from_card).collect(),
            phase,
            start_enabled: matches!(phase, GamePhase::NotStarted),
            locked,
            moves: MoveCounter(engine.total_flips()),
            time: ElapsedTime(engine.elapsed_secs()),
            win,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use Symbol::*;

    #[test]
    fn labels_match_status_display() {
        assert_eq!(MoveCounter(0).to_string(), "0 moves");
        assert_eq!(ElapsedTime(12).to_string(), "Time: 12 sec");
        assert_eq!(
            WinSummary {
                moves: 8,
                seconds: 30
            }
            .to_string(),
            "You won! with 8 moves under 30 seconds"
        );
    }

    #[test]
    fn from_engine_projects_faces_and_phase() {
        let board = Board::from_symbols(2, vec![Corn, Mango, Mango, Corn]).unwrap();
        let mut engine = PlayEngine::new(board);

        let view = BoardView::from_engine(&engine);
        assert_eq!(view.phase, GamePhase::NotStarted);
        assert!(view.start_enabled);
        assert!(view.faces.iter().all(|&face| face == CardFace::Hidden));

        engine.flip(0);
        engine.flip(3);
        engine.flip(1);
        let view = BoardView::from_engine(&engine);

        assert_eq!(view.dimension, 2);
        assert_eq!(view.phase, GamePhase::Playing);
        assert!(!view.start_enabled);
        assert_eq!(
            view.faces,
            vec![
                CardFace::Matched(Corn),
                CardFace::Hidden,
                CardFace::Hidden,
                CardFace::Matched(Corn)
            ]
        );
        assert_eq!(view.moves.to_string(), "2 moves");
        assert_eq!(view.win, None);
    }

    #[test]
    fn face_symbol_hidden_until_flipped() {
        assert_eq!(CardFace::Hidden.symbol(), None);
        assert_eq!(CardFace::Flipped(Mango).symbol(), Some(Mango));
        assert_eq!(
            CardFace::from_card(Card {
                symbol: Banana,
                flipped: false,
                matched: true
            }),
            CardFace::Matched(Banana)
        );
    }
}
