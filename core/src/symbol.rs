use serde::{Deserialize, Serialize};

/// Face of a card. Every symbol on a board appears on exactly two cards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Potato,
    Cherries,
    Avocado,
    Corn,
    Carrot,
    Grapes,
    Watermelon,
    Banana,
    Mango,
    Pineapple,
}

impl Symbol {
    /// The fixed palette boards are drawn from.
    pub const PALETTE: [Symbol; 10] = [
        Symbol::Potato,
        Symbol::Cherries,
        Symbol::Avocado,
        Symbol::Corn,
        Symbol::Carrot,
        Symbol::Grapes,
        Symbol::Watermelon,
        Symbol::Banana,
        Symbol::Mango,
        Symbol::Pineapple,
    ];

    pub const fn glyph(self) -> &'static str {
        use Symbol::*;
        match self {
            Potato => "🥔",
            Cherries => "🍒",
            Avocado => "🥑",
            Corn => "🌽",
            Carrot => "🥕",
            Grapes => "🍇",
            Watermelon => "🍉",
            Banana => "🍌",
            Mango => "🥭",
            Pineapple => "🍍",
        }
    }
}

impl core::fmt::Display for Symbol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.glyph())
    }
}
