use serde::{Deserialize, Serialize};

use crate::utils::letters::{self, BLANK};

/// Bonus attached to a board slot. Fixed when the board is laid out,
/// never consumed or reassigned by play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bonus {
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
}

/// A tile committed to a board slot.
///
/// A resolved blank keeps its zero value and remembers that it was drawn
/// as a blank, so returning it to the pool restores the blank count
/// rather than the count of the letter it stood for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTile {
    /// Display letter; for a resolved blank, the letter it stands for
    pub letter: char,
    /// Point value; zero for blanks regardless of resolution
    pub value: u8,
    /// Whether the tile was drawn from the pool as a blank
    pub blank: bool,
}

impl PlacedTile {
    /// Tile for an ordinary letter drawn from the pool.
    pub fn letter(letter: char) -> Self {
        Self {
            letter,
            value: letters::tile_value(letter),
            blank: false,
        }
    }

    /// Blank tile resolved to stand for `letter`.
    pub fn resolved_blank(letter: char) -> Self {
        Self {
            letter,
            value: letters::tile_value(BLANK),
            blank: true,
        }
    }

    /// The letter this tile counts as in the pool.
    pub fn pool_letter(&self) -> char {
        if self.blank { BLANK } else { self.letter }
    }
}
