use crate::models::{Board, Bonus};

pub struct Scorer;

impl Scorer {
    /// Score the word currently on the board.
    ///
    /// Scoring rules:
    /// - Each tile scores its own value (blanks score 0)
    /// - A double-letter slot doubles that tile's value
    /// - Each covered double-word slot doubles the whole word; several
    ///   stack multiplicatively (two covered = x4)
    /// - Bonuses are static slot attributes, never consumed by play
    pub fn score(board: &Board) -> u32 {
        let mut total = 0u32;
        let mut multiplier = 1u32;

        for slot in board.slots() {
            let Some(tile) = slot.tile() else { continue };
            let mut value = tile.value as u32;

            match slot.bonus() {
                Some(Bonus::DoubleLetter) => value *= 2,
                Some(Bonus::DoubleWord) => multiplier *= 2,
                None => {}
            }

            total += value;
        }

        total * multiplier
    }
}
