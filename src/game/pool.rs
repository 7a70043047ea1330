use std::collections::HashMap;

use crate::error::GameError;
use crate::utils::letters::{tile_value, TILE_SET};

/// Shared tile inventory: remaining count per letter.
///
/// Owned by one session and passed explicitly to the rack generator;
/// draws decrement, returns increment, consumed tiles simply never
/// come back.
#[derive(Debug, Clone)]
pub struct TilePool {
    remaining: HashMap<char, u8>,
}

impl TilePool {
    /// Fresh pool with the full standard distribution.
    pub fn new() -> Self {
        let remaining = TILE_SET
            .iter()
            .map(|(&letter, spec)| (letter, spec.count))
            .collect();
        Self { remaining }
    }

    /// Take one tile of `letter` out of the pool.
    pub fn decrement(&mut self, letter: char) -> Result<(), GameError> {
        match self.remaining.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(GameError::OutOfTiles(letter)),
        }
    }

    /// Return one tile of `letter` to the pool.
    pub fn increment(&mut self, letter: char) {
        *self.remaining.entry(letter).or_insert(0) += 1;
    }

    pub fn remaining_of(&self, letter: char) -> u8 {
        self.remaining.get(&letter).copied().unwrap_or(0)
    }

    pub fn total_remaining(&self) -> u32 {
        self.remaining.values().map(|&count| count as u32).sum()
    }

    /// Point value of a letter (zero for the blank).
    pub fn value_of(&self, letter: char) -> u8 {
        tile_value(letter)
    }

    /// Letters still drawable, in a stable order.
    pub fn available_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .remaining
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&letter, _)| letter)
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Whether `word` can be drawn in full from the remaining tiles,
    /// counting repeated letters against the same inventory.
    pub fn can_build(&self, word: &str) -> bool {
        let mut needed: HashMap<char, u8> = HashMap::new();
        for ch in word.chars() {
            let count = needed.entry(ch).or_insert(0);
            *count += 1;
            if *count > self.remaining_of(ch) {
                return false;
            }
        }
        true
    }
}

impl Default for TilePool {
    fn default() -> Self {
        Self::new()
    }
}
