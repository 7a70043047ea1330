use std::collections::HashMap;
use once_cell::sync::Lazy;

/// The wildcard tile. Worth zero points; must be resolved to a concrete
/// letter before it lands on the board.
pub const BLANK: char = '_';

/// Point value and starting count for one letter of the shared tile set.
#[derive(Debug, Clone, Copy)]
pub struct TileSpec {
    pub value: u8,
    pub count: u8,
}

/// Standard English Scrabble distribution: 98 letter tiles plus 2 blanks.
const DISTRIBUTION: [(char, u8, u8); 27] = [
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
    (BLANK, 0, 2),
];

/// Tile specs keyed by letter (A-Z plus the blank)
pub static TILE_SET: Lazy<HashMap<char, TileSpec>> = Lazy::new(|| {
    DISTRIBUTION
        .iter()
        .map(|&(letter, value, count)| (letter, TileSpec { value, count }))
        .collect()
});

/// Get the point value for a letter
pub fn tile_value(letter: char) -> u8 {
    let upper = letter.to_ascii_uppercase();
    TILE_SET.get(&upper).map(|spec| spec.value).unwrap_or(0)
}

/// Starting count for a letter in a fresh pool
pub fn starting_count(letter: char) -> u8 {
    let upper = letter.to_ascii_uppercase();
    TILE_SET.get(&upper).map(|spec| spec.count).unwrap_or(0)
}
