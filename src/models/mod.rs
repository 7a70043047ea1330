pub mod board;
pub mod tile;

pub use board::{Board, Slot};
pub use tile::{Bonus, PlacedTile};
