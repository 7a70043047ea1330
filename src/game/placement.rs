use crate::error::GameError;
use crate::models::{Board, PlacedTile};

pub struct Placement;

impl Placement {
    /// Whether a tile may land on `slot`.
    ///
    /// The target must be empty and in range; the first tile must anchor
    /// at slot 0; every later tile must keep the occupied run contiguous
    /// and may never sit before the run's start.
    pub fn can_place(board: &Board, slot: usize) -> bool {
        if slot >= board.len() || board.tile_at(slot).is_some() {
            return false;
        }

        let occupied = board.occupied_indices();
        if occupied.is_empty() {
            return slot == 0;
        }

        let min = occupied[0];
        if slot < min {
            return false;
        }

        let max = occupied[occupied.len() - 1].max(slot);
        max - min + 1 == occupied.len() + 1
    }

    /// Commit a tile to `slot`, or report `IllegalPlacement` and leave the
    /// board untouched (the caller keeps the tile in the rack).
    pub fn place(board: &mut Board, slot: usize, tile: PlacedTile) -> Result<(), GameError> {
        if !Self::can_place(board, slot) {
            return Err(GameError::IllegalPlacement { slot });
        }
        board.set_tile(slot, tile);
        Ok(())
    }

    /// The word currently spelled across the board, in slot order.
    pub fn current_word(board: &Board) -> String {
        board
            .slots()
            .iter()
            .filter_map(|slot| slot.tile())
            .map(|tile| tile.letter)
            .collect()
    }

    /// Resolve external input for a blank tile into a concrete letter.
    /// Anything but a single ASCII letter aborts the placement.
    pub fn resolve_blank(input: &str) -> Result<char, GameError> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_alphabetic() => Ok(ch.to_ascii_uppercase()),
            _ => Err(GameError::BlankResolutionInvalid),
        }
    }
}
