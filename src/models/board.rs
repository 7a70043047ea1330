use serde::{Deserialize, Serialize};

use super::tile::{Bonus, PlacedTile};

/// One board position: an optional tile over an immutable bonus tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    bonus: Option<Bonus>,
    tile: Option<PlacedTile>,
}

impl Slot {
    pub fn bonus(&self) -> Option<Bonus> {
        self.bonus
    }

    pub fn tile(&self) -> Option<&PlacedTile> {
        self.tile.as_ref()
    }
}

/// A single row of slots. Occupied slots always form a contiguous run
/// anchored at index 0; placement enforces this before any mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    slots: Vec<Slot>,
}

impl Board {
    /// Lay out a board from a bonus pattern, one entry per slot.
    pub fn new(layout: &[Option<Bonus>]) -> Self {
        let slots = layout
            .iter()
            .map(|&bonus| Slot { bonus, tile: None })
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn tile_at(&self, index: usize) -> Option<&PlacedTile> {
        self.slots.get(index).and_then(|slot| slot.tile.as_ref())
    }

    /// Indices of occupied slots, in ascending order.
    pub fn occupied_indices(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.tile.is_some())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// True when no slot holds a tile.
    pub fn is_clear(&self) -> bool {
        self.slots.iter().all(|slot| slot.tile.is_none())
    }

    /// Remove every tile, handing them back so the caller decides
    /// whether they are consumed or returned to the pool.
    pub fn clear(&mut self) -> Vec<PlacedTile> {
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.tile.take())
            .collect()
    }

    pub(crate) fn set_tile(&mut self, index: usize, tile: PlacedTile) {
        self.slots[index].tile = Some(tile);
    }
}
