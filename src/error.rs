use thiserror::Error;

/// Recoverable rule violations surfaced by the engine.
///
/// Dictionary load failures are the one fatal startup error; they are
/// reported through `anyhow` by [`crate::dictionary::Dictionary::load`]
/// and a session is never constructed without a loaded dictionary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No tiles of this letter remain in the pool
    #[error("no '{0}' tiles remain in the pool")]
    OutOfTiles(char),

    /// The pool emptied before a rack of the requested size could be drawn
    #[error("tile pool exhausted before drawing {requested} tiles")]
    PoolExhausted { requested: usize },

    /// Placement would break contiguity, anchor the word off slot 0, or
    /// target an occupied or out-of-range slot
    #[error("cannot place a tile at slot {slot}")]
    IllegalPlacement { slot: usize },

    /// Submit was pressed with nothing on the board
    #[error("place at least one tile")]
    EmptySubmission,

    /// A blank tile was not given a single letter A-Z
    #[error("a blank tile must be assigned a single letter A-Z")]
    BlankResolutionInvalid,

    /// The rack holds no tile at this index
    #[error("no rack tile at index {index}")]
    NoSuchRackTile { index: usize },
}
