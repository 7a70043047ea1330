//! Rules engine for a single-row word tile game.
//!
//! A player drags tiles from a rack onto a row of board slots, submits
//! the formed word, and scores it against a dictionary. This crate is
//! the rules only: tile pool accounting, rack generation, placement
//! legality, scoring, and the session state machine. Rendering, drag
//! gestures, and the dictionary's storage location belong to the caller.
//!
//! ```no_run
//! use scrabble_row::{Dictionary, GameConfig, GameSession};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = GameConfig::from_env()?;
//! let dictionary = Dictionary::load(&config.dictionary_path).await?;
//! let mut session = GameSession::new(config, dictionary)?;
//!
//! session.place_tile(0, 0, None)?;
//! let outcome = session.submit()?;
//! println!("{}", outcome.message());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;

pub use config::{GameConfig, RefillPolicy};
pub use dictionary::Dictionary;
pub use error::GameError;
pub use game::{GameSession, Placement, RackGenerator, Scorer, SessionPhase, SubmitOutcome, TilePool};
pub use models::{Board, Bonus, PlacedTile, Slot};
