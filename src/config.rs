use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;

use crate::game::rack::DEFAULT_SEED_ATTEMPTS;
use crate::models::Bonus;

/// How the rack is refilled after a valid submission. Both behaviors
/// exist in the wild; the choice is configuration, not a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefillPolicy {
    /// Keep unplayed tiles and draw only the missing ones
    TopUpDeficit,
    /// Return unplayed tiles to the pool and draw a whole fresh rack
    RegenerateRack,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub rack_size: usize,
    /// Bonus tag per board slot; also fixes the board length
    pub board_layout: Vec<Option<Bonus>>,
    pub dictionary_path: String,
    pub refill_policy: RefillPolicy,
    /// Retry bound for the rack generator's seed-word search
    pub seed_word_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rack_size: 7,
            board_layout: parse_board_layout(DEFAULT_BOARD_LAYOUT)
                .expect("default layout is well-formed"),
            dictionary_path: "./words.txt".to_string(),
            refill_policy: RefillPolicy::TopUpDeficit,
            seed_word_attempts: DEFAULT_SEED_ATTEMPTS,
        }
    }
}

/// Seven slots, double-letter on slot 1, double-word on slot 4.
const DEFAULT_BOARD_LAYOUT: &str = ".L..W..";

impl GameConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let rack_size = env::var("RACK_SIZE")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .context("RACK_SIZE must be a number")?;

        let board_layout = parse_board_layout(
            &env::var("BOARD_LAYOUT").unwrap_or_else(|_| DEFAULT_BOARD_LAYOUT.to_string()),
        )
        .context("BOARD_LAYOUT must use only '.', 'L' and 'W'")?;

        let dictionary_path =
            env::var("DICTIONARY_PATH").unwrap_or_else(|_| "./words.txt".to_string());

        let refill_policy = match env::var("REFILL_POLICY")
            .unwrap_or_else(|_| "top-up-deficit".to_string())
            .as_str()
        {
            "top-up-deficit" => RefillPolicy::TopUpDeficit,
            "regenerate-rack" => RefillPolicy::RegenerateRack,
            other => bail!("unknown REFILL_POLICY: {other}"),
        };

        let seed_word_attempts = env::var("SEED_WORD_ATTEMPTS")
            .unwrap_or_else(|_| DEFAULT_SEED_ATTEMPTS.to_string())
            .parse()
            .context("SEED_WORD_ATTEMPTS must be a number")?;

        Ok(Self {
            rack_size,
            board_layout,
            dictionary_path,
            refill_policy,
            seed_word_attempts,
        })
    }
}

/// One character per slot: '.' plain, 'L' double-letter, 'W' double-word.
pub fn parse_board_layout(pattern: &str) -> Result<Vec<Option<Bonus>>> {
    pattern
        .chars()
        .map(|ch| match ch {
            '.' => Ok(None),
            'L' => Ok(Some(Bonus::DoubleLetter)),
            'W' => Ok(Some(Bonus::DoubleWord)),
            other => bail!("unknown board layout tag: {other}"),
        })
        .collect()
}
