use rand::seq::SliceRandom;
use rand::Rng;

use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::pool::TilePool;

/// Bound on random candidate picks while searching for a seed word.
pub const DEFAULT_SEED_ATTEMPTS: usize = 1000;

pub struct RackGenerator;

impl RackGenerator {
    /// Draw `count` letters from the pool, seeded with a playable
    /// dictionary word when one can be found.
    pub fn generate(
        count: usize,
        pool: &mut TilePool,
        dictionary: &Dictionary,
    ) -> Result<Vec<char>, GameError> {
        Self::generate_with_rng(count, pool, dictionary, DEFAULT_SEED_ATTEMPTS, &mut rand::rng())
    }

    /// Generate a rack using a specific RNG (for testing/seeding).
    ///
    /// Seeding: up to `seed_attempts` random picks from the dictionary
    /// words of length <= `count`, keeping the first that is fully
    /// buildable from the pool. The rest of the rack is drawn uniformly
    /// from letters still available, then the whole rack is shuffled so
    /// the seed word is not visibly clustered. If the pool empties before
    /// the rack is full, every letter drawn here goes back and the call
    /// fails with `PoolExhausted`; a short rack is never returned.
    pub fn generate_with_rng<R: Rng>(
        count: usize,
        pool: &mut TilePool,
        dictionary: &Dictionary,
        seed_attempts: usize,
        rng: &mut R,
    ) -> Result<Vec<char>, GameError> {
        let mut rack = Vec::with_capacity(count);

        if let Some(word) = Self::pick_seed_word(count, pool, dictionary, seed_attempts, rng) {
            tracing::debug!(word, "seeding rack with buildable word");
            for ch in word.chars() {
                pool.decrement(ch)?;
                rack.push(ch);
            }
        }

        while rack.len() < count {
            let available = pool.available_letters();
            if available.is_empty() {
                tracing::warn!(
                    drawn = rack.len(),
                    requested = count,
                    "pool exhausted mid-draw, rolling back"
                );
                for &ch in &rack {
                    pool.increment(ch);
                }
                return Err(GameError::PoolExhausted { requested: count });
            }
            let letter = available[rng.random_range(0..available.len())];
            pool.decrement(letter)?;
            rack.push(letter);
        }

        rack.shuffle(rng);
        Ok(rack)
    }

    /// A dictionary word of length <= `count` buildable from the pool,
    /// or None after the retry bound runs out (the rack then holds only
    /// random draws and may not contain a playable word).
    fn pick_seed_word<'a, R: Rng>(
        count: usize,
        pool: &TilePool,
        dictionary: &'a Dictionary,
        seed_attempts: usize,
        rng: &mut R,
    ) -> Option<&'a str> {
        let candidates = dictionary.words_up_to(count);
        if candidates.is_empty() {
            return None;
        }

        for _ in 0..seed_attempts {
            let word = candidates[rng.random_range(0..candidates.len())];
            if pool.can_build(word) {
                return Some(word);
            }
        }
        None
    }
}
