use crate::config::{GameConfig, RefillPolicy};
use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::game::placement::Placement;
use crate::game::pool::TilePool;
use crate::game::rack::RackGenerator;
use crate::game::scorer::Scorer;
use crate::models::{Board, PlacedTile};
use crate::utils::letters::BLANK;

/// Where a session stands between commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Board is empty; submit is refused
    AwaitingPlacement,
    /// At least one tile is placed; submit is allowed
    ReadyToSubmit,
}

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Word accepted: score banked, played tiles consumed, rack refilled
    Valid { word: String, score: u32, total: u32 },
    /// Word rejected: board and rack tiles went back to the pool,
    /// rack regenerated, score untouched
    Invalid { word: String },
}

impl SubmitOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SubmitOutcome::Valid { .. })
    }

    /// The user-facing message for this outcome.
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Valid { word, score, .. } => {
                format!("\u{2714} \"{word}\" is valid! +{score} points")
            }
            SubmitOutcome::Invalid { word } => {
                format!("\u{2716} \"{word}\" is not valid. Try again.")
            }
        }
    }
}

/// One player's game: total score, rack, board, and the tile pool,
/// driven by the command methods an external presentation layer calls.
///
/// Construction requires a loaded [`Dictionary`]; if the load failed
/// there is no session, which is exactly the disabled pre-game state.
pub struct GameSession {
    config: GameConfig,
    dictionary: Dictionary,
    pool: TilePool,
    rack: Vec<char>,
    board: Board,
    total_score: u32,
}

impl GameSession {
    /// Start a game: fresh pool, empty board, first rack drawn.
    pub fn new(config: GameConfig, dictionary: Dictionary) -> Result<Self, GameError> {
        let mut pool = TilePool::new();
        let rack = Self::draw_rack(&config, &mut pool, &dictionary)?;
        let board = Board::new(&config.board_layout);
        Ok(Self {
            config,
            dictionary,
            pool,
            rack,
            board,
            total_score: 0,
        })
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn rack(&self) -> &[char] {
        &self.rack
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pool(&self) -> &TilePool {
        &self.pool
    }

    pub fn phase(&self) -> SessionPhase {
        if self.board.is_clear() {
            SessionPhase::AwaitingPlacement
        } else {
            SessionPhase::ReadyToSubmit
        }
    }

    /// The word currently spelled on the board.
    pub fn current_word(&self) -> String {
        Placement::current_word(&self.board)
    }

    /// Live score of the word on the board, bonuses included.
    pub fn current_word_score(&self) -> u32 {
        Scorer::score(&self.board)
    }

    /// The score line shown to the player.
    pub fn score_display(&self) -> String {
        if self.board.is_clear() {
            format!("Score: {}", self.total_score)
        } else {
            format!(
                "Current Word Score: {} (Total: {})",
                self.current_word_score(),
                self.total_score
            )
        }
    }

    /// Move the rack tile at `rack_index` onto board slot `slot`.
    ///
    /// A blank must arrive with `blank_as` resolving it to a letter; bad
    /// resolution or an illegal slot leaves the tile in the rack.
    pub fn place_tile(
        &mut self,
        rack_index: usize,
        slot: usize,
        blank_as: Option<&str>,
    ) -> Result<(), GameError> {
        let letter = *self
            .rack
            .get(rack_index)
            .ok_or(GameError::NoSuchRackTile { index: rack_index })?;

        let tile = if letter == BLANK {
            let resolved = Placement::resolve_blank(blank_as.unwrap_or(""))?;
            PlacedTile::resolved_blank(resolved)
        } else {
            PlacedTile::letter(letter)
        };

        Placement::place(&mut self.board, slot, tile)?;
        self.rack.remove(rack_index);
        Ok(())
    }

    /// Submit the word on the board against the dictionary.
    pub fn submit(&mut self) -> Result<SubmitOutcome, GameError> {
        let word = self.current_word();
        if word.is_empty() {
            return Err(GameError::EmptySubmission);
        }

        if self.dictionary.contains(&word) {
            let score = Scorer::score(&self.board);
            self.total_score += score;
            // Played tiles are consumed, never returned to the pool
            self.board.clear();
            tracing::debug!(%word, score, total = self.total_score, "word accepted");
            self.refill_rack()?;
            Ok(SubmitOutcome::Valid {
                word,
                score,
                total: self.total_score,
            })
        } else {
            tracing::debug!(%word, "word not in dictionary");
            self.reset_rack()?;
            Ok(SubmitOutcome::Invalid { word })
        }
    }

    /// Start over: all tiles back to the pool, score zeroed, fresh rack.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.total_score = 0;
        self.reset_rack()
    }

    /// Return every tile on the board and in the rack to the pool, then
    /// draw a whole new rack.
    fn reset_rack(&mut self) -> Result<(), GameError> {
        for tile in self.board.clear() {
            self.pool.increment(tile.pool_letter());
        }
        for letter in self.rack.drain(..) {
            self.pool.increment(letter);
        }
        self.rack = Self::draw_rack(&self.config, &mut self.pool, &self.dictionary)?;
        Ok(())
    }

    /// Bring the rack back to full size after a valid submission.
    fn refill_rack(&mut self) -> Result<(), GameError> {
        match self.config.refill_policy {
            RefillPolicy::TopUpDeficit => {
                let deficit = self.config.rack_size.saturating_sub(self.rack.len());
                if deficit > 0 {
                    let drawn = RackGenerator::generate(deficit, &mut self.pool, &self.dictionary)?;
                    self.rack.extend(drawn);
                }
                Ok(())
            }
            RefillPolicy::RegenerateRack => {
                // Unplayed tiles go back before the fresh draw so they
                // are not silently lost from the pool
                for letter in self.rack.drain(..) {
                    self.pool.increment(letter);
                }
                self.rack = Self::draw_rack(&self.config, &mut self.pool, &self.dictionary)?;
                Ok(())
            }
        }
    }

    fn draw_rack(
        config: &GameConfig,
        pool: &mut TilePool,
        dictionary: &Dictionary,
    ) -> Result<Vec<char>, GameError> {
        RackGenerator::generate_with_rng(
            config.rack_size,
            pool,
            dictionary,
            config.seed_word_attempts,
            &mut rand::rng(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Opt-in log output while debugging: RUST_LOG=debug cargo test
    fn init_tracing() {
        use tracing_subscriber::EnvFilter;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    /// Session with a fixed rack so placement is deterministic; the pool
    /// is debited for the rack so conservation checks line up.
    fn session_with_rack(rack: &[char], words: &[&str]) -> GameSession {
        init_tracing();
        let config = GameConfig::default();
        let mut pool = TilePool::new();
        for &letter in rack {
            pool.decrement(letter).unwrap();
        }
        GameSession {
            board: Board::new(&config.board_layout),
            config,
            dictionary: Dictionary::from_words(words.iter().copied()),
            pool,
            rack: rack.to_vec(),
            total_score: 0,
        }
    }

    fn place_word(session: &mut GameSession, word: &str) {
        for (slot, ch) in word.chars().enumerate() {
            let rack_index = session
                .rack()
                .iter()
                .position(|&r| r == ch)
                .expect("letter in rack");
            session.place_tile(rack_index, slot, None).unwrap();
        }
    }

    /// Pool plus rack together still hold exactly the fresh distribution.
    fn assert_conserved(session: &GameSession) {
        let fresh = TilePool::new();
        for &letter in &fresh.available_letters() {
            let in_rack = session.rack().iter().filter(|&&r| r == letter).count() as u8;
            assert_eq!(
                session.pool().remaining_of(letter) + in_rack,
                fresh.remaining_of(letter),
                "letter {} not conserved",
                letter
            );
        }
    }

    #[test]
    fn test_new_session_starts_clean() {
        let dict = Dictionary::from_words(["CAT"]);
        let session = GameSession::new(GameConfig::default(), dict).unwrap();
        assert_eq!(session.total_score(), 0);
        assert_eq!(session.rack().len(), 7);
        assert_eq!(session.phase(), SessionPhase::AwaitingPlacement);
        assert_eq!(session.pool().total_remaining(), 93);
        assert_eq!(session.score_display(), "Score: 0");
    }

    #[test]
    fn test_submit_with_empty_board_is_refused() {
        let mut session = session_with_rack(&['C', 'A', 'T', 'D', 'O', 'G', 'E'], &["CAT"]);
        assert_eq!(session.submit(), Err(GameError::EmptySubmission));
        assert_eq!(session.total_score(), 0);
        assert_eq!(session.rack().len(), 7);
    }

    #[test]
    fn test_placing_moves_tile_from_rack_to_board() {
        let mut session = session_with_rack(&['C', 'A', 'T', 'D', 'O', 'G', 'E'], &["CAT"]);
        session.place_tile(0, 0, None).unwrap();
        assert_eq!(session.rack().len(), 6);
        assert_eq!(session.current_word(), "C");
        assert_eq!(session.phase(), SessionPhase::ReadyToSubmit);
    }

    #[test]
    fn test_illegal_placement_keeps_tile_in_rack() {
        let mut session = session_with_rack(&['C', 'A', 'T', 'D', 'O', 'G', 'E'], &["CAT"]);
        assert_eq!(
            session.place_tile(0, 3, None),
            Err(GameError::IllegalPlacement { slot: 3 })
        );
        assert_eq!(session.rack().len(), 7);
        assert!(session.board().is_clear());
    }

    #[test]
    fn test_valid_submission_banks_score_and_tops_up() {
        let mut session = session_with_rack(&['C', 'A', 'T', 'D', 'O', 'G', 'E'], &["CAT", "DOG"]);
        place_word(&mut session, "CAT");

        // C(3) + A(1x2 on the DL slot) + T(1) = 6
        assert_eq!(session.current_word_score(), 6);
        assert_eq!(
            session.score_display(),
            "Current Word Score: 6 (Total: 0)"
        );

        let outcome = session.submit().unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Valid {
                word: "CAT".to_string(),
                score: 6,
                total: 6
            }
        );
        assert_eq!(outcome.message(), "\u{2714} \"CAT\" is valid! +6 points");

        assert_eq!(session.total_score(), 6);
        assert!(session.board().is_clear());
        assert_eq!(session.rack().len(), 7);
        // 7 drawn at start, 3 consumed, 3 drawn to top up
        assert_eq!(session.pool().total_remaining(), 90);
    }

    #[test]
    fn test_valid_submission_with_regenerate_policy() {
        let mut session = session_with_rack(&['C', 'A', 'T', 'D', 'O', 'G', 'E'], &["CAT", "DOG"]);
        session.config.refill_policy = RefillPolicy::RegenerateRack;
        place_word(&mut session, "CAT");

        session.submit().unwrap();
        assert_eq!(session.rack().len(), 7);
        // Unplayed tiles returned, only the 3 played tiles left the game
        assert_eq!(session.pool().total_remaining(), 90);
    }

    #[test]
    fn test_invalid_submission_returns_tiles_and_keeps_score() {
        let mut session = session_with_rack(&['C', 'A', 'T', 'D', 'O', 'G', 'E'], &["DOG"]);
        place_word(&mut session, "CAT");

        let outcome = session.submit().unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Invalid {
                word: "CAT".to_string()
            }
        );
        assert_eq!(
            outcome.message(),
            "\u{2716} \"CAT\" is not valid. Try again."
        );

        assert_eq!(session.total_score(), 0);
        assert!(session.board().is_clear());
        assert_eq!(session.rack().len(), 7);
        assert_conserved(&session);
    }

    #[test]
    fn test_dictionary_lookup_is_case_insensitive() {
        // Mixed-case dictionary source still matches the uppercase tiles
        let mut session = session_with_rack(&['C', 'A', 'T', 'D', 'O', 'G', 'E'], &["cAt"]);
        place_word(&mut session, "CAT");
        assert!(session.submit().unwrap().is_valid());
    }

    #[test]
    fn test_blank_placement_requires_resolution() {
        let mut session = session_with_rack(&[BLANK, 'T', 'D', 'O', 'G', 'E', 'A'], &["AT"]);
        assert_eq!(
            session.place_tile(0, 0, None),
            Err(GameError::BlankResolutionInvalid)
        );
        assert_eq!(
            session.place_tile(0, 0, Some("xy")),
            Err(GameError::BlankResolutionInvalid)
        );
        assert_eq!(session.rack().len(), 7);

        session.place_tile(0, 0, Some("a")).unwrap();
        assert_eq!(session.current_word(), "A");
    }

    #[test]
    fn test_blank_scores_zero_and_returns_as_blank() {
        let mut session = session_with_rack(&[BLANK, 'T', 'D', 'O', 'G', 'E', 'C'], &["DOG"]);
        session.place_tile(0, 0, Some("A")).unwrap();
        let t_index = session.rack().iter().position(|&r| r == 'T').unwrap();
        session.place_tile(t_index, 1, None).unwrap();

        assert_eq!(session.current_word(), "AT");
        // Blank is worth 0, T lands on the DL slot: 0 + 1x2 = 2
        assert_eq!(session.current_word_score(), 2);

        // "AT" is not in this dictionary; the blank must return as a blank
        session.submit().unwrap();
        assert_conserved(&session);
    }

    #[test]
    fn test_new_game_zeroes_score_and_conserves_tiles() {
        let mut session = session_with_rack(&['C', 'A', 'T', 'D', 'O', 'G', 'E'], &["CAT"]);
        place_word(&mut session, "CAT");
        session.submit().unwrap();
        assert!(session.total_score() > 0);

        // Leave a tile on the board to prove new_game sweeps it up too
        session.place_tile(0, 0, None).unwrap();
        session.new_game().unwrap();

        assert_eq!(session.total_score(), 0);
        assert!(session.board().is_clear());
        assert_eq!(session.rack().len(), 7);
        assert_eq!(session.phase(), SessionPhase::AwaitingPlacement);
        // The 3 tiles consumed by the valid word stay consumed
        let fresh = TilePool::new();
        let in_rack = session.rack().len() as u32;
        assert_eq!(
            session.pool().total_remaining() + in_rack,
            fresh.total_remaining() - 3
        );
    }

    #[test]
    fn test_total_score_accumulates_across_rounds() {
        let mut session = session_with_rack(&['C', 'A', 'T', 'A', 'T', 'G', 'E'], &["CAT", "AT"]);
        place_word(&mut session, "CAT");
        session.submit().unwrap();
        let after_first = session.total_score();
        assert_eq!(after_first, 6);

        // The spare A and T survived the top-up, so a second round works
        let a = session.rack().iter().position(|&r| r == 'A').unwrap();
        session.place_tile(a, 0, None).unwrap();
        let t = session.rack().iter().position(|&r| r == 'T').unwrap();
        session.place_tile(t, 1, None).unwrap();

        let outcome = session.submit().unwrap();
        assert!(outcome.is_valid());
        // A(1) + T(1x2 on the DL slot) = 3 on top of the first round
        assert_eq!(session.total_score(), after_first + 3);
    }
}
