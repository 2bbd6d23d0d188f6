//! Game session state machine
//!
//! A session moves from Init to AwaitingGuess when it draws its target, then
//! evaluates one input line at a time until it reaches Won, LostExhausted or
//! Aborted. Rejected guesses never consume a turn.

use super::input::InputSource;
use super::render::{IntroInfo, Renderer};
use crate::core::{Feedback, Verdict, Word, classify, validate};
use crate::wordlists::WordPool;
use rand::Rng;
use std::fmt;
use std::io;
use std::time::{Duration, Instant};

/// Default command that ends a game early
pub const DEFAULT_STOP_TOKEN: &str = "!";

/// Per-session settings not carried by the word pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub stop_token: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stop_token: DEFAULT_STOP_TOKEN.to_string(),
        }
    }
}

/// How a session ended, or that it has not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    LostExhausted,
    Aborted,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Mutable state of one game
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    guesses_made: usize,
    max_guesses: usize,
    last_accepted: Option<Word>,
    outcome: Outcome,
}

impl GameState {
    #[must_use]
    pub const fn new(target: Word, max_guesses: usize) -> Self {
        Self {
            target,
            guesses_made: 0,
            max_guesses,
            last_accepted: None,
            outcome: Outcome::InProgress,
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn guesses_made(&self) -> usize {
        self.guesses_made
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn last_accepted(&self) -> Option<&Word> {
        self.last_accepted.as_ref()
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }
}

/// Result of evaluating one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResult {
    Accepted { guess: Word, feedback: Feedback },
    Rejected(Verdict),
    Aborted,
    /// The session had already ended; nothing changed
    Finished,
}

/// Terminal report of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub target: Word,
    pub guesses_made: usize,
    pub max_guesses: usize,
    pub history: Vec<(Word, Feedback)>,
    pub elapsed: Duration,
}

/// Error type for a session that cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    TargetLength { expected: usize, actual: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetLength { expected, actual } => {
                write!(f, "Target must have {expected} letters, got {actual}")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// One game against a target drawn from a [`WordPool`]
pub struct GameSession<'a> {
    pool: &'a WordPool,
    config: GameConfig,
    state: GameState,
    history: Vec<(Word, Feedback)>,
}

impl<'a> GameSession<'a> {
    /// Start a session with a target drawn uniformly from the pool's candidates
    pub fn new<R: Rng>(pool: &'a WordPool, config: GameConfig, rng: &mut R) -> Self {
        let target = pool.pick_target(rng).clone();
        log::debug!("target drawn from {} candidates", pool.candidate_count());
        Self::start(pool, config, target)
    }

    /// Start a session with a fixed target
    ///
    /// # Errors
    ///
    /// Returns `SessionError::TargetLength` if the target does not have the
    /// pool's word length.
    pub fn with_target(
        pool: &'a WordPool,
        config: GameConfig,
        target: Word,
    ) -> Result<Self, SessionError> {
        if target.len() != pool.length() {
            return Err(SessionError::TargetLength {
                expected: pool.length(),
                actual: target.len(),
            });
        }
        Ok(Self::start(pool, config, target))
    }

    fn start(pool: &'a WordPool, config: GameConfig, target: Word) -> Self {
        Self {
            pool,
            config,
            state: GameState::new(target, pool.max_guesses()),
            history: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.outcome.is_finished()
    }

    /// End the game now, as if the stop token had been entered
    pub fn abort(&mut self) {
        if !self.is_finished() {
            self.state.outcome = Outcome::Aborted;
            log::info!(
                "game aborted after {} of {} guesses",
                self.state.guesses_made,
                self.state.max_guesses
            );
        }
    }

    /// Evaluate one raw input line
    pub fn submit(&mut self, raw: &str) -> TurnResult {
        if self.is_finished() {
            return TurnResult::Finished;
        }

        if raw.trim() == self.config.stop_token {
            self.abort();
            return TurnResult::Aborted;
        }

        let guess: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let verdict = validate(
            &guess,
            self.state.last_accepted.as_ref(),
            &self.state.target,
            self.pool,
            self.pool.length(),
        );
        log::debug!("guess {guess:?}: {verdict:?}");

        if !verdict.is_accepted() {
            return TurnResult::Rejected(verdict);
        }
        let Ok(guess) = Word::new(guess) else {
            return TurnResult::Rejected(Verdict::RejectedNonAlphabetic);
        };

        let feedback = classify(&guess, &self.state.target);
        self.state.guesses_made += 1;
        self.state.last_accepted = Some(guess.clone());
        self.history.push((guess.clone(), feedback.clone()));

        if guess == self.state.target {
            self.state.outcome = Outcome::Won;
            log::info!("game won in {} guesses", self.state.guesses_made);
        } else if self.state.guesses_made == self.state.max_guesses {
            self.state.outcome = Outcome::LostExhausted;
            log::info!("game lost after {} guesses", self.state.guesses_made);
        }

        TurnResult::Accepted { guess, feedback }
    }

    /// Run the game to completion
    ///
    /// End of input ends the game like the stop token. The summary carries
    /// the wall-clock time spent in this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails to write. A failed read ends
    /// the game instead of erroring.
    pub fn play<I, D>(&mut self, input: &mut I, renderer: &mut D) -> io::Result<GameSummary>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
    {
        let started = Instant::now();
        let length = self.pool.length();

        renderer.intro(&IntroInfo {
            length,
            max_guesses: self.state.max_guesses,
            stop_token: &self.config.stop_token,
        })?;
        renderer.empty_grid(length)?;

        while !self.is_finished() {
            let line = match input.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => {
                    log::debug!("input closed");
                    self.abort();
                    break;
                }
                Err(e) => {
                    log::warn!("failed to read guess: {e}");
                    self.abort();
                    break;
                }
            };

            match self.submit(&line) {
                TurnResult::Accepted { guess, feedback } => renderer.turn(&guess, &feedback)?,
                TurnResult::Rejected(verdict) => renderer.rejected(verdict, length)?,
                TurnResult::Aborted | TurnResult::Finished => {}
            }
        }

        let summary = self.summary(started.elapsed());
        renderer.finished(&summary)?;
        Ok(summary)
    }

    /// Snapshot of the session for reporting
    #[must_use]
    pub fn summary(&self, elapsed: Duration) -> GameSummary {
        GameSummary {
            outcome: self.state.outcome,
            target: self.state.target.clone(),
            guesses_made: self.state.guesses_made,
            max_guesses: self.state.max_guesses,
            history: self.history.clone(),
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterClass;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const FRUIT: &[&str] = &["apple", "grape", "mango", "lemon", "peach"];

    fn pool(max_guesses: usize) -> WordPool {
        WordPool::new(FRUIT, ["ample", "angle", "eagle"], 5, max_guesses).unwrap()
    }

    fn session<'a>(pool: &'a WordPool, target: &str) -> GameSession<'a> {
        let target = Word::new(target).unwrap();
        GameSession::with_target(pool, GameConfig::default(), target).unwrap()
    }

    #[test]
    fn new_session_starts_in_progress() {
        let pool = pool(6);
        let game = GameSession::new(&pool, GameConfig::default(), &mut StdRng::seed_from_u64(3));

        assert_eq!(game.state().outcome(), Outcome::InProgress);
        assert_eq!(game.state().guesses_made(), 0);
        assert_eq!(game.state().max_guesses(), 6);
        assert!(game.state().last_accepted().is_none());
        assert!(pool.candidates().contains(game.state().target()));
    }

    #[test]
    fn fixed_target_must_match_pool_length() {
        let pool = pool(6);
        let kiwi = Word::new("kiwi").unwrap();

        let Err(err) = GameSession::with_target(&pool, GameConfig::default(), kiwi) else {
            panic!("expected a four-letter target to be refused");
        };
        assert_eq!(
            err,
            SessionError::TargetLength {
                expected: 5,
                actual: 4,
            }
        );
        assert_eq!(err.to_string(), "Target must have 5 letters, got 4");
    }

    #[test]
    fn correct_first_guess_wins() {
        let pool = pool(6);
        let mut game = session(&pool, "apple");

        let TurnResult::Accepted { feedback, .. } = game.submit("APPLE") else {
            panic!("expected APPLE to be accepted");
        };
        assert!(feedback.is_solved());
        assert_eq!(game.state().outcome(), Outcome::Won);
        assert_eq!(game.state().guesses_made(), 1);
    }

    #[test]
    fn exhausting_guesses_loses() {
        let pool = pool(2);
        let mut game = session(&pool, "apple");

        assert!(matches!(game.submit("grape"), TurnResult::Accepted { .. }));
        assert_eq!(game.state().outcome(), Outcome::InProgress);

        // AMPLE keeps the locked E and reuses the misplaced A and P
        assert!(matches!(game.submit("ample"), TurnResult::Accepted { .. }));
        assert_eq!(game.state().outcome(), Outcome::LostExhausted);
        assert_eq!(game.state().guesses_made(), 2);
    }

    #[test]
    fn stop_token_aborts_without_consuming_guess() {
        let pool = pool(6);
        let mut game = session(&pool, "apple");

        game.submit("grape");
        assert_eq!(game.submit("  !  "), TurnResult::Aborted);
        assert_eq!(game.state().outcome(), Outcome::Aborted);
        assert_eq!(game.state().guesses_made(), 1);
    }

    #[test]
    fn custom_stop_token() {
        let pool = pool(6);
        let config = GameConfig {
            stop_token: "quit".to_string(),
        };
        let target = Word::new("apple").unwrap();
        let mut game = GameSession::with_target(&pool, config, target).unwrap();

        assert_eq!(
            game.submit("!"),
            TurnResult::Rejected(Verdict::RejectedNonAlphabetic)
        );
        assert_eq!(game.submit("quit"), TurnResult::Aborted);
    }

    #[test]
    fn rejections_do_not_consume_guesses() {
        let pool = pool(6);
        let mut game = session(&pool, "apple");

        assert_eq!(
            game.submit("app1e"),
            TurnResult::Rejected(Verdict::RejectedNonAlphabetic)
        );
        assert_eq!(
            game.submit("apples"),
            TurnResult::Rejected(Verdict::RejectedWrongLength)
        );
        assert_eq!(
            game.submit("zzzzz"),
            TurnResult::Rejected(Verdict::RejectedNotInDictionary)
        );
        assert_eq!(game.state().guesses_made(), 0);
        assert_eq!(game.state().outcome(), Outcome::InProgress);
    }

    #[test]
    fn carry_forward_uses_last_accepted_guess() {
        let pool = pool(6);
        let mut game = session(&pool, "apple");

        game.submit("grape");
        assert_eq!(game.state().last_accepted().map(Word::text), Some("grape"));
        assert_eq!(
            game.submit("grape"),
            TurnResult::Rejected(Verdict::RejectedRepeatsPrevious)
        );
        // MANGO changes the locked E
        assert_eq!(
            game.submit("mango"),
            TurnResult::Rejected(Verdict::RejectedChangedCorrectLetter)
        );
        // EAGLE keeps E but drops P
        assert_eq!(
            game.submit("eagle"),
            TurnResult::Rejected(Verdict::RejectedDroppedMisplacedLetter)
        );
        assert_eq!(game.state().guesses_made(), 1);
    }

    #[test]
    fn internal_whitespace_is_stripped() {
        let pool = pool(6);
        let mut game = session(&pool, "apple");

        let result = game.submit(" ap p\tle ");
        assert!(matches!(result, TurnResult::Accepted { .. }));
        assert_eq!(game.state().outcome(), Outcome::Won);
    }

    #[test]
    fn feedback_is_reported_for_accepted_guess() {
        let pool = pool(6);
        let mut game = session(&pool, "apple");

        let TurnResult::Accepted { guess, feedback } = game.submit("grape") else {
            panic!("expected GRAPE to be accepted");
        };
        assert_eq!(guess.text(), "grape");
        assert_eq!(
            feedback.classes(),
            &[
                LetterClass::Absent,
                LetterClass::Absent,
                LetterClass::Misplaced,
                LetterClass::Misplaced,
                LetterClass::Correct
            ]
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn finished_session_ignores_input() {
        let pool = pool(6);
        let mut game = session(&pool, "apple");

        game.submit("apple");
        assert_eq!(game.submit("grape"), TurnResult::Finished);
        assert_eq!(game.submit("!"), TurnResult::Finished);
        assert_eq!(game.state().outcome(), Outcome::Won);
        assert_eq!(game.state().guesses_made(), 1);
    }

    #[test]
    fn abort_after_finish_keeps_outcome() {
        let pool = pool(6);
        let mut game = session(&pool, "apple");

        game.submit("apple");
        game.abort();
        assert_eq!(game.state().outcome(), Outcome::Won);
    }

    #[test]
    fn summary_reflects_state() {
        let pool = pool(6);
        let mut game = session(&pool, "apple");
        game.submit("grape");
        game.abort();

        let summary = game.summary(Duration::from_secs(3));
        assert_eq!(summary.outcome, Outcome::Aborted);
        assert_eq!(summary.target.text(), "apple");
        assert_eq!(summary.guesses_made, 1);
        assert_eq!(summary.history.len(), 1);
        assert_eq!(summary.elapsed, Duration::from_secs(3));
    }
}
