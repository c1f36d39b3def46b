//! Quiz session logic and state management.
//!
//! - [`GameSession`] - Drives a game: pulls samples, scores predictions, ends the game
//! - [`Session`] - All mutable state of one player's session
//! - [`GameStats`] - Per-game round counter and scores
//! - [`GameConfig`] - Round count and input limits
//!
//! # Game Flow
//!
//! 1. [`GameSession::start_game`] pulls the first sample
//! 2. The player reads the visible facts and calls [`GameSession::submit_prediction`]
//! 3. The round is scored and the hidden facts can be revealed
//! 4. [`GameSession::advance`] pulls the next sample, until the last round is scored
//!
//! # Example
//!
//! ```
//! use scoreline_engine::{GameConfig, GameSession, SourceSeed, SyntheticSource};
//!
//! let source = SyntheticSource::with_seed(SourceSeed::from(7_u128));
//! let mut game = GameSession::new(GameConfig::default(), source);
//!
//! game.start_game()?;
//! while !game.state().is_finished() {
//!     game.submit_prediction(1, 1)?;
//!     if game.state().is_awaiting_next() {
//!         game.advance()?;
//!     }
//! }
//! assert_eq!(game.round_index(), game.max_rounds());
//! # Ok::<(), scoreline_engine::GameError>(())
//! ```

pub use self::{config::*, game_session::*, game_stats::*, session::*};

mod config;
mod game_session;
mod game_stats;
mod session;
