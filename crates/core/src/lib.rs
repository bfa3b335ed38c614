//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the memory game rules, round state, and countdown.
//! It has **zero dependencies** on terminals, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical boards
//! - **Testable**: Every rule can be driven headlessly with synthetic input
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 board of 8 shuffled pairs, identity lookups and matching
//! - [`game_state`]: flip/match state machine, outcome detection, restart
//! - [`clock`]: round countdown that freezes on win
//! - [`rng`]: seeded ChaCha8 RNG for uniform shuffles
//! - [`snapshot`]: read-only per-frame view for renderers
//!
//! # Game Rules
//!
//! - Cards are revealed two at a time; a matching pair stays face-up
//! - Clicking a face-up or matched card does nothing
//! - The round is won when all 16 cards are matched, lost when the 60s
//!   countdown reaches zero first
//! - Won is checked before Lost on every tick
//! - Once over, only a restart has any effect
//!
//! # Example
//!
//! ```
//! use memory_match_core::GameState;
//! use memory_match_types::{CardIndex, GameAction, Outcome};
//!
//! let mut game = GameState::new(12345);
//!
//! // Find a matching pair and flip it.
//! let first = CardIndex::new(0).unwrap();
//! let second = game.board().partner_of(first);
//! game.apply_action(GameAction::Flip(first));
//! game.apply_action(GameAction::Flip(second));
//! assert!(game.is_matched(first));
//!
//! // Let the countdown run out.
//! game.tick(60_000);
//! assert_eq!(game.outcome(), Outcome::Lost);
//! ```

pub mod board;
pub mod clock;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::RoundClock;
pub use error::{BoardError, Result};
pub use game_state::{FlipOutcome, FlipPhase, GameConfig, GameState};
pub use rng::DealRng;
pub use snapshot::GameSnapshot;
