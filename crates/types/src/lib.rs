//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x4 grid of cards holding 8 pairs:
//!
//! - **Grid**: 4 columns by 4 rows, linear index = `row * 4 + col`
//! - **Pairs**: 8 identities, each appearing exactly twice
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 33 | Fixed update interval (~30 FPS) |
//! | `TIME_LIMIT_SECS` | 60 | Round countdown |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{CardIndex, GameAction, Outcome, CARD_COUNT, GRID_SIZE};
//!
//! let idx = CardIndex::from_row_col(1, 3).unwrap();
//! assert_eq!(idx.get(), 7);
//! assert_eq!(idx.row(), 1);
//! assert_eq!(idx.col(), 3);
//!
//! // Indices outside the grid cannot be constructed.
//! assert!(CardIndex::new(CARD_COUNT as u8).is_none());
//! assert!(CardIndex::from_row_col(0, GRID_SIZE as u8).is_none());
//!
//! assert_eq!(GameAction::Flip(idx), GameAction::Flip(CardIndex::new(7).unwrap()));
//! assert!(Outcome::Lost.is_over());
//! ```

pub mod layout;

pub use layout::{Layout, Point, Rect};

/// Cards per row and per column.
pub const GRID_SIZE: usize = 4;

/// Total cards on the board (16).
pub const CARD_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Distinct identities per round (8).
pub const PAIR_COUNT: usize = CARD_COUNT / 2;

/// Fixed update interval in milliseconds (33ms ≈ 30 FPS).
pub const TICK_MS: u32 = 1000 / TARGET_FPS;

/// Target update rate.
pub const TARGET_FPS: u32 = 30;

/// Round countdown in seconds.
pub const TIME_LIMIT_SECS: u32 = 60;

/// Lowest value of a random face tint channel.
pub const FACE_TINT_MIN: u8 = 50;

/// Highest value of a random face tint channel.
pub const FACE_TINT_MAX: u8 = 200;


/// Position of a card on the board.
///
/// Only values in `[0, CARD_COUNT)` can be constructed, so lookups through a
/// `CardIndex` never go out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardIndex(u8);

impl CardIndex {
    /// Validate a linear index.
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < CARD_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Validate a (row, col) pair. Columns past the last one are rejected,
    /// never wrapped onto the next row.
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if (row as usize) >= GRID_SIZE || (col as usize) >= GRID_SIZE {
            return None;
        }
        Self::new(row * GRID_SIZE as u8 + col)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub const fn row(self) -> u8 {
        self.0 / GRID_SIZE as u8
    }

    pub const fn col(self) -> u8 {
        self.0 % GRID_SIZE as u8
    }

    /// Iterate all board positions in index order.
    pub fn all() -> impl Iterator<Item = CardIndex> {
        (0..CARD_COUNT as u8).map(CardIndex)
    }
}

/// The logical value a card represents. Two cards sharing an identity form a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(pub u8);

/// Visual representation of an identity: a glyph and an RGB tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    pub glyph: char,
    pub tint: (u8, u8, u8),
}

/// Glyphs handed out to identities in order.
///
/// Random tints can land close to each other, so each identity also gets its
/// own symbol.
pub const FACE_GLYPHS: [char; 8] = ['♠', '♥', '♦', '♣', '★', '●', '▲', '■'];

/// Classification of a round.
///
/// `Won` and `Lost` are sticky: once reached, only a restart leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Banner text shown in the header for terminal outcomes.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won => Some("You Win!"),
            Outcome::Lost => Some("Time's Up!"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in_progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// Actions that can be applied to the game state.
///
/// Produced by the input mapper from pointer presses and keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Turn a card face-up
    Flip(CardIndex),
    /// Start a new round (only honored once the round is over)
    Restart,
}

/// What is visible at a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardView {
    /// Face-down
    Hidden,
    /// Face-up, waiting for its pair to be checked
    Flipped(Identity),
    /// Permanently face-up
    Matched(Identity),
}

impl CardView {
    pub fn is_face_up(&self) -> bool {
        !matches!(self, CardView::Hidden)
    }

    pub fn identity(&self) -> Option<Identity> {
        match *self {
            CardView::Hidden => None,
            CardView::Flipped(id) | CardView::Matched(id) => Some(id),
        }
    }
}
