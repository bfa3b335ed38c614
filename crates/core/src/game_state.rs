//! Game state module - manages the complete round state
//!
//! This module ties together the board, the flip/match state machine, and the
//! round clock. Input is applied through [`GameState::apply_action`]; time is
//! applied through [`GameState::tick`], which also evaluates the round outcome.
//!
//! # Flip phases
//!
//! ```text
//! Idle --flip--> OneFlipped --flip--> Resolving --match check--> Idle
//! ```
//!
//! With the default reveal delay of 0 the match check runs inside the second
//! `flip` call, so `Resolving` is never observable between calls. With a
//! positive delay the pair stays face-up until `tick` has consumed the delay.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::clock::RoundClock;
use crate::rng::DealRng;
use crate::snapshot::GameSnapshot;
use crate::types::{CardIndex, CardView, GameAction, Outcome, CARD_COUNT, TIME_LIMIT_SECS};

/// Per-round tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Countdown length in seconds.
    pub time_limit_secs: u32,
    /// How long a second flipped card stays visible before the pair resolves.
    /// 0 resolves in the same call that flips it.
    pub reveal_delay_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: TIME_LIMIT_SECS,
            reveal_delay_ms: 0,
        }
    }
}

/// Where the flip/match state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    Idle,
    OneFlipped,
    Resolving,
}

/// Result of a single flip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Nothing changed (card already up, pair pending, or round over)
    Ignored,
    /// First card of a pair turned up
    Revealed,
    /// Second card turned up; resolution waits for the reveal delay
    Pending,
    /// Pair resolved as a match
    Matched,
    /// Pair resolved as a mismatch and turned back down
    Mismatched,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: DealRng,
    board: Board,
    flipped: ArrayVec<CardIndex, 2>,
    /// Bit `i` set when card `i` is matched.
    matched: u16,
    clock: RoundClock,
    outcome: Outcome,
    /// Remaining reveal delay while `Resolving`.
    resolve_timer_ms: u32,
    /// Monotonic round id (increments on restart).
    round_id: u32,
}

impl GameState {
    /// Create a new round with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let mut rng = DealRng::new(seed);
        let board = Board::deal(&mut rng);
        Self::from_parts(rng, board, config)
    }

    /// Start from a known board. Later restarts deal from `seed`.
    pub fn with_board(board: Board, seed: u64, config: GameConfig) -> Self {
        Self::from_parts(DealRng::new(seed), board, config)
    }

    fn from_parts(rng: DealRng, board: Board, config: GameConfig) -> Self {
        info!(
            "round 0 dealt (seed {}, limit {}s, reveal delay {}ms)",
            rng.seed(),
            config.time_limit_secs,
            config.reveal_delay_ms
        );
        Self {
            config,
            rng,
            board,
            flipped: ArrayVec::new(),
            matched: 0,
            clock: RoundClock::new(config.time_limit_secs),
            outcome: Outcome::InProgress,
            resolve_timer_ms: 0,
            round_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    pub fn time_left_secs(&self) -> u32 {
        self.clock.time_left_secs()
    }

    pub fn flipped(&self) -> &[CardIndex] {
        &self.flipped
    }

    pub fn is_flipped(&self, idx: CardIndex) -> bool {
        self.flipped.contains(&idx)
    }

    pub fn is_matched(&self, idx: CardIndex) -> bool {
        self.matched & (1 << idx.get()) != 0
    }

    pub fn matched_count(&self) -> usize {
        self.matched.count_ones() as usize
    }

    /// Matched indices in ascending order.
    pub fn matched(&self) -> impl Iterator<Item = CardIndex> + '_ {
        CardIndex::all().filter(|&i| self.is_matched(i))
    }

    pub fn phase(&self) -> FlipPhase {
        match self.flipped.len() {
            0 => FlipPhase::Idle,
            1 => FlipPhase::OneFlipped,
            _ => FlipPhase::Resolving,
        }
    }

    /// Apply an input action.
    ///
    /// Returns `true` when the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flip(idx) => self.flip(idx) != FlipOutcome::Ignored,
            GameAction::Restart => {
                if !self.outcome.is_over() {
                    return false;
                }
                self.restart();
                true
            }
        }
    }

    /// Turn a card face-up, resolving the pair when it is the second one.
    pub fn flip(&mut self, idx: CardIndex) -> FlipOutcome {
        if self.outcome.is_over()
            || self.flipped.is_full()
            || self.is_flipped(idx)
            || self.is_matched(idx)
        {
            return FlipOutcome::Ignored;
        }

        self.flipped.push(idx);
        debug!("round {}: flipped card {}", self.round_id, idx.get());

        if self.phase() != FlipPhase::Resolving {
            return FlipOutcome::Revealed;
        }
        if self.config.reveal_delay_ms > 0 {
            self.resolve_timer_ms = self.config.reveal_delay_ms;
            return FlipOutcome::Pending;
        }
        self.resolve_pair()
    }

    fn resolve_pair(&mut self) -> FlipOutcome {
        debug_assert_eq!(self.flipped.len(), 2);
        let (a, b) = (self.flipped[0], self.flipped[1]);
        let matched = self.board.is_match(a, b);
        if matched {
            self.matched |= (1 << a.get()) | (1 << b.get());
        }
        self.flipped.clear();
        self.resolve_timer_ms = 0;

        debug!(
            "round {}: cards {} and {} {} ({} of {} matched)",
            self.round_id,
            a.get(),
            b.get(),
            if matched { "match" } else { "differ" },
            self.matched_count(),
            CARD_COUNT
        );

        if matched {
            FlipOutcome::Matched
        } else {
            FlipOutcome::Mismatched
        }
    }

    /// Advance the round by `dt_ms` of wall-clock time.
    ///
    /// Order: clock, pending pair resolution, then Won before Lost so that a
    /// final match on the expiry tick still wins. A pair still waiting out
    /// its reveal delay when time runs out is resolved at once, so a match
    /// flipped before expiry counts.
    pub fn tick(&mut self, dt_ms: u32) {
        if self.outcome.is_over() {
            return;
        }

        self.clock.advance(dt_ms);

        if self.phase() == FlipPhase::Resolving {
            self.resolve_timer_ms = self.resolve_timer_ms.saturating_sub(dt_ms);
            if self.resolve_timer_ms == 0 || self.clock.is_expired() {
                self.resolve_pair();
            }
        }

        self.evaluate_outcome();
    }

    fn evaluate_outcome(&mut self) {
        if self.outcome.is_over() {
            return;
        }

        if self.matched_count() == CARD_COUNT {
            self.outcome = Outcome::Won;
            self.clock.freeze();
            info!(
                "round {} won with {}s left",
                self.round_id,
                self.clock.time_left_secs()
            );
        } else if self.clock.is_expired() {
            self.outcome = Outcome::Lost;
            self.clock.freeze();
            info!(
                "round {} lost with {} of {} cards matched",
                self.round_id,
                self.matched_count(),
                CARD_COUNT
            );
        }
    }

    /// Deal a fresh board and reset every piece of round state.
    pub fn restart(&mut self) {
        self.board = Board::deal(&mut self.rng);
        self.flipped.clear();
        self.matched = 0;
        self.clock.reset();
        self.outcome = Outcome::InProgress;
        self.resolve_timer_ms = 0;
        self.round_id = self.round_id.wrapping_add(1);
        info!("round {} dealt", self.round_id);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut cards = [CardView::Hidden; CARD_COUNT];
        for idx in CardIndex::all() {
            let id = self.board.identity_at(idx);
            if self.is_matched(idx) {
                cards[idx.as_usize()] = CardView::Matched(id);
            } else if self.is_flipped(idx) {
                cards[idx.as_usize()] = CardView::Flipped(id);
            }
        }

        GameSnapshot {
            cards,
            faces: *self.board.faces(),
            time_left_secs: self.clock.time_left_secs(),
            outcome: self.outcome,
            matched_pairs: (self.matched_count() / 2) as u8,
            round_id: self.round_id,
        }
    }
}
