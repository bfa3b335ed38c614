use crate::types::{CardIndex, CardView, Face, Outcome, CARD_COUNT, PAIR_COUNT};

/// Everything the renderer needs for one frame.
///
/// Plain `Copy` data: producing it never borrows the game state past the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: [CardView; CARD_COUNT],
    pub faces: [Face; PAIR_COUNT],
    pub time_left_secs: u32,
    pub outcome: Outcome,
    pub matched_pairs: u8,
    pub round_id: u32,
}

impl GameSnapshot {
    pub fn card(&self, idx: CardIndex) -> CardView {
        self.cards[idx.as_usize()]
    }

    /// Face to draw at `idx`, if the card is face-up.
    pub fn visible_face(&self, idx: CardIndex) -> Option<Face> {
        self.card(idx)
            .identity()
            .map(|id| self.faces[id.0 as usize])
    }

    pub fn show_restart(&self) -> bool {
        self.outcome.is_over()
    }
}
