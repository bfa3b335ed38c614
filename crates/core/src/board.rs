//! Board module - card identities and their positions
//!
//! A board is 16 identities laid out row-major (index = row * 4 + col) plus
//! the face each identity is drawn with this round. Once dealt it never
//! changes; a restart deals a new board.

use crate::error::{BoardError, Result};
use crate::rng::DealRng;
use crate::types::{
    CardIndex, Face, Identity, CARD_COUNT, FACE_GLYPHS, FACE_TINT_MAX, FACE_TINT_MIN, PAIR_COUNT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: [Identity; CARD_COUNT],
    faces: [Face; PAIR_COUNT],
}

impl Board {
    /// Deal a board for `pair_count` pairs.
    ///
    /// Fails when the pairs do not exactly fill the grid; the fixed 4x4
    /// board only accepts 8.
    pub fn new_shuffled(pair_count: usize, rng: &mut DealRng) -> Result<Self> {
        if pair_count * 2 != CARD_COUNT {
            return Err(BoardError::PairCountMismatch {
                pair_count,
                cells: CARD_COUNT,
            });
        }
        Ok(Self::deal(rng))
    }

    /// Deal a board for the fixed `PAIR_COUNT` pairs.
    pub fn deal(rng: &mut DealRng) -> Self {
        let mut cards = [Identity(0); CARD_COUNT];
        for (i, slot) in cards.iter_mut().enumerate() {
            *slot = Identity((i % PAIR_COUNT) as u8);
        }
        rng.shuffle(&mut cards);

        let faces = std::array::from_fn(|i| Face {
            glyph: FACE_GLYPHS[i],
            tint: rng.tint(),
        });

        Self { cards, faces }
    }

    /// Build a board from a fixed layout.
    ///
    /// Every identity in `0..PAIR_COUNT` must appear exactly twice. Faces get
    /// evenly spread tints instead of random ones.
    pub fn from_identities(cards: [Identity; CARD_COUNT]) -> Result<Self> {
        let mut counts = [0u8; PAIR_COUNT];
        for id in cards {
            match counts.get_mut(id.0 as usize) {
                Some(c) => *c += 1,
                None => return Err(BoardError::UnpairedIdentity(id)),
            }
        }
        if let Some(i) = counts.iter().position(|&c| c != 2) {
            return Err(BoardError::UnpairedIdentity(Identity(i as u8)));
        }

        let step = (FACE_TINT_MAX - FACE_TINT_MIN) / PAIR_COUNT as u8;
        let faces = std::array::from_fn(|i| {
            let v = FACE_TINT_MIN + step * i as u8;
            Face {
                glyph: FACE_GLYPHS[i],
                tint: (v, FACE_TINT_MAX - step * i as u8, FACE_TINT_MIN + step),
            }
        });

        Ok(Self { cards, faces })
    }

    pub fn identity_at(&self, idx: CardIndex) -> Identity {
        self.cards[idx.as_usize()]
    }

    /// True iff the two cards share an identity. The indices must differ.
    pub fn is_match(&self, a: CardIndex, b: CardIndex) -> bool {
        debug_assert_ne!(a, b, "a card cannot match itself");
        self.identity_at(a) == self.identity_at(b)
    }

    pub fn face_of(&self, id: Identity) -> Face {
        self.faces[id.0 as usize]
    }

    pub fn faces(&self) -> &[Face; PAIR_COUNT] {
        &self.faces
    }

    pub fn identities(&self) -> &[Identity; CARD_COUNT] {
        &self.cards
    }

    /// The other card holding the same identity.
    pub fn partner_of(&self, idx: CardIndex) -> CardIndex {
        let id = self.identity_at(idx);
        CardIndex::all()
            .find(|&other| other != idx && self.identity_at(other) == id)
            .unwrap_or(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: u8) -> CardIndex {
        CardIndex::new(i).unwrap()
    }

    fn sequential() -> [Identity; CARD_COUNT] {
        std::array::from_fn(|i| Identity((i / 2) as u8))
    }

    #[test]
    fn test_deal_has_every_identity_twice() {
        let mut rng = DealRng::new(3);
        let board = Board::deal(&mut rng);
        let mut counts = [0; PAIR_COUNT];
        for id in board.identities() {
            counts[id.0 as usize] += 1;
        }
        assert_eq!(counts, [2; PAIR_COUNT]);
    }

    #[test]
    fn test_new_shuffled_rejects_wrong_pair_count() {
        let mut rng = DealRng::new(3);
        for bad in [0, 1, 7, 9, 16] {
            assert_eq!(
                Board::new_shuffled(bad, &mut rng),
                Err(BoardError::PairCountMismatch {
                    pair_count: bad,
                    cells: CARD_COUNT
                })
            );
        }
        assert!(Board::new_shuffled(PAIR_COUNT, &mut rng).is_ok());
    }

    #[test]
    fn test_same_seed_same_deal() {
        let a = Board::deal(&mut DealRng::new(11));
        let b = Board::deal(&mut DealRng::new(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_faces_have_distinct_glyphs() {
        let board = Board::deal(&mut DealRng::new(5));
        for (i, a) in board.faces().iter().enumerate() {
            for b in &board.faces()[i + 1..] {
                assert_ne!(a.glyph, b.glyph);
            }
        }
    }

    #[test]
    fn test_is_match() {
        let board = Board::from_identities(sequential()).unwrap();
        assert!(board.is_match(idx(0), idx(1)));
        assert!(board.is_match(idx(14), idx(15)));
        assert!(!board.is_match(idx(1), idx(2)));
    }

    #[test]
    fn test_partner_of() {
        let board = Board::deal(&mut DealRng::new(8));
        for i in CardIndex::all() {
            let p = board.partner_of(i);
            assert_ne!(p, i);
            assert!(board.is_match(i, p));
            assert_eq!(board.partner_of(p), i);
        }
    }

    #[test]
    fn test_from_identities_rejects_unpaired() {
        let mut cards = sequential();
        cards[0] = Identity(1);
        assert_eq!(
            Board::from_identities(cards),
            Err(BoardError::UnpairedIdentity(Identity(0)))
        );

        let mut cards = sequential();
        cards[15] = Identity(PAIR_COUNT as u8);
        assert_eq!(
            Board::from_identities(cards),
            Err(BoardError::UnpairedIdentity(Identity(PAIR_COUNT as u8)))
        );
    }

    #[test]
    fn test_fixed_faces_stay_in_tint_range() {
        let board = Board::from_identities(sequential()).unwrap();
        for face in board.faces() {
            for c in [face.tint.0, face.tint.1, face.tint.2] {
                assert!((FACE_TINT_MIN..=FACE_TINT_MAX).contains(&c));
            }
        }
    }
}
