use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{pack, Card};
use crate::errors::GameError;

/// A dealing shoe built from one or more standard packs, permuted uniformly
/// exactly once at construction. Cards leave through [`Shoe::deal`] and never
/// come back; the shoe is not reshuffled or replenished during a session.
#[derive(Debug, PartialEq)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
}

impl Shoe {
    /// Build and shuffle `packs` packs with a seeded RNG. Same seed, same
    /// permutation.
    pub fn new(packs: u32, seed: u64) -> Result<Self, GameError> {
        if packs == 0 {
            return Err(GameError::EmptyShoe);
        }
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut cards: Vec<Card> = (0..packs).flat_map(|_| pack()).collect();
        cards.shuffle(&mut rng);
        Ok(Self { cards, position: 0 })
    }

    /// A shoe that deals the given cards front to back, no shuffle. Used by
    /// tests and tooling that need a known deal order.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    /// Remove and return the next `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::ShoeExhausted {
                requested: n,
                remaining,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
