use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;
use crate::shoe::Shoe;

/// Which party a hand belongs to. Player and dealer hands share the same
/// evaluation logic; only the turn policy applied to them differs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Dealer,
}

/// An ordered hand of cards owned by one party. The total is recomputed
/// after every mutation, lowering flexible Aces one at a time (earliest
/// dealt first) only as far as needed to stop exceeding 21.
#[derive(Debug, Clone)]
pub struct Hand {
    role: Role,
    cards: Vec<Card>,
    value: u8,
}

impl Hand {
    /// Deal a fresh 2-card hand from the shoe.
    pub fn deal(role: Role, shoe: &mut Shoe) -> Result<Self, GameError> {
        Self::from_cards(role, shoe.deal(2)?)
    }

    /// Build a hand from explicit cards. Fails on any hand too short to be
    /// reachable in play.
    pub fn from_cards(role: Role, cards: Vec<Card>) -> Result<Self, GameError> {
        let mut hand = Self {
            role,
            cards,
            value: 0,
        };
        hand.resolve_value()?;
        Ok(hand)
    }

    /// Draw exactly one card from the shoe and re-evaluate.
    pub fn draw(&mut self, shoe: &mut Shoe) -> Result<(), GameError> {
        self.cards.extend(shoe.deal(1)?);
        self.resolve_value()
    }

    /// Sum the card values; while the total exceeds 21 and a flexible Ace
    /// remains, lower the first such Ace in hand order and re-sum. Stops as
    /// soon as the total fits, so two Aces resolve to 12, not 2.
    fn resolve_value(&mut self) -> Result<(), GameError> {
        if self.cards.len() < 2 {
            return Err(GameError::InvalidHand {
                cards: self.cards.len(),
            });
        }
        loop {
            let total: u8 = self.cards.iter().map(Card::value).sum();
            if total <= 21 {
                self.value = total;
                return Ok(());
            }
            match self.cards.iter_mut().find(|c| c.is_flexible()) {
                Some(ace) => ace.lower_ace(),
                None => {
                    self.value = total;
                    return Ok(());
                }
            }
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Ordered rank symbols, for display and logging.
    pub fn ranks(&self) -> Vec<Rank> {
        self.cards.iter().map(Card::rank).collect()
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_blackjack(&self) -> bool {
        self.value == 21
    }

    pub fn is_bust(&self) -> bool {
        self.value > 21
    }

    /// The fixed dealer policy: hit while the total is below 17. Not the
    /// casino notion of a soft hand; purely the dealer's hit/stand threshold.
    pub fn dealer_must_hit(&self) -> bool {
        self.value < 17
    }
}
