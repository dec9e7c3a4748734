use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Suits carry no information in blackjack scoring and are not modeled; a
/// card is fully identified by its rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (counts 10)
    Jack,
    /// Queen (counts 10)
    Queen,
    /// King (counts 10)
    King,
    /// Ace (counts 11, lowered to 1 on demand)
    Ace,
}

impl Rank {
    /// The value a freshly dealt card of this rank carries: face cards count
    /// 10, numeric ranks their number, an Ace starts high at 11.
    pub fn base_value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(GameError::InvalidRank {
                symbol: s.to_string(),
            }),
        }
    }
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// Represents a single playing card: an immutable rank plus the value it
/// currently counts for. An Ace starts flexible at 11 and may be lowered to 1
/// exactly once during bust avoidance; every other rank keeps its initial
/// value for the card's whole life.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    value: u8,
    flexible: bool,
}

impl Card {
    pub fn new(rank: Rank) -> Self {
        Self {
            rank,
            value: rank.base_value(),
            flexible: rank == Rank::Ace,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The value this card currently counts for in hand totals.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// True while this card is an Ace still counting 11.
    pub fn is_flexible(&self) -> bool {
        self.flexible
    }

    /// Revalue a flexible Ace from 11 to 1. No-op on any other card, and on
    /// an Ace that was already lowered; the transition happens at most once
    /// and never reverses.
    pub fn lower_ace(&mut self) {
        if self.flexible {
            self.value = 1;
            self.flexible = false;
        }
    }

    /// The value to show for the dealer's up-card before any hand evaluation
    /// has run: an Ace is always shown as 11 here, even if it was lowered.
    pub fn opening_value(&self) -> u8 {
        if self.rank == Rank::Ace {
            11
        } else {
            self.value
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rank.fmt(f)
    }
}

/// One standard 52-card pack: four copies of each of the 13 ranks.
pub fn pack() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for _ in 0..4 {
            v.push(Card::new(r));
        }
    }
    v
}
