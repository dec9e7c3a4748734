use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::{Hand, Role};
use crate::shoe::Shoe;

/// How a round ended. `Abandoned` is the player quitting mid-round; it is a
/// terminal result distinct from every game outcome.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWins,
    PlayerLoses,
    Draw,
    Abandoned,
}

/// Where the round currently stands. `Resolved` is terminal; it is reachable
/// directly from the opening deal (player blackjack) and from either turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    PlayerTurn,
    DealerTurn,
    Resolved(Outcome),
}

/// The three choices offered to the player on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayerChoice {
    Stand,
    Hit,
    Quit,
}

/// The observable result of one dealer-turn step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DealerStep {
    /// The dealer drew a card; the turn continues.
    Hit,
    /// The round ended on this step.
    Resolved(Outcome),
}

/// One round of blackjack: both hands plus the turn state. The shoe is
/// passed into each transition explicitly; the round holds no other state
/// and is discarded once resolved.
#[derive(Debug)]
pub struct Round {
    player: Hand,
    dealer: Hand,
    phase: Phase,
}

impl Round {
    /// Deal 2 cards to the player, then 2 to the dealer. A player blackjack
    /// off the deal resolves the round at once; the dealer never acts.
    pub fn deal(shoe: &mut Shoe) -> Result<Self, GameError> {
        let player = Hand::deal(Role::Player, shoe)?;
        let dealer = Hand::deal(Role::Dealer, shoe)?;
        let phase = if player.is_blackjack() {
            Phase::Resolved(Outcome::PlayerWins)
        } else {
            Phase::PlayerTurn
        };
        Ok(Self {
            player,
            dealer,
            phase,
        })
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Resolved(o) => Some(o),
            _ => None,
        }
    }

    /// Apply one player decision. Only legal while it is the player's turn.
    ///
    /// Stand hands the round to the dealer; Hit draws exactly one card and
    /// re-evaluates (21 wins, bust loses, anything else re-enters the
    /// player's turn); Quit resolves to `Abandoned`.
    pub fn apply_choice(
        &mut self,
        choice: PlayerChoice,
        shoe: &mut Shoe,
    ) -> Result<Phase, GameError> {
        if self.phase != Phase::PlayerTurn {
            return Err(GameError::NotPlayersTurn);
        }
        match choice {
            PlayerChoice::Stand => {
                self.phase = Phase::DealerTurn;
            }
            PlayerChoice::Hit => {
                self.player.draw(shoe)?;
                if self.player.is_blackjack() {
                    self.phase = Phase::Resolved(Outcome::PlayerWins);
                } else if self.player.is_bust() {
                    self.phase = Phase::Resolved(Outcome::PlayerLoses);
                }
            }
            PlayerChoice::Quit => {
                self.phase = Phase::Resolved(Outcome::Abandoned);
            }
        }
        Ok(self.phase)
    }

    /// Run one step of the dealer's fixed policy. Only legal while it is the
    /// dealer's turn. Checked in order: dealer blackjack loses the round for
    /// the player, dealer bust wins it, a total below 17 forces a hit, and
    /// otherwise the dealer stands and the totals are compared. The
    /// comparison is only reachable once the hit loop has terminated.
    pub fn dealer_step(&mut self, shoe: &mut Shoe) -> Result<DealerStep, GameError> {
        if self.phase != Phase::DealerTurn {
            return Err(GameError::NotDealersTurn);
        }
        if self.dealer.is_blackjack() {
            self.phase = Phase::Resolved(Outcome::PlayerLoses);
            return Ok(DealerStep::Resolved(Outcome::PlayerLoses));
        }
        if self.dealer.is_bust() {
            self.phase = Phase::Resolved(Outcome::PlayerWins);
            return Ok(DealerStep::Resolved(Outcome::PlayerWins));
        }
        if self.dealer.dealer_must_hit() {
            self.dealer.draw(shoe)?;
            return Ok(DealerStep::Hit);
        }
        let outcome = if self.dealer.value() == self.player.value() {
            Outcome::Draw
        } else if self.dealer.value() < self.player.value() {
            Outcome::PlayerWins
        } else {
            Outcome::PlayerLoses
        };
        self.phase = Phase::Resolved(outcome);
        Ok(DealerStep::Resolved(outcome))
    }
}
