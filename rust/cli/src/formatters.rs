//! Hand and outcome formatters for terminal display.
//!
//! This module provides pure functions for formatting game elements for
//! terminal output. Hands render as an ordered list of rank symbols plus the
//! numeric total, e.g. "[10, J] with a value of 20".

use blackjack_engine::cards::Card;
use blackjack_engine::hand::Hand;
use blackjack_engine::round::Outcome;

/// Format a card list as its ordered rank symbols: "[10, J, A]".
pub fn format_ranks(cards: &[Card]) -> String {
    let symbols: Vec<&str> = cards.iter().map(|c| c.rank().symbol()).collect();
    format!("[{}]", symbols.join(", "))
}

/// Format a full hand with its adjusted total: "[10, J] with a value of 20".
pub fn format_hand(hand: &Hand) -> String {
    format!("{} with a value of {}", format_ranks(hand.cards()), hand.value())
}

/// Format the dealer's up-card before evaluation has run. An Ace is shown
/// high here regardless of any later adjustment.
pub fn format_up_card(card: &Card) -> String {
    format!(
        "[{}] with a value of {}",
        card.rank().symbol(),
        card.opening_value()
    )
}

/// The message announced when a round resolves while the dealer stands.
pub fn format_standoff(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => "The dealer stands! Draw!",
        Outcome::PlayerWins => "The dealer stands! You win!",
        Outcome::PlayerLoses => "The dealer stands! You lose!",
        Outcome::Abandoned => "Goodbye!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::Rank;
    use blackjack_engine::hand::Role;

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r)).collect()
    }

    #[test]
    fn test_format_ranks_preserves_deal_order() {
        let cs = cards(&[Rank::Ten, Rank::Jack, Rank::Ace]);
        assert_eq!(format_ranks(&cs), "[10, J, A]");
    }

    #[test]
    fn test_format_hand_includes_adjusted_value() {
        let hand = Hand::from_cards(Role::Player, cards(&[Rank::Ace, Rank::Ace])).unwrap();
        assert_eq!(format_hand(&hand), "[A, A] with a value of 12");
    }

    #[test]
    fn test_format_up_card_shows_ace_high() {
        let ace = Card::new(Rank::Ace);
        assert_eq!(format_up_card(&ace), "[A] with a value of 11");
        let ten = Card::new(Rank::Ten);
        assert_eq!(format_up_card(&ten), "[10] with a value of 10");
    }

    #[test]
    fn test_standoff_messages() {
        assert_eq!(format_standoff(Outcome::Draw), "The dealer stands! Draw!");
        assert_eq!(
            format_standoff(Outcome::PlayerWins),
            "The dealer stands! You win!"
        );
        assert_eq!(
            format_standoff(Outcome::PlayerLoses),
            "The dealer stands! You lose!"
        );
    }
}
