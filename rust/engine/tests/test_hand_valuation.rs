use blackjack_engine::cards::{all_ranks, Card, Rank};
use blackjack_engine::errors::GameError;
use blackjack_engine::hand::{Hand, Role};
use blackjack_engine::shoe::Shoe;

fn hand(cards: &[Rank]) -> Hand {
    Hand::from_cards(Role::Player, cards.iter().map(|&r| Card::new(r)).collect())
        .expect("test hand is legal")
}

#[test]
fn non_ace_ranks_have_fixed_values() {
    for r in all_ranks() {
        if r == Rank::Ace {
            continue;
        }
        let card = Card::new(r);
        let expected = match r {
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            other => other.base_value(),
        };
        assert_eq!(card.value(), expected);
        assert!(!card.is_flexible());
    }
}

#[test]
fn lowering_a_non_ace_is_a_no_op() {
    let mut card = Card::new(Rank::King);
    card.lower_ace();
    assert_eq!(card.value(), 10);
}

#[test]
fn ace_lowers_exactly_once_and_never_back() {
    let mut ace = Card::new(Rank::Ace);
    assert_eq!(ace.value(), 11);
    assert!(ace.is_flexible());
    ace.lower_ace();
    assert_eq!(ace.value(), 1);
    assert!(!ace.is_flexible());
    // idempotent: a second lowering changes nothing
    ace.lower_ace();
    assert_eq!(ace.value(), 1);
}

#[test]
fn opening_value_shows_an_ace_high_even_after_lowering() {
    let mut ace = Card::new(Rank::Ace);
    ace.lower_ace();
    assert_eq!(ace.opening_value(), 11);
    assert_eq!(Card::new(Rank::Queen).opening_value(), 10);
}

#[test]
fn unrecognized_rank_symbol_fails_construction() {
    let err = "1".parse::<Rank>().unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidRank {
            symbol: "1".to_string()
        }
    );
    assert!("joker".parse::<Rank>().is_err());
    assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
}

#[test]
fn two_aces_resolve_to_twelve_not_two() {
    let h = hand(&[Rank::Ace, Rank::Ace]);
    assert_eq!(h.value(), 12);
    // exactly one ace was lowered: the earliest dealt
    assert!(!h.cards()[0].is_flexible());
    assert!(h.cards()[1].is_flexible());
}

#[test]
fn ace_plus_king_is_blackjack() {
    let h = hand(&[Rank::Ace, Rank::King]);
    assert_eq!(h.value(), 21);
    assert!(h.is_blackjack());
    assert!(!h.is_bust());
}

#[test]
fn blackjack_and_bust_are_mutually_exclusive() {
    let bust = hand(&[Rank::King, Rank::Queen, Rank::Five]);
    assert_eq!(bust.value(), 25);
    assert!(bust.is_bust());
    assert!(!bust.is_blackjack());

    let twenty = hand(&[Rank::King, Rank::Queen]);
    assert!(!twenty.is_bust());
    assert!(!twenty.is_blackjack());
}

#[test]
fn ace_converts_only_when_needed() {
    // A + 9 = 20, the ace stays high
    let soft = hand(&[Rank::Ace, Rank::Nine]);
    assert_eq!(soft.value(), 20);
    assert!(soft.cards()[0].is_flexible());

    // A + 9 + 5 = 25, the ace drops to 1 for a total of 15
    let adjusted = hand(&[Rank::Ace, Rank::Nine, Rank::Five]);
    assert_eq!(adjusted.value(), 15);
    assert!(!adjusted.cards()[0].is_flexible());
}

#[test]
fn hand_with_fewer_than_two_cards_is_invalid() {
    let err = Hand::from_cards(Role::Player, vec![Card::new(Rank::Five)]).unwrap_err();
    assert_eq!(err, GameError::InvalidHand { cards: 1 });
    let err = Hand::from_cards(Role::Dealer, Vec::new()).unwrap_err();
    assert_eq!(err, GameError::InvalidHand { cards: 0 });
}

#[test]
fn two_low_cards_are_a_legal_hand() {
    // minimum achievable 2-card total; must not be rejected as malformed
    let h = hand(&[Rank::Two, Rank::Two]);
    assert_eq!(h.value(), 4);
}

#[test]
fn value_is_recomputed_after_every_draw() {
    let mut shoe = Shoe::from_cards(vec![
        Card::new(Rank::Ace),
        Card::new(Rank::Five),
        Card::new(Rank::Nine),
    ]);
    let mut h = Hand::deal(Role::Player, &mut shoe).unwrap();
    assert_eq!(h.value(), 16);
    h.draw(&mut shoe).unwrap();
    // A + 5 + 9 = 25 raw, the ace drops: 15
    assert_eq!(h.value(), 15);
    assert_eq!(h.cards().len(), 3);
}

#[test]
fn draw_from_an_empty_shoe_propagates_exhaustion() {
    let mut shoe = Shoe::from_cards(vec![Card::new(Rank::Two), Card::new(Rank::Three)]);
    let mut h = Hand::deal(Role::Player, &mut shoe).unwrap();
    assert!(matches!(
        h.draw(&mut shoe),
        Err(GameError::ShoeExhausted {
            requested: 1,
            remaining: 0
        })
    ));
}
