use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Unrecognized card rank: {symbol}")]
    InvalidRank { symbol: String },
    #[error("Shoe needs a positive pack count")]
    EmptyShoe,
    #[error("Shoe exhausted: requested {requested} cards, {remaining} remain")]
    ShoeExhausted { requested: usize, remaining: usize },
    #[error("Invalid hand: {cards} cards held, at least 2 required")]
    InvalidHand { cards: usize },
    #[error("It's not the player's turn")]
    NotPlayersTurn,
    #[error("It's not the dealer's turn")]
    NotDealersTurn,
}
