use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    #[error("Invalid card '{0}': valid cards are A, 2-10, J, Q and K")]
    InvalidLabel(String),
    #[error("Expected exactly {expected} cards, got {actual}")]
    WrongCount { expected: usize, actual: usize },
    #[error("Cannot draw {requested} cards from a deck of {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
}
