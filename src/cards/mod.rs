//! Card faces, hand parsing and random draws from a standard deck

pub mod constants;
mod deck;
mod errors;
mod labels;

pub use deck::{Deck, Hand};
pub use errors::CardError;
pub use labels::{label_for_rank, parse_hand, parse_operand};
