use std::fmt;

use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::cards::constants::{DECK_SIZE, HAND_SIZE, SUIT_COUNT, VALID_LABELS};
use crate::cards::errors::CardError;
use crate::cards::labels::{label_for_rank, parse_operand};

/// Four cards identified by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    ranks: [u8; HAND_SIZE],
}

impl Hand {
    pub fn new(ranks: [u8; HAND_SIZE]) -> Self {
        Self { ranks }
    }

    pub fn ranks(&self) -> [u8; HAND_SIZE] {
        self.ranks
    }

    /// Ranks as solver operands
    pub fn operands(&self) -> [f64; HAND_SIZE] {
        self.ranks.map(f64::from)
    }

    pub fn labels(&self) -> [&'static str; HAND_SIZE] {
        self.ranks.map(|rank| label_for_rank(rank).unwrap_or("?"))
    }
}

/// Renders the face labels, e.g. `A 10 K 3`
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.labels().join(" "))
    }
}

/// A deck of face labels; suits are irrelevant so only labels are kept
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<&'static str>,
}

impl Deck {
    /// 13 ranks in each of 4 suits
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for _ in 0..SUIT_COUNT {
            cards.extend(VALID_LABELS);
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the remaining cards and removes four of them.
    ///
    /// # Errors
    ///
    /// Returns `CardError::DeckExhausted` when fewer than four cards remain.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Hand, CardError> {
        if self.cards.len() < HAND_SIZE {
            return Err(CardError::DeckExhausted {
                requested: HAND_SIZE,
                remaining: self.cards.len(),
            });
        }

        self.cards.shuffle(rng);
        let drawn = self.cards.split_off(self.cards.len() - HAND_SIZE);
        debug!("Drew {:?}, {} cards left", drawn, self.cards.len());

        let mut ranks = [0u8; HAND_SIZE];
        for (slot, label) in ranks.iter_mut().zip(drawn) {
            *slot = parse_operand(label)?;
        }

        let hand = Hand::new(ranks);
        info!("Drew hand {}", hand);
        Ok(hand)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
