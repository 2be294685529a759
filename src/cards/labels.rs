use log::{debug, warn};

use crate::cards::constants::{HAND_SIZE, VALID_LABELS};
use crate::cards::deck::Hand;
use crate::cards::errors::CardError;

/// Converts a face label to its rank.
///
/// # Errors
///
/// Returns `CardError::InvalidLabel` if the trimmed label is not one of
/// `A 2 3 4 5 6 7 8 9 10 J Q K` (case-sensitive).
pub fn parse_operand(raw: &str) -> Result<u8, CardError> {
    let label = raw.trim();
    VALID_LABELS
        .iter()
        .zip(1u8..)
        .find_map(|(&valid, rank)| (valid == label).then_some(rank))
        .ok_or_else(|| {
            warn!("Rejecting card label '{}'", label);
            CardError::InvalidLabel(label.to_string())
        })
}

/// Parses a line of whitespace-separated labels such as `A 10 K 3`.
///
/// # Errors
///
/// Returns an error if the line does not hold exactly four labels or if any
/// label is invalid.
pub fn parse_hand(line: &str) -> Result<Hand, CardError> {
    debug!("Parsing hand: '{}'", line);

    let labels: Vec<&str> = line.split_whitespace().collect();
    let labels: [&str; HAND_SIZE] = labels.as_slice().try_into().map_err(|_| {
        warn!("Expected {} cards, got {}", HAND_SIZE, labels.len());
        CardError::WrongCount {
            expected: HAND_SIZE,
            actual: labels.len(),
        }
    })?;

    let mut ranks = [0u8; HAND_SIZE];
    for (slot, label) in ranks.iter_mut().zip(labels) {
        *slot = parse_operand(label)?;
    }

    debug!("Parsed hand ranks: {:?}", ranks);
    Ok(Hand::new(ranks))
}

/// The face label for a rank in `1..=13`
pub fn label_for_rank(rank: u8) -> Option<&'static str> {
    VALID_LABELS.get(usize::from(rank).checked_sub(1)?).copied()
}
