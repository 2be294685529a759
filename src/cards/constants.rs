/// Face labels accepted as input, in rank order (A = 1 ... K = 13)
pub const VALID_LABELS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

pub const SUIT_COUNT: usize = 4;
pub const DECK_SIZE: usize = VALID_LABELS.len() * SUIT_COUNT;
pub const HAND_SIZE: usize = 4;
