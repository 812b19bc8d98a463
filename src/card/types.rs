use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    #[error("Card rank must be at least 1")]
    ZeroRank,
}

/// A single card, identified by its position in the unshuffled deck.
///
/// Rank 1 is the top of a fresh deck and rank N the bottom. The type is
/// neither `Clone` nor `Copy`: moving a card from one pile to another moves
/// ownership, so a card can never sit in two piles at once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u32,
}

impl Card {
    pub fn new(rank: u32) -> Result<Self, CardError> {
        if rank == 0 {
            return Err(CardError::ZeroRank);
        }
        Ok(Card { rank })
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)
    }
}
