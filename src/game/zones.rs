use crate::card::{Card, CardError};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Operation requires a non-empty deck")]
    Empty,
    #[error("Could not allocate storage for {requested} cards")]
    AllocationFailed { requested: usize },
    #[error("Invalid card: {0}")]
    InvalidCard(#[from] CardError),
}

/// Arena slot. `next` links toward the bottom of the deck while the slot is
/// live, and chains the free list once it has been vacated.
#[derive(Debug)]
struct Node {
    card: Option<Card>,
    next: Option<usize>,
}

/// Deck - singly linked pile of cards, top to bottom
///
/// Nodes live in a per-deck arena so that taking from the top, adding on top
/// and adding at the bottom are all O(1). `bottom` is kept in step with `top`
/// by every mutation: both are `None` exactly when the deck is empty, and they
/// name the same slot exactly when one card remains.
#[derive(Debug, Default)]
pub struct Deck {
    nodes: Vec<Node>,
    free: Option<usize>,
    top: Option<usize>,
    bottom: Option<usize>,
    len: usize,
}

impl Deck {
    pub fn new() -> Self {
        Deck::default()
    }

    /// Empty deck with room for `cap` cards reserved up front
    pub fn with_capacity(cap: usize) -> Result<Self, DeckError> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(cap)
            .map_err(|_| DeckError::AllocationFailed { requested: cap })?;
        Ok(Deck {
            nodes,
            ..Deck::default()
        })
    }

    /// Fresh deck holding ranks 1..=size, rank 1 on top
    pub fn new_ordered(size: u32) -> Result<Self, DeckError> {
        let cap = usize::try_from(size).map_err(|_| DeckError::AllocationFailed {
            requested: usize::MAX,
        })?;
        let mut deck = Deck::with_capacity(cap)?;
        // Built bottom-up so each insertion is a plain push_front.
        for rank in (1..=size).rev() {
            deck.push_front(Card::new(rank)?);
        }
        Ok(deck)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Peek at the top card without removing it
    pub fn top(&self) -> Option<&Card> {
        self.top.and_then(|idx| self.nodes[idx].card.as_ref())
    }

    /// Peek at the bottom card without removing it
    pub fn bottom(&self) -> Option<&Card> {
        self.bottom.and_then(|idx| self.nodes[idx].card.as_ref())
    }

    /// True when exactly one card remains, i.e. top and bottom coincide
    pub fn has_single_card(&self) -> bool {
        self.top.is_some() && self.top == self.bottom
    }

    fn alloc(&mut self, card: Card, next: Option<usize>) -> usize {
        match self.free {
            Some(idx) => {
                let slot = &mut self.nodes[idx];
                self.free = slot.next;
                slot.card = Some(card);
                slot.next = next;
                idx
            }
            None => {
                self.nodes.push(Node {
                    card: Some(card),
                    next,
                });
                self.nodes.len() - 1
            }
        }
    }

    /// Detach the top card and hand ownership to the caller
    pub fn remove_front(&mut self) -> Result<Card, DeckError> {
        let idx = self.top.ok_or(DeckError::Empty)?;
        let slot = &mut self.nodes[idx];
        let card = slot.card.take().ok_or(DeckError::Empty)?;

        self.top = slot.next;
        slot.next = self.free;
        self.free = Some(idx);

        if self.top.is_none() {
            self.bottom = None;
        }
        self.len -= 1;
        Ok(card)
    }

    /// Place a card on top. On an empty deck it also becomes the bottom.
    pub fn push_front(&mut self, card: Card) {
        let idx = self.alloc(card, self.top);
        self.top = Some(idx);
        if self.bottom.is_none() {
            self.bottom = Some(idx);
        }
        self.len += 1;
    }

    /// Place a card at the bottom. The deck must already hold a card; only
    /// `push_front` seeds an empty deck.
    pub fn push_back(&mut self, card: Card) -> Result<(), DeckError> {
        let bottom = self.bottom.ok_or(DeckError::Empty)?;
        let idx = self.alloc(card, None);
        self.nodes[bottom].next = Some(idx);
        self.bottom = Some(idx);
        self.len += 1;
        Ok(())
    }

    /// Drop every card. Reserved storage is kept for reuse.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free = None;
        self.top = None;
        self.bottom = None;
        self.len = 0;
    }

    /// Check whether the ranks read 1, 2, 3, ... from top to bottom
    pub fn is_original_order(&self) -> bool {
        let mut expected: u64 = 1;
        for card in self.iter() {
            if u64::from(card.rank()) != expected {
                return false;
            }
            expected += 1;
        }
        true
    }

    pub fn iter(&self) -> DeckIter<'_> {
        DeckIter {
            deck: self,
            cursor: self.top,
        }
    }

    /// Snapshot of ranks from top to bottom
    pub fn ranks(&self) -> Vec<u32> {
        self.iter().map(Card::rank).collect()
    }
}

pub struct DeckIter<'a> {
    deck: &'a Deck,
    cursor: Option<usize>,
}

impl<'a> Iterator for DeckIter<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.deck.nodes[self.cursor?];
        self.cursor = node.next;
        node.card.as_ref()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = DeckIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(empty)");
        }
        for (i, card) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: u32) -> Card {
        Card::new(rank).expect("valid rank")
    }

    #[test]
    fn test_new_ordered_is_ascending() {
        let deck = Deck::new_ordered(5).expect("deck of 5");
        assert_eq!(deck.ranks(), vec![1, 2, 3, 4, 5]);
        assert_eq!(deck.len(), 5);
        assert_eq!(deck.top().map(Card::rank), Some(1));
        assert_eq!(deck.bottom().map(Card::rank), Some(5));
        assert!(deck.is_original_order());
    }

    #[test]
    fn test_new_ordered_zero_is_empty() {
        let deck = Deck::new_ordered(0).expect("empty deck");
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert!(deck.top().is_none());
        assert!(deck.bottom().is_none());
        assert_eq!(deck.to_string(), "(empty)");
    }

    #[test]
    fn test_fresh_decks_are_in_original_order() {
        for size in 1..=64 {
            let deck = Deck::new_ordered(size).expect("deck");
            assert!(deck.is_original_order(), "size {} should start in order", size);
        }
    }

    #[test]
    fn test_remove_front_until_empty() {
        let mut deck = Deck::new_ordered(3).expect("deck of 3");

        assert_eq!(deck.remove_front().map(|c| c.rank()), Ok(1));
        assert_eq!(deck.top().map(Card::rank), Some(2));
        assert!(!deck.has_single_card());

        assert_eq!(deck.remove_front().map(|c| c.rank()), Ok(2));
        assert!(deck.has_single_card());
        assert_eq!(deck.bottom().map(Card::rank), Some(3));

        assert_eq!(deck.remove_front().map(|c| c.rank()), Ok(3));
        assert!(deck.is_empty());
        assert!(deck.bottom().is_none());
    }

    #[test]
    fn test_remove_front_on_empty_deck_fails() {
        let mut deck = Deck::new();
        assert_eq!(deck.remove_front(), Err(DeckError::Empty));
    }

    #[test]
    fn test_push_front_seeds_bottom() {
        let mut deck = Deck::new();
        deck.push_front(card(4));
        assert!(deck.has_single_card());
        assert_eq!(deck.bottom().map(Card::rank), Some(4));

        deck.push_front(card(9));
        assert_eq!(deck.ranks(), vec![9, 4]);
        assert_eq!(deck.bottom().map(Card::rank), Some(4));
    }

    #[test]
    fn test_push_back_on_empty_deck_fails() {
        let mut deck = Deck::new();
        assert_eq!(deck.push_back(card(1)), Err(DeckError::Empty));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_push_back_after_removals_keeps_bottom_consistent() {
        let mut deck = Deck::new_ordered(2).expect("deck of 2");
        let first = deck.remove_front().expect("top card");
        deck.push_back(first).expect("deck still has a card");
        assert_eq!(deck.ranks(), vec![2, 1]);
        assert_eq!(deck.bottom().map(Card::rank), Some(1));

        // Emptied and reseeded: the bottom must follow the new single card.
        deck.remove_front().expect("card");
        deck.remove_front().expect("card");
        deck.push_front(card(8));
        deck.push_back(card(3)).expect("non-empty");
        assert_eq!(deck.ranks(), vec![8, 3]);
        assert_eq!(deck.bottom().map(Card::rank), Some(3));
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut deck = Deck::with_capacity(4).expect("capacity");
        for rank in (1..=4).rev() {
            deck.push_front(card(rank));
        }
        for _ in 0..100 {
            let c = deck.remove_front().expect("card");
            deck.push_back(c).expect("non-empty");
        }
        assert_eq!(deck.nodes.len(), 4);
        assert_eq!(deck.ranks(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_empties_deck() {
        let mut deck = Deck::new_ordered(10).expect("deck of 10");
        deck.clear();
        assert!(deck.is_empty());
        assert_eq!(deck.len(), 0);
        assert_eq!(deck.iter().count(), 0);
        deck.push_front(card(1));
        assert!(deck.is_original_order());
    }

    #[test]
    fn test_is_original_order_rejects_swaps() {
        let mut deck = Deck::new();
        for rank in [4, 3, 1, 2] {
            deck.push_front(card(rank));
        }
        assert_eq!(deck.ranks(), vec![2, 1, 3, 4]);
        assert!(!deck.is_original_order());
    }

    #[test]
    fn test_is_original_order_rejects_gaps_and_duplicates() {
        let mut gap = Deck::new();
        for rank in [4, 2, 1] {
            gap.push_front(card(rank));
        }
        assert!(!gap.is_original_order());

        let mut dup = Deck::new();
        for rank in [2, 2, 1] {
            dup.push_front(card(rank));
        }
        assert!(!dup.is_original_order());
    }

    #[test]
    fn test_is_original_order_accepts_prefix_length() {
        // A run 1..k is in order regardless of how big the full deck was.
        let mut deck = Deck::new_ordered(6).expect("deck of 6");
        deck.clear();
        for rank in (1..=3).rev() {
            deck.push_front(card(rank));
        }
        assert!(deck.is_original_order());
    }

    #[test]
    fn test_display_lists_ranks() {
        let deck = Deck::new_ordered(4).expect("deck of 4");
        assert_eq!(deck.to_string(), "1 2 3 4");
    }

    #[test]
    fn test_allocation_failure_reported() {
        let result = Deck::with_capacity(usize::MAX);
        assert_eq!(
            result.map(|d| d.len()),
            Err(DeckError::AllocationFailed {
                requested: usize::MAX
            })
        );
    }
}
