use crate::game::zones::{Deck, DeckError};
use serde::Serialize;
use thiserror::Error;

/// Largest deck size where the answer equals the size itself
pub const TRIVIAL_DECK_SIZE: u32 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    #[error("Deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("Deck of {deck_size} cards did not return to original order within {max_rounds} rounds")]
    DidNotConverge { deck_size: u32, max_rounds: u64 },
}

/// Knobs for a simulation run
#[derive(Debug, Clone, Default)]
pub struct ShuffleOptions {
    /// Give up after this many rounds (None = run until converged)
    pub max_rounds: Option<u64>,
    /// Print hand and table around every round
    pub verbose: bool,
}

/// Result of a single simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShuffleReport {
    pub deck_size: u32,
    /// Rounds needed to bring the deck back to its original order
    pub rounds: u64,
}

/// Run one round: deal the top card onto the table, tuck the next card under
/// the hand, and repeat until the hand is exhausted.
///
/// `hand` must be non-empty and `table` empty on entry. On return every card
/// has moved to `table` and `hand` is empty. Since each card lands on top of
/// the table pile, the table reads in reverse dealing order.
pub fn shuffle_one_round(hand: &mut Deck, table: &mut Deck) -> Result<(), DeckError> {
    if hand.is_empty() {
        return Err(DeckError::Empty);
    }

    while !hand.has_single_card() {
        let dealt = hand.remove_front()?;
        table.push_front(dealt);

        if hand.has_single_card() {
            break;
        }
        let tucked = hand.remove_front()?;
        hand.push_back(tucked)?;
    }

    let last = hand.remove_front()?;
    table.push_front(last);
    hand.clear();
    Ok(())
}

/// Pick the table pile back up as the new hand. The piles swap ownership;
/// no card is copied and `table` is left empty.
pub fn resume_in_hand(hand: &mut Deck, table: &mut Deck) {
    std::mem::swap(hand, table);
    table.clear();
}

/// Number of rounds needed to restore a fresh deck of `size` cards
pub fn count_rounds_to_original_order(size: u32) -> Result<u64, ShuffleError> {
    count_rounds_with(size, &ShuffleOptions::default()).map(|report| report.rounds)
}

/// Simulate rounds on a fresh deck of `size` cards until it is back in order
pub fn count_rounds_with(size: u32, options: &ShuffleOptions) -> Result<ShuffleReport, ShuffleError> {
    // Sizes 0..=3 are fixed points of the general loop: the answer is the
    // size itself. Verbose runs still simulate so the trace is real.
    if size == 0 || (size <= TRIVIAL_DECK_SIZE && !options.verbose) {
        let rounds = u64::from(size);
        if let Some(max_rounds) = options.max_rounds.filter(|&max| rounds > max) {
            return Err(ShuffleError::DidNotConverge {
                deck_size: size,
                max_rounds,
            });
        }
        return Ok(ShuffleReport {
            deck_size: size,
            rounds,
        });
    }

    let mut hand = Deck::new_ordered(size)?;
    let mut table = Deck::with_capacity(hand.len())?;
    let rounds = run_until_original_order(&mut hand, &mut table, size, options)?;

    Ok(ShuffleReport {
        deck_size: size,
        rounds,
    })
}

fn run_until_original_order(
    hand: &mut Deck,
    table: &mut Deck,
    size: u32,
    options: &ShuffleOptions,
) -> Result<u64, ShuffleError> {
    if options.verbose {
        println!("=== Deck of {} cards ===", size);
    }

    let mut rounds: u64 = 0;
    loop {
        if let Some(max_rounds) = options.max_rounds {
            if rounds >= max_rounds {
                return Err(ShuffleError::DidNotConverge {
                    deck_size: size,
                    max_rounds,
                });
            }
        }

        if options.verbose {
            println!("\n[Round {}] Before shuffle", rounds + 1);
            println!("  Hand:  {}", hand);
            println!("  Table: {}", table);
        }

        shuffle_one_round(hand, table)?;

        if options.verbose {
            println!("[Round {}] After shuffle", rounds + 1);
            println!("  Hand:  {}", hand);
            println!("  Table: {}", table);
        }

        resume_in_hand(hand, table);
        rounds += 1;

        if hand.is_original_order() {
            if options.verbose {
                println!("[Round {}] Order restored", rounds);
            }
            return Ok(rounds);
        }

        if options.verbose {
            println!("[Round {}] Not in original order, picking up the table", rounds);
        }
    }
}
