pub mod zones;

pub use zones::{Deck, DeckError, DeckIter};
