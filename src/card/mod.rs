pub mod types;

pub use types::{Card, CardError};
