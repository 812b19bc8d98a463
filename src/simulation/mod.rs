pub mod engine;
pub mod sweep;

pub use engine::{
    count_rounds_to_original_order, count_rounds_with, resume_in_hand, shuffle_one_round,
    ShuffleError, ShuffleOptions, ShuffleReport,
};
pub use sweep::{sweep, DEFAULT_SWEEP_RANGE};
