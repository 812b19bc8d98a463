use crate::simulation::engine::{count_rounds_with, ShuffleError, ShuffleOptions, ShuffleReport};
use indicatif::{ProgressBar, ProgressStyle};
use std::ops::RangeInclusive;

/// Default range for a sweep, matching the exploratory 1..313 loop
pub const DEFAULT_SWEEP_RANGE: RangeInclusive<u32> = 1..=312;

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} deck sizes ({eta})") {
        bar.set_style(style);
    }
    bar
}

/// Count rounds for every deck size in `sizes`, in ascending order.
/// Stops at the first size that fails.
pub fn sweep(
    sizes: RangeInclusive<u32>,
    options: &ShuffleOptions,
    progress: bool,
) -> Result<Vec<ShuffleReport>, ShuffleError> {
    let total = if sizes.is_empty() {
        0
    } else {
        u64::from(*sizes.end()) - u64::from(*sizes.start()) + 1
    };
    let bar = progress_bar(total, progress);

    let mut reports = Vec::new();
    for size in sizes {
        let report = count_rounds_with(size, options);
        bar.inc(1);
        match report {
            Ok(report) => reports.push(report),
            Err(e) => {
                bar.abandon();
                return Err(e);
            }
        }
    }

    bar.finish_and_clear();
    Ok(reports)
}
