//! Partitioned summation of `1..=upper` across worker threads.
//!
//! The range is split into `workers` contiguous chunks of `upper / workers`
//! numbers; the last chunk absorbs the remainder. Each worker sums its chunk
//! with no shared state, and the initiating thread joins every worker before
//! adding the partial sums.
//!
//! Every chunk holds at least one number: with more workers than numbers the
//! surplus workers are not started. `upper` is capped at [`MAX_UPPER`] so no
//! partial or total can overflow a `u64`.

use crate::error::SummationError;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::thread;
use tracing::{debug, info};

/// Largest `n` with `n * (n + 1) / 2 <= u64::MAX`.
pub const MAX_UPPER: u64 = 6_074_000_999;

/// Each worker is an OS thread in [`threaded_sum`].
pub const MAX_WORKERS: usize = 256;

pub fn partition(upper: u64, workers: usize) -> Result<Vec<RangeInclusive<u64>>, SummationError> {
    if workers == 0 {
        return Err(SummationError::NoWorkers);
    }
    if workers > MAX_WORKERS {
        return Err(SummationError::TooManyWorkers {
            workers,
            max: MAX_WORKERS,
        });
    }
    if upper > MAX_UPPER {
        return Err(SummationError::Overflow {
            upper,
            max: MAX_UPPER,
        });
    }

    let workers = (workers as u64).min(upper);
    if workers == 0 {
        return Ok(Vec::new());
    }
    let chunk = upper / workers;
    let mut ranges = Vec::with_capacity(workers as usize);
    let mut start = 1;

    for index in 0..workers {
        let end = if index == workers - 1 {
            upper
        } else {
            start + chunk - 1
        };
        ranges.push(start..=end);
        start = end + 1;
    }

    Ok(ranges)
}

fn sum_range(range: &RangeInclusive<u64>) -> u64 {
    range.clone().sum()
}

/// Sums on scoped OS threads, one per partition.
pub fn threaded_sum(upper: u64, workers: usize) -> Result<u64, SummationError> {
    let ranges = partition(upper, workers)?;

    let partials = thread::scope(|s| {
        let handles: Vec<_> = ranges
            .iter()
            .map(|range| s.spawn(move || sum_range(range)))
            .collect();

        handles
            .into_iter()
            .zip(&ranges)
            .enumerate()
            .map(|(index, (handle, range))| {
                let partial = handle.join().map_err(|_| SummationError::WorkerPanicked {
                    index,
                    start: *range.start(),
                    end: *range.end(),
                })?;
                debug!(index, start = range.start(), end = range.end(), partial, "worker joined");
                Ok(partial)
            })
            .collect::<Result<Vec<u64>, SummationError>>()
    })?;

    let total: u64 = partials.iter().sum();
    info!(upper, workers, total, "threaded sum complete");
    Ok(total)
}

/// Same partitioning, scheduled on the rayon pool instead of dedicated threads.
pub fn parallel_sum(upper: u64, workers: usize) -> Result<u64, SummationError> {
    let ranges = partition(upper, workers)?;
    Ok(ranges.par_iter().map(sum_range).sum())
}

/// `n(n+1)/2`, or `None` when the result does not fit in a `u64`.
pub fn closed_form(upper: u64) -> Option<u64> {
    let upper = u128::from(upper);
    u64::try_from(upper * (upper + 1) / 2).ok()
}
