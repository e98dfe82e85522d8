//! Drawing distinct random elements from a candidate pool.

use std::error::Error;
use std::fmt;

use rand::Rng;

/// What to do when the attempt budget for a slot runs out before an unused
/// element turns up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExhaustionPolicy {
    /// Log the exhaustion and return the distinct elements drawn so far.
    ReturnPartial,
    /// Abort the whole draw with a [`SampleError`].
    Fail,
}

/// The attempt budget ran out before `requested` distinct elements were
/// found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleError {
    /// How many distinct elements were asked for.
    pub requested: usize,
    /// How many distinct elements had been drawn when the budget ran out.
    pub drawn: usize,
}

impl fmt::Display for SampleError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "found only {} of {} distinct elements before running out of attempts",
            self.drawn, self.requested
        )
    }
}

impl Error for SampleError {}

/// Draw up to `count` distinct elements from `pool`, uniformly at random
/// and without replacement.
///
/// Each result slot is filled by redrawing until an element turns up that
/// is not already part of the result, giving up on the slot after
/// `max_attempts_per_item` tries. An exhausted slot ends the draw: with
/// [`ExhaustionPolicy::ReturnPartial`] the elements found so far are
/// returned, with [`ExhaustionPolicy::Fail`] the whole draw fails. An empty
/// pool yields an empty result without drawing at all.
///
/// Elements are compared by value, so a pool containing duplicates can
/// supply fewer distinct elements than its length suggests. Pass a seeded
/// generator for a reproducible draw; load-test iterations pass
/// `rand::thread_rng()`.
pub fn sample_unique<T, R>(
    pool: &[T],
    count: usize,
    max_attempts_per_item: usize,
    policy: ExhaustionPolicy,
    rng: &mut R,
) -> Result<Vec<T>, SampleError>
where
    T: Clone + PartialEq,
    R: Rng,
{
    let mut selected: Vec<T> = Vec::with_capacity(count);
    if pool.is_empty() {
        return Ok(selected);
    }
    for _ in 0..count {
        let mut drawn = false;
        for _ in 0..max_attempts_per_item {
            let candidate = &pool[rng.gen_range(0..pool.len())];
            if !selected.contains(candidate) {
                selected.push(candidate.clone());
                drawn = true;
                break;
            }
        }
        if !drawn {
            match policy {
                ExhaustionPolicy::ReturnPartial => {
                    warn!(
                        "gave up after {} attempts with {} of {} distinct elements drawn",
                        max_attempts_per_item,
                        selected.len(),
                        count
                    );
                    return Ok(selected);
                }
                ExhaustionPolicy::Fail => {
                    return Err(SampleError {
                        requested: count,
                        drawn: selected.len(),
                    });
                }
            }
        }
    }
    Ok(selected)
}
