//! Self-overlap correction for runs that break inside a periodic pattern.
//!
//! While the engine looks for the place where both inputs line up again it
//! tracks a run: `len` units of `seq` starting at `from` that have matched so
//! far. When the next unit breaks the run, the run may still be periodic
//! (think `abab` followed by `a`), in which case a shorter suffix of it plus
//! the breaking unit is already a valid new prefix. This is the failure
//! function of classic string matching, computed on demand.

use crate::sequence::{units_match, Sequence};

/// Find how far a broken run can slide forward and keep matching.
///
/// Searches the shortest shift `i` (`1..len`) such that the run's suffix
/// starting at `from + i` equals its prefix and the unit that would follow
/// that prefix is `next`. On success the run continues as
/// `(from + i, len - i + 1)`, the breaking unit included.
///
/// Returns `None` when the run does not overlap itself; the caller then
/// starts over with an empty run.
pub fn find_overlap<S>(seq: &S, from: usize, len: usize, next: Option<S::Unit>) -> Option<usize>
where
    S: Sequence + ?Sized,
{
    let to = from + len;
    (1..len).find(|&shift| {
        units_match(seq.get(to - shift), next)
            && (from + shift..to).all(|j| seq.unit_at(j) == seq.unit_at(j - shift))
    })
}
