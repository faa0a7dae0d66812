use std::cmp::Ordering;

use crate::gaps::GapSequence;
use crate::shellsort;

sort_impl!("rust_shellsort_knuth_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shellsort::sort(v, GapSequence::Knuth);
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shellsort::sort_by(v, GapSequence::Knuth, compare);
}
