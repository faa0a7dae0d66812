//! Gap (increment) sequences for Shell sort.
//!
//! Every sequence is a pure function of the length `n` of the slice that is about to be sorted.
//! The gaps are produced lazily from largest to smallest, are strictly decreasing and each one is
//! strictly less than `n`. For `n >= 2` the last gap is always `1`, which is what makes the final
//! pass a plain insertion sort and guarantees a sorted result.

use std::collections::BTreeSet;
use std::fmt;
use std::iter::FusedIterator;
use std::vec;
use std::str::FromStr;

use crate::error::Error;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GapSequence {
    /// Shell (1959): `n/2, n/4, ..., 1`.
    #[default]
    Shell,
    /// Knuth (1973): `..., 121, 40, 13, 4, 1`.
    Knuth,
    /// Sedgewick (1982): `4^k + 3*2^(k-1) + 1` merged with `9*4^k - 9*2^k + 1`.
    Sedgewick,
}

impl GapSequence {
    pub const ALL: [GapSequence; 3] = [
        GapSequence::Shell,
        GapSequence::Knuth,
        GapSequence::Sedgewick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GapSequence::Shell => "shell",
            GapSequence::Knuth => "knuth",
            GapSequence::Sedgewick => "sedgewick",
        }
    }

    /// Returns the gaps used to sort a slice of length `len`.
    pub fn gaps(self, len: usize) -> Gaps {
        let state = match self {
            GapSequence::Shell => GapsState::Halving { next: len / 2 },
            GapSequence::Knuth => GapsState::Knuth {
                next: largest_knuth_gap(len),
            },
            GapSequence::Sedgewick => GapsState::Sorted(sedgewick_gaps(len).into_iter()),
        };

        Gaps { state }
    }
}

impl fmt::Display for GapSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GapSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shell" => Ok(GapSequence::Shell),
            "knuth" => Ok(GapSequence::Knuth),
            "sedgewick" => Ok(GapSequence::Sedgewick),
            _ => Err(Error::InvalidArgument(s.to_owned())),
        }
    }
}

/// Returns the gaps `sequence` produces for a slice of length `len`, largest first.
pub fn generate_gaps(len: usize, sequence: GapSequence) -> Gaps {
    sequence.gaps(len)
}

/// Lazy, strictly decreasing iterator over the gaps of one sequence.
#[derive(Clone, Debug)]
pub struct Gaps {
    state: GapsState,
}

#[derive(Clone, Debug)]
enum GapsState {
    Halving { next: usize },
    Knuth { next: usize },
    Sorted(vec::IntoIter<usize>),
}

impl Iterator for Gaps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match &mut self.state {
            GapsState::Halving { next } => {
                let gap = *next;
                if gap == 0 {
                    return None;
                }
                *next = gap / 2;
                Some(gap)
            }
            GapsState::Knuth { next } => {
                let gap = *next;
                if gap == 0 {
                    return None;
                }
                // Inverse of h = 3h + 1, maps 1 to 0 which ends the sequence.
                *next = (gap - 1) / 3;
                Some(gap)
            }
            GapsState::Sorted(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            GapsState::Halving { next } | GapsState::Knuth { next } => {
                if *next == 0 {
                    (0, Some(0))
                } else {
                    (1, None)
                }
            }
            GapsState::Sorted(iter) => iter.size_hint(),
        }
    }
}

impl FusedIterator for Gaps {}

fn largest_knuth_gap(len: usize) -> usize {
    if len < 2 {
        return 0;
    }

    let mut h = 1usize;
    // h < len <= usize::MAX, so 3h + 1 can only overflow if it would exceed len anyway.
    while let Some(next) = h.checked_mul(3).and_then(|h3| h3.checked_add(1)) {
        if next >= len {
            break;
        }
        h = next;
    }

    h
}

/// Sedgewick gaps below `len`, largest first.
fn sedgewick_gaps(len: usize) -> Vec<usize> {
    let len = len as u128;
    let mut gaps = BTreeSet::new();

    // For any usize length both candidates exceed it long before k = 40, so u128 never overflows.
    for k in 0u32.. {
        let g1 = if k == 0 {
            1
        } else {
            4u128.pow(k) + 3 * 2u128.pow(k - 1) + 1
        };
        let g2 = 9 * 4u128.pow(k) - 9 * 2u128.pow(k) + 1;

        if g1 < len {
            gaps.insert(g1);
        }
        if g2 < len {
            gaps.insert(g2);
        }
        if g1 >= len && g2 >= len {
            break;
        }
    }

    gaps.into_iter()
        .rev()
        .filter(|&gap| gap > 0)
        .map(|gap| gap as usize)
        .collect()
}
