//! Shell sort driven by a selectable [`GapSequence`].

use std::cmp::Ordering;
use std::mem::{self, ManuallyDrop};
use std::ptr;

use crate::error::Result;
use crate::gaps::GapSequence;

/// Sorts the slice in place using the gaps of `sequence`, but might not preserve the order of
/// equal elements.
///
/// This sort is unstable, in-place (i.e., does not allocate besides the gap sequence itself) and
/// its worst-case depends on `sequence`: *O*(*n*<sup>2</sup>) for [`GapSequence::Shell`],
/// *O*(*n*<sup>3/2</sup>) for [`GapSequence::Knuth`] and *O*(*n*<sup>4/3</sup>) for
/// [`GapSequence::Sedgewick`].
#[inline]
pub fn sort<T>(v: &mut [T], sequence: GapSequence)
where
    T: Ord,
{
    shell_sort(v, sequence, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, see [`sort`].
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds
/// every element it held before the call.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], sequence: GapSequence, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, sequence, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Like [`sort`] but selects the gap sequence by name.
///
/// An unknown name fails with [`crate::Error::InvalidArgument`] before `v` is touched.
pub fn sort_by_name<T>(v: &mut [T], name: &str) -> Result<()>
where
    T: Ord,
{
    let sequence = name.parse::<GapSequence>()?;
    sort(v, sequence);

    Ok(())
}

// --- IMPL ---

fn shell_sort<T, F>(v: &mut [T], sequence: GapSequence, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 {
        return;
    }

    let len = v.len();
    if len < 2 {
        return;
    }

    log::trace!("shell sort len={len} sequence={sequence}");

    for gap in sequence.gaps(len) {
        debug_assert!(gap > 0 && gap < len);

        for i in gap..len {
            insert_tail_gapped(&mut v[..=i], gap, is_less);
        }
    }
}

/// Inserts `v[v.len() - 1]` into the already sorted stride `v[len - 1 - gap], v[len - 1 - 2*gap],
/// ...` that ends at it.
fn insert_tail_gapped<T, F>(v: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let i = v.len() - 1;
    assert!(gap > 0 && i >= gap);

    let v_base = v.as_mut_ptr();

    // SAFETY: `i` and `i - gap` are in bounds, checked above. Every further position visited is
    // `gap` below the previous one and stays `>= 0` because of the `j >= gap` loop condition.
    unsafe {
        let v_i = v_base.add(i);

        // Only read `v[i]` out once we know it has to move. Until then no copy of it exists.
        if !is_less(&*v_i, &*v_i.sub(gap)) {
            return;
        }

        // Intermediate state of the insertion is tracked by `hole`. If `is_less` panics, `hole`
        // gets dropped and fills the open slot in `v` with the held value, so `v` still holds
        // every element it initially held exactly once.
        let mut hole = InsertionHole {
            value: ManuallyDrop::new(ptr::read(v_i)),
            dest: v_i.sub(gap),
        };
        ptr::copy_nonoverlapping(hole.dest, v_i, 1);

        let mut j = i - gap;
        while j >= gap {
            let v_prev = v_base.add(j - gap);
            if !is_less(&*hole.value, &*v_prev) {
                break;
            }

            ptr::copy_nonoverlapping(v_prev, hole.dest, 1);
            hole.dest = v_prev;
            j -= gap;
        }
        // `hole` gets dropped and thus copies the held value into the remaining slot in `v`.
    }
}

struct InsertionHole<T> {
    value: ManuallyDrop<T>,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `dest` always points to a slot whose previous value was moved elsewhere.
        unsafe {
            ptr::copy_nonoverlapping(&*self.value, self.dest, 1);
        }
    }
}
