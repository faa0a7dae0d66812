macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod error;
pub mod gaps;
pub mod io;
pub mod shellsort;

// One module per gap sequence, plus the standard library as reference point.
pub mod unstable;

pub use error::{Error, Result};
pub use gaps::{generate_gaps, GapSequence, Gaps};
pub use shellsort::{sort, sort_by, sort_by_name};
pub use sort_test_tools::{patterns, Sort};
