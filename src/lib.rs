//! Sorting of date and name keyed records with heapsort and two-way insertion sort, plus the
//! tooling to characterize both: stability verification and best, worst and representative case
//! timing.

use error::SortError;
use record::Record;

/// Common interface of the sort implementations, used by the test tools and the benchmarks.
pub trait Sort {
    const NAME: &'static str;

    fn name() -> String {
        Self::NAME.into()
    }

    fn sort(v: &mut [Record]) -> Result<(), SortError>;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            const NAME: &'static str = $name;

            #[inline]
            fn sort(
                v: &mut [crate::record::Record],
            ) -> Result<(), crate::error::SortError> {
                sort(v);
                Ok(())
            }
        }
    };
    ($name:expr, fallible) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            const NAME: &'static str = $name;

            #[inline]
            fn sort(
                v: &mut [crate::record::Record],
            ) -> Result<(), crate::error::SortError> {
                sort(v)
            }
        }
    };
}

pub mod analysis;
pub mod config;
pub mod error;
pub mod measure;
pub mod patterns;
pub mod record;
pub mod report;
pub mod stable;
pub mod text_format;
pub mod timed;
pub mod unstable;

pub use analysis::cases::run_case_harness;
pub use analysis::stability::verify_stability;
pub use timed::{heap_sort, two_way_insertion_sort};
