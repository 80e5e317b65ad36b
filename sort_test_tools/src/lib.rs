//! Sort agnostic test suite, instantiated per sort implementation with
//! [`instantiate_sort_tests`].

pub use record_sort::Sort;

pub mod tests;
