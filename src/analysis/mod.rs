//! Characterization of the two sorts: stability and best, worst and representative cases.

pub mod cases;
pub mod stability;
