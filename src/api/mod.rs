//! Response shaping for the public wire format
pub mod hierarchy;

pub use hierarchy::{aggregate_universities, FacultyNode, UniversityNode};
