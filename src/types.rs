//! The size type trait and the error types returned by `GrowArr` operations.

mod errors;
mod size_type;

pub use errors::*;
pub use size_type::SizeType;
