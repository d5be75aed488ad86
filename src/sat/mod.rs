//! SAT encoding components for the pigeonhole principle

pub mod variables;
pub mod constraints;
pub mod encoder;

pub use variables::PlacementVariables;
pub use constraints::{Clause, ConstraintGenerator};
pub use encoder::{EncodingStatistics, PigeonholeEncoder};
