//! Record types: accounting rows and the jobs they group into.
//!
//! - **Row**: one line of `sacct -P` output with typed, named fields
//! - **Job**: a root identifier plus every row (root and steps) that belongs to it

pub mod job;
pub mod row;

pub use job::Job;
pub use row::{Row, COLUMNS, REQUIRED_COLUMNS};
