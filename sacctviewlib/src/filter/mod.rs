//! Job filtering: group rows into jobs and decide which jobs to show.
//!
//! The pipeline is:
//! 1. [`NameFilter`] picks the roots of all rows whose `JobName` matches
//! 2. [`rows_for_root`] gathers every row of each picked job
//! 3. [`StateFilter`] admits or rejects each job as a whole
//!
//! [`FilterEngine`] runs these steps in order. None of them perform I/O.
//!
//! ## Example
//!
//! ```rust
//! use sacctviewlib::{FilterEngine, NameFilter, Row, StateFilter};
//!
//! let table = vec![
//!     Row::new("5", "hifi_diff_run", "COMPLETED"),
//!     Row::new("5.batch", "batch", "COMPLETED"),
//! ];
//! let engine = FilterEngine::new(
//!     NameFilter::new("hifi_diff").unwrap(),
//!     StateFilter::with_defaults().unwrap(),
//! );
//! let jobs = engine.run(&table);
//! assert_eq!(jobs[0].root, "5");
//! assert_eq!(jobs[0].rows.len(), 2);
//! ```

pub mod engine;
pub mod grouper;
pub mod name;
pub mod state;

pub use engine::{filter_jobs, FilterEngine};
pub use grouper::{belongs_to, root_of, rows_for_root};
pub use name::NameFilter;
pub use state::{StateFilter, DEFAULT_INCLUDE, DEFAULT_INCLUDE_STATES};
