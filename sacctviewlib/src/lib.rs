//! # sacctviewlib
//!
//! Group Slurm accounting records into whole jobs and filter them by name and state.
//!
//! ## Overview
//!
//! `sacct` prints one row for a job and one more for each of its steps
//! (`1234`, `1234.batch`, `1234.extern`, `1234.0`, ...). Looking at rows one
//! by one hides what happened to the job as a whole. This library treats a
//! job and its steps as a unit:
//!
//! - **Name selection**: a job is picked when any of its rows has a matching `JobName`
//! - **Grouping**: every row of a picked job is gathered, in table order
//! - **State admission**: a job is shown when any row matches the include
//!   pattern and no row matches the exclude pattern
//!
//! The pipeline is:
//! 1. Source (`QueryCommand` / `parse_table`): raw rows
//! 2. Filter (`FilterEngine`): admitted jobs
//! 3. Output (`JobTable`): display strings
//!
//! ## Example
//!
//! ```rust
//! use sacctviewlib::{parse_table, FilterEngine, NameFilter, StateFilter};
//!
//! let text = "JobID|JobName|State\n\
//!             5|hifi_diff_run|COMPLETED\n\
//!             5.batch|batch|COMPLETED\n\
//!             5.1|step1|CANCELLED by 1000\n";
//! let table = parse_table(text.as_bytes()).unwrap();
//!
//! let engine = FilterEngine::new(
//!     NameFilter::new("hifi_diff").unwrap(),
//!     StateFilter::new("COMP", Some("CANC")).unwrap(),
//! );
//! assert!(engine.run(&table).is_empty());
//! ```

pub mod data;
pub mod error;
pub mod filter;
pub mod output;
pub mod source;

pub use data::{Job, Row, COLUMNS};
pub use error::SacctError;
pub use filter::{filter_jobs, root_of, rows_for_root, FilterEngine, NameFilter, StateFilter};
pub use output::JobTable;
pub use source::{
    parse_datetime, parse_table, read_table_file, ExecutionTarget, QueryCommand, TimeWindow,
};

/// Result type for sacctviewlib operations
pub type Result<T> = std::result::Result<T, SacctError>;
