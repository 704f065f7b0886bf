//! Table source: obtain accounting rows.
//!
//! This module covers everything before filtering:
//!
//! - **Time window**: parse and validate the query range
//! - **Query command**: build `sacct` locally or through `ssh`
//! - **Table decoding**: turn pipe-delimited output into typed rows
//!
//! ## Example
//!
//! ```rust,ignore
//! use sacctviewlib::source::{ExecutionTarget, QueryCommand, TimeWindow};
//!
//! let rows = QueryCommand::new(TimeWindow::today())
//!     .all_users(true)
//!     .target(ExecutionTarget::Remote("cluster.example.org".into()))
//!     .fetch()?;
//! ```

pub mod command;
pub mod table;
pub mod window;

pub use command::{ExecutionTarget, QueryCommand};
pub use table::{parse_table, read_table_file};
pub use window::{parse_datetime, TimeWindow, QUERY_TIME_FORMAT};
