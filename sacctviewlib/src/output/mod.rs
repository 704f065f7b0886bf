//! Output formatting: present admitted jobs as tables.
//!
//! - **JobTable**: one numbered job with string headers and rows
//!
//! ## Example
//!
//! ```rust,ignore
//! use sacctviewlib::output::JobTable;
//!
//! for table in JobTable::from_jobs(&jobs) {
//!     println!("{}", table.title());
//! }
//! ```

pub mod table;

pub use table::JobTable;
