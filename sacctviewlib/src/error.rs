//! Error types for sacctviewlib

use thiserror::Error;

/// Errors that can occur while querying and filtering accounting records
#[derive(Error, Debug)]
pub enum SacctError {
    /// A name, include or exclude pattern failed to compile
    #[error("invalid regular expression '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// End of the query window lies before its start
    #[error("the given endtime \"{end}\" was before the starttime \"{start}\"")]
    InvalidTimeRange { start: String, end: String },

    /// A date argument in neither accepted format
    #[error("incorrect date format '{input}', should be YYYY-MM-DD or YYYY-MM-DDThh:mm")]
    InvalidDate { input: String },

    /// The accounting output could not be interpreted as a job table
    #[error("malformed accounting table: {0}")]
    MalformedTable(String),

    /// The accounting command exited unsuccessfully
    #[error("query command `{command}` failed with {status}: {stderr}")]
    QueryFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Pipe-delimited decoding error
    #[error("failed to decode accounting table: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
