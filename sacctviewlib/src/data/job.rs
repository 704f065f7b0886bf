//! A logical job: the root record plus all of its steps.

use serde::{Deserialize, Serialize};

use super::row::Row;

/// A job and every row belonging to it, in original table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Root job identifier (the part of `JobID` before any `.step`)
    pub root: String,
    /// Root row and step rows
    pub rows: Vec<Row>,
}

impl Job {
    pub fn new(root: impl Into<String>, rows: Vec<Row>) -> Self {
        Job {
            root: root.into(),
            rows,
        }
    }

    /// Number of step rows, excluding the root record itself.
    pub fn step_count(&self) -> usize {
        self.rows.iter().filter(|r| r.job_id != self.root).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_count_excludes_root_row() {
        let job = Job::new(
            "7",
            vec![
                Row::new("7", "train", "RUNNING"),
                Row::new("7.batch", "batch", "RUNNING"),
                Row::new("7.extern", "extern", "RUNNING"),
            ],
        );

        assert_eq!(job.step_count(), 2);
    }
}
