//! Table-ready data for one admitted job.
//!
//! `JobTable` is a pure presentation layer: it turns a [`Job`] into
//! numbered, string-only headers and rows. Alignment and styling are left
//! to whoever prints it.

use serde::{Deserialize, Serialize};

use crate::data::{Job, COLUMNS};

/// One job as a grid of display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTable {
    /// 1-based position among admitted jobs
    pub number: usize,
    /// Root job identifier
    pub root: String,
    /// Column headers
    pub headers: Vec<String>,
    /// One entry per row of the job, cells in header order
    pub rows: Vec<Vec<String>>,
}

impl JobTable {
    /// Build the table for the `number`-th admitted job.
    pub fn from_job(number: usize, job: &Job) -> Self {
        JobTable {
            number,
            root: job.root.clone(),
            headers: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: job
                .rows
                .iter()
                .map(|row| row.values().iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }

    /// Number every job from 1 in the given order.
    pub fn from_jobs(jobs: &[Job]) -> Vec<Self> {
        jobs.iter()
            .enumerate()
            .map(|(i, job)| Self::from_job(i + 1, job))
            .collect()
    }

    /// Banner line shown above the table.
    pub fn title(&self) -> String {
        format!("--[ {}. job ]--------------------------", self.number)
    }
}
