//! Composing name selection, grouping and state admission.

use tracing::{debug, info};

use super::grouper::rows_for_root;
use super::name::NameFilter;
use super::state::StateFilter;
use crate::data::{Job, Row};

/// Filters a materialized table down to the admitted jobs.
///
/// Pure: the same table and filters always produce the same jobs, in the
/// first-occurrence order of their roots among name-matching rows.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    name: NameFilter,
    states: StateFilter,
}

impl FilterEngine {
    pub fn new(name: NameFilter, states: StateFilter) -> Self {
        FilterEngine { name, states }
    }

    /// Run the filter over `table`.
    pub fn run(&self, table: &[Row]) -> Vec<Job> {
        let roots = self.name.matching_roots(table);
        debug!(
            pattern = self.name.as_str(),
            rows = table.len(),
            roots = roots.len(),
            "name filter applied"
        );

        let jobs: Vec<Job> = roots
            .into_iter()
            .filter_map(|root| {
                let rows = rows_for_root(table, &root);
                if self.states.admit(&rows) {
                    let job = Job::new(root, rows);
                    debug!(root = job.root.as_str(), steps = job.step_count(), "job admitted");
                    Some(job)
                } else {
                    debug!(root = root.as_str(), "job rejected by state filter");
                    None
                }
            })
            .collect();

        info!(admitted = jobs.len(), "filtering finished");
        jobs
    }
}

/// Convenience wrapper around [`FilterEngine::run`].
pub fn filter_jobs(table: &[Row], name: &NameFilter, states: &StateFilter) -> Vec<Job> {
    FilterEngine::new(name.clone(), states.clone()).run(table)
}
