//! Selecting jobs by name.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use super::grouper::root_of;
use crate::data::Row;
use crate::error::SacctError;
use crate::Result;

/// Regular expression matched against the `JobName` of every row.
///
/// Matching is a substring search. An empty pattern matches every row.
#[derive(Debug, Clone)]
pub struct NameFilter {
    pattern: Regex,
}

impl NameFilter {
    /// Compile a case-sensitive name filter.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::with_case(pattern, true)
    }

    /// Compile a name filter, optionally ignoring case.
    pub fn with_case(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|e| SacctError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        Ok(NameFilter { pattern })
    }

    /// The pattern as given.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.pattern.is_match(&row.job_name)
    }

    /// Distinct roots of all rows whose name matches, in first-occurrence order.
    ///
    /// Step rows count: a match on `"batch"` selects the step's parent job.
    pub fn matching_roots(&self, table: &[Row]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut roots = Vec::new();
        for row in table.iter().filter(|row| self.matches(row)) {
            let root = root_of(&row.job_id);
            if seen.insert(root) {
                roots.push(root.to_string());
            }
        }
        roots
    }
}
