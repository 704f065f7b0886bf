//! Admitting jobs by the states of their rows.
//!
//! State is decided per job, not per row: a job is admitted when at least
//! one of its rows matches the include pattern and none of its rows match
//! the exclude pattern. Patterns are substring searches, so a state such
//! as `CANCELLED by 1000` still matches `CANC`.

use regex::Regex;

use crate::data::Row;
use crate::error::SacctError;
use crate::Result;

/// State keywords admitted when no include pattern is given.
///
/// Prefixes cover the `OUT_OF_MEMORY`, `TIMEOUT`, `FAILED`/`NODE_FAIL`,
/// `COMPLETED`/`COMPLETING`, `PENDING` and `RUNNING` families.
pub const DEFAULT_INCLUDE_STATES: [&str; 6] = ["MEM", "TIM", "FAIL", "COMP", "PENDING", "RUNNING"];

/// [`DEFAULT_INCLUDE_STATES`] as a single alternation.
pub const DEFAULT_INCLUDE: &str = "MEM|TIM|FAIL|COMP|PENDING|RUNNING";

/// Include/exclude patterns over the `State` column.
#[derive(Debug, Clone)]
pub struct StateFilter {
    include: Regex,
    /// `None` excludes nothing
    exclude: Option<Regex>,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| SacctError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

impl StateFilter {
    /// Compile an include pattern and an optional exclude pattern.
    pub fn new(include: &str, exclude: Option<&str>) -> Result<Self> {
        Ok(StateFilter {
            include: compile(include)?,
            exclude: exclude.map(compile).transpose()?,
        })
    }

    /// Default include vocabulary, nothing excluded.
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_INCLUDE, None)
    }

    /// Build the include pattern from literal state keywords.
    ///
    /// Keywords are escaped and joined as an alternation, so each still
    /// matches as a substring of the state text.
    pub fn from_states(states: &[&str], exclude: Option<&str>) -> Result<Self> {
        let include = states
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        Self::new(&include, exclude)
    }

    pub fn include(&self) -> &str {
        self.include.as_str()
    }

    pub fn exclude(&self) -> Option<&str> {
        self.exclude.as_ref().map(|r| r.as_str())
    }

    /// Whether any row's state matches the include pattern.
    pub fn any_included(&self, rows: &[Row]) -> bool {
        rows.iter().any(|row| self.include.is_match(&row.state))
    }

    /// Whether any row's state matches the exclude pattern.
    pub fn any_excluded(&self, rows: &[Row]) -> bool {
        match &self.exclude {
            Some(exclude) => rows.iter().any(|row| exclude.is_match(&row.state)),
            None => false,
        }
    }

    /// Admission decision for one job's full row set.
    pub fn admit(&self, rows: &[Row]) -> bool {
        self.any_included(rows) && !self.any_excluded(rows)
    }
}
