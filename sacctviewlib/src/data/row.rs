//! One accounting record as emitted by `sacct -P`.

use serde::{Deserialize, Serialize};

/// Column names requested from the accounting tool, in display order.
pub const COLUMNS: [&str; 12] = [
    "JobID",
    "User",
    "Account",
    "JobName",
    "NodeList",
    "AllocCPUS",
    "AllocTRES",
    "MaxVMSize",
    "MaxRSS",
    "Start",
    "Elapsed",
    "State",
];

/// Columns the filtering pipeline cannot work without.
pub const REQUIRED_COLUMNS: [&str; 3] = ["JobID", "JobName", "State"];

/// A single accounting record.
///
/// `job_id` is either a root identifier (`"1234"`) or a step of that job
/// (`"1234.batch"`, `"1234.0"`). All values are kept as the text the
/// accounting tool printed; optional columns missing from the header are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "JobID")]
    pub job_id: String,
    #[serde(rename = "User", default)]
    pub user: String,
    #[serde(rename = "Account", default)]
    pub account: String,
    #[serde(rename = "JobName")]
    pub job_name: String,
    #[serde(rename = "NodeList", default)]
    pub node_list: String,
    #[serde(rename = "AllocCPUS", default)]
    pub alloc_cpus: String,
    #[serde(rename = "AllocTRES", alias = "AllocTres", default)]
    pub alloc_tres: String,
    #[serde(rename = "MaxVMSize", default)]
    pub max_vm_size: String,
    #[serde(rename = "MaxRSS", default)]
    pub max_rss: String,
    #[serde(rename = "Start", default)]
    pub start: String,
    #[serde(rename = "Elapsed", default)]
    pub elapsed: String,
    #[serde(rename = "State")]
    pub state: String,
}

impl Row {
    /// Create a row carrying only the fields the filters look at.
    pub fn new(
        job_id: impl Into<String>,
        job_name: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Row {
            job_id: job_id.into(),
            job_name: job_name.into(),
            state: state.into(),
            ..Default::default()
        }
    }

    /// Cell values in [`COLUMNS`] order.
    pub fn values(&self) -> [&str; 12] {
        [
            &self.job_id,
            &self.user,
            &self.account,
            &self.job_name,
            &self.node_list,
            &self.alloc_cpus,
            &self.alloc_tres,
            &self.max_vm_size,
            &self.max_rss,
            &self.start,
            &self.elapsed,
            &self.state,
        ]
    }
}
