//! Grouping rows into jobs by root identifier.

use crate::data::Row;

/// Strip a step suffix from a job identifier.
///
/// Everything from the first `.` on is removed; identifiers without a dot
/// are returned unchanged.
pub fn root_of(job_id: &str) -> &str {
    match job_id.split_once('.') {
        Some((root, _)) => root,
        None => job_id,
    }
}

/// Whether `job_id` is `root` itself or one of its steps (`root.<anything>`).
///
/// Matching is anchored at both ends, so root `"12"` never claims `"123"`.
pub fn belongs_to(job_id: &str, root: &str) -> bool {
    match job_id.strip_prefix(root) {
        Some("") => true,
        Some(rest) => rest.starts_with('.'),
        None => false,
    }
}

/// All rows of the job identified by `root`, in table order.
pub fn rows_for_root(table: &[Row], root: &str) -> Vec<Row> {
    table
        .iter()
        .filter(|row| belongs_to(&row.job_id, root))
        .cloned()
        .collect()
}
