//! Building and running the `sacct` query.

use std::process::Command;

use regex::Regex;
use tracing::{debug, warn};

use super::table::parse_table;
use super::window::TimeWindow;
use crate::data::{Row, COLUMNS};
use crate::error::SacctError;
use crate::Result;

/// Profile sourced before `sacct` on a remote login so cluster modules resolve.
const REMOTE_PROFILE: &str = "/etc/profile";

/// Where the accounting query runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExecutionTarget {
    /// Run `sacct` on this machine
    #[default]
    Local,
    /// Run `sacct` through `ssh <host>`
    Remote(String),
}

impl ExecutionTarget {
    /// Decide the target once at startup.
    ///
    /// Without a remote host the query runs locally. With one, it still runs
    /// locally when `hostname` matches `head_node`, i.e. we already are on the
    /// cluster's head node.
    pub fn detect(remote: Option<&str>, head_node: Option<&str>, hostname: &str) -> Result<Self> {
        let Some(host) = remote.filter(|h| !h.trim().is_empty()) else {
            return Ok(ExecutionTarget::Local);
        };

        if let Some(pattern) = head_node {
            let head_node = Regex::new(pattern).map_err(|e| SacctError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            if head_node.is_match(hostname) {
                debug!(hostname, "running on head node, skipping ssh");
                return Ok(ExecutionTarget::Local);
            }
        }

        Ok(ExecutionTarget::Remote(host.trim().to_string()))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ExecutionTarget::Remote(_))
    }
}

/// Accounting query for one time window.
#[derive(Debug, Clone)]
pub struct QueryCommand {
    /// Time range to query
    pub window: TimeWindow,
    /// Query every user's jobs, not only the caller's
    pub all_users: bool,
    /// Unit for memory columns
    pub units: String,
    /// Where to run
    pub target: ExecutionTarget,
}

impl QueryCommand {
    pub fn new(window: TimeWindow) -> Self {
        QueryCommand {
            window,
            all_users: false,
            units: "G".to_string(),
            target: ExecutionTarget::Local,
        }
    }

    pub fn all_users(mut self, all: bool) -> Self {
        self.all_users = all;
        self
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn target(mut self, target: ExecutionTarget) -> Self {
        self.target = target;
        self
    }

    /// Arguments passed to `sacct`.
    pub fn sacct_args(&self) -> Vec<String> {
        let mut args = vec!["-P".to_string()];
        if self.all_users {
            args.push("-a".to_string());
        }
        args.extend(self.window.to_args());
        args.push(format!("--format={}", COLUMNS.join(",")));
        args.push(format!("--units={}", self.units));
        args
    }

    /// The query as one shell line, as run on the remote side.
    pub fn shell_line(&self) -> String {
        let mut line = String::from("sacct");
        for arg in self.sacct_args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }

    /// Build the process to spawn for the configured target.
    pub fn to_command(&self) -> Command {
        match &self.target {
            ExecutionTarget::Local => {
                let mut command = Command::new("sacct");
                command.args(self.sacct_args());
                command
            }
            ExecutionTarget::Remote(host) => {
                let mut command = Command::new("ssh");
                command
                    .arg(host)
                    .arg(format!("source {REMOTE_PROFILE}; {}", self.shell_line()));
                command
            }
        }
    }

    /// Run the query and return its raw stdout.
    ///
    /// Bytes are returned untouched so that invalid UTF-8 is rejected by the
    /// table decoder instead of being replaced.
    pub fn run(&self) -> Result<Vec<u8>> {
        debug!(target_kind = ?self.target, command = %self.shell_line(), "running accounting query");

        let output = self.to_command().output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = %output.status, "accounting query failed");
            return Err(SacctError::QueryFailed {
                command: self.shell_line(),
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(output.stdout)
    }

    /// Run the query and decode its output into rows.
    pub fn fetch(&self) -> Result<Vec<Row>> {
        let raw = self.run()?;
        parse_table(raw.as_slice())
    }
}
