//! # sacctview
//!
//! Filter Slurm `sacct` output by job name and state and display whole jobs.
//!
//! ## Overview
//!
//! sacctview is built on top of sacctviewlib. It queries the accounting
//! database for a time window, groups rows into jobs (the job plus all its
//! steps), keeps the jobs whose name and states match, and prints each one
//! as a numbered table.
//!
//! The query runs locally, or through `ssh` when `--remote` is given and
//! the local hostname does not match `--head-node`.
//!
//! ## Usage
//!
//! ```bash
//! # Own jobs from today
//! sacctview
//!
//! # All jobs that ran on 2020-11-20
//! sacctview -a -s 2020-11-20 -e 2020-11-21
//!
//! # ... whose name contains "hifi_diff"
//! sacctview -a -s 2020-11-20 -e 2020-11-21 -n hifi_diff
//!
//! # ... excluding jobs with any cancelled step
//! sacctview -a -s 2020-11-20 -e 2020-11-21 -n hifi_diff -x CANC
//!
//! # Query the cluster from a workstation
//! sacctview --remote cluster.example.org
//!
//! # Filter saved `sacct -P` output
//! sacctview --input sacct.txt -o json
//! ```
//!
//! Logging goes to stderr and is controlled with `SACCTVIEW_LOG`
//! (`EnvFilter` syntax) or `--verbose`.

mod render;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::{Arg, ArgAction, ArgMatches, Command};
use sacctviewlib::filter::DEFAULT_INCLUDE;
use sacctviewlib::{
    parse_table, read_table_file, ExecutionTarget, FilterEngine, NameFilter, QueryCommand, Row,
    StateFilter, TimeWindow,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use render::OutputMode;

/// Environment variable holding the log filter
const LOG_ENV: &str = "SACCTVIEW_LOG";

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sacctview")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Filter SLURM sacct output by job name and state and display whole jobs")
        .arg(
            Arg::new("starttime")
                .short('s')
                .long("starttime")
                .value_name("TIME")
                .help("Start of the window - format yyyy-mm-dd or yyyy-mm-ddThh:mm [default: today 00:00]"),
        )
        .arg(
            Arg::new("endtime")
                .short('e')
                .long("endtime")
                .value_name("TIME")
                .help("End of the window - format yyyy-mm-dd or yyyy-mm-ddThh:mm [default: now]"),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .action(ArgAction::SetTrue)
                .help("Display jobs for all user accounts"),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("REGEX")
                .default_value("")
                .help("Regular expression; jobs with a row whose name matches are displayed"),
        )
        .arg(
            Arg::new("ignore-case")
                .long("ignore-case")
                .action(ArgAction::SetTrue)
                .help("Match --name case-insensitively"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .value_name("REGEX")
                .default_value(DEFAULT_INCLUDE)
                .help("Job states; jobs with any row in one of these states are displayed"),
        )
        .arg(
            Arg::new("exclude")
                .short('x')
                .long("exclude")
                .value_name("REGEX")
                .help("Job states; jobs with any row in one of these states are not displayed"),
        )
        .arg(
            Arg::new("units")
                .long("units")
                .value_name("UNIT")
                .value_parser(["K", "M", "G", "T", "P"])
                .default_value("G")
                .help("Unit for the memory columns"),
        )
        .arg(
            Arg::new("remote")
                .long("remote")
                .value_name("HOST")
                .env("SACCTVIEW_REMOTE")
                .help("Run sacct on this host through ssh"),
        )
        .arg(
            Arg::new("head-node")
                .long("head-node")
                .value_name("REGEX")
                .env("SACCTVIEW_HEAD_NODE")
                .help("Run sacct locally when the local hostname matches, even with --remote"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("FILE")
                .help("Read saved `sacct -P` output instead of querying ('-' for stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log debug information to stderr"),
        )
}

/// Install the stderr log subscriber
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Resolve where sacct runs; only consults the hostname when a remote is set
fn execution_target(
    remote: Option<&str>,
    head_node: Option<&str>,
) -> anyhow::Result<ExecutionTarget> {
    let hostname = match remote {
        Some(_) => whoami::fallible::hostname().unwrap_or_default(),
        None => String::new(),
    };
    let target = ExecutionTarget::detect(remote, head_node, &hostname)?;
    debug!(target_kind = ?target, hostname = hostname.as_str(), "execution target decided");
    Ok(target)
}

/// Obtain the accounting rows, from a saved file or a fresh query
fn load_rows(matches: &ArgMatches, window: TimeWindow) -> anyhow::Result<Vec<Row>> {
    if let Some(input) = matches.get_one::<String>("input") {
        let rows = if input == "-" {
            parse_table(io::stdin().lock())?
        } else {
            read_table_file(input).with_context(|| format!("reading '{input}'"))?
        };
        return Ok(rows);
    }

    let target = execution_target(
        matches.get_one::<String>("remote").map(String::as_str),
        matches.get_one::<String>("head-node").map(String::as_str),
    )?;
    Ok(build_query(matches, window, target).fetch()?)
}

/// Accounting query for the parsed flags
fn build_query(
    matches: &ArgMatches,
    window: TimeWindow,
    target: ExecutionTarget,
) -> QueryCommand {
    QueryCommand::new(window)
        .all_users(matches.get_flag("all"))
        .units(
            matches
                .get_one::<String>("units")
                .map(String::as_str)
                .unwrap_or("G"),
        )
        .target(target)
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let window = TimeWindow::resolve(
        matches.get_one::<String>("starttime").map(String::as_str),
        matches.get_one::<String>("endtime").map(String::as_str),
        Local::now().naive_local(),
    )?;

    // Compile every pattern before touching the cluster
    let name = NameFilter::with_case(
        matches
            .get_one::<String>("name")
            .map(String::as_str)
            .unwrap_or(""),
        !matches.get_flag("ignore-case"),
    )?;
    let states = StateFilter::new(
        matches
            .get_one::<String>("include")
            .map(String::as_str)
            .unwrap_or(DEFAULT_INCLUDE),
        matches.get_one::<String>("exclude").map(String::as_str),
    )?;

    let rows = load_rows(matches, window)?;
    let jobs = FilterEngine::new(name, states).run(&rows);

    let mode = OutputMode::from_arg(
        matches
            .get_one::<String>("output")
            .map(String::as_str)
            .unwrap_or("text"),
    );
    Ok(render::render(&jobs, mode)?)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
