//! Rendering admitted jobs for the terminal or as JSON

use console::{measure_text_width, pad_str, style, Alignment};
use sacctviewlib::{Job, JobTable};

/// Column separator between aligned cells
const GUTTER: &str = "  ";

/// Output format selected with `--output`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn from_arg(value: &str) -> Self {
        match value {
            "json" => OutputMode::Json,
            _ => OutputMode::Text,
        }
    }
}

/// Render jobs in the requested mode
pub fn render(jobs: &[Job], mode: OutputMode) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Text => Ok(render_text(&JobTable::from_jobs(jobs))),
        OutputMode::Json => render_json(jobs),
    }
}

/// Display width of each column: the widest of header and cells
fn column_widths(table: &JobTable) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| measure_text_width(cell))
                .chain(std::iter::once(measure_text_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Render one cell line, right-aligned like the accounting tool's own output
fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad_str(cell, *width, Alignment::Right, None).into_owned())
        .collect::<Vec<_>>()
        .join(GUTTER)
}

/// Render a single numbered job block
pub fn render_table(table: &JobTable) -> String {
    let widths = column_widths(table);
    let mut output = format!("{}\n", style(table.title()).bold());
    output.push_str(&format_line(
        table.headers.iter().map(String::as_str),
        &widths,
    ));
    output.push('\n');
    for row in &table.rows {
        output.push_str(&format_line(row.iter().map(String::as_str), &widths));
        output.push('\n');
    }
    output
}

/// Render all job blocks separated by blank lines; empty when nothing matched
pub fn render_text(tables: &[JobTable]) -> String {
    tables
        .iter()
        .map(render_table)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render jobs as a pretty JSON array
pub fn render_json(jobs: &[Job]) -> Result<String, serde_json::Error> {
    let mut output = serde_json::to_string_pretty(jobs)?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sacctviewlib::Row;

    fn jobs() -> Vec<Job> {
        vec![
            Job::new(
                "5",
                vec![
                    Row::new("5", "hifi_diff_run", "COMPLETED"),
                    Row::new("5.batch", "batch", "COMPLETED"),
                ],
            ),
            Job::new("9", vec![Row::new("9", "other", "FAILED")]),
        ]
    }

    #[test]
    fn test_text_numbers_blocks() {
        console::set_colors_enabled(false);
        let output = render(&jobs(), OutputMode::Text).unwrap();

        assert!(output.contains("--[ 1. job ]"));
        assert!(output.contains("--[ 2. job ]"));
        assert!(output.find("--[ 1. job ]").unwrap() < output.find("--[ 2. job ]").unwrap());
    }

    #[test]
    fn test_text_right_aligns_cells() {
        console::set_colors_enabled(false);
        let table = JobTable::from_job(1, &jobs()[0]);
        let output = render_table(&table);
        let lines: Vec<&str> = output.lines().collect();

        // title, header, two rows
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("  JobID"));
        assert!(lines[2].starts_with("      5"));
        assert!(lines[3].starts_with("5.batch"));
        assert!(lines[2].ends_with("COMPLETED"));
    }

    #[test]
    fn test_column_widths() {
        let table = JobTable::from_job(1, &jobs()[0]);
        let widths = column_widths(&table);

        // JobID: "5.batch" beats the header
        assert_eq!(widths[0], 7);
        // User: all empty, header wins
        assert_eq!(widths[1], 4);
        assert_eq!(widths[3], "hifi_diff_run".len());
    }

    #[test]
    fn test_wide_characters_stay_aligned() {
        console::set_colors_enabled(false);
        let job = Job::new(
            "8",
            vec![
                Row::new("8", "数据处理", "RUNNING"),
                Row::new("8.batch", "batch", "RUNNING"),
            ],
        );
        let output = render_table(&JobTable::from_job(1, &job));
        let widths: Vec<usize> = output.lines().skip(1).map(measure_text_width).collect();

        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(render(&[], OutputMode::Text).unwrap(), "");
    }

    #[test]
    fn test_json_shape() {
        let output = render(&jobs(), OutputMode::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["root"], "5");
        assert_eq!(parsed[0]["rows"][1]["JobID"], "5.batch");
        assert_eq!(parsed[1]["rows"][0]["State"], "FAILED");
    }

    #[test]
    fn test_json_empty() {
        assert_eq!(render(&[], OutputMode::Json).unwrap().trim(), "[]");
    }

    #[test]
    fn test_output_mode_from_arg() {
        assert_eq!(OutputMode::from_arg("json"), OutputMode::Json);
        assert_eq!(OutputMode::from_arg("text"), OutputMode::Text);
    }
}
