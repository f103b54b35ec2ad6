use crate::{CiError, RunRecord};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// `2025-01-02 08:30:00 UTC` for RFC 3339 input, the raw text otherwise.
pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_owned(),
        |dt| {
            dt.with_timezone(&Utc)
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
        },
    )
}

/// Render the most recent `limit` runs. An empty list renders one line.
pub fn render_runs(repo: &str, runs: &[RunRecord], limit: usize) -> String {
    if runs.is_empty() {
        return "no workflow runs found\n".to_owned();
    }
    let mut out = String::new();
    let _ = writeln!(out, "Recent workflow runs for {repo}:");
    for (i, run) in runs.iter().take(limit).enumerate() {
        let conclusion = run.conclusion.as_deref().unwrap_or("pending");
        let name = if run.name.is_empty() {
            "(unnamed run)"
        } else {
            run.name.as_str()
        };
        let _ = writeln!(out, "\n{}. {name}", i + 1);
        let _ = writeln!(out, "   Status: {} ({conclusion})", run.status);
        let _ = writeln!(out, "   Created: {}", format_timestamp(&run.created_at));
        let _ = writeln!(out, "   URL: {}", run.html_url);
    }
    out
}

/// One-line message for a failed fetch.
pub fn render_error(err: &CiError) -> String {
    match err {
        CiError::Status { code, .. } => {
            format!("error: failed to fetch workflow runs (HTTP {code})")
        }
        other => format!("error: failed to fetch workflow runs: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(name: &str, conclusion: Option<&str>) -> RunRecord {
        RunRecord {
            name: name.to_owned(),
            status: "completed".to_owned(),
            conclusion: conclusion.map(str::to_owned),
            created_at: "2025-01-02T08:30:00Z".to_owned(),
            html_url: format!("https://example.invalid/{name}"),
        }
    }

    #[test]
    fn timestamp_is_normalized_to_utc() {
        assert_eq!(
            format_timestamp("2025-01-02T10:30:00+02:00"),
            "2025-01-02 08:30:00 UTC"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn empty_runs_render_single_line() {
        assert_eq!(render_runs("acme/app", &[], 5), "no workflow runs found\n");
    }

    #[test]
    fn renders_at_most_limit_runs() {
        let runs: Vec<RunRecord> = (0..7).map(|i| run(&format!("run{i}"), Some("success"))).collect();
        let text = render_runs("acme/app", &runs, 5);
        assert!(text.starts_with("Recent workflow runs for acme/app:"));
        assert!(text.contains("5. run4"));
        assert!(!text.contains("run5"));
        assert!(text.contains("   Status: completed (success)"));
        assert!(text.contains("   Created: 2025-01-02 08:30:00 UTC"));
    }

    #[test]
    fn missing_conclusion_is_pending() {
        let text = render_runs("acme/app", &[run("Build", None)], 5);
        assert!(text.contains("(pending)"));
    }

    #[test]
    fn empty_name_renders_placeholder() {
        let text = render_runs("acme/app", &[run("", Some("success"))], 5);
        assert!(text.contains("\n1. (unnamed run)\n"));
    }

    #[test]
    fn status_errors_show_code() {
        let err = CiError::Status {
            code: 403,
            url: "https://api.github.com/x".to_owned(),
        };
        assert_eq!(
            render_error(&err),
            "error: failed to fetch workflow runs (HTTP 403)"
        );
        let err = CiError::Http("connection refused".to_owned());
        assert!(render_error(&err).ends_with("HTTP error: connection refused"));
    }
}
