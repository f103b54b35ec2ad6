use super::{
    colorize_outcome, json_pretty, load, revalidate, spin_fail, spin_ok, spinner, EXIT_SUCCESS,
};
use patchwork_ci::{render_error, render_runs, CiConfig, HttpRunSource, RunRecord, RunSource};
use std::collections::BTreeMap;
use std::path::Path;

/// Command-line values that replace the `[ci]` section.
#[derive(Debug, Default)]
pub struct Overrides {
    pub repo: Option<String>,
    pub api_base: Option<String>,
    pub limit: Option<usize>,
}

fn summarize(runs: &[RunRecord]) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for run in runs {
        *counts
            .entry(run.conclusion.as_deref().unwrap_or("pending"))
            .or_default() += 1;
    }
    counts
        .iter()
        .map(|(outcome, n)| format!("{n} {}", colorize_outcome(outcome)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fetch and print recent runs. Fetch failures are reported on stdout and
/// still exit 0.
pub fn run(config_path: Option<&Path>, overrides: Overrides, json: bool) -> Result<u8, String> {
    let mut config = load(config_path)?;
    if let Some(repo) = overrides.repo {
        config.ci.repo = repo;
    }
    if let Some(api_base) = overrides.api_base {
        config.ci.api_base = api_base;
    }
    if let Some(limit) = overrides.limit {
        config.ci.limit = limit;
    }
    revalidate(&config)?;

    let ci = CiConfig::from_section(&config.ci).map_err(|e| format!("config error: {e}"))?;
    let limit = config.ci.limit;
    let source = HttpRunSource::new(ci);

    let pb = (!json).then(|| spinner(&format!("fetching runs for {}", config.ci.repo)));
    let result = source.recent_runs(limit);
    if let Some(pb) = &pb {
        match &result {
            Ok(runs) => spin_ok(pb, &format!("fetched {} run(s)", runs.len())),
            Err(_) => spin_fail(pb, "request failed"),
        }
    }

    match result {
        Ok(runs) if json => println!("{}", json_pretty(&runs)?),
        Ok(runs) => {
            print!("{}", render_runs(&config.ci.repo, &runs, limit));
            if !runs.is_empty() {
                println!("\nsummary: {}", summarize(&runs));
            }
        }
        Err(e) if json => {
            let payload = serde_json::json!({ "error": render_error(&e) });
            println!("{}", json_pretty(&payload)?);
        }
        Err(e) => println!("{}", render_error(&e)),
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(conclusion: Option<&str>) -> RunRecord {
        RunRecord {
            name: "Build".to_owned(),
            status: "completed".to_owned(),
            conclusion: conclusion.map(str::to_owned),
            created_at: String::new(),
            html_url: String::new(),
        }
    }

    #[test]
    fn summary_counts_each_conclusion() {
        console::set_colors_enabled(false);
        let runs = [
            run_with(Some("success")),
            run_with(Some("failure")),
            run_with(Some("success")),
            run_with(None),
        ];
        assert_eq!(summarize(&runs), "1 failure, 1 pending, 2 success");
    }
}
