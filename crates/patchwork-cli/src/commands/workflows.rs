use super::{json_pretty, load, EXIT_SUCCESS};
use patchwork_status::{latest_commit, render_report, scan_workflows, ReportContext};
use std::path::{Path, PathBuf};

const REPORT_TITLE: &str = "Workflow Status Report";

pub fn run(config_path: Option<&Path>, dir: Option<PathBuf>, json: bool) -> Result<u8, String> {
    let config = load(config_path)?;
    let dir = dir.unwrap_or(config.workflows.dir);

    let workflows = scan_workflows(&dir).map_err(|e| e.to_string())?;

    if json {
        println!("{}", json_pretty(&workflows)?);
        return Ok(EXIT_SUCCESS);
    }

    let commit = latest_commit(Path::new("."));
    let actions_url = config.ci.actions_url();
    let report = render_report(&ReportContext {
        title: REPORT_TITLE,
        commit: &commit,
        dir: &dir,
        actions_url: &actions_url,
        workflows: &workflows,
        signatures: &config.workflows.failure_signatures,
    });
    print!("{report}");
    Ok(EXIT_SUCCESS)
}
