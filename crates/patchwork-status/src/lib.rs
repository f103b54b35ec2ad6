//! Local workflow status report.
//!
//! Scans a directory of CI workflow definitions (`*.yml` / `*.yaml`), pulls the
//! `name:` of each, and renders a plain-text checklist report together with the
//! latest git commit and a list of known failure signatures.

pub mod git;
pub mod report;
pub mod scan;

pub use git::latest_commit;
pub use report::{render_report, ReportContext};
pub use scan::{parse_workflow_name, scan_workflows, WorkflowSummary};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("failed to read workflow directory {path}: {source}")]
    ReadDir {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
