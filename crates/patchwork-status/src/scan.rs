use crate::StatusError;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

const WORKFLOW_EXTENSIONS: &[&str] = &[".yml", ".yaml"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowSummary {
    pub file: String,
    pub name: String,
    pub path: PathBuf,
}

fn is_workflow_file(name: &str) -> bool {
    WORKFLOW_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn name_from_line(line: &str) -> Option<String> {
    let value = line.strip_prefix("name:")?;
    Some(value.trim().trim_matches(['"', '\'']).to_owned())
}

/// Workflow name from the first line starting with `name:`.
///
/// Returns `Unknown` when no such line exists and `Error: <reason>` when the
/// file cannot be read. Only top-level keys count: indented `name:` lines
/// (job or step names) are ignored.
pub fn parse_workflow_name(path: &Path) -> String {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => return format!("Error: {e}"),
    };
    for line in BufReader::new(file).lines() {
        match line {
            Ok(line) => {
                if let Some(name) = name_from_line(&line) {
                    return name;
                }
            }
            Err(e) => return format!("Error: {e}"),
        }
    }
    "Unknown".to_owned()
}

/// All workflow files in `dir`, sorted by file name.
///
/// A missing directory yields an empty list.
pub fn scan_workflows(dir: &Path) -> Result<Vec<WorkflowSummary>, StatusError> {
    if !dir.exists() {
        debug!("workflow directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }
    let entries = std::fs::read_dir(dir).map_err(|source| StatusError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .filter(|name| is_workflow_file(name))
        .collect();
    files.sort();

    Ok(files
        .into_iter()
        .map(|file| {
            let path = dir.join(&file);
            let name = parse_workflow_name(&path);
            debug!("workflow {file}: {name}");
            WorkflowSummary { file, name, path }
        })
        .collect())
}
