use super::{json_pretty, load, EXIT_SUCCESS};
use patchwork_pbxproj::remove_dependencies_from_project;
use std::path::{Path, PathBuf};

pub fn run(
    config_path: Option<&Path>,
    manifest: Option<PathBuf>,
    dry_run: bool,
    json: bool,
) -> Result<u8, String> {
    let config = load(config_path)?;
    let manifest = manifest.unwrap_or(config.project.manifest);
    let deps = &config.dependencies.remove;

    let report = remove_dependencies_from_project(
        &manifest,
        deps,
        &config.dependencies.extra_patterns,
        dry_run,
    )
    .map_err(|e| match e {
        patchwork_pbxproj::PatchError::InvalidPattern { .. } => format!("config error: {e}"),
        other => other.to_string(),
    })?;

    if json {
        let payload = serde_json::json!({
            "manifest": manifest,
            "dry_run": dry_run,
            "dependencies": deps.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(),
            "patterns": report.patterns,
            "removed": report.removed,
            "collapsed_blank_lines": report.collapsed_blank_lines,
        });
        println!("{}", json_pretty(&payload)?);
        return Ok(EXIT_SUCCESS);
    }

    let verb = if dry_run { "would remove" } else { "removed" };
    println!(
        "{verb} {} record(s) for {} dependenc{} from {}",
        report.removed,
        deps.len(),
        if deps.len() == 1 { "y" } else { "ies" },
        manifest.display()
    );
    for dep in deps {
        println!("  - {}", dep.name);
    }
    Ok(EXIT_SUCCESS)
}
