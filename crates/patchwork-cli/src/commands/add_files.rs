use super::{colorize_outcome, json_pretty, load, EXIT_SUCCESS};
use patchwork_pbxproj::{add_files_to_project, ApplyOptions};
use std::path::{Path, PathBuf};

pub fn run(
    config_path: Option<&Path>,
    manifest: Option<PathBuf>,
    options: ApplyOptions,
    json: bool,
) -> Result<u8, String> {
    let config = load(config_path)?;
    let manifest = manifest.unwrap_or(config.project.manifest);
    let files = &config.project.files;

    let report = add_files_to_project(&manifest, files, &config.project.groups, options)
        .map_err(|e| e.to_string())?;

    if json {
        let payload = serde_json::json!({
            "manifest": manifest,
            "dry_run": options.dry_run,
            "files": files.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            "inserted": report.total_inserted(),
            "records": report.inserted,
            "missing_markers": report.missing_markers,
        });
        println!("{}", json_pretty(&payload)?);
        return Ok(EXIT_SUCCESS);
    }

    let verb = if options.dry_run { "would add" } else { "added" };
    println!(
        "{verb} {} record(s) for {} file(s) to {}",
        report.total_inserted(),
        files.len(),
        manifest.display()
    );
    for (kind, count) in &report.inserted {
        println!("  {count:>3}  after {}", kind.marker());
    }
    for marker in &report.missing_markers {
        println!("  {}  {marker}", colorize_outcome("missing"));
    }
    if !options.dry_run && report.total_inserted() > 0 {
        println!("next: open the project in Xcode and build to verify the new files");
    }
    Ok(EXIT_SUCCESS)
}
