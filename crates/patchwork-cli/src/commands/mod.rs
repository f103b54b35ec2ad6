pub mod add_files;
pub mod ci_status;
pub mod completions;
pub mod init;
pub mod man_pages;
pub mod prune_deps;
pub mod swatches;
pub mod workflows;

use indicatif::{ProgressBar, ProgressStyle};
use patchwork_schema::{load_config, Config, DEFAULT_CONFIG_FILE};
use std::path::Path;
use std::time::Duration;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_MARKER_ERROR: u8 = 2;
pub const EXIT_CONFIG_ERROR: u8 = 3;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn config_path(explicit: Option<&Path>) -> &Path {
    explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE))
}

/// Load the configuration. An explicitly passed file must exist; the default
/// one is optional and the built-in values apply without it.
pub fn load(explicit: Option<&Path>) -> Result<Config, String> {
    let path = config_path(explicit);
    let config =
        load_config(path, explicit.is_some()).map_err(|e| format!("config error: {e}"))?;
    tracing::debug!("configuration loaded (file: {})", path.display());
    Ok(config)
}

/// Re-check a configuration after command-line overrides were applied.
pub fn revalidate(config: &Config) -> Result<(), String> {
    config.validate().map_err(|e| format!("config error: {e}"))
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .expect("valid template")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(msg.to_owned());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn spin_ok(pb: &ProgressBar, msg: &str) {
    pb.set_style(ProgressStyle::with_template("{msg}").expect("valid template"));
    pb.finish_with_message(format!("✓ {msg}"));
}

pub fn spin_fail(pb: &ProgressBar, msg: &str) {
    pb.set_style(ProgressStyle::with_template("{msg}").expect("valid template"));
    pb.finish_with_message(format!("✗ {msg}"));
}

pub fn progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
            .expect("valid template"),
    );
    pb
}

/// Highlight a CI conclusion or a patch outcome for terminal output.
pub fn colorize_outcome(outcome: &str) -> String {
    use console::Style;
    match outcome {
        "success" => Style::new().green().apply_to(outcome).to_string(),
        "failure" | "missing" => Style::new().red().bold().apply_to(outcome).to_string(),
        "pending" => Style::new().yellow().apply_to(outcome).to_string(),
        "cancelled" | "skipped" => Style::new().dim().apply_to(outcome).to_string(),
        other => other.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_pretty_serializes_string() {
        let val = serde_json::json!({"key": "value"});
        let result = json_pretty(&val).unwrap();
        assert!(result.contains("\"key\""));
        assert!(result.contains("\"value\""));
    }

    #[test]
    fn colorize_outcome_keeps_text() {
        for outcome in ["success", "failure", "pending", "cancelled", "skipped", "missing"] {
            assert!(colorize_outcome(outcome).contains(outcome));
        }
        assert_eq!(colorize_outcome("neutral"), "neutral");
    }

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(EXIT_SUCCESS, EXIT_FAILURE);
        assert_ne!(EXIT_FAILURE, EXIT_MARKER_ERROR);
        assert_ne!(EXIT_MARKER_ERROR, EXIT_CONFIG_ERROR);
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(load(Some(&missing)).unwrap_err().starts_with("config error:"));
    }

    #[test]
    fn explicit_config_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patchwork.toml");
        std::fs::write(&path, "[ci]\nrepo = \"acme/app\"\nlimit = 2\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.ci.repo, "acme/app");
        assert_eq!(config.ci.limit, 2);
    }

    #[test]
    fn spinner_creates_progress_bar() {
        let pb = spinner("testing...");
        spin_ok(&pb, "done");
        let pb = spinner("testing...");
        spin_fail(&pb, "failed");
    }
}
