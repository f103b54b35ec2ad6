use std::path::Path;
use std::process::Command;

/// `<short hash> <subject>` of HEAD in `repo`.
///
/// Empty when git exits unsuccessfully (not a repository, no commits yet),
/// `Error: <reason>` when git cannot be started.
pub fn latest_commit(repo: &Path) -> String {
    match Command::new("git")
        .args(["log", "-1", "--pretty=format:%h %s"])
        .current_dir(repo)
        .output()
    {
        Ok(out) => {
            if !out.status.success() {
                tracing::debug!(
                    "git log failed: {}",
                    String::from_utf8_lossy(&out.stderr).trim()
                );
            }
            String::from_utf8_lossy(&out.stdout).trim().to_owned()
        }
        Err(e) => format!("Error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_repository_yields_empty_or_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let commit = latest_commit(dir.path());
        assert!(
            commit.is_empty() || commit.starts_with("Error:"),
            "unexpected commit line: {commit}"
        );
        assert!(!commit.contains("fatal"));
    }

    #[test]
    fn missing_directory_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let commit = latest_commit(&dir.path().join("absent"));
        assert!(commit.starts_with("Error:"));
    }
}
