//! Text patching for Xcode project manifests (`project.pbxproj`).
//!
//! The manifest is treated as unstructured text. [`insert`] splices file
//! registration records directly after literal section markers, and [`prune`]
//! deletes package dependency records matched by regular expressions. Both
//! expose a pure `&str -> String` transformation plus a file-level wrapper that
//! reads the manifest once and rewrites it whole.

pub mod insert;
pub mod prune;

pub use insert::{
    add_files_to_project, insert_file_entries, InsertReport, MarkerKind, BUILD_FILE_MARKER,
    FILE_REFERENCE_MARKER, SOURCES_PHASE_MARKER,
};
pub use prune::{
    collapse_blank_lines, compile_patterns, dependency_patterns, prune_dependencies,
    remove_dependencies_from_project, PruneReport,
};

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("manifest marker missing: {}", .0.join(", "))]
    MissingMarkers(Vec<String>),
    #[error("invalid dependency pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// How a file-level patch is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    /// Compute the result but leave the file untouched.
    pub dry_run: bool,
    /// Fail before writing if any expected marker is absent.
    pub require_markers: bool,
}

pub(crate) fn read_manifest(path: &Path) -> Result<String, PatchError> {
    std::fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the file at `dest` with `content` via a synced temp file.
///
/// Symlinks are followed so the link target is rewritten and the link kept.
/// An existing file keeps its permissions.
pub fn write_atomic(dest: &Path, content: &str) -> Result<(), PatchError> {
    let target = std::fs::canonicalize(dest).unwrap_or_else(|_| dest.to_path_buf());
    let write_err = |source| PatchError::Write {
        path: target.clone(),
        source,
    };
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    if let Ok(meta) = std::fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markers_error_lists_all() {
        let e = PatchError::MissingMarkers(vec!["/* Sources */ = {".to_owned(), "/* Views */ = {".to_owned()]);
        let msg = e.to_string();
        assert!(msg.starts_with("manifest marker missing:"));
        assert!(msg.contains("/* Sources */ = {, /* Views */ = {"));
    }

    #[test]
    fn read_manifest_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        let err = read_manifest(&path).unwrap_err();
        assert!(err.to_string().contains("project.pbxproj"));
        assert!(matches!(
            err,
            PatchError::Read { ref source, .. } if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        std::fs::write(&path, "old").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn write_atomic_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patchwork.toml");
        write_atomic(&path, "fresh").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[cfg(unix)]
    #[test]
    fn write_atomic_keeps_mode_and_symlink() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("real.pbxproj");
        std::fs::write(&target, "old").unwrap();
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o644)).unwrap();
        let link = dir.path().join("project.pbxproj");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        write_atomic(&link, "new").unwrap();

        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        let mode = std::fs::metadata(&target).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }
}
