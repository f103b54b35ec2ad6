use crate::{read_manifest, write_atomic, ApplyOptions, PatchError};
use patchwork_schema::{FileEntry, GroupRule};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

pub const BUILD_FILE_MARKER: &str = "/* Begin PBXBuildFile section */";
pub const FILE_REFERENCE_MARKER: &str = "/* Begin PBXFileReference section */";
pub const SOURCES_PHASE_MARKER: &str = "/* Sources */ = {";

/// The kinds of record the patcher adds, one per marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "group", rename_all = "snake_case")]
pub enum MarkerKind {
    BuildFile,
    FileReference,
    SourcesPhase,
    Group(String),
}

impl MarkerKind {
    pub fn marker(&self) -> String {
        match self {
            Self::BuildFile => BUILD_FILE_MARKER.to_owned(),
            Self::FileReference => FILE_REFERENCE_MARKER.to_owned(),
            Self::SourcesPhase => SOURCES_PHASE_MARKER.to_owned(),
            Self::Group(name) => group_marker(name),
        }
    }

    fn fragment(&self, file: &FileEntry) -> String {
        let name = &file.name;
        let build_id = &file.build_file_id;
        let ref_id = &file.file_ref_id;
        match self {
            Self::BuildFile => format!(
                "\n\t\t{build_id} /* {name} in Sources */ = {{isa = PBXBuildFile; fileRef = {ref_id} /* {name} */; }};"
            ),
            Self::FileReference => format!(
                "\n\t\t{ref_id} /* {name} */ = {{isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = {name}; sourceTree = \"<group>\"; }};"
            ),
            Self::SourcesPhase => format!("\n\t\t\t\t{build_id} /* {name} in Sources */,"),
            Self::Group(_) => format!("\n\t\t\t\t{ref_id} /* {name} */,"),
        }
    }
}

pub fn group_marker(name: &str) -> String {
    format!("/* {name} */ = {{")
}

/// Outcome of one insertion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsertReport {
    /// Records spliced per marker, in application order.
    pub inserted: Vec<(MarkerKind, usize)>,
    /// Markers that were needed but not found; their records were skipped.
    pub missing_markers: Vec<String>,
}

impl InsertReport {
    pub fn total_inserted(&self) -> usize {
        self.inserted.iter().map(|(_, n)| n).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_markers.is_empty()
    }
}

/// Insert `fragment` right after the first occurrence of `marker`.
fn splice_after(doc: &mut String, marker: &str, fragment: &str) -> bool {
    match doc.find(marker) {
        Some(at) => {
            doc.insert_str(at + marker.len(), fragment);
            true
        }
        None => false,
    }
}

fn apply_marker(doc: &mut String, kind: &MarkerKind, files: &[&FileEntry], report: &mut InsertReport) {
    if files.is_empty() {
        return;
    }
    let marker = kind.marker();
    if !doc.contains(&marker) {
        warn!("marker not found, skipping {} record(s): {marker}", files.len());
        report.missing_markers.push(marker);
        return;
    }
    let mut count = 0;
    for file in files {
        if splice_after(doc, &marker, &kind.fragment(file)) {
            debug!("inserted {} after {marker}", file.name);
            count += 1;
        }
    }
    report.inserted.push((kind.clone(), count));
}

/// Register `files` in a manifest document.
///
/// For each marker kind in turn, every descriptor's record is spliced directly
/// after the first occurrence of that marker, so later descriptors end up
/// textually before earlier ones. A file joins every group whose name appears
/// in its path. Absent markers are skipped and listed in the report. Entries
/// that already exist are not detected: patching twice duplicates them.
pub fn insert_file_entries(
    doc: &str,
    files: &[FileEntry],
    groups: &[GroupRule],
) -> (String, InsertReport) {
    let mut out = doc.to_owned();
    let mut report = InsertReport::default();
    let all: Vec<&FileEntry> = files.iter().collect();

    for kind in [
        MarkerKind::BuildFile,
        MarkerKind::FileReference,
        MarkerKind::SourcesPhase,
    ] {
        apply_marker(&mut out, &kind, &all, &mut report);
    }

    for group in groups {
        let members: Vec<&FileEntry> = files.iter().filter(|f| group.matches(&f.path)).collect();
        apply_marker(&mut out, &MarkerKind::Group(group.name.clone()), &members, &mut report);
    }

    (out, report)
}

/// Read the manifest at `path`, register `files`, and write it back.
pub fn add_files_to_project(
    path: &Path,
    files: &[FileEntry],
    groups: &[GroupRule],
    options: ApplyOptions,
) -> Result<InsertReport, PatchError> {
    let content = read_manifest(path)?;
    let (patched, report) = insert_file_entries(&content, files, groups);

    if options.require_markers && !report.is_complete() {
        return Err(PatchError::MissingMarkers(report.missing_markers));
    }
    if options.dry_run {
        debug!("dry run, leaving {} untouched", path.display());
        return Ok(report);
    }

    write_atomic(path, &patched)?;
    info!(
        "added {} record(s) for {} file(s) to {}",
        report.total_inserted(),
        files.len(),
        path.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "/* Begin PBXBuildFile section */\n/* End PBXBuildFile section */\n\
/* Begin PBXFileReference section */\n/* End PBXFileReference section */\n\
\t\tG1 /* Models */ = {\n\t\t\tchildren = (\n\t\t\t);\n\t\t};\n\
\t\tS1 /* Sources */ = {\n\t\t\tfiles = (\n\t\t\t);\n\t\t};\n";

    fn model(name: &str, id: u32) -> FileEntry {
        FileEntry::new(
            name,
            &format!("App/Models/{name}"),
            &format!("R{id}"),
            &format!("B{id}"),
        )
    }

    #[test]
    fn splice_after_targets_first_occurrence_only() {
        let mut doc = "X|X|".to_owned();
        assert!(splice_after(&mut doc, "X", "+"));
        assert_eq!(doc, "X+|X|");
        assert!(!splice_after(&mut doc, "Y", "+"));
    }

    #[test]
    fn fragments_match_pbxproj_layout() {
        let file = model("Foo.swift", 1);
        assert_eq!(
            MarkerKind::BuildFile.fragment(&file),
            "\n\t\tB1 /* Foo.swift in Sources */ = {isa = PBXBuildFile; fileRef = R1 /* Foo.swift */; };"
        );
        assert_eq!(
            MarkerKind::FileReference.fragment(&file),
            "\n\t\tR1 /* Foo.swift */ = {isa = PBXFileReference; lastKnownFileType = sourcecode.swift; path = Foo.swift; sourceTree = \"<group>\"; };"
        );
        assert_eq!(
            MarkerKind::SourcesPhase.fragment(&file),
            "\n\t\t\t\tB1 /* Foo.swift in Sources */,"
        );
        assert_eq!(
            MarkerKind::Group("Models".to_owned()).fragment(&file),
            "\n\t\t\t\tR1 /* Foo.swift */,"
        );
    }

    #[test]
    fn later_descriptors_land_before_earlier_ones() {
        let files = [model("A.swift", 1), model("B.swift", 2)];
        let (out, _) = insert_file_entries(DOC, &files, &[]);
        let a = out.find("B1 /* A.swift in Sources */ = {").unwrap();
        let b = out.find("B2 /* B.swift in Sources */ = {").unwrap();
        assert!(b < a);
    }

    #[test]
    fn report_counts_each_marker() {
        let files = [model("A.swift", 1), model("B.swift", 2)];
        let groups = [GroupRule::new("Models"), GroupRule::new("Views")];
        let (_, report) = insert_file_entries(DOC, &files, &groups);
        assert_eq!(
            report.inserted,
            vec![
                (MarkerKind::BuildFile, 2),
                (MarkerKind::FileReference, 2),
                (MarkerKind::SourcesPhase, 2),
                (MarkerKind::Group("Models".to_owned()), 2),
            ]
        );
        // No file matches Views, so its absent marker is not required.
        assert!(report.is_complete());
        assert_eq!(report.total_inserted(), 8);
    }

    #[test]
    fn missing_marker_is_reported_not_fatal() {
        let doc = DOC.replace(SOURCES_PHASE_MARKER, "/* Other */ = {");
        let (out, report) = insert_file_entries(&doc, &[model("A.swift", 1)], &[]);
        assert_eq!(report.missing_markers, vec![SOURCES_PHASE_MARKER.to_owned()]);
        assert!(!out.contains("B1 /* A.swift in Sources */,"));
        assert!(out.contains("B1 /* A.swift in Sources */ = {"));
    }

    #[test]
    fn empty_descriptor_list_leaves_document_unchanged() {
        let (out, report) = insert_file_entries(DOC, &[], &[GroupRule::new("Models")]);
        assert_eq!(out, DOC);
        assert_eq!(report, InsertReport::default());
    }

    #[test]
    fn add_files_dry_run_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        std::fs::write(&path, DOC).unwrap();
        let options = ApplyOptions {
            dry_run: true,
            require_markers: false,
        };
        let report = add_files_to_project(&path, &[model("A.swift", 1)], &[], options).unwrap();
        assert_eq!(report.total_inserted(), 3);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DOC);
    }

    #[test]
    fn require_markers_refuses_to_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project.pbxproj");
        std::fs::write(&path, "no markers here\n").unwrap();
        let options = ApplyOptions {
            dry_run: false,
            require_markers: true,
        };
        let err = add_files_to_project(&path, &[model("A.swift", 1)], &[], options).unwrap_err();
        assert!(matches!(err, PatchError::MissingMarkers(ref m) if m.len() == 3));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "no markers here\n");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = add_files_to_project(
            &dir.path().join("absent.pbxproj"),
            &[model("A.swift", 1)],
            &[],
            ApplyOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PatchError::Read { .. }));
    }
}
