use crate::{read_manifest, write_atomic, PatchError};
use patchwork_schema::DependencyEntry;
use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    /// Patterns applied.
    pub patterns: usize,
    /// Record blocks deleted across all patterns.
    pub removed: usize,
    /// Whether blank-line normalization changed anything.
    pub collapsed_blank_lines: bool,
}

/// Regular expressions matching every record of `deps`.
///
/// Each dependency yields its package product record and list reference, plus
/// the framework build-file record and list reference when it has one. Names
/// and ids are escaped, and each pattern swallows the whitespace before the
/// record so the whole line disappears.
pub fn dependency_patterns(deps: &[DependencyEntry]) -> Vec<String> {
    let mut patterns = Vec::new();
    for dep in deps {
        let name = regex::escape(&dep.name);
        let product = regex::escape(&dep.product_id);
        if let Some(bf) = &dep.build_file {
            let id = regex::escape(&bf.id);
            let product_ref = regex::escape(&bf.product_ref);
            patterns.push(format!(
                r"\s*{id} /\* {name} in Frameworks \*/ = \{{isa = PBXBuildFile; productRef = {product_ref} /\* {name} \*/; \}};"
            ));
            patterns.push(format!(r"\s*{id} /\* {name} in Frameworks \*/,"));
        }
        patterns.push(format!(r"\s*{product} /\* {name} \*/ = \{{[^}}]*\}};"));
        patterns.push(format!(r"\s*{product} /\* {name} \*/,"));
    }
    patterns
}

/// Compile the generated patterns for `deps` followed by `extra`.
pub fn compile_patterns(
    deps: &[DependencyEntry],
    extra: &[String],
) -> Result<Vec<Regex>, PatchError> {
    dependency_patterns(deps)
        .iter()
        .chain(extra)
        .map(|p| {
            Regex::new(p).map_err(|source| PatchError::InvalidPattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Replace every run of three or more newlines with a single blank line.
pub fn collapse_blank_lines(doc: &str) -> Cow<'_, str> {
    BLANK_RUN.replace_all(doc, "\n\n")
}

/// Delete all matches of `patterns`, then normalize blank lines.
pub fn prune_dependencies(doc: &str, patterns: &[Regex]) -> (String, PruneReport) {
    let mut out = doc.to_owned();
    let mut report = PruneReport {
        patterns: patterns.len(),
        ..PruneReport::default()
    };
    for re in patterns {
        let hits = re.find_iter(&out).count();
        if hits > 0 {
            debug!("removing {hits} match(es) of {}", re.as_str());
            out = re.replace_all(&out, "").into_owned();
            report.removed += hits;
        }
    }
    if let Cow::Owned(collapsed) = collapse_blank_lines(&out) {
        report.collapsed_blank_lines = true;
        out = collapsed;
    }
    (out, report)
}

/// Read the manifest at `path`, strip `deps` and `extra` matches, and write it back.
pub fn remove_dependencies_from_project(
    path: &Path,
    deps: &[DependencyEntry],
    extra: &[String],
    dry_run: bool,
) -> Result<PruneReport, PatchError> {
    let patterns = compile_patterns(deps, extra)?;
    let content = read_manifest(path)?;
    let (pruned, report) = prune_dependencies(&content, &patterns);

    if dry_run {
        debug!("dry run, leaving {} untouched", path.display());
        return Ok(report);
    }
    write_atomic(path, &pruned)?;
    info!(
        "removed {} dependency record(s) from {}",
        report.removed,
        path.display()
    );
    Ok(report)
}
