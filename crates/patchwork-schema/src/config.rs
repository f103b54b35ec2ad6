use crate::defaults;
use crate::types::{ObjectId, Rgb, StyleKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    SerializeToml(#[from] toml::ser::Error),
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("ci.repo must look like '<owner>/<repo>', got '{0}'")]
    InvalidRepo(String),
    #[error("ci.limit must be at least 1")]
    ZeroLimit,
    #[error("swatches.size must be between {min} and {max}, got {got}")]
    InvalidSize { min: u32, max: u32, got: u32 },
    #[error("swatches.quality must be between 1 and 100, got {0}")]
    InvalidQuality(u8),
    #[error("duplicate swatch style key '{0}'")]
    DuplicateStyle(String),
    #[error("project file entry '{0}' has an empty identifier")]
    EmptyIdentifier(String),
}

/// Top-level `patchwork.toml` document. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub dependencies: DependenciesSection,
    #[serde(default)]
    pub workflows: WorkflowsSection,
    #[serde(default)]
    pub ci: CiSection,
    #[serde(default)]
    pub swatches: SwatchesSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    #[serde(default = "defaults::manifest_path")]
    pub manifest: PathBuf,
    #[serde(default = "defaults::file_entries")]
    pub files: Vec<FileEntry>,
    #[serde(default = "defaults::group_rules")]
    pub groups: Vec<GroupRule>,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            manifest: defaults::manifest_path(),
            files: defaults::file_entries(),
            groups: defaults::group_rules(),
        }
    }
}

/// One source file to register in the project manifest.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub file_ref_id: ObjectId,
    pub build_file_id: ObjectId,
}

impl FileEntry {
    pub fn new(name: &str, path: &str, file_ref_id: &str, build_file_id: &str) -> Self {
        Self {
            name: name.to_owned(),
            path: path.to_owned(),
            file_ref_id: ObjectId::from(file_ref_id),
            build_file_id: ObjectId::from(build_file_id),
        }
    }
}

/// A named group; files whose path contains the name are listed under it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GroupRule {
    pub name: String,
}

impl GroupRule {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.contains(&self.name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DependenciesSection {
    #[serde(default = "defaults::dependency_entries")]
    pub remove: Vec<DependencyEntry>,
    #[serde(default)]
    pub extra_patterns: Vec<String>,
}

impl Default for DependenciesSection {
    fn default() -> Self {
        Self {
            remove: defaults::dependency_entries(),
            extra_patterns: Vec::new(),
        }
    }
}

/// A package product dependency to strip from the project manifest.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DependencyEntry {
    pub name: String,
    pub product_id: ObjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_file: Option<BuildFileRef>,
}

/// The framework build-file record that links a product into a target.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuildFileRef {
    pub id: ObjectId,
    pub product_ref: ObjectId,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WorkflowsSection {
    #[serde(default = "defaults::workflow_dir")]
    pub dir: PathBuf,
    #[serde(default = "defaults::failure_signatures")]
    pub failure_signatures: Vec<FailureSignature>,
}

impl Default for WorkflowsSection {
    fn default() -> Self {
        Self {
            dir: defaults::workflow_dir(),
            failure_signatures: defaults::failure_signatures(),
        }
    }
}

/// A known CI failure message and what to do about it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FailureSignature {
    pub signature: String,
    pub fix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CiSection {
    #[serde(default = "defaults::ci_repo")]
    pub repo: String,
    #[serde(default = "defaults::ci_api_base")]
    pub api_base: String,
    #[serde(default = "defaults::ci_limit")]
    pub limit: usize,
    #[serde(default = "defaults::ci_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for CiSection {
    fn default() -> Self {
        Self {
            repo: defaults::ci_repo(),
            api_base: defaults::ci_api_base(),
            limit: defaults::ci_limit(),
            timeout_secs: defaults::ci_timeout_secs(),
            token: None,
        }
    }
}

impl CiSection {
    /// Browser URL of the repository's actions page.
    pub fn actions_url(&self) -> String {
        format!("https://github.com/{}/actions", self.repo)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SwatchesSection {
    #[serde(default = "defaults::swatch_out_dir")]
    pub out_dir: PathBuf,
    #[serde(default = "defaults::swatch_size")]
    pub size: u32,
    #[serde(default = "defaults::swatch_quality")]
    pub quality: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default = "defaults::style_entries")]
    pub styles: Vec<StyleEntry>,
}

impl Default for SwatchesSection {
    fn default() -> Self {
        Self {
            out_dir: defaults::swatch_out_dir(),
            size: defaults::swatch_size(),
            quality: defaults::swatch_quality(),
            seed: None,
            styles: defaults::style_entries(),
        }
    }
}

/// Colors and labels for one placeholder swatch.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StyleEntry {
    pub key: StyleKey,
    pub name: String,
    pub bg_color: Rgb,
    pub text_color: Rgb,
    pub accent_color: Rgb,
    pub description: String,
}

pub const MIN_SWATCH_SIZE: u32 = 200;
pub const MAX_SWATCH_SIZE: u32 = 4096;

impl Config {
    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let repo_ok = matches!(
            self.ci.repo.trim().split_once('/'),
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/')
        );
        if !repo_ok {
            return Err(ConfigError::InvalidRepo(self.ci.repo.clone()));
        }
        if self.ci.limit == 0 {
            return Err(ConfigError::ZeroLimit);
        }

        let size = self.swatches.size;
        if !(MIN_SWATCH_SIZE..=MAX_SWATCH_SIZE).contains(&size) {
            return Err(ConfigError::InvalidSize {
                min: MIN_SWATCH_SIZE,
                max: MAX_SWATCH_SIZE,
                got: size,
            });
        }
        if !(1..=100).contains(&self.swatches.quality) {
            return Err(ConfigError::InvalidQuality(self.swatches.quality));
        }

        let mut seen = BTreeSet::new();
        for style in &self.swatches.styles {
            if !seen.insert(style.key.as_str()) {
                return Err(ConfigError::DuplicateStyle(style.key.to_string()));
            }
        }

        for file in &self.project.files {
            if file.file_ref_id.trim().is_empty() || file.build_file_id.trim().is_empty() {
                return Err(ConfigError::EmptyIdentifier(file.name.clone()));
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn parse_config_str(input: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(input)?;
    config.validate()?;
    Ok(config)
}

pub fn parse_config_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Load `path` if it exists, otherwise fall back to the built-in defaults.
///
/// When `required` is set a missing file is an error instead.
pub fn load_config(path: &Path, required: bool) -> Result<Config, ConfigError> {
    if path.exists() {
        return parse_config_file(path);
    }
    if required {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    Ok(Config::default())
}
