//! Configuration schema for the patchwork tools.
//!
//! This crate defines `patchwork.toml` (`Config`) and its sections: project file
//! descriptors and group rules, dependency descriptors to prune, workflow report
//! settings, the CI endpoint, and swatch styles. Every section falls back to the
//! built-in values in [`defaults`].

pub mod config;
pub mod defaults;
pub mod types;

pub use config::{
    load_config, parse_config_file, parse_config_str, BuildFileRef, CiSection, Config,
    ConfigError, DependenciesSection, DependencyEntry, FailureSignature, FileEntry, GroupRule,
    ProjectSection, StyleEntry, SwatchesSection, WorkflowsSection,
};
pub use defaults::{get_style, DEFAULT_CONFIG_FILE};
pub use types::{ObjectId, Rgb, StyleKey};
