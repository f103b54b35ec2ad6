//! Built-in values used when `patchwork.toml` omits a section.
//!
//! These reproduce the VividAI project the tools were first written for.

use crate::config::{BuildFileRef, DependencyEntry, FailureSignature, FileEntry, GroupRule, StyleEntry};
use crate::types::{ObjectId, Rgb, StyleKey};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "patchwork.toml";

pub fn manifest_path() -> PathBuf {
    PathBuf::from("VividAI.xcodeproj/project.pbxproj")
}

pub fn file_entries() -> Vec<FileEntry> {
    vec![
        FileEntry::new(
            "ImageQuality.swift",
            "VividAI/Models/ImageQuality.swift",
            "A1234567890ABCDEF100",
            "A1234567890ABCDEF101",
        ),
        FileEntry::new(
            "ImageQualityAnalysis.swift",
            "VividAI/Models/ImageQualityAnalysis.swift",
            "A1234567890ABCDEF102",
            "A1234567890ABCDEF103",
        ),
        FileEntry::new(
            "Product.swift",
            "VividAI/Models/Product.swift",
            "A1234567890ABCDEF104",
            "A1234567890ABCDEF105",
        ),
        FileEntry::new(
            "NavigationCoordinator.swift",
            "VividAI/Coordinators/NavigationCoordinator.swift",
            "A1234567890ABCDEF106",
            "A1234567890ABCDEF107",
        ),
        FileEntry::new(
            "AppCoordinator.swift",
            "VividAI/Coordinators/AppCoordinator.swift",
            "A1234567890ABCDEF108",
            "A1234567890ABCDEF109",
        ),
        FileEntry::new(
            "MainAppView.swift",
            "VividAI/Views/MainAppView.swift",
            "A1234567890ABCDEF110",
            "A1234567890ABCDEF111",
        ),
    ]
}

pub fn group_rules() -> Vec<GroupRule> {
    ["Models", "Coordinators", "Views"]
        .into_iter()
        .map(GroupRule::new)
        .collect()
}

fn dependency(name: &str, product_id: &str, build_file: Option<(&str, &str)>) -> DependencyEntry {
    DependencyEntry {
        name: name.to_owned(),
        product_id: ObjectId::from(product_id),
        build_file: build_file.map(|(id, product_ref)| BuildFileRef {
            id: ObjectId::from(id),
            product_ref: ObjectId::from(product_ref),
        }),
    }
}

pub fn dependency_entries() -> Vec<DependencyEntry> {
    vec![
        dependency(
            "FirebaseAnalytics",
            "A1234567890ABCDEF081",
            Some(("A1234567890ABCDEF046", "A1234567890ABCDEF045")),
        ),
        dependency(
            "FirebaseAuth",
            "A1234567890ABCDEF082",
            Some(("A1234567890ABCDEF042", "A1234567890ABCDEF041")),
        ),
        dependency(
            "FirebaseFirestore",
            "A1234567890ABCDEF083",
            Some(("A1234567890ABCDEF044", "A1234567890ABCDEF043")),
        ),
        dependency("FirebaseCore", "A1234567890ABCDEF084", None),
    ]
}

pub fn workflow_dir() -> PathBuf {
    PathBuf::from(".github/workflows")
}

pub fn failure_signatures() -> Vec<FailureSignature> {
    [
        ("Multiple commands produce Info.plist", "Should be fixed in commit 91603aa"),
        ("App bundle not found", "Check if build completed successfully"),
        ("App executable missing", "Check if app bundle is valid"),
        ("BUILD FAILED", "Check build logs for specific errors"),
    ]
    .into_iter()
    .map(|(signature, fix)| FailureSignature {
        signature: signature.to_owned(),
        fix: fix.to_owned(),
    })
    .collect()
}

pub fn ci_repo() -> String {
    "polashchandradas/VividAI".to_owned()
}

pub fn ci_api_base() -> String {
    "https://api.github.com".to_owned()
}

pub fn ci_limit() -> usize {
    5
}

pub fn ci_timeout_secs() -> u64 {
    30
}

pub fn swatch_out_dir() -> PathBuf {
    PathBuf::from("sample_images")
}

pub fn swatch_size() -> u32 {
    360
}

pub fn swatch_quality() -> u8 {
    85
}

struct BuiltinStyle {
    key: &'static str,
    name: &'static str,
    bg: Rgb,
    text: Rgb,
    accent: Rgb,
    description: &'static str,
}

const BUILTIN_STYLES: &[BuiltinStyle] = &[
    BuiltinStyle {
        key: "professional_headshot",
        name: "Professional Headshot",
        bg: [240, 240, 240],
        text: [50, 50, 50],
        accent: [0, 100, 200],
        description: "Clean corporate style",
    },
    BuiltinStyle {
        key: "executive_portrait",
        name: "Executive Portrait",
        bg: [220, 220, 220],
        text: [30, 30, 30],
        accent: [100, 50, 0],
        description: "Premium executive style",
    },
    BuiltinStyle {
        key: "renaissance_art",
        name: "Renaissance Art",
        bg: [200, 180, 160],
        text: [80, 60, 40],
        accent: [150, 100, 50],
        description: "Classical painting style",
    },
    BuiltinStyle {
        key: "oil_painting",
        name: "Oil Painting",
        bg: [180, 160, 140],
        text: [60, 40, 20],
        accent: [120, 80, 40],
        description: "Traditional oil painting",
    },
    BuiltinStyle {
        key: "anime_cartoon",
        name: "Anime/Cartoon",
        bg: [255, 240, 240],
        text: [100, 50, 150],
        accent: [255, 100, 150],
        description: "Japanese anime style",
    },
    BuiltinStyle {
        key: "disney_pixar",
        name: "Disney/Pixar",
        bg: [255, 250, 240],
        text: [50, 100, 200],
        accent: [255, 200, 100],
        description: "Disney animation style",
    },
    BuiltinStyle {
        key: "comic_book",
        name: "Comic Book",
        bg: [255, 255, 255],
        text: [0, 0, 0],
        accent: [255, 0, 0],
        description: "Bold comic style",
    },
    BuiltinStyle {
        key: "cyberpunk_future",
        name: "Cyberpunk Future",
        bg: [20, 20, 40],
        text: [0, 255, 255],
        accent: [255, 0, 255],
        description: "Futuristic cyberpunk",
    },
    BuiltinStyle {
        key: "fantasy_warrior",
        name: "Fantasy Warrior",
        bg: [40, 20, 20],
        text: [255, 200, 100],
        accent: [200, 100, 50],
        description: "Epic fantasy style",
    },
    BuiltinStyle {
        key: "vintage_portrait",
        name: "Vintage Portrait",
        bg: [200, 180, 160],
        text: [100, 80, 60],
        accent: [150, 120, 90],
        description: "Classic vintage style",
    },
    BuiltinStyle {
        key: "film_noir",
        name: "Film Noir",
        bg: [20, 20, 20],
        text: [200, 200, 200],
        accent: [255, 255, 255],
        description: "Dramatic film noir",
    },
    BuiltinStyle {
        key: "minimalist",
        name: "Minimalist",
        bg: [250, 250, 250],
        text: [100, 100, 100],
        accent: [0, 0, 0],
        description: "Clean minimalist style",
    },
    BuiltinStyle {
        key: "abstract_art",
        name: "Abstract Art",
        bg: [240, 240, 255],
        text: [100, 50, 200],
        accent: [255, 100, 200],
        description: "Modern abstract art",
    },
    BuiltinStyle {
        key: "watercolor",
        name: "Watercolor",
        bg: [255, 255, 240],
        text: [100, 150, 200],
        accent: [200, 150, 100],
        description: "Soft watercolor style",
    },
    BuiltinStyle {
        key: "sketch_drawing",
        name: "Sketch Drawing",
        bg: [255, 255, 255],
        text: [50, 50, 50],
        accent: [0, 0, 0],
        description: "Hand-drawn sketch",
    },
    BuiltinStyle {
        key: "pop_art",
        name: "Pop Art",
        bg: [255, 255, 0],
        text: [255, 0, 0],
        accent: [0, 0, 255],
        description: "Vibrant pop art",
    },
];

pub fn style_entries() -> Vec<StyleEntry> {
    BUILTIN_STYLES
        .iter()
        .map(|s| StyleEntry {
            key: StyleKey::from(s.key),
            name: s.name.to_owned(),
            bg_color: s.bg,
            text_color: s.text,
            accent_color: s.accent,
            description: s.description.to_owned(),
        })
        .collect()
}

pub fn get_style(key: &str) -> Option<StyleEntry> {
    style_entries().into_iter().find(|s| s.key == *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_styles_have_unique_keys() {
        let mut keys: Vec<&str> = BUILTIN_STYLES.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), BUILTIN_STYLES.len());
    }

    #[test]
    fn get_style_by_key() {
        let noir = get_style("film_noir").unwrap();
        assert_eq!(noir.name, "Film Noir");
        assert_eq!(noir.bg_color, [20, 20, 20]);
        assert!(get_style("nonexistent").is_none());
    }

    #[test]
    fn file_entries_have_distinct_identifiers() {
        let mut ids: Vec<String> = file_entries()
            .iter()
            .flat_map(|f| [f.file_ref_id.to_string(), f.build_file_id.to_string()])
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn every_file_entry_matches_a_group() {
        let groups = group_rules();
        for file in file_entries() {
            assert!(
                groups.iter().any(|g| g.matches(&file.path)),
                "{} has no group",
                file.path
            );
        }
    }

    #[test]
    fn firebase_core_has_no_build_file() {
        let deps = dependency_entries();
        let core = deps.iter().find(|d| d.name == "FirebaseCore").unwrap();
        assert!(core.build_file.is_none());
        assert_eq!(deps.iter().filter(|d| d.build_file.is_some()).count(), 3);
    }
}
