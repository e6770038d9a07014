use crate::error::SelectionError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Patterns applied when a template carries no rename configuration of its
/// own. They cover the places mobile templates conventionally embed the
/// app name. Entries starting with `!` exclude matching paths.
pub const DEFAULT_PATTERNS: &[&str] = &[
    "!**/node_modules",
    "app.json",
    "android/**/*.gradle",
    "android/app/BUCK",
    "android/app/src/**/*.java",
    "android/app/src/**/*.kt",
    "android/app/src/**/*.xml",
    "ios/Podfile",
    "ios/**/*.xcodeproj/project.pbxproj",
    "ios/**/*.xcworkspace/contents.xcworkspacedata",
    "ios/**/*.xcscheme",
    "ios/**/*.plist",
    "ios/**/*.entitlements",
];

/// An ordered list of glob patterns deciding which files a rename touches.
///
/// Order is preserved into the selection result. An empty config is valid
/// and selects nothing. `!`-prefixed entries exclude matches and prune
/// whole directory subtrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameConfig {
    pub patterns: Vec<String>,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

impl RenameConfig {
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Split into include patterns and (`!`-stripped) exclude patterns,
    /// preserving order within each group.
    fn split(&self) -> (Vec<&str>, Vec<&str>) {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();
        for pattern in &self.patterns {
            if let Some(negated) = pattern.strip_prefix('!') {
                excludes.push(negated);
            } else {
                includes.push(pattern.as_str());
            }
        }
        (includes, excludes)
    }
}

/// Compile patterns into a `GlobSet`. An empty slice builds an empty set,
/// which matches nothing; callers rely on that for empty configs.
fn build_globset(patterns: &[&str]) -> Result<GlobSet, SelectionError> {
    fn compile(pattern: &str, original: &str) -> Result<Glob, SelectionError> {
        Glob::new(pattern).map_err(|source| SelectionError::Pattern {
            pattern: original.to_string(),
            source,
        })
    }

    let mut builder = GlobSetBuilder::new();
    for &pattern in patterns {
        builder.add(compile(pattern, pattern)?);

        // If the last component looks like a directory name (no wildcard,
        // no extension), also match everything under it. `**/node_modules`
        // then covers the whole subtree, not just the directory entry.
        let last = pattern.rsplit('/').next().unwrap_or(pattern);
        if pattern.ends_with('/')
            || (!last.contains('*') && !last.contains('?') && !last.contains('.'))
        {
            let recursive = if pattern.ends_with('/') {
                format!("{}**", pattern)
            } else {
                format!("{}/**", pattern)
            };
            builder.add(compile(&recursive, pattern)?);
        }
    }
    builder.build().map_err(|source| SelectionError::Pattern {
        pattern: patterns.join(", "),
        source,
    })
}

/// Expand a rename config against a project root into the ordered,
/// de-duplicated list of files to rewrite, as paths relative to the root.
///
/// The walk is deterministic (file-name sorted), so the same tree and
/// config always produce the same list. Each file is visited exactly once,
/// so overlapping patterns cannot introduce duplicates. Traversal errors
/// and invalid patterns abort the selection.
pub fn files_to_rename(
    root: &Path,
    config: &RenameConfig,
) -> Result<Vec<PathBuf>, SelectionError> {
    let (include_patterns, exclude_patterns) = config.split();
    let includes = build_globset(&include_patterns)?;
    let excludes = build_globset(&exclude_patterns)?;

    let mut files = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();

    // Filtering entries (rather than results) prunes excluded directories,
    // so an ignored tree like node_modules is never descended into.
    for entry in walker.filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        !excludes.is_match(relative)
    }) {
        let entry = entry.map_err(|source| SelectionError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if includes.is_match(relative) {
            files.push(relative.to_path_buf());
        }
    }

    Ok(files)
}
