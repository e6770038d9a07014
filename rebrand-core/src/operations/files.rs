use crate::output::FilesResult;
use crate::{files_to_rename, Config, RenameConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// Files operation - returns structured data
///
/// Lists the files a rename would touch, without rewriting anything.
pub fn files_operation(root: Option<&Path>, patterns: Vec<String>) -> Result<FilesResult> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    // Explicit patterns replace the configured set wholesale rather than
    // extending it, so a single --pattern flag fully describes the selection.
    let config = if patterns.is_empty() {
        Config::load(&root)
            .context("Failed to load rebrand configuration")?
            .rename_config()
    } else {
        RenameConfig::new(patterns)
    };

    let files = files_to_rename(&root, &config)
        .with_context(|| format!("Failed to select files under {}", root.display()))?;

    Ok(FilesResult {
        patterns: config.patterns,
        root,
        files,
    })
}
