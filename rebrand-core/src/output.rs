use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a files (selection) operation
#[derive(Debug, Serialize, Deserialize)]
pub struct FilesResult {
    pub root: PathBuf,
    pub patterns: Vec<String>,
    pub files: Vec<PathBuf>,
}

/// Result of an apply operation
#[derive(Debug, Serialize, Deserialize)]
pub struct ApplyResult {
    pub target: String,
    pub root: PathBuf,
    pub dry_run: bool,
    pub files_selected: usize,
    pub files_written: usize,
    pub files_unchanged: usize,
    /// Changed files, in selection order
    pub written: Vec<PathBuf>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for FilesResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "files",
            "root": self.root,
            "patterns": self.patterns,
            "summary": {
                "files": self.files.len(),
            },
            "files": self.files,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        if self.files.is_empty() {
            return "No files matched the rename configuration\n".to_string();
        }

        // One path per line so the listing stays pipeable
        let mut output = String::new();
        for file in &self.files {
            writeln!(output, "{}", file.display()).unwrap();
        }
        output
    }
}

impl OutputFormatter for ApplyResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "apply",
            "target": self.target,
            "root": self.root,
            "dry_run": self.dry_run,
            "summary": {
                "files_selected": self.files_selected,
                "files_written": self.files_written,
                "files_unchanged": self.files_unchanged,
            },
            "written": self.written,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        if self.dry_run {
            writeln!(
                output,
                "Dry run: would rename app to '{}' in {} of {} files",
                self.target, self.files_written, self.files_selected
            )
            .unwrap();
        } else {
            writeln!(
                output,
                "✓ Renamed app to '{}' in {} of {} files",
                self.target, self.files_written, self.files_selected
            )
            .unwrap();
        }

        if self.files_unchanged > 0 {
            writeln!(output, "{} files already up to date", self.files_unchanged).unwrap();
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
