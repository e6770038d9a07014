use crate::output::ApplyResult;
use crate::preview::{render_outcome_with_fixed_width, Preview};
use crate::{
    files_to_rename, rename_app_name_in_files, Config, RenameConfig, RewriteOptions,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Apply operation - returns structured data
///
/// Selects the configured files under `root` and rewrites every placeholder
/// occurrence to `name`. With `dry_run` the rewritten contents are computed
/// but nothing is written back.
#[allow(clippy::too_many_arguments)]
pub fn apply_operation(
    name: &str,
    root: Option<&Path>,
    patterns: Vec<String>,
    placeholder: Option<String>,
    display_placeholder: Option<String>,
    dry_run: bool,
    preview_format: Option<&String>,
    fixed_table_width: bool,
    use_color: bool,
) -> Result<(ApplyResult, Option<String>)> {
    let root = match root {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let config = Config::load(&root).context("Failed to load rebrand configuration")?;

    // Explicit patterns replace the configured set wholesale rather than
    // extending it, so a single --pattern flag fully describes the selection.
    let rename_config = if patterns.is_empty() {
        config.rename_config()
    } else {
        RenameConfig::new(patterns)
    };

    // Placeholder flags override the configured forms one at a time.
    let mut resolved_placeholder = config.placeholder();
    if let Some(form) = placeholder {
        resolved_placeholder.name = form;
    }
    if let Some(form) = display_placeholder {
        resolved_placeholder.display_name = form;
    }

    let files = files_to_rename(&root, &rename_config)
        .with_context(|| format!("Failed to select files under {}", root.display()))?;

    let options = RewriteOptions {
        placeholder: resolved_placeholder,
        dry_run,
    };
    let outcome = rename_app_name_in_files(&root, &files, name, &options)
        .context("Failed to rewrite the selected files")?;

    // Generate preview content
    let preview_content = if let Some(format) = preview_format {
        if format == "none" {
            None
        } else {
            let preview = parse_preview_format(format)?;
            Some(render_outcome_with_fixed_width(
                &outcome,
                preview,
                Some(use_color),
                fixed_table_width,
            ))
        }
    } else {
        None
    };

    let written: Vec<PathBuf> = outcome
        .written()
        .map(|change| change.path.clone())
        .collect();

    let result = ApplyResult {
        target: outcome.target,
        root,
        dry_run: outcome.dry_run,
        files_selected: outcome.changes.len(),
        files_written: written.len(),
        files_unchanged: outcome.changes.len() - written.len(),
        written,
    };

    Ok((result, preview_content))
}

fn parse_preview_format(format: &str) -> Result<Preview> {
    format
        .parse()
        .map_err(|message: String| anyhow::anyhow!(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_apply_operation_rewrites_selected_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("app.json"),
            r#"{"name": "helloworld", "displayName": "HelloWorld"}"#,
        )
        .unwrap();

        let (result, preview) = apply_operation(
            "CoolApp",
            Some(temp_dir.path()),
            vec!["*.json".to_string()],
            None,
            None,
            false,
            None,
            false,
            false,
        )
        .unwrap();

        assert_eq!(result.target, "CoolApp");
        assert_eq!(result.files_selected, 1);
        assert_eq!(result.files_written, 1);
        assert_eq!(result.files_unchanged, 0);
        assert_eq!(result.written, vec![PathBuf::from("app.json")]);
        assert!(preview.is_none());

        let content = fs::read_to_string(temp_dir.path().join("app.json")).unwrap();
        assert_eq!(content, r#"{"name": "coolapp", "displayName": "CoolApp"}"#);
    }

    #[test]
    fn test_apply_operation_dry_run_leaves_files_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let original = r#"{"name": "HelloWorld"}"#;
        fs::write(temp_dir.path().join("app.json"), original).unwrap();

        let (result, _preview) = apply_operation(
            "CoolApp",
            Some(temp_dir.path()),
            vec!["*.json".to_string()],
            None,
            None,
            true,
            None,
            false,
            false,
        )
        .unwrap();

        assert!(result.dry_run);
        assert_eq!(result.files_written, 1);

        let content = fs::read_to_string(temp_dir.path().join("app.json")).unwrap();
        assert_eq!(content, original);
    }

    #[test]
    fn test_apply_operation_renders_requested_preview() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("app.json"), r#"{"name": "HelloWorld"}"#).unwrap();

        let format = "summary".to_string();
        let (_result, preview) = apply_operation(
            "CoolApp",
            Some(temp_dir.path()),
            vec!["*.json".to_string()],
            None,
            None,
            true,
            Some(&format),
            false,
            false,
        )
        .unwrap();

        let content = preview.unwrap();
        assert!(content.contains("[RENAME SUMMARY]"));
        assert!(content.contains("CoolApp"));
    }

    #[test]
    fn test_apply_operation_honors_placeholder_overrides() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("app.json"), r#"{"name": "MyTemplate"}"#).unwrap();

        let (result, _preview) = apply_operation(
            "CoolApp",
            Some(temp_dir.path()),
            vec!["*.json".to_string()],
            Some("MyTemplate".to_string()),
            None,
            false,
            None,
            false,
            false,
        )
        .unwrap();

        assert_eq!(result.files_written, 1);
        let content = fs::read_to_string(temp_dir.path().join("app.json")).unwrap();
        assert_eq!(content, r#"{"name": "CoolApp"}"#);
    }

    #[test]
    fn test_apply_operation_rejects_unknown_preview_format() {
        let temp_dir = TempDir::new().unwrap();

        let format = "sideways".to_string();
        let result = apply_operation(
            "CoolApp",
            Some(temp_dir.path()),
            vec!["*.json".to_string()],
            None,
            None,
            true,
            Some(&format),
            false,
            false,
        );

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid preview format"));
    }
}
