use anyhow::Result;
use rebrand_core::{apply_operation, OutputFormatter};
use std::path::PathBuf;

use crate::{OutputFormat, PreviewArg};

#[allow(clippy::too_many_arguments)]
pub fn handle_apply(
    name: &str,
    root: Option<PathBuf>,
    patterns: Vec<String>,
    placeholder: Option<String>,
    display_placeholder: Option<String>,
    dry_run: bool,
    preview: Option<PreviewArg>,
    fixed_table_width: bool,
    use_color: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    // Validate that --fixed-table-width is only used with table preview
    if fixed_table_width && preview.is_some() && preview != Some(PreviewArg::Table) {
        return Err(anyhow::anyhow!(
            "--fixed-table-width can only be used with --preview table"
        ));
    }

    // Preview is a human-facing layer; JSON output and --quiet skip it
    let preview = if output == OutputFormat::Json || quiet {
        None
    } else {
        preview
    };

    // Convert preview arg to string format
    let preview_format = preview.map(|p| match p {
        PreviewArg::Table => "table".to_string(),
        PreviewArg::Diff => "diff".to_string(),
        PreviewArg::Summary => "summary".to_string(),
        PreviewArg::None => "none".to_string(),
    });

    let (result, preview_content) = apply_operation(
        name,
        root.as_deref(),
        patterns,
        placeholder,
        display_placeholder,
        dry_run,
        preview_format.as_ref(),
        fixed_table_width,
        use_color,
    )?;

    // Handle output based on format
    match output {
        OutputFormat::Json => {
            print!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if let Some(content) = preview_content {
                if !content.is_empty() {
                    println!("{}", content);
                }
            }
            if !quiet {
                print!("{}", result.format_summary());
            }
        },
    }

    Ok(())
}
