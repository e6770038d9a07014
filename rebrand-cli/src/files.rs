use anyhow::Result;
use rebrand_core::{files_operation, OutputFormatter};
use std::path::PathBuf;

use crate::OutputFormat;

pub fn handle_files(
    root: Option<PathBuf>,
    patterns: Vec<String>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let result = files_operation(root.as_deref(), patterns)?;

    // Handle output based on format
    match output {
        OutputFormat::Json => {
            print!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", result.format_summary());
            }
        },
    }

    Ok(())
}
