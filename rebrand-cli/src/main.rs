use anyhow::Result;
use clap::Parser;
use rebrand_core::{OutputFormatter, VersionResult};
use std::io::{self, IsTerminal};
use std::process;

mod apply;
mod cli;
mod files;

use cli::{Cli, Commands, OutputFormat, PreviewArg};

fn main() {
    let cli = Cli::parse();
    let use_color = !cli.no_color && io::stdout().is_terminal();

    let result = match cli.command {
        Commands::Files {
            root,
            patterns,
            output,
            quiet,
        } => files::handle_files(root, patterns, output, quiet),

        Commands::Apply {
            name,
            root,
            patterns,
            placeholder,
            display_placeholder,
            dry_run,
            preview,
            fixed_table_width,
            output,
            quiet,
        } => apply::handle_apply(
            &name,
            root,
            patterns,
            placeholder,
            display_placeholder,
            dry_run,
            preview,
            fixed_table_width,
            use_color,
            output,
            quiet,
        ),

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "rebrand".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let formatted = match output {
        OutputFormat::Json => version_result.format_json(),
        OutputFormat::Summary => version_result.format_summary(),
    };

    println!("{}", formatted);
    Ok(())
}
