use clap::{Parser, Subcommand, ValueEnum};
use rebrand_core::Preview;
use std::path::PathBuf;

/// Rename a template app's placeholder name across a project tree
#[derive(Parser, Debug)]
#[command(name = "rebrand")]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the files the rename configuration selects
    Files {
        /// Project root to scan. Defaults to the current directory
        root: Option<PathBuf>,

        /// Glob patterns replacing the configured selection. Prefix with '!' to exclude
        #[arg(long = "pattern", value_name = "GLOB", value_delimiter = ',')]
        patterns: Vec<String>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output
        #[arg(long)]
        quiet: bool,
    },

    /// Rewrite the placeholder app name to a new name
    Apply {
        /// New app name. Markup-unsafe characters are dropped on substitution
        name: String,

        /// Project root to rewrite. Defaults to the current directory
        root: Option<PathBuf>,

        /// Glob patterns replacing the configured selection. Prefix with '!' to exclude
        #[arg(long = "pattern", value_name = "GLOB", value_delimiter = ',')]
        patterns: Vec<String>,

        /// Placeholder app name to replace (defaults to "HelloWorld")
        #[arg(long, value_name = "NAME")]
        placeholder: Option<String>,

        /// Display-name placeholder to replace (defaults to "Hello App Display Name")
        #[arg(long, value_name = "NAME")]
        display_placeholder: Option<String>,

        /// Compute the rewrite but don't write anything back
        #[arg(long)]
        dry_run: bool,

        /// Preview output format
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Use fixed column widths for table output (useful in CI environments or other non-TTY use cases)
        #[arg(long)]
        fixed_table_width: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output (alias for --preview none)
        #[arg(long)]
        quiet: bool,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum PreviewArg {
    Table,
    Diff,
    Summary,
    None,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Table => Self::Table,
            PreviewArg::Diff => Self::Diff,
            PreviewArg::Summary => Self::Summary,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Summary,
    Json,
}
