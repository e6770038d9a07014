use std::path::PathBuf;

/// Errors produced while expanding a rename configuration into a file list.
///
/// These are structured with `thiserror` so library consumers can match on
/// them; the operations layer and the CLI wrap them with `anyhow` context.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("invalid glob pattern: {pattern}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("failed to walk project root: {root}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Errors produced while rewriting file contents.
///
/// A read or write failure aborts the remaining per-file work. No retries,
/// no partial-file recovery; the caller decides how to present the failure.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
