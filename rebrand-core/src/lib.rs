#![allow(unused)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod operations;
pub mod output;
pub mod placeholder;
pub mod preview;
pub mod rewriter;
pub mod sanitize;
pub mod selector;

pub use config::{Config, TemplateConfig, CONFIG_FILE_NAME};
pub use error::{RenameError, SelectionError};
pub use operations::{apply_operation, files_operation};
pub use output::{ApplyResult, FilesResult, OutputFormat, OutputFormatter, VersionResult};
pub use placeholder::{Placeholder, DEFAULT_DISPLAY_PLACEHOLDER, DEFAULT_PLACEHOLDER};
pub use preview::{render_outcome, should_use_color, Preview};
pub use rewriter::{
    rename_app_name_in_files, FileChange, FileStatus, RenameOutcome, RewriteOptions,
    Substitutions,
};
pub use sanitize::FileKind;
pub use selector::{files_to_rename, RenameConfig, DEFAULT_PATTERNS};
