//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic for each rebrand operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod apply;
pub mod files;

// Re-export the main operation functions for easy access
pub use apply::apply_operation;
pub use files::files_operation;
