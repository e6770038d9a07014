use crate::rewriter::{FileStatus, RenameOutcome};
use crate::sanitize::FileKind;
use comfy_table::{Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};
use std::io::{self, IsTerminal};

/// Render the outcome as a table with optional fixed column widths
pub fn render_table(outcome: &RenameOutcome, use_color: bool, fixed_table_width: bool) -> String {
    let mut table = Table::new();

    // Set content arrangement and constraints based on fixed width parameter
    if fixed_table_width {
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_constraints(vec![
            ColumnConstraint::Absolute(Width::Fixed(75)), // File
            ColumnConstraint::Absolute(Width::Fixed(15)), // Kind
            ColumnConstraint::Absolute(Width::Fixed(15)), // Status
        ]);
    } else if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        // No TTY, fall back to fixed widths for stable output
        table.set_content_arrangement(ContentArrangement::Disabled);
        table.set_constraints(vec![
            ColumnConstraint::Absolute(Width::Fixed(75)), // File
            ColumnConstraint::Absolute(Width::Fixed(15)), // Kind
            ColumnConstraint::Absolute(Width::Fixed(15)), // Status
        ]);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("File").fg(Color::Cyan),
            Cell::new("Kind").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["File", "Kind", "Status"]);
    }

    // Rows keep the selection order; no sorting needed
    for change in &outcome.changes {
        let file_str = change.path.display().to_string();
        let kind_str = match change.kind {
            FileKind::Markup => "markup",
            FileKind::Plain => "plain",
        };
        let status_str = match (change.status, outcome.dry_run) {
            (FileStatus::Written, true) => "would write",
            (FileStatus::Written, false) => "written",
            (FileStatus::Unchanged, _) => "unchanged",
        };

        if use_color {
            let status_cell = match change.status {
                FileStatus::Written => Cell::new(status_str).fg(Color::Green),
                FileStatus::Unchanged => Cell::new(status_str).fg(Color::DarkGrey),
            };
            table.add_row(vec![Cell::new(&file_str), Cell::new(kind_str), status_cell]);
        } else {
            table.add_row(vec![file_str.as_str(), kind_str, status_str]);
        }
    }

    // Add footer with totals
    let totals = format!(
        "{} written, {} unchanged",
        outcome.written_count(),
        outcome.unchanged_count()
    );

    if use_color {
        table.add_row(vec![
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
            Cell::new("─────────").fg(Color::DarkGrey),
        ]);
        table.add_row(vec![
            Cell::new("TOTALS").fg(Color::Cyan),
            Cell::new(""),
            Cell::new(&totals).fg(Color::White),
        ]);
    } else {
        table.add_row(vec!["─────────", "─────────", "─────────"]);
        table.add_row(vec!["TOTALS", "", totals.as_str()]);
    }

    table.to_string()
}
