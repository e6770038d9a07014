use crate::rewriter::RenameOutcome;
use crate::sanitize::FileKind;
use std::fmt::Write;

/// Render the outcome as a terse, machine-friendly summary
pub fn render_summary(outcome: &RenameOutcome) -> String {
    let mut output = String::new();

    writeln!(output, "[RENAME SUMMARY]").unwrap();
    writeln!(output, "Target: {}", outcome.target).unwrap();
    if outcome.dry_run {
        writeln!(output, "Mode: dry run").unwrap();
    }
    writeln!(output, "Files: {}", outcome.changes.len()).unwrap();
    writeln!(output, "Written: {}", outcome.written_count()).unwrap();
    writeln!(output, "Unchanged: {}", outcome.unchanged_count()).unwrap();

    if outcome.written_count() > 0 {
        writeln!(output).unwrap();
        writeln!(output, "[WRITTEN]").unwrap();
        for change in outcome.written() {
            let kind = match change.kind {
                FileKind::Markup => "markup",
                FileKind::Plain => "plain",
            };
            writeln!(output, "{} ({})", change.path.display(), kind).unwrap();
        }
    }

    output
}
