use crate::rewriter::RenameOutcome;
use nu_ansi_term::{Color as AnsiColor, Style};
use similar::{ChangeTag, TextDiff};
use std::fmt::Write;
use std::path::Path;

/// Render the outcome as unified per-file diffs. Unchanged files are
/// omitted entirely.
pub fn render_diff(outcome: &RenameOutcome, use_color: bool) -> String {
    let mut output = String::new();

    for file in outcome.written() {
        let (Some(before), Some(after)) = (file.before.as_deref(), file.after.as_deref()) else {
            continue;
        };
        render_file_diff(&mut output, &file.path, before, after, use_color);
    }

    output
}

fn render_file_diff(output: &mut String, path: &Path, before: &str, after: &str, use_color: bool) {
    // Use forward slashes for consistent cross-platform output
    let file_str = if cfg!(windows) {
        path.to_string_lossy().replace('\\', "/")
    } else {
        path.to_string_lossy().to_string()
    };

    if use_color {
        write!(
            output,
            "{}",
            Style::new()
                .fg(AnsiColor::White)
                .bold()
                .paint(format!("--- {}\n+++ {}\n", file_str, file_str))
        )
        .unwrap();
    } else {
        write!(output, "--- {}\n+++ {}\n", file_str, file_str).unwrap();
    }

    let diff = TextDiff::from_lines(before, after);

    // Grouped ops keep a few context lines around each change instead of
    // replaying the whole file.
    for group in diff.grouped_ops(3) {
        let Some(first) = group.first() else {
            continue;
        };
        let line_num = first.old_range().start + 1;

        if use_color {
            write!(
                output,
                "{}",
                AnsiColor::Blue.paint(format!("@@ line {} @@\n", line_num))
            )
            .unwrap();
        } else {
            writeln!(output, "@@ line {} @@", line_num).unwrap();
        }

        for op in &group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };

                let change_text = change.to_string();
                let change_text = change_text.trim_end_matches('\n');

                if use_color {
                    match change.tag() {
                        ChangeTag::Delete => {
                            writeln!(
                                output,
                                "{}",
                                AnsiColor::Red.paint(format!("{}{}", sign, change_text))
                            )
                            .unwrap();
                        },
                        ChangeTag::Insert => {
                            writeln!(
                                output,
                                "{}",
                                AnsiColor::Green.paint(format!("{}{}", sign, change_text))
                            )
                            .unwrap();
                        },
                        ChangeTag::Equal => writeln!(output, "{}{}", sign, change_text).unwrap(),
                    }
                } else {
                    writeln!(output, "{}{}", sign, change_text).unwrap();
                }
            }
        }
    }
}
