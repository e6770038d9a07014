use crate::error::RenameError;
use crate::placeholder::Placeholder;
use crate::sanitize::FileKind;
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// How one selected file fared during a rename pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Content changed. In dry-run mode nothing was persisted, but this
    /// file would be written.
    Written,
    /// Substitution produced identical bytes; the write was skipped.
    Unchanged,
}

/// Per-file report for one rename pass, in selection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    pub path: PathBuf,
    pub kind: FileKind,
    pub status: FileStatus,
    /// Original content, kept only for changed files so previews can
    /// render a diff without re-reading the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

/// The result of one rename invocation over a candidate list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameOutcome {
    /// The requested name, as given (sanitization applies per file kind).
    pub target: String,
    pub dry_run: bool,
    pub changes: Vec<FileChange>,
}

impl RenameOutcome {
    pub fn written(&self) -> impl Iterator<Item = &FileChange> {
        self.changes
            .iter()
            .filter(|c| c.status == FileStatus::Written)
    }

    pub fn written_count(&self) -> usize {
        self.written().count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.changes.len() - self.written_count()
    }
}

#[derive(Debug, Clone)]
pub struct RewriteOptions {
    pub placeholder: Placeholder,
    pub dry_run: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            placeholder: Placeholder::default(),
            dry_run: false,
        }
    }
}

/// One compiled substitution pass: an automaton over the placeholder forms
/// plus the replacement for each form.
struct Substitution {
    matcher: AhoCorasick,
    replacements: Vec<String>,
}

impl Substitution {
    fn compile(map: &BTreeMap<String, String>) -> Self {
        let patterns: Vec<&String> = map.keys().collect();
        let replacements: Vec<String> = map.values().cloned().collect();

        // Literal patterns over a tiny set; construction cannot fail.
        let matcher = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .unwrap();

        Self {
            matcher,
            replacements,
        }
    }

    fn apply(&self, content: &str) -> String {
        self.matcher.replace_all(content, &self.replacements)
    }
}

/// The substitution passes for both file kinds, compiled once per
/// invocation. Replacements never feed back into matching: each file gets
/// exactly one left-to-right pass.
pub struct Substitutions {
    markup: Substitution,
    plain: Substitution,
}

impl Substitutions {
    pub fn new(placeholder: &Placeholder, target: &str) -> Self {
        Self {
            markup: Substitution::compile(&placeholder.substitution_map(target, FileKind::Markup)),
            plain: Substitution::compile(&placeholder.substitution_map(target, FileKind::Plain)),
        }
    }

    pub fn apply(&self, kind: FileKind, content: &str) -> String {
        match kind {
            FileKind::Markup => self.markup.apply(content),
            FileKind::Plain => self.plain.apply(content),
        }
    }
}

fn rewrite_file(
    root: &Path,
    relative: &Path,
    substitutions: &Substitutions,
    dry_run: bool,
) -> Result<FileChange, RenameError> {
    let absolute = root.join(relative);
    let kind = FileKind::from_path(relative);

    let content = fs::read_to_string(&absolute).map_err(|source| RenameError::Read {
        path: absolute.clone(),
        source,
    })?;

    let rewritten = substitutions.apply(kind, &content);

    if rewritten == content {
        return Ok(FileChange {
            path: relative.to_path_buf(),
            kind,
            status: FileStatus::Unchanged,
            before: None,
            after: None,
        });
    }

    if !dry_run {
        fs::write(&absolute, &rewritten).map_err(|source| RenameError::Write {
            path: absolute.clone(),
            source,
        })?;
    }

    Ok(FileChange {
        path: relative.to_path_buf(),
        kind,
        status: FileStatus::Written,
        before: Some(content),
        after: Some(rewritten),
    })
}

/// Rewrite the placeholder app name to `target` in the given files.
///
/// `files` are paths relative to `root`, usually straight from the
/// selector. Files are processed independently and in parallel; the
/// returned changes keep the input order. The first read or write failure
/// aborts the invocation. An empty list touches nothing.
pub fn rename_app_name_in_files(
    root: &Path,
    files: &[PathBuf],
    target: &str,
    options: &RewriteOptions,
) -> Result<RenameOutcome, RenameError> {
    let substitutions = Substitutions::new(&options.placeholder, target);

    let changes: Vec<FileChange> = files
        .par_iter()
        .map(|file| rewrite_file(root, file, &substitutions, options.dry_run))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RenameOutcome {
        target: target.to_string(),
        dry_run: options.dry_run,
        changes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_single_pass_replaces_all_forms() {
        let subs = Substitutions::new(&Placeholder::default(), "ByeWorld");
        let content = r#"{"name": "helloworld", "displayName": "Hello App Display Name", "app": "HelloWorld"}"#;
        assert_eq!(
            subs.apply(FileKind::Plain, content),
            r#"{"name": "byeworld", "displayName": "ByeWorld", "app": "ByeWorld"}"#
        );
    }

    #[test]
    fn test_replacements_are_not_rescanned() {
        // The replacement contains the placeholder, but a single pass never
        // matches inside text it has already produced.
        let subs = Substitutions::new(&Placeholder::default(), "SayHelloWorld");
        assert_eq!(subs.apply(FileKind::Plain, "HelloWorld"), "SayHelloWorld");
    }

    #[test]
    fn test_longest_form_wins_on_overlap() {
        let placeholder = Placeholder::new("Hello", "Hello App Display Name");
        let subs = Substitutions::new(&placeholder, "Bye");
        // "Hello App Display Name" starts with the short form; the longer
        // form must win at that position, consuming the whole phrase.
        assert_eq!(
            subs.apply(FileKind::Plain, "Hello, Hello App Display Name"),
            "Bye, Bye"
        );
    }

    #[test]
    fn test_substitution_matches_are_plain_substrings() {
        let subs = Substitutions::new(&Placeholder::default(), "ByeWorld");
        // No word-boundary rules: occurrences inside longer identifiers
        // are replaced too.
        assert_eq!(
            subs.apply(FileKind::Plain, "com.helloworld.app / HelloWorldTests"),
            "com.byeworld.app / ByeWorldTests"
        );
    }

    #[test]
    fn test_rewrites_file_in_place() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.json");
        std::fs::write(&file, r#"{ "expo": { "name": "HelloWorld" } }"#).unwrap();

        let outcome = rename_app_name_in_files(
            dir.path(),
            &[PathBuf::from("app.json")],
            "ByeWorld",
            &RewriteOptions::default(),
        )
        .unwrap();

        assert_eq!(outcome.written_count(), 1);
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            r#"{ "expo": { "name": "ByeWorld" } }"#
        );
    }

    #[test]
    fn test_same_name_skips_the_write() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.json");
        std::fs::write(&file, "HelloWorld").unwrap();

        let outcome = rename_app_name_in_files(
            dir.path(),
            &[PathBuf::from("app.json")],
            "HelloWorld",
            &RewriteOptions::default(),
        )
        .unwrap();

        assert_eq!(outcome.written_count(), 0);
        assert_eq!(outcome.unchanged_count(), 1);
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "HelloWorld");
    }

    #[test]
    fn test_dry_run_reports_but_does_not_write() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.json");
        std::fs::write(&file, "HelloWorld").unwrap();

        let options = RewriteOptions {
            dry_run: true,
            ..RewriteOptions::default()
        };
        let outcome = rename_app_name_in_files(
            dir.path(),
            &[PathBuf::from("app.json")],
            "ByeWorld",
            &options,
        )
        .unwrap();

        assert_eq!(outcome.written_count(), 1);
        assert_eq!(outcome.changes[0].status, FileStatus::Written);
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "HelloWorld");
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let err = rename_app_name_in_files(
            dir.path(),
            &[PathBuf::from("gone.json")],
            "ByeWorld",
            &RewriteOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RenameError::Read { .. }));
    }

    #[test]
    fn test_empty_file_list_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let outcome =
            rename_app_name_in_files(dir.path(), &[], "ByeWorld", &RewriteOptions::default())
                .unwrap();
        assert!(outcome.changes.is_empty());
    }
}
