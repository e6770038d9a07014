use serde::{Deserialize, Serialize};
use std::path::Path;

/// File categories that select a sanitization policy for replacement text.
///
/// The category is decided purely by file extension. Unknown or missing
/// extensions fall back to `Plain`; content is never inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Markup files (`.xml`, `.plist`) where the replacement must be
    /// markup-escaped before unsafe characters are stripped.
    Markup,
    /// Everything else. Unsafe characters are stripped directly.
    Plain,
}

impl FileKind {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("xml" | "plist") => Self::Markup,
            _ => Self::Plain,
        }
    }

    /// Sanitize a raw user-supplied name for insertion into a file of this
    /// kind. For markup files the value is escaped first, then stripped;
    /// the order matters: `Bye<World` escapes to `Bye&lt;World` and strips
    /// to `ByeltWorld`, while stripping first would lose the `lt` entirely.
    pub fn sanitize(self, name: &str) -> String {
        match self {
            Self::Markup => strip_unsafe(&escape_markup(name)),
            Self::Plain => strip_unsafe(name),
        }
    }
}

/// Escape the five XML-reserved characters. `&` is handled first so that
/// already-produced entities are not escaped twice.
pub fn escape_markup(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Drop every character outside the allow-list: alphanumerics, space,
/// `_` and `-`. Punctuation that could break identifiers, paths, or
/// markup (`!`, `<`, `;`, quotes, ...) disappears.
pub fn strip_unsafe(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect()
}
