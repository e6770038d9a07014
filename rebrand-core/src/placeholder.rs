use crate::sanitize::FileKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Conventional placeholder app name used by project templates.
pub const DEFAULT_PLACEHOLDER: &str = "HelloWorld";

/// Conventional human-readable placeholder used in display-name slots.
pub const DEFAULT_DISPLAY_PLACEHOLDER: &str = "Hello App Display Name";

/// The pair of template tokens a rename replaces.
///
/// `name` is the identifier-style form as it appears in source and config
/// files; its lowercase form is derived, not stored. `display_name` is the
/// long human-readable form found in display-name slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub name: String,
    pub display_name: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLACEHOLDER.to_string(),
            display_name: DEFAULT_DISPLAY_PLACEHOLDER.to_string(),
        }
    }
}

impl Placeholder {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }

    /// Build the substitution map for one target name and one file kind.
    ///
    /// Three forms are replaced: the name as-is, its lowercase form, and
    /// the display name. All map to the kind-sanitized target (the
    /// lowercase form to its lowercase). Computed once per invocation per
    /// kind; the rewriter feeds the entries into a single automaton pass.
    pub fn substitution_map(&self, target: &str, kind: FileKind) -> BTreeMap<String, String> {
        let safe = kind.sanitize(target);

        let mut map = BTreeMap::new();
        // Lowercase first: if the placeholder is already all-lowercase the
        // exact entry below overwrites it, and the exact rule wins.
        map.insert(self.name.to_lowercase(), safe.to_lowercase());
        map.insert(self.name.clone(), safe.clone());
        map.insert(self.display_name.clone(), safe);
        map
    }
}
