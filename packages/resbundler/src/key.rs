//! Namespace keys: the left-hand side of every generated assignment.
//!
//! A resource file at `<root>/de/DE/strings.json` is assigned to
//! `ilib.data.strings_de_DE`; the file at the root itself is assigned to the
//! bare `ilib.data.strings`.

use std::{fmt::Display, path::Path};

pub const NAMESPACE_PREFIX: &str = "ilib.data.strings";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceKey(String);

impl NamespaceKey {
    /// Builds a key from the directory segments between the resource root and
    /// the file name.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = NAMESPACE_PREFIX.to_string();

        for segment in segments {
            let segment = segment.as_ref();
            if segment.is_empty() {
                continue;
            }
            key.push('_');
            key.push_str(segment);
        }

        Self(key)
    }

    /// Builds a key from a file path relative to the resource root, e.g.
    /// `de/DE/strings.json`.
    #[must_use]
    pub fn from_relative_path(path: &Path) -> Self {
        let segments = path.parent().into_iter().flat_map(|parent| {
            parent.components().filter_map(|component| match component {
                std::path::Component::Normal(x) => Some(x.to_string_lossy()),
                _ => None,
            })
        });

        Self::from_segments(segments)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NamespaceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for NamespaceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NamespaceKey> for String {
    fn from(value: NamespaceKey) -> Self {
        value.0
    }
}

/// Derives the key for a slash-delimited path whose first segment is the
/// resource root and whose last segment is the file name.
///
/// Returns `None` for an empty path.
#[must_use]
pub fn derive_key(path: &str) -> Option<NamespaceKey> {
    if path.is_empty() {
        return None;
    }

    let segments = path.split('/').collect::<Vec<_>>();
    let middle = if segments.len() > 2 {
        &segments[1..segments.len() - 1]
    } else {
        &[]
    };

    Some(NamespaceKey::from_segments(middle))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test]
    fn derive_key_joins_middle_segments() {
        assert_eq!(
            derive_key("resources/de/DE/strings.json").unwrap().as_str(),
            "ilib.data.strings_de_DE"
        );
    }

    #[test_log::test]
    fn derive_key_for_root_file_is_bare_prefix() {
        assert_eq!(
            derive_key("resources/strings.json").unwrap().as_str(),
            "ilib.data.strings"
        );
    }

    #[test_log::test]
    fn derive_key_for_single_segment_is_bare_prefix() {
        assert_eq!(
            derive_key("strings.json").unwrap().as_str(),
            "ilib.data.strings"
        );
    }

    #[test_log::test]
    fn derive_key_for_empty_path_is_none() {
        assert!(derive_key("").is_none());
    }

    #[test_log::test]
    fn derive_key_includes_script_segments() {
        assert_eq!(
            derive_key("resources/zh/Hant/TW/strings.json")
                .unwrap()
                .to_string(),
            "ilib.data.strings_zh_Hant_TW"
        );
    }

    #[test_log::test]
    fn relative_path_key_ignores_file_name() {
        let key = NamespaceKey::from_relative_path(&PathBuf::from("fr").join("strings.json"));

        assert_eq!(key.as_str(), "ilib.data.strings_fr");
    }

    #[test_log::test]
    fn relative_path_key_for_root_file() {
        let key = NamespaceKey::from_relative_path(&PathBuf::from("strings.json"));

        assert_eq!(key.as_str(), "ilib.data.strings");
    }

    #[test_log::test]
    fn relative_path_key_matches_derived_key() {
        let relative = PathBuf::from("de").join("DE").join("strings.json");

        assert_eq!(
            NamespaceKey::from_relative_path(&relative),
            derive_key("resources/de/DE/strings.json").unwrap()
        );
    }

    #[test_log::test]
    fn empty_segments_are_skipped() {
        assert_eq!(
            NamespaceKey::from_segments(["", "en", ""]).as_str(),
            "ilib.data.strings_en"
        );
    }
}
