//! Locale fallback chains.
//!
//! A tag is decomposed with the BCP-47 grammar into language, script and
//! region; each present component adds one, progressively more specific, path
//! fragment. Fields missing from the tag are skipped, so `en-US` expands to
//! `en`, `en/US` rather than probing an empty script directory.

use std::str::FromStr as _;

use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

/// Separator used between fragment components.
pub const FRAGMENT_SEPARATOR: char = '/';

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("Invalid locale '{tag}': {source}")]
    Invalid {
        tag: String,
        #[source]
        source: LanguageIdentifierError,
    },
}

/// Cuts `tag` before its first singleton subtag, dropping any extension
/// (`-u-ca-buddhist`, `-t-...`) or private-use (`-x-...`) part.
#[must_use]
pub fn strip_extensions(tag: &str) -> &str {
    let mut start = 0;

    for subtag in tag.split(['-', '_']) {
        if subtag.len() == 1 {
            return tag[..start].trim_end_matches(['-', '_']);
        }
        start += subtag.len() + 1;
    }

    tag
}

/// Splits `tag` into its present language/script/region components.
///
/// # Errors
///
/// * If `tag` is not a well-formed locale identifier
pub fn components(tag: &str) -> Result<Vec<String>, LocaleError> {
    let tag = strip_extensions(tag.trim());

    if tag.is_empty() {
        return Ok(vec![]);
    }

    let langid = LanguageIdentifier::from_str(tag).map_err(|e| LocaleError::Invalid {
        tag: tag.to_string(),
        source: e,
    })?;

    let mut components = vec![];

    if !langid.language.is_empty() {
        components.push(langid.language.as_str().to_string());
    }
    if let Some(script) = langid.script {
        components.push(script.as_str().to_string());
    }
    if let Some(region) = langid.region {
        components.push(region.as_str().to_string());
    }

    Ok(components)
}

/// Expands `tag` into cumulative path fragments, most general first.
///
/// `en-Latn-US` expands to `en`, `en/Latn`, `en/Latn/US`. An empty tag expands
/// to nothing.
///
/// # Errors
///
/// * If `tag` is not a well-formed locale identifier
pub fn expand(tag: &str) -> Result<Vec<String>, LocaleError> {
    let components = components(tag)?;
    let mut fragments = Vec::with_capacity(components.len());
    let mut current = String::new();

    for component in components {
        if !current.is_empty() {
            current.push(FRAGMENT_SEPARATOR);
        }
        current.push_str(&component);
        fragments.push(current.clone());
    }

    Ok(fragments)
}

/// The fragments probed for `tag` in dynamic mode: the resource root itself
/// (the empty fragment) followed by [`expand`].
///
/// # Errors
///
/// * If `tag` is not a well-formed locale identifier
pub fn fallback_chain(tag: &str) -> Result<Vec<String>, LocaleError> {
    let mut chain = vec![String::new()];
    chain.extend(expand(tag)?);
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test]
    fn expand_full_tag() {
        assert_eq!(
            expand("en-Latn-US").unwrap(),
            vec!["en", "en/Latn", "en/Latn/US"]
        );
    }

    #[test_log::test]
    fn expand_skips_missing_script() {
        assert_eq!(expand("en-US").unwrap(), vec!["en", "en/US"]);
    }

    #[test_log::test]
    fn expand_language_only() {
        assert_eq!(expand("fr").unwrap(), vec!["fr"]);
    }

    #[test_log::test]
    fn expand_language_and_script() {
        assert_eq!(expand("zh-Hant").unwrap(), vec!["zh", "zh/Hant"]);
    }

    #[test_log::test]
    fn expand_empty_tag_is_empty() {
        assert!(expand("").unwrap().is_empty());
        assert!(expand("   ").unwrap().is_empty());
    }

    #[test_log::test]
    fn expand_accepts_underscore_separator() {
        assert_eq!(expand("de_DE").unwrap(), vec!["de", "de/DE"]);
    }

    #[test_log::test]
    fn expand_canonicalizes_case() {
        assert_eq!(
            expand("ZH-hant-tw").unwrap(),
            vec!["zh", "zh/Hant", "zh/Hant/TW"]
        );
    }

    #[test_log::test]
    fn expand_ignores_variants() {
        assert_eq!(
            expand("sl-Latn-IT-rozaj").unwrap(),
            vec!["sl", "sl/Latn", "sl/Latn/IT"]
        );
    }

    #[test_log::test]
    fn expand_ignores_unicode_extension() {
        assert_eq!(expand("en-US-u-ca-buddhist").unwrap(), vec!["en", "en/US"]);
    }

    #[test_log::test]
    fn expand_ignores_private_use() {
        assert_eq!(expand("en-US-x-custom").unwrap(), vec!["en", "en/US"]);
        assert_eq!(
            expand("zh-Hant-TW-t-zh-latn-x-a").unwrap(),
            vec!["zh", "zh/Hant", "zh/Hant/TW"]
        );
    }

    #[test_log::test]
    fn strip_extensions_cuts_at_first_singleton() {
        assert_eq!(strip_extensions("de-DE-u-co-phonebk"), "de-DE");
        assert_eq!(strip_extensions("de_DE_x_foo"), "de_DE");
        assert_eq!(strip_extensions("sl-Latn-IT-rozaj"), "sl-Latn-IT-rozaj");
        assert_eq!(strip_extensions("x-private"), "");
    }

    #[test_log::test]
    fn expand_rejects_malformed_tag() {
        let result = expand("not a locale!");

        assert!(
            matches!(&result, Err(LocaleError::Invalid { tag, .. }) if tag == "not a locale!"),
            "got: {result:?}"
        );
    }

    #[test_log::test]
    fn fallback_chain_starts_at_root() {
        assert_eq!(fallback_chain("fr").unwrap(), vec!["", "fr"]);
        assert_eq!(fallback_chain("").unwrap(), vec![""]);
    }
}
