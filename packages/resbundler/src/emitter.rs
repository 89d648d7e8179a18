//! Output documents: one `<key> = <content>;` statement per resource file.
//!
//! Raw content is passed through byte-for-byte. Nothing is merged or
//! deduplicated, so two files resolving to the same key produce two
//! statements and the later one wins when the script is evaluated.

use std::fmt::Display;

use crate::{Compilation, Error, key::NamespaceKey, walker::ResourceFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    key: NamespaceKey,
    content: String,
}

impl Statement {
    #[must_use]
    pub const fn new(key: NamespaceKey, content: String) -> Self {
        Self { key, content }
    }

    #[must_use]
    pub const fn key(&self) -> &NamespaceKey {
        &self.key
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {};", self.key, self.content)
    }
}

impl From<ResourceFile> for Statement {
    fn from(value: ResourceFile) -> Self {
        Self::new(value.key(), value.into_content())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    statements: Vec<Statement>,
}

impl OutputDocument {
    #[must_use]
    pub const fn new() -> Self {
        Self { statements: vec![] }
    }

    /// Appends the statement for `file`. Files with empty content are skipped.
    ///
    /// Returns whether a statement was added.
    pub fn push(&mut self, file: ResourceFile) -> bool {
        if file.content().is_empty() {
            log::debug!("emit: skipping empty file {}", file.path().display());
            return false;
        }

        self.statements.push(file.into());
        true
    }

    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// The uncompiled document text, one newline-terminated statement per
    /// line.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.statements.iter().fold(String::new(), |mut text, x| {
            text.push_str(&x.to_string());
            text.push('\n');
            text
        })
    }

    /// Renders the document, minifying it when `compilation` is
    /// [`Compilation::Compiled`].
    ///
    /// # Errors
    ///
    /// * [`Error::Minify`] if the generated source is not valid JavaScript
    /// * [`Error::MinificationUnavailable`] if compiled output was requested
    ///   but the `minify` feature is disabled
    pub fn render(&self, compilation: Compilation) -> Result<String, Error> {
        let text = self.to_text();

        match compilation {
            Compilation::Uncompiled => Ok(text),
            Compilation::Compiled => minify(&text),
        }
    }
}

#[cfg(feature = "minify")]
fn minify(text: &str) -> Result<String, Error> {
    Ok(resbundler_minify::minify(text)?)
}

#[cfg(not(feature = "minify"))]
fn minify(_text: &str) -> Result<String, Error> {
    Err(Error::MinificationUnavailable)
}

impl FromIterator<ResourceFile> for OutputDocument {
    fn from_iter<T: IntoIterator<Item = ResourceFile>>(iter: T) -> Self {
        let mut document = Self::new();
        for file in iter {
            document.push(file);
        }
        document
    }
}

/// Builds a fresh document from `files`, in order, stopping at the first
/// error.
///
/// # Errors
///
/// * The first error yielded by `files`
pub fn emit<I>(files: I) -> Result<OutputDocument, Error>
where
    I: IntoIterator<Item = Result<ResourceFile, Error>>,
{
    files.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn file(relative: &str, content: &str) -> ResourceFile {
        let relative = PathBuf::from(relative);
        ResourceFile::new(
            PathBuf::from("resources").join(&relative),
            relative,
            content.to_string(),
        )
    }

    #[test_log::test]
    fn emit_produces_one_line_per_file_in_order() {
        let document = emit([
            Ok(file("strings.json", "{\"hi\":\"hello\"}")),
            Ok(file("fr/strings.json", "{\"hi\":\"bonjour\"}")),
        ])
        .unwrap();

        assert_eq!(
            document.to_text(),
            "ilib.data.strings = {\"hi\":\"hello\"};\nilib.data.strings_fr = {\"hi\":\"bonjour\"};\n"
        );
    }

    #[test_log::test]
    fn emit_passes_content_through_unchanged() {
        let content = "{\n  \"a\": \"b\",\n  \"unicode\": \"\u{00e9}\u{4e2d}\"\n}\n";
        let document = emit([Ok(file("en/strings.json", content))]).unwrap();

        assert_eq!(
            document.to_text(),
            format!("ilib.data.strings_en = {content};\n")
        );
    }

    #[test_log::test]
    fn emit_skips_empty_files() {
        let document = emit([
            Ok(file("strings.json", "")),
            Ok(file("de/strings.json", "{}")),
        ])
        .unwrap();

        assert_eq!(document.len(), 1);
        assert_eq!(
            document.statements()[0].key().as_str(),
            "ilib.data.strings_de"
        );
    }

    #[test_log::test]
    fn emit_keeps_colliding_keys() {
        let document = emit([
            Ok(file("en/strings.json", "{\"a\":1}")),
            Ok(file("en/strings.json", "{\"a\":2}")),
        ])
        .unwrap();

        assert_eq!(
            document.to_text(),
            "ilib.data.strings_en = {\"a\":1};\nilib.data.strings_en = {\"a\":2};\n"
        );
    }

    #[test_log::test]
    fn emit_stops_at_first_error() {
        let result = emit([
            Ok(file("strings.json", "{}")),
            Err(Error::MissingLocaleList),
        ]);

        assert!(matches!(result, Err(Error::MissingLocaleList)));
    }

    #[test_log::test]
    fn empty_document_renders_empty_text() {
        let document = OutputDocument::new();

        assert!(document.is_empty());
        assert_eq!(document.render(Compilation::Uncompiled).unwrap(), "");
    }

    #[test_log::test]
    fn uncompiled_render_is_the_text() {
        let document: OutputDocument = [file("strings.json", "{\"k\":\"v\"}")]
            .into_iter()
            .collect();

        assert_eq!(
            document.render(Compilation::Uncompiled).unwrap(),
            document.to_text()
        );
    }

    #[cfg(feature = "minify")]
    #[test_log::test]
    fn compiled_render_minifies() {
        let document: OutputDocument = [file("fr/strings.json", "{\n  \"hi\": \"bonjour\"\n}")]
            .into_iter()
            .collect();

        let rendered = document.render(Compilation::Compiled).unwrap();

        assert!(rendered.contains("ilib.data.strings_fr="), "got: {rendered}");
        assert!(rendered.contains("bonjour"));
        assert!(rendered.len() < document.to_text().len());
    }

    #[cfg(feature = "minify")]
    #[test_log::test]
    fn compiled_render_fails_on_malformed_content() {
        let document: OutputDocument = [file("strings.json", "{\"hi\": ")].into_iter().collect();

        assert!(matches!(
            document.render(Compilation::Compiled),
            Err(Error::Minify(_))
        ));
    }
}
