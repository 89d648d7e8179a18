//! Assembled and dynamic bundling runs.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    Assembly, BundlerConfig, Compilation, Error,
    emitter::{self, OutputDocument},
    locale,
    walker::{self, RESOURCE_FILENAME, ResourceFile},
};

/// A file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub compilation: Compilation,
}

/// Builds the single document holding every resource file under `res_dir`.
///
/// # Errors
///
/// * [`Error::MissingResourceDirectory`] if `res_dir` is not a directory
/// * If walking the tree or reading a resource file fails
pub fn assemble(res_dir: &Path) -> Result<OutputDocument, Error> {
    emitter::emit(walker::walk(res_dir)?)
}

/// Builds the document for one locale: the resource root's file followed by
/// the file of each fragment of the locale's fallback chain that exists.
///
/// # Errors
///
/// * If `locale` is not a well-formed locale identifier
/// * If an existing resource file could not be read
pub fn assemble_locale(res_dir: &Path, locale: &str) -> Result<OutputDocument, Error> {
    probe_chain(res_dir, &locale::fallback_chain(locale)?)
}

fn probe_chain(res_dir: &Path, chain: &[String]) -> Result<OutputDocument, Error> {
    let mut document = OutputDocument::new();

    for fragment in chain {
        let relative = Path::new(fragment).join(RESOURCE_FILENAME);
        let path = res_dir.join(&relative);

        if !path.is_file() {
            log::debug!("probe: no resource file at {}", path.display());
            continue;
        }

        log::debug!("probe: found {}", path.display());
        document.push(ResourceFile::read(res_dir, &relative)?);
    }

    Ok(document)
}

/// Runs the bundler described by `config`.
///
/// # Errors
///
/// * See [`run_with`]
pub fn run(config: &BundlerConfig) -> Result<Vec<GeneratedFile>, Error> {
    run_with(config, |_| {})
}

/// Runs the bundler described by `config`, calling `on_generated` after each
/// output file is written.
///
/// Files already written are left in place if a later step fails.
///
/// # Errors
///
/// * [`Error::MissingLocaleList`] if dynamic assembly was requested without
///   any locales
/// * [`Error::MissingResourceDirectory`] if the resource root is not a
///   directory
/// * [`Error::Locale`] if any requested locale is malformed
/// * [`Error::Minify`] if compiled output was requested and the generated
///   source is not valid JavaScript
/// * If any filesystem operation fails
pub fn run_with(
    config: &BundlerConfig,
    mut on_generated: impl FnMut(&GeneratedFile),
) -> Result<Vec<GeneratedFile>, Error> {
    log::debug!(
        "run: assembly={} compilation={} res_dir={} out_dir={}",
        config.assembly,
        config.compilation,
        config.res_dir.display(),
        config.out_dir.display()
    );

    let documents = match config.assembly {
        Assembly::Assembled => vec![(config.filename.clone(), assemble(&config.res_dir)?)],
        Assembly::Dynamic => dynamic_documents(config)?,
    };

    let mut generated = Vec::with_capacity(documents.len());

    for (filename, document) in documents {
        let file = write_document(&document, &config.out_dir, &filename, config.compilation)?;
        on_generated(&file);
        generated.push(file);
    }

    Ok(generated)
}

fn dynamic_documents(config: &BundlerConfig) -> Result<Vec<(String, OutputDocument)>, Error> {
    if config.locales.is_empty() {
        return Err(Error::MissingLocaleList);
    }

    if !config.res_dir.is_dir() {
        return Err(Error::MissingResourceDirectory {
            path: config.res_dir.clone(),
        });
    }

    let chains = config
        .locales
        .iter()
        .map(|tag| -> Result<_, Error> { Ok((tag, locale::fallback_chain(tag)?)) })
        .collect::<Result<Vec<_>, Error>>()?;

    chains
        .into_iter()
        .map(|(tag, chain)| -> Result<_, Error> {
            log::debug!("dynamic: locale {tag} probes {chain:?}");
            Ok((format!("{tag}.js"), probe_chain(&config.res_dir, &chain)?))
        })
        .collect()
}

fn write_document(
    document: &OutputDocument,
    out_dir: &Path,
    filename: &str,
    compilation: Compilation,
) -> Result<GeneratedFile, Error> {
    let code = document.render(compilation)?;

    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(filename);
    fs::write(&path, &code)?;

    log::debug!(
        "write: {} ({} statements, {} bytes, {compilation})",
        path.display(),
        document.len(),
        code.len()
    );

    Ok(GeneratedFile { path, compilation })
}
