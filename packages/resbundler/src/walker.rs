//! Resource tree discovery.
//!
//! [`walk`] lazily visits every entry under a resource root and yields each
//! file named [`RESOURCE_FILENAME`] with its raw content. Within a directory,
//! files are visited before subdirectories and each group is ordered by file
//! name, so the sequence is the same on every run over an unchanged tree.

use std::{
    cmp::Ordering,
    fs,
    path::{Path, PathBuf},
};

use walkdir::{DirEntry, WalkDir};

use crate::{Error, key::NamespaceKey};

pub const RESOURCE_FILENAME: &str = "strings.json";

/// A discovered resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    path: PathBuf,
    relative: PathBuf,
    content: String,
}

impl ResourceFile {
    #[must_use]
    pub const fn new(path: PathBuf, relative: PathBuf, content: String) -> Self {
        Self {
            path,
            relative,
            content,
        }
    }

    /// Reads `root/relative` into a [`ResourceFile`].
    ///
    /// # Errors
    ///
    /// * [`Error::ReadResource`] if the file could not be read as UTF-8 text
    pub fn read(root: &Path, relative: &Path) -> Result<Self, Error> {
        let path = root.join(relative);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) => return Err(Error::ReadResource { path, source }),
        };

        Ok(Self::new(path, relative.to_path_buf(), content))
    }

    /// Full path of the file, including the resource root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the file relative to the resource root.
    #[must_use]
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }

    #[must_use]
    pub fn key(&self) -> NamespaceKey {
        NamespaceKey::from_relative_path(&self.relative)
    }
}

/// Lazy, single-pass iterator over the resource files under a root.
pub struct ResourceWalker {
    root: PathBuf,
    entries: walkdir::IntoIter,
}

impl std::fmt::Debug for ResourceWalker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceWalker")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Starts walking the resource tree rooted at `root`.
///
/// # Errors
///
/// * [`Error::MissingResourceDirectory`] if `root` does not exist, is not a
///   directory, or cannot be listed
pub fn walk(root: &Path) -> Result<ResourceWalker, Error> {
    if let Err(e) = fs::read_dir(root) {
        log::debug!("walk: cannot list {}: {e}", root.display());
        return Err(Error::MissingResourceDirectory {
            path: root.to_path_buf(),
        });
    }

    log::debug!("walk: scanning resource root {}", root.display());

    Ok(ResourceWalker {
        root: root.to_path_buf(),
        entries: WalkDir::new(root)
            .follow_links(true)
            .sort_by(files_first)
            .into_iter(),
    })
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

impl ResourceWalker {
    fn read_entry(&self, entry: &DirEntry) -> Result<ResourceFile, Error> {
        let relative = entry
            .path()
            .strip_prefix(&self.root)
            .unwrap_or_else(|_| entry.path());

        let file = ResourceFile::read(&self.root, relative)?;

        resbundler_logging::debug_or_trace!(
            ("walk: found {}", file.path().display()),
            (
                "walk: found {} ({} bytes)",
                file.path().display(),
                file.content().len()
            )
        );

        Ok(file)
    }
}

impl Iterator for ResourceWalker {
    type Item = Result<ResourceFile, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            if !entry.file_type().is_file() || entry.file_name() != RESOURCE_FILENAME {
                continue;
            }

            return Some(self.read_entry(&entry));
        }
    }
}
