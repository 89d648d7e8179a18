//! Convert a tree of JSON translation resources into JavaScript files.
//!
//! Every `strings.json` under the resource root becomes an assignment
//! statement such as
//!
//! ```text
//! ilib.data.strings_de_DE = {"hello":"Hallo"};
//! ```
//!
//! so the bundle can be loaded directly by a script runtime without a JSON
//! parser or an asynchronous file read. Output is either one assembled file
//! holding every resource, or one file per requested locale holding that
//! locale's fallback chain.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

pub mod bundle;
pub mod config;
pub mod emitter;
pub mod key;
pub mod locale;
pub mod walker;

pub use bundle::{GeneratedFile, assemble, assemble_locale, run, run_with};
pub use config::{Assembly, BundlerConfig, Compilation};
pub use emitter::{OutputDocument, Statement, emit};
pub use key::{NamespaceKey, derive_key};
pub use locale::expand;
pub use walker::{RESOURCE_FILENAME, ResourceFile, ResourceWalker, walk};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Resource directory '{}' does not exist or is not readable", path.display())]
    MissingResourceDirectory { path: PathBuf },
    #[error("Locale list is missing. Dynamic assembly requires at least one locale")]
    MissingLocaleList,
    #[error(transparent)]
    Locale(#[from] locale::LocaleError),
    #[cfg(feature = "minify")]
    #[error(transparent)]
    Minify(#[from] resbundler_minify::MinifyError),
    #[error("Compiled output requires the `minify` feature")]
    MinificationUnavailable,
    #[error("Failed to read resource file '{}': {source}", path.display())]
    ReadResource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
