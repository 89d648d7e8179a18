//! Run configuration shared by every front-end.

use std::{fmt::Display, path::PathBuf};

use strum_macros::{AsRefStr, EnumString};

pub const DEFAULT_RES_DIR: &str = "resources";
pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_FILENAME: &str = "ilib-translation.js";

/// How resource files are grouped into output files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "kebab_case"))]
pub enum Assembly {
    /// A single output file containing every resource file found.
    #[default]
    Assembled,
    /// One output file per requested locale, containing only that locale's
    /// fallback chain.
    Dynamic,
}

impl Display for Assembly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Whether output documents are minified before being written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "kebab_case"))]
pub enum Compilation {
    #[default]
    Compiled,
    Uncompiled,
}

impl Display for Compilation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlerConfig {
    pub assembly: Assembly,
    pub compilation: Compilation,
    /// Root of the resource tree.
    pub res_dir: PathBuf,
    /// Directory the output files are written to. Created if absent.
    pub out_dir: PathBuf,
    /// Output file name in [`Assembly::Assembled`] mode.
    pub filename: String,
    /// Locale tags to generate files for in [`Assembly::Dynamic`] mode.
    pub locales: Vec<String>,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            assembly: Assembly::default(),
            compilation: Compilation::default(),
            res_dir: PathBuf::from(DEFAULT_RES_DIR),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            filename: DEFAULT_FILENAME.to_string(),
            locales: vec![],
        }
    }
}

impl BundlerConfig {
    /// Sets the locale list from the raw comma-separated CLI form. Entries are
    /// trimmed and empty entries dropped.
    #[must_use]
    pub fn with_locale_list(mut self, list: &str) -> Self {
        self.locales = parse_locale_list(list);
        self
    }
}

#[must_use]
pub fn parse_locale_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(ToString::to_string)
        .collect()
}
