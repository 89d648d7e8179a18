//! Command-line front-end for `resbundler`.
//!
//! ```text
//! resbundler [-a assembled|dynamic] [-c compiled|uncompiled] [-r RES_DIR]
//!            [-o OUT_DIR] [-f FILENAME] [-l LOCALES]
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::Parser;
use resbundler::{
    Assembly, BundlerConfig, Compilation,
    config::{DEFAULT_FILENAME, DEFAULT_OUT_DIR, DEFAULT_RES_DIR},
};

/// Convert JSON resource files into JavaScript files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// How the output is assembled: one file for everything, or one file per
    /// locale
    #[arg(short, long, value_enum, default_value_t = Assembly::Assembled)]
    assembly: Assembly,

    /// Whether the output is minified
    #[arg(short, long, value_enum, default_value_t = Compilation::Compiled)]
    compiled: Compilation,

    /// Directory to search for `strings.json` files
    #[arg(short, long, visible_alias = "resDir", default_value = DEFAULT_RES_DIR)]
    res_dir: PathBuf,

    /// Directory to place output files in
    #[arg(short, long, visible_alias = "outDir", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Output file name when assembly is `assembled`
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    filename: String,

    /// Comma-separated BCP-47 locale tags to generate files for when assembly
    /// is `dynamic`
    #[arg(short, long, value_name = "LOCALES")]
    locales: Option<String>,

    /// Also write debug logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl From<Args> for BundlerConfig {
    fn from(value: Args) -> Self {
        let config = Self {
            assembly: value.assembly,
            compilation: value.compiled,
            res_dir: value.res_dir,
            out_dir: value.out_dir,
            filename: value.filename,
            locales: vec![],
        };

        match value.locales {
            Some(locales) => config.with_locale_list(&locales),
            None => config,
        }
    }
}

fn main() {
    let args = Args::parse();

    resbundler_logging::init(args.log_file.as_deref()).expect("Failed to initialize logging");

    let config = BundlerConfig::from(args);

    let result = resbundler::run_with(&config, |file| {
        println!(
            "Generated [{}] {} file.",
            file.compilation,
            file.path.display()
        );
    });

    if let Err(e) = result {
        log::error!("resbundler failed: {e:?}");
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }

    println!("DONE!!");
}
