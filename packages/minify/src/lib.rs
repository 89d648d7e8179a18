//! JavaScript minification using SWC.
//!
//! Parses a blob of JavaScript source, runs the SWC compressor and mangler over
//! it and prints the result back out in minified form. Any syntax error in the
//! input is reported as a [`MinifyError::Parse`]; there is no fallback to the
//! unminified source.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use swc_common::{
    FileName, FilePathMapping, GLOBALS, Globals, Mark, SourceMap, Spanned as _, sync::Lrc,
};
use swc_ecma_ast::{EsVersion, Module, Program};
use swc_ecma_codegen::{
    Emitter,
    text_writer::{JsWriter, omit_trailing_semi},
};
use swc_ecma_minifier::option::{
    CompressOptions, ExtraOptions, MangleOptions, MinifyOptions, TopLevelOptions,
};
use swc_ecma_parser::{EsSyntax, Syntax, parse_file_as_module};
use swc_ecma_transforms_base::{fixer::fixer, resolver};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MinifyError {
    #[error("Failed to parse JavaScript at {line}:{column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
    #[error(transparent)]
    Emit(#[from] std::io::Error),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// The parser configuration used for generated bundles: plain ECMAScript with
/// every proposal turned off.
#[must_use]
pub fn syntax() -> Syntax {
    Syntax::Es(EsSyntax {
        jsx: false,
        fn_bind: false,
        decorators: false,
        decorators_before_export: false,
        export_default_from: false,
        import_attributes: false,
        allow_super_outside_method: false,
        allow_return_outside_function: false,
        auto_accessors: false,
        explicit_resource_management: false,
    })
}

/// Minifies `source` and returns the minified JavaScript text.
///
/// # Errors
///
/// * If `source` is not syntactically valid JavaScript
/// * If emitting the minified module fails
pub fn minify(source: &str) -> Result<String, MinifyError> {
    let cm = Lrc::new(SourceMap::new(FilePathMapping::empty()));
    let globals = Globals::default();

    GLOBALS.set(&globals, || {
        let module = parse(&cm, source)?;

        let unresolved_mark = Mark::new();
        let top_level_mark = Mark::new();

        let program = Program::Module(module)
            .apply(&mut resolver(unresolved_mark, top_level_mark, false));

        let program = swc_ecma_minifier::optimize(
            program,
            cm.clone(),
            None,
            None,
            &MinifyOptions {
                compress: Some(CompressOptions {
                    top_level: Some(TopLevelOptions { functions: true }),
                    ..Default::default()
                }),
                mangle: Some(MangleOptions {
                    top_level: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            },
            &ExtraOptions {
                unresolved_mark,
                top_level_mark,
                mangle_name_cache: None,
            },
        )
        .apply(&mut fixer(None));

        let code = print(&cm, &program.expect_module())?;

        log::trace!("minify: {} bytes => {} bytes", source.len(), code.len());

        Ok(code)
    })
}

fn parse(cm: &Lrc<SourceMap>, source: &str) -> Result<Module, MinifyError> {
    let fm = cm.new_source_file(
        Lrc::new(FileName::Custom("bundle.js".to_string())),
        source.to_string(),
    );

    let mut recovered = vec![];
    let module = parse_file_as_module(&fm, syntax(), EsVersion::Es2015, None, &mut recovered);

    match module {
        Ok(module) => recovered
            .into_iter()
            .next()
            .map_or(Ok(module), |err| Err(parse_error(cm, &err))),
        Err(err) => Err(parse_error(cm, &err)),
    }
}

fn parse_error(cm: &Lrc<SourceMap>, err: &swc_ecma_parser::error::Error) -> MinifyError {
    let loc = cm.lookup_char_pos(err.span().lo);

    MinifyError::Parse {
        line: loc.line,
        column: loc.col_display + 1,
        message: err.kind().msg().to_string(),
    }
}

fn print(cm: &Lrc<SourceMap>, module: &Module) -> Result<String, MinifyError> {
    let mut buf = vec![];

    {
        let wr = JsWriter::new(cm.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: swc_ecma_codegen::Config::default().with_minify(true),
            cm: cm.clone(),
            comments: None,
            wr: Box::new(omit_trailing_semi(wr)),
        };

        emitter.emit_module(module)?;
    }

    Ok(String::from_utf8(buf)?)
}
