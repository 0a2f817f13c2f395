//! The frac app. For the fraction type itself, see [libfrac's documentation](libfrac).

#![deny(missing_docs)]

#[cfg(test)]
mod test;

mod demo;
pub use demo::run_demo;

mod diagnostics;
use diagnostics::emit_frac_diagnostics;

use libfrac::diagnostics::Diagnostic;
use libfrac::{evaluate, parse, scan, Emit, EmitFormat};

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// For wasm, use wee_alloc as a global allocator.
#[cfg(all(feature = "wasm", not(test)))]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Options to run frac with.
#[cfg_attr(feature = "wasm", derive(Serialize, Deserialize))]
pub struct Opts {
    /// Program to evaluate. When [None](Option::None), the demo is run instead.
    pub program: Option<String>,
    /// How the result of frac's execution should be emitted.
    pub emit_format: String,
    /// When is [Some](Option::Some) diagnostic code, will explain that code.
    pub explain_diagnostic: Option<String>,
    /// When true, diagnostics will be colored.
    pub color: bool,
    /// When true, debug logs are written to stderr.
    pub verbose: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .after_help(
            "With no PROGRAM, runs a demo of every fraction operator.\n\
             Programs starting with \"-\" must follow \"--\", like `frac -- -1/2`.",
        )
        .arg(
            clap::Arg::with_name("program")
                .help("Program to evaluate, like \"1/2 + 1/4\" or \"1/2 >= 2/4\""),
        )
        .arg(
            clap::Arg::with_name("output-form")
                .short("o")
                .long("output-form")
                .next_line_help(true)
                .help(
                    "Frac emit format. Possible values:\n\
                    \tpretty:       Human-readable text, like \"1/2\".\n\
                    \ts-expression: Prefixed s-expression, like \"(/ 1 2)\".\n\
                    \tlatex:        LaTeX math mode code, like \"\\frac{1}{2}\".\n\
                    \tdebug:        Opaque internal representation. Note: this format is not stable.\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("pretty")
                .takes_value(true)
                .possible_values(&["pretty", "s-expression", "latex", "debug"]),
        )
        .arg(
            clap::Arg::with_name("explain")
                .long("explain")
                .value_name("diagnostic")
                .help("Provide a detailed explanation for a diagnostic code.")
                .takes_value(true),
        )
        .arg(
            clap::Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Write debug logs to stderr. RUST_LOG takes precedence."),
        );
    let matches = parser(matches)?;

    Ok(Opts {
        program: matches.value_of("program").map(str::to_owned),
        emit_format: matches.value_of("output-form").unwrap_or("pretty").into(),
        explain_diagnostic: matches.value_of("explain").map(str::to_owned),
        color,
        verbose: matches.is_present("verbose"),
    })
}

/// Output of a frac execution.
#[cfg_attr(feature = "wasm", derive(Serialize, Deserialize))]
#[derive(Default, Debug)]
pub struct FracResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
}

/// Builds a [FracResult](self::FracResult).
struct FracResultBuilder {
    program: String,
    emit_format: EmitFormat,
    color: bool,
    stdout: String,
    stderr: String,
}

impl FracResultBuilder {
    fn new(program: &str, emit_format: impl Into<EmitFormat>, color: bool) -> Self {
        Self {
            program: program.to_owned(),
            emit_format: emit_format.into(),
            color,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn emit(&mut self, obj: &dyn Emit) {
        self.stdout.push_str(&obj.emit(self.emit_format));
    }

    fn err(&mut self, diagnostics: &[Diagnostic]) {
        self.stderr.push_str(&emit_frac_diagnostics(
            &self.program,
            diagnostics,
            self.color,
        ));
    }

    fn ok(self) -> FracResult {
        FracResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }

    fn failed(self) -> FracResult {
        FracResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }
}

/// Runs frac end-to-end.
pub fn run_frac(opts: Opts) -> FracResult {
    let program = opts.program.unwrap_or_default();
    let mut result = FracResultBuilder::new(&program, opts.emit_format, opts.color);

    if let Some(diag_code) = opts.explain_diagnostic {
        let codes = Diagnostic::all_codes_with_explanations();
        return match codes.get::<str>(&diag_code) {
            Some(explanation) => {
                result.stdout.push_str(explanation);
                result.ok()
            }
            None => {
                result
                    .stderr
                    .push_str(&format!("{} is not a diagnostic code", diag_code));
                result.failed()
            }
        };
    }

    if program.trim().is_empty() {
        let demo = run_demo(result.emit_format);
        result.stdout.push_str(&demo);
        return result.ok();
    }

    tracing::debug!(%program, "running program");
    let scanned = scan(&*program);
    result.err(&scanned.diagnostics);
    if !scanned.diagnostics.is_empty() {
        return result.failed();
    }

    let (expr, diagnostics) = parse(scanned.tokens);
    result.err(&diagnostics);
    let expr = match expr {
        Some(expr) if diagnostics.is_empty() => expr,
        _ => return result.failed(),
    };

    match evaluate(&expr) {
        Ok(value) => {
            result.emit(&value);
            result.ok()
        }
        Err(diagnostic) => {
            result.err(&[diagnostic]);
            result.failed()
        }
    }
}

/// Runs frac through a wasm entry point.
/// `opts` must be a JS object with the same fields as [Opts](self::Opts).
/// Returns a JS object with the same fields as [FracResult](self::FracResult).
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn run_frac_wasm(opts: JsValue) -> JsValue {
    let result = match opts.into_serde::<Opts>() {
        Ok(opts) => run_frac(opts),
        Err(e) => FracResult {
            code: 2,
            stderr: e.to_string(),
            ..FracResult::default()
        },
    };
    JsValue::from_serde(&result).unwrap_or(JsValue::NULL)
}
