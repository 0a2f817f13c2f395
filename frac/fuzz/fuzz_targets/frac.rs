#![no_main]
use libfuzzer_sys::fuzz_target;

use frac::{run_frac, Opts};

// Every program must produce either a result or diagnostics, never a panic.
fuzz_target!(|program: String| {
    for form in &["pretty", "s-expression", "latex", "debug"] {
        let result = run_frac(Opts {
            program: Some(program.clone()),
            emit_format: form.to_string(),
            explain_diagnostic: None,
            color: false,
            verbose: false,
        });
        match result.code {
            0 => assert!(result.stderr.is_empty()),
            1 => assert!(result.stdout.is_empty()),
            code => panic!("unexpected exit code {}", code),
        }
    }
});
