use difference::{Changeset, Difference};
use lazy_static::lazy_static;
use std::fs;
use std::path::{Path, PathBuf};

lazy_static! {
    pub static ref BLESS: bool = std::env::var("BLESS") == Ok("1".into());
}

/// Path of a file in `frac/src/test`.
pub fn test_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("test")
        .join(name)
}

/// Asserts that `actual` matches the contents of the golden file `name`. With `BLESS=1`, the
/// golden file is overwritten instead.
pub fn check_golden(name: &str, actual: &str) {
    let path = test_file(name);
    if *BLESS {
        fs::write(&path, actual).unwrap();
        return;
    }

    let expected = fs::read_to_string(&path).unwrap();
    if expected == actual {
        return;
    }

    let Changeset { diffs, .. } = Changeset::new(&expected, actual, "\n");
    let mut report = String::new();
    for diff in diffs {
        match diff {
            Difference::Same(s) => report.push_str(&prefix_lines(" ", &s)),
            Difference::Add(s) => report.push_str(&prefix_lines("+", &s)),
            Difference::Rem(s) => report.push_str(&prefix_lines("-", &s)),
        }
    }
    panic!(
        "{} does not match (run with BLESS=1 to update):\n{}",
        path.display(),
        report
    );
}

fn prefix_lines(prefix: &str, s: &str) -> String {
    s.lines().map(|l| format!("{}{}\n", prefix, l)).collect()
}

/// Runs a program through frac with default options.
macro_rules! frac {
    ($program:expr) => {
        frac!($program, "pretty")
    };
    ($program:expr, $form:expr) => {
        crate::run_frac(crate::Opts {
            program: Some($program.to_owned()),
            emit_format: $form.to_owned(),
            explain_diagnostic: None,
            color: false,
            verbose: false,
        })
    };
}
