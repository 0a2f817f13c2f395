//! User-facing frac diagnostics.
//!
//! Renders [libfrac diagnostics][libfrac::diagnostics] against the program they were produced
//! for. Programs are a single line read from the command line, so snippets carry no origin.

use libfrac::diagnostics::{AssociatedDiagnostic, Diagnostic, DiagnosticKind};
use libfrac::common::Span;

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

/// Renders `diagnostics` for `program`, separated by blank lines.
pub fn emit_frac_diagnostics(program: &str, diagnostics: &[Diagnostic], color: bool) -> String {
    // End-of-program spans are empty and sit one past the last character. The trailing space
    // gives them a column to point at once widened.
    let source = format!("{} ", program);

    diagnostics
        .iter()
        .map(|diagnostic| render(&source, diagnostic, color))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(source: &str, diagnostic: &Diagnostic, color: bool) -> String {
    let label = diagnostic.msg.clone().unwrap_or_default();
    let annotation_type = annotation_type(diagnostic.kind);

    let annotations = std::iter::once(SourceAnnotation {
        label: &label,
        annotation_type,
        range: widen_empty(diagnostic.span),
    })
    .chain(diagnostic.associated_diagnostics.iter().map(|assoc| SourceAnnotation {
        label: &assoc.msg,
        annotation_type: self::annotation_type(assoc.kind),
        range: widen_empty(assoc.span),
    }))
    .collect();

    let snippet = Snippet {
        title: Some(Annotation {
            label: Some(&diagnostic.title),
            id: diagnostic.code,
            annotation_type,
        }),
        footer: diagnostic
            .unspanned_associated_diagnostics
            .iter()
            .map(footer_annotation)
            .collect(),
        slices: vec![Slice {
            source,
            line_start: 1,
            origin: None,
            fold: true,
            annotations,
        }],
        opt: FormatOptions {
            color,
            ..Default::default()
        },
    };
    format!("{}\n", DisplayList::from(snippet))
}

/// Widens an empty span, such as an end-of-program span, to the column after it.
fn widen_empty(span: Span) -> (usize, usize) {
    if span.lo == span.hi {
        (span.lo, span.hi + 1)
    } else {
        (span.lo, span.hi)
    }
}

fn footer_annotation(diagnostic: &AssociatedDiagnostic) -> Annotation {
    Annotation {
        label: Some(&diagnostic.msg),
        id: None,
        annotation_type: annotation_type(diagnostic.kind),
    }
}

fn annotation_type(kind: DiagnosticKind) -> AnnotationType {
    match kind {
        DiagnosticKind::Error => AnnotationType::Error,
        DiagnosticKind::Note => AnnotationType::Note,
        DiagnosticKind::Help => AnnotationType::Help,
    }
}
