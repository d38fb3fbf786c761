//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors produced by the parser point at regions of the source expression. Errors produced while
//! manipulating trees (differentiation, evaluation, Taylor expansion) are not associated with any
//! source, and are created with no spans.

// lets `#[derive(ErrorKind)]` refer to `tungsten_error::EXPR` from within this crate's tests
extern crate self as tungsten_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as a [`&dyn Any`](Any), so that callers can inspect which kind of error
    /// occurred.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that does not point at any source code.
    pub fn without_spans(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns true if this error is of the given kind.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the error kind, if it is of the given type.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report the error to stderr, highlighting the given source.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        let report = self.build_report(src_id);
        if report.eprint((src_id, Source::from(input))).is_err() {
            eprintln!("{:?}", self.kind);
        }
    }

    /// Renders the report into a string, including ANSI color codes.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> String {
        let mut buf = Vec::new();
        let report = self.build_report(src_id);
        match report.write((src_id, Source::from(input)), &mut buf) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{:?}", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Fmt;
    use super::*;
    use tungsten_attrs::ErrorKind;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "unexpected end of input",
        labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
        help = "finish the expression",
    )]
    struct UnexpectedEnd;

    #[derive(Debug, ErrorKind)]
    #[error(message = format!("`{}` is not defined", name))]
    struct Undefined {
        name: String,
    }

    fn strip(s: String) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn report_with_span() {
        let err = Error::new(vec![2..3], UnexpectedEnd);
        let report = strip(err.report_to_string("input", "x +"));
        assert!(report.contains("unexpected end of input"));
        assert!(report.contains("you might need to add another expression here"));
        assert!(report.contains("finish the expression"));
    }

    #[test]
    fn report_without_span() {
        let err = Error::without_spans(Undefined { name: "y".to_string() });
        let report = strip(err.report_to_string("input", "x"));
        assert!(report.contains("`y` is not defined"));
    }

    #[test]
    fn downcast_kind() {
        let err = Error::without_spans(Undefined { name: "t".to_string() });
        assert!(err.is::<Undefined>());
        assert!(!err.is::<UnexpectedEnd>());
        assert_eq!(err.downcast_ref::<Undefined>().unwrap().name, "t");
    }
}
