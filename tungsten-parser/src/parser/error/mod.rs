pub mod kind;

use ariadne::Report;
use std::ops::Range;
use tungsten_error::ErrorKind;

/// A general parsing error.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,

    /// Whether the error is fatal. A non-fatal error means that the current alternative did not
    /// match and the parser should try the next one. A fatal error aborts parsing.
    pub fatal: bool,
}

impl Error {
    /// Creates a new non-fatal error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), fatal: false }
    }

    /// Creates a new fatal error with the given spans and kind.
    pub fn new_fatal(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind), fatal: true }
    }

    /// Marks the error as fatal. Used once the parser has committed to a production, where a
    /// failure can no longer be recovered from by trying another alternative.
    pub fn into_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// Returns true if this error is of the given kind.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl From<Error> for tungsten_error::Error {
    fn from(err: Error) -> Self {
        Self { spans: err.spans, kind: err.kind }
    }
}
