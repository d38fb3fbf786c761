use std::{io, path::PathBuf};

/// Utility enum to package errors that can occur while processing an expression.
#[derive(Debug)]
pub enum Error {
    /// Errors in the expression itself, or while differentiating / expanding it.
    Expr(tungsten_error::Error),

    /// An error that occurred while reading the input.
    Read(io::Error),

    /// An error that occurred while writing an output file.
    Write(PathBuf, io::Error),
}

impl Error {
    /// Report the error to stderr, highlighting the given input where possible.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Expr(err) => err.report_to_stderr("input", input),
            Self::Read(err) => eprintln!("error: could not read the expression: {}", err),
            Self::Write(path, err) => eprintln!("error: could not write `{}`: {}", path.display(), err),
        }
    }
}

impl From<tungsten_error::Error> for Error {
    fn from(err: tungsten_error::Error) -> Self {
        Self::Expr(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Read(err)
    }
}
