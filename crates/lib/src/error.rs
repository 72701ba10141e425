//! Errors raised while loading and analyzing location lists.

use core::fmt;
use core::ops::Range;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::input::{IStrError, Size, NL};

/// Error raised when loading an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: no such file", .path.display())]
    NotFound { path: Box<Path> },
    #[error("{}: failed to read input", .path.display())]
    Read {
        path: Box<Path>,
        #[source]
        source: io::Error,
    },
    #[error("{}:{}: malformed line", .path.display(), .pos)]
    Parse {
        path: Box<Path>,
        pos: LineCol,
        #[source]
        source: IStrError,
    },
}

impl LoadError {
    /// Construct a read error, distinguishing missing files.
    pub(crate) fn io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.into() },
            _ => LoadError::Read {
                path: path.into(),
                source: error,
            },
        }
    }

    /// Construct a parse error, resolving the position of the error inside of
    /// `data`.
    pub(crate) fn parse(path: &Path, data: &[u8], error: IStrError) -> Self {
        LoadError::Parse {
            path: path.into(),
            pos: pos_from(data, error.span()),
            source: error,
        }
    }
}

/// The left and right lists are of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("left list has {left} entries, but right list has {right}")]
pub struct LengthMismatch {
    pub left: usize,
    pub right: usize,
}

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    pub(crate) const EMPTY: Self = Self::new(0, 0);

    pub(crate) const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// One-based line number.
    pub fn line(&self) -> usize {
        self.line + 1
    }

    /// One-based column number.
    pub fn column(&self) -> usize {
        self.column + 1
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line(), self.column())
    }
}

/// Get the input position of the start of `span`.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let span = Size::usize_range(span);

    let Some(d) = data.get(..span.start) else {
        return LineCol::EMPTY;
    };

    let line = memchr::memchr_iter(NL, d).count();
    let start = memchr::memrchr(NL, d).map(|n| n + 1).unwrap_or_default();
    LineCol::new(line, span.start - start)
}
