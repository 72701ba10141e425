use core::fmt;
use core::ops::Range;

use crate::input::Size;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(Box<str>),
    NotUtf8,
    BadArray(usize, usize),
    ArrayCapacity(usize),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::BadArray(expected, actual) => {
                write!(f, "expected {expected} columns, but got {actual}")
            }
            ErrorKind::ArrayCapacity(cap) => write!(f, "expected {cap} columns, but got more"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Error raised through string processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IStrError {
    pub(crate) span: Range<Size>,
    pub(crate) kind: ErrorKind,
}

impl IStrError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<Size>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The byte span of the input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<Size> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for IStrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl std::error::Error for IStrError {}
