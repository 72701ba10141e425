//! Input parser.

mod error;
mod size;

#[cfg(test)]
mod tests;

use core::mem;
use core::ops;
use std::str::from_utf8;

pub use self::error::{ErrorKind, IStrError};
pub use self::size::Size;

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// A cursor over borrowed input data which keeps track of its byte offset into
/// the original data, so that errors can be mapped back to a line and column.
#[derive(Debug, Clone, Copy)]
pub struct IStr<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Offset of `data` into the original input.
    index: Size,
}

impl<'a> IStr<'a> {
    /// Construct a new input processor.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrayvec::ArrayVec;
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"3   4\n4 3\n");
    /// let line = input.try_line::<ArrayVec<i64, 2>>().unwrap().unwrap();
    /// assert_eq!(&line[..], &[3, 4]);
    /// let line = input.try_line::<ArrayVec<i64, 2>>().unwrap().unwrap();
    /// assert_eq!(&line[..], &[4, 3]);
    /// assert!(input.is_empty());
    /// ```
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_index(data, Size::ZERO)
    }

    #[inline]
    fn with_index(data: &'a [u8], index: Size) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> Size {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if the line
    /// is not a valid value of type `T`, returns `Ok(None)` if there is no
    /// more data to process.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        let Some(output) = line.try_next()? else {
            return Ok(None);
        };

        Ok(Some(output))
    }

    /// Try to parse the next whitespace-delimited word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(Size, T)>>
    where
        T: FromInput<'a>,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            self.advance(n);
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((Size::new(s), value)))
    }

    /// Split once at the given byte or until the end of string, returning the
    /// input before the split.
    fn split_once(&mut self, b: u8) -> Option<IStr<'a>> {
        if self.data.is_empty() {
            return None;
        }

        let start = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = mem::take(&mut self.data);
            self.index.advance(data.len());
            return Some(IStr::with_index(data, start));
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(IStr::with_index(data, start))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = self.data.get(n..).unwrap_or_default();
        self.index.advance(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr<'a>> {
        let index = self.index.checked_add(Size::new(range.start))?;
        Some(Self::with_index(self.data.get(range)?, index))
    }
}

/// A value that can be parsed from input.
pub trait FromInput<'a>: Sized {
    /// Optionally try to consume input ignoring leading whitespace by default.
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>>;
}

impl<'a> FromInput<'a> for i64 {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let index = p.index;

        let Some((n, string)) = p.try_next_word::<&str>()? else {
            return Ok(None);
        };

        let Ok(value) = string.parse::<i64>() else {
            return Err(IStrError::new(
                index.saturating_add(n)..p.index,
                ErrorKind::NotInteger(string.into()),
            ));
        };

        Ok(Some(value))
    }
}

impl<'a> FromInput<'a> for &'a [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        if p.data.is_empty() {
            return Ok(None);
        }

        let data = mem::take(&mut p.data);
        p.index.advance(data.len());
        Ok(Some(data))
    }
}

impl<'a> FromInput<'a> for &'a str {
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl<'a, T, const N: usize> FromInput<'a> for arrayvec::ArrayVec<T, N>
where
    T: FromInput<'a>,
{
    #[inline]
    fn try_from_input(p: &mut IStr<'a>) -> Result<Option<Self>> {
        let index = p.index;
        let mut output = arrayvec::ArrayVec::new();

        while let Some(element) = T::try_from_input(p)? {
            if output.try_push(element).is_err() {
                return Err(IStrError::new(index..p.index, ErrorKind::ArrayCapacity(N)));
            }
        }

        Ok(Some(output))
    }
}
