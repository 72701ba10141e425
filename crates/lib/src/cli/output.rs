use core::fmt;
use core::time::Duration;
use std::io::{self, Write};

/// Writes answers to an output stream, one per line.
pub struct Output<O> {
    out: O,
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O) -> Self {
        Self { out }
    }

    /// Write the answers to both parts.
    pub fn answers(
        &mut self,
        part1: impl fmt::Display,
        part2: impl fmt::Display,
    ) -> io::Result<()> {
        writeln!(self.out, "{part1}")?;
        writeln!(self.out, "{part2}")?;
        Ok(())
    }

    /// Write how long solving took, truncated to microseconds.
    pub fn elapsed(&mut self, elapsed: Duration) -> io::Result<()> {
        let micros = Duration::new(elapsed.as_secs(), elapsed.subsec_micros() * 1000);
        writeln!(self.out, "elapsed: {micros:?}")
    }

    pub fn into_inner(self) -> O {
        self.out
    }
}
