//! CLI helpers.

mod output;
mod stderr_logger;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, bail, Result};

pub use self::output::Output;

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Input file used when none is given on the command line.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Command-line usage.
pub const USAGE: &str = "\
Usage: historian [OPTIONS] [INPUT]

Prints the total distance and the similarity score of the two location lists
in INPUT (default: input.txt).

Options:
  -v, --verbose    Use verbose output
      --elapsed    Show duration
  -h, --help       Show this help
";

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Print usage and exit.
    pub help: bool,
    /// Run in verbose mode.
    pub verbose: bool,
    /// Print how long solving took.
    pub elapsed: bool,
    /// Input file.
    input: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options from the process arguments and set up logging.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        log::set_max_level(if opts.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });

        log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
        Ok(opts)
    }

    /// Parse CLI options from the given arguments, excluding the program name.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(string) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match string {
                "-h" | "--help" => {
                    opts.help = true;
                }
                "-v" | "--verbose" => {
                    opts.verbose = true;
                }
                "--elapsed" => {
                    opts.elapsed = true;
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') => {
                    bail!("unsupported argument: {other}");
                }
                _ => {
                    opts.push_input(arg)?;
                }
            }
        }

        for arg in it {
            if arg.to_str().is_none() {
                bail!("non-utf8 argument");
            }

            opts.push_input(arg)?;
        }

        Ok(opts)
    }

    /// The input file to read.
    pub fn input(&self) -> &Path {
        self.input.as_deref().unwrap_or(Path::new(DEFAULT_INPUT))
    }

    fn push_input(&mut self, arg: OsString) -> Result<()> {
        if self.input.is_some() {
            bail!("unexpected argument: {}", arg.to_string_lossy());
        }

        self.input = Some(PathBuf::from(arg));
        Ok(())
    }
}

/// Load the input named by `opts`, solve both parts and write the answers.
///
/// Nothing is written unless both parts were solved.
pub fn run<O>(opts: &Opts, o: &mut Output<O>) -> Result<()>
where
    O: Write,
{
    let lists = crate::load(opts.input())?;

    let start = Instant::now();
    let total_distance = lists.total_distance();
    let similarity_score = lists.similarity_score();
    let elapsed = start.elapsed();

    log::debug!("solved {} pairs in {elapsed:?}", lists.len());

    o.answers(total_distance, similarity_score)?;

    if opts.elapsed {
        o.elapsed(elapsed)?;
    }

    Ok(())
}
