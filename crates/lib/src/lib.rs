pub mod cli;
mod counter;
mod error;
pub mod input;
mod lists;


use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub use self::counter::Counter;
pub use self::error::{LengthMismatch, LineCol, LoadError};
pub use self::lists::{similarity_score, total_distance, Lists};

use self::input::IStr;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli::{Opts, Output};
    pub use crate::{Counter, Lists};
    pub use anyhow::{anyhow, bail, Context, Result};
}

/// Load location lists from the file at `path`.
///
/// Blank lines are skipped, any other line must hold exactly two integers.
pub fn load<P>(path: P) -> Result<Lists, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let data = read(path).map_err(|error| LoadError::io(path, error))?;

    log::debug!("{}: read {} bytes", path.display(), data.len());

    let lists = Lists::parse(&mut IStr::new(&data))
        .map_err(|error| LoadError::parse(path, &data, error))?;

    if lists.is_empty() {
        log::warn!("{}: no pairs in input", path.display());
    } else {
        log::debug!("{}: parsed {} pairs", path.display(), lists.len());
    }

    return Ok(lists);

    fn read(path: &Path) -> io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
