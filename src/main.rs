use std::io;

use lib::cli;
use lib::prelude::*;

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    if opts.help {
        print!("{}", cli::USAGE);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut o = Output::new(stdout.lock());
    cli::run(&opts, &mut o)?;
    Ok(())
}
