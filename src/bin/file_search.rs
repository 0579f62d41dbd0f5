
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use string_permutations::*;

/// Recursively searches a directory tree and reports how many files match each name.
#[derive(Parser)]
#[command(name = "file_search")]
struct Args {
    /// Directory to start the search from
    directory: PathBuf,

    /// One or more file names to look for
    #[arg(required = true)]
    file_names: Vec<String>,

    /// Compare file names without regard to letter case
    #[arg(short, long)]
    ignore_case: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(());
        }
    };
    logger::init(args.verbose);

    let case = if args.ignore_case {
        CaseSensitivity::Insensitive
    } else {
        CaseSensitivity::Sensitive
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_search_report(&mut out, &args.directory, &args.file_names, case)?;
    out.flush()?;

    Ok(())
}
