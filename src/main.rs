
use std::io::{self, BufRead, Write};

use clap::Parser;

use string_permutations::*;

/// Prints every permutation of a string, first from the recursive generator and then from the
/// iterative (Heap's algorithm) generator, each followed by its count.
///
/// Anything not given on the command line is asked for interactively.
#[derive(Parser)]
#[command(name = "permutations")]
struct Args {
    /// The string to permute
    input: Option<String>,

    /// Keep repeated permutations ("true") or drop them (anything else)
    #[arg(long, value_name = "true|false")]
    allow_duplicates: Option<String>,

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

    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    let stdout = io::stdout();

    let input = match args.input {
        Some(input) => input.trim().to_string(),
        None => prompt(&mut stdin, "Enter the string to permute: ")?,
    };

    //Don't ask about duplicates when there's nothing to permute
    let allow_duplicates = if input.is_empty() {
        false
    } else {
        match args.allow_duplicates {
            Some(answer) => parse_flag(&answer),
            None => parse_flag(&prompt(&mut stdin, "Allow duplicate permutations? (true/false): ")?),
        }
    };

    let mut out = io::BufWriter::new(stdout.lock());
    write_permutation_report(&mut out, &input, allow_duplicates)?;
    out.flush()?;

    Ok(())
}

fn prompt(stdin: &mut impl BufRead, message: &str) -> anyhow::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
