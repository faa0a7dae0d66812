use std::error::Error;
use std::io::{self, BufWriter};
use std::process;

use clap::Parser;
use log::LevelFilter;

use shellsort::io::sort_stream;
use shellsort::GapSequence;

const DEMO_INPUT: [i64; 8] = [23, 12, 1, 8, 34, 54, 2, 3];

/// Sorts whitespace separated integers from stdin with Shell sort and prints them to stdout.
#[derive(Parser)]
#[command(name = "shellsort", version)]
struct Cli {
    /// Gap sequence to use: shell, knuth or sedgewick.
    #[arg(long, default_value = "shell")]
    sequence: GapSequence,

    /// Sort a small built-in array and print it before and after.
    #[arg(long)]
    demo: bool,
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if cli.demo {
        let mut data = DEMO_INPUT;
        println!("Before: {data:?}");
        shellsort::sort(&mut data, cli.sequence);
        println!("After:  {data:?}");
        return Ok(());
    }

    sort_stream(
        io::stdin().lock(),
        BufWriter::new(io::stdout().lock()),
        cli.sequence,
    )?;

    Ok(())
}
