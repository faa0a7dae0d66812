mod benchmark;
mod error;
mod external;
mod measure;
mod plot;
mod report;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{info, LevelFilter};

use shellsort::GapSequence;

use crate::benchmark::{run_benchmark, InProcess};
use crate::error::Result;
use crate::external::External;

/// Times Shell sort over growing random inputs and reports mean and standard deviation per size.
#[derive(Parser)]
#[command(name = "shellsort-bench", version)]
struct Cli {
    /// Comma separated input sizes.
    #[arg(long, value_delimiter = ',', default_value = "1000,5000,10000,20000,50000")]
    sizes: Vec<usize>,

    /// Repetitions per size, repetition `r` uses seed `r`.
    #[arg(long, default_value = "20")]
    reps: NonZeroUsize,

    /// Gap sequence to use: shell, knuth or sedgewick.
    #[arg(long, default_value = "shell")]
    sequence: GapSequence,

    /// Executable to compare against, called as `<exe> --sequence <name>` with the numbers on
    /// stdin.
    #[arg(long)]
    external: Option<PathBuf>,

    #[arg(long, default_value = "results_shell_sort.csv")]
    out_csv: PathBuf,

    #[arg(long)]
    out_json: Option<PathBuf>,

    /// Directory for the PNG charts, no charts are drawn without it.
    #[arg(long)]
    plot_dir: Option<PathBuf>,
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    info!(
        "sequence={} sizes={:?} reps={}",
        cli.sequence, cli.sizes, cli.reps
    );

    let rust_rows = run_benchmark(&mut InProcess::new(cli.sequence), &cli.sizes, cli.reps)?;

    let external_rows = match cli.external {
        Some(program) => run_benchmark(
            &mut External::new(program, cli.sequence),
            &cli.sizes,
            cli.reps,
        )?,
        None => Vec::new(),
    };

    let rows = [rust_rows.as_slice(), external_rows.as_slice()].concat();

    report::write_csv_file(&cli.out_csv, &rows)?;
    info!("wrote {}", cli.out_csv.display());

    if let Some(path) = &cli.out_json {
        report::write_json_file(path, &rows)?;
        info!("wrote {}", path.display());
    }

    if let Some(dir) = &cli.plot_dir {
        plot::draw_charts(dir, &rust_rows, &external_rows)?;
    }

    Ok(())
}
