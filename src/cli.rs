use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use movie_bst::interpreter::Interpreter;

#[derive(Parser)]
#[command(name = "movie-bst")]
#[command(about = "Runs a file of movie catalogue commands against a binary search tree")]
struct Args {
    /// File of commands, one per line
    input: PathBuf,

    /// File the result lines are appended to
    #[arg(long, default_value = "result.txt")]
    output: PathBuf,

    /// Empty the output file before writing instead of appending to it
    #[arg(long)]
    truncate: bool,

    /// Log every command (otherwise controlled by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn).parse_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open command file {}", args.input.display()))?;
    let output = OpenOptions::new()
        .create(true)
        .write(true)
        .append(!args.truncate)
        .truncate(args.truncate)
        .open(&args.output)
        .with_context(|| format!("Failed to open result file {}", args.output.display()))?;

    let mut interpreter = Interpreter::new(BufWriter::new(output));
    let stats = interpreter
        .run(BufReader::new(input))
        .with_context(|| {
            format!(
                "Failed running {} into {}",
                args.input.display(),
                args.output.display()
            )
        })?;

    log::debug!("{stats:?}");
    Ok(())
}
