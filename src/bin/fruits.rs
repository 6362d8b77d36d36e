//! Reads a fruit count, the fruit weights and a carrying limit, then prints
//! how many rounds it takes to empty the basket.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_priority_queue::fruits::{count_rounds, parse_basket};
use rust_priority_queue::input::read_source;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to read the basket from. Reads stdin when absent.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let text = read_source(args.input.as_deref()).with_context(|| match &args.input {
        Some(path) => format!("failed to read {}", path.display()),
        None => "failed to read stdin".to_string(),
    })?;
    let basket = parse_basket(&text).context("invalid basket")?;
    if args.verbose {
        eprintln!(
            "read {} fruits, carrying limit {}",
            basket.fruits.len(),
            basket.limit
        );
    }

    let rounds = count_rounds(&basket).context("basket cannot be emptied")?;
    println!("{}", rounds);

    Ok(())
}
