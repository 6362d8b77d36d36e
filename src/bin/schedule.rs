//! Reads meeting-room requests as `start duration` pairs and prints the
//! largest number that can be granted without overlap.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_priority_queue::input::read_source;
use rust_priority_queue::scheduling::{max_requests, parse_requests};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to read requests from. Reads stdin when absent.
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
    let requests = parse_requests(&text).context("invalid request list")?;
    if args.verbose {
        eprintln!("read {} requests", requests.len());
    }

    let granted = max_requests(requests);
    println!("{}", granted);

    Ok(())
}
