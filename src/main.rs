//! # BASIC
//!
//! A tiny line-numbered BASIC with an interactive terminal.
//!

mod term;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "basic", version, about = "A tiny line-numbered BASIC")]
struct Args {
    /// Program file to load at start
    program: Option<PathBuf>,

    /// Run the loaded program immediately
    #[arg(short, long)]
    run: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log: String,

    /// Statements executed between checks for Ctrl-C
    #[arg(long, default_value_t = 5000)]
    cycles: usize,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)),
        )
        .with_writer(std::io::stderr)
        .init();

    term::main(term::Options {
        program: args.program,
        run: args.run,
        cycles: args.cycles.max(1),
    });
}
