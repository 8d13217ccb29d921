use std::{path::PathBuf, process::exit, time::Instant};

use clap::Parser;
use pipe_maze::{enclosed, trace::trace_loop, Grid};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_INPUT: &str = "input.txt";

#[derive(Parser)]
#[command(about = "Trace the pipe loop and count the tiles it encloses")]
struct Cli {
    #[arg(short, long)]
    /// Print out how long each stage took
    timings: bool,

    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    /// Only run this part
    part: Option<u8>,

    #[arg(long)]
    /// Print the scaled grid after flooding the outside
    render: bool,

    /// Puzzle input
    #[arg(default_value = DEFAULT_INPUT)]
    file: PathBuf,
}

fn time<T>(timings: bool, what: &str, f: impl FnOnce() -> T) -> T {
    let t0 = Instant::now();
    let res = f();
    if timings {
        eprintln!("{what} in {:?}", t0.elapsed());
    }
    res
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let grid = match time(cli.timings, "Parsed", || Grid::load(&cli.file)) {
        Ok(grid) => grid,
        Err(err @ pipe_maze::Error::Io { .. }) => {
            eprintln!("{err}");
            exit(1);
        }
        Err(err) => {
            eprintln!("Could not parse grid: {err}");
            exit(2);
        }
    };

    let pipe = match time(cli.timings, "Traced", || trace_loop(&grid)) {
        Ok(pipe) => pipe,
        Err(err) => {
            eprintln!("Could not trace the loop: {err}");
            exit(3);
        }
    };

    if cli.part != Some(2) {
        println!("Day 10 part 1: {}", pipe.farthest());
    }

    if cli.part != Some(1) {
        let scaled = time(cli.timings, "Filled", || enclosed(&grid, &pipe));
        println!("Day 10 part 2: {}", scaled.count_enclosed());
        if cli.render {
            println!("{scaled}");
        }
    }
}
