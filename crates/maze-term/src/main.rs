//! Carve a maze and watch A* solve it.
//!
//! Run: cargo run --bin maze -- --rows 20 --cols 12 --seed 7
//!
//! Log records (filtered by `RUST_LOG`) go to stderr with `--no-animate`.
//! While animating they would draw over the screen, so they are only kept
//! when `--log-file` is given.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use env_logger::Target;
use maze_session::config::DEFAULT_SIZE;
use maze_session::{Session, SessionConfig};
use maze_term::{animate, render_ascii};

#[derive(Parser, Debug)]
#[command(name = "maze", about = "Generate a perfect maze and solve it with A*")]
struct Args {
    /// Cells along x.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    rows: i32,
    /// Cells along y.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    cols: i32,
    /// Carving seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Milliseconds between solver steps.
    #[arg(long, default_value_t = 30)]
    delay_ms: u64,
    /// Solve immediately and only print the result.
    #[arg(long)]
    no_animate: bool,
    /// Write log records to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn log_target(args: &Args) -> io::Result<Option<Target>> {
    match (&args.log_file, args.no_animate) {
        (Some(path), _) => Ok(Some(Target::Pipe(Box::new(File::create(path)?)))),
        (None, true) => Ok(Some(Target::Stderr)),
        (None, false) => Ok(None),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if let Some(target) = log_target(&args)? {
        env_logger::Builder::from_default_env().target(target).init();
    }

    let mut config = SessionConfig::default().with_size(args.rows, args.cols);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut session = Session::with_config(&config)?;

    if args.no_animate {
        session.run_to_end(None);
    } else {
        animate(&mut session, Duration::from_millis(args.delay_ms))?;
    }

    print!("{}", render_ascii(&session));
    match session.reconstruct_path() {
        Ok(path) => println!("shortest path length: {}", path.len()),
        Err(e) => println!("{e}"),
    }
    if let Some(seed) = session.seed() {
        println!("seed: {seed}");
    }
    Ok(())
}
