//! Terminal front end: plays one board at a time on stdin/stdout.
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sweeper_core::{CellCount, Coord};

mod app;
mod clock;
mod command;
mod render;
mod settings;

use app::App;
use settings::{Difficulty, Settings};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start from a preset board
    #[arg(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    columns: Option<Coord>,

    #[arg(long)]
    mines: Option<CellCount>,

    /// TOML file with `difficulty`, `rows`, `columns` and `mines`
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            difficulty: self.difficulty,
            rows: self.rows,
            columns: self.columns,
            mines: self.mines,
        }
    }
}

fn random_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |since| since.as_nanos() as u64)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let file_settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let config = file_settings
        .overlay(args.settings())
        .resolve()
        .context("invalid board settings")?;
    let seed = args.seed.unwrap_or_else(random_seed);
    tracing::debug!(?config, seed, "starting");

    App::new(config, seed, io::stdin().lock(), io::stdout().lock())?.run()
}
