use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use u_sga::problem::{Mode, SinBowl};
use u_sga::report::ConsoleReporter;
use u_sga::sga::{SgaConfig, SgaRunner};

/// Minimizes (or maximizes) the sin-bowl surface with a simple GA.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// TOML file with run parameters; missing keys keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generation budget
    #[arg(short, long)]
    generations: Option<usize>,

    /// Search for the maximum instead of the minimum
    #[arg(long)]
    maximize: bool,

    /// Replace crossover with random children at this probability
    #[arg(long, value_name = "PROBABILITY")]
    alternate: Option<f64>,
}

fn load_config(path: &Path) -> Result<SgaConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SgaConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(n) = args.generations {
        config = config.with_max_generations(n);
    }
    if args.maximize {
        config = config.with_mode(Mode::Maximize);
    }
    if let Some(p) = args.alternate {
        config = config.with_alternate_crossover(p);
    }
    log::debug!("configuration: {config:?}");

    let mut reporter = ConsoleReporter::new(io::stdout().lock());
    SgaRunner::run_with_reporter(SinBowl, &config, &mut reporter)
        .context("invalid configuration")?;
    Ok(())
}
