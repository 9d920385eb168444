mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use loco_testgen_core::{clock, generate_log_file, parse_iterations, Config, DEFAULT_ITERATIONS};
use rand::{rngs::SmallRng, SeedableRng};
use std::{
    io::{stdout, IsTerminal, Write},
    path::PathBuf,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// File to write the generated log to
    #[arg(short, long, value_name = "PATH")]
    ofile: Option<PathBuf>,

    /// Number of lines to generate
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = DEFAULT_ITERATIONS,
        value_parser = parse_iterations
    )]
    iterations: u64,

    /// Seed the random source for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::new(args.ofile.unwrap_or_default())
            .with_iterations(args.iterations)
            .with_seed(args.seed)
    }
}

fn main() -> Result<()> {
    let config = Config::from(Args::parse());
    logging::init();
    tracing::debug!(?config, "parsed arguments");

    println!("output will be stored in {}", config.output.display());

    let start = clock::start_instant();
    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut stdout = stdout().lock();
    let interactive = stdout.is_terminal();
    let path = config.output.display().to_string();

    generate_log_file(&config, start, &mut rng, |lines| {
        if interactive {
            write!(stdout, "\r{path}: Wrote {lines} lines")?;
            stdout.flush()?;
        }
        Ok(())
    })
    .with_context(|| format!("failed to generate log file {path:?}"))?;

    if interactive {
        writeln!(stdout)?;
    }
    Ok(())
}
