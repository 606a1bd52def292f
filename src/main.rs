#[macro_use]
extern crate log;

use clap::Parser;
use hashchain::blockchain::Blockchain;
use hashchain::config::{load_config, Config};
use hashchain::driver;
use hashchain::error::Result;
use hashchain::logger::init_logger;
use hashchain::miner::Miner;
use hashchain::render::OutputFormat;
use std::path::PathBuf;
use tokio::io::{stdin, stdout, BufReader};

/// Mines each line read from stdin into an in-memory hash chain
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Byte hashed into the genesis digest (default 42)
    #[arg(short, long)]
    seed: Option<u8>,

    /// Number of concurrent mining workers (default 16)
    #[arg(short, long)]
    workers: Option<usize>,

    /// How the chain is printed after each block
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(short, long)]
    log_level: Option<String>,
}

// Command line values win over the file, the file over the defaults
fn build_config(args: Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(workers) = args.workers {
        config.workers = workers;
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }
    Ok(config)
}

async fn start(config: Config) -> Result<()> {
    let miner = Miner::new(config.workers)?;
    let mut blockchain = Blockchain::new(config.seed, miner);
    driver::run(
        &mut blockchain,
        BufReader::new(stdin()),
        stdout(),
        config.format,
    )
    .await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let (config, level) = match build_config(args).and_then(|config| {
        let level = config.validate()?;
        Ok((config, level))
    }) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(2);
        }
    };

    init_logger(level);

    if let Err(err) = start(config).await {
        error!("{}", err);
        std::process::exit(1);
    }
}
