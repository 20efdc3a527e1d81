//! Bracket simulator CLI.
//!
//! Load seed data, play the tournament round by round, print the champion.

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use bracket_sim::{load_seed_table, report, SimConfig, Simulation};

struct Options {
    seed_file: PathBuf,
    rng_seed: Option<u64>,
    quiet: bool,
}

fn print_usage() {
    println!("Bracket Simulator");
    println!();
    println!("Usage:");
    println!("  bracket_sim <seed-file> [--seed N] [--quiet]");
    println!();
    println!("Arguments:");
    println!("  <seed-file>   JSON (or .toml) file mapping the four regions to seeds 1-16");
    println!();
    println!("Options:");
    println!("  --seed, -s N  Fix the random seed for a replayable run");
    println!("  --quiet, -q   Print only the championship winner");
    println!();
    println!("Examples:");
    println!("  bracket_sim data/bracket.json");
    println!("  bracket_sim data/bracket.json --seed 7 --quiet");
}

fn parse_options(args: &[String]) -> Option<Options> {
    let mut seed_file = None;
    let mut rng_seed = None;
    let mut quiet = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    rng_seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--quiet" | "-q" => quiet = true,
            arg => {
                if seed_file.is_none() {
                    seed_file = Some(PathBuf::from(arg));
                }
            }
        }
        i += 1;
    }

    seed_file.map(|seed_file| Options {
        seed_file,
        rng_seed,
        quiet,
    })
}

fn run(options: &Options) -> Result<()> {
    let table = load_seed_table(&options.seed_file).context("failed to load seed data")?;

    let simulation = Simulation::new(SimConfig {
        rng_seed: options.rng_seed,
        verbose: !options.quiet,
    });
    let champion = simulation
        .run(&table)
        .context("bracket resolution failed")?;

    report::print_champion(&champion);
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || matches!(args[1].as_str(), "help" | "--help" | "-h") {
        print_usage();
        return;
    }

    let options = match parse_options(&args[1..]) {
        Some(options) => options,
        None => {
            print_usage();
            return;
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
