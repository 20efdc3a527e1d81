//! Simulation driver: seed table in, champion out.

use bracket_core::{build_entrants, Bracket, Entrant, RngSource, SeedTable, StructuralError};
use log::{debug, info};

use crate::report;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Fixed RNG seed; `None` draws from entropy.
    pub rng_seed: Option<u64>,
    /// Print each contest as it is played.
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            verbose: true,
        }
    }
}

/// Runs one tournament over a validated seed table.
pub struct Simulation {
    config: SimConfig,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// Build the bracket from `table` and play every contest through the
    /// final, returning the champion.
    pub fn run(&self, table: &SeedTable) -> Result<Entrant, StructuralError> {
        let entrants = build_entrants(table);
        let mut bracket = Bracket::build(entrants)?;

        let mut rng = match self.config.rng_seed {
            Some(seed) => {
                debug!("using fixed rng seed {}", seed);
                RngSource::seeded(seed)
            }
            None => RngSource::from_entropy(),
        };

        let verbose = self.config.verbose;
        let champion = bracket.resolve(&mut rng, |contest| {
            if verbose {
                report::print_contest(contest);
            }
        })?;

        info!("champion resolved: {}", champion);
        Ok(champion)
    }
}
