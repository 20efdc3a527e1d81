//! Error types shared across the simulation.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::Region;

/// Problems with the seed data source: missing, malformed, or incomplete.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read seed data from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed data in {} is not valid {format}: {detail}", path.display())]
    Malformed {
        path: PathBuf,
        format: &'static str,
        detail: String,
    },

    #[error("unknown region name {0:?}")]
    UnknownRegion(String),

    #[error("invalid seed key {key:?} in region {region}, expected \"1\" through \"16\"")]
    InvalidSeed { region: Region, key: String },

    #[error("seed data is missing region {0}")]
    MissingRegion(Region),

    #[error("seed data is missing seed {seed} in region {region}")]
    MissingSeed { region: Region, seed: u8 },
}

/// Violation of a bracket structure invariant.
///
/// These indicate a logic fault rather than bad input; they are fatal and
/// never retried.
#[derive(Debug, Error)]
pub enum StructuralError {
    #[error("bracket requires exactly {expected} entrants, got {actual}")]
    EntrantCount { expected: usize, actual: usize },

    #[error("entrant sequence ran dry while filling leaves at depth {depth}")]
    EntrantsExhausted { depth: u8 },

    #[error("node at depth {depth} has exactly one child")]
    MissingChild { depth: u8 },

    #[error("leaf at depth {depth} has no entrant")]
    UnresolvedLeaf { depth: u8 },
}
