//! Tournament simulator over seeded bracket data.
//!
//! This crate provides the I/O shell around `bracket_core`:
//! - Loading and validating seed files (JSON or TOML)
//! - Driving a full simulation run
//! - Formatting the round-by-round console report
//!
//! # Usage
//!
//! ```bash
//! # Simulate from a JSON seed file
//! cargo run -p bracket_sim -- data/bracket.json
//!
//! # Replayable run with a fixed seed, champion only
//! cargo run -p bracket_sim -- data/bracket.json --seed 7 --quiet
//! ```

pub mod loader;
pub mod report;
pub mod runner;

pub use loader::*;
pub use report::*;
pub use runner::*;
