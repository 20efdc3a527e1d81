//! Core logic for a 64-entrant single-elimination tournament simulation.
//!
//! This crate provides:
//! - Region and entrant types, plus the validated seed table they come from
//! - Bracket construction (a complete binary tree, 64 leaves over 63 contests)
//! - Probabilistic bottom-up resolution with an injectable randomness source
//!
//! Winners are decided by relative seed: when two entrants meet, the
//! probability that the stronger (lower) seed advances is proportional to
//! its opponent's seed value. All I/O (seed files, report printing, the CLI)
//! lives in the `bracket_sim` crate.

pub mod bracket;
pub mod error;
pub mod random;
pub mod resolve;
pub mod seeds;
pub mod types;

pub use bracket::*;
pub use error::*;
pub use random::*;
pub use resolve::*;
pub use seeds::*;
pub use types::*;
