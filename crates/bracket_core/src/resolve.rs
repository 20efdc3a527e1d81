//! Bottom-up bracket resolution.

use log::trace;

use crate::bracket::{Bracket, Node};
use crate::error::StructuralError;
use crate::random::RandomSource;
use crate::types::Entrant;

/// Outcome of a single simulated matchup.
#[derive(Debug, Clone)]
pub struct Contest {
    pub left: Entrant,
    pub right: Entrant,
    pub winner: Entrant,
}

/// Simulate one contest between two resolved entrants.
///
/// The draw is uniform in `[0, 1)` and the left entrant wins iff
/// `r <= seed_right / (seed_left + seed_right)`, so the probability of
/// advancing is proportional to the opponent's seed: a 1 seed beats a
/// 16 seed with probability 16/17.
pub fn run_contest<R>(left: &Entrant, right: &Entrant, rng: &mut R) -> Contest
where
    R: RandomSource + ?Sized,
{
    let total = f64::from(left.seed) + f64::from(right.seed);
    let draw = rng.next_uniform();
    let left_wins = draw <= f64::from(right.seed) / total;

    let winner = if left_wins { left } else { right };
    trace!("contest {} vs {}: draw {}", left, right, draw);

    Contest {
        left: left.clone(),
        right: right.clone(),
        winner: winner.clone(),
    }
}

impl Bracket {
    /// Resolve every contest below the root and return the champion.
    ///
    /// Resolution is a memoized postorder walk: a node that already holds
    /// an occupant keeps it, so resolving twice draws no new randomness and
    /// emits nothing further. Each contest that is computed is passed to
    /// `on_contest` exactly once, in playing order.
    pub fn resolve<R>(
        &mut self,
        rng: &mut R,
        mut on_contest: impl FnMut(&Contest),
    ) -> Result<Entrant, StructuralError>
    where
        R: RandomSource + ?Sized,
    {
        resolve_node(&mut self.root, rng, &mut on_contest)
    }
}

fn resolve_node<R, F>(
    node: &mut Node,
    rng: &mut R,
    on_contest: &mut F,
) -> Result<Entrant, StructuralError>
where
    R: RandomSource + ?Sized,
    F: FnMut(&Contest),
{
    // Memoized on presence, so an already-decided node is returned as-is.
    if let Some(occupant) = &node.occupant {
        return Ok(occupant.clone());
    }

    match (node.left.as_deref_mut(), node.right.as_deref_mut()) {
        (Some(left_child), Some(right_child)) => {
            let left = resolve_node(left_child, rng, on_contest)?;
            let right = resolve_node(right_child, rng, on_contest)?;

            let contest = run_contest(&left, &right, rng);
            on_contest(&contest);

            node.occupant = Some(contest.winner.clone());
            Ok(contest.winner)
        }
        (None, None) => Err(StructuralError::UnresolvedLeaf { depth: node.depth }),
        _ => Err(StructuralError::MissingChild { depth: node.depth }),
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod resolve_tests;
