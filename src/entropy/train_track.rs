//! Train-Track Boundary: exact entropy from an external solver
//!
//! The Bestvina–Handel algorithm computes the dilatation of a pseudo-Anosov
//! braid exactly, but it lives outside this crate. Solvers plug in through
//! [`TrainTrackSolver`]; reducible braids fall back to power iteration.

use tracing::warn;

use crate::braid::BraidWord;
use crate::error::BraidResult;
use super::estimator::EntropyEstimator;

/// What an external train-track solver reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainTrackOutcome {
    /// Exact entropy ln λ
    Entropy(f64),
    /// Reducible mapping class; no single dilatation
    Reducible,
}

/// External exact-entropy collaborator
pub trait TrainTrackSolver {
    fn solve(&self, word: &BraidWord) -> BraidResult<TrainTrackOutcome>;
}

/// Entropy from a train-track solver, iterating when it reports reducible
pub fn exact_entropy<S: TrainTrackSolver + ?Sized>(
    solver: &S,
    word: &BraidWord,
    fallback: &EntropyEstimator,
) -> BraidResult<f64> {
    if word.is_empty() || word.strands() < 3 {
        return Ok(0.0);
    }

    match solver.solve(word)? {
        TrainTrackOutcome::Entropy(value) => Ok(value),
        TrainTrackOutcome::Reducible => {
            warn!(braid = %word, "reducible braid, using iterative entropy estimate");
            fallback.estimate(word).map(|estimate| estimate.value)
        }
    }
}
