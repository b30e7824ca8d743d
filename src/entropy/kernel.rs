//! Iteration Kernels: two interchangeable power-iteration loops
//!
//! Both kernels run the same algorithm:
//!
//! 1. L₀ = |u₀| - d₀, with d₀ the metric discount
//! 2. for k = 1..maxit: u ← β·(u / Lₖ₋₁), d ← d / Lₖ₋₁,
//!    Lₖ = |u| - d, hₖ = ln Lₖ, stop on the consecutive-tolerance rule
//!
//! ## Two Implementations
//!
//! - [`ReferenceKernel`]: value-based, applies [`GeneratorAction`]s to
//!   [`LoopCoordinates`] and tracks convergence with a
//!   [`ConvergenceMonitor`]. Easy to audit.
//!
//! - [`NativeKernel`]: one flat buffer updated in place with the raw
//!   update rules and an inlined streak counter. No allocation inside the
//!   iteration loop.

use tracing::{debug, trace};

use crate::braid::{GeneratorAction, act_word};
use crate::error::{BraidError, BraidResult};
use crate::loops::{LoopCoordinates, LoopLength, checked_length};
use super::convergence::{ConvergenceEvent, ConvergenceMonitor};

/// Inputs shared by all kernels
#[derive(Debug, Clone)]
pub struct KernelInput<'a> {
    /// Braid word (signed generators)
    pub word: &'a [i32],
    /// Starting loop; its fundamental flag selects the discount
    pub initial: &'a LoopCoordinates,
    pub max_iterations: usize,
    pub required_convergences: usize,
    /// 0 runs exactly `max_iterations` iterations
    pub tolerance: f64,
    pub verbosity: u8,
}

/// Raw kernel result, before the non-convergence fallback
#[derive(Debug, Clone)]
pub struct KernelOutput {
    /// Last estimate ln Lₖ
    pub entropy: f64,
    /// Iterations performed
    pub iterations: usize,
    /// Final rescaled coordinates
    pub coords: LoopCoordinates,
    /// Stopped by the tolerance rule
    pub converged: bool,
}

/// A power-iteration strategy
pub trait EntropyKernel: Send + Sync {
    fn name(&self) -> &'static str;

    fn run(&self, input: &KernelInput<'_>, metric: &dyn LoopLength) -> BraidResult<KernelOutput>;
}

fn positive_length(length: f64, iteration: usize) -> BraidResult<f64> {
    if length > 0.0 && length.is_finite() {
        Ok(length)
    } else {
        Err(BraidError::Numerical(format!(
            "loop length {} at iteration {} cannot be normalized",
            length, iteration
        )))
    }
}

/// Value-based kernel
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceKernel;

impl EntropyKernel for ReferenceKernel {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn run(&self, input: &KernelInput<'_>, metric: &dyn LoopLength) -> BraidResult<KernelOutput> {
        let actions = input
            .word
            .iter()
            .map(|&g| GeneratorAction::new(g))
            .collect::<BraidResult<Vec<_>>>()?;

        let mut coords = input.initial.clone();
        let mut discount = metric.discount(coords.punctures(), coords.is_fundamental());
        let mut length = coords.length(metric)? - discount;

        let mut monitor = ConvergenceMonitor::new(input.tolerance, input.required_convergences);
        let mut iterations = 0;

        for it in 1..=input.max_iterations {
            let scale = positive_length(length, it - 1)?;
            coords /= scale;
            discount /= scale;

            for action in &actions {
                action.apply_mut(&mut coords)?;
            }

            length = coords.length(metric)? - discount;
            let entropy = length.ln();
            iterations = it;

            if input.verbosity >= 2 {
                let diff = monitor.last().map_or(f64::NAN, |prev| entropy - prev);
                trace!(iteration = it, entropy, diff, "reference kernel");
            }

            match monitor.update(entropy) {
                ConvergenceEvent::Converged => break,
                ConvergenceEvent::Reset { streak } if input.verbosity >= 1 => {
                    debug!(streak, required = monitor.required(), "convergence streak reset");
                }
                _ => {}
            }
        }

        let entropy = monitor.last().unwrap_or(0.0);
        if entropy.is_nan() {
            return Err(BraidError::Numerical("entropy estimate is NaN".to_string()));
        }

        Ok(KernelOutput {
            entropy,
            iterations,
            coords,
            converged: monitor.is_converged(),
        })
    }
}

/// In-place kernel over a flat [a | b] buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeKernel;

impl EntropyKernel for NativeKernel {
    fn name(&self) -> &'static str {
        "native"
    }

    fn run(&self, input: &KernelInput<'_>, metric: &dyn LoopLength) -> BraidResult<KernelOutput> {
        let initial = input.initial;
        let m = initial.len();
        let punctures = initial.punctures();

        if let Some(&generator) = input
            .word
            .iter()
            .find(|&&g| g == 0 || g.unsigned_abs() as usize >= punctures)
        {
            return Err(BraidError::InvalidGenerator { generator, strands: punctures });
        }

        let mut buffer = Vec::with_capacity(2 * m);
        buffer.extend_from_slice(initial.a());
        buffer.extend_from_slice(initial.b());
        let (a, b) = buffer.split_at_mut(m);

        let mut discount = metric.discount(punctures, initial.is_fundamental());
        let mut length = checked_length(metric, a, b)? - discount;

        let mut entropy = 0.0;
        let mut previous = -1.0;
        let mut streak = 0;
        let mut converged = false;
        let mut iterations = 0;

        for it in 1..=input.max_iterations {
            let scale = positive_length(length, it - 1)?;
            a.iter_mut().chain(b.iter_mut()).for_each(|x| *x /= scale);
            discount /= scale;

            act_word(input.word, a, b);

            length = checked_length(metric, a, b)? - discount;
            entropy = length.ln();
            iterations = it;

            if input.verbosity >= 2 {
                trace!(iteration = it, entropy, diff = entropy - previous, "native kernel");
            }

            if (entropy - previous).abs() < input.tolerance {
                streak += 1;
                if streak >= input.required_convergences {
                    converged = true;
                    break;
                }
            } else if streak > 0 {
                if input.verbosity >= 1 {
                    debug!(streak, required = input.required_convergences, "convergence streak reset");
                }
                streak = 0;
            }

            previous = entropy;
        }

        if entropy.is_nan() {
            return Err(BraidError::Numerical("entropy estimate is NaN".to_string()));
        }

        let coords = LoopCoordinates::new(a.to_vec(), b.to_vec())?
            .with_fundamental(initial.is_fundamental());

        Ok(KernelOutput {
            entropy,
            iterations,
            coords,
            converged,
        })
    }
}
