//! Entropy Estimator: power iteration on loop length
//!
//! For a pseudo-Anosov braid β with dilatation λ, the length of βᵏ·L grows
//! like λᵏ for almost every loop L, so
//!
//!   h(β) = lim_{k→∞} (1/k) ln |βᵏ·L| = ln λ
//!
//! Rescaling the loop by its own length each iteration turns this into a
//! power method: ln |β·(u/|u|)| converges to ln λ and u/|u| converges to
//! the expanding direction. Finite-order braids never settle and are
//! reported with entropy 0.

use tracing::warn;

use crate::braid::{BraidWord, act_word};
use crate::error::{BraidError, BraidResult};
use crate::loops::{LengthMetric, LoopCoordinates, LoopLength, checked_length};
use super::config::{EntropyConfig, KernelStrategy};
use super::kernel::{EntropyKernel, KernelInput, NativeKernel, ReferenceKernel};

/// Result of an entropy estimate
#[derive(Debug, Clone)]
pub struct EntropyEstimate {
    /// Growth rate per application of the braid (natural log)
    pub value: f64,
    /// Iterations performed
    pub iterations: usize,
    /// Projectively normalized loop approximating the expanding direction
    pub loop_coords: LoopCoordinates,
    /// Stopped by the tolerance rule (trivial braids count as converged)
    pub converged: bool,
}

/// Iterative entropy estimator
pub struct EntropyEstimator {
    config: EntropyConfig,
    primary: Box<dyn EntropyKernel>,
}

impl EntropyEstimator {
    /// Create an estimator, validating the configuration
    pub fn new(config: EntropyConfig) -> BraidResult<Self> {
        config.validate()?;
        let primary: Box<dyn EntropyKernel> = match config.strategy {
            KernelStrategy::Reference => Box::new(ReferenceKernel),
            KernelStrategy::Native => Box::new(NativeKernel),
        };
        Ok(Self { config, primary })
    }

    /// Replace the primary kernel; the reference kernel stays the fallback
    pub fn with_kernel(mut self, kernel: Box<dyn EntropyKernel>) -> Self {
        self.primary = kernel;
        self
    }

    pub fn config(&self) -> &EntropyConfig {
        &self.config
    }

    /// Estimate from the fundamental loop of the braid
    pub fn estimate(&self, word: &BraidWord) -> BraidResult<EntropyEstimate> {
        self.estimate_from(word, LoopCoordinates::fundamental(word.strands()))
    }

    /// Estimate from a given initial loop with the configured metric
    pub fn estimate_from(&self, word: &BraidWord, initial: LoopCoordinates) -> BraidResult<EntropyEstimate> {
        let metric = self.config.length;
        self.estimate_with_length(word, initial, &metric)
    }

    /// Estimate with an arbitrary length functional
    pub fn estimate_with_length(
        &self,
        word: &BraidWord,
        initial: LoopCoordinates,
        metric: &dyn LoopLength,
    ) -> BraidResult<EntropyEstimate> {
        let strands = word.strands();
        if word.is_empty() || strands < 3 {
            return Ok(EntropyEstimate {
                value: 0.0,
                iterations: 0,
                loop_coords: initial,
                converged: true,
            });
        }

        if initial.strands() != strands {
            return Err(BraidError::DimensionMismatch {
                expected: strands,
                actual: initial.strands(),
            });
        }

        let input = KernelInput {
            word: word.generators(),
            initial: &initial,
            max_iterations: self.config.iteration_cap(strands),
            required_convergences: self.config.required_convergences,
            tolerance: self.config.tolerance,
            verbosity: self.config.verbosity,
        };

        let output = match self.primary.run(&input, metric) {
            Ok(output) => output,
            Err(e) if e.is_recoverable() && self.primary.name() != ReferenceKernel.name() => {
                warn!(kernel = self.primary.name(), error = %e, "kernel failed, retrying on reference kernel");
                ReferenceKernel.run(&input, metric)?
            }
            Err(e) => return Err(e),
        };

        let mut value = output.entropy;
        if self.config.tolerance > 0.0 && !output.converged {
            warn!(
                braid = %word,
                tolerance = self.config.tolerance,
                iterations = output.iterations,
                "failed to converge; braid is likely finite-order or has low entropy, reporting 0"
            );
            value = 0.0;
        }

        Ok(EntropyEstimate {
            value,
            iterations: output.iterations,
            loop_coords: output.coords,
            converged: output.converged,
        })
    }
}

/// Entropy with the default configuration
pub fn entropy(word: &BraidWord) -> BraidResult<f64> {
    EntropyEstimator::new(EntropyConfig::default())?
        .estimate(word)
        .map(|estimate| estimate.value)
}

/// Dynnikov–Wiest complexity log₂ L(β·E) - log₂ L(E)
///
/// L is the discounted number of intersections with the real axis and E
/// the fundamental loop.
pub fn complexity(word: &BraidWord) -> BraidResult<f64> {
    if word.is_empty() || word.strands() < 3 {
        return Ok(0.0);
    }

    let metric = LengthMetric::Intaxis;
    let mut coords = LoopCoordinates::fundamental(word.strands());
    let discount = metric.discount(coords.punctures(), true);
    let before = coords.length(&metric)? - discount;

    let (a, b) = coords.parts_mut();
    act_word(word.generators(), a, b);
    let after = checked_length(&metric, a, b)? - discount;

    if before <= 0.0 || after <= 0.0 {
        return Err(BraidError::Numerical(format!(
            "non-positive loop length ({} -> {})",
            before, after
        )));
    }
    Ok(after.log2() - before.log2())
}
