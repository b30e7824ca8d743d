//! Estimator configuration

use crate::error::{BraidError, BraidResult};
use crate::loops::LengthMetric;

/// Which iteration kernel runs first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelStrategy {
    /// Value-based kernel built on [`crate::GeneratorAction`]
    Reference,
    /// In-place kernel over a flat buffer; falls back to the reference
    /// kernel on numeric failure
    #[default]
    Native,
}

/// Configuration for entropy estimation
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyConfig {
    /// Absolute tolerance on successive estimates (0 disables the check)
    pub tolerance: f64,
    /// Iteration cap; `None` uses [`default_max_iterations`]
    pub max_iterations: Option<usize>,
    /// Consecutive within-tolerance iterations required to stop
    pub required_convergences: usize,
    /// Length functional
    pub length: LengthMetric,
    /// Kernel tried first
    pub strategy: KernelStrategy,
    /// Diagnostic level: 1 logs streak resets, 2 logs every iteration
    pub verbosity: u8,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: None,
            required_convergences: 3,
            length: LengthMetric::Intaxis,
            strategy: KernelStrategy::Native,
            verbosity: 0,
        }
    }
}

impl EntropyConfig {
    /// Exactly one iteration, no convergence check
    pub fn one_step() -> Self {
        Self {
            tolerance: 0.0,
            max_iterations: Some(1),
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn with_required_convergences(mut self, required: usize) -> Self {
        self.required_convergences = required;
        self
    }

    pub fn with_length(mut self, length: LengthMetric) -> Self {
        self.length = length;
        self
    }

    pub fn with_strategy(mut self, strategy: KernelStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Reject configurations that cannot run
    pub fn validate(&self) -> BraidResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(BraidError::InvalidTolerance(self.tolerance));
        }
        match self.max_iterations {
            None | Some(0) if self.tolerance == 0.0 => {
                return Err(BraidError::MissingIterationCap);
            }
            Some(0) => {
                return Err(BraidError::InvalidConfig(
                    "max_iterations must be positive".to_string(),
                ));
            }
            _ => {}
        }
        if self.required_convergences == 0 {
            return Err(BraidError::InvalidConfig(
                "required_convergences must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Iteration cap for a braid on `strands` strands
    pub fn iteration_cap(&self, strands: usize) -> usize {
        self.max_iterations
            .unwrap_or_else(|| default_max_iterations(self.tolerance, strands))
    }
}

/// Spectral-gap heuristic for the iteration cap
///
/// The smallest known dilatations on n strands give about 19/n³ digits of
/// resolution per iteration, so reaching `tol` takes
/// ⌈-log₁₀(tol) · n³ / 19⌉ iterations; 30 more absorb the transient.
pub fn default_max_iterations(tolerance: f64, strands: usize) -> usize {
    let digits = if tolerance > 0.0 { -tolerance.log10() } else { 0.0 };
    let per_iteration = 19.0 * (strands as f64).powi(-3);
    (digits.max(0.0) / per_iteration).ceil() as usize + 30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EntropyConfig::default().validate().is_ok());
        assert!(EntropyConfig::one_step().validate().is_ok());
    }

    #[test]
    fn test_zero_tolerance_needs_cap() {
        let config = EntropyConfig::default().with_tolerance(0.0);
        assert_eq!(config.validate(), Err(BraidError::MissingIterationCap));

        let config = config.with_max_iterations(0);
        assert_eq!(config.validate(), Err(BraidError::MissingIterationCap));

        let config = config.with_max_iterations(5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_values_rejected() {
        let negative = EntropyConfig::default().with_tolerance(-1e-3);
        assert_eq!(negative.validate(), Err(BraidError::InvalidTolerance(-1e-3)));

        let nan = EntropyConfig::default().with_tolerance(f64::NAN);
        assert!(matches!(nan.validate(), Err(BraidError::InvalidTolerance(_))));

        let no_streak = EntropyConfig::default().with_required_convergences(0);
        assert!(matches!(no_streak.validate(), Err(BraidError::InvalidConfig(_))));

        let no_iterations = EntropyConfig::default().with_max_iterations(0);
        assert!(matches!(no_iterations.validate(), Err(BraidError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_iteration_cap() {
        // 3 strands, tol 1e-6: ⌈6 · 27 / 19⌉ + 30
        assert_eq!(default_max_iterations(1e-6, 3), 39);
        // 5 strands: ⌈6 · 125 / 19⌉ + 30
        assert_eq!(default_max_iterations(1e-6, 5), 70);
        assert_eq!(default_max_iterations(10.0, 5), 30);

        let config = EntropyConfig::default().with_max_iterations(7);
        assert_eq!(config.iteration_cap(100), 7);
    }
}
