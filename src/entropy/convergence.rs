//! Convergence Monitor: consecutive-tolerance stopping rule
//!
//! Successive entropy estimates hₖ = ln Lₖ are compared; the iteration is
//! declared converged once |hₖ - hₖ₋₁| < tol holds `required` times in a
//! row. A single miss resets the streak.

/// Outcome of feeding one estimate to the monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceEvent {
    /// Within tolerance, streak not yet long enough
    Within { consecutive: usize },
    /// Streak reached the required count
    Converged,
    /// Outside tolerance after a streak of the given length
    Reset { streak: usize },
    /// Outside tolerance with no streak to reset
    Outside,
}

/// Tracks successive estimates and the consecutive-convergence counter
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    /// Absolute tolerance on successive differences (0 disables checks)
    tolerance: f64,
    /// Consecutive hits needed to stop
    required: usize,
    /// Current streak
    consecutive: usize,
    /// Previous estimate
    previous: f64,
    /// All estimates seen
    history: Vec<f64>,
    /// Number of broken streaks
    resets: usize,
    converged: bool,
}

impl ConvergenceMonitor {
    pub fn new(tolerance: f64, required: usize) -> Self {
        Self {
            tolerance,
            required,
            consecutive: 0,
            // Entropies are non-negative, so the first difference is never small
            previous: -1.0,
            history: Vec::new(),
            resets: 0,
            converged: false,
        }
    }

    /// Process one estimate
    pub fn update(&mut self, estimate: f64) -> ConvergenceEvent {
        self.history.push(estimate);
        let diff = (estimate - self.previous).abs();
        self.previous = estimate;

        if self.tolerance > 0.0 && diff < self.tolerance {
            self.consecutive += 1;
            if self.consecutive >= self.required {
                self.converged = true;
                return ConvergenceEvent::Converged;
            }
            return ConvergenceEvent::Within { consecutive: self.consecutive };
        }

        if self.consecutive > 0 {
            let streak = self.consecutive;
            self.consecutive = 0;
            self.resets += 1;
            return ConvergenceEvent::Reset { streak };
        }

        ConvergenceEvent::Outside
    }

    /// Reset to the initial state
    pub fn reset(&mut self) {
        self.consecutive = 0;
        self.previous = -1.0;
        self.history.clear();
        self.resets = 0;
        self.converged = false;
    }

    pub fn consecutive(&self) -> usize {
        self.consecutive
    }

    pub fn required(&self) -> usize {
        self.required
    }

    pub fn resets(&self) -> usize {
        self.resets
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub fn last(&self) -> Option<f64> {
        self.history.last().copied()
    }

    pub fn is_converged(&self) -> bool {
        self.converged
    }
}
