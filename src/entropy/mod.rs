//! Entropy Module: Topological Entropy of Braids
//!
//! The topological entropy of a braid β is the exponential growth rate of
//! loop length under repeated application:
//!
//!   h(β) = lim_{k→∞} (1/k) ln |βᵏ · L|
//!
//! It is a conjugacy invariant; for pseudo-Anosov braids h = ln λ with λ
//! the dilatation, and h = 0 for finite-order braids.
//!
//! ## Estimation
//!
//! Power iteration on Dynnikov coordinates, stopped when successive
//! estimates agree to a tolerance for several consecutive iterations.
//! Failure to converge within the iteration cap is the signature of a
//! finite-order braid and is reported as entropy 0 with a warning.
//!
//! ## References
//!
//! - Thiffeault, "Braids of entangled particle trajectories", Chaos 20 (2010)
//! - Hironaka & Kin, "A family of pseudo-Anosov braids with small
//!   dilatation", Algebr. Geom. Topol. 6 (2006)
//! - Dynnikov & Wiest, "On the complexity of braids", J. Eur. Math. Soc. (2007)

mod config;
mod convergence;
mod estimator;
mod kernel;
mod train_track;

pub use config::{EntropyConfig, KernelStrategy, default_max_iterations};
pub use convergence::{ConvergenceEvent, ConvergenceMonitor};
pub use estimator::{EntropyEstimate, EntropyEstimator, complexity, entropy};
pub use kernel::{EntropyKernel, KernelInput, KernelOutput, NativeKernel, ReferenceKernel};
pub use train_track::{TrainTrackOutcome, TrainTrackSolver, exact_entropy};
