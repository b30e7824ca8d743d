//! # braid-dynamics
//!
//! Topological Entropy of Braids via Dynnikov Coordinates
//!
//! ## Theoretical Framework
//!
//! A braid on n strands acts on the n-punctured disk, and so on the
//! isotopy classes of simple closed loops in it. The topological entropy of
//! the braid is the exponential growth rate of loop length under repeated
//! application:
//!
//!   h(β) = lim_{k→∞} (1/k) ln |βᵏ·L|
//!
//! ### Dynnikov Coordinates
//!
//! A loop system in the n-punctured disk is encoded exactly by 2n - 4
//! integers (a, b). Each Artin generator σᵢ^±1 acts on them by a
//! piecewise-linear map built from max and min, so braid action is cheap
//! and exact on integer loops.
//!
//! ### Methodology
//!
//! 1. **Loop Lengths**: intersections with the real axis (`intaxis`),
//!    minimal length (`minlength`) or the Euclidean norm of the coordinates
//!
//! 2. **Power Iteration**: rescale the loop by its length each iteration;
//!    the log of the growth factor converges to the entropy
//!
//! 3. **Time-Stamped Braids**: braids from trajectory data, measured by the
//!    finite-time braiding exponent
//!
//! ## Key Result
//!
//! For a pseudo-Anosov braid with dilatation λ,
//!
//!   h(β) = ln λ
//!
//! and finite-order or reducible-periodic braids have entropy 0.
//!
//! ## References
//!
//! - Dynnikov, "On a Yang-Baxter map and the Dehornoy ordering" (2002)
//! - Thiffeault, "Braids of entangled particle trajectories" (2010)
//! - Hironaka & Kin, "A family of pseudo-Anosov braids with small
//!   dilatation" (2006)

pub mod error;
pub mod loops;
pub mod braid;
pub mod entropy;
pub mod chrono;

pub use error::{BraidError, BraidResult};

// Re-exports from loops
pub use loops::{
    LoopCoordinates,
    LengthMetric,
    LoopLength,
    checked_length,
    intaxis,
    minlength,
    l2norm,
};

// Re-exports from braid
pub use braid::{
    BraidWord,
    GeneratorAction,
    act_in_place,
    act_word,
};

// Re-exports from entropy
pub use entropy::{
    // Configuration
    EntropyConfig,
    KernelStrategy,
    default_max_iterations,
    // Estimation
    EntropyEstimate,
    EntropyEstimator,
    entropy,
    complexity,
    // Kernels
    EntropyKernel,
    KernelInput,
    KernelOutput,
    NativeKernel,
    ReferenceKernel,
    // Convergence
    ConvergenceEvent,
    ConvergenceMonitor,
    // Exact solvers
    TrainTrackOutcome,
    TrainTrackSolver,
    exact_entropy,
};

// Re-exports from chrono
pub use chrono::{
    ChronoBraid,
    TimeWindow,
    FtbeConfig,
    CrossingData,
    CrossingExtractor,
    SamplingMode,
    AnyBraid,
};
