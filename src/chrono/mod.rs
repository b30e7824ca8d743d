//! Time-Stamped Braids and Finite-Time Braiding Exponents
//!
//! Braids extracted from particle trajectories carry the time of each
//! crossing. Composition must respect chronology, the tensor product merges
//! crossings by time, and the natural growth measure is the finite-time
//! braiding exponent (FTBE): loop stretching per unit time rather than per
//! application of the braid.
//!
//! ## References
//!
//! - Budišić & Thiffeault, "Finite-time braiding exponents", Chaos 25,
//!   087407 (2015)
//! - Thiffeault, "Braids of entangled particle trajectories", Chaos 20,
//!   017516 (2010)

mod databraid;
mod ftbe;
mod trajectory;
mod variant;

pub use databraid::{ChronoBraid, TimeWindow};
pub use ftbe::FtbeConfig;
pub use trajectory::{CrossingData, CrossingExtractor, SamplingMode};
pub use variant::AnyBraid;
