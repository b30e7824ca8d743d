//! Loops Module: Dynnikov Coordinates and Loop Lengths
//!
//! A multicurve in a disk with n punctures on the real axis is encoded,
//! up to isotopy, by its Dynnikov coordinates (a, b) ∈ ℝ^(n-2) × ℝ^(n-2).
//! The coordinates are built from intersection numbers with a fixed
//! triangulation:
//!
//!   aᵢ = (μ₂ᵢ - μ₂ᵢ₋₁) / 2,    bᵢ = (νᵢ - νᵢ₊₁) / 2
//!
//! where μ counts crossings with arcs above/below the punctures and νᵢ
//! counts crossings with the vertical line between punctures i and i+1.
//!
//! ## Length Functionals
//!
//! Power iteration only needs a positive, degree-one homogeneous length:
//!
//! - **intaxis**: intersections with the real axis
//! - **minlength**: length of the tightened curve for unit-spaced punctures
//! - **l2norm**: Euclidean norm of the concatenated vector (a, b)

mod coordinates;
mod length;

pub use coordinates::LoopCoordinates;
pub use length::{LengthMetric, LoopLength, checked_length, intaxis, l2norm, minlength};
