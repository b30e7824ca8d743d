//! Loop Coordinates: the state vector acted on by braids
//!
//! Stores the two Dynnikov sequences a and b of length m = n - 2 for a
//! disk with n punctures. Only the projective class matters for entropy
//! estimation, so the estimator rescales the vector every iteration.

use std::ops::{Div, DivAssign};

use ndarray::Array1;

use crate::error::{BraidError, BraidResult};
use super::length::{LoopLength, checked_length};

/// Dynnikov coordinates (a, b) of a multicurve
#[derive(Debug, Clone, PartialEq)]
pub struct LoopCoordinates {
    /// Upper/lower arc coordinates aᵢ
    a: Vec<f64>,
    /// Vertical-line coordinates bᵢ
    b: Vec<f64>,
    /// Generating-set loop with an extra basepoint puncture
    fundamental: bool,
}

impl LoopCoordinates {
    /// Create coordinates from the two sequences
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> BraidResult<Self> {
        if a.len() != b.len() {
            return Err(BraidError::DimensionMismatch {
                expected: a.len(),
                actual: b.len(),
            });
        }
        Ok(Self { a, b, fundamental: false })
    }

    /// Create coordinates from a concatenated vector [a | b]
    pub fn from_array(coords: &Array1<f64>) -> BraidResult<Self> {
        let len = coords.len();
        if len % 2 != 0 {
            return Err(BraidError::InvalidArgument(format!(
                "loop vector should have an even number of entries, got {}",
                len
            )));
        }
        let m = len / 2;
        let a = coords.iter().take(m).copied().collect();
        let b = coords.iter().skip(m).copied().collect();
        Self::new(a, b)
    }

    /// Canonical loops a = 0, b = -1 on a disk with `punctures` punctures
    pub fn canonical(punctures: usize) -> Self {
        let m = punctures.saturating_sub(2);
        Self {
            a: vec![0.0; m],
            b: vec![-1.0; m],
            fundamental: false,
        }
    }

    /// Fundamental generating-set loops for a braid on `strands` strands
    ///
    /// The loops live on `strands + 1` punctures: the extra basepoint
    /// puncture sits to the right and is never moved by the braid.
    pub fn fundamental(strands: usize) -> Self {
        Self {
            fundamental: true,
            ..Self::canonical(strands + 1)
        }
    }

    /// Mark (or unmark) the loop as a fundamental generating set
    pub fn with_fundamental(mut self, fundamental: bool) -> Self {
        self.fundamental = fundamental;
        self
    }

    /// Number of coordinate pairs m
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Number of punctures n = m + 2 (basepoint included)
    pub fn punctures(&self) -> usize {
        self.a.len() + 2
    }

    /// Number of braid strands the loop is meant for
    pub fn strands(&self) -> usize {
        self.punctures() - usize::from(self.fundamental)
    }

    pub fn is_fundamental(&self) -> bool {
        self.fundamental
    }

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Mutable access to both sequences for in-place generator action
    pub fn parts_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.a, &mut self.b)
    }

    /// Concatenated vector [a | b]
    pub fn to_array(&self) -> Array1<f64> {
        self.a.iter().chain(self.b.iter()).copied().collect()
    }

    /// Length under a metric, without discount
    pub fn length(&self, metric: &dyn LoopLength) -> BraidResult<f64> {
        checked_length(metric, &self.a, &self.b)
    }

    /// Component-wise equality up to an absolute tolerance
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.len() == other.len()
            && self.a.iter().zip(&other.a).all(|(x, y)| (x - y).abs() < tol)
            && self.b.iter().zip(&other.b).all(|(x, y)| (x - y).abs() < tol)
    }

    /// Largest absolute coordinate
    pub fn max_abs(&self) -> f64 {
        self.a
            .iter()
            .chain(self.b.iter())
            .fold(0.0, |acc, x| acc.max(x.abs()))
    }
}

impl DivAssign<f64> for LoopCoordinates {
    fn div_assign(&mut self, rhs: f64) {
        self.a.iter_mut().for_each(|x| *x /= rhs);
        self.b.iter_mut().for_each(|x| *x /= rhs);
    }
}

impl Div<f64> for LoopCoordinates {
    type Output = LoopCoordinates;

    fn div(mut self, rhs: f64) -> Self::Output {
        self /= rhs;
        self
    }
}
