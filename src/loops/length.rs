//! Loop Lengths: scalar functionals over Dynnikov coordinates
//!
//! All three functionals are positively homogeneous of degree one, so the
//! growth rate of any of them under iteration gives the same entropy.

use std::fmt;
use std::str::FromStr;

use crate::error::{BraidError, BraidResult};

/// A length functional over loop coordinates
///
/// Implementations must return a non-negative value; [`checked_length`]
/// turns a negative one into [`BraidError::BadLength`].
pub trait LoopLength {
    /// Length of the loop with coordinates (a, b)
    fn raw_length(&self, a: &[f64], b: &[f64]) -> f64;

    /// Constant subtracted from the raw length
    ///
    /// `punctures` counts the basepoint when `fundamental` is set.
    fn discount(&self, _punctures: usize, _fundamental: bool) -> f64 {
        0.0
    }
}

/// Built-in length metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMetric {
    /// Minimal intersections with the real axis
    #[default]
    Intaxis,
    /// Minimal length with punctures at unit spacing
    Minlength,
    /// Euclidean norm of (a, b)
    L2Norm,
}

impl LengthMetric {
    pub fn name(&self) -> &'static str {
        match self {
            LengthMetric::Intaxis => "intaxis",
            LengthMetric::Minlength => "minlength",
            LengthMetric::L2Norm => "l2norm",
        }
    }

    pub fn all() -> &'static [LengthMetric] {
        &[LengthMetric::Intaxis, LengthMetric::Minlength, LengthMetric::L2Norm]
    }
}

impl fmt::Display for LengthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LengthMetric {
    type Err = BraidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "intaxis" => Ok(LengthMetric::Intaxis),
            "minlength" => Ok(LengthMetric::Minlength),
            "l2norm" | "l2" => Ok(LengthMetric::L2Norm),
            other => Err(BraidError::BadLengthFlag(other.to_string())),
        }
    }
}

impl TryFrom<u8> for LengthMetric {
    type Error = BraidError;

    fn try_from(flag: u8) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(LengthMetric::Intaxis),
            1 => Ok(LengthMetric::Minlength),
            2 => Ok(LengthMetric::L2Norm),
            other => Err(BraidError::BadLengthFlag(other.to_string())),
        }
    }
}

impl LoopLength for LengthMetric {
    fn raw_length(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            LengthMetric::Intaxis => intaxis(a, b),
            LengthMetric::Minlength => minlength(a, b),
            LengthMetric::L2Norm => l2norm(a, b),
        }
    }

    fn discount(&self, punctures: usize, fundamental: bool) -> f64 {
        match self {
            // The basepoint of a fundamental loop is not a braid puncture
            LengthMetric::Intaxis => {
                punctures as f64 - if fundamental { 1.0 } else { 0.0 } - 1.0
            }
            _ => 0.0,
        }
    }
}

/// Evaluate a metric and reject invalid results
pub fn checked_length(metric: &dyn LoopLength, a: &[f64], b: &[f64]) -> BraidResult<f64> {
    let length = metric.raw_length(a, b);
    if length.is_nan() {
        return Err(BraidError::Numerical("loop length is NaN".to_string()));
    }
    if length < 0.0 {
        return Err(BraidError::BadLength(length));
    }
    Ok(length)
}

/// max over k of ( |a_k| + b_k⁺ + Σ_{j<k} b_j ), i.e. ν₁ / 2
fn half_first_nu(a: &[f64], b: &[f64]) -> f64 {
    let mut cumulative = 0.0;
    let mut max = f64::NEG_INFINITY;
    for (ak, bk) in a.iter().zip(b) {
        max = max.max(ak.abs() + bk.max(0.0) + cumulative);
        cumulative += bk;
    }
    max
}

/// Number of intersections with the real axis
///
/// L = |a₁| + |a_{n-2}| + Σ |a_{i+1} - a_i| + Σ_{i=0}^{n-1} |b_i|
///
/// with the boundary terms b₀ = -ν₁/2 and b_{n-1} = -b₀ - Σ b_i.
pub fn intaxis(a: &[f64], b: &[f64]) -> f64 {
    let m = a.len();
    if m == 0 {
        return 0.0;
    }

    let mut length = a[0].abs() + a[m - 1].abs();
    length += a.windows(2).map(|w| (w[1] - w[0]).abs()).sum::<f64>();

    let b0 = -half_first_nu(a, b);
    let b_last = -b0 - b.iter().sum::<f64>();
    length += b0.abs() + b_last.abs();
    length += b.iter().map(|x| x.abs()).sum::<f64>();

    length
}

/// Length of the tightened loop with punctures at unit spacing
///
/// A tight loop runs along the axis, so its length is Σ νᵢ, with
/// ν₁ = 2 max_k ( |a_k| + b_k⁺ + Σ_{j<k} b_j ) and ν_{i+1} = νᵢ - 2bᵢ.
pub fn minlength(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() {
        return 0.0;
    }

    let mut nu = 2.0 * half_first_nu(a, b);
    let mut length = nu;
    for bi in b {
        nu -= 2.0 * bi;
        length += nu;
    }
    length
}

/// Euclidean norm of the concatenated vector (a, b)
pub fn l2norm(a: &[f64], b: &[f64]) -> f64 {
    a.iter().chain(b).map(|x| x * x).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Corrupted;

    impl LoopLength for Corrupted {
        fn raw_length(&self, _a: &[f64], _b: &[f64]) -> f64 {
            -1.0
        }
    }

    #[test]
    fn test_canonical_loop_lengths() {
        // Two loops around punctures {2,3,4} and {3,4}
        let a = [0.0, 0.0];
        let b = [-1.0, -1.0];

        assert_eq!(intaxis(&a, &b), 4.0);
        assert_eq!(minlength(&a, &b), 6.0);
        assert!((l2norm(&a, &b) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_intaxis_discount() {
        let metric = LengthMetric::Intaxis;
        assert_eq!(metric.discount(4, true), 2.0);
        assert_eq!(metric.discount(4, false), 3.0);
        assert_eq!(LengthMetric::Minlength.discount(4, true), 0.0);
        assert_eq!(LengthMetric::L2Norm.discount(4, true), 0.0);
    }

    #[test]
    fn test_flag_parsing() {
        assert_eq!("minlength".parse::<LengthMetric>().unwrap(), LengthMetric::Minlength);
        assert_eq!("L2norm".parse::<LengthMetric>().unwrap(), LengthMetric::L2Norm);
        assert_eq!(LengthMetric::try_from(0).unwrap(), LengthMetric::Intaxis);

        assert!(matches!(
            "taxicab".parse::<LengthMetric>(),
            Err(BraidError::BadLengthFlag(_))
        ));
        assert!(matches!(LengthMetric::try_from(7), Err(BraidError::BadLengthFlag(_))));
    }

    #[test]
    fn test_negative_length_is_fatal() {
        let err = checked_length(&Corrupted, &[1.0], &[1.0]).unwrap_err();
        assert_eq!(err, BraidError::BadLength(-1.0));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_empty_coordinates() {
        assert_eq!(intaxis(&[], &[]), 0.0);
        assert_eq!(minlength(&[], &[]), 0.0);
        assert_eq!(l2norm(&[], &[]), 0.0);
    }

    fn coords() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (1usize..8).prop_flat_map(|m| {
            (
                prop::collection::vec(-50.0..50.0f64, m),
                prop::collection::vec(-50.0..50.0f64, m),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_lengths_non_negative((a, b) in coords()) {
            for metric in LengthMetric::all() {
                let length = checked_length(metric, &a, &b);
                prop_assert!(length.is_ok(), "{} failed", metric);
            }
        }
    }
}
