//! Finite-Time Braiding Exponent
//!
//! The FTBE of a time-stamped braid β over the interval [t₀, t₁] is the
//! growth of the fundamental loop E under one application of β, per unit
//! time:
//!
//!   FTBE(β) = ln( L(β·E) / L(E) ) / (t₁ - t₀)
//!
//! The projective mode runs a single normalized iteration of the entropy
//! estimator. The non-projective mode acts on the unnormalized loop, which
//! is exact while every coordinate stays an integer below 2⁵³.

use crate::braid::act_word;
use crate::entropy::{EntropyConfig, EntropyEstimator};
use crate::error::{BraidError, BraidResult};
use crate::loops::{LengthMetric, LoopCoordinates, LoopLength, checked_length};
use super::databraid::ChronoBraid;

/// Largest magnitude an f64 holds as an exact integer
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Options for [`ChronoBraid::ftbe`]
#[derive(Debug, Clone, PartialEq)]
pub struct FtbeConfig {
    /// Loop length functional
    pub length: LengthMetric,
    /// Normalize the loop before measuring growth
    pub projective: bool,
    /// Logarithm base; natural log when `None`
    pub base: Option<f64>,
    /// Elapsed time; the span of crossing times when `None`
    pub duration: Option<f64>,
}

impl Default for FtbeConfig {
    fn default() -> Self {
        Self {
            length: LengthMetric::Intaxis,
            projective: true,
            base: None,
            duration: None,
        }
    }
}

impl FtbeConfig {
    pub fn with_length(mut self, length: LengthMetric) -> Self {
        self.length = length;
        self
    }

    pub fn with_projective(mut self, projective: bool) -> Self {
        self.projective = projective;
        self
    }

    pub fn with_base(mut self, base: f64) -> Self {
        self.base = Some(base);
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    fn validate(&self) -> BraidResult<()> {
        if let Some(base) = self.base {
            if !(base.is_finite() && base > 0.0 && base != 1.0) {
                return Err(BraidError::InvalidConfig(format!(
                    "logarithm base must be positive and not 1, got {}",
                    base
                )));
            }
        }
        if let Some(duration) = self.duration {
            if !(duration.is_finite() && duration > 0.0) {
                return Err(BraidError::InvalidArgument(format!(
                    "elapsed time must be positive, got {}",
                    duration
                )));
            }
        }
        Ok(())
    }
}

impl ChronoBraid {
    /// Finite-time braiding exponent
    ///
    /// Braids with no crossings or fewer than three strands give 0. The
    /// elapsed time must be positive, so a single crossing needs an
    /// explicit duration.
    pub fn ftbe(&self, config: &FtbeConfig) -> BraidResult<f64> {
        config.validate()?;
        if self.is_empty() || self.strands() < 3 {
            return Ok(0.0);
        }

        let duration = match config.duration {
            Some(duration) => duration,
            None => self.end().unwrap_or(0.0) - self.start().unwrap_or(0.0),
        };
        if duration <= 0.0 {
            return Err(BraidError::InvalidArgument(format!(
                "elapsed time must be positive, got {}",
                duration
            )));
        }

        let mut stretch = if config.projective {
            EntropyEstimator::new(EntropyConfig::one_step().with_length(config.length))?
                .estimate(self.word())?
                .value
        } else {
            raw_stretch(self, config.length)?
        };

        if let Some(base) = config.base {
            stretch /= base.ln();
        }

        Ok(stretch / duration)
    }
}

/// ln growth of the unnormalized fundamental loop
fn raw_stretch(braid: &ChronoBraid, metric: LengthMetric) -> BraidResult<f64> {
    let mut coords = LoopCoordinates::fundamental(braid.strands());
    let discount = metric.discount(coords.punctures(), true);
    let before = coords.length(&metric)? - discount;

    let (a, b) = coords.parts_mut();
    act_word(braid.word().generators(), a, b);
    if !a.iter().chain(b.iter()).all(|x| x.abs() <= EXACT_INTEGER_LIMIT) {
        return Err(BraidError::PrecisionLoss {
            generators: braid.len(),
        });
    }
    let after = checked_length(&metric, a, b)? - discount;

    if before <= 0.0 || after <= 0.0 {
        return Err(BraidError::Numerical(format!(
            "degenerate loop length ({} -> {})",
            before, after
        )));
    }
    Ok((after / before).ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::braid::BraidWord;

    const EPS: f64 = 1e-9;

    fn sample() -> ChronoBraid {
        ChronoBraid::new(BraidWord::new(3, vec![1, -1, 2]).unwrap(), vec![0.0, 1.0, 3.0]).unwrap()
    }

    #[test]
    fn test_ftbe_per_unit_time() {
        let b = sample();
        let ftbe = b.ftbe(&FtbeConfig::default()).unwrap();
        assert!((ftbe - 2f64.ln() / 3.0).abs() < EPS, "got {}", ftbe);

        let with_t = b.ftbe(&FtbeConfig::default().with_duration(1.0)).unwrap();
        assert!((with_t - 2f64.ln()).abs() < EPS);
    }

    #[test]
    fn test_ftbe_base() {
        let b = sample();
        let natural = b.ftbe(&FtbeConfig::default()).unwrap();
        let base_e = b.ftbe(&FtbeConfig::default().with_base(std::f64::consts::E)).unwrap();
        let base_2 = b.ftbe(&FtbeConfig::default().with_base(2.0)).unwrap();
        assert!((natural - base_e).abs() < EPS);
        assert!((base_2 - 1.0 / 3.0).abs() < EPS);
        assert!((base_2 - natural / 2f64.ln()).abs() < EPS);
    }

    #[test]
    fn test_ftbe_metrics() {
        let b = sample().into_word();
        let b = ChronoBraid::new(b, vec![0.0, 0.5, 1.0]).unwrap();
        let min = b.ftbe(&FtbeConfig::default().with_length(LengthMetric::Minlength)).unwrap();
        let l2 = b.ftbe(&FtbeConfig::default().with_length(LengthMetric::L2Norm)).unwrap();
        assert!((min - 0.287682072).abs() < 1e-6, "got {}", min);
        assert!((l2 - 0.458145366).abs() < 1e-6, "got {}", l2);
    }

    #[test]
    fn test_projective_agrees_with_raw() {
        let word = BraidWord::new(4, vec![1, -2, 3, 1, -2, 3]).unwrap();
        let b = ChronoBraid::from_word(word);
        for &metric in LengthMetric::all() {
            let projective = b.ftbe(&FtbeConfig::default().with_length(metric)).unwrap();
            let raw = b
                .ftbe(&FtbeConfig::default().with_length(metric).with_projective(false))
                .unwrap();
            assert!((projective - raw).abs() < 1e-9, "{}: {} vs {}", metric, projective, raw);
        }
    }

    #[test]
    fn test_raw_precision_loss() {
        let word = BraidWord::new(3, vec![1, -2]).unwrap().pow(40);
        let b = ChronoBraid::from_word(word);
        let err = b
            .ftbe(&FtbeConfig::default().with_projective(false))
            .unwrap_err();
        assert_eq!(err, BraidError::PrecisionLoss { generators: 80 });
        assert!(b.ftbe(&FtbeConfig::default()).unwrap() > 0.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = ChronoBraid::from_word(BraidWord::identity(4).unwrap());
        assert_eq!(empty.ftbe(&FtbeConfig::default()).unwrap(), 0.0);

        let two = ChronoBraid::from_word(BraidWord::new(2, vec![1, 1]).unwrap());
        assert_eq!(two.ftbe(&FtbeConfig::default()).unwrap(), 0.0);

        let single = ChronoBraid::new(BraidWord::new(3, vec![1]).unwrap(), vec![2.0]).unwrap();
        assert!(matches!(
            single.ftbe(&FtbeConfig::default()),
            Err(BraidError::InvalidArgument(_))
        ));
        assert!(single.ftbe(&FtbeConfig::default().with_duration(1.0)).is_ok());

        let b = sample();
        for base in [0.0, -2.0, 1.0] {
            assert!(matches!(
                b.ftbe(&FtbeConfig::default().with_base(base)),
                Err(BraidError::InvalidConfig(_))
            ));
        }
        assert!(b.ftbe(&FtbeConfig::default().with_duration(0.0)).is_err());
    }
}
