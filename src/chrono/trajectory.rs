//! Trajectory Intake: building time-stamped braids from particle paths
//!
//! Trajectories are stored as an `(steps, 2, particles)` array of planar
//! positions. Turning them into crossings (projecting onto a line and
//! detecting order swaps) is delegated to a [`CrossingExtractor`]; this
//! module only validates shapes, resolves the sampling mode and checks the
//! extractor's output against the chronology rules.

use ndarray::{Array3, ArrayView3};
use tracing::debug;

use crate::braid::BraidWord;
use crate::error::{BraidError, BraidResult};
use super::databraid::ChronoBraid;

/// How trajectory samples map to time and projection
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingMode {
    /// Project onto the line at this angle; samples are at times 1, 2, …
    ByProjectionAngle(f64),
    /// Sample times, one per step; projection angle 0
    ByTimestamps(Vec<f64>),
}

impl Default for SamplingMode {
    fn default() -> Self {
        SamplingMode::ByProjectionAngle(0.0)
    }
}

impl SamplingMode {
    /// Resolve into explicit sample times and a projection angle
    pub fn resolve(self, steps: usize) -> BraidResult<(Vec<f64>, f64)> {
        match self {
            SamplingMode::ByProjectionAngle(angle) => {
                if !angle.is_finite() {
                    return Err(BraidError::InvalidArgument(format!(
                        "projection angle must be finite, got {}",
                        angle
                    )));
                }
                Ok(((1..=steps).map(|k| k as f64).collect(), angle))
            }
            SamplingMode::ByTimestamps(times) => {
                if times.len() != steps {
                    return Err(BraidError::DimensionMismatch {
                        expected: steps,
                        actual: times.len(),
                    });
                }
                Ok((times, 0.0))
            }
        }
    }
}

/// Crossings found along a set of trajectories
#[derive(Debug, Clone, PartialEq)]
pub struct CrossingData {
    pub word: BraidWord,
    pub tcross: Vec<f64>,
}

/// Detects strand crossings in projected trajectories
pub trait CrossingExtractor {
    fn extract(
        &self,
        trajectories: ArrayView3<'_, f64>,
        times: &[f64],
        angle: f64,
    ) -> BraidResult<CrossingData>;
}

impl ChronoBraid {
    /// Build a braid from `(steps, 2, particles)` trajectories
    pub fn from_trajectories<E: CrossingExtractor + ?Sized>(
        extractor: &E,
        trajectories: &Array3<f64>,
        mode: SamplingMode,
    ) -> BraidResult<Self> {
        let (steps, dims, particles) = trajectories.dim();
        if dims != 2 {
            return Err(BraidError::DimensionMismatch {
                expected: 2,
                actual: dims,
            });
        }
        if steps == 0 || particles == 0 {
            return Err(BraidError::InvalidArgument(
                "trajectories need at least one step and one particle".to_string(),
            ));
        }

        let (times, angle) = mode.resolve(steps)?;
        let data = extractor
            .extract(trajectories.view(), &times, angle)
            .map_err(|e| match e {
                BraidError::Collaborator(_) => e,
                other => BraidError::Collaborator(other.to_string()),
            })?;

        if data.word.strands() != particles {
            return Err(BraidError::DimensionMismatch {
                expected: particles,
                actual: data.word.strands(),
            });
        }
        debug!(particles, steps, crossings = data.word.len(), "extracted crossings");

        ChronoBraid::new(data.word, data.tcross)
    }
}
