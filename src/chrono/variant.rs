//! Plain or time-stamped braid behind one type
//!
//! Code that handles both kinds of braid goes through [`AnyBraid`].
//! Inversion, powers and entropy need a braid without crossing times, so
//! the time-stamped variant refuses them and points at the FTBE instead.

use std::fmt;

use crate::braid::BraidWord;
use crate::entropy::{EntropyConfig, EntropyEstimator, complexity};
use crate::error::{BraidError, BraidResult};
use super::databraid::ChronoBraid;
use super::ftbe::FtbeConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum AnyBraid {
    Plain(BraidWord),
    Chrono(ChronoBraid),
}

impl AnyBraid {
    pub fn word(&self) -> &BraidWord {
        match self {
            AnyBraid::Plain(word) => word,
            AnyBraid::Chrono(braid) => braid.word(),
        }
    }

    pub fn strands(&self) -> usize {
        self.word().strands()
    }

    pub fn is_chrono(&self) -> bool {
        matches!(self, AnyBraid::Chrono(_))
    }

    pub fn inverse(&self) -> BraidResult<Self> {
        Ok(AnyBraid::Plain(self.plain("inverse")?.inverse()))
    }

    pub fn pow(&self, k: i32) -> BraidResult<Self> {
        Ok(AnyBraid::Plain(self.plain("pow")?.pow(k)))
    }

    /// Topological entropy per application of the braid
    pub fn entropy(&self, config: &EntropyConfig) -> BraidResult<f64> {
        let word = self.plain("entropy")?;
        Ok(EntropyEstimator::new(config.clone())?.estimate(word)?.value)
    }

    pub fn complexity(&self) -> BraidResult<f64> {
        complexity(self.plain("complexity")?)
    }

    /// Finite-time braiding exponent; plain braids use times 1, 2, …
    pub fn ftbe(&self, config: &FtbeConfig) -> BraidResult<f64> {
        match self {
            AnyBraid::Plain(word) => ChronoBraid::from_word(word.clone()).ftbe(config),
            AnyBraid::Chrono(braid) => braid.ftbe(config),
        }
    }

    fn plain(&self, operation: &'static str) -> BraidResult<&BraidWord> {
        match self {
            AnyBraid::Plain(word) => Ok(word),
            AnyBraid::Chrono(_) => Err(BraidError::UnsupportedOnChrono { operation }),
        }
    }
}

impl From<BraidWord> for AnyBraid {
    fn from(word: BraidWord) -> Self {
        AnyBraid::Plain(word)
    }
}

impl From<ChronoBraid> for AnyBraid {
    fn from(braid: ChronoBraid) -> Self {
        AnyBraid::Chrono(braid)
    }
}

impl fmt::Display for AnyBraid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyBraid::Plain(word) => write!(f, "{}", word),
            AnyBraid::Chrono(braid) => write!(f, "{} @ {:?}", braid.word(), braid.tcross()),
        }
    }
}
