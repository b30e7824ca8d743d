//! Time-Stamped Braids: braids whose crossings carry physical times
//!
//! A braid built from trajectory data records when each crossing happened.
//! The crossing times must respect chronology:
//!
//! - one time per generator
//! - times are nondecreasing
//! - equal consecutive times only for commuting generators (|i - j| > 1)
//!
//! Every constructor and transformation re-checks these rules before
//! returning.

use std::ops::Mul;

use crate::braid::BraidWord;
use crate::error::{BraidError, BraidResult};

/// Time window for [`ChronoBraid::truncate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeWindow {
    /// Keep crossings with t ≤ hi
    UpTo(f64),
    /// Keep crossings with lo ≤ t ≤ hi
    Between(f64, f64),
}

impl TimeWindow {
    fn contains(&self, t: f64) -> bool {
        match *self {
            TimeWindow::UpTo(hi) => t <= hi,
            TimeWindow::Between(lo, hi) => lo <= t && t <= hi,
        }
    }
}

/// A braid word with one crossing time per generator
#[derive(Debug, Clone, PartialEq)]
pub struct ChronoBraid {
    word: BraidWord,
    tcross: Vec<f64>,
}

impl ChronoBraid {
    /// Attach crossing times to a braid word
    pub fn new(word: BraidWord, tcross: Vec<f64>) -> BraidResult<Self> {
        check_chronology(&word, &tcross)?;
        Ok(Self { word, tcross })
    }

    /// Attach the default times 1, 2, …, len
    pub fn from_word(word: BraidWord) -> Self {
        let tcross = (1..=word.len()).map(|k| k as f64).collect();
        Self { word, tcross }
    }

    pub fn word(&self) -> &BraidWord {
        &self.word
    }

    pub fn tcross(&self) -> &[f64] {
        &self.tcross
    }

    pub fn strands(&self) -> usize {
        self.word.strands()
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Time of the first crossing
    pub fn start(&self) -> Option<f64> {
        self.tcross.first().copied()
    }

    /// Time of the last crossing
    pub fn end(&self) -> Option<f64> {
        self.tcross.last().copied()
    }

    /// Drop the crossing times
    pub fn into_word(self) -> BraidWord {
        self.word
    }

    /// Concatenate two braids whose time spans do not overlap
    pub fn compose(&self, other: &Self) -> BraidResult<Self> {
        if let (Some(left_max), Some(right_min)) = (self.end(), other.start()) {
            if left_max > right_min {
                return Err(BraidError::NonChronological { left_max, right_min });
            }
        }
        let tcross = self.tcross.iter().chain(&other.tcross).copied().collect();
        Self::new(self.word.compose(&other.word), tcross)
    }

    /// Place `other` on new strands to the right, merging crossings by time
    ///
    /// Ties keep the crossings of `self` first; they commute with the
    /// shifted generators of `other`.
    pub fn tensor(&self, other: &Self) -> BraidResult<Self> {
        let shift = self.strands() as i32;
        let left = self.word.generators().iter().copied().zip(self.tcross.iter().copied());
        let right = other
            .word
            .generators()
            .iter()
            .map(|&g| if g > 0 { g + shift } else { g - shift })
            .zip(other.tcross.iter().copied());

        let mut left = left.peekable();
        let mut right = right.peekable();
        let mut generators = Vec::with_capacity(self.len() + other.len());
        let mut tcross = Vec::with_capacity(self.len() + other.len());

        loop {
            let take_left = match (left.peek(), right.peek()) {
                (Some(&(_, tl)), Some(&(_, tr))) => tl <= tr,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            let next = if take_left { left.next() } else { right.next() };
            if let Some((g, t)) = next {
                generators.push(g);
                tcross.push(t);
            }
        }

        let word = BraidWord::new(self.strands() + other.strands(), generators)?;
        Self::new(word, tcross)
    }

    /// Tensor a list of braids, left to right
    pub fn tensor_all(braids: &[ChronoBraid]) -> BraidResult<Self> {
        let (first, rest) = braids.split_first().ok_or_else(|| {
            BraidError::InvalidArgument("tensor needs at least one braid".to_string())
        })?;
        rest.iter().try_fold(first.clone(), |acc, b| acc.tensor(b))
    }

    /// Cancel neighbouring pairs σᵢσᵢ⁻¹ until none remain
    ///
    /// Each round first cancels pairs starting at even offsets, then at odd
    /// offsets. Survivors keep their order and crossing times.
    pub fn compact(&self) -> BraidResult<Self> {
        let mut entries: Vec<(i32, f64)> = self
            .word
            .generators()
            .iter()
            .copied()
            .zip(self.tcross.iter().copied())
            .collect();

        loop {
            let before = entries.len();
            for offset in [0, 1] {
                let mut cancelled = vec![false; entries.len()];
                let mut k = offset;
                while k + 1 < entries.len() {
                    if entries[k].0 == -entries[k + 1].0 {
                        cancelled[k] = true;
                        cancelled[k + 1] = true;
                    }
                    k += 2;
                }
                let mut flags = cancelled.into_iter();
                entries.retain(|_| !flags.next().unwrap_or(false));
            }
            if entries.len() == before {
                break;
            }
        }

        let (generators, tcross): (Vec<i32>, Vec<f64>) = entries.into_iter().unzip();
        Self::new(BraidWord::new(self.strands(), generators)?, tcross)
    }

    /// Keep only the crossings inside a time window
    pub fn truncate(&self, window: TimeWindow) -> BraidResult<Self> {
        if let TimeWindow::Between(lo, hi) = window {
            if lo > hi {
                return Err(BraidError::InvalidArgument(format!(
                    "empty time window [{}, {}]",
                    lo, hi
                )));
            }
        }

        let (generators, tcross): (Vec<i32>, Vec<f64>) = self
            .word
            .generators()
            .iter()
            .copied()
            .zip(self.tcross.iter().copied())
            .filter(|&(_, t)| window.contains(t))
            .unzip();

        Self::new(BraidWord::new(self.strands(), generators)?, tcross)
    }

    /// Restrict to a subset of strands (1-based), keeping crossing times
    pub fn subbraid(&self, strands: &[usize]) -> BraidResult<Self> {
        let (word, kept) = self.word.subbraid_positions(strands)?;
        let tcross = kept.iter().map(|&k| self.tcross[k]).collect();
        Self::new(word, tcross)
    }
}

impl Mul for &ChronoBraid {
    type Output = BraidResult<ChronoBraid>;

    fn mul(self, rhs: &ChronoBraid) -> Self::Output {
        self.compose(rhs)
    }
}

/// Check the three chronology rules
fn check_chronology(word: &BraidWord, tcross: &[f64]) -> BraidResult<()> {
    if word.len() != tcross.len() {
        return Err(BraidError::LengthMismatch {
            generators: word.len(),
            times: tcross.len(),
        });
    }

    if let Some(index) = tcross.iter().position(|t| !t.is_finite()) {
        return Err(BraidError::InvalidTimestamps {
            index,
            reason: "crossing times must be finite",
        });
    }

    let generators = word.generators();
    for k in 1..tcross.len() {
        if tcross[k] < tcross[k - 1] {
            return Err(BraidError::InvalidTimestamps {
                index: k,
                reason: "crossing times must be nondecreasing",
            });
        }
        if tcross[k] == tcross[k - 1] && generators[k].abs().abs_diff(generators[k - 1].abs()) <= 1 {
            return Err(BraidError::InvalidTimestamps {
                index: k,
                reason: "simultaneous crossings must involve commuting generators",
            });
        }
    }

    Ok(())
}
