//! Braid Words: validated sequences of signed Artin generators
//!
//! A word on n strands is a sequence of nonzero integers g with
//! 1 ≤ |g| ≤ n-1; g > 0 stands for σ_g and g < 0 for σ_|g|⁻¹.

use std::fmt;
use std::ops::Mul;

use rand::Rng;
use rand_distr::{Bernoulli, Distribution, Uniform};

use crate::error::{BraidError, BraidResult};

/// A braid word on a fixed number of strands
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BraidWord {
    strands: usize,
    generators: Vec<i32>,
}

impl BraidWord {
    /// Create a word, checking every generator against the strand count
    pub fn new(strands: usize, generators: Vec<i32>) -> BraidResult<Self> {
        if strands == 0 {
            return Err(BraidError::InvalidArgument(
                "a braid needs at least one strand".to_string(),
            ));
        }
        if let Some(&generator) = generators
            .iter()
            .find(|&&g| g == 0 || g.unsigned_abs() as usize >= strands)
        {
            return Err(BraidError::InvalidGenerator { generator, strands });
        }
        Ok(Self { strands, generators })
    }

    /// Create a word on the fewest strands that hold its generators
    pub fn from_generators(generators: Vec<i32>) -> BraidResult<Self> {
        let strands = generators
            .iter()
            .map(|g| g.unsigned_abs() as usize + 1)
            .max()
            .unwrap_or(1);
        Self::new(strands, generators)
    }

    /// The trivial braid
    pub fn identity(strands: usize) -> BraidResult<Self> {
        Self::new(strands, Vec::new())
    }

    /// Half twist Δ = (σ₁⋯σ_{n-1})(σ₁⋯σ_{n-2})⋯(σ₁), a periodic braid
    pub fn half_twist(strands: usize) -> BraidResult<Self> {
        let top = strands.saturating_sub(1) as i32;
        let generators = (1..=top).rev().flat_map(|k| 1..=k).collect();
        Self::new(strands, generators)
    }

    /// Hironaka–Kin braid σ₁⋯σ_m σ₁⋯σ_{m+n} on m+n+1 strands
    ///
    /// (m, n) = (2, 2) realizes the smallest dilatation on five strands.
    pub fn hironaka_kin(m: usize, n: usize) -> BraidResult<Self> {
        if m == 0 || n == 0 {
            return Err(BraidError::InvalidArgument(
                "Hironaka-Kin braids need m, n >= 1".to_string(),
            ));
        }
        let generators = (1..=m as i32).chain(1..=(m + n) as i32).collect();
        Self::new(m + n + 1, generators)
    }

    /// Random word of `length` generators, uniform in index and sign
    pub fn random<R: Rng + ?Sized>(strands: usize, length: usize, rng: &mut R) -> BraidResult<Self> {
        if strands < 2 {
            return Err(BraidError::InvalidArgument(
                "random braids need at least two strands".to_string(),
            ));
        }
        let index = Uniform::new_inclusive(1, strands as i32 - 1)
            .map_err(|e| BraidError::InvalidArgument(e.to_string()))?;
        let sign = Bernoulli::new(0.5).map_err(|e| BraidError::InvalidArgument(e.to_string()))?;

        let generators = (0..length)
            .map(|_| {
                let i = index.sample(rng);
                if sign.sample(rng) { i } else { -i }
            })
            .collect();
        Self::new(strands, generators)
    }

    pub fn strands(&self) -> usize {
        self.strands
    }

    pub fn generators(&self) -> &[i32] {
        &self.generators
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Reverse the word and flip every crossing
    pub fn inverse(&self) -> Self {
        Self {
            strands: self.strands,
            generators: self.generators.iter().rev().map(|g| -g).collect(),
        }
    }

    /// Integer power; negative exponents use the inverse
    pub fn pow(&self, k: i32) -> Self {
        let base = if k < 0 { self.inverse() } else { self.clone() };
        let reps = k.unsigned_abs() as usize;
        Self {
            strands: self.strands,
            generators: base.generators.repeat(reps),
        }
    }

    /// Concatenation, on the larger of the two strand counts
    pub fn compose(&self, other: &Self) -> Self {
        let mut generators = Vec::with_capacity(self.len() + other.len());
        generators.extend_from_slice(&self.generators);
        generators.extend_from_slice(&other.generators);
        Self {
            strands: self.strands.max(other.strands),
            generators,
        }
    }

    /// Restrict to a subset of strands
    ///
    /// `strands` are 1-based positions at the start of the braid. Crossings
    /// between two kept strands survive with their sign, re-indexed within
    /// the subset. Returns the sub-braid and the word positions it kept.
    pub fn subbraid_positions(&self, strands: &[usize]) -> BraidResult<(Self, Vec<usize>)> {
        if strands.is_empty() {
            return Err(BraidError::InvalidArgument(
                "sub-braid needs at least one strand".to_string(),
            ));
        }
        let mut keep = vec![false; self.strands + 1];
        for &s in strands {
            if s == 0 || s > self.strands {
                return Err(BraidError::InvalidArgument(format!(
                    "strand {} outside 1..={}",
                    s, self.strands
                )));
            }
            if keep[s] {
                return Err(BraidError::InvalidArgument(format!("strand {} repeated", s)));
            }
            keep[s] = true;
        }

        // perm[p] is the strand currently at position p
        let mut perm: Vec<usize> = (1..=self.strands).collect();
        let mut generators = Vec::new();
        let mut kept = Vec::new();

        for (idx, &g) in self.generators.iter().enumerate() {
            let i = g.unsigned_abs() as usize;
            let (left, right) = (perm[i - 1], perm[i]);
            if keep[left] && keep[right] {
                let rank = perm[..i].iter().filter(|&&s| keep[s]).count() as i32;
                generators.push(if g > 0 { rank } else { -rank });
                kept.push(idx);
            }
            perm.swap(i - 1, i);
        }

        let word = Self::new(strands.len(), generators)?;
        Ok((word, kept))
    }

    /// Restrict to a subset of strands, see [`Self::subbraid_positions`]
    pub fn subbraid(&self, strands: &[usize]) -> BraidResult<Self> {
        self.subbraid_positions(strands).map(|(word, _)| word)
    }
}

impl Mul for &BraidWord {
    type Output = BraidWord;

    fn mul(self, rhs: &BraidWord) -> BraidWord {
        self.compose(rhs)
    }
}

impl fmt::Display for BraidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generators.is_empty() {
            return write!(f, "< e >");
        }
        write!(f, "<")?;
        for g in &self.generators {
            write!(f, " {}", g)?;
        }
        write!(f, " >")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generator_bounds() {
        assert!(BraidWord::new(3, vec![1, -2]).is_ok());
        assert!(matches!(
            BraidWord::new(3, vec![1, 3]),
            Err(BraidError::InvalidGenerator { generator: 3, strands: 3 })
        ));
        assert!(matches!(
            BraidWord::new(3, vec![0]),
            Err(BraidError::InvalidGenerator { generator: 0, .. })
        ));
        assert!(BraidWord::new(0, vec![]).is_err());
        assert_eq!(BraidWord::from_generators(vec![2, -1]).unwrap().strands(), 3);
    }

    #[test]
    fn test_inverse_and_powers() {
        let b = BraidWord::new(4, vec![1, -2, 3]).unwrap();
        assert_eq!(b.inverse().generators(), &[-3, 2, -1]);
        assert_eq!(b.pow(2).generators(), &[1, -2, 3, 1, -2, 3]);
        assert_eq!(b.pow(-1), b.inverse());
        assert!(b.pow(0).is_empty());
    }

    #[test]
    fn test_compose_takes_larger_strand_count() {
        let b1 = BraidWord::new(3, vec![1]).unwrap();
        let b2 = BraidWord::new(5, vec![4]).unwrap();
        let b = &b1 * &b2;
        assert_eq!(b.strands(), 5);
        assert_eq!(b.generators(), &[1, 4]);
    }

    #[test]
    fn test_families() {
        let delta = BraidWord::half_twist(4).unwrap();
        assert_eq!(delta.generators(), &[1, 2, 3, 1, 2, 1]);

        let hk = BraidWord::hironaka_kin(2, 2).unwrap();
        assert_eq!(hk.strands(), 5);
        assert_eq!(hk.generators(), &[1, 2, 1, 2, 3, 4]);
    }

    #[test]
    fn test_random_word_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = BraidWord::random(5, 200, &mut rng).unwrap();
        assert_eq!(b.len(), 200);
        assert!(b.generators().iter().all(|&g| g != 0 && g.abs() <= 4));
        assert!(BraidWord::random(1, 3, &mut rng).is_err());
    }

    #[test]
    fn test_subbraid_tracks_strands() {
        // σ₁ swaps strands 1 and 2; σ₂ then crosses strand 1 with strand 3
        let b = BraidWord::new(3, vec![1, 2, -1]).unwrap();

        let (sub, kept) = b.subbraid_positions(&[1, 3]).unwrap();
        assert_eq!(sub.strands(), 2);
        assert_eq!(sub.generators(), &[1]);
        assert_eq!(kept, vec![1]);

        let (sub, kept) = b.subbraid_positions(&[2, 3]).unwrap();
        assert_eq!(sub.generators(), &[-1]);
        assert_eq!(kept, vec![2]);
    }

    #[test]
    fn test_subbraid_rejects_bad_strands() {
        let b = BraidWord::new(3, vec![1]).unwrap();
        assert!(b.subbraid(&[]).is_err());
        assert!(b.subbraid(&[0]).is_err());
        assert!(b.subbraid(&[4]).is_err());
        assert!(b.subbraid(&[2, 2]).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(BraidWord::new(3, vec![1, -2]).unwrap().to_string(), "< 1 -2 >");
        assert_eq!(BraidWord::identity(3).unwrap().to_string(), "< e >");
    }
}
