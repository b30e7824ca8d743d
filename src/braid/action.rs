//! Generator Action: Dynnikov update rules for σᵢ^{±1}
//!
//! Each generator acts piecewise-linearly on at most two coordinate pairs.
//! With x⁺ = max(x, 0) and x⁻ = min(x, 0), the interior rule for σᵢ
//! (1 < i < n-1) on the pairs (a_{i-1}, b_{i-1}), (a_i, b_i) is
//!
//!   c     = a_{i-1} - a_i - b_i⁺ + b_{i-1}⁻
//!   a'_{i-1} = a_{i-1} - b_{i-1}⁺ - (b_i⁺ + c)⁺
//!   b'_{i-1} = b_i + c⁻
//!   a'_i  = a_i - b_i⁻ - (b_{i-1}⁻ - c)⁻
//!   b'_i  = b_{i-1} - c⁻
//!
//! σᵢ⁻¹ is the same map conjugated by the reflection (a, b) ↦ (-a, b).
//! The end generators σ₁ and σ_{n-1} only touch the first or last pair.
//!
//! ## Reference
//!
//! Dehornoy, Dynnikov, Rolfsen, Wiest, "Ordering Braids" (2008), ch. XII;
//! Thiffeault, "Braids of entangled particle trajectories", Chaos 20 (2010).

use crate::error::{BraidError, BraidResult};
use crate::loops::LoopCoordinates;

#[inline]
fn pos(x: f64) -> f64 {
    x.max(0.0)
}

#[inline]
fn neg(x: f64) -> f64 {
    x.min(0.0)
}

/// Apply one signed generator to (a, b) in place
///
/// Requires `1 <= |generator| <= a.len() + 1`; generators are checked by
/// [`GeneratorAction::new`] and [`crate::BraidWord::new`] before reaching here.
pub fn act_in_place(generator: i32, a: &mut [f64], b: &mut [f64]) {
    let m = a.len();
    let i = generator.unsigned_abs() as usize;
    debug_assert!(i >= 1 && i <= m + 1, "generator {} out of range", generator);
    if m == 0 {
        return;
    }

    if i == 1 {
        let (a1, b1) = (a[0], b[0]);
        if generator > 0 {
            b[0] = a1 + pos(b1);
            a[0] = -b1 + pos(b[0]);
        } else {
            b[0] = -a1 + pos(b1);
            a[0] = b1 - pos(b[0]);
        }
    }

    if i == m + 1 {
        let (al, bl) = (a[m - 1], b[m - 1]);
        if generator > 0 {
            b[m - 1] = al + neg(bl);
            a[m - 1] = -bl + neg(b[m - 1]);
        } else {
            b[m - 1] = -al + neg(bl);
            a[m - 1] = bl - neg(b[m - 1]);
        }
    }

    if i > 1 && i <= m {
        let (p, q) = (i - 2, i - 1);
        let (a1, b1, a2, b2) = (a[p], b[p], a[q], b[q]);
        if generator > 0 {
            let c = a1 - a2 - pos(b2) + neg(b1);
            a[p] = a1 - pos(b1) - pos(pos(b2) + c);
            b[p] = b2 + neg(c);
            a[q] = a2 - neg(b2) - neg(neg(b1) - c);
            b[q] = b1 - neg(c);
        } else {
            let d = a1 - a2 + pos(b2) - neg(b1);
            a[p] = a1 + pos(b1) + pos(pos(b2) - d);
            b[p] = b2 - pos(d);
            a[q] = a2 + neg(b2) + neg(neg(b1) + d);
            b[q] = b1 + pos(d);
        }
    }
}

/// Apply a whole word, left to right
pub fn act_word(word: &[i32], a: &mut [f64], b: &mut [f64]) {
    for &g in word {
        act_in_place(g, a, b);
    }
}

/// A single signed generator acting on loop coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorAction {
    generator: i32,
}

impl GeneratorAction {
    pub fn new(generator: i32) -> BraidResult<Self> {
        if generator == 0 {
            return Err(BraidError::InvalidGenerator { generator, strands: 0 });
        }
        Ok(Self { generator })
    }

    pub fn generator(&self) -> i32 {
        self.generator
    }

    /// The action of the opposite crossing
    pub fn inverse(&self) -> Self {
        Self { generator: -self.generator }
    }

    /// Image of a loop under the generator
    pub fn apply(&self, coords: &LoopCoordinates) -> BraidResult<LoopCoordinates> {
        let mut next = coords.clone();
        self.apply_mut(&mut next)?;
        Ok(next)
    }

    /// Act on a loop in place
    pub fn apply_mut(&self, coords: &mut LoopCoordinates) -> BraidResult<()> {
        let punctures = coords.punctures();
        if self.generator.unsigned_abs() as usize >= punctures {
            return Err(BraidError::InvalidGenerator {
                generator: self.generator,
                strands: punctures,
            });
        }
        let (a, b) = coords.parts_mut();
        act_in_place(self.generator, a, b);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn act(word: &[i32], a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let (mut a, mut b) = (a.to_vec(), b.to_vec());
        act_word(word, &mut a, &mut b);
        (a, b)
    }

    fn close(x: &(Vec<f64>, Vec<f64>), y: &(Vec<f64>, Vec<f64>)) -> bool {
        x.0.iter().chain(&x.1)
            .zip(y.0.iter().chain(&y.1))
            .all(|(p, q)| (p - q).abs() < 1e-9)
    }

    #[test]
    fn test_sigma1_on_canonical_loop() {
        // σ₁σ₂⁻¹ on the fundamental loop of a 3-braid
        let (a, b) = act(&[1, -2], &[0.0, 0.0], &[-1.0, -1.0]);
        assert_eq!(a, vec![1.0, -1.0]);
        assert_eq!(b, vec![-2.0, 1.0]);
    }

    #[test]
    fn test_generator_out_of_range() {
        let u = LoopCoordinates::canonical(4);
        assert!(GeneratorAction::new(3).unwrap().apply(&u).is_ok());
        assert!(matches!(
            GeneratorAction::new(4).unwrap().apply(&u),
            Err(BraidError::InvalidGenerator { generator: 4, strands: 4 })
        ));
        assert!(GeneratorAction::new(0).is_err());
    }

    #[test]
    fn test_action_inverse_restores_loop() {
        let u = LoopCoordinates::new(vec![3.0, -1.5, 2.0], vec![-2.0, 4.0, 0.5]).unwrap();
        let g = GeneratorAction::new(-2).unwrap();
        let back = g.inverse().apply(&g.apply(&u).unwrap()).unwrap();
        assert!(back.approx_eq(&u, 1e-12));
    }

    fn loop_and_generator() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, i32)> {
        (1usize..7).prop_flat_map(|m| {
            (
                prop::collection::vec(-100.0..100.0f64, m),
                prop::collection::vec(-100.0..100.0f64, m),
                (1..=(m as i32 + 1)),
                any::<bool>(),
            )
                .prop_map(|(a, b, i, positive)| (a, b, if positive { i } else { -i }))
        })
    }

    fn loop_and_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, i32, i32)> {
        (2usize..7).prop_flat_map(|m| {
            (
                prop::collection::vec(-100.0..100.0f64, m),
                prop::collection::vec(-100.0..100.0f64, m),
                (1..=(m as i32)),
                prop_oneof![Just(1), Just(-1)],
            )
        })
    }

    proptest! {
        #[test]
        fn prop_generator_round_trip((a, b, g) in loop_and_generator()) {
            let there_and_back = act(&[g, -g], &a, &b);
            prop_assert!(close(&there_and_back, &(a.clone(), b.clone())));

            let back_and_there = act(&[-g, g], &a, &b);
            prop_assert!(close(&back_and_there, &(a, b)));
        }

        #[test]
        fn prop_braid_relation((a, b, i, sign) in loop_and_pair()) {
            // σᵢσᵢ₊₁σᵢ = σᵢ₊₁σᵢσᵢ₊₁
            let (x, y) = (sign * i, sign * (i + 1));
            prop_assert!(close(&act(&[x, y, x], &a, &b), &act(&[y, x, y], &a, &b)));
        }

        #[test]
        fn prop_far_generators_commute((a, b, i, sign) in loop_and_pair()) {
            let m = a.len() as i32;
            let j = i + 2;
            prop_assume!(j <= m + 1);
            let (x, y) = (sign * i, -sign * j);
            prop_assert!(close(&act(&[x, y], &a, &b), &act(&[y, x], &a, &b)));
        }
    }
}
