//! Braid Module: Braid Words and their Action on Loops
//!
//! The braid group Bₙ is generated by σ₁, …, σ_{n-1}, where σᵢ exchanges
//! strands i and i+1. Bₙ acts on the mapping class group of the n-punctured
//! disk, and therefore on isotopy classes of loops:
//!
//!   β · L  =  σ_{g_k} ⋯ σ_{g_1} acting on L, generator by generator
//!
//! ## Dynnikov Coordinates
//!
//! In Dynnikov coordinates each generator acts by a piecewise-linear map
//! touching at most two coordinate pairs, so a word of length ℓ is applied
//! in O(ℓ) time.

mod action;
mod word;

pub use action::{GeneratorAction, act_in_place, act_word};
pub use word::BraidWord;
