//! Test utilities for Strata development.
//!
//! Provides a scripted [`RandomSource`] for deterministic process tests,
//! a seeded production RNG, and small lattice/registry fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{coordination_registry, flat_lattice, stepped_lattice};

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strata_core::RandomSource;

/// A [`RandomSource`] that replays fixed values.
///
/// Integer draws pop from one queue, real draws from another. Integer
/// values are clamped into the requested `[low, high)` range. An
/// exhausted queue yields `low` (integers) or `0.0` (reals).
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    ints: VecDeque<usize>,
    reals: VecDeque<f64>,
    int_draws: usize,
    real_draws: usize,
}

impl ScriptedRandom {
    pub fn new(ints: Vec<usize>, reals: Vec<f64>) -> Self {
        Self {
            ints: ints.into(),
            reals: reals.into(),
            int_draws: 0,
            real_draws: 0,
        }
    }

    /// Number of integer draws served so far.
    pub fn int_draws(&self) -> usize {
        self.int_draws
    }

    /// Number of real draws served so far.
    pub fn real_draws(&self) -> usize {
        self.real_draws
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.int_draws += 1;
        match self.ints.pop_front() {
            Some(v) if high > low => v.clamp(low, high - 1),
            _ => low,
        }
    }

    fn uniform_real(&mut self) -> f64 {
        self.real_draws += 1;
        self.reals.pop_front().unwrap_or(0.0)
    }
}

/// The production RNG, seeded for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
