//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform or thread-local RNG.
//! All randomness flows through SeriesRng instances derived from a single
//! master seed held by the caller. There is no process-wide seed to reset.
//!
//! Each series gets its own RNG stream, seeded deterministically from
//! (master_seed XOR slot * golden-ratio constant). Slot 0 derives the
//! master seed unchanged, so the snowfall stream of seed 42 is the plain
//! 42-seeded stream.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::f64::consts::TAU;

/// A named, deterministic RNG for a single series.
pub struct SeriesRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SeriesRng {
    /// Create a series RNG from the master seed and a stable slot index.
    /// The index must never change once assigned.
    pub fn new(master_seed: u64, slot_index: u64) -> Self {
        let derived_seed = master_seed ^ (slot_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Shorthand for a stand-alone stream seeded directly with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed, 0)
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Sample from a Normal(mean, std_dev) distribution.
    ///
    /// Box-Muller over two uniform rolls; one sample per call, the second
    /// variate is discarded so every call consumes exactly two u64 draws.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // 1 - [0,1) lands in (0,1], keeping ln() finite.
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
        mean + std_dev * z
    }

    /// Draw `n` independent Normal(mean, std_dev) samples in order.
    pub fn gaussian_vec(&mut self, n: usize, mean: f64, std_dev: f64) -> Vec<f64> {
        (0..n).map(|_| self.gaussian(mean, std_dev)).collect()
    }
}

/// All series RNGs for a single run, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// A fresh stream for `slot`. Calling twice returns two identical streams.
    pub fn for_stream(&self, slot: StreamSlot) -> SeriesRng {
        SeriesRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stream slot assignments.
/// NEVER reorder or remove entries, only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Snowfall = 0,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Snowfall => "snowfall",
        }
    }
}
