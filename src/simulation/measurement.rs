// src/simulation/measurement.rs

//! Probabilistic collapse of a qubit state in the computational basis.
//!
//! Randomness is always supplied by the caller through [`RandomSource`]. Any
//! `rand` generator qualifies, and [`FixedSequence`] replays chosen samples.

use crate::core::QubitState;
use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use std::fmt;
use tracing::debug;

/// A supplier of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Draws the next sample.
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        <StandardUniform as Distribution<f64>>::sample(&StandardUniform, self)
    }
}

/// Largest `f64` strictly below 1.
const LARGEST_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// Cycles through a fixed list of samples, for reproducible measurements.
///
/// Values are clamped into `[0, 1)` on construction: anything below 0 becomes
/// `0.0`, anything at or above 1 becomes the largest `f64` below 1, and NaN
/// becomes `0.0`. An empty sequence always yields `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    /// A source that returns `values` in order, then starts over.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values = values.into_iter().map(clamp_unit).collect();
        Self { values, cursor: 0 }
    }

    /// A source that returns `value` forever.
    pub fn repeating(value: f64) -> Self {
        Self::new([value])
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, LARGEST_BELOW_ONE) }
}

/// Result of reading a qubit in the computational basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BasisOutcome {
    /// Read 0, collapsed onto |0⟩.
    Zero,
    /// Read 1, collapsed onto |1⟩.
    One,
}

impl BasisOutcome {
    /// `0` or `1`.
    pub fn value(&self) -> u8 {
        match self {
            BasisOutcome::Zero => 0,
            BasisOutcome::One => 1,
        }
    }

    /// The basis state this outcome collapses onto.
    pub fn state(&self) -> QubitState {
        match self {
            BasisOutcome::Zero => QubitState::ZERO,
            BasisOutcome::One => QubitState::ONE,
        }
    }
}

impl fmt::Display for BasisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// An outcome together with the collapsed post-measurement state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// The bit that was read.
    pub outcome: BasisOutcome,
    /// The post-measurement basis state.
    pub state: QubitState,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Measured({}) -> {}", self.outcome, self.state)
    }
}

/// Collapses `state` in the computational basis.
///
/// Draws exactly one sample `r` and reports 0 when `r < |α|²`, 1 otherwise.
/// The input is left untouched; the returned state is the matching basis vector.
pub fn measure_computational_basis<S>(state: &QubitState, source: &mut S) -> Measurement
where
    S: RandomSource + ?Sized,
{
    let p_zero = state.probabilities().zero;
    let sample = source.next_unit();
    let outcome = if sample < p_zero { BasisOutcome::Zero } else { BasisOutcome::One };
    debug!(sample, p_zero, outcome = %outcome, "collapsed qubit in computational basis");
    Measurement { outcome, state: outcome.state() }
}

/// Tally of repeated measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    /// Shots that read 0.
    pub zero: usize,
    /// Shots that read 1.
    pub one: usize,
}

impl OutcomeCounts {
    /// Total number of measurements tallied.
    pub fn shots(&self) -> usize {
        self.zero + self.one
    }

    /// Observed frequency of outcome 0, or `None` without any shots.
    pub fn frequency_of_zero(&self) -> Option<f64> {
        match self.shots() {
            0 => None,
            n => Some(self.zero as f64 / n as f64),
        }
    }
}

/// Measures `shots` independent copies of `state`, one sample each.
pub fn sample_counts<S>(state: &QubitState, shots: usize, source: &mut S) -> OutcomeCounts
where
    S: RandomSource + ?Sized,
{
    let mut counts = OutcomeCounts::default();
    for _ in 0..shots {
        match measure_computational_basis(state, source).outcome {
            BasisOutcome::Zero => counts.zero += 1,
            BasisOutcome::One => counts.one += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::qubit_constants::FRAC_1_SQRT_2;
    use crate::core::QubitError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_basis_zero_always_measures_zero() {
        for sample in [0.0, 0.25, 0.5, 0.999_999_999] {
            let m = measure_computational_basis(&QubitState::ZERO, &mut FixedSequence::repeating(sample));
            assert_eq!(m.outcome, BasisOutcome::Zero);
            assert_eq!(m.state, QubitState::ZERO);
        }
    }

    #[test]
    fn test_basis_one_always_measures_one() {
        for sample in [0.0, 0.5, 0.999] {
            let m = measure_computational_basis(&QubitState::ONE, &mut FixedSequence::repeating(sample));
            assert_eq!(m.outcome, BasisOutcome::One);
            assert_eq!(m.state, QubitState::ONE);
        }
    }

    #[test]
    fn test_superposition_threshold() -> Result<(), QubitError> {
        let plus = QubitState::from_parts(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0)?;
        let mut source = FixedSequence::new([0.3, 0.7]);
        assert_eq!(measure_computational_basis(&plus, &mut source).outcome, BasisOutcome::Zero);
        assert_eq!(measure_computational_basis(&plus, &mut source).outcome, BasisOutcome::One);
        // cycles back to 0.3
        assert_eq!(measure_computational_basis(&plus, &mut source).outcome, BasisOutcome::Zero);
        Ok(())
    }

    #[test]
    fn test_input_state_is_not_mutated() -> Result<(), QubitError> {
        let state = QubitState::from_parts(0.6, 0.0, 0.8, 0.0)?;
        let before = state;
        let _ = measure_computational_basis(&state, &mut FixedSequence::repeating(0.9));
        assert_eq!(state, before);
        Ok(())
    }

    #[test]
    fn test_seeded_rng_is_reproducible() -> Result<(), QubitError> {
        let state = QubitState::from_parts(0.6, 0.0, 0.8, 0.0)?;
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let run_a: Vec<_> = (0..32).map(|_| measure_computational_basis(&state, &mut rng_a).outcome).collect();
        let run_b: Vec<_> = (0..32).map(|_| measure_computational_basis(&state, &mut rng_b).outcome).collect();
        assert_eq!(run_a, run_b);
        Ok(())
    }

    #[test]
    fn test_sample_counts() -> Result<(), QubitError> {
        let counts = sample_counts(&QubitState::ONE, 100, &mut StdRng::seed_from_u64(1));
        assert_eq!(counts, OutcomeCounts { zero: 0, one: 100 });

        let state = QubitState::from_parts(0.6, 0.0, 0.8, 0.0)?; // p0 = 0.36
        let counts = sample_counts(&state, 20_000, &mut StdRng::seed_from_u64(7));
        assert_eq!(counts.shots(), 20_000);
        let freq = counts.frequency_of_zero().unwrap_or(f64::NAN);
        assert!((freq - 0.36).abs() < 0.03, "frequency of 0 was {}", freq);

        assert_eq!(OutcomeCounts::default().frequency_of_zero(), None);
        Ok(())
    }

    #[test]
    fn test_empty_fixed_sequence_yields_zero() {
        let mut source = FixedSequence::new(Vec::new());
        assert_eq!(source.next_unit(), 0.0);
        assert_eq!(source.next_unit(), 0.0);
    }

    #[test]
    fn test_fixed_sequence_clamps_into_unit_interval() {
        let mut source = FixedSequence::new([-0.5, 1.0, 7.0, f64::NAN, 0.25]);
        let drawn: Vec<f64> = (0..5).map(|_| source.next_unit()).collect();
        assert_eq!(drawn, vec![0.0, LARGEST_BELOW_ONE, LARGEST_BELOW_ONE, 0.0, 0.25]);
        assert!(drawn.iter().all(|v| (0.0..1.0).contains(v)));
        assert!(LARGEST_BELOW_ONE < 1.0);
    }

    #[test]
    fn test_out_of_range_samples_keep_basis_outcomes_certain() {
        for sample in [1.0, 1.5, f64::INFINITY] {
            let m = measure_computational_basis(&QubitState::ZERO, &mut FixedSequence::repeating(sample));
            assert_eq!(m.outcome, BasisOutcome::Zero, "sample {}", sample);
        }
        for sample in [-1.0, f64::NEG_INFINITY, f64::NAN] {
            let m = measure_computational_basis(&QubitState::ONE, &mut FixedSequence::repeating(sample));
            assert_eq!(m.outcome, BasisOutcome::One, "sample {}", sample);
        }
    }
}
