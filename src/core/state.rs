// src/core/state.rs

use super::error::QubitError;
use crate::operations::{apply, Operator};
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// The raw amplitude pair `(α, β)` of `α|0⟩ + β|1⟩`, not necessarily normalized.
pub type Amplitudes = [Complex<f64>; 2];

/// A normalized single-qubit state `α|0⟩ + β|1⟩`.
///
/// The only ways to obtain one are [`normalize`], the basis constants and the
/// constructors built on top of them, so every value satisfies
/// `|α|² + |β|² = 1` up to rounding. States are `Copy`; transformations
/// return new values.
#[derive(Debug, Clone, Copy, PartialEq)] // No Eq for floating-point amplitudes
pub struct QubitState {
    amplitudes: Amplitudes,
}

impl QubitState {
    /// The computational basis state |0⟩.
    pub const ZERO: QubitState = QubitState {
        amplitudes: [Complex::new(1.0, 0.0), Complex::new(0.0, 0.0)],
    };

    /// The computational basis state |1⟩.
    pub const ONE: QubitState = QubitState {
        amplitudes: [Complex::new(0.0, 0.0), Complex::new(1.0, 0.0)],
    };

    /// Builds a state from two arbitrary amplitudes, normalizing them.
    pub fn new(alpha: Complex<f64>, beta: Complex<f64>) -> Result<Self, QubitError> {
        normalize([alpha, beta])
    }

    /// Builds a state from the real and imaginary parts of both amplitudes.
    pub fn from_parts(alpha_re: f64, alpha_im: f64, beta_re: f64, beta_im: f64) -> Result<Self, QubitError> {
        Self::new(Complex::new(alpha_re, alpha_im), Complex::new(beta_re, beta_im))
    }

    /// Builds the state named by a preset.
    pub fn from_preset(preset: Preset) -> Result<Self, QubitError> {
        preset.state()
    }

    /// Amplitude of |0⟩.
    pub fn alpha(&self) -> Complex<f64> {
        self.amplitudes[0]
    }

    /// Amplitude of |1⟩.
    pub fn beta(&self) -> Complex<f64> {
        self.amplitudes[1]
    }

    /// Read-only access to both amplitudes, exact and unrounded.
    pub fn amplitudes(&self) -> &Amplitudes {
        &self.amplitudes
    }

    /// `⟨ψ|ψ⟩`; 1 within [`NORM_TOLERANCE`](crate::core::NORM_TOLERANCE) for every value of this type.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum()
    }

    /// Shorthand for [`basis_probabilities`].
    pub fn probabilities(&self) -> Probabilities {
        basis_probabilities(self)
    }

    /// Shorthand for [`orientation_coordinates`].
    pub fn orientation(&self) -> Orientation {
        orientation_coordinates(self)
    }

    /// Component-wise comparison within `tolerance`. Global phase is *not* ignored.
    pub fn approx_eq(&self, other: &QubitState, tolerance: f64) -> bool {
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .all(|(a, b)| (a - b).norm() <= tolerance)
    }
}

impl From<QubitState> for Amplitudes {
    fn from(state: QubitState) -> Self {
        state.amplitudes
    }
}

impl From<&QubitState> for Amplitudes {
    fn from(state: &QubitState) -> Self {
        state.amplitudes
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qubit[{:.4}, {:.4}]", self.amplitudes[0], self.amplitudes[1])
    }
}

/// Rescales an amplitude pair to unit Euclidean norm.
///
/// Fails with [`QubitError::InvalidState`] when either component is NaN or
/// infinite, or when the vector is zero. Every other finite input, from
/// subnormal up to `f64::MAX`, yields a unit-norm state. The result is
/// `v / |v|`, a positive real multiple of the input.
pub fn normalize(vector: Amplitudes) -> Result<QubitState, QubitError> {
    let [alpha, beta] = vector;
    if !(alpha.is_finite() && beta.is_finite()) {
        return Err(QubitError::invalid_state(format!(
            "cannot normalize vector with non-finite component ({}, {})",
            alpha, beta
        )));
    }

    let scale = largest_component(&vector);
    if scale.is_zero() {
        return Err(QubitError::invalid_state("cannot normalize the zero vector"));
    }

    // Bring the largest component to exactly ±1 so the norm is taken in normal range
    let (alpha, beta) = (alpha.unscale(scale), beta.unscale(scale));
    let norm = alpha.norm().hypot(beta.norm());

    Ok(QubitState { amplitudes: [alpha.unscale(norm), beta.unscale(norm)] })
}

fn largest_component(vector: &Amplitudes) -> f64 {
    vector
        .iter()
        .flat_map(|c| [c.re.abs(), c.im.abs()])
        .fold(0.0, f64::max)
}

/// Probabilities of reading 0 and 1 in the computational basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probabilities {
    /// `|α|²`
    pub zero: f64,
    /// `|β|²`
    pub one: f64,
}

impl Probabilities {
    /// `(P(0), P(1))` as a tuple.
    pub fn as_pair(&self) -> (f64, f64) {
        (self.zero, self.one)
    }
}

impl fmt::Display for Probabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P(0) = {:.6}, P(1) = {:.6}", self.zero, self.one)
    }
}

/// `(|α|², |β|²)`. Assumes a normalized input and does not renormalize.
pub fn basis_probabilities(state: &QubitState) -> Probabilities {
    Probabilities {
        zero: state.alpha().norm_sqr(),
        one: state.beta().norm_sqr(),
    }
}

/// Point on the unit sphere representing a pure qubit state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    /// `2·Re(ᾱβ)`
    pub x: f64,
    /// `2·Im(ᾱβ)`
    pub y: f64,
    /// `|α|² − |β|²`
    pub z: f64,
}

impl Orientation {
    /// `(x, y, z)` as a tuple.
    pub fn as_triple(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Euclidean length; 1 for a pure state up to rounding.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x, y, z) = ({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

/// `x = 2·Re(ᾱβ)`, `y = 2·Im(ᾱβ)`, `z = |α|² − |β|²`.
///
/// For a normalized state `x² + y² + z² = 1` within [`NORM_TOLERANCE`](crate::core::NORM_TOLERANCE).
pub fn orientation_coordinates(state: &QubitState) -> Orientation {
    let (alpha, beta) = (state.alpha(), state.beta());
    let coherence = alpha.conj() * beta;
    Orientation {
        x: 2.0 * coherence.re,
        y: 2.0 * coherence.im,
        z: alpha.norm_sqr() - beta.norm_sqr(),
    }
}

/// Named initial states offered to a caller picking a starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// |0⟩
    Zero,
    /// |1⟩
    One,
    /// H|0⟩
    Plus,
    /// H|1⟩
    Minus,
}

impl Preset {
    /// Every preset, in menu order.
    pub const ALL: [Preset; 4] = [Preset::Zero, Preset::One, Preset::Plus, Preset::Minus];

    /// Ket notation of the preset, e.g. `|+⟩`.
    pub fn label(&self) -> &'static str {
        match self {
            Preset::Zero => "|0⟩",
            Preset::One => "|1⟩",
            Preset::Plus => "|+⟩",
            Preset::Minus => "|−⟩",
        }
    }

    /// The normalized state. Superposition presets are derived from the
    /// catalog's H matrix rather than written out.
    pub fn state(&self) -> Result<QubitState, QubitError> {
        match self {
            Preset::Zero => Ok(QubitState::ZERO),
            Preset::One => Ok(QubitState::ONE),
            Preset::Plus => normalize(apply(Operator::Hadamard.matrix(), QubitState::ZERO.amplitudes())),
            Preset::Minus => normalize(apply(Operator::Hadamard.matrix(), QubitState::ONE.amplitudes())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = QubitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" | "|0⟩" | "|0>" => Ok(Preset::Zero),
            "1" | "|1⟩" | "|1>" => Ok(Preset::One),
            "+" | "|+⟩" | "|+>" => Ok(Preset::Plus),
            "-" | "−" | "|-⟩" | "|−⟩" | "|->" => Ok(Preset::Minus),
            other => Err(QubitError::invalid_state(format!("unknown preset '{}'", other))),
        }
    }
}
