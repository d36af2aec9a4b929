// src/lib.rs

//! `cipherq` - single-qubit state evolution and measurement
//!
//! A qubit state is a normalized amplitude pair. Circuits hold an ordered list of
//! operators from a fixed catalog (`I`, `X`, `Z`, `H`) and replay it against an
//! initial state, yielding the full trajectory of intermediate states. Final
//! states feed the observables (Z-basis probabilities, orientation on the unit
//! sphere) and an explicitly seeded computational-basis measurement.

pub mod core;
pub mod operations;
pub mod circuits;
pub mod simulation;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use self::core::{
    basis_probabilities, normalize, orientation_coordinates, Amplitudes, Orientation, Preset,
    Probabilities, QubitError, QubitState,
};
pub use operations::{lookup, operator_names, Matrix2, Operator};
pub use circuits::{Circuit, CircuitBuilder};
pub use simulation::{
    evolve, measure_computational_basis, BasisOutcome, FixedSequence, Measurement, RandomSource,
    Step, StepLabel, Trajectory,
};
pub use validation::{check_normalization, is_unitary, validate_trajectory};

// Example 1: Build a circuit and inspect the trajectory
// Starts from |0⟩, applies H then Z, and reads the observables of the final state.
/// ```
/// use cipherq::{Circuit, QubitError, QubitState};
///
/// let mut circuit = Circuit::new();
/// circuit.append("H")?;
/// circuit.append("Z")?;
/// println!("{}", circuit);
///
/// let trajectory = circuit.replay(QubitState::ZERO)?;
/// println!("{}", trajectory);
/// assert_eq!(trajectory.len(), 3);
///
/// let labels: Vec<_> = trajectory.iter().map(|step| step.label().as_str()).collect();
/// assert_eq!(labels, ["Input", "H", "Z"]);
///
/// // (1/√2, -1/√2) sits on the -x axis with equal Z-basis probabilities
/// let p = trajectory.final_probabilities();
/// assert!((p.zero - 0.5).abs() < 1e-9 && (p.one - 0.5).abs() < 1e-9);
/// assert!((trajectory.final_orientation().x + 1.0).abs() < 1e-9);
/// # Ok::<(), QubitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Measurement with an injected random source
/// ```
/// use cipherq::{BasisOutcome, FixedSequence, Preset, QubitError, measure_computational_basis};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let plus = Preset::Plus.state()?;
///
/// // A fixed sample below P(0) = 0.5 always reads 0
/// let m = measure_computational_basis(&plus, &mut FixedSequence::repeating(0.25));
/// assert_eq!(m.outcome, BasisOutcome::Zero);
///
/// // A seeded generator makes a run reproducible
/// let mut rng = StdRng::seed_from_u64(2024);
/// let m = measure_computational_basis(&plus, &mut rng);
/// println!("{}", m);
/// assert_eq!(m.state, m.outcome.state());
/// # Ok::<(), QubitError>(())
/// ```
#[doc(hidden)]
const _: () = ();
