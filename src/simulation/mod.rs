// src/simulation/mod.rs

//! Replays operator sequences against an initial state and measures the result.
//!
//! [`evolve`] is the replay algorithm behind `Circuit::replay`. It is exposed
//! on its own for callers that hold a plain list of operator names.

mod results;
pub mod measurement;

pub use measurement::{
    measure_computational_basis, sample_counts, BasisOutcome, FixedSequence, Measurement,
    OutcomeCounts, RandomSource,
};
pub use results::{Step, StepLabel, Trajectory, Transition};

use crate::core::{normalize, Amplitudes, QubitError};
use crate::operations::{apply, lookup_entry};
use tracing::{debug, trace};

/// Replays `names` in order starting from `initial`.
///
/// The initial vector is normalized first and recorded as the `Input` entry.
/// Each operator is then looked up by name, applied to the current state,
/// and the product renormalized before it is recorded. Renormalizing after
/// every step keeps each entry independently at unit norm instead of letting
/// rounding drift accumulate across a long sequence.
///
/// # Errors
/// * [`QubitError::InvalidState`] if `initial` cannot be normalized.
/// * [`QubitError::UnknownOperator`] for the first name outside the catalog;
///   no partial trajectory is returned.
pub fn evolve<I, S>(initial: Amplitudes, names: I) -> Result<Trajectory, QubitError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names = names.into_iter();
    let mut state = normalize(initial)?;
    let mut trajectory = Trajectory::starting_at(state, names.size_hint().0);

    for name in names {
        let entry = lookup_entry(name.as_ref())?;
        let product = apply(entry.matrix(), state.amplitudes());
        state = normalize(product)?;
        trace!(operator = entry.name(), state = %state, "applied operator");
        trajectory.record(entry.operator(), state);
    }

    debug!(operators = trajectory.len() - 1, final_state = %trajectory.final_state(), "replayed sequence");
    Ok(trajectory)
}
