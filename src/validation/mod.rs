// src/validation/mod.rs

//! Tolerance-based checks on states, matrices and trajectories.
//!
//! Every check takes an optional tolerance and falls back to the crate default.

use crate::core::{QubitError, QubitState, NORM_TOLERANCE, UNITARY_TOLERANCE};
use crate::operations::{adjoint, catalog, multiply, Matrix2};
use crate::simulation::Trajectory;
use num_complex::Complex;
use num_traits::{One, Zero};

/// Checks that `|α|² + |β|² ≈ 1`.
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(QubitError::InvalidState)` otherwise.
pub fn check_normalization(state: &QubitState, tolerance: Option<f64>) -> Result<(), QubitError> {
    let effective_tolerance = tolerance.unwrap_or(NORM_TOLERANCE);
    let norm_sq = state.norm_sqr();
    if (norm_sq - 1.0).abs() > effective_tolerance {
        Err(QubitError::invalid_state(format!(
            "State vector normalization failed. Sum(|c_i|^2) = {} (Deviation > {})",
            norm_sq, effective_tolerance
        )))
    } else {
        Ok(())
    }
}

/// Whether `U†U` equals the identity entry-wise within tolerance.
pub fn is_unitary(matrix: &Matrix2, tolerance: Option<f64>) -> bool {
    let effective_tolerance = tolerance.unwrap_or(UNITARY_TOLERANCE);
    let product = multiply(&adjoint(matrix), matrix);
    product.iter().enumerate().all(|(row, entries)| {
        entries.iter().enumerate().all(|(col, entry)| {
            let expected = if row == col { Complex::one() } else { Complex::zero() };
            (entry - expected).norm() <= effective_tolerance
        })
    })
}

/// Names of catalog entries that fail [`is_unitary`]; empty for a sound catalog.
pub fn non_unitary_catalog_entries(tolerance: Option<f64>) -> Vec<&'static str> {
    catalog()
        .iter()
        .filter(|entry| !is_unitary(entry.matrix(), tolerance))
        .map(|entry| entry.name())
        .collect()
}

/// Checks the trajectory contract: every entry normalized.
///
/// The error message names the first offending entry.
pub fn validate_trajectory(trajectory: &Trajectory, norm_tolerance: Option<f64>) -> Result<(), QubitError> {
    for (i, step) in trajectory.iter().enumerate() {
        check_normalization(step.state(), norm_tolerance).map_err(|e| match e {
            QubitError::InvalidState { message } => {
                QubitError::invalid_state(format!("trajectory entry {} [{}]: {}", i, step.label(), message))
            }
            other => other,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::qubit_constants::FRAC_1_SQRT_2;
    use crate::simulation::evolve;

    #[test]
    fn test_catalog_is_unitary() {
        assert!(non_unitary_catalog_entries(None).is_empty());
    }

    #[test]
    fn test_non_unitary_matrix_detected() {
        let projector: Matrix2 = [
            [Complex::one(), Complex::zero()],
            [Complex::zero(), Complex::zero()],
        ];
        assert!(!is_unitary(&projector, None));

        // Slightly off Hadamard passes only with a loose tolerance
        let h = Complex::new(FRAC_1_SQRT_2 + 1e-7, 0.0);
        let skewed: Matrix2 = [[h, h], [h, -h]];
        assert!(!is_unitary(&skewed, None));
        assert!(is_unitary(&skewed, Some(1e-5)));
    }

    #[test]
    fn test_check_normalization() -> Result<(), QubitError> {
        check_normalization(&QubitState::from_parts(1.0, 2.0, 3.0, 4.0)?, None)?;
        Ok(())
    }

    #[test]
    fn test_validate_trajectory() -> Result<(), QubitError> {
        let trajectory = evolve(QubitState::from_parts(0.2, 0.0, 0.4, 0.1)?.into(), ["H", "Z", "X", "I"])?;
        validate_trajectory(&trajectory, None)?;
        Ok(())
    }
}
