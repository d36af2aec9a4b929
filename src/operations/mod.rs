// src/operations/mod.rs

//! The operator library: a closed catalog of named 2×2 unitary matrices.
//!
//! Matrices are computed once, on first access, into an immutable table.
//! Every lookup returns a reference into that table, so the same name always
//! yields the same matrix (same values, same address).

use crate::core::constants::qubit_constants::FRAC_1_SQRT_2;
use crate::core::{Amplitudes, QubitError};
use num_complex::Complex;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;

/// A 2×2 complex matrix in row-major order.
pub type Matrix2 = [[Complex<f64>; 2]; 2];

/// The operators available to a circuit.
///
/// Declaration order is catalog order (the order offered to a caller choosing an operator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    /// `I`, leaves the state unchanged.
    Identity,
    /// `X`, swaps the |0⟩ and |1⟩ amplitudes.
    BitFlip,
    /// `Z`, negates the |1⟩ amplitude.
    PhaseFlip,
    /// `H`, maps each basis state onto a balanced superposition.
    Hadamard,
}

impl Operator {
    /// Every operator, in catalog order.
    pub const ALL: [Operator; 4] = [
        Operator::Identity,
        Operator::BitFlip,
        Operator::PhaseFlip,
        Operator::Hadamard,
    ];

    /// Symbolic name used in sequences and trajectory labels.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Identity => "I",
            Operator::BitFlip => "X",
            Operator::PhaseFlip => "Z",
            Operator::Hadamard => "H",
        }
    }

    /// The operator's matrix from the catalog table.
    pub fn matrix(&self) -> &'static Matrix2 {
        &CATALOG[*self as usize].matrix
    }

    fn build_matrix(&self) -> Matrix2 {
        let one = Complex::one();
        let zero = Complex::zero();
        match self {
            Operator::Identity => [
                [one, zero],
                [zero, one],
            ],
            Operator::BitFlip => [
                [zero, one],
                [one, zero],
            ],
            Operator::PhaseFlip => [
                [one, zero],
                [zero, -one],
            ],
            Operator::Hadamard => {
                let h = Complex::new(FRAC_1_SQRT_2, 0.0);
                [
                    [h, h],
                    [h, -h],
                ]
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = QubitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_entry(s).map(|entry| entry.operator)
    }
}

/// One row of the catalog: an operator together with its precomputed matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedOperator {
    operator: Operator,
    matrix: Matrix2,
}

impl NamedOperator {
    /// The catalog operator this row describes.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Catalog name, e.g. `"H"`.
    pub fn name(&self) -> &'static str {
        self.operator.name()
    }

    /// The precomputed 2×2 matrix.
    pub fn matrix(&self) -> &Matrix2 {
        &self.matrix
    }
}

static CATALOG: Lazy<[NamedOperator; 4]> = Lazy::new(|| {
    Operator::ALL.map(|operator| NamedOperator {
        operator,
        matrix: operator.build_matrix(),
    })
});

/// The whole catalog, in catalog order.
pub fn catalog() -> &'static [NamedOperator] {
    CATALOG.as_slice()
}

/// The names accepted by [`lookup`], in catalog order.
pub fn operator_names() -> Vec<&'static str> {
    Operator::ALL.iter().map(Operator::name).collect()
}

/// Finds the catalog entry for `name`.
///
/// Names are matched exactly; anything else is [`QubitError::UnknownOperator`].
pub fn lookup_entry(name: &str) -> Result<&'static NamedOperator, QubitError> {
    CATALOG
        .iter()
        .find(|entry| entry.name() == name)
        .ok_or_else(|| QubitError::unknown_operator(name))
}

/// Returns the matrix registered under `name`.
pub fn lookup(name: &str) -> Result<&'static Matrix2, QubitError> {
    lookup_entry(name).map(NamedOperator::matrix)
}

/// Left-multiplies an amplitude pair by `matrix`. The product is not renormalized.
pub fn apply(matrix: &Matrix2, vector: &Amplitudes) -> Amplitudes {
    [
        matrix[0][0] * vector[0] + matrix[0][1] * vector[1],
        matrix[1][0] * vector[0] + matrix[1][1] * vector[1],
    ]
}

/// Conjugate transpose.
pub fn adjoint(matrix: &Matrix2) -> Matrix2 {
    [
        [matrix[0][0].conj(), matrix[1][0].conj()],
        [matrix[0][1].conj(), matrix[1][1].conj()],
    ]
}

/// Matrix product `a · b`.
pub fn multiply(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut product = [[Complex::zero(); 2]; 2];
    for (row, out_row) in product.iter_mut().enumerate() {
        for (col, out) in out_row.iter_mut().enumerate() {
            *out = a[row][0] * b[0][col] + a[row][1] * b[1][col];
        }
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::qubit_constants::UNITARY_TOLERANCE;

    #[test]
    fn test_catalog_order_matches_operator_order() {
        for (index, entry) in catalog().iter().enumerate() {
            assert_eq!(entry.operator() as usize, index);
            assert_eq!(entry.operator(), Operator::ALL[index]);
        }
        assert_eq!(operator_names(), vec!["I", "X", "Z", "H"]);
    }

    #[test]
    fn test_lookup_known_names() -> Result<(), QubitError> {
        for operator in Operator::ALL {
            let matrix = lookup(operator.name())?;
            assert!(std::ptr::eq(matrix, operator.matrix()), "lookup for {} must reuse the table entry", operator);
            assert_eq!(operator.name().parse::<Operator>()?, operator);
        }
        Ok(())
    }

    #[test]
    fn test_lookup_unknown_name() {
        for name in ["Q", "h", "", "Hadamard", "X "] {
            match lookup(name) {
                Err(QubitError::UnknownOperator { name: rejected }) => assert_eq!(rejected, name),
                other => panic!("expected UnknownOperator for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_catalog_matrices_are_unitary() {
        let identity = Operator::Identity.matrix();
        for entry in catalog() {
            let product = multiply(&adjoint(entry.matrix()), entry.matrix());
            for row in 0..2 {
                for col in 0..2 {
                    let diff = (product[row][col] - identity[row][col]).norm();
                    assert!(diff < UNITARY_TOLERANCE, "{}†{} deviates at ({}, {}) by {:e}", entry.name(), entry.name(), row, col, diff);
                }
            }
        }
    }

    #[test]
    fn test_apply_bit_flip() {
        let flipped = apply(Operator::BitFlip.matrix(), &[Complex::new(0.6, 0.0), Complex::new(0.0, 0.8)]);
        assert_eq!(flipped, [Complex::new(0.0, 0.8), Complex::new(0.6, 0.0)]);
    }

    #[test]
    fn test_apply_phase_flip() {
        let flipped = apply(Operator::PhaseFlip.matrix(), &[Complex::new(0.6, 0.0), Complex::new(0.8, 0.0)]);
        assert_eq!(flipped, [Complex::new(0.6, 0.0), Complex::new(-0.8, 0.0)]);
    }
}
