//! Numeric constants shared by the state utilities, the catalog and validation.

/// Tolerances and fixed values used across the crate.
pub mod qubit_constants {
    /// Allowed deviation of `|α|² + |β|²` from 1 for a state to count as normalized.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// Allowed entry-wise deviation of `U†U` from the identity.
    pub const UNITARY_TOLERANCE: f64 = 1e-12;
    /// `1/√2`, the amplitude of the balanced superposition.
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
    /// Label of the first trajectory entry.
    pub const INPUT_LABEL: &str = "Input";
    /// Wire label used when a circuit is not given one.
    pub const DEFAULT_WIRE_LABEL: &str = "q0";
}
