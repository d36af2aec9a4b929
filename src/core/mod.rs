// src/core/mod.rs

//! Core data structures and types: the qubit state, its observables and the error taxonomy.

pub mod error;
pub mod state;

// Re-export public types for convenient access via `cipherq::core::TypeName`
pub use error::QubitError;
pub use state::{
    basis_probabilities, normalize, orientation_coordinates, Amplitudes, Orientation, Preset,
    Probabilities, QubitState,
};

pub mod constants;
pub use constants::qubit_constants::{NORM_TOLERANCE, UNITARY_TOLERANCE};
