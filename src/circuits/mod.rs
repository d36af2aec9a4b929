// src/circuits/mod.rs

//! The evolution engine: a caller-owned, ordered sequence of operators.
//!
//! A `Circuit` is edited with [`Circuit::append`], [`Circuit::remove_last`] and
//! [`Circuit::clear`], and replayed against any initial state with
//! [`Circuit::replay`]. Replay only reads the sequence, so one circuit can be
//! edited and replayed repeatedly. Each session owns its own circuit; there is
//! no shared or global sequence.

use crate::core::constants::qubit_constants::DEFAULT_WIRE_LABEL;
use crate::core::{Amplitudes, QubitError};
use crate::operations::Operator;
use crate::simulation::{evolve, Trajectory};
use std::fmt;
use tracing::debug;

/// An ordered sequence of catalog operators acting on one qubit wire.
#[derive(Clone, PartialEq, Eq)]
pub struct Circuit {
    /// Wire label used by the text diagram.
    label: String,

    /// Operators in application order.
    operators: Vec<Operator>,
}

impl Circuit {
    /// Creates a new, empty circuit on wire `q0`.
    pub fn new() -> Self {
        Self::with_label(DEFAULT_WIRE_LABEL)
    }

    /// Creates a new, empty circuit with a custom wire label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            operators: Vec::new(),
        }
    }

    /// Validates `name` against the catalog and appends it.
    ///
    /// On [`QubitError::UnknownOperator`] the sequence is left unchanged.
    pub fn append(&mut self, name: &str) -> Result<(), QubitError> {
        let operator: Operator = name.parse()?;
        self.push(operator);
        Ok(())
    }

    /// Appends an already-typed operator.
    pub fn push(&mut self, operator: Operator) {
        self.operators.push(operator);
        debug!(operator = operator.name(), len = self.operators.len(), "appended operator");
    }

    /// Drops the most recently appended operator and returns it.
    /// A no-op returning `None` on an empty circuit.
    pub fn remove_last(&mut self) -> Option<Operator> {
        let removed = self.operators.pop();
        if let Some(op) = removed {
            debug!(operator = op.name(), len = self.operators.len(), "removed last operator");
        }
        removed
    }

    /// Empties the sequence.
    pub fn clear(&mut self) {
        debug!(dropped = self.operators.len(), "cleared circuit");
        self.operators.clear();
    }

    /// Replays the sequence against `initial`. See [`evolve`] for the algorithm.
    ///
    /// The circuit itself is not modified.
    pub fn replay(&self, initial: impl Into<Amplitudes>) -> Result<Trajectory, QubitError> {
        evolve(initial.into(), self.names())
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns a slice containing the ordered sequence of operators.
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Operator names in application order.
    pub fn names(&self) -> Vec<&'static str> {
        self.operators.iter().map(Operator::name).collect()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// One-line summary such as `H → Z`, or `(empty)`.
    pub fn summary(&self) -> String {
        if self.operators.is_empty() {
            "(empty)".to_string()
        } else {
            self.names().join(" → ")
        }
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// Method-chaining construction of a `Circuit`.
///
/// Names are validated as they are added; the first unknown name is reported by `build`.
pub struct CircuitBuilder {
    circuit: Circuit,
    error: Option<QubitError>,
}

impl CircuitBuilder {
    /// Starts an empty builder on wire `q0`.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
            error: None,
        }
    }

    /// Sets the wire label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.circuit.label = label.into();
        self
    }

    /// Adds an already-typed operator.
    pub fn add_op(mut self, operator: Operator) -> Self {
        self.circuit.push(operator);
        self
    }

    /// Adds an operator by name. An unknown name is remembered and the rest of the chain is still accepted.
    pub fn add_named(mut self, name: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.circuit.append(name) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Adds several typed operators in order.
    pub fn add_ops<I>(mut self, operators: I) -> Self
    where
        I: IntoIterator<Item = Operator>,
    {
        for operator in operators {
            self.circuit.push(operator);
        }
        self
    }

    /// Returns the built circuit, or the first name rejected by `add_named`.
    pub fn build(self) -> Result<Circuit, QubitError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.circuit),
        }
    }
}

impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const H_WIRE: char = '─';

        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre_dashes = total_dashes / 2;
                let post_dashes = total_dashes - pre_dashes;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre_dashes),
                    symbol,
                    H_WIRE.to_string().repeat(post_dashes)
                )
            }
        }

        writeln!(f, "cipherq::Circuit[{} operations on {}]", self.operators.len(), self.label)?;
        write!(f, "{}: ", self.label)?;
        if self.operators.is_empty() {
            return writeln!(f, "{}", H_WIRE.to_string().repeat(GATE_WIDTH));
        }
        let wire: String = self.operators.iter().map(|op| format_gate(op.name())).collect();
        writeln!(f, "{}", wire)
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QubitState;

    #[test]
    fn test_append_and_remove_last() -> Result<(), QubitError> {
        let mut circuit = Circuit::new();
        assert!(circuit.is_empty());
        circuit.append("H")?;
        circuit.append("Z")?;
        assert_eq!(circuit.operators(), &[Operator::Hadamard, Operator::PhaseFlip]);

        assert_eq!(circuit.remove_last(), Some(Operator::PhaseFlip));
        assert_eq!(circuit.names(), vec!["H"]);
        assert_eq!(circuit.remove_last(), Some(Operator::Hadamard));
        assert_eq!(circuit.remove_last(), None); // no-op when empty
        assert!(circuit.is_empty());
        Ok(())
    }

    #[test]
    fn test_append_unknown_leaves_sequence_unchanged() -> Result<(), QubitError> {
        let mut circuit = Circuit::new();
        circuit.append("X")?;
        let before = circuit.clone();
        assert_eq!(circuit.append("Q"), Err(QubitError::UnknownOperator { name: "Q".to_string() }));
        assert_eq!(circuit, before);
        Ok(())
    }

    #[test]
    fn test_clear() -> Result<(), QubitError> {
        let mut circuit = CircuitBuilder::new().add_ops(Operator::ALL).build()?;
        assert_eq!(circuit.len(), 4);
        circuit.clear();
        assert!(circuit.is_empty());
        circuit.clear();
        assert!(circuit.is_empty());
        Ok(())
    }

    #[test]
    fn test_replay_does_not_change_sequence() -> Result<(), QubitError> {
        let circuit = CircuitBuilder::new().add_named("H").add_named("X").build()?;
        let before = circuit.clone();
        let first = circuit.replay(QubitState::ZERO)?;
        let second = circuit.replay(QubitState::ZERO)?;
        assert_eq!(first, second);
        assert_eq!(circuit, before);
        assert_eq!(first.len(), circuit.len() + 1);
        Ok(())
    }

    #[test]
    fn test_builder_reports_first_unknown_name() {
        let result = CircuitBuilder::new().add_named("H").add_named("W").add_named("V").build();
        assert_eq!(result, Err(QubitError::UnknownOperator { name: "W".to_string() }));
    }

    #[test]
    fn test_summary_and_diagram() -> Result<(), QubitError> {
        let empty = Circuit::new();
        assert_eq!(empty.summary(), "(empty)");
        assert_eq!(empty.to_string(), "cipherq::Circuit[0 operations on q0]\nq0: ───────\n");

        let circuit = CircuitBuilder::new().label("a").add_named("H").add_named("Z").build()?;
        assert_eq!(circuit.summary(), "H → Z");
        assert_eq!(circuit.to_string(), "cipherq::Circuit[2 operations on a]\na: ───H──────Z───\n");
        Ok(())
    }
}
