// src/simulation/results.rs
use crate::core::constants::qubit_constants::INPUT_LABEL;
use crate::core::{Orientation, Probabilities, QubitState};
use crate::operations::{Matrix2, Operator};
use std::fmt;

/// What produced a trajectory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepLabel {
    /// The initial condition.
    Input,
    /// The operator applied to the previous entry.
    Operator(Operator),
}

impl StepLabel {
    /// `"Input"` or the operator's catalog name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepLabel::Input => INPUT_LABEL,
            StepLabel::Operator(op) => op.name(),
        }
    }

    /// The operator behind this entry, `None` for the input.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            StepLabel::Input => None,
            StepLabel::Operator(op) => Some(*op),
        }
    }
}

impl fmt::Display for StepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(label, state)` entry of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    label: StepLabel,
    state: QubitState,
}

impl Step {
    pub(crate) fn new(label: StepLabel, state: QubitState) -> Self {
        Self { label, state }
    }

    /// What produced this entry.
    pub fn label(&self) -> StepLabel {
        self.label
    }

    /// The normalized state recorded for this entry.
    pub fn state(&self) -> &QubitState {
        &self.state
    }

    /// The entry as a plain `(label, state)` pair.
    pub fn as_pair(&self) -> (&'static str, QubitState) {
        (self.label.as_str(), self.state)
    }
}

/// A single operator application inside a trajectory, `after = normalize(U · before)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<'a> {
    /// 1-based position of the operator in the sequence.
    pub index: usize,
    /// The operator applied.
    pub operator: Operator,
    /// Its catalog matrix.
    pub matrix: &'static Matrix2,
    /// State the operator acted on.
    pub before: &'a QubitState,
    /// Renormalized result.
    pub after: &'a QubitState,
}

/// Every intermediate state produced by replaying a sequence against an initial state.
///
/// The first entry is labelled [`StepLabel::Input`]; entry `i > 0` was produced
/// from entry `i - 1` by the operator in its label. Length is always the number
/// of operators plus one, and the value is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    steps: Vec<Step>,
}

impl Trajectory {
    /// Starts a trajectory at `initial`. (Internal visibility)
    pub(crate) fn starting_at(initial: QubitState, capacity: usize) -> Self {
        let mut steps = Vec::with_capacity(capacity + 1);
        steps.push(Step::new(StepLabel::Input, initial));
        Self { steps }
    }

    /// Records the result of applying `operator`. (Internal visibility)
    pub(crate) fn record(&mut self, operator: Operator, state: QubitState) {
        self.steps.push(Step::new(StepLabel::Operator(operator), state));
    }

    /// All entries, input first.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Number of entries, including the initial one. Never zero.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The normalized initial state.
    pub fn initial_state(&self) -> &QubitState {
        // starting_at guarantees the first entry
        &self.steps[0].state
    }

    /// The state after the last operator (the initial state for an empty sequence).
    pub fn final_state(&self) -> &QubitState {
        &self.steps[self.steps.len() - 1].state
    }

    /// Operator names in application order.
    pub fn operator_names(&self) -> Vec<&'static str> {
        self.steps.iter().filter_map(|s| s.label.operator()).map(|op| op.name()).collect()
    }

    /// Pairs consecutive entries with the operator linking them.
    pub fn transitions(&self) -> impl Iterator<Item = Transition<'_>> + '_ {
        self.steps.windows(2).enumerate().filter_map(|(i, pair)| {
            pair[1].label.operator().map(|operator| Transition {
                index: i + 1,
                operator,
                matrix: operator.matrix(),
                before: &pair[0].state,
                after: &pair[1].state,
            })
        })
    }

    /// Z-basis probabilities of the final state.
    pub fn final_probabilities(&self) -> Probabilities {
        self.final_state().probabilities()
    }

    /// Orientation coordinates of the final state.
    pub fn final_orientation(&self) -> Orientation {
        self.final_state().orientation()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for Trajectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trajectory ({} operators):", self.steps.len() - 1)?;
        for (i, step) in self.steps.iter().enumerate() {
            writeln!(f, "  ψ{} [{}]: {}", i, step.label, step.state)?;
        }
        Ok(())
    }
}
