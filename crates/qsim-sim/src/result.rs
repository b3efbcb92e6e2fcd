//! Execution results.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of one [`crate::Executor`] run. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitResult {
    measurements: Vec<u8>,
    most_likely: String,
    probabilities: Vec<f64>,
    final_state: Vec<Complex64>,
    outcome_counts: BTreeMap<String, u64>,
    execution_time_ms: f64,
    shots: u32,
}

impl CircuitResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        measurements: Vec<u8>,
        most_likely: String,
        probabilities: Vec<f64>,
        final_state: Vec<Complex64>,
        outcome_counts: BTreeMap<String, u64>,
        execution_time_ms: f64,
        shots: u32,
    ) -> Self {
        Self {
            measurements,
            most_likely,
            probabilities,
            final_state,
            outcome_counts,
            execution_time_ms,
            shots,
        }
    }

    /// Classical register written from the most frequent outcome.
    pub fn measurements(&self) -> &[u8] {
        &self.measurements
    }

    /// The reported outcome: highest count, earliest on ties.
    pub fn most_likely(&self) -> &str {
        &self.most_likely
    }

    /// `|a_i|^2` per basis index, as computed (not renormalized).
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Sum of [`Self::probabilities`].
    pub fn total_probability(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Amplitude snapshot after the last gate.
    pub fn final_state(&self) -> &[Complex64] {
        &self.final_state
    }

    /// Shot counts keyed by bitstring, qubit n-1 leftmost.
    pub fn outcome_counts(&self) -> &BTreeMap<String, u64> {
        &self.outcome_counts
    }

    /// Shots that landed on `bitstring`.
    pub fn count(&self, bitstring: &str) -> u64 {
        self.outcome_counts.get(bitstring).copied().unwrap_or(0)
    }

    /// `count / shots` for `bitstring`.
    pub fn frequency(&self, bitstring: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.count(bitstring) as f64 / f64::from(self.shots)
    }

    /// Wall-clock milliseconds spent in gate replay and sampling.
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time_ms
    }

    /// Number of shots drawn.
    pub fn shots(&self) -> u32 {
        self.shots
    }
}
