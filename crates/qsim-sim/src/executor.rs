//! Circuit execution: gate replay followed by shot sampling.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, instrument, trace, warn};

use qsim_ir::{Circuit, GateKind};

use crate::applicator::apply_gate;
use crate::config::SimulatorConfig;
use crate::context::ExecutionContext;
use crate::error::{SimError, SimResult};
use crate::result::CircuitResult;
use crate::sampler::{Histogram, bitstring, sample_index};

/// Deviation of Σp from 1 beyond which a warning is logged.
const NORM_TOLERANCE: f64 = 1e-9;

/// Statevector executor.
///
/// Owns the sampling RNG, so repeated runs with the same seed and inputs
/// produce identical histograms.
#[derive(Debug, Clone)]
pub struct Executor {
    config: SimulatorConfig,
    rng: StdRng,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

impl Executor {
    /// Create an executor. The RNG follows `config.seed`.
    pub fn new(config: SimulatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SimulatorConfig {
            seed: Some(seed),
            ..SimulatorConfig::default()
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Run `circuit` from |0...0⟩ on a fresh context.
    pub fn execute(&mut self, circuit: &Circuit, shots: u32) -> SimResult<CircuitResult> {
        let mut ctx = ExecutionContext::for_circuit(circuit);
        self.execute_in(&mut ctx, circuit, shots)
    }

    /// Run `circuit` on top of whatever state `ctx` holds.
    ///
    /// Nothing in `ctx` is touched if validation fails.
    #[instrument(skip(self, ctx, circuit), fields(circuit = circuit.name()))]
    pub fn execute_in(
        &mut self,
        ctx: &mut ExecutionContext,
        circuit: &Circuit,
        shots: u32,
    ) -> SimResult<CircuitResult> {
        if shots == 0 {
            return Err(SimError::InvalidShotCount(shots));
        }
        if circuit.num_qubits() > self.config.max_qubits {
            return Err(SimError::CircuitTooLarge {
                qubits: circuit.num_qubits(),
                max: self.config.max_qubits,
            });
        }
        if !ctx.fits(circuit) {
            return Err(SimError::ContextMismatch {
                context_qubits: ctx.num_qubits(),
                context_clbits: ctx.num_clbits(),
                circuit_qubits: circuit.num_qubits(),
                circuit_clbits: circuit.num_clbits(),
            });
        }

        let start = Instant::now();
        debug!(
            "Executing {} qubits, {} gates, {} shots",
            circuit.num_qubits(),
            circuit.len(),
            shots
        );

        for gate in circuit.gates() {
            apply_gate(ctx.state_mut(), gate, self.config.semantics)?;
        }

        let probabilities = ctx.state().probabilities();
        let total: f64 = probabilities.iter().sum();
        if (total - 1.0).abs() > NORM_TOLERANCE {
            warn!("Total probability {total} deviates from 1; sampling without renormalizing");
        }

        let mut histogram = Histogram::new();
        for shot in 0..shots {
            histogram.record(sample_index(&probabilities, &mut self.rng));
            if shot > 0 && shot % 1000 == 0 {
                trace!("Completed {} shots", shot);
            }
        }

        let width = circuit.num_qubits() as usize;
        let outcome = histogram.most_frequent().unwrap_or(0);
        for gate in circuit.gates() {
            let (GateKind::Measure, Some(clbit)) = (gate.kind, gate.clbit) else {
                continue;
            };
            if let (Some(q), Some(slot)) =
                (gate.qubits.first(), ctx.classical_mut().get_mut(clbit.index()))
            {
                *slot = ((outcome >> q.index()) & 1) as u8;
            }
        }

        let elapsed = start.elapsed();
        debug!(
            "Simulation completed in {:?}, {} distinct outcomes",
            elapsed,
            histogram.len()
        );

        Ok(CircuitResult::new(
            ctx.classical_bits().to_vec(),
            bitstring(outcome, width),
            probabilities,
            ctx.state().amplitudes().to_vec(),
            histogram.to_bitstrings(width),
            elapsed.as_secs_f64() * 1000.0,
            shots,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsim_ir::QubitId;

    #[test]
    fn test_zero_shots_rejected() {
        let mut exec = Executor::with_seed(1);
        let err = exec.execute(&Circuit::bell().unwrap(), 0).unwrap_err();
        assert!(matches!(err, SimError::InvalidShotCount(0)));
    }

    #[test]
    fn test_same_seed_same_counts() {
        let circuit = Circuit::ghz(3).unwrap();
        let a = Executor::with_seed(5).execute(&circuit, 500).unwrap();
        let b = Executor::with_seed(5).execute(&circuit, 500).unwrap();
        assert_eq!(a.outcome_counts(), b.outcome_counts());
        assert_eq!(a.most_likely(), b.most_likely());
    }

    #[test]
    fn test_deterministic_outcome_sets_register() {
        // X on q1: outcome is always 0b10
        let mut circuit = Circuit::new(2).unwrap();
        circuit.x(QubitId(1)).unwrap().measure_all().unwrap();

        let result = Executor::with_seed(3).execute(&circuit, 50).unwrap();
        assert_eq!(result.most_likely(), "10");
        assert_eq!(result.count("10"), 50);
        assert_eq!(result.measurements(), &[0, 1]);
    }

    #[test]
    fn test_unmeasured_bits_stay_zero() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit.x(QubitId(0)).unwrap().x(QubitId(1)).unwrap();
        let result = Executor::with_seed(3).execute(&circuit, 10).unwrap();
        assert_eq!(result.most_likely(), "11");
        assert_eq!(result.measurements(), &[0, 0]);
    }

    #[test]
    fn test_empty_register() {
        let circuit = Circuit::new(0).unwrap();
        let result = Executor::with_seed(3).execute(&circuit, 4).unwrap();
        assert_eq!(result.probabilities(), &[1.0]);
        assert_eq!(result.count(""), 4);
    }
}
