//! End-to-end execution tests.

use qsim_ir::{Circuit, IrError, QubitId};
use qsim_sim::{
    CircuitResult, EntanglerSemantics, ExecutionContext, Executor, SimError, SimulatorConfig,
};

fn assert_probs(result: &CircuitResult, expected: &[f64]) {
    assert_eq!(result.probabilities().len(), expected.len());
    for (i, (p, e)) in result.probabilities().iter().zip(expected).enumerate() {
        assert!((p - e).abs() < 1e-9, "p[{i}] = {p}, expected {e}");
    }
}

fn standard_executor(seed: u64) -> Executor {
    Executor::new(SimulatorConfig {
        seed: Some(seed),
        semantics: EntanglerSemantics::Standard,
        ..SimulatorConfig::default()
    })
}

// ---------------------------------------------------------------------------
// Reset
// ---------------------------------------------------------------------------

#[test]
fn reset_restores_ground_state_and_clears_gates() {
    let mut circuit = Circuit::bell().unwrap();
    let mut ctx = ExecutionContext::for_circuit(&circuit);
    Executor::with_seed(1)
        .execute_in(&mut ctx, &circuit, 100)
        .unwrap();

    ctx.reset();
    circuit.reset();

    let amps = ctx.state().amplitudes();
    assert!((amps[0].re - 1.0).abs() < 1e-12 && amps[0].im == 0.0);
    assert!(amps[1..].iter().all(|a| a.norm() == 0.0));
    assert!(ctx.classical_bits().iter().all(|&b| b == 0));
    assert!(circuit.is_empty());
    assert_eq!(circuit.num_qubits(), 2);
}

// ---------------------------------------------------------------------------
// Canonical circuits
// ---------------------------------------------------------------------------

#[test]
fn bell_statistics() {
    let circuit = Circuit::bell().unwrap();
    let result = Executor::with_seed(2024).execute(&circuit, 10_000).unwrap();

    assert_eq!(result.shots(), 10_000);
    assert_eq!(result.count("01"), 0);
    assert_eq!(result.count("10"), 0);
    assert_eq!(result.outcome_counts().len(), 2);
    for key in ["00", "11"] {
        let f = result.frequency(key);
        assert!((0.45..=0.55).contains(&f), "{key}: {f}");
    }
    assert_probs(&result, &[0.5, 0.0, 0.0, 0.5]);
    assert!((result.total_probability() - 1.0).abs() < 1e-12);
    assert!(result.execution_time_ms() >= 0.0);
}

#[test]
fn ghz3_statistics() {
    let circuit = Circuit::ghz(3).unwrap();
    let result = Executor::with_seed(7).execute(&circuit, 10_000).unwrap();

    let keys: Vec<&str> = result.outcome_counts().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["000", "111"]);
    for key in ["000", "111"] {
        let f = result.frequency(key);
        assert!((0.45..=0.55).contains(&f), "{key}: {f}");
    }
    assert_probs(&result, &[0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.5]);
}

#[test]
fn measurements_follow_most_likely_outcome() {
    let mut circuit = Circuit::new(3).unwrap();
    circuit.x(QubitId(0)).unwrap().measure_all().unwrap();

    let result = Executor::with_seed(11).execute(&circuit, 64).unwrap();
    assert_eq!(result.most_likely(), "001");
    assert_eq!(result.measurements(), &[1, 0, 0]);
}

#[test]
fn final_state_matches_probabilities() {
    let circuit = Circuit::qft(3).unwrap();
    let result = Executor::with_seed(3).execute(&circuit, 16).unwrap();
    for (a, p) in result.final_state().iter().zip(result.probabilities()) {
        assert!((a.norm_sqr() - p).abs() < 1e-12);
    }
    // H on every qubit: uniform
    assert_probs(&result, &[0.125; 8]);
}

// ---------------------------------------------------------------------------
// Continuation
// ---------------------------------------------------------------------------

#[test]
fn rerun_in_same_context_is_cumulative() {
    let circuit = Circuit::bell().unwrap();
    let mut exec = Executor::with_seed(9);
    let mut ctx = ExecutionContext::for_circuit(&circuit);

    let first = exec.execute_in(&mut ctx, &circuit, 100).unwrap();
    assert_probs(&first, &[0.5, 0.0, 0.0, 0.5]);

    // H(0) CNOT(0,1) twice spreads the mass evenly
    let second = exec.execute_in(&mut ctx, &circuit, 100).unwrap();
    assert_probs(&second, &[0.25; 4]);

    let fresh = exec.execute(&circuit, 100).unwrap();
    assert_probs(&fresh, &[0.5, 0.0, 0.0, 0.5]);
}

#[test]
fn rerun_of_involution_returns_to_start() {
    let mut circuit = Circuit::new(1).unwrap();
    circuit.x(QubitId(0)).unwrap();
    let mut exec = Executor::with_seed(9);
    let mut ctx = ExecutionContext::for_circuit(&circuit);

    assert_eq!(exec.execute_in(&mut ctx, &circuit, 8).unwrap().most_likely(), "1");
    assert_eq!(exec.execute_in(&mut ctx, &circuit, 8).unwrap().most_likely(), "0");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn zero_shots_is_rejected_before_touching_context() {
    let circuit = Circuit::bell().unwrap();
    let mut ctx = ExecutionContext::for_circuit(&circuit);
    let err = Executor::with_seed(1)
        .execute_in(&mut ctx, &circuit, 0)
        .unwrap_err();
    assert!(matches!(err, SimError::InvalidShotCount(0)));
    assert_eq!(ctx, ExecutionContext::for_circuit(&circuit));
}

#[test]
fn mismatched_context_is_rejected() {
    let circuit = Circuit::bell().unwrap();
    let mut ctx = ExecutionContext::new(3, 3);
    let err = Executor::with_seed(1)
        .execute_in(&mut ctx, &circuit, 10)
        .unwrap_err();
    assert!(matches!(
        err,
        SimError::ContextMismatch {
            context_qubits: 3,
            circuit_qubits: 2,
            ..
        }
    ));
}

#[test]
fn circuit_wider_than_config_limit() {
    let mut exec = Executor::new(SimulatorConfig {
        seed: Some(1),
        max_qubits: 2,
        ..SimulatorConfig::default()
    });
    let err = exec.execute(&Circuit::ghz(3).unwrap(), 10).unwrap_err();
    assert!(matches!(err, SimError::CircuitTooLarge { qubits: 3, max: 2 }));
}

#[test]
fn out_of_range_gate_never_reaches_executor() {
    let mut circuit = Circuit::new(2).unwrap();
    let err = circuit.h(QubitId(2)).unwrap_err();
    assert!(matches!(err, IrError::GateIndexOutOfRange { index: 2, .. }));
    assert!(circuit.is_empty());
}

// ---------------------------------------------------------------------------
// Entangler semantics
// ---------------------------------------------------------------------------

/// H(0) H(1) CZ(0,1) H(1): a CNOT in disguise under textbook semantics.
fn cz_sandwich() -> Circuit {
    let mut circuit = Circuit::new(2).unwrap();
    circuit
        .h(QubitId(0))
        .unwrap()
        .h(QubitId(1))
        .unwrap()
        .cz(QubitId(0), QubitId(1))
        .unwrap()
        .h(QubitId(1))
        .unwrap()
        .measure_all()
        .unwrap();
    circuit
}

#[test]
fn cz_sandwich_under_standard_semantics_is_bell() {
    let result = standard_executor(5).execute(&cz_sandwich(), 1_000).unwrap();
    assert_probs(&result, &[0.5, 0.0, 0.0, 0.5]);
}

#[test]
fn cz_sandwich_under_controlled_flip_leaves_q1_zero() {
    let result = Executor::with_seed(5).execute(&cz_sandwich(), 1_000).unwrap();
    assert_probs(&result, &[0.5, 0.5, 0.0, 0.0]);
    assert_eq!(result.count("10") + result.count("11"), 0);
}

#[test]
fn standard_swap_moves_excitation() {
    let mut circuit = Circuit::new(2).unwrap();
    circuit
        .x(QubitId(0))
        .unwrap()
        .swap(QubitId(0), QubitId(1))
        .unwrap()
        .measure_all()
        .unwrap();

    let std_result = standard_executor(1).execute(&circuit, 10).unwrap();
    assert_eq!(std_result.most_likely(), "10");
    assert_eq!(std_result.measurements(), &[0, 1]);

    let legacy = Executor::with_seed(1).execute(&circuit, 10).unwrap();
    assert_eq!(legacy.most_likely(), "11");
}

// ---------------------------------------------------------------------------
// Deserialized circuits
// ---------------------------------------------------------------------------

#[test]
fn malformed_json_circuit_never_reaches_executor() {
    let json = r#"{"name":"bad","num_qubits":2,"num_clbits":2,
        "gates":[{"kind":"CNOT","qubits":[0]}]}"#;
    assert!(serde_json::from_str::<Circuit>(json).is_err());

    let json = serde_json::to_string(&Circuit::bell().unwrap()).unwrap();
    let circuit: Circuit = serde_json::from_str(&json).unwrap();
    let result = Executor::with_seed(4).execute(&circuit, 100).unwrap();
    assert_eq!(result.count("01") + result.count("10"), 0);
}
