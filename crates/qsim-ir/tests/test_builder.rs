//! Builder and statistics properties.

use proptest::prelude::*;
use qsim_ir::{Circuit, IrError, QubitId};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// (kind selector, a, b) with indices possibly outside a 4-qubit register.
fn arb_op() -> impl Strategy<Value = (u8, u32, u32)> {
    (0_u8..5, 0_u32..6, 0_u32..6)
}

fn apply(circuit: &mut Circuit, (kind, a, b): (u8, u32, u32)) -> Result<(), IrError> {
    match kind {
        0 => circuit.h(QubitId(a)),
        1 => circuit.x(QubitId(a)),
        2 => circuit.rz(0.25, QubitId(a)),
        3 => circuit.cnot(QubitId(a), QubitId(b)),
        _ => circuit.swap(QubitId(a), QubitId(b)),
    }
    .map(|_| ())
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// A rejected gate never changes the gate list.
    #[test]
    fn rejected_gates_leave_circuit_unchanged(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut circuit = Circuit::new(4).unwrap();
        for op in ops {
            let before = circuit.gates().to_vec();
            if apply(&mut circuit, op).is_err() {
                prop_assert_eq!(circuit.gates(), before.as_slice());
            } else {
                prop_assert_eq!(circuit.len(), before.len() + 1);
            }
        }
    }

    /// Per-kind counts add up to the gate count and depth never exceeds it.
    #[test]
    fn stats_are_consistent(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut circuit = Circuit::new(4).unwrap();
        for op in ops {
            let _ = apply(&mut circuit, op);
        }
        let stats = circuit.stats();
        let summed: usize = stats.sorted_kinds().iter().map(|(_, n)| n).sum();
        prop_assert_eq!(summed, stats.gate_count);
        prop_assert_eq!(stats.gate_count, circuit.len());
        prop_assert!(stats.depth <= stats.gate_count);
        prop_assert_eq!(stats.depth == 0, circuit.is_empty());
    }

    /// Every valid GHZ width builds with one H, n-1 CNOTs and n measurements.
    #[test]
    fn ghz_shape(n in 1_u32..=12) {
        let circuit = Circuit::ghz(n).unwrap();
        let stats = circuit.stats();
        prop_assert_eq!(stats.count("h"), 1);
        prop_assert_eq!(stats.count("cnot") as u32, n - 1);
        prop_assert_eq!(stats.count("measure") as u32, n);
    }
}

#[test]
fn test_reset_clears_gates_keeps_registers() {
    let mut circuit = Circuit::bell().unwrap();
    circuit.reset();
    assert!(circuit.is_empty());
    assert_eq!(circuit.num_qubits(), 2);
    assert_eq!(circuit.num_clbits(), 2);
    assert_eq!(circuit.depth(), 0);
}
