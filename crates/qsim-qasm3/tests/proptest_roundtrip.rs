//! Property-based tests for the exporter and parser.

use proptest::prelude::*;
use qsim_ir::{Circuit, ClbitId, QubitId};
use qsim_qasm3::{emit, mnemonic, parse};

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    Y(u32),
    Z(u32),
    S(u32),
    T(u32),
    Rx(f64, u32),
    Ry(f64, u32),
    Rz(f64, u32),
    U3(f64, f64, f64, u32),
    Cnot(u32, u32),
    Cz(u32, u32),
    Swap(u32, u32),
    Toffoli(u32, u32, u32),
    Measure(u32, u32),
}

impl GateOp {
    fn apply(self, circuit: &mut Circuit) {
        // Invalid operand combinations are rejected by the builder and skipped.
        let _ = match self {
            GateOp::H(q) => circuit.h(QubitId(q)),
            GateOp::X(q) => circuit.x(QubitId(q)),
            GateOp::Y(q) => circuit.y(QubitId(q)),
            GateOp::Z(q) => circuit.z(QubitId(q)),
            GateOp::S(q) => circuit.s(QubitId(q)),
            GateOp::T(q) => circuit.t(QubitId(q)),
            GateOp::Rx(a, q) => circuit.rx(a, QubitId(q)),
            GateOp::Ry(a, q) => circuit.ry(a, QubitId(q)),
            GateOp::Rz(a, q) => circuit.rz(a, QubitId(q)),
            GateOp::U3(a, b, c, q) => circuit.u3(a, b, c, QubitId(q)),
            GateOp::Cnot(c, t) => circuit.cnot(QubitId(c), QubitId(t)),
            GateOp::Cz(c, t) => circuit.cz(QubitId(c), QubitId(t)),
            GateOp::Swap(a, b) => circuit.swap(QubitId(a), QubitId(b)),
            GateOp::Toffoli(a, b, c) => circuit.toffoli(QubitId(a), QubitId(b), QubitId(c)),
            GateOp::Measure(q, c) => circuit.measure(QubitId(q), ClbitId(c)),
        };
    }
}

fn arb_gate_op(n: u32) -> impl Strategy<Value = GateOp> {
    let q = 0..n;
    let angle = -6.3..6.3_f64;
    prop_oneof![
        q.clone().prop_map(GateOp::H),
        q.clone().prop_map(GateOp::X),
        q.clone().prop_map(GateOp::Y),
        q.clone().prop_map(GateOp::Z),
        q.clone().prop_map(GateOp::S),
        q.clone().prop_map(GateOp::T),
        (angle.clone(), q.clone()).prop_map(|(a, q)| GateOp::Rx(a, q)),
        (angle.clone(), q.clone()).prop_map(|(a, q)| GateOp::Ry(a, q)),
        (angle.clone(), q.clone()).prop_map(|(a, q)| GateOp::Rz(a, q)),
        (angle.clone(), angle.clone(), angle, q.clone())
            .prop_map(|(a, b, c, q)| GateOp::U3(a, b, c, q)),
        (q.clone(), q.clone()).prop_map(|(c, t)| GateOp::Cnot(c, t)),
        (q.clone(), q.clone()).prop_map(|(c, t)| GateOp::Cz(c, t)),
        (q.clone(), q.clone()).prop_map(|(a, b)| GateOp::Swap(a, b)),
        (q.clone(), q.clone(), q.clone()).prop_map(|(a, b, c)| GateOp::Toffoli(a, b, c)),
        (q.clone(), q).prop_map(|(q, c)| GateOp::Measure(q, c)),
    ]
}

/// Random circuit on 1-6 qubits mixing exported and non-exported kinds.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=6).prop_flat_map(|n| {
        prop::collection::vec(arb_gate_op(n), 0..=24).prop_map(move |ops| {
            let mut circuit = Circuit::with_size("prop", n, n).unwrap();
            for op in ops {
                op.apply(&mut circuit);
            }
            circuit
        })
    })
}

/// Header lines before the first gate statement.
const HEADER_LINES: usize = 4;

proptest! {
    /// Gate statements in the export equal the number of exportable gates.
    #[test]
    fn export_line_count_matches_stats(circuit in arb_circuit()) {
        let qasm = emit(&circuit);
        let stats = circuit.stats();

        let exportable: usize = circuit
            .gates()
            .iter()
            .filter(|g| mnemonic(&g.kind).is_some())
            .map(|g| g.name())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .map(|name| stats.count(name))
            .sum();

        prop_assert_eq!(qasm.lines().count() - HEADER_LINES, exportable);
    }

    /// Parsing the export keeps registers and every exported gate.
    #[test]
    fn emit_then_parse_preserves_exported_gates(circuit in arb_circuit()) {
        let parsed = parse(&emit(&circuit)).expect("exported text must parse");

        prop_assert_eq!(parsed.name(), circuit.name());
        prop_assert_eq!(parsed.num_qubits(), circuit.num_qubits());
        prop_assert_eq!(parsed.num_clbits(), circuit.num_clbits());

        let kept: Vec<_> = circuit
            .gates()
            .iter()
            .filter(|g| mnemonic(&g.kind).is_some())
            .collect();
        prop_assert_eq!(parsed.len(), kept.len());

        for (a, b) in parsed.gates().iter().zip(kept) {
            prop_assert_eq!(a.name(), b.name());
            prop_assert_eq!(&a.qubits, &b.qubits);
            prop_assert_eq!(a.clbit, b.clbit);
            for (x, y) in a.parameters().iter().zip(b.parameters()) {
                // six printed decimals
                prop_assert!((x - y).abs() < 1e-6, "{} vs {}", x, y);
            }
        }
    }

    /// Emitting is deterministic.
    #[test]
    fn emit_is_deterministic(circuit in arb_circuit()) {
        prop_assert_eq!(emit(&circuit), emit(&circuit));
    }

    /// Empty circuits round-trip their register sizes.
    #[test]
    fn empty_circuit_roundtrip(num_qubits in 0_u32..=10, num_clbits in 0_u32..=10) {
        let circuit = Circuit::with_size("empty", num_qubits, num_clbits).unwrap();
        let parsed = parse(&emit(&circuit)).unwrap();
        prop_assert_eq!(parsed, circuit);
    }
}
