//! QASM3 emitter for serializing circuits.

use qsim_ir::{Circuit, Gate, GateKind};

/// Emit a circuit as QASM3 source code.
///
/// Only gates with a mnemonic (see [`mnemonic`]) are written; every other
/// kind is left out of the output.
pub fn emit(circuit: &Circuit) -> String {
    let mut emitter = Emitter::new();
    emitter.emit_circuit(circuit);
    emitter.output
}

/// The QASM3 mnemonic for `kind`, if the exporter writes it.
pub fn mnemonic(kind: &GateKind) -> Option<&'static str> {
    match kind {
        GateKind::H => Some("h"),
        GateKind::X => Some("x"),
        GateKind::Y => Some("y"),
        GateKind::Z => Some("z"),
        GateKind::CNOT => Some("cx"),
        GateKind::CZ => Some("cz"),
        GateKind::Rx(_) => Some("rx"),
        GateKind::Ry(_) => Some("ry"),
        GateKind::Rz(_) => Some("rz"),
        GateKind::Measure => Some("measure"),
        GateKind::S
        | GateKind::T
        | GateKind::Sdg
        | GateKind::Tdg
        | GateKind::U(..)
        | GateKind::U1(_)
        | GateKind::U2(..)
        | GateKind::U3(..)
        | GateKind::Swap
        | GateKind::Toffoli
        | GateKind::Fredkin => None,
    }
}

/// Format an angle, using `pi` fractions where they match within 1e-10.
pub fn format_angle(v: f64) -> String {
    let pi = std::f64::consts::PI;
    if (v - pi).abs() < 1e-10 {
        "pi".into()
    } else if (v - pi / 2.0).abs() < 1e-10 {
        "pi/2".into()
    } else if (v - pi / 4.0).abs() < 1e-10 {
        "pi/4".into()
    } else if (v + pi / 2.0).abs() < 1e-10 {
        "-pi/2".into()
    } else if (v + pi / 4.0).abs() < 1e-10 {
        "-pi/4".into()
    } else {
        format!("{v:.6}")
    }
}

struct Emitter {
    output: String,
}

impl Emitter {
    fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) {
        self.writeln("OPENQASM 3.0;");
        // Names are single-line in the comment
        let name = circuit.name().replace(['\r', '\n'], " ");
        self.writeln(&format!("// circuit: {name}"));
        self.writeln(&format!("qubit[{}] q;", circuit.num_qubits()));
        self.writeln(&format!("bit[{}] c;", circuit.num_clbits()));

        for gate in circuit.gates() {
            self.emit_gate(gate);
        }
    }

    fn emit_gate(&mut self, gate: &Gate) {
        let Some(name) = mnemonic(&gate.kind) else {
            return;
        };

        if let (GateKind::Measure, Some(clbit)) = (gate.kind, gate.clbit) {
            self.writeln(&format!("c[{}] = measure q[{}];", clbit.0, gate.qubits[0].0));
            return;
        }

        let qubits = gate
            .qubits
            .iter()
            .map(|q| format!("q[{}]", q.0))
            .collect::<Vec<_>>()
            .join(", ");
        let params = gate.parameters();

        if params.is_empty() {
            self.writeln(&format!("{name} {qubits};"));
        } else {
            let params = params
                .iter()
                .map(|&p| format_angle(p))
                .collect::<Vec<_>>()
                .join(", ");
            self.writeln(&format!("{name}({params}) {qubits};"));
        }
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}
