//! Quantum gate types.

use serde::{Deserialize, Serialize};

use crate::qubit::{ClbitId, QubitId};

/// Every gate the simulator knows about.
///
/// Rotation angles are carried inline, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    // Pauli and Clifford gates
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
    /// S-dagger gate.
    Sdg,
    /// T-dagger gate.
    Tdg,

    // Rotation gates
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),

    // Universal gates
    /// Universal single-qubit gate U(θ, φ, λ).
    U(f64, f64, f64),
    /// U1(λ), a pure phase.
    U1(f64),
    /// U2(φ, λ) = U(π/2, φ, λ).
    U2(f64, f64),
    /// U3(θ, φ, λ), identical to `U`.
    U3(f64, f64, f64),

    // Two-qubit gates
    /// Controlled-NOT gate, operands `(control, target)`.
    CNOT,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,

    // Three-qubit gates
    /// Toffoli gate, operands `(c1, c2, target)`.
    Toffoli,
    /// Fredkin (controlled swap) gate.
    Fredkin,

    /// Measurement into a classical bit.
    Measure,
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::T => "t",
            GateKind::Sdg => "sdg",
            GateKind::Tdg => "tdg",
            GateKind::Rx(_) => "rx",
            GateKind::Ry(_) => "ry",
            GateKind::Rz(_) => "rz",
            GateKind::U(..) => "u",
            GateKind::U1(_) => "u1",
            GateKind::U2(..) => "u2",
            GateKind::U3(..) => "u3",
            GateKind::CNOT => "cnot",
            GateKind::CZ => "cz",
            GateKind::Swap => "swap",
            GateKind::Toffoli => "toffoli",
            GateKind::Fredkin => "fredkin",
            GateKind::Measure => "measure",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        match self {
            GateKind::CNOT | GateKind::CZ | GateKind::Swap => 2,
            GateKind::Toffoli | GateKind::Fredkin => 3,
            _ => 1,
        }
    }

    /// Whether this is a measurement rather than a unitary.
    #[inline]
    pub fn is_measurement(&self) -> bool {
        matches!(self, GateKind::Measure)
    }

    /// Get the rotation angles of this gate, in declaration order.
    pub fn parameters(&self) -> Vec<f64> {
        match *self {
            GateKind::Rx(t) | GateKind::Ry(t) | GateKind::Rz(t) | GateKind::U1(t) => vec![t],
            GateKind::U2(phi, lambda) => vec![phi, lambda],
            GateKind::U(t, phi, lambda) | GateKind::U3(t, phi, lambda) => vec![t, phi, lambda],
            _ => vec![],
        }
    }
}

/// A gate placed on concrete operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// Qubits the gate acts on: 1 to 3 entries, controls first.
    pub qubits: Vec<QubitId>,
    /// Classical bit written by a measurement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clbit: Option<ClbitId>,
}

impl Gate {
    /// Create a unitary gate instruction.
    pub fn new(kind: GateKind, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind,
            qubits: qubits.into_iter().collect(),
            clbit: None,
        }
    }

    /// Create a measurement of `qubit` into `clbit`.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Self {
            kind: GateKind::Measure,
            qubits: vec![qubit],
            clbit: Some(clbit),
        }
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Get the rotation angles of this gate.
    pub fn parameters(&self) -> Vec<f64> {
        self.kind.parameters()
    }
}
