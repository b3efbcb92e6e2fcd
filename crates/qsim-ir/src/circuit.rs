//! High-level circuit builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult, RegisterKind};
use crate::gate::{Gate, GateKind};
use crate::qubit::{ClbitId, QubitId};
use crate::stats::CircuitStats;

/// Largest register the statevector engine will allocate (2^24 amplitudes, 256 MiB).
pub const MAX_QUBITS: u32 = 24;

/// Largest classical register. Stats and execution allocate one slot per bit.
pub const MAX_CLBITS: u32 = 1 << 16;

/// A quantum circuit.
///
/// Register sizes are fixed at construction. Gates are appended in order
/// and only [`Circuit::reset`] removes them. The circuit carries no
/// simulation state; amplitudes live in the simulator's execution context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircuit")]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Number of classical bits.
    num_clbits: u32,
    /// Gates in application order.
    gates: Vec<Gate>,
}

/// Unchecked wire form of [`Circuit`].
#[derive(Deserialize)]
struct RawCircuit {
    name: String,
    num_qubits: u32,
    num_clbits: u32,
    #[serde(default)]
    gates: Vec<Gate>,
}

impl TryFrom<RawCircuit> for Circuit {
    type Error = IrError;

    /// Rebuild through the builder so deserialized gates are checked too.
    fn try_from(raw: RawCircuit) -> IrResult<Self> {
        let mut circuit = Circuit::with_size(raw.name, raw.num_qubits, raw.num_clbits)?;
        for gate in raw.gates {
            circuit.push(gate)?;
        }
        Ok(circuit)
    }
}

impl Circuit {
    /// Create a circuit with one classical bit per qubit.
    pub fn new(num_qubits: u32) -> IrResult<Self> {
        Self::with_size("circuit", num_qubits, num_qubits)
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> IrResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(IrError::RegisterTooLarge {
                requested: num_qubits,
                max: MAX_QUBITS,
                register: RegisterKind::Quantum,
            });
        }
        if num_clbits > MAX_CLBITS {
            return Err(IrError::RegisterTooLarge {
                requested: num_clbits,
                max: MAX_CLBITS,
                register: RegisterKind::Classical,
            });
        }
        Ok(Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            gates: vec![],
        })
    }

    /// Append a gate after checking its operands.
    ///
    /// On error the gate list is left untouched.
    pub fn push(&mut self, gate: Gate) -> IrResult<&mut Self> {
        self.validate(&gate)?;
        self.gates.push(gate);
        Ok(self)
    }

    fn validate(&self, gate: &Gate) -> IrResult<()> {
        let name = gate.name();
        let expected = gate.kind.num_qubits();
        if gate.qubits.len() != expected {
            return Err(IrError::QubitCountMismatch {
                gate: name,
                expected,
                got: gate.qubits.len(),
            });
        }

        for (i, q) in gate.qubits.iter().enumerate() {
            if q.0 >= self.num_qubits {
                return Err(IrError::GateIndexOutOfRange {
                    gate: name,
                    index: q.0,
                    size: self.num_qubits,
                    register: RegisterKind::Quantum,
                });
            }
            if gate.qubits[..i].contains(q) {
                return Err(IrError::DuplicateQubit {
                    gate: name,
                    qubit: q.0,
                });
            }
        }

        if gate.kind.is_measurement() {
            let clbit = gate.clbit.ok_or(IrError::MissingClbit {
                qubit: gate.qubits[0].0,
            })?;
            if clbit.0 >= self.num_clbits {
                return Err(IrError::GateIndexOutOfRange {
                    gate: name,
                    index: clbit.0,
                    size: self.num_clbits,
                    register: RegisterKind::Classical,
                });
            }
        }
        Ok(())
    }

    fn single(&mut self, kind: GateKind, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::new(kind, [qubit]))
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::H, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::X, qubit)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Y, qubit)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Z, qubit)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::S, qubit)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::T, qubit)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Sdg, qubit)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Tdg, qubit)
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Rx(theta), qubit)
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Ry(theta), qubit)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::Rz(theta), qubit)
    }

    /// Apply universal U gate.
    pub fn u(&mut self, theta: f64, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::U(theta, phi, lambda), qubit)
    }

    /// Apply U1 phase gate.
    pub fn u1(&mut self, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::U1(lambda), qubit)
    }

    /// Apply U2 gate.
    pub fn u2(&mut self, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::U2(phi, lambda), qubit)
    }

    /// Apply U3 gate.
    pub fn u3(&mut self, theta: f64, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.single(GateKind::U3(theta, phi, lambda), qubit)
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cnot(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::CNOT, [control, target]))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::CZ, [control, target]))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::Swap, [q1, q2]))
    }

    /// Apply Toffoli gate.
    pub fn toffoli(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::Toffoli, [c1, c2, target]))
    }

    /// Apply Fredkin gate.
    pub fn fredkin(&mut self, control: QubitId, t1: QubitId, t2: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::new(GateKind::Fredkin, [control, t1, t2]))
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.push(Gate::measure(qubit, clbit))
    }

    /// Measure every qubit into the classical bit of the same index.
    ///
    /// Fails without appending anything if there are fewer classical bits
    /// than qubits.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        if self.num_clbits < self.num_qubits {
            return Err(IrError::GateIndexOutOfRange {
                gate: GateKind::Measure.name(),
                index: self.num_clbits,
                size: self.num_clbits,
                register: RegisterKind::Classical,
            });
        }
        for i in 0..self.num_qubits {
            self.gates.push(Gate::measure(QubitId(i), ClbitId(i)));
        }
        Ok(self)
    }

    /// Remove every gate, keeping the register sizes.
    pub fn reset(&mut self) {
        self.gates.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> u32 {
        self.num_clbits
    }

    /// Gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates, measurements included.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Get the circuit depth.
    pub fn depth(&self) -> usize {
        crate::stats::depth(self)
    }

    /// Summary statistics for display.
    pub fn stats(&self) -> CircuitStats {
        CircuitStats::of(self)
    }
}
