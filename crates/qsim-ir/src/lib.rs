//! qsim Circuit Representation
//!
//! This crate provides the circuit data structures and the gate library
//! shared by the whole qsim stack: the statevector engine in `qsim-sim`
//! and the textual exporter in `qsim-qasm3` both walk the same
//! [`Circuit`] gate list.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`]
//! - **Gates**: [`GateKind`] (every supported kind, angles inline) and [`Gate`]
//!   (a kind placed on operands)
//! - **Gate library**: [`GateKind::matrix`] returning a [`Matrix2`]
//! - **Circuit**: [`Circuit`] fluent builder, presets, and [`CircuitStats`]
//!
//! Amplitudes are [`Complex64`] values from `num-complex`.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qsim_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2).unwrap();
//!
//! // |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cnot(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.stats().gate_count, 4);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 | Phase gates |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `U`, `U1`, `U2`, `U3` | 1 | Universal single-qubit gates |
//! | `CNOT`, `CZ`, `Swap` | 2 | Two-qubit gates |
//! | `Toffoli`, `Fredkin` | 3 | Three-qubit gates |
//! | `Measure` | 1 | Measurement into a classical bit |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod matrix;
pub mod presets;
pub mod qubit;
pub mod stats;

pub use circuit::{Circuit, MAX_CLBITS, MAX_QUBITS};
pub use error::{IrError, IrResult, RegisterKind};
pub use gate::{Gate, GateKind};
pub use matrix::Matrix2;
pub use num_complex::Complex64;
pub use presets::Preset;
pub use qubit::{ClbitId, QubitId};
pub use stats::CircuitStats;
