//! Error types for the IR crate.

use thiserror::Error;

/// Which register an out-of-range index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterKind {
    /// The qubit register.
    Quantum,
    /// The classical bit register.
    Classical,
}

impl std::fmt::Display for RegisterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterKind::Quantum => write!(f, "qubit"),
            RegisterKind::Classical => write!(f, "classical bit"),
        }
    }
}

/// Errors that can occur while building circuits or looking up gates.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate referenced a qubit or classical bit outside the declared register.
    #[error("Gate '{gate}' references {register} {index} but the register only has {size}")]
    GateIndexOutOfRange {
        /// Name of the gate being added.
        gate: &'static str,
        /// The offending index.
        index: u32,
        /// Declared register size.
        size: u32,
        /// Register the index belongs to.
        register: RegisterKind,
    },

    /// The same qubit appears twice in one multi-qubit gate.
    #[error("Duplicate qubit {qubit} in gate '{gate}'")]
    DuplicateQubit {
        /// Name of the gate being added.
        gate: &'static str,
        /// The repeated qubit index.
        qubit: u32,
    },

    /// Gate was given the wrong number of qubits.
    #[error("Gate '{gate}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate: &'static str,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// A measurement was pushed without a classical target.
    #[error("Measurement of qubit {qubit} has no classical target")]
    MissingClbit {
        /// The measured qubit.
        qubit: u32,
    },

    /// The gate kind has no single-qubit matrix.
    #[error("Gate '{0}' has no 2x2 matrix")]
    UnsupportedGateKind(&'static str),

    /// Requested register exceeds its memory ceiling.
    #[error("Circuit requests {requested} {register}s, at most {max} are supported")]
    RegisterTooLarge {
        /// Requested register size.
        requested: u32,
        /// Supported maximum.
        max: u32,
        /// Register that was too large.
        register: RegisterKind,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
