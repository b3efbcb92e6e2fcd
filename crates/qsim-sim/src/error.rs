//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced while executing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// `shots` must be at least 1.
    #[error("shots must be at least 1, got {0}")]
    InvalidShotCount(u32),

    /// Circuit is wider than the configured simulator limit.
    #[error("Circuit has {qubits} qubits but the simulator is limited to {max}")]
    CircuitTooLarge {
        /// Width of the circuit.
        qubits: u32,
        /// Configured `max_qubits`.
        max: u32,
    },

    /// A continuation context does not match the circuit's registers.
    #[error(
        "Execution context holds {context_qubits} qubits / {context_clbits} bits, \
         circuit needs {circuit_qubits} / {circuit_clbits}"
    )]
    ContextMismatch {
        /// Qubits held by the context.
        context_qubits: u32,
        /// Classical bits held by the context.
        context_clbits: u32,
        /// Qubits declared by the circuit.
        circuit_qubits: u32,
        /// Classical bits declared by the circuit.
        circuit_clbits: u32,
    },

    /// Circuit IR error, including unsupported gate lookups.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qsim_ir::IrError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
