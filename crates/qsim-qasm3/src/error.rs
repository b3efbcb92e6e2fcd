//! Error types for the QASM3 parser.

use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Lexer error at line {line}, position {position}: {message}")]
    LexerError {
        line: usize,
        position: usize,
        message: String,
    },

    /// Unexpected token.
    #[error("Unexpected token at line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: usize,
        expected: String,
        found: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input: {0}")]
    UnexpectedEof(String),

    /// Unsupported version.
    #[error("Invalid OPENQASM version: {0}")]
    InvalidVersion(String),

    /// Register or constant that was never declared.
    #[error("Undefined identifier: {0}")]
    UndefinedIdentifier(String),

    /// Register declared twice.
    #[error("Duplicate declaration: {0}")]
    DuplicateDeclaration(String),

    /// Gate outside the supported set.
    #[error("Unknown gate: {0}")]
    UnknownGate(String),

    /// Wrong number of operands.
    #[error("Gate '{gate}' expects {expected} qubits, got {got}")]
    WrongQubitCount {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// Wrong number of parameters.
    #[error("Gate '{gate}' expects {expected} parameters, got {got}")]
    WrongParameterCount {
        gate: String,
        expected: usize,
        got: usize,
    },

    /// An angle evaluated to NaN or infinity.
    #[error("Gate '{gate}' has a non-finite parameter")]
    NonFiniteParameter { gate: String },

    /// Index out of bounds.
    #[error("Index {index} out of bounds for register '{register}' of size {size}")]
    IndexOutOfBounds {
        register: String,
        index: u64,
        size: u64,
    },

    /// IR error during circuit construction.
    #[error("Circuit error: {0}")]
    Circuit(#[from] qsim_ir::IrError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
