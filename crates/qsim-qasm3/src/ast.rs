//! Syntax tree for the supported `OpenQASM` 3 subset.
//!
//! Parameter expressions are folded to numbers while parsing, so gate
//! calls carry plain `f64` angles.

/// A parsed program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// QASM version, e.g. "3.0".
    pub version: String,
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// A statement in the supported subset.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `include "file";` (recorded, not followed)
    Include(String),

    /// `qubit[n] name;` or `qubit name;`
    QubitDecl { name: String, size: u64 },

    /// `bit[n] name;` or `bit name;`
    BitDecl { name: String, size: u64 },

    /// Gate application.
    Gate(GateCall),

    /// `c[k] = measure q[i];`, `c = measure q;` or `measure q -> c;`
    Measure {
        bits: Operand,
        qubits: Operand,
        line: usize,
    },
}

/// A gate call.
#[derive(Debug, Clone, PartialEq)]
pub struct GateCall {
    /// Gate mnemonic as written.
    pub name: String,
    /// Evaluated parameters.
    pub params: Vec<f64>,
    /// Operands in order.
    pub operands: Vec<Operand>,
    /// Source line of the mnemonic.
    pub line: usize,
}

/// A register reference: the whole register or one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub register: String,
    pub index: Option<u64>,
}
