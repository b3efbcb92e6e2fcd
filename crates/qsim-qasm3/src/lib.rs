//! `OpenQASM` 3 Exporter and Parser for qsim
//!
//! [`emit`] writes a [`qsim_ir::Circuit`] as `OpenQASM` 3 text and [`parse`]
//! reads the same subset back.
//!
//! # Exported Mnemonics
//!
//! | Gate | Mnemonic |
//! |------|----------|
//! | `H`, `X`, `Y`, `Z` | `h`, `x`, `y`, `z` |
//! | `CNOT`, `CZ` | `cx`, `cz` |
//! | `Rx`, `Ry`, `Rz` | `rx(θ)`, `ry(θ)`, `rz(θ)` |
//! | `Measure` | `c[k] = measure q[i];` |
//!
//! Other gate kinds are skipped by the exporter. The parser also accepts
//! `s`, `t`, `sdg`, `tdg`, `swap`, `ccx`, `cswap`, `u`/`u3`, `u1`/`p` and
//! `u2`.
//!
//! # Example: Round-Trip
//!
//! ```rust
//! use qsim_ir::Circuit;
//! use qsim_qasm3::{emit, parse};
//!
//! let circuit = Circuit::bell().unwrap();
//! let qasm = emit(&circuit);
//! assert!(qasm.starts_with("OPENQASM 3.0;\n// circuit: bell\n"));
//! assert!(qasm.contains("cx q[0], q[1];"));
//!
//! let reparsed = parse(&qasm).unwrap();
//! assert_eq!(reparsed, circuit);
//! ```
//!
//! # Example: Parsing
//!
//! ```rust
//! use qsim_qasm3::parse;
//!
//! let qasm = r#"
//!     OPENQASM 3.0;
//!     include "stdgates.inc";
//!     qubit[3] q;
//!     bit[3] c;
//!     h q[0];
//!     rz(-pi/4) q[1];
//!     cx q[0], q[2];
//!     c = measure q;
//! "#;
//!
//! let circuit = parse(qasm).unwrap();
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.stats().count("measure"), 3);
//! ```

mod ast;
mod emitter;
mod error;
mod lexer;
mod parser;

pub use emitter::{emit, format_angle, mnemonic};
pub use error::{ParseError, ParseResult};
pub use parser::{parse, parse_program};

/// Syntax tree types returned by [`parse_program`].
pub mod syntax {
    pub use crate::ast::*;
}
