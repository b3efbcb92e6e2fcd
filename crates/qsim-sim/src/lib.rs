//! qsim Statevector Executor
//!
//! This crate runs [`qsim_ir::Circuit`]s on a dense statevector and samples
//! measurement outcomes. Results are exact up to floating-point rounding
//! and limited to [`qsim_ir::MAX_QUBITS`] qubits.
//!
//! # Features
//!
//! - **Gate replay**: strided 2x2 kernels for single-qubit gates, bit-flip
//!   kernels for the entangling kinds
//! - **Selectable semantics**: [`EntanglerSemantics`] switches CZ, SWAP and
//!   Fredkin between the controlled-flip and textbook forms
//! - **Shot sampling**: seeded [`Executor`] with first-seen tie-breaking
//! - **Continuation**: [`Executor::execute_in`] applies a circuit on top of
//!   an existing [`ExecutionContext`]
//!
//! # Memory
//!
//! | Qubits | Statevector |
//! |--------|-------------|
//! | 10 | 16 KiB |
//! | 16 | 1 MiB |
//! | 20 | 16 MiB |
//! | 24 | 256 MiB |
//!
//! # Example
//!
//! ```rust
//! use qsim_ir::Circuit;
//! use qsim_sim::Executor;
//!
//! let circuit = Circuit::bell().unwrap();
//! let mut executor = Executor::with_seed(42);
//! let result = executor.execute(&circuit, 1000).unwrap();
//!
//! // Expect ~50% |00⟩ and ~50% |11⟩
//! assert_eq!(result.count("01") + result.count("10"), 0);
//! assert_eq!(result.count("00") + result.count("11"), 1000);
//! ```

pub mod applicator;
pub mod config;
pub mod context;
pub mod error;
pub mod executor;
pub mod result;
pub mod sampler;
pub mod statevector;

pub use applicator::{EntanglerSemantics, apply_gate};
pub use config::{ConfigError, SimulatorConfig};
pub use context::ExecutionContext;
pub use error::{SimError, SimResult};
pub use executor::Executor;
pub use result::CircuitResult;
pub use statevector::Statevector;
