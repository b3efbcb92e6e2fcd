//! Gate dispatch onto the statevector kernels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use qsim_ir::{Gate, GateKind, IrError, QubitId, RegisterKind};

use crate::error::SimResult;
use crate::statevector::Statevector;

/// How the entangling kinds act on the state.
///
/// CNOT and Toffoli behave the same under both; the modes differ for CZ,
/// SWAP and Fredkin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntanglerSemantics {
    /// Every two-qubit kind is a controlled bit-flip on its second operand,
    /// every three-qubit kind a doubly-controlled flip on its third.
    #[default]
    ControlledFlip,
    /// CZ flips the phase of |11⟩, SWAP exchanges, Fredkin is a controlled swap.
    Standard,
}

impl EntanglerSemantics {
    /// Name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            EntanglerSemantics::ControlledFlip => "controlled-flip",
            EntanglerSemantics::Standard => "standard",
        }
    }
}

impl fmt::Display for EntanglerSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntanglerSemantics {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "controlled-flip" => Ok(EntanglerSemantics::ControlledFlip),
            "standard" => Ok(EntanglerSemantics::Standard),
            other => Err(format!(
                "unknown semantics '{other}' (expected 'controlled-flip' or 'standard')"
            )),
        }
    }
}

/// Apply one gate to `state`. Measurements are a no-op here.
pub fn apply_gate(
    state: &mut Statevector,
    gate: &Gate,
    semantics: EntanglerSemantics,
) -> SimResult<()> {
    let q = operands(state, gate)?;
    trace!(gate = gate.name(), qubits = ?q, "apply");

    match gate.kind {
        GateKind::H
        | GateKind::X
        | GateKind::Y
        | GateKind::Z
        | GateKind::S
        | GateKind::T
        | GateKind::Sdg
        | GateKind::Tdg
        | GateKind::Rx(_)
        | GateKind::Ry(_)
        | GateKind::Rz(_)
        | GateKind::U(..)
        | GateKind::U1(_)
        | GateKind::U2(..)
        | GateKind::U3(..) => {
            let m = gate.kind.matrix()?;
            state.apply_matrix(&m, q[0]);
        }
        GateKind::CNOT => state.apply_controlled_flip(q[0], q[1]),
        GateKind::CZ => match semantics {
            EntanglerSemantics::ControlledFlip => state.apply_controlled_flip(q[0], q[1]),
            EntanglerSemantics::Standard => state.apply_cz(q[0], q[1]),
        },
        GateKind::Swap => match semantics {
            EntanglerSemantics::ControlledFlip => state.apply_controlled_flip(q[0], q[1]),
            EntanglerSemantics::Standard => state.apply_swap(q[0], q[1]),
        },
        GateKind::Toffoli => state.apply_doubly_controlled_flip(q[0], q[1], q[2]),
        GateKind::Fredkin => match semantics {
            EntanglerSemantics::ControlledFlip => {
                state.apply_doubly_controlled_flip(q[0], q[1], q[2]);
            }
            EntanglerSemantics::Standard => state.apply_cswap(q[0], q[1], q[2]),
        },
        GateKind::Measure => {}
    }
    Ok(())
}

/// Qubit indices of `gate`, checked against the state width.
fn operands(state: &Statevector, gate: &Gate) -> SimResult<Vec<usize>> {
    let width = state.num_qubits();
    gate.qubits
        .iter()
        .map(|&QubitId(index)| {
            let i = index as usize;
            if i < width {
                Ok(i)
            } else {
                Err(IrError::GateIndexOutOfRange {
                    gate: gate.name(),
                    index,
                    size: width as u32,
                    register: RegisterKind::Quantum,
                }
                .into())
            }
        })
        .collect()
}
