//! Lowering from the syntax tree to a [`Circuit`].
//!
//! Registers of each kind are laid out back to back in declaration order,
//! so `qubit[2] a; qubit[2] b;` maps `b[0]` to circuit qubit 2.

use rustc_hash::FxHashMap;

use qsim_ir::{Circuit, ClbitId, Gate, GateKind, QubitId};

use crate::ast::{GateCall, Operand, Program, Statement};
use crate::error::{ParseError, ParseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegisterKind {
    Qubit,
    Bit,
}

#[derive(Debug, Clone, Copy)]
struct Register {
    kind: RegisterKind,
    offset: u64,
    size: u64,
}

#[derive(Default)]
struct Registers {
    by_name: FxHashMap<String, Register>,
    num_qubits: u64,
    num_clbits: u64,
}

impl Registers {
    fn declare(&mut self, name: &str, kind: RegisterKind, size: u64) -> ParseResult<()> {
        if self.by_name.contains_key(name) {
            return Err(ParseError::DuplicateDeclaration(name.to_string()));
        }
        let total = match kind {
            RegisterKind::Qubit => &mut self.num_qubits,
            RegisterKind::Bit => &mut self.num_clbits,
        };
        self.by_name.insert(
            name.to_string(),
            Register {
                kind,
                offset: *total,
                size,
            },
        );
        *total = total.saturating_add(size);
        Ok(())
    }

    /// Flat indices covered by `operand`, after checking its register kind.
    fn resolve(&self, operand: &Operand, kind: RegisterKind) -> ParseResult<Vec<u32>> {
        let reg = self
            .by_name
            .get(&operand.register)
            .filter(|r| r.kind == kind)
            .ok_or_else(|| ParseError::UndefinedIdentifier(operand.register.clone()))?;

        let range = match operand.index {
            Some(index) if index >= reg.size => {
                return Err(ParseError::IndexOutOfBounds {
                    register: operand.register.clone(),
                    index,
                    size: reg.size,
                });
            }
            Some(index) => reg.offset + index..reg.offset + index + 1,
            None => reg.offset..reg.offset + reg.size,
        };
        // Register totals were checked against u32 when the circuit was built.
        Ok(range.map(|i| i as u32).collect())
    }
}

/// Lower a parsed program into a circuit.
pub(crate) fn lower_to_circuit(program: &Program, name: Option<&str>) -> ParseResult<Circuit> {
    let mut registers = Registers::default();
    for stmt in &program.statements {
        match stmt {
            Statement::QubitDecl { name, size } => {
                registers.declare(name, RegisterKind::Qubit, *size)?;
            }
            Statement::BitDecl { name, size } => {
                registers.declare(name, RegisterKind::Bit, *size)?;
            }
            _ => {}
        }
    }

    let num_qubits = u32::try_from(registers.num_qubits).unwrap_or(u32::MAX);
    let num_clbits = u32::try_from(registers.num_clbits).map_err(|_| {
        ParseError::IndexOutOfBounds {
            register: "bit".into(),
            index: registers.num_clbits,
            size: u64::from(u32::MAX),
        }
    })?;
    let mut circuit = Circuit::with_size(name.unwrap_or("circuit"), num_qubits, num_clbits)?;

    for stmt in &program.statements {
        match stmt {
            Statement::Gate(call) => lower_gate(&mut circuit, &registers, call)?,
            Statement::Measure { bits, qubits, .. } => {
                let bits = registers.resolve(bits, RegisterKind::Bit)?;
                let qubits = registers.resolve(qubits, RegisterKind::Qubit)?;
                if bits.len() != qubits.len() {
                    return Err(ParseError::WrongQubitCount {
                        gate: "measure".into(),
                        expected: bits.len(),
                        got: qubits.len(),
                    });
                }
                for (q, c) in qubits.into_iter().zip(bits) {
                    circuit.measure(QubitId(q), ClbitId(c))?;
                }
            }
            Statement::Include(_) | Statement::QubitDecl { .. } | Statement::BitDecl { .. } => {}
        }
    }

    Ok(circuit)
}

fn lower_gate(circuit: &mut Circuit, registers: &Registers, call: &GateCall) -> ParseResult<()> {
    let kind = gate_kind(&call.name, &call.params)?;
    let arity = kind.num_qubits();

    let operands = call
        .operands
        .iter()
        .map(|op| registers.resolve(op, RegisterKind::Qubit))
        .collect::<ParseResult<Vec<_>>>()?;

    if operands.len() != arity {
        return Err(ParseError::WrongQubitCount {
            gate: call.name.clone(),
            expected: arity,
            got: operands.len(),
        });
    }

    // A single-qubit gate on a whole register applies to each element.
    if arity == 1 {
        for &q in &operands[0] {
            circuit.push(Gate::new(kind, [QubitId(q)]))?;
        }
        return Ok(());
    }

    let mut qubits = Vec::with_capacity(arity);
    for op in &operands {
        match op.as_slice() {
            [q] => qubits.push(QubitId(*q)),
            _ => {
                return Err(ParseError::WrongQubitCount {
                    gate: call.name.clone(),
                    expected: arity,
                    got: operands.iter().map(Vec::len).sum(),
                });
            }
        }
    }
    circuit.push(Gate::new(kind, qubits))?;
    Ok(())
}

/// Map a mnemonic and its evaluated parameters to a gate kind.
fn gate_kind(name: &str, params: &[f64]) -> ParseResult<GateKind> {
    let expected = match name {
        "h" | "x" | "y" | "z" | "s" | "t" | "sdg" | "tdg" | "cx" | "cnot" | "cz" | "swap"
        | "ccx" | "cswap" => 0,
        "rx" | "ry" | "rz" | "u1" | "p" => 1,
        "u2" => 2,
        "u" | "u3" => 3,
        _ => return Err(ParseError::UnknownGate(name.to_string())),
    };
    if params.len() != expected {
        return Err(ParseError::WrongParameterCount {
            gate: name.to_string(),
            expected,
            got: params.len(),
        });
    }
    if params.iter().any(|p| !p.is_finite()) {
        return Err(ParseError::NonFiniteParameter {
            gate: name.to_string(),
        });
    }

    let kind = match (name, params) {
        ("h", _) => GateKind::H,
        ("x", _) => GateKind::X,
        ("y", _) => GateKind::Y,
        ("z", _) => GateKind::Z,
        ("s", _) => GateKind::S,
        ("t", _) => GateKind::T,
        ("sdg", _) => GateKind::Sdg,
        ("tdg", _) => GateKind::Tdg,
        ("cx" | "cnot", _) => GateKind::CNOT,
        ("cz", _) => GateKind::CZ,
        ("swap", _) => GateKind::Swap,
        ("ccx", _) => GateKind::Toffoli,
        ("cswap", _) => GateKind::Fredkin,
        ("rx", &[theta]) => GateKind::Rx(theta),
        ("ry", &[theta]) => GateKind::Ry(theta),
        ("rz", &[theta]) => GateKind::Rz(theta),
        ("u1" | "p", &[lambda]) => GateKind::U1(lambda),
        ("u2", &[phi, lambda]) => GateKind::U2(phi, lambda),
        ("u", &[theta, phi, lambda]) => GateKind::U(theta, phi, lambda),
        ("u3", &[theta, phi, lambda]) => GateKind::U3(theta, phi, lambda),
        _ => return Err(ParseError::UnknownGate(name.to_string())),
    };
    Ok(kind)
}
