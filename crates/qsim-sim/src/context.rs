//! Mutable simulation state kept apart from the circuit.

use qsim_ir::Circuit;

use crate::statevector::Statevector;

/// Amplitudes plus classical register for one run, or a chain of runs.
///
/// [`crate::Executor::execute`] builds a fresh context every call. Passing
/// the same context to [`crate::Executor::execute_in`] repeatedly applies
/// the circuit on top of whatever state the previous run left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionContext {
    state: Statevector,
    classical: Vec<u8>,
}

impl ExecutionContext {
    /// A context in |0...0⟩ with a zeroed classical register.
    pub fn new(num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            state: Statevector::new(num_qubits as usize),
            classical: vec![0; num_clbits as usize],
        }
    }

    /// A context sized for `circuit`.
    pub fn for_circuit(circuit: &Circuit) -> Self {
        Self::new(circuit.num_qubits(), circuit.num_clbits())
    }

    /// Back to |0...0⟩ with every classical bit cleared.
    pub fn reset(&mut self) {
        self.state.reset();
        self.classical.fill(0);
    }

    /// The statevector.
    pub fn state(&self) -> &Statevector {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut Statevector {
        &mut self.state
    }

    /// Classical register, one `0`/`1` byte per bit.
    pub fn classical_bits(&self) -> &[u8] {
        &self.classical
    }

    pub(crate) fn classical_mut(&mut self) -> &mut [u8] {
        &mut self.classical
    }

    /// Width of the quantum register.
    pub fn num_qubits(&self) -> u32 {
        self.state.num_qubits() as u32
    }

    /// Width of the classical register.
    pub fn num_clbits(&self) -> u32 {
        self.classical.len() as u32
    }

    /// Whether this context can host `circuit`.
    pub fn fits(&self, circuit: &Circuit) -> bool {
        self.num_qubits() == circuit.num_qubits() && self.num_clbits() == circuit.num_clbits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsim_ir::GateKind;

    #[test]
    fn test_new_context_is_ground_state() {
        let ctx = ExecutionContext::new(3, 2);
        assert_eq!(ctx.num_qubits(), 3);
        assert_eq!(ctx.num_clbits(), 2);
        assert_eq!(ctx.classical_bits(), &[0, 0]);
        assert_eq!(ctx.state(), &Statevector::new(3));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ctx = ExecutionContext::new(2, 2);
        ctx.state_mut()
            .apply_matrix(&GateKind::X.matrix().unwrap(), 0);
        ctx.classical_mut()[1] = 1;

        ctx.reset();
        assert_eq!(ctx, ExecutionContext::new(2, 2));
    }

    #[test]
    fn test_fits() {
        let bell = Circuit::bell().unwrap();
        assert!(ExecutionContext::for_circuit(&bell).fits(&bell));
        assert!(!ExecutionContext::new(3, 3).fits(&bell));
        assert!(!ExecutionContext::new(2, 1).fits(&bell));
    }
}
