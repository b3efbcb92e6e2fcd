//! Circuit statistics.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;

/// Size and composition summary of a circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitStats {
    /// Number of qubits.
    pub qubits: u32,
    /// Number of ASAP layers, measurements included.
    pub depth: usize,
    /// Total number of gates.
    pub gate_count: usize,
    /// Gate count keyed by gate name.
    pub gates_by_kind: FxHashMap<String, usize>,
}

impl CircuitStats {
    /// Compute the statistics of `circuit`.
    pub fn of(circuit: &Circuit) -> Self {
        let mut gates_by_kind: FxHashMap<String, usize> = FxHashMap::default();
        for gate in circuit.gates() {
            *gates_by_kind.entry(gate.name().to_string()).or_default() += 1;
        }
        Self {
            qubits: circuit.num_qubits(),
            depth: depth(circuit),
            gate_count: circuit.len(),
            gates_by_kind,
        }
    }

    /// Count for one gate name, zero if absent.
    pub fn count(&self, name: &str) -> usize {
        self.gates_by_kind.get(name).copied().unwrap_or(0)
    }

    /// Gate counts sorted by name.
    pub fn sorted_kinds(&self) -> Vec<(&str, usize)> {
        let mut kinds: Vec<_> = self
            .gates_by_kind
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        kinds.sort_unstable();
        kinds
    }
}

/// Layer count where each gate sits one past the deepest wire it touches.
///
/// Measurements occupy their classical wire as well as their qubit.
pub(crate) fn depth(circuit: &Circuit) -> usize {
    let mut qubit_level = vec![0usize; circuit.num_qubits() as usize];
    let mut clbit_level = vec![0usize; circuit.num_clbits() as usize];
    let mut depth = 0;

    for gate in circuit.gates() {
        let mut level = gate
            .qubits
            .iter()
            .map(|q| qubit_level[q.index()])
            .max()
            .unwrap_or(0);
        if let Some(c) = gate.clbit {
            level = level.max(clbit_level[c.index()]);
        }
        level += 1;

        for q in &gate.qubits {
            qubit_level[q.index()] = level;
        }
        if let Some(c) = gate.clbit {
            clbit_level[c.index()] = level;
        }
        depth = depth.max(level);
    }
    depth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::QubitId;

    #[test]
    fn test_empty_circuit_stats() {
        let circuit = Circuit::new(4).unwrap();
        let stats = circuit.stats();
        assert_eq!(stats.qubits, 4);
        assert_eq!(stats.depth, 0);
        assert_eq!(stats.gate_count, 0);
        assert!(stats.gates_by_kind.is_empty());
    }

    #[test]
    fn test_parallel_gates_share_a_layer() {
        let mut circuit = Circuit::new(3).unwrap();
        circuit
            .h(QubitId(0))
            .unwrap()
            .h(QubitId(1))
            .unwrap()
            .h(QubitId(2))
            .unwrap();
        assert_eq!(circuit.depth(), 1);

        circuit.cnot(QubitId(0), QubitId(1)).unwrap();
        circuit.x(QubitId(2)).unwrap();
        assert_eq!(circuit.depth(), 2);

        circuit.toffoli(QubitId(0), QubitId(1), QubitId(2)).unwrap();
        assert_eq!(circuit.depth(), 3);
    }

    #[test]
    fn test_gates_by_kind() {
        let mut circuit = Circuit::new(2).unwrap();
        circuit
            .h(QubitId(0))
            .unwrap()
            .h(QubitId(1))
            .unwrap()
            .cz(QubitId(0), QubitId(1))
            .unwrap()
            .measure_all()
            .unwrap();

        let stats = circuit.stats();
        assert_eq!(stats.gate_count, 5);
        assert_eq!(stats.count("h"), 2);
        assert_eq!(stats.count("cz"), 1);
        assert_eq!(stats.count("measure"), 2);
        assert_eq!(stats.count("swap"), 0);
        assert_eq!(
            stats.sorted_kinds(),
            vec![("cz", 1), ("h", 2), ("measure", 2)]
        );
    }
}
