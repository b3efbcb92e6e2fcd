//! Statevector storage and in-place gate kernels.

use num_complex::Complex64;
use qsim_ir::Matrix2;

/// A statevector representing a quantum state.
///
/// Index `i` is the basis state where qubit `q` has value `(i >> q) & 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Return to |0...0⟩ without reallocating.
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes, `2^num_qubits`.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Always false: even a zero-qubit state holds one amplitude.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// The amplitudes in basis-index order.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// `|a_i|^2` for every basis state, without renormalization.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Sum of squared magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    // =========================================================================
    // Single-qubit kernel
    // =========================================================================

    /// Apply a 2x2 unitary to `qubit` by strided pair iteration.
    pub fn apply_matrix(&mut self, m: &Matrix2, qubit: usize) {
        let stride = 1 << qubit;
        let len = self.amplitudes.len();
        let mut block = 0;
        while block < len {
            for j in 0..stride {
                let i0 = block + j;
                let i1 = i0 + stride;
                let a0 = self.amplitudes[i0];
                let a1 = self.amplitudes[i1];
                self.amplitudes[i0] = m[0][0] * a0 + m[0][1] * a1;
                self.amplitudes[i1] = m[1][0] * a0 + m[1][1] * a1;
            }
            block += 2 * stride;
        }
    }

    // =========================================================================
    // Controlled bit-flip kernels
    // =========================================================================

    /// Swap `a[i]` and `a[i ^ target]` wherever control is 1 and target is 0.
    pub fn apply_controlled_flip(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i ^ tgt_mask);
            }
        }
    }

    /// As [`Self::apply_controlled_flip`] with two controls that must both be 1.
    pub fn apply_doubly_controlled_flip(&mut self, c1: usize, c2: usize, target: usize) {
        let c1_mask = 1 << c1;
        let c2_mask = 1 << c2;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & c1_mask != 0) && (i & c2_mask != 0) && (i & tgt_mask == 0) {
                self.amplitudes.swap(i, i ^ tgt_mask);
            }
        }
    }

    // =========================================================================
    // Textbook two- and three-qubit kernels
    // =========================================================================

    /// Negate every amplitude with both qubits set.
    pub fn apply_cz(&mut self, control: usize, target: usize) {
        let ctrl_mask = 1 << control;
        let tgt_mask = 1 << target;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & tgt_mask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    /// Exchange the values of two qubits.
    pub fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1 << q1;
        let mask2 = 1 << q2;
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Exchange `t1` and `t2` wherever `control` is 1.
    pub fn apply_cswap(&mut self, control: usize, t1: usize, t2: usize) {
        let ctrl_mask = 1 << control;
        let t1_mask = 1 << t1;
        let t2_mask = 1 << t2;
        for i in 0..self.amplitudes.len() {
            if (i & ctrl_mask != 0) && (i & t1_mask != 0) && (i & t2_mask == 0) {
                let j = (i & !t1_mask) | t2_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsim_ir::GateKind;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn basis(num_qubits: usize, index: usize) -> Statevector {
        let mut sv = Statevector::new(num_qubits);
        sv.amplitudes.swap(0, index);
        sv
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert_eq!(sv.len(), 4);
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(1.0, 0.0)));
        for amp in &sv.amplitudes[1..] {
            assert!(approx_eq(*amp, Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply_matrix(&GateKind::H.matrix().unwrap(), 0);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_matrix_on_high_qubit() {
        // X on qubit 2 of |000⟩ gives |100⟩ = index 4
        let mut sv = Statevector::new(3);
        sv.apply_matrix(&GateKind::X.matrix().unwrap(), 2);
        assert!(approx_eq(sv.amplitudes[4], Complex64::new(1.0, 0.0)));
        assert!((sv.norm_sqr() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply_matrix(&GateKind::H.matrix().unwrap(), 0);
        sv.apply_controlled_flip(0, 1);

        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        assert!(approx_eq(sv.amplitudes[0], Complex64::new(sqrt2_inv, 0.0)));
        assert!(approx_eq(sv.amplitudes[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes[3], Complex64::new(sqrt2_inv, 0.0)));
    }

    #[test]
    fn test_controlled_flip_needs_control() {
        // control q0 = 0: nothing happens
        let mut sv = basis(2, 0b10);
        sv.apply_controlled_flip(0, 1);
        assert!(approx_eq(sv.amplitudes[0b10], Complex64::new(1.0, 0.0)));

        // control q0 = 1, target q1 = 0 -> flip to 0b11
        let mut sv = basis(2, 0b01);
        sv.apply_controlled_flip(0, 1);
        assert!(approx_eq(sv.amplitudes[0b11], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_doubly_controlled_flip() {
        let mut sv = basis(3, 0b011);
        sv.apply_doubly_controlled_flip(0, 1, 2);
        assert!(approx_eq(sv.amplitudes[0b111], Complex64::new(1.0, 0.0)));

        let mut sv = basis(3, 0b001);
        sv.apply_doubly_controlled_flip(0, 1, 2);
        assert!(approx_eq(sv.amplitudes[0b001], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_cz_phase() {
        let mut sv = basis(2, 0b11);
        sv.apply_cz(0, 1);
        assert!(approx_eq(sv.amplitudes[0b11], Complex64::new(-1.0, 0.0)));
    }

    #[test]
    fn test_swap_and_cswap() {
        let mut sv = basis(2, 0b01);
        sv.apply_swap(0, 1);
        assert!(approx_eq(sv.amplitudes[0b10], Complex64::new(1.0, 0.0)));

        let mut sv = basis(3, 0b011);
        sv.apply_cswap(0, 1, 2);
        assert!(approx_eq(sv.amplitudes[0b101], Complex64::new(1.0, 0.0)));

        let mut sv = basis(3, 0b010);
        sv.apply_cswap(0, 1, 2);
        assert!(approx_eq(sv.amplitudes[0b010], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_reset() {
        let mut sv = Statevector::new(2);
        sv.apply_matrix(&GateKind::H.matrix().unwrap(), 1);
        sv.reset();
        assert_eq!(sv, Statevector::new(2));
    }
}
