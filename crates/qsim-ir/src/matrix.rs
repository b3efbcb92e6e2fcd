//! Single-qubit unitary matrices.
//!
//! The table is an exhaustive match over [`GateKind`]; kinds without a
//! 2x2 form are reported as [`IrError::UnsupportedGateKind`].

use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;

/// Row-major 2x2 complex matrix `[[m00, m01], [m10, m11]]`.
pub type Matrix2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);

impl GateKind {
    /// Look up the 2x2 unitary for a single-qubit gate.
    pub fn matrix(&self) -> IrResult<Matrix2> {
        let m = match *self {
            GateKind::H => {
                let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[h, h], [h, -h]]
            }
            GateKind::X => [[ZERO, ONE], [ONE, ZERO]],
            GateKind::Y => [[ZERO, -I], [I, ZERO]],
            GateKind::Z => [[ONE, ZERO], [ZERO, -ONE]],
            GateKind::S => phase(FRAC_PI_2),
            GateKind::Sdg => phase(-FRAC_PI_2),
            GateKind::T => phase(FRAC_PI_4),
            GateKind::Tdg => phase(-FRAC_PI_4),
            GateKind::Rx(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let neg_i_s = Complex64::new(0.0, -(theta / 2.0).sin());
                [[c, neg_i_s], [neg_i_s, c]]
            }
            GateKind::Ry(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new((theta / 2.0).sin(), 0.0);
                [[c, -s], [s, c]]
            }
            GateKind::Rz(theta) => [
                [Complex64::from_polar(1.0, -theta / 2.0), ZERO],
                [ZERO, Complex64::from_polar(1.0, theta / 2.0)],
            ],
            GateKind::U(theta, phi, lambda) | GateKind::U3(theta, phi, lambda) => {
                universal(theta, phi, lambda)
            }
            GateKind::U1(lambda) => universal(0.0, 0.0, lambda),
            GateKind::U2(phi, lambda) => universal(FRAC_PI_2, phi, lambda),
            GateKind::CNOT
            | GateKind::CZ
            | GateKind::Swap
            | GateKind::Toffoli
            | GateKind::Fredkin
            | GateKind::Measure => return Err(IrError::UnsupportedGateKind(self.name())),
        };
        Ok(m)
    }
}

/// `diag(1, e^{iθ})`.
fn phase(theta: f64) -> Matrix2 {
    [[ONE, ZERO], [ZERO, Complex64::from_polar(1.0, theta)]]
}

fn universal(theta: f64, phi: f64, lambda: f64) -> Matrix2 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [
            Complex64::new(c, 0.0),
            -Complex64::from_polar(1.0, lambda) * s,
        ],
        [
            Complex64::from_polar(1.0, phi) * s,
            Complex64::from_polar(1.0, phi + lambda) * c,
        ],
    ]
}
