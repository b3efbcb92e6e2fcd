//! Pre-built circuits.
//!
//! Every preset ends with [`Circuit::measure_all`].

use rand::Rng;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::circuit::Circuit;
use crate::error::IrResult;
use crate::qubit::QubitId;

/// Names of the canned circuits, for lookup from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Two-qubit Bell pair.
    Bell,
    /// n-qubit GHZ state.
    Ghz,
    /// QFT skeleton (H plus Rz, no controlled phases).
    Qft,
    /// One truncated Grover iteration.
    Grover,
    /// Layered Ry/Rz + CNOT chain ansatz.
    Vqe,
}

impl Preset {
    /// All presets in display order.
    pub const ALL: [Preset; 5] = [
        Preset::Bell,
        Preset::Ghz,
        Preset::Qft,
        Preset::Grover,
        Preset::Vqe,
    ];

    /// Lower-case preset name.
    pub fn name(self) -> &'static str {
        match self {
            Preset::Bell => "bell",
            Preset::Ghz => "ghz",
            Preset::Qft => "qft",
            Preset::Grover => "grover",
            Preset::Vqe => "vqe",
        }
    }

    /// One-line description.
    pub fn description(self) -> &'static str {
        match self {
            Preset::Bell => "Bell pair (|00> + |11>)/sqrt(2) on 2 qubits",
            Preset::Ghz => "GHZ state: H on q[0], then CNOT q[0] -> q[i]",
            Preset::Qft => "QFT skeleton: H and Rz(pi/2^k) without controlled phases",
            Preset::Grover => "single Grover-style iteration with an X oracle",
            Preset::Vqe => "random Ry/Rz layers with a linear CNOT chain",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bell" => Ok(Preset::Bell),
            "ghz" => Ok(Preset::Ghz),
            "qft" => Ok(Preset::Qft),
            "grover" => Ok(Preset::Grover),
            "vqe" => Ok(Preset::Vqe),
            other => Err(format!(
                "unknown preset '{other}', expected one of: bell, ghz, qft, grover, vqe"
            )),
        }
    }
}

impl Circuit {
    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2)?;
        circuit
            .h(QubitId(0))?
            .cnot(QubitId(0), QubitId(1))?
            .measure_all()?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit: every CNOT is controlled by qubit 0.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size("ghz", n, n)?;
        circuit.h(QubitId(0))?;
        for i in 1..n {
            circuit.cnot(QubitId(0), QubitId(i))?;
        }
        circuit.measure_all()?;
        Ok(circuit)
    }

    /// Create the QFT skeleton.
    ///
    /// Each qubit gets H followed by `Rz(pi / 2^(j-i))` on every later qubit
    /// `j`. There is no controlled-phase coupling, so this is not a
    /// textbook QFT.
    pub fn qft(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_size("qft", n, n)?;
        for i in 0..n {
            circuit.h(QubitId(i))?;
            for j in (i + 1)..n {
                let angle = PI / (1u64 << (j - i)) as f64;
                circuit.rz(angle, QubitId(j))?;
            }
        }
        circuit.measure_all()?;
        Ok(circuit)
    }

    /// Create a single, truncated Grover-style iteration.
    ///
    /// Uniform superposition, then X on each qubit whose bit is set in
    /// `oracle`, then H and X on every qubit as a diffusion stand-in.
    pub fn grover(n: u32, oracle: u64) -> IrResult<Self> {
        let mut circuit = Self::with_size("grover", n, n)?;
        for i in 0..n {
            circuit.h(QubitId(i))?;
        }
        for i in 0..n.min(64) {
            if (oracle >> i) & 1 == 1 {
                circuit.x(QubitId(i))?;
            }
        }
        for i in 0..n {
            circuit.h(QubitId(i))?;
        }
        for i in 0..n {
            circuit.x(QubitId(i))?;
        }
        circuit.measure_all()?;
        Ok(circuit)
    }

    /// Create a VQE-style ansatz with angles drawn uniformly from `[0, 2pi)`.
    pub fn vqe_ansatz<R: Rng + ?Sized>(n: u32, layers: u32, rng: &mut R) -> IrResult<Self> {
        let params: Vec<f64> = (0..2 * n as usize * layers as usize)
            .map(|_| rng.gen_range(0.0..2.0 * PI))
            .collect();
        Self::vqe_ansatz_with_params(n, layers, &params)
    }

    /// Create a VQE-style ansatz from explicit angles.
    ///
    /// Per layer and qubit, `params` supplies the Ry angle then the Rz
    /// angle. Missing entries are taken as zero.
    pub fn vqe_ansatz_with_params(n: u32, layers: u32, params: &[f64]) -> IrResult<Self> {
        let mut circuit = Self::with_size("vqe", n, n)?;
        let mut angles = params.iter().copied().chain(std::iter::repeat(0.0));
        for _ in 0..layers {
            for q in 0..n {
                let ry = angles.next().unwrap_or_default();
                let rz = angles.next().unwrap_or_default();
                circuit.ry(ry, QubitId(q))?.rz(rz, QubitId(q))?;
            }
            for q in 0..n.saturating_sub(1) {
                circuit.cnot(QubitId(q), QubitId(q + 1))?;
            }
        }
        circuit.measure_all()?;
        Ok(circuit)
    }
}
