//! Shared helpers for CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use qsim_ir::{Circuit, Preset};
use qsim_qasm3::parse;

/// Output format for `run` and `stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored table
    Table,
    /// Pretty-printed JSON on stdout
    Json,
}

/// Where the circuit comes from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct CircuitSource {
    /// Built-in circuit (bell, ghz, qft, grover, vqe)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Input file (QASM3 or JSON)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Circuit selection plus preset parameters.
#[derive(Args, Debug, Clone)]
pub struct CircuitArgs {
    #[command(flatten)]
    pub source: CircuitSource,

    /// Number of qubits for sized presets
    #[arg(short, long)]
    pub qubits: Option<u32>,

    /// Marked state for the grover preset (default: all ones)
    #[arg(long)]
    pub oracle: Option<u64>,

    /// Ansatz layers for the vqe preset
    #[arg(long, default_value = "2")]
    pub layers: u32,
}

impl CircuitArgs {
    /// Build or load the selected circuit.
    ///
    /// `seed` drives the random angles of the vqe preset.
    pub fn load(&self, seed: Option<u64>) -> Result<Circuit> {
        match (&self.source.preset, &self.source.input) {
            (Some(preset), _) => build_preset(*preset, self.qubits, self.oracle, self.layers, seed),
            (None, Some(path)) => load_circuit(path),
            (None, None) => anyhow::bail!("Either --preset or --input is required"),
        }
    }

    /// Short label for progress messages.
    pub fn label(&self) -> String {
        match (&self.source.preset, &self.source.input) {
            (Some(preset), _) => preset.to_string(),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => "circuit".into(),
        }
    }
}

/// Default width of the sized presets.
fn default_qubits(preset: Preset) -> u32 {
    match preset {
        Preset::Bell => 2,
        Preset::Ghz | Preset::Qft | Preset::Grover => 3,
        Preset::Vqe => 4,
    }
}

/// Build a preset circuit.
pub fn build_preset(
    preset: Preset,
    qubits: Option<u32>,
    oracle: Option<u64>,
    layers: u32,
    seed: Option<u64>,
) -> Result<Circuit> {
    let n = qubits.unwrap_or_else(|| default_qubits(preset));
    let circuit = match preset {
        Preset::Bell => {
            if n != 2 {
                anyhow::bail!("The bell preset is fixed at 2 qubits");
            }
            Circuit::bell()
        }
        Preset::Ghz => Circuit::ghz(n),
        Preset::Qft => Circuit::qft(n),
        Preset::Grover => {
            let all_ones = u64::MAX.checked_shr(64 - n.min(64)).unwrap_or(0);
            Circuit::grover(n, oracle.unwrap_or(all_ones))
        }
        Preset::Vqe => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            Circuit::vqe_ansatz(n, layers, &mut rng)
        }
    };
    circuit.with_context(|| format!("Failed to build preset '{preset}' with {n} qubits"))
}

/// Load a circuit from a QASM3 or JSON file.
pub fn load_circuit(path: &Path) -> Result<Circuit> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&source)
            .with_context(|| format!("Invalid circuit JSON: {}", path.display())),
        _ => parse(&source).map_err(|e| anyhow::anyhow!("Parse error: {e}")),
    }
}
