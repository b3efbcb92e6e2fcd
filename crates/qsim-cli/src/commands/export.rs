//! Export command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qsim_qasm3::emit;

use super::common::CircuitArgs;

/// Execute the export command.
pub fn execute(args: &CircuitArgs, output: Option<&Path>) -> Result<()> {
    let circuit = args.load(None)?;
    let qasm = emit(&circuit);

    match output {
        Some(path) => {
            fs::write(path, &qasm)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!(
                "{} Wrote {} ({} gates) to {}",
                style("✓").green().bold(),
                circuit.name(),
                circuit.len(),
                style(path.display()).green()
            );
        }
        None => print!("{qasm}"),
    }
    Ok(())
}
