//! Stats command implementation.

use anyhow::Result;
use console::style;
use serde_json::json;

use super::common::{CircuitArgs, OutputFormat};

/// Execute the stats command.
pub fn execute(args: &CircuitArgs, format: OutputFormat) -> Result<()> {
    let circuit = args.load(None)?;
    let stats = circuit.stats();

    match format {
        OutputFormat::Json => {
            let report = json!({
                "name": circuit.name(),
                "clbits": circuit.num_clbits(),
                "stats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            println!("{} {}", style("Circuit:").bold(), style(circuit.name()).cyan());
            println!("  Qubits: {}", stats.qubits);
            println!("  Clbits: {}", circuit.num_clbits());
            println!("  Depth:  {}", stats.depth);
            println!("  Gates:  {}", stats.gate_count);
            for (name, count) in stats.sorted_kinds() {
                println!("    {:<8} {}", style(name).green(), count);
            }
        }
    }
    Ok(())
}
