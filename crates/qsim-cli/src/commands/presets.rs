//! Presets command implementation.

use console::style;

use qsim_ir::Preset;

/// Execute the presets command.
pub fn execute() {
    println!("{}", style("Built-in circuits:").bold());
    for preset in Preset::ALL {
        println!(
            "  {:<8} {}",
            style(preset.name()).cyan(),
            preset.description()
        );
    }
    println!();
    println!("Use with: qsim run --preset <name> [--qubits N]");
}
