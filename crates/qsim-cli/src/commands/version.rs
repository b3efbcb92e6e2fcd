//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - state-vector quantum circuit simulator",
        style("qsim").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qsim-ir     Circuit representation, gate library and presets");
    println!("  qsim-sim    Statevector executor and shot sampler");
    println!("  qsim-qasm3  OpenQASM 3 exporter and parser");
    println!("  qsim-cli    Command-line interface");
    println!();
    println!(
        "Max qubits: {}",
        style(qsim_ir::MAX_QUBITS).yellow()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
