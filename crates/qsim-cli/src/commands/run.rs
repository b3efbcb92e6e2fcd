//! Run command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use qsim_sim::{CircuitResult, EntanglerSemantics, Executor, SimulatorConfig};

use super::common::{CircuitArgs, OutputFormat};

/// Outcomes listed in the table before truncating.
const MAX_ROWS: usize = 16;

/// Options of the run command besides the circuit selection.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub shots: u32,
    pub seed: Option<u64>,
    pub semantics: Option<EntanglerSemantics>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

/// Resolve the simulator configuration: file and environment, then flags.
pub fn resolve_config(opts: &RunOptions) -> Result<SimulatorConfig> {
    let mut config =
        SimulatorConfig::load(opts.config.as_deref()).context("Failed to load configuration")?;
    if let Some(seed) = opts.seed {
        config.seed = Some(seed);
    }
    if let Some(semantics) = opts.semantics {
        config.semantics = semantics;
    }
    Ok(config)
}

/// Execute the run command.
pub async fn execute(args: &CircuitArgs, opts: RunOptions) -> Result<()> {
    let config = resolve_config(&opts)?;
    let circuit = args.load(config.seed)?;
    info!(
        "Loaded {}: {} qubits, {} gates",
        circuit.name(),
        circuit.num_qubits(),
        circuit.len()
    );

    let table = opts.format == OutputFormat::Table;
    if table {
        println!(
            "{} Running {} ({} qubits, depth {}, {} shots, {} semantics)",
            style("→").cyan().bold(),
            style(args.label()).green(),
            circuit.num_qubits(),
            circuit.depth(),
            opts.shots,
            style(config.semantics).yellow()
        );
    }

    let spinner = if table {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("Simulating...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let shots = opts.shots;
    let outcome = tokio::task::spawn_blocking(move || {
        let mut executor = Executor::new(config);
        executor.execute(&circuit, shots)
    })
    .await;
    spinner.finish_and_clear();

    let result = outcome
        .context("Simulation task failed")?
        .context("Simulation failed")?;

    match opts.format {
        OutputFormat::Table => print_results(&result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

/// Outcome counts, highest first, ties in bitstring order.
pub fn sorted_counts(result: &CircuitResult) -> Vec<(&str, u64)> {
    let mut counts: Vec<(&str, u64)> = result
        .outcome_counts()
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    counts
}

/// Print execution results in a table format.
fn print_results(result: &CircuitResult) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots()
    );

    let sorted = sorted_counts(result);
    let total = f64::from(result.shots());

    for (bitstring, count) in sorted.iter().take(MAX_ROWS) {
        let prob = *count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);
        let label = if bitstring.is_empty() { "-" } else { bitstring };

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(label).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > MAX_ROWS {
        println!("  ... and {} more outcomes", sorted.len() - MAX_ROWS);
    }

    let register: Vec<String> = result.measurements().iter().map(u8::to_string).collect();
    println!("\n  Most likely:        {}", style(result.most_likely()).cyan());
    println!("  Classical register: [{}]", register.join(", "));
    println!("  Total probability:  {:.9}", result.total_probability());
    println!(
        "  Execution time:     {} ms",
        style(format!("{:.3}", result.execution_time_ms())).yellow()
    );
}
