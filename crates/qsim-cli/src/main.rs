//! qsim Command-Line Interface
//!
//! Runs, exports and inspects state-vector simulations.
//!
//! ```text
//! qsim run --preset bell --shots 1024
//! qsim run --input circuit.qasm --seed 7 --format json
//! qsim export --preset qft --qubits 4 --output qft4.qasm
//! qsim stats --input circuit.qasm
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::common::{CircuitArgs, OutputFormat};
use commands::{export, presets, run, stats, version};

/// qsim - state-vector quantum circuit simulator
#[derive(Parser, Debug)]
#[command(name = "qsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Simulate a circuit and print the outcome histogram
    Run {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Seed for the shot sampler (overrides config and QSIM_SEED)
        #[arg(long)]
        seed: Option<u64>,

        /// Entangler semantics: controlled-flip or standard
        #[arg(long)]
        semantics: Option<qsim_sim::EntanglerSemantics>,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Config file (default: ~/.qsim/config.yaml)
        #[arg(long)]
        config: Option<std::path::PathBuf>,
    },

    /// Write a circuit as OpenQASM 3
    Export {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Show circuit statistics
    Stats {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Output format (table, json)
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// List the built-in circuits
    Presets,

    /// Show version information
    Version,
}

fn log_filter(verbose: u8) -> EnvFilter {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run {
            circuit,
            shots,
            seed,
            semantics,
            format,
            config,
        } => {
            let opts = run::RunOptions {
                shots,
                seed,
                semantics,
                format,
                config,
            };
            run::execute(&circuit, opts).await
        }

        Commands::Export { circuit, output } => export::execute(&circuit, output.as_deref()),

        Commands::Stats { circuit, format } => stats::execute(&circuit, format),

        Commands::Presets => {
            presets::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
