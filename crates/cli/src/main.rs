//! Pipelined processor simulator CLI.
//!
//! This binary drives the simulator on its built-in demo program. It performs:
//! 1. **Run:** Execute the demo cycle by cycle, tracking loop iterations, then
//!    print the final registers, loop snapshots, data memory and statistics.
//! 2. **Disassembly:** List the demo program with addresses and encodings.

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pipesim_core::config::Config;
use pipesim_core::isa::disasm::disassemble;
use pipesim_core::report::{LoopTracker, Report};
use pipesim_core::sim::{Simulator, programs};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    author,
    version,
    about = "Five-stage pipelined 24-bit RISC simulator",
    long_about = "Runs the built-in demo program through a five-stage pipeline.\n\nExamples:\n  pipesim run\n  pipesim run --cycles 60 --trace\n  pipesim run --config run.json --json\n  pipesim disasm"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the demo program and print the final machine state.
    Run {
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// Cycle budget (overrides the configuration).
        #[arg(long)]
        cycles: Option<u64>,

        /// Log every pipeline stage at trace level.
        #[arg(long)]
        trace: bool,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// List the demo program.
    Disasm,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            cycles,
            trace,
            json,
        } => cmd_run(config.as_deref(), cycles, trace, json),
        Commands::Disasm => cmd_disasm(),
    }
}

/// Installs the fmt subscriber. `RUST_LOG` wins over the default level.
fn init_logging(trace: bool) {
    let default = if trace { "pipesim_core=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Builds the effective configuration from the file and command-line overrides.
fn load_config(path: Option<&str>, cycles: Option<u64>, trace: bool) -> Config {
    let mut config = match path {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    if let Some(cycles) = cycles {
        config.general.max_cycles = cycles;
    }
    config.general.trace_instructions |= trace;
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    config
}

/// Runs the demo program to completion, the loop exit, or the cycle budget.
fn cmd_run(config_path: Option<&str>, cycles: Option<u64>, trace: bool, json: bool) {
    let config = load_config(config_path, cycles, trace);
    init_logging(config.general.trace_instructions);
    tracing::debug!("{config:?}");

    let mut sim = Simulator::new(&programs::demo());
    let mut tracker =
        match LoopTracker::new(config.report.watch_register, config.report.stop_on_loop_exit) {
            Ok(tracker) => tracker,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        };

    if !json {
        println!("Starting simulation...");
        println!();
    }

    let outcome = sim.run_with(config.general.max_cycles, |cpu| tracker.observe(cpu));
    tracing::info!("{outcome:?}");
    let report = Report::new(&sim.cpu, outcome, tracker.into_snapshots());

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    } else {
        println!("{report}");
        println!("{}", report.stats);
    }
}

/// Prints each instruction of the demo program with its address and encoding.
fn cmd_disasm() {
    for (i, word) in programs::demo().into_iter().enumerate() {
        println!("{:#08x}:  {:06x}  {}", i * 3, word, disassemble(word));
    }
}
