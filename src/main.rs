// Grocery Checkout Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/grocery-checkout-simulator -i input.txt
// Finished at: t=7 minutes
// ```
//
// Or with a routing trace and debug logging:
//
// ```console
// $ ./target/release/grocery-checkout-simulator -i input.txt --trace-output trace.jsonl --debug
// ```

use anyhow::Result;
use clap::Parser;
use grocery_checkout_simulator::input::Workload;
use grocery_checkout_simulator::simulation::{
    LoggingConfig, LoggingGuard, SimulationEngine, SimulationError,
};
use grocery_checkout_simulator::types::{CliArgs, CustomerType, SimulationConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match SimulationConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", SimulationError::from(e));
            process::exit(1);
        }
    };

    let _logging = match init_logging(&args, &config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args, &config) {
        let category = e.downcast_ref::<SimulationError>().map_or("Unknown", SimulationError::category);
        error!(category, "Simulation failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Initialize logging based on CLI flags and configuration
fn init_logging(
    args: &CliArgs,
    config: &SimulationConfig,
) -> Result<LoggingGuard, Box<dyn std::error::Error + Send + Sync>> {
    let level = if args.debug {
        tracing::Level::DEBUG
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        // Default: minimal logging so stdout/stderr stay clean
        tracing::Level::WARN
    };

    let mut logging = LoggingConfig::new().with_level(level);
    if args.debug {
        logging = logging.with_span_events();
    }
    if config.log_json {
        logging = logging.with_json_format();
    }
    if !std::io::stderr().is_terminal() {
        logging = logging.without_ansi();
    }
    if let Some(directory) = &config.log_dir {
        logging = logging.with_file_logging(directory.clone());
    }
    logging.init()
}

/// Load the workload, run the simulation and report the result
fn run(args: &CliArgs, config: &SimulationConfig) -> Result<()> {
    let workload = Workload::from_config(config)?;

    info!(
        registers = workload.register_count().get(),
        customers = workload.customers().len(),
        "Workload loaded"
    );

    if args.dry_run {
        print_workload_summary(&workload);
        eprintln!("Dry run mode - simulation will not be executed.");
        return Ok(());
    }

    let report = SimulationEngine::new(&workload).run();

    if let Some(trace_path) = &config.trace_output {
        report.save_trace(trace_path)?;
    }

    println!("{}", report);
    Ok(())
}

/// Print a short description of a validated workload
fn print_workload_summary(workload: &Workload) {
    let registers = workload.register_count().get();

    eprintln!("Input validation successful!");
    eprintln!("Workload:");
    eprintln!("  Registers: {} ({} normal, 1 training)", registers, registers - 1);
    eprintln!("  Customers: {}", workload.customers().len());
    eprintln!("    Type A: {}", workload.count_of(CustomerType::A));
    eprintln!("    Type B: {}", workload.count_of(CustomerType::B));
    if let Some(last) = workload.customers().iter().map(|spec| spec.arrival).max() {
        eprintln!("  Last arrival: t={}", last);
    }
}
