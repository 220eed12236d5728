//! Simulation orchestration and control
//!
//! This module contains the simulation loop, the run report, error handling and
//! logging setup.
//!
//! # Overview
//!
//! - **SimulationEngine**: drives the minute-by-minute loop over a [`SimulationState`]
//! - **SimulationReport**: completion time plus routing and completion records
//! - **SimulationError**: errors from the layers around the engine
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use grocery_checkout_simulator::input::Workload;
//! use grocery_checkout_simulator::simulation::*;
//!
//! let workload = Workload::parse("1\nA 0 2\n").unwrap();
//! let report = SimulationEngine::new(&workload).run();
//!
//! // A single register is the training register: half an item per minute
//! assert_eq!(report.total_ticks, 4);
//! assert_eq!(report.to_string(), "Finished at: t=4 minutes");
//! ```

pub mod engine;
pub mod error;
pub mod logging;
pub mod report;

// Re-export all public types for convenience
pub use engine::*;
pub use error::*;
pub use logging::*;
pub use report::*;
