//! Grocery Checkout Simulator
//!
//! A discrete-time simulation of customers checking out at a multi-register
//! grocery store, computing how many minutes it takes to serve everyone.
//!
//! # Overview
//!
//! Time advances in one-minute steps. Each minute, the customers arriving in
//! that minute pick a register according to their behaviour type, then every
//! register checks out items for the customer at the front of its line. The
//! highest-numbered register is staffed by a trainee and works at half speed.
//!
//! ## Key Features
//!
//! - **Two customer behaviours**: type `A` joins the shortest line, type `B`
//!   prefers an idle register and otherwise looks at the last customer in each line
//! - **Deterministic ordering**: same-minute arrivals are ordered by item count,
//!   then type, then input order
//! - **Exact service arithmetic**: items are counted in half items, so the
//!   training register never drifts
//! - **Run trace**: every routing decision and completion is recorded
//!
//! ## Quick Start
//!
//! ```rust
//! use grocery_checkout_simulator::*;
//!
//! let workload = Workload::parse("2\nA 1 2\nA 2 1\n")?;
//! let report = SimulationEngine::new(&workload).run();
//!
//! assert_eq!(report.total_ticks, 4);
//! println!("{}", report);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums and configuration
//! - [`checkout`]: customers, registers, routing and arrival ordering
//! - [`input`]: the workload text format
//! - [`simulation`]: the simulation loop, run report, errors and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Input     │───►│ Simulation  │───►│   Report    │
//! │  Workload   │    │   Engine    │    │   Trace     │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                            │
//!                            ▼
//!        ┌─────────────┬─────────────┬─────────────┐
//!        │  Arrivals   │   Routing   │  Registers  │
//!        │  ordering   │   policy    │   service   │
//!        └─────────────┴─────────────┴─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod checkout;
pub mod input;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    // Configuration
    CliArgs,
    ConfigError,
    ConfigValidationError,
    // Identifiers
    CustomerId,
    // Enums
    CustomerType,
    RegisterId,
    RegisterKind,
    SimulationConfig,
    Tick,
};

// Store floor model
pub use checkout::{
    choose_register, order_arrivals, route, ArrivalSchedule, Customer, Register, RouteOutcome,
};

// Input
pub use input::{CustomerSpec, InputError, Workload};

// Simulation types and functionality
pub use simulation::{
    CompletionRecord, LoggingConfig, RoutingDecision, SimulationEngine, SimulationError,
    SimulationReport, SimulationResult, SimulationState, TickOutcome, TraceRecord,
};
