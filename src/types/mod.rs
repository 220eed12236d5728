//! Core types and identifiers for the checkout simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: input-order customer identifiers and 1-based register indices
//! - **Enums**: customer behaviour types and register speed classes
//! - **Configuration**: CLI arguments, configuration file and validation
//!
//! # Usage Example
//!
//! ```rust
//! use grocery_checkout_simulator::types::*;
//!
//! let customer = CustomerId::from_position(0);
//! let register = RegisterId(1);
//! assert_eq!(customer.to_string(), "CUST_0");
//! assert_eq!(register.slot(), 0);
//!
//! let kind = RegisterKind::Training;
//! assert_eq!(kind.items_per_tick(), 0.5);
//!
//! let config = SimulationConfig {
//!     input: Some("input.txt".to_string()),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
