//! Store floor model: customers, registers, routing and arrivals
//!
//! # Overview
//!
//! - **Customer**: passive record of type, arrival minute and remaining items
//! - **Register**: owns a first-in-first-out line and serves its head each minute
//! - **Routing**: picks the register an arriving customer joins
//! - **Arrivals**: groups customers by arrival minute and orders each group
//!
//! # Usage Example
//!
//! ```rust
//! use grocery_checkout_simulator::checkout::*;
//! use grocery_checkout_simulator::types::*;
//!
//! let mut registers = Register::build_store(2);
//! let customer = Customer::new(CustomerId(0), CustomerType::A, 0, 3);
//!
//! let outcome = route(customer, &mut registers);
//! assert_eq!(outcome.register, RegisterId(1));
//! assert!(outcome.became_busy);
//! ```

pub mod arrivals;
pub mod customer;
pub mod register;
pub mod routing;

pub use arrivals::*;
pub use customer::*;
pub use register::*;
pub use routing::*;
