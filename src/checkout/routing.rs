//! Register selection for arriving customers
//!
//! Routing is agnostic to register speed: the training register competes under
//! the same rules as every other register. Every rule breaks ties toward the
//! lowest register index.
//!
//! - Type `A` joins the shortest line.
//! - Type `B` joins the lowest-numbered idle register if there is one, otherwise
//!   the line whose last customer has the fewest items left.

use crate::checkout::{Customer, Register};
use crate::types::{CustomerType, RegisterId};
use serde::{Deserialize, Serialize};

/// Where a customer was sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteOutcome {
    /// The register the customer joined
    pub register: RegisterId,
    /// Whether the register was idle and is now serving this customer
    pub became_busy: bool,
}

/// Pick the register a customer would join, as a slot into `registers`
///
/// Returns `None` only when `registers` is empty.
pub fn choose_register(customer: &Customer, registers: &[Register]) -> Option<usize> {
    match customer.customer_type {
        CustomerType::A => shortest_line(registers),
        CustomerType::B => first_idle(registers).or_else(|| lightest_last_in_line(registers)),
    }
}

/// Send a customer to the register chosen by [`choose_register`]
///
/// # Panics
///
/// Panics if `registers` is empty. A store always has at least one register.
pub fn route(customer: Customer, registers: &mut [Register]) -> RouteOutcome {
    let slot = choose_register(&customer, registers)
        .expect("a store always has at least one register");
    let register = &mut registers[slot];
    let became_busy = register.enqueue(customer);

    RouteOutcome { register: register.id(), became_busy }
}

fn shortest_line(registers: &[Register]) -> Option<usize> {
    registers
        .iter()
        .enumerate()
        .min_by_key(|(_, register)| (register.queue_len(), register.id()))
        .map(|(slot, _)| slot)
}

fn first_idle(registers: &[Register]) -> Option<usize> {
    registers
        .iter()
        .enumerate()
        .filter(|(_, register)| register.is_available())
        .min_by_key(|(_, register)| register.id())
        .map(|(slot, _)| slot)
}

// Only consulted when no register is idle, so every line has a last customer.
fn lightest_last_in_line(registers: &[Register]) -> Option<usize> {
    registers
        .iter()
        .enumerate()
        .min_by_key(|(_, register)| {
            (register.last_in_line().map(Customer::remaining_half_items), register.id())
        })
        .map(|(slot, _)| slot)
}
