//! Customer model
//!
//! A customer is a passive record: behaviour type, arrival minute, identity and
//! the items still to be checked out. Only a register's serve step mutates it.

use crate::types::{CustomerId, CustomerType, Tick};
use serde::{Deserialize, Serialize};

/// A shopper waiting for, or going through, checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Stable identity, derived from input order
    pub id: CustomerId,
    /// Behaviour type, which selects the routing rule
    pub customer_type: CustomerType,
    /// Minute at which the customer reaches the registers
    pub arrival: Tick,
    /// Items still to be checked out, counted in half items
    remaining_half_items: u64,
}

impl Customer {
    /// Create a customer carrying `items` items
    ///
    /// `items` is expected to be positive; the input layer rejects zero. Every
    /// `u32` item count doubles into a `u64` without loss.
    pub fn new(id: CustomerId, customer_type: CustomerType, arrival: Tick, items: u32) -> Self {
        Self { id, customer_type, arrival, remaining_half_items: u64::from(items) * 2 }
    }

    /// Items still to be checked out
    pub fn remaining_items(&self) -> f64 {
        self.remaining_half_items as f64 / 2.0
    }

    /// Items still to be checked out, in half items
    pub fn remaining_half_items(&self) -> u64 {
        self.remaining_half_items
    }

    /// Whether every item has been checked out
    pub fn is_done(&self) -> bool {
        self.remaining_half_items == 0
    }

    /// Check out up to `half_items` half items, never going below zero
    pub(crate) fn check_out(&mut self, half_items: u32) {
        self.remaining_half_items = self.remaining_half_items.saturating_sub(u64::from(half_items));
    }
}
