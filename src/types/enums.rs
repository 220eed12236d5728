//! Enumeration types for the checkout simulator
//!
//! This module contains the customer behaviour types and register speed classes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Checkout behaviour of a customer
///
/// The derived ordering puts `A` before `B`, which is the secondary key used
/// when ordering customers that arrive in the same minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CustomerType {
    /// Joins the register with the fewest customers in line
    A,
    /// Prefers an idle register, otherwise the line whose last customer has the fewest items
    B,
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerType::A => write!(f, "A"),
            CustomerType::B => write!(f, "B"),
        }
    }
}

impl FromStr for CustomerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(CustomerType::A),
            "B" => Ok(CustomerType::B),
            _ => Err(format!("Unknown customer type: {}", s)),
        }
    }
}

/// Service speed class of a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterKind {
    /// Staffed by an experienced cashier, one item per minute
    Normal,
    /// Staffed by a cashier in training, half an item per minute
    Training,
}

impl RegisterKind {
    /// Throughput per tick, in half items
    ///
    /// Item counts are tracked in half items so that the training rate stays
    /// in integer arithmetic.
    pub fn half_items_per_tick(self) -> u32 {
        match self {
            RegisterKind::Normal => 2,
            RegisterKind::Training => 1,
        }
    }

    /// Throughput per tick, in items
    pub fn items_per_tick(self) -> f64 {
        f64::from(self.half_items_per_tick()) / 2.0
    }

    /// Whether this is the training register
    pub fn is_training(self) -> bool {
        matches!(self, RegisterKind::Training)
    }
}

impl fmt::Display for RegisterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterKind::Normal => write!(f, "Normal"),
            RegisterKind::Training => write!(f, "Training"),
        }
    }
}
