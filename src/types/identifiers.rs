//! Identifier types for the checkout simulator
//!
//! Customers and registers are keyed by small integers rather than by object
//! identity. Customer identifiers follow input order; register identifiers are
//! 1-based positions in the store.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A discrete simulation time step (one minute of store time)
pub type Tick = u64;

/// Unique, stable identifier for a customer
///
/// Assigned from the customer's position in the input, starting at 0. Because
/// the input order is preserved, comparing two identifiers also tells which
/// customer was listed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(pub usize);

impl CustomerId {
    /// Create the identifier for the customer at `position` in the input
    pub fn from_position(position: usize) -> Self {
        Self(position)
    }

    /// The zero-based input position this identifier was derived from
    pub fn position(self) -> usize {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CUST_{}", self.0)
    }
}

impl Serialize for CustomerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CustomerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("CUST_").unwrap_or(&s);
        raw.parse::<usize>().map(CustomerId).map_err(serde::de::Error::custom)
    }
}

/// 1-based position of a register in the store
///
/// Lower indices win every routing tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegisterId(pub usize);

impl RegisterId {
    /// The zero-based slot of this register in the register list
    pub fn slot(self) -> usize {
        self.0 - 1
    }

    /// The register identifier for a zero-based slot
    pub fn from_slot(slot: usize) -> Self {
        Self(slot + 1)
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "REG_{}", self.0)
    }
}

impl Serialize for RegisterId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0 as u64)
    }
}

impl<'de> Deserialize<'de> for RegisterId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let index = usize::deserialize(deserializer)?;
        if index == 0 {
            return Err(serde::de::Error::custom("register indices are 1-based"));
        }
        Ok(RegisterId(index))
    }
}
