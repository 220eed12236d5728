//! Workload input
//!
//! Reads the plain-text workload format and hands the engine a validated
//! register count and customer list. Everything is checked here so the engine
//! never sees malformed input.
//!
//! ```text
//! 2          <- number of registers
//! A 1 2      <- type, arrival minute, item count
//! B 1 5
//! ```

use crate::checkout::Customer;
use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{CustomerId, CustomerType, SimulationConfig, Tick};
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::debug;

/// Errors raised while reading a workload
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The workload file could not be read
    #[error("Failed to read input file {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input has no register count line
    #[error("Input is empty: expected the number of registers on the first line")]
    MissingRegisterCount,

    /// The register count is not a positive integer
    #[error("Line {line}: register count must be a positive integer, got '{value}'")]
    InvalidRegisterCount {
        /// 1-based line number
        line: usize,
        /// Offending text
        value: String,
    },

    /// A customer line does not have exactly three fields
    #[error("Line {line}: expected '<type> <arrival> <items>', got {found} field(s)")]
    WrongFieldCount {
        /// 1-based line number
        line: usize,
        /// Number of fields found
        found: usize,
    },

    /// Unknown customer type
    #[error("Line {line}: customer type must be A or B, got '{value}'")]
    InvalidCustomerType {
        /// 1-based line number
        line: usize,
        /// Offending text
        value: String,
    },

    /// Arrival minute is not a non-negative integer
    #[error("Line {line}: arrival time must be a non-negative integer, got '{value}'")]
    InvalidArrival {
        /// 1-based line number
        line: usize,
        /// Offending text
        value: String,
    },

    /// Item count is not a positive integer
    #[error("Line {line}: item count must be a positive integer, got '{value}'")]
    InvalidItemCount {
        /// 1-based line number
        line: usize,
        /// Offending text
        value: String,
    },
}

/// One customer line of the workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSpec {
    /// Behaviour type
    pub customer_type: CustomerType,
    /// Arrival minute
    pub arrival: Tick,
    /// Number of items, always positive
    pub items: u32,
}

/// A validated simulation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    register_count: NonZeroUsize,
    customers: Vec<CustomerSpec>,
}

impl Workload {
    /// Build a workload from already-validated parts
    pub fn new(register_count: NonZeroUsize, customers: Vec<CustomerSpec>) -> Self {
        Self { register_count, customers }
    }

    /// Build a workload from raw values, applying the same checks as the parser
    ///
    /// Line numbers in errors count the register count as line 1, as in a file.
    pub fn from_triples(
        register_count: usize,
        customers: &[(CustomerType, Tick, u32)],
    ) -> Result<Self, InputError> {
        let register_count = NonZeroUsize::new(register_count).ok_or_else(|| {
            InputError::InvalidRegisterCount { line: 1, value: register_count.to_string() }
        })?;

        let customers = customers
            .iter()
            .enumerate()
            .map(|(offset, &(customer_type, arrival, items))| {
                if items == 0 {
                    return Err(InputError::InvalidItemCount {
                        line: offset + 2,
                        value: items.to_string(),
                    });
                }
                Ok(CustomerSpec { customer_type, arrival, items })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { register_count, customers })
    }

    /// Parse the text workload format
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line, first) = lines.next().ok_or(InputError::MissingRegisterCount)?;
        let register_count = first
            .parse::<usize>()
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| InputError::InvalidRegisterCount { line, value: first.to_string() })?;

        let customers: Vec<CustomerSpec> =
            lines.map(|(line, content)| parse_customer(line, content)).collect::<Result<_, _>>()?;

        Ok(Self { register_count, customers })
    }

    /// Read and parse a workload file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| InputError::Io { path: path.display().to_string(), source })?;

        let workload = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            registers = workload.register_count.get(),
            customers = workload.customers.len(),
            "Loaded workload"
        );
        Ok(workload)
    }

    /// Validate a run configuration and load the workload it names
    pub fn from_config(config: &SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let input = config
            .input
            .as_deref()
            .ok_or_else(|| SimulationError::configuration_error("no input file configured"))?;
        Ok(Self::from_file(input)?)
    }

    /// Number of registers in the store
    pub fn register_count(&self) -> NonZeroUsize {
        self.register_count
    }

    /// Customer lines in input order
    pub fn customers(&self) -> &[CustomerSpec] {
        &self.customers
    }

    /// Number of customers of the given type
    pub fn count_of(&self, customer_type: CustomerType) -> usize {
        self.customers.iter().filter(|spec| spec.customer_type == customer_type).count()
    }

    /// Create the simulation's customers, numbered in input order
    pub fn to_customers(&self) -> Vec<Customer> {
        self.customers
            .iter()
            .enumerate()
            .map(|(position, spec)| {
                Customer::new(
                    CustomerId::from_position(position),
                    spec.customer_type,
                    spec.arrival,
                    spec.items,
                )
            })
            .collect()
    }
}

fn parse_customer(line: usize, content: &str) -> Result<CustomerSpec, InputError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [kind, arrival, items] = fields.as_slice() else {
        return Err(InputError::WrongFieldCount { line, found: fields.len() });
    };

    let customer_type = kind
        .parse::<CustomerType>()
        .map_err(|_| InputError::InvalidCustomerType { line, value: kind.to_string() })?;
    let arrival = arrival
        .parse::<Tick>()
        .map_err(|_| InputError::InvalidArrival { line, value: arrival.to_string() })?;
    let items = items
        .parse::<u32>()
        .ok()
        .filter(|&items| items > 0)
        .ok_or_else(|| InputError::InvalidItemCount { line, value: items.to_string() })?;

    Ok(CustomerSpec { customer_type, arrival, items })
}
