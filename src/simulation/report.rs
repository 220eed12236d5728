//! Run report and trace output
//!
//! The report carries the completion time plus the raw routing and completion
//! records of a run. The records can be written out as JSON lines.

use crate::simulation::{SimulationError, SimulationResult};
use crate::types::{CustomerId, CustomerType, RegisterId, Tick};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// A customer joining a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Minute of arrival and routing
    pub tick: Tick,
    /// Routed customer
    pub customer: CustomerId,
    /// Behaviour type of the customer
    pub customer_type: CustomerType,
    /// Register joined
    pub register: RegisterId,
    /// Whether the register went from idle to busy
    pub became_busy: bool,
}

/// A customer finishing checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Minute whose serve step checked out the last item
    pub tick: Tick,
    /// Finished customer
    pub customer: CustomerId,
    /// Register that served the customer
    pub register: RegisterId,
    /// Minute the customer arrived
    pub arrival: Tick,
}

/// One line of the JSON lines trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceRecord {
    /// Routing decision
    Routed(RoutingDecision),
    /// Completion
    Completed(CompletionRecord),
}

impl TraceRecord {
    fn tick(&self) -> Tick {
        match self {
            TraceRecord::Routed(decision) => decision.tick,
            TraceRecord::Completed(completion) => completion.tick,
        }
    }
}

/// Outcome of a simulation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Minutes elapsed until the last customer finished
    pub total_ticks: Tick,
    /// Number of customers who finished checkout
    pub customers_served: usize,
    /// Routing decisions in the order they were made
    pub routing_log: Vec<RoutingDecision>,
    /// Completions in the order they happened
    pub completions: Vec<CompletionRecord>,
}

impl SimulationReport {
    /// Register a customer was sent to
    pub fn register_for(&self, customer: CustomerId) -> Option<RegisterId> {
        self.routing_log.iter().find(|decision| decision.customer == customer).map(|d| d.register)
    }

    /// Completion record of a customer
    pub fn completion_of(&self, customer: CustomerId) -> Option<&CompletionRecord> {
        self.completions.iter().find(|completion| completion.customer == customer)
    }

    /// Routing decisions and completions merged in simulation order
    ///
    /// Within a minute, routing happens before serving, so routing records come
    /// first.
    pub fn trace(&self) -> Vec<TraceRecord> {
        let mut records: Vec<TraceRecord> = self
            .routing_log
            .iter()
            .copied()
            .map(TraceRecord::Routed)
            .chain(self.completions.iter().copied().map(TraceRecord::Completed))
            .collect();

        // Stable: keeps routing-then-completion and the recorded order within each
        records.sort_by_key(TraceRecord::tick);
        records
    }

    /// Write the trace as JSON lines
    pub fn write_trace<W: Write>(&self, mut writer: W) -> SimulationResult<()> {
        for record in self.trace() {
            let line = serde_json::to_string(&record)?;
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the trace as JSON lines to a file
    ///
    /// Failures are reported as [`SimulationError::TraceError`] naming the path.
    pub fn save_trace<P: AsRef<Path>>(&self, path: P) -> SimulationResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| {
            SimulationError::trace_error(format!("cannot create {}: {}", path.display(), e))
        })?;
        self.write_trace(BufWriter::new(file)).map_err(|e| {
            SimulationError::trace_error(format!("failed writing {}: {}", path.display(), e))
        })?;

        info!(
            path = %path.display(),
            routed = self.routing_log.len(),
            completed = self.completions.len(),
            "Trace written"
        );
        Ok(())
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Finished at: t={} minutes", self.total_ticks)
    }
}
