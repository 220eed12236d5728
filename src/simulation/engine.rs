//! Minute-by-minute simulation loop
//!
//! Each minute runs two phases, in this order:
//!
//! 1. **Routing**: customers arriving this minute are ordered and sent to registers.
//! 2. **Serving**: every register, lowest index first, serves its current customer
//!    for one minute.
//!
//! Then the clock advances. The run ends at the first minute boundary where no
//! customer is waiting to arrive, standing in line or being served; the clock
//! value at that point is the reported total time.

use crate::checkout::{route, ArrivalSchedule, Customer, Register};
use crate::input::Workload;
use crate::simulation::{CompletionRecord, RoutingDecision, SimulationReport};
use crate::types::{CustomerId, Tick};
use crate::{perf_span, sim_event};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use tracing::{debug, info, instrument, warn};

/// Everything the loop mutates: registers, arrivals, pending customers and the clock
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Registers in index order; never empty
    registers: Vec<Register>,
    /// Customers who have not arrived yet
    arrivals: ArrivalSchedule,
    /// Customers who have not finished checkout
    pending: BTreeSet<CustomerId>,
    /// Current minute
    tick: Tick,
}

impl SimulationState {
    /// Set up a store with `register_count` registers and the given customers
    pub fn new(register_count: NonZeroUsize, customers: Vec<Customer>) -> Self {
        let pending = customers.iter().map(|customer| customer.id).collect();
        Self {
            registers: Register::build_store(register_count.get()),
            arrivals: ArrivalSchedule::new(customers),
            pending,
            tick: 0,
        }
    }

    /// Registers in index order
    pub fn registers(&self) -> &[Register] {
        &self.registers
    }

    /// Current minute
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Number of customers who have not finished checkout
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether a customer has not finished checkout yet
    pub fn is_pending(&self, customer: CustomerId) -> bool {
        self.pending.contains(&customer)
    }

    /// Number of customers who have not arrived yet
    pub fn not_arrived_count(&self) -> usize {
        self.arrivals.len()
    }

    /// Whether every customer has finished
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}

/// What happened during one minute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The minute that was simulated
    pub tick: Tick,
    /// Customers routed to a register
    pub routed: usize,
    /// Customers who finished checkout
    pub completed: usize,
}

/// Drives a [`SimulationState`] to completion and records what happened
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    state: SimulationState,
    customer_count: usize,
    routing_log: Vec<RoutingDecision>,
    completions: Vec<CompletionRecord>,
}

impl SimulationEngine {
    /// Create an engine for a validated workload
    pub fn new(workload: &Workload) -> Self {
        Self::from_customers(workload.register_count(), workload.to_customers())
    }

    /// Create an engine from customers built elsewhere
    pub fn from_customers(register_count: NonZeroUsize, customers: Vec<Customer>) -> Self {
        let state = SimulationState::new(register_count, customers);
        let customer_count = state.pending_count();
        Self {
            state,
            customer_count,
            routing_log: Vec::with_capacity(customer_count),
            completions: Vec::with_capacity(customer_count),
        }
    }

    /// Current simulation state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Routing decisions made so far
    pub fn routing_log(&self) -> &[RoutingDecision] {
        &self.routing_log
    }

    /// Completions recorded so far
    pub fn completions(&self) -> &[CompletionRecord] {
        &self.completions
    }

    /// Whether every customer has finished
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Simulate one minute: route this minute's arrivals, serve every register,
    /// then advance the clock
    pub fn step(&mut self) -> TickOutcome {
        let tick = self.state.tick;
        let routed = self.route_arrivals(tick);
        let completed = self.serve_registers(tick);
        self.state.tick += 1;

        TickOutcome { tick, routed, completed }
    }

    /// Run until every customer has finished and report the elapsed time
    #[instrument(skip(self), fields(customers = self.customer_count, registers = self.state.registers.len()))]
    pub fn run(mut self) -> SimulationReport {
        let span = perf_span!("simulation_loop", customers = self.customer_count);
        let _entered = span.enter();

        info!("Starting simulation");
        while !self.is_finished() {
            let outcome = self.step();
            if outcome.routed > 0 || outcome.completed > 0 {
                debug!(
                    tick = outcome.tick,
                    routed = outcome.routed,
                    completed = outcome.completed,
                    pending = self.state.pending_count(),
                    "Minute simulated"
                );
            }
        }

        let report = SimulationReport {
            total_ticks: self.state.tick,
            customers_served: self.completions.len(),
            routing_log: self.routing_log,
            completions: self.completions,
        };

        if report.customers_served != self.customer_count {
            warn!(
                served = report.customers_served,
                expected = self.customer_count,
                "Served customer count differs from input"
            );
        }
        info!(total_ticks = report.total_ticks, served = report.customers_served, "Simulation finished");
        report
    }

    fn route_arrivals(&mut self, tick: Tick) -> usize {
        let arriving = self.state.arrivals.take(tick);
        let count = arriving.len();

        for customer in arriving {
            let customer_id = customer.id;
            let customer_type = customer.customer_type;

            // Built from a non-zero count, so routing always finds a register
            let outcome = route(customer, &mut self.state.registers);

            debug!(
                tick,
                customer = %customer_id,
                customer_type = %customer_type,
                register = %outcome.register,
                became_busy = outcome.became_busy,
                "Customer routed"
            );
            self.routing_log.push(RoutingDecision {
                tick,
                customer: customer_id,
                customer_type,
                register: outcome.register,
                became_busy: outcome.became_busy,
            });
        }

        count
    }

    fn serve_registers(&mut self, tick: Tick) -> usize {
        let mut completed = 0;

        for register in &mut self.state.registers {
            let Some(done) = register.serve() else {
                continue;
            };

            self.state.pending.remove(&done.id);
            completed += 1;

            sim_event!(
                debug,
                "Customer finished",
                tick = tick,
                customer = done.id.0,
                register = register.id().0,
                arrival = done.arrival,
            );
            self.completions.push(CompletionRecord {
                tick,
                customer: done.id,
                register: register.id(),
                arrival: done.arrival,
            });
        }

        completed
    }
}
