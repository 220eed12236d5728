//! Register model and service step
//!
//! Each register exclusively owns its line of customers. The head of the line
//! is the customer being served; a register is available exactly when its line
//! is empty.

use crate::checkout::Customer;
use crate::types::{RegisterId, RegisterKind};
use std::collections::VecDeque;
use tracing::trace;

/// A checkout register and the customers lined up at it
#[derive(Debug, Clone)]
pub struct Register {
    id: RegisterId,
    kind: RegisterKind,
    queue: VecDeque<Customer>,
}

impl Register {
    /// Create an idle register
    pub fn new(id: RegisterId, kind: RegisterKind) -> Self {
        Self { id, kind, queue: VecDeque::new() }
    }

    /// Build the registers for a store with `count` registers
    ///
    /// Registers `1..count` are normal; register `count` is the training
    /// register. A single-register store has only the training register.
    pub fn build_store(count: usize) -> Vec<Register> {
        (1..=count)
            .map(|index| {
                let kind = if index == count { RegisterKind::Training } else { RegisterKind::Normal };
                Register::new(RegisterId(index), kind)
            })
            .collect()
    }

    /// 1-based register index
    pub fn id(&self) -> RegisterId {
        self.id
    }

    /// Speed class
    pub fn kind(&self) -> RegisterKind {
        self.kind
    }

    /// Whether this register is staffed by a trainee
    pub fn is_training(&self) -> bool {
        self.kind.is_training()
    }

    /// Whether no customer is currently being served
    pub fn is_available(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of customers in line, including the one being served
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// The customer being served, if any
    pub fn current_customer(&self) -> Option<&Customer> {
        self.queue.front()
    }

    /// The customer at the back of the line, if any
    pub fn last_in_line(&self) -> Option<&Customer> {
        self.queue.back()
    }

    /// Customers in line, front first
    pub fn queue(&self) -> impl Iterator<Item = &Customer> {
        self.queue.iter()
    }

    /// Put a customer at the back of the line
    ///
    /// Returns `true` when the register was available, i.e. the customer goes
    /// straight to the cashier and the register becomes busy.
    pub fn enqueue(&mut self, customer: Customer) -> bool {
        let became_busy = self.is_available();
        self.queue.push_back(customer);
        became_busy
    }

    /// Serve the current customer for one minute
    ///
    /// Does nothing on an available register. When the current customer's
    /// items reach exactly zero, the customer leaves the line and is returned;
    /// the next customer in line (if any) becomes current.
    pub fn serve(&mut self) -> Option<Customer> {
        let rate = self.kind.half_items_per_tick();
        let current = self.queue.front_mut()?;
        current.check_out(rate);

        trace!(
            register = %self.id,
            customer = %current.id,
            remaining_items = current.remaining_items(),
            "Served one minute"
        );

        if current.is_done() {
            self.queue.pop_front()
        } else {
            None
        }
    }
}
