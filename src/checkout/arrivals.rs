//! Arrival index and same-minute ordering
//!
//! Customers are grouped by arrival minute once at start-up. When a minute
//! comes up, its group is handed to routing in a fixed order: fewest items
//! first, then type `A` before type `B`, then input order.

use crate::checkout::Customer;
use crate::types::Tick;
use std::collections::BTreeMap;

/// Order customers who arrive in the same minute
///
/// The sort is stable, so customers with equal items and type keep the order
/// they were given in.
pub fn order_arrivals(customers: &mut [Customer]) {
    customers.sort_by_key(|customer| (customer.remaining_half_items(), customer.customer_type));
}

/// Customers not yet routed, keyed by arrival minute
#[derive(Debug, Clone, Default)]
pub struct ArrivalSchedule {
    by_tick: BTreeMap<Tick, Vec<Customer>>,
}

impl ArrivalSchedule {
    /// Index customers by arrival minute, keeping input order within a minute
    pub fn new(customers: impl IntoIterator<Item = Customer>) -> Self {
        let mut by_tick: BTreeMap<Tick, Vec<Customer>> = BTreeMap::new();
        for customer in customers {
            by_tick.entry(customer.arrival).or_default().push(customer);
        }
        Self { by_tick }
    }

    /// Remove and return the customers arriving at `tick`, in routing order
    pub fn take(&mut self, tick: Tick) -> Vec<Customer> {
        let mut arriving = self.by_tick.remove(&tick).unwrap_or_default();
        order_arrivals(&mut arriving);
        arriving
    }

    /// Earliest minute with customers still to arrive
    pub fn next_arrival(&self) -> Option<Tick> {
        self.by_tick.keys().next().copied()
    }

    /// Number of customers still to arrive
    pub fn len(&self) -> usize {
        self.by_tick.values().map(Vec::len).sum()
    }

    /// Whether every customer has arrived
    pub fn is_empty(&self) -> bool {
        self.by_tick.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomerId, CustomerType};

    fn customer(id: usize, customer_type: CustomerType, arrival: Tick, items: u32) -> Customer {
        Customer::new(CustomerId(id), customer_type, arrival, items)
    }

    #[test]
    fn test_order_by_items_then_type() {
        let mut arriving = vec![
            customer(0, CustomerType::B, 0, 5),
            customer(1, CustomerType::B, 0, 3),
            customer(2, CustomerType::A, 0, 3),
            customer(3, CustomerType::A, 0, 1),
        ];

        order_arrivals(&mut arriving);

        let ids: Vec<usize> = arriving.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_order_keeps_input_order_on_ties() {
        let mut arriving = vec![
            customer(0, CustomerType::A, 0, 2),
            customer(1, CustomerType::A, 0, 2),
            customer(2, CustomerType::A, 0, 2),
        ];

        order_arrivals(&mut arriving);

        let ids: Vec<usize> = arriving.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_order_distinguishes_huge_item_counts() {
        let mut arriving = vec![
            customer(0, CustomerType::A, 0, 4_000_000_000),
            customer(1, CustomerType::B, 0, 3_000_000_000),
            customer(2, CustomerType::A, 0, u32::MAX),
        ];

        order_arrivals(&mut arriving);

        let ids: Vec<usize> = arriving.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 0, 2]);
    }

    #[test]
    fn test_schedule_groups_by_minute() {
        let mut schedule = ArrivalSchedule::new(vec![
            customer(0, CustomerType::A, 2, 4),
            customer(1, CustomerType::B, 0, 1),
            customer(2, CustomerType::A, 2, 1),
        ]);

        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.next_arrival(), Some(0));

        assert_eq!(schedule.take(0).len(), 1);
        assert!(schedule.take(1).is_empty());

        let at_two: Vec<usize> = schedule.take(2).iter().map(|c| c.id.0).collect();
        assert_eq!(at_two, vec![2, 0]);
        assert!(schedule.is_empty());
        assert_eq!(schedule.next_arrival(), None);
    }
}
