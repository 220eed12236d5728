//! Invariant checks over whole simulation runs
//!
//! Workloads are generated deterministically from a small linear congruential
//! sequence so every run is reproducible.

use grocery_checkout_simulator::checkout::Register;
use grocery_checkout_simulator::input::Workload;
use grocery_checkout_simulator::simulation::SimulationEngine;
use grocery_checkout_simulator::types::{CustomerId, CustomerType, RegisterId, Tick};
use std::collections::{HashMap, HashSet};

/// Deterministic pseudo-random workload
fn generated_workload(seed: u64, registers: usize, customers: usize) -> Workload {
    let mut state = seed;
    let mut next = move |bound: u64| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    let triples: Vec<(CustomerType, Tick, u32)> = (0..customers)
        .map(|_| {
            let customer_type = if next(2) == 0 { CustomerType::A } else { CustomerType::B };
            let arrival = next(20);
            let items = next(8) as u32 + 1;
            (customer_type, arrival, items)
        })
        .collect();

    Workload::from_triples(registers, &triples).unwrap()
}

fn workloads() -> Vec<Workload> {
    let mut all = Vec::new();
    for seed in 1..=12u64 {
        for registers in 1..=4usize {
            all.push(generated_workload(seed * 31 + registers as u64, registers, 25));
        }
    }
    all
}

/// Snapshot of every line: register id and (customer, remaining half items) per position
fn snapshot(registers: &[Register]) -> Vec<(RegisterId, Vec<(CustomerId, u64)>)> {
    registers
        .iter()
        .map(|register| {
            let line = register.queue().map(|c| (c.id, c.remaining_half_items())).collect();
            (register.id(), line)
        })
        .collect()
}

#[test]
fn test_every_customer_served_exactly_once() {
    for workload in workloads() {
        let expected = workload.customers().len();
        let report = SimulationEngine::new(&workload).run();

        assert_eq!(report.customers_served, expected);
        assert_eq!(report.routing_log.len(), expected);

        let finished: HashSet<CustomerId> = report.completions.iter().map(|c| c.customer).collect();
        assert_eq!(finished.len(), expected, "a customer finished twice");

        let routed: HashSet<CustomerId> = report.routing_log.iter().map(|d| d.customer).collect();
        assert_eq!(routed, finished);
    }
}

#[test]
fn test_total_time_is_one_past_last_completion() {
    for workload in workloads() {
        let report = SimulationEngine::new(&workload).run();
        let last = report.completions.iter().map(|c| c.tick).max().unwrap();
        assert_eq!(report.total_ticks, last + 1);
    }
}

#[test]
fn test_customers_finish_at_the_register_they_joined() {
    for workload in workloads() {
        let report = SimulationEngine::new(&workload).run();
        for completion in &report.completions {
            assert_eq!(report.register_for(completion.customer), Some(completion.register));
            assert!(completion.tick >= completion.arrival);
        }
    }
}

#[test]
fn test_remaining_items_never_increase() {
    for workload in workloads() {
        let mut engine = SimulationEngine::new(&workload);
        let mut last_seen: HashMap<CustomerId, u64> = HashMap::new();
        let mut finished: HashSet<CustomerId> = HashSet::new();

        while !engine.is_finished() {
            engine.step();

            for register in engine.state().registers() {
                for customer in register.queue() {
                    assert!(!finished.contains(&customer.id), "finished customer still in line");
                    assert!(customer.remaining_half_items() > 0, "empty customer still in line");
                    if let Some(previous) = last_seen.insert(customer.id, customer.remaining_half_items()) {
                        assert!(customer.remaining_half_items() <= previous);
                    }
                }
            }
            for completion in engine.completions() {
                finished.insert(completion.customer);
                assert!(!engine.state().is_pending(completion.customer));
            }
        }
    }
}

#[test]
fn test_registers_idle_exactly_when_line_empty() {
    for workload in workloads() {
        let mut engine = SimulationEngine::new(&workload);
        while !engine.is_finished() {
            engine.step();
            for register in engine.state().registers() {
                assert_eq!(register.is_available(), register.queue_len() == 0);
                assert_eq!(register.is_available(), register.current_customer().is_none());
            }
        }
    }
}

/// Replays the run one minute at a time and checks each routing decision
/// against the line lengths it saw
#[test]
fn test_type_a_joins_a_shortest_line() {
    for workload in workloads() {
        let mut engine = SimulationEngine::new(&workload);

        while !engine.is_finished() {
            let mut lines: HashMap<RegisterId, usize> =
                engine.state().registers().iter().map(|r| (r.id(), r.queue_len())).collect();
            let already_logged = engine.routing_log().len();

            engine.step();

            for decision in &engine.routing_log()[already_logged..] {
                if decision.customer_type == CustomerType::A {
                    let chosen = lines[&decision.register];
                    for (register, length) in &lines {
                        assert!(chosen <= *length, "type A skipped a shorter line");
                        if chosen == *length {
                            assert!(decision.register <= *register, "tie not broken by index");
                        }
                    }
                }
                *lines.entry(decision.register).or_default() += 1;
            }
        }
    }
}

#[test]
fn test_type_b_takes_lowest_idle_register() {
    for workload in workloads() {
        let mut engine = SimulationEngine::new(&workload);

        while !engine.is_finished() {
            let mut idle: Vec<RegisterId> = engine
                .state()
                .registers()
                .iter()
                .filter(|r| r.is_available())
                .map(|r| r.id())
                .collect();
            let already_logged = engine.routing_log().len();

            engine.step();

            for decision in &engine.routing_log()[already_logged..] {
                if decision.customer_type == CustomerType::B {
                    match idle.iter().min() {
                        Some(&lowest) => {
                            assert_eq!(decision.register, lowest);
                            assert!(decision.became_busy);
                        }
                        None => assert!(!decision.became_busy),
                    }
                }
                idle.retain(|register| *register != decision.register);
            }
        }
    }
}

#[test]
fn test_training_register_takes_twice_as_long() {
    for items in [2u32, 4, 6, 10, 20] {
        let normal = Workload::from_triples(2, &[(CustomerType::A, 0, items)]).unwrap();
        let normal = SimulationEngine::new(&normal).run();
        assert_eq!(normal.register_for(CustomerId(0)), Some(RegisterId(1)));

        let training = Workload::from_triples(1, &[(CustomerType::A, 0, items)]).unwrap();
        let training = SimulationEngine::new(&training).run();
        assert_eq!(training.register_for(CustomerId(0)), Some(RegisterId(1)));

        assert_eq!(normal.total_ticks, Tick::from(items));
        assert_eq!(training.total_ticks, 2 * normal.total_ticks);
    }
}

#[test]
fn test_runs_are_deterministic() {
    for workload in workloads() {
        let first = SimulationEngine::new(&workload).run();
        let second = SimulationEngine::new(&workload).run();

        assert_eq!(first.total_ticks, second.total_ticks);
        assert_eq!(first.routing_log, second.routing_log);
        assert_eq!(first, second);
    }
}

#[test]
fn test_lines_only_grow_by_routing() {
    for workload in workloads().into_iter().take(8) {
        let mut engine = SimulationEngine::new(&workload);
        while !engine.is_finished() {
            let before = snapshot(engine.state().registers());
            let outcome = engine.step();
            let after = snapshot(engine.state().registers());

            let before_total: usize = before.iter().map(|(_, line)| line.len()).sum();
            let after_total: usize = after.iter().map(|(_, line)| line.len()).sum();
            assert_eq!(after_total + outcome.completed, before_total + outcome.routed);
        }
    }
}
