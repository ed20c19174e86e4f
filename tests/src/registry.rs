#![cfg(test)]
use std::collections::HashSet;
use std::sync::Barrier;
use std::thread;

use rand::Rng;
use rand::seq::SliceRandom;
use rego_core::Registry;
use rego_core::sources::MemorySource;

use crate::fixtures::{regos_csv, spec_line, specs_csv, vehicle};

const THREADS: usize = 8;

fn seeded(vehicle_ids: &[String]) -> Registry {
    let lines: Vec<String> = vehicle_ids
        .iter()
        .map(|id| spec_line(id, "Toyota", "Yaris", "2016"))
        .collect();
    let (registry, report) = Registry::bootstrap(
        &MemorySource::new("specs", specs_csv(&lines)),
        &MemorySource::new("regos", regos_csv(&[])),
    );
    assert!(report.is_clean());
    registry
}

#[test]
fn distinct_vehicles_register_in_parallel() {
    const PER_THREAD: usize = 250;
    let registry = Registry::new();

    thread::scope(|s| {
        for t in 0..THREADS {
            let registry = &registry;
            s.spawn(move || {
                for i in 0..PER_THREAD {
                    let id = format!("{t}-{i}");
                    assert!(registry.register(&format!("R{id}"), vehicle(&id)).is_ok());
                }
            });
        }
    });

    assert_eq!(registry.registration_count(), THREADS * PER_THREAD);
    assert_eq!(registry.vehicle_count(), THREADS * PER_THREAD);
    assert_eq!(registry.get("R3-17").unwrap().id(), "3-17");
}

#[test]
fn each_round_has_exactly_one_winner() {
    const ROUNDS: usize = 50;
    let ids: Vec<String> = (0..ROUNDS).map(|round| format!("V{round}")).collect();
    let registry = seeded(&ids);
    let barrier = Barrier::new(THREADS);

    let winners: Vec<Vec<String>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let (registry, barrier, ids) = (&registry, &barrier, &ids);
                s.spawn(move || {
                    let mut won = Vec::new();
                    for id in ids {
                        barrier.wait();
                        let registration = format!("T{t}-{id}");
                        if registry.register_existing(&registration, id).is_ok() {
                            won.push(registration);
                        }
                    }
                    won
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let all: Vec<&String> = winners.iter().flatten().collect();
    assert_eq!(all.len(), ROUNDS);
    for id in &ids {
        let registration = registry.registration_of(id).expect("every vehicle has a winner");
        assert!(all.contains(&&registration));
    }
}

#[test]
fn random_churn_never_double_binds() {
    const POOL: usize = 6;
    const OPS: usize = 400;
    let ids: Vec<String> = (0..POOL).map(|i| format!("P{i}")).collect();
    let registry = seeded(&ids);

    thread::scope(|s| {
        for t in 0..THREADS {
            let (registry, ids) = (&registry, &ids);
            s.spawn(move || {
                let mut rng = rand::rng();
                let mut mine: Vec<String> = Vec::new();
                for op in 0..OPS {
                    if !mine.is_empty() && rng.random_bool(0.4) {
                        mine.shuffle(&mut rng);
                        if let Some(registration) = mine.pop() {
                            registry.remove(&registration);
                        }
                    } else {
                        let id = &ids[rng.random_range(0..POOL)];
                        let registration = format!("T{t}-{op}");
                        if registry.register_existing(&registration, id).is_ok() {
                            mine.push(registration);
                        }
                    }
                }
            });
        }
    });

    let mut bound = HashSet::new();
    for id in &ids {
        assert!(registry.get_by_vehicle_id(id).is_some(), "records survive churn");
        if let Some(registration) = registry.registration_of(id) {
            let car = registry.get(&registration).expect("binding resolves");
            assert_eq!(car.id(), id.as_str());
            assert!(bound.insert(id.clone()));
        }
    }
    assert_eq!(registry.registration_count(), bound.len());
}

#[test]
fn readers_survive_a_concurrent_reset() {
    let ids: Vec<String> = (0..100).map(|i| i.to_string()).collect();
    let registry = seeded(&ids);
    for id in &ids {
        registry.register_existing(&format!("R{id}"), id).unwrap();
    }

    thread::scope(|s| {
        for _ in 0..THREADS {
            let (registry, ids) = (&registry, &ids);
            s.spawn(move || {
                for id in ids {
                    if let Some(car) = registry.get(&format!("R{id}")) {
                        assert_eq!(car.id(), id.as_str());
                    }
                }
            });
        }
        s.spawn(|| registry.reset());
    });

    assert_eq!(registry.registration_count(), 0);
    assert_eq!(registry.vehicle_count(), 0);
}
