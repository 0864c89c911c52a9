//! Integration tests for the arena simulation

use std::time::{Duration, Instant};

use entity_evolution::food::Food;
use entity_evolution::gender::Gender;
use entity_evolution::threat::Threat;
use entity_evolution::{SimConfig, Simulation};
use proptest::prelude::*;

fn quiet_config(seed: u64) -> SimConfig {
    let mut config = SimConfig {
        seed: Some(seed),
        ..SimConfig::default()
    };
    config.entity.change_direction_prob = 0.0;
    config
}

#[test]
fn threat_on_start_square_is_hit_and_bounced() {
    let mut config = quiet_config(1);
    config.items.food_count = 0;
    let threat = Threat::new(100, 100, 20.0);
    let mut sim = Simulation::with_threats(config, vec![threat.clone()], Instant::now()).unwrap();

    sim.step();

    let male = sim.entity(Gender::Male).unwrap();
    assert_eq!(male.energy, 4);
    assert_eq!(male.collision_count, 1);
    assert_eq!(male.encounters(threat.location()), 1);
    assert!(!male.rect().overlaps(&threat.rect()));

    let female = sim.entity(Gender::Female).unwrap();
    assert_eq!(female.collision_count, 0);
    assert_eq!(female.energy, 5);
}

#[test]
fn one_quiet_period_gives_one_zero_snapshot() {
    let start = Instant::now();
    let mut sim = Simulation::with_threats(quiet_config(2), vec![], start).unwrap();

    let mut snapshots = Vec::new();
    for frame in 1..=900u64 {
        let now = start + Duration::from_millis(frame * 1000 / 30);
        snapshots.extend(sim.tick(now));
    }

    assert_eq!(sim.frame(), 900);
    assert_eq!(snapshots.len(), 1);
    let log = sim.collisions().snapshots();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].period, 1);
    assert_eq!(log[0].male_collisions, 0);
    assert_eq!(log[0].female_collisions, 0);
}

#[test]
fn short_run_records_nothing() {
    let start = Instant::now();
    let mut sim = Simulation::new(quiet_config(3)).unwrap();
    for frame in 1..=100u64 {
        sim.tick(start + Duration::from_millis(frame * 10));
    }
    assert!(sim.into_log().is_empty());
}

#[test]
fn eating_raises_energy_and_keeps_food_count() {
    let mut config = quiet_config(4);
    config.items.food_count = 3;
    let mut sim = Simulation::with_threats(config, vec![], Instant::now()).unwrap();

    let male = sim.entity_mut(Gender::Male).unwrap();
    male.vx = 5.0;
    male.vy = 5.0;
    sim.foods.clear();
    sim.foods.insert(Food::new(108.0, 108.0, 10.0));
    sim.foods.insert(Food::new(600.0, 400.0, 10.0));
    sim.foods.insert(Food::new(700.0, 500.0, 10.0));

    sim.step();

    assert_eq!(sim.entity(Gender::Male).unwrap().energy, 7);
    assert_eq!(sim.foods.len(), 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn world_invariants_hold(seed in any::<u64>()) {
        let config = SimConfig { seed: Some(seed), ..SimConfig::default() };
        let food_count = config.items.food_count;
        let mut sim = Simulation::new(config).unwrap();
        let threats_at_start = sim.threats().to_vec();

        for _ in 0..600 {
            sim.step();
            for entity in &sim.entities {
                prop_assert!(sim.arena.contains(&entity.rect()), "escaped: {:?}", entity.rect());
            }
            prop_assert_eq!(sim.foods.len(), food_count);
        }

        prop_assert_eq!(sim.threats(), threats_at_start.as_slice());
        for entity in &sim.entities {
            let known: Vec<_> = threats_at_start.iter().map(|t| t.location()).collect();
            prop_assert!(entity.avoid_threats.keys().all(|loc| known.contains(loc)));
        }
    }
}
