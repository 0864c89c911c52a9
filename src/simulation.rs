use std::time::Instant;

use log::info;
use piston_window::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::arena::{Arena, SpawnArea};
use crate::config::SimConfig;
use crate::entity::{Entity, UpdateOutcome};
use crate::error::{Result, SimError};
use crate::food::FoodPool;
use crate::gender::Gender;
use crate::spawner::{spawn_food, spawn_threats};
use crate::stats::{CollisionLog, CollisionSnapshot, PeriodTimer};
use crate::threat::Threat;

const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const QUIT_KEY: Key = Key::Q;

/// Starting corners of the male and female entity.
const MALE_START: (f64, f64) = (100.0, 100.0);
const FEMALE_START: (f64, f64) = (200.0, 200.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// The whole world: arena, agents, items, collision bookkeeping and RNG.
pub struct Simulation {
    pub config: SimConfig,
    pub arena: Arena,
    pub entities: Vec<Entity>,
    pub foods: FoodPool,
    food_area: SpawnArea,
    threats: Vec<Threat>,
    log: CollisionLog,
    timer: PeriodTimer,
    rng: StdRng,
    state: LoopState,
    frame: u64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self> {
        Self::start(config, None, Instant::now())
    }

    /// Build with a fixed set of threats instead of random ones, and a
    /// caller-supplied start time for the reporting timer.
    pub fn with_threats(config: SimConfig, threats: Vec<Threat>, now: Instant) -> Result<Self> {
        Self::start(config, Some(threats), now)
    }

    fn start(config: SimConfig, threats: Option<Vec<Threat>>, now: Instant) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let arena = Arena::new(&config.arena);
        let no_room = |what: &str| SimError::InvalidConfig(format!("no room to spawn {what}"));
        let food_area = arena.spawn_area(config.items.food_size).ok_or_else(|| no_room("food"))?;

        let threats = match threats {
            Some(threats) => threats,
            None => {
                let area = arena
                    .spawn_area(config.items.threat_size)
                    .ok_or_else(|| no_room("threats"))?;
                spawn_threats(&area, config.items.threat_count, config.items.threat_size, &mut rng)
            }
        };

        let mut foods = FoodPool::with_capacity_and_key(config.items.food_count);
        for _ in 0..config.items.food_count {
            foods.insert(spawn_food(&food_area, config.items.food_size, &mut rng));
        }

        let entities = vec![
            Entity::new(MALE_START.0, MALE_START.1, Some(Gender::Male), &config.entity, &mut rng),
            Entity::new(FEMALE_START.0, FEMALE_START.1, Some(Gender::Female), &config.entity, &mut rng),
        ];

        info!(
            "arena {}x{} with {} threats and {} food",
            arena.width,
            arena.height,
            threats.len(),
            foods.len()
        );

        Ok(Simulation {
            timer: PeriodTimer::new(config.timing.report_period, now),
            config,
            arena,
            entities,
            foods,
            food_area,
            threats,
            log: CollisionLog::default(),
            rng,
            state: LoopState::Running,
            frame: 0,
        })
    }

    pub fn threats(&self) -> &[Threat] {
        &self.threats
    }

    pub fn collisions(&self) -> &CollisionLog {
        &self.log
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn entity(&self, gender: Gender) -> Option<&Entity> {
        self.entities.iter().find(|e| e.gender == gender)
    }

    pub fn entity_mut(&mut self, gender: Gender) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.gender == gender)
    }

    pub fn stop(&mut self) {
        if self.is_running() {
            info!("stopping after {} frames", self.frame);
        }
        self.state = LoopState::Stopped;
    }

    pub fn handle_key(&mut self, key: Key) {
        if key == QUIT_KEY {
            self.stop();
        }
    }

    /// Update every entity once, in order. Eaten food is replaced before the
    /// next entity moves.
    pub fn step(&mut self) -> Vec<UpdateOutcome> {
        self.frame += 1;
        let mut outcomes = Vec::with_capacity(self.entities.len());
        for entity in &mut self.entities {
            let outcome = entity.update(
                &self.arena,
                &mut self.foods,
                &self.threats,
                &self.config,
                &mut self.rng,
            );
            if outcome.ate_food {
                self.foods.insert(spawn_food(
                    &self.food_area,
                    self.config.items.food_size,
                    &mut self.rng,
                ));
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Record a snapshot if a full reporting period has passed by `now`,
    /// then zero every collision counter.
    pub fn poll_snapshot(&mut self, now: Instant) -> Option<CollisionSnapshot> {
        if !self.timer.poll(now) {
            return None;
        }
        let count = |gender: Gender| -> u32 {
            self.entities
                .iter()
                .filter(|e| e.gender == gender)
                .map(|e| e.collision_count)
                .sum()
        };
        let snapshot = self.log.record(count(Gender::Male), count(Gender::Female));
        for entity in &mut self.entities {
            entity.collision_count = 0;
        }
        info!(
            "period {}: male {} collisions, female {} collisions",
            snapshot.period, snapshot.male_collisions, snapshot.female_collisions
        );
        Some(snapshot)
    }

    /// One loop iteration minus input and drawing.
    pub fn tick(&mut self, now: Instant) -> Option<CollisionSnapshot> {
        if !self.is_running() {
            return None;
        }
        self.step();
        self.poll_snapshot(now)
    }

    pub fn draw(&self, transform: math::Matrix2d, g: &mut G2d) {
        clear(BACKGROUND_COLOR, g);
        self.arena.draw(transform, g);
        for entity in &self.entities {
            entity.draw(transform, g);
        }
        for food in self.foods.values() {
            food.draw(transform, g);
        }
        for threat in &self.threats {
            threat.draw(transform, g);
        }
    }

    pub fn into_log(self) -> CollisionLog {
        self.log
    }
}
