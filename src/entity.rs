use std::collections::HashMap;

use log::debug;
use piston_window::*;
use rand::Rng;

use crate::arena::{Aabb, Arena};
use crate::config::{EntityConfig, SimConfig};
use crate::food::FoodPool;
use crate::gender::Gender;
use crate::threat::{Location, Threat};

/// What happened to an entity during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub ate_food: bool,
    pub threat_hit: Option<Location>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub energy: i32,
    pub gender: Gender,
    /// Collisions per threat location, never cleared.
    pub avoid_threats: HashMap<Location, u32>,
    /// Collisions since the last snapshot.
    pub collision_count: u32,
}

fn random_component(speed: f64, rng: &mut impl Rng) -> f64 {
    if rng.random_bool(0.5) { speed } else { -speed }
}

impl Entity {
    /// A gender of `None` is picked at random.
    pub fn new(
        x: f64,
        y: f64,
        gender: Option<Gender>,
        config: &EntityConfig,
        rng: &mut impl Rng,
    ) -> Self {
        Entity {
            x,
            y,
            vx: random_component(config.speed, rng),
            vy: random_component(config.speed, rng),
            size: config.size,
            energy: config.initial_energy,
            gender: gender.unwrap_or_else(|| Gender::random(rng)),
            avoid_threats: HashMap::new(),
            collision_count: 0,
        }
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }

    /// Encounter count remembered for a threat location.
    pub fn encounters(&self, location: Location) -> u32 {
        self.avoid_threats.get(&location).copied().unwrap_or(0)
    }

    /// Advance one frame: wander, move, bounce, eat (remove) at most one food item,
    /// hit at most one threat, then steer away from remembered threats.
    pub fn update(
        &mut self,
        arena: &Arena,
        foods: &mut FoodPool,
        threats: &[Threat],
        config: &SimConfig,
        rng: &mut impl Rng,
    ) -> UpdateOutcome {
        let mut outcome = UpdateOutcome::default();
        let speed = config.entity.speed;

        if rng.random_range(0.0..1.0) < config.entity.change_direction_prob {
            self.vx = random_component(speed, rng);
            self.vy = random_component(speed, rng);
        }

        self.x += self.vx;
        self.y += self.vy;
        self.bounce_off_walls(arena);

        let rect = self.rect();
        let eaten = foods
            .iter()
            .find(|(_, food)| rect.overlaps(&food.rect()))
            .map(|(id, _)| id);
        if let Some(id) = eaten {
            foods.remove(id);
            self.energy += config.entity.food_gain;
            outcome.ate_food = true;
            debug!("{} entity ate food, energy now {}", self.gender, self.energy);
        }

        if let Some(threat) = threats.iter().find(|t| rect.overlaps(&t.rect())) {
            let location = threat.location();
            self.energy -= config.entity.threat_penalty;
            self.collision_count += 1;
            let seen = self.avoid_threats.entry(location).or_insert(0);
            *seen += 1;
            debug!(
                "{} entity hit threat at ({}, {}), encounters {}, energy {}",
                self.gender, location.x, location.y, seen, self.energy
            );
            self.bounce_from_threat(threat, arena);
            outcome.threat_hit = Some(location);
        }

        self.avoid_nearby_threats(threats, &config.entity);
        outcome
    }

    /// Snap back inside the border, reversing velocity on each axis that hit.
    pub fn bounce_off_walls(&mut self, arena: &Arena) {
        let mut rect = self.rect();
        let hit = arena.clamp(&mut rect);
        self.x = rect.x;
        self.y = rect.y;
        if hit.x {
            self.vx = -self.vx;
        }
        if hit.y {
            self.vy = -self.vy;
        }
    }

    /// Push out of `threat` against the direction of travel, one axis at a time.
    pub fn bounce_from_threat(&mut self, threat: &Threat, arena: &Arena) {
        let t = threat.rect();
        let r = self.rect();

        if r.right() > t.left() && self.vx > 0.0 {
            self.x = t.left() - self.size;
            self.vx = -self.vx;
        } else if r.left() < t.right() && self.vx < 0.0 {
            self.x = t.right();
            self.vx = -self.vx;
        }

        if r.bottom() > t.top() && self.vy > 0.0 {
            self.y = t.top() - self.size;
            self.vy = -self.vy;
        } else if r.top() < t.bottom() && self.vy < 0.0 {
            self.y = t.bottom();
            self.vy = -self.vy;
        }

        self.bounce_off_walls(arena);
    }

    /// Steer directly away from any remembered threat inside the avoidance
    /// radius. The last qualifying threat decides the velocity.
    pub fn avoid_nearby_threats(&mut self, threats: &[Threat], config: &EntityConfig) {
        let [cx, cy] = self.rect().center();
        for threat in threats {
            let [tx, ty] = threat.rect().center();
            let (dx, dy) = (cx - tx, cy - ty);
            let distance = dx.hypot(dy);
            if distance >= config.avoidance_radius {
                continue;
            }
            let strength = self.encounters(threat.location());
            // Concentric boxes give no direction to flee in.
            if strength > 0 && distance > 0.0 {
                let magnitude = config.speed + 2.0 * strength as f64;
                self.vx = dx / distance * magnitude;
                self.vy = dy / distance * magnitude;
            }
        }
    }

    pub fn draw(&self, transform: math::Matrix2d, g: &mut G2d) {
        rectangle(self.gender.color(), self.rect().as_rect(), transform, g);
    }
}
