//! Simulation parameters.
//!
//! Everything is built in code; the defaults reproduce the reference arena.

use std::time::Duration;

use crate::arena::Arena;
use crate::error::{Result, SimError};

/// Top-level configuration passed to [`crate::Simulation::new`].
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    pub arena: ArenaConfig,
    pub entity: EntityConfig,
    pub items: ItemConfig,
    pub timing: TimingConfig,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Window and border geometry.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    /// Border thickness, also the inset every item is kept behind.
    pub border: f64,
}

/// Entity movement, energy and avoidance.
#[derive(Debug, Clone)]
pub struct EntityConfig {
    pub size: f64,
    pub speed: f64,
    pub initial_energy: i32,
    /// Energy added per food eaten.
    pub food_gain: i32,
    /// Energy removed per threat collision.
    pub threat_penalty: i32,
    /// Chance per frame to re-roll both velocity components.
    pub change_direction_prob: f64,
    /// Center-to-center distance under which remembered threats are avoided.
    pub avoidance_radius: f64,
}

/// Food and threat sizes and counts.
#[derive(Debug, Clone)]
pub struct ItemConfig {
    pub food_size: f64,
    pub food_count: usize,
    pub threat_size: f64,
    pub threat_count: usize,
}

#[derive(Debug, Clone)]
pub struct TimingConfig {
    /// Loop iterations per second.
    pub frame_rate: u64,
    /// Wall-clock length of one collision reporting period.
    pub report_period: Duration,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            border: 5.0,
        }
    }
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            size: 20.0,
            speed: 5.0,
            initial_energy: 5,
            food_gain: 2,
            threat_penalty: 1,
            change_direction_prob: 0.01,
            avoidance_radius: 40.0,
        }
    }
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            food_size: 10.0,
            food_count: 10,
            threat_size: 20.0,
            threat_count: 6,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30,
            report_period: Duration::from_secs(30),
        }
    }
}

impl SimConfig {
    /// Reject parameter combinations the spawner or the wall clamp cannot honor.
    pub fn validate(&self) -> Result<()> {
        let a = &self.arena;
        if a.border < 0.0 {
            return Err(SimError::InvalidConfig("border must not be negative".into()));
        }
        for (name, size) in [
            ("entity", self.entity.size),
            ("food", self.items.food_size),
            ("threat", self.items.threat_size),
        ] {
            if size <= 0.0 {
                return Err(SimError::InvalidConfig(format!("{name} size must be > 0")));
            }
            if size + 2.0 * a.border > a.width || size + 2.0 * a.border > a.height {
                return Err(SimError::InvalidConfig(format!(
                    "{name} size {size} does not fit inside a {}x{} arena with border {}",
                    a.width, a.height, a.border
                )));
            }
        }
        let arena = Arena::new(a);
        for (name, size) in [("food", self.items.food_size), ("threat", self.items.threat_size)] {
            if arena.spawn_area(size).is_none() {
                return Err(SimError::InvalidConfig(format!(
                    "no whole-number spawn position fits a {name} of size {size} inside border {}",
                    a.border
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.entity.change_direction_prob) {
            return Err(SimError::InvalidConfig(
                "change_direction_prob must be within [0, 1]".into(),
            ));
        }
        if self.timing.frame_rate == 0 {
            return Err(SimError::InvalidConfig("frame_rate must be > 0".into()));
        }
        if self.timing.report_period.is_zero() {
            return Err(SimError::InvalidConfig("report_period must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn entity_larger_than_arena_is_rejected() {
        let mut config = SimConfig::default();
        config.entity.size = 600.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(msg) if msg.contains("entity")));
    }

    #[test]
    fn fractional_border_without_whole_spawn_position_is_rejected() {
        let mut config = SimConfig::default();
        config.arena = ArenaConfig {
            width: 30.0,
            height: 30.0,
            border: 5.5,
        };
        config.entity.size = 19.0;
        config.items.food_size = 19.0;
        config.items.threat_size = 19.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(msg) if msg.contains("spawn position")));
    }

    #[test]
    fn zero_period_is_rejected() {
        let mut config = SimConfig::default();
        config.timing.report_period = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn probability_out_of_range_is_rejected() {
        let mut config = SimConfig::default();
        config.entity.change_direction_prob = 1.5;
        assert!(config.validate().is_err());
    }
}
