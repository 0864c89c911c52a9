//! Random placement of food and threats.
//!
//! Coordinates are whole numbers drawn uniformly from a [`SpawnArea`], i.e.
//! `[border, bound - size - border]` on each axis. Nothing is checked against
//! existing items, so overlaps can happen.

use rand::Rng;

use crate::arena::SpawnArea;
use crate::food::Food;
use crate::threat::Threat;

pub fn spawn_food(area: &SpawnArea, size: f64, rng: &mut impl Rng) -> Food {
    let (x, y) = area.sample(rng);
    Food::new(x as f64, y as f64, size)
}

pub fn spawn_threats(area: &SpawnArea, count: usize, size: f64, rng: &mut impl Rng) -> Vec<Threat> {
    (0..count)
        .map(|_| {
            let (x, y) = area.sample(rng);
            Threat::new(x, y, size)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Arena;
    use crate::config::ArenaConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn food_lands_inside_border() {
        let arena = Arena::new(&ArenaConfig::default());
        let area = arena.spawn_area(10.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let food = spawn_food(&area, 10.0, &mut rng);
            assert!(arena.contains(&food.rect()));
            assert_eq!(food.x.fract(), 0.0);
        }
    }

    #[test]
    fn spawns_requested_threat_count() {
        let arena = Arena::new(&ArenaConfig::default());
        let area = arena.spawn_area(20.0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let threats = spawn_threats(&area, 6, 20.0, &mut rng);
        assert_eq!(threats.len(), 6);
        assert!(threats.iter().all(|t| arena.contains(&t.rect())));
    }

    #[test]
    fn tight_arena_pins_spawn_to_border() {
        let arena = Arena::new(&ArenaConfig {
            width: 30.0,
            height: 30.0,
            border: 5.0,
        });
        let area = arena.spawn_area(20.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let threats = spawn_threats(&area, 4, 20.0, &mut rng);
        assert!(threats.iter().all(|t| t.location().x == 5 && t.location().y == 5));
    }
}
