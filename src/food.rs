use piston_window::*;
use slotmap::{SlotMap, new_key_type};

use crate::arena::Aabb;

const FOOD_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

new_key_type! {
    /// Slot handle for a food item.
    pub struct FoodId;
}

/// Fixed-population pool of food; eaten items are removed and replaced.
pub type FoodPool = SlotMap<FoodId, Food>;

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Food {
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Food { x, y, size }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.size, self.size)
    }

    pub fn draw(&self, transform: math::Matrix2d, g: &mut G2d) {
        rectangle(FOOD_COLOR, self.rect().as_rect(), transform, g);
    }
}
