use piston_window::*;

use crate::arena::Aabb;

const THREAT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Exact spawn coordinates of a threat; entities remember encounters by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

/// A static obstacle. Threats never move once spawned, so the fields are
/// private and only readable.
#[derive(Debug, Clone, PartialEq)]
pub struct Threat {
    location: Location,
    size: f64,
}

impl Threat {
    pub fn new(x: i32, y: i32, size: f64) -> Self {
        Threat {
            location: Location { x, y },
            size,
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(
            self.location.x as f64,
            self.location.y as f64,
            self.size,
            self.size,
        )
    }

    pub fn draw(&self, transform: math::Matrix2d, g: &mut G2d) {
        rectangle(THREAT_COLOR, self.rect().as_rect(), transform, g);
    }
}
