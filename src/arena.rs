use std::ops::RangeInclusive;

use piston_window::*;
use rand::Rng;

use crate::config::ArenaConfig;

const BORDER_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Axis-aligned box, `x`/`y` being the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Aabb { x, y, w, h }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> [f64; 2] {
        [self.x + self.w / 2.0, self.y + self.h / 2.0]
    }

    /// Strict overlap: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn as_rect(&self) -> [f64; 4] {
        [self.x, self.y, self.w, self.h]
    }
}

/// Which walls a box was pushed back from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

/// Whole-number top-left corners at which an item of a given size fits
/// inside the border. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnArea {
    x: RangeInclusive<i32>,
    y: RangeInclusive<i32>,
}

impl SpawnArea {
    pub fn x_range(&self) -> &RangeInclusive<i32> {
        &self.x
    }

    pub fn y_range(&self) -> &RangeInclusive<i32> {
        &self.y
    }

    pub fn sample(&self, rng: &mut impl Rng) -> (i32, i32) {
        (
            rng.random_range(self.x.clone()),
            rng.random_range(self.y.clone()),
        )
    }
}

/// The bordered rectangle everything lives in.
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    pub border: f64,
}

impl Arena {
    pub fn new(config: &ArenaConfig) -> Self {
        Arena {
            width: config.width,
            height: config.height,
            border: config.border,
        }
    }

    /// Spawn corners for a square of `size`: `[border, bound - size - border]`
    /// on each axis, rounded inwards to whole numbers. `None` when no whole
    /// coordinate fits.
    pub fn spawn_area(&self, size: f64) -> Option<SpawnArea> {
        let min = self.border.ceil();
        let max_x = (self.width - size - self.border).floor();
        let max_y = (self.height - size - self.border).floor();
        if !(min <= max_x && min <= max_y) {
            return None;
        }
        Some(SpawnArea {
            x: min as i32..=max_x as i32,
            y: min as i32..=max_y as i32,
        })
    }

    pub fn contains(&self, rect: &Aabb) -> bool {
        rect.left() >= self.border
            && rect.top() >= self.border
            && rect.right() <= self.width - self.border
            && rect.bottom() <= self.height - self.border
    }

    /// Snap `rect` back inside the border, reporting each axis that was hit.
    pub fn clamp(&self, rect: &mut Aabb) -> WallHit {
        let mut hit = WallHit::default();
        if rect.left() < self.border {
            rect.x = self.border;
            hit.x = true;
        } else if rect.right() > self.width - self.border {
            rect.x = self.width - self.border - rect.w;
            hit.x = true;
        }
        if rect.top() < self.border {
            rect.y = self.border;
            hit.y = true;
        } else if rect.bottom() > self.height - self.border {
            rect.y = self.height - self.border - rect.h;
            hit.y = true;
        }
        hit
    }

    pub fn draw(&self, transform: math::Matrix2d, g: &mut G2d) {
        let b = self.border;
        for strip in [
            [0.0, 0.0, self.width, b],
            [0.0, self.height - b, self.width, b],
            [0.0, 0.0, b, self.height],
            [self.width - b, 0.0, b, self.height],
        ] {
            rectangle(BORDER_COLOR, strip, transform, g);
        }
    }
}
