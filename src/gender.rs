use std::fmt;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.random_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    pub fn color(self) -> [f32; 4] {
        match self {
            Gender::Male => [0.0, 0.0, 1.0, 1.0],
            Gender::Female => [1.0, 192.0 / 255.0, 203.0 / 255.0, 1.0],
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}
