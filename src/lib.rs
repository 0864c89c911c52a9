//! Two entities wander a bordered arena, eat food, bump into static threats
//! and learn to steer clear of the spots where they got hurt.

pub mod arena;
pub mod config;
pub mod entity;
pub mod error;
pub mod food;
pub mod gender;
pub mod report;
pub mod simulation;
pub mod spawner;
pub mod stats;
pub mod threat;

pub use config::SimConfig;
pub use error::{Result, SimError};
pub use simulation::{LoopState, Simulation};
