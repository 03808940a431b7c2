//! Simulation Module
//!
//! Everything that happens inside the ring, independent of the window:
//! - Location: ring-space coordinates
//! - Fighter: identity, profile and gauges
//! - Ring: two corners, clamped movement
//! - Generator: random fighters from normal distributions
//! - Fight: a ring plus the RNG that walks its fighters

// Entity API is wider than what the demo loop calls
#![allow(dead_code)]

pub mod location;
pub mod fighter;
pub mod ring;
pub mod generator;
pub mod fight;

pub use location::Location;
pub use fighter::{Fighter, FighterProfile};
pub use ring::{Corner, Ring};
pub use generator::generate_random_fighter;
pub use fight::Fight;
