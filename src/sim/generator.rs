//! Random Fighter Generator
//!
//! Samples plausible fighters around a "size" scalar. Mass-like stats
//! (weight, strength) grow with size³, lengths (height, reach) grow linearly,
//! and dexterity shrinks with size⁴.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError};
use thiserror::Error;
use super::fighter::{Fighter, FighterProfile, WeightClass};

/// Baseline attributes of a size 1.0 fighter
pub mod baseline {
    pub const SIZE_SPREAD: f32 = 0.05;
    pub const HEIGHT_CM: f32 = 175.0;
    pub const HEIGHT_SPREAD: f32 = 3.0;
    pub const REACH_CM: f32 = 175.0;
    pub const REACH_SPREAD: f32 = 1.0;
    pub const WEIGHT_KG: f32 = 75.0;
    pub const WEIGHT_SPREAD: f32 = 2.0;
    pub const STRENGTH: f32 = 7.0;
    pub const STRENGTH_SPREAD: f32 = 2.0;
    pub const DEXTERITY: f32 = 7.0;
    pub const DEXTERITY_SPREAD: f32 = 1.0;
    /// Ages are drawn from `MIN_AGE..MAX_AGE` (upper bound exclusive)
    pub const MIN_AGE: u32 = 18;
    pub const MAX_AGE: u32 = 40;
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("fighter size must be finite and positive, got {0}")]
    InvalidSize(f32),
    #[error("bad distribution parameters: {0}")]
    Distribution(#[from] NormalError),
}

fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f32, std_dev: f32) -> Result<f32, NormalError> {
    Ok(Normal::new(mean, std_dev)?.sample(rng))
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Generate a fighter named `John{i} Cage{i}` with attributes proportional to `size`.
pub fn generate_random_fighter<R: Rng + ?Sized>(
    rng: &mut R,
    size: f32,
    i: u32,
) -> Result<Fighter, GeneratorError> {
    use baseline::*;

    if !(size.is_finite() && size > 0.0) {
        return Err(GeneratorError::InvalidSize(size));
    }

    let size = size * sample_normal(rng, 1.0, SIZE_SPREAD)?;
    tracing::debug!(i, size, "generating fighter");

    let cube = size.powi(3);
    let profile = FighterProfile {
        first_name: Some(format!("John{}", i)),
        last_name: Some(format!("Cage{}", i)),
        age: Some(rng.gen_range(MIN_AGE..MAX_AGE)),
        height: Some(sample_normal(rng, HEIGHT_CM * size, HEIGHT_SPREAD)?.round()),
        weight: Some(round1(sample_normal(rng, WEIGHT_KG * cube, WEIGHT_SPREAD)?)),
        reach: Some(sample_normal(rng, REACH_CM * size, REACH_SPREAD)?.round()),
        weight_class: WeightClass::ALL.choose(rng).copied(),
        strength: Some(round1(sample_normal(rng, STRENGTH * cube, STRENGTH_SPREAD)?)),
        dexterity: Some(round1(sample_normal(rng, DEXTERITY / size.powi(4), DEXTERITY_SPREAD)?)),
        ..Default::default()
    };

    // Goes through Fighter::new so negative draws are normalized like any other input
    Ok(Fighter::new(profile))
}
