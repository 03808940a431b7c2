//! Fight
//!
//! A ring with its two fighters plus the RNG that drives them. Each
//! [`Fight::step`] gives every fighter in the ring an independent uniform
//! displacement on both axes. Energy and life don't factor in.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use super::fighter::FighterId;
use super::ring::{Corner, Ring, RingError};

/// Upper bound on the per-axis step. Uniform float ranges overflow well
/// before f32::MAX, and no ring is anywhere near this wide.
pub const MAX_STEP_LIMIT: f32 = 1.0e6;

pub struct Fight<R = ChaCha8Rng> {
    ring: Ring,
    rng: R,
    /// Largest displacement per axis per tick, in ring units
    max_step: f32,
    ticks: u64,
}

impl Fight<ChaCha8Rng> {
    /// Fight driven by a ChaCha8 stream seeded with `seed`
    pub fn seeded(ring: Ring, seed: u64, max_step: f32) -> Self {
        Self::new(ring, ChaCha8Rng::seed_from_u64(seed), max_step)
    }
}

impl<R: Rng> Fight<R> {
    /// `max_step` is taken as a magnitude and capped at [`MAX_STEP_LIMIT`].
    /// NaN means no movement.
    pub fn new(ring: Ring, rng: R, max_step: f32) -> Self {
        let max_step = if max_step.is_nan() {
            0.0
        } else {
            max_step.abs().min(MAX_STEP_LIMIT)
        };
        Self {
            ring,
            rng,
            max_step,
            ticks: 0,
        }
    }

    /// Advance one tick: random-walk every fighter in the ring
    pub fn step(&mut self) -> Result<(), RingError> {
        for corner in Corner::ALL {
            if self.ring.fighter(corner).is_none() {
                continue;
            }
            let dx = self.rng.gen_range(-self.max_step..=self.max_step);
            let dy = self.rng.gen_range(-self.max_step..=self.max_step);
            let location = self.ring.move_corner(corner, dx, dy)?;
            tracing::trace!(tick = self.ticks, %corner, x = location.x, y = location.y, "moved");
        }
        self.ticks += 1;
        Ok(())
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn ring_mut(&mut self) -> &mut Ring {
        &mut self.ring
    }

    pub fn max_step(&self) -> f32 {
        self.max_step
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// True if the fighter is one of the fight's participants
    pub fn involves(&self, id: FighterId) -> bool {
        self.ring.contains(id)
    }
}
