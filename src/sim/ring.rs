//! Ring
//!
//! A bounded rectangle with two corners (red and blue). Each corner holds at
//! most one fighter together with its location. Every location stored here
//! lies inside `[0, x_size] × [0, y_size]`; moves saturate at the ropes.

use std::fmt;
use thiserror::Error;
use super::fighter::{Fighter, FighterId};
use super::location::Location;

pub const DEFAULT_RING_SIZE: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingError {
    #[error("this ring already has 2 fighters in it")]
    Full,
    #[error("{0} is already in this ring")]
    AlreadyInRing(FighterId),
    #[error("{0} is not in this ring")]
    NotInRing(FighterId),
    #[error("the {0} corner is empty")]
    EmptyCorner(Corner),
    #[error("invalid ring size {x_size} x {y_size} (both must be finite and positive)")]
    InvalidSize { x_size: f32, y_size: f32 },
    #[error("invalid move delta ({dx}, {dy})")]
    InvalidDelta { dx: f32, dy: f32 },
    #[error("invalid start location {0}")]
    InvalidLocation(Location),
}

/// Which side of the ring a fighter starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    Red = 0,
    Blue = 1,
}

impl Corner {
    pub const ALL: [Corner; 2] = [Corner::Red, Corner::Blue];

    fn slot(self) -> usize {
        self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Corner::Red => "Red",
            Corner::Blue => "Blue",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone)]
struct Occupant {
    fighter: Fighter,
    location: Location,
}

#[derive(Debug, Clone)]
pub struct Ring {
    name: String,
    x_size: f32,
    y_size: f32,
    corners: [Option<Occupant>; 2],
}

impl Ring {
    /// Create an empty ring. Both sizes must be finite and positive.
    pub fn new(name: impl Into<String>, x_size: f32, y_size: f32) -> Result<Self, RingError> {
        if !(x_size.is_finite() && y_size.is_finite() && x_size > 0.0 && y_size > 0.0) {
            return Err(RingError::InvalidSize { x_size, y_size });
        }
        Ok(Self {
            name: name.into(),
            x_size,
            y_size,
            corners: [None, None],
        })
    }

    /// Create a ring with both fighters placed at their starting marks:
    /// red at (½x, ¼y), blue at (½x, ¾y).
    pub fn with_fighters(
        name: impl Into<String>,
        x_size: f32,
        y_size: f32,
        red: Fighter,
        blue: Fighter,
    ) -> Result<Self, RingError> {
        let mut ring = Self::new(name, x_size, y_size)?;
        let red_start = ring.starting_mark(Corner::Red);
        let blue_start = ring.starting_mark(Corner::Blue);
        ring.add_fighter(red, red_start)?;
        ring.add_fighter(blue, blue_start)?;
        Ok(ring)
    }

    /// Where a fighter from `corner` starts
    pub fn starting_mark(&self, corner: Corner) -> Location {
        match corner {
            Corner::Red => Location::new(self.x_size * 0.5, self.y_size * 0.25),
            Corner::Blue => Location::new(self.x_size * 0.5, self.y_size * 0.75),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x_size(&self) -> f32 {
        self.x_size
    }

    pub fn y_size(&self) -> f32 {
        self.y_size
    }

    /// Put a fighter in the first free corner (red first, then blue).
    /// The location is clamped into the ring; it must be finite.
    pub fn add_fighter(&mut self, fighter: Fighter, location: Location) -> Result<Corner, RingError> {
        // clamp() passes NaN through, so it has to be caught here
        if !location.is_finite() {
            return Err(RingError::InvalidLocation(location));
        }
        if self.contains(fighter.id()) {
            return Err(RingError::AlreadyInRing(fighter.id()));
        }
        let corner = Corner::ALL
            .into_iter()
            .find(|c| self.corners[c.slot()].is_none())
            .ok_or(RingError::Full)?;

        tracing::debug!(
            ring = %self.name,
            fighter = %fighter.id(),
            %corner,
            "fighter entered the ring"
        );
        self.corners[corner.slot()] = Some(Occupant {
            fighter,
            location: location.clamped(self.x_size, self.y_size),
        });
        Ok(corner)
    }

    /// Move a fighter by (dx, dy), saturating each axis at the ring's edge.
    /// Returns the new location.
    pub fn move_fighter(&mut self, id: FighterId, dx: f32, dy: f32) -> Result<Location, RingError> {
        let corner = self.corner_of(id).ok_or(RingError::NotInRing(id))?;
        self.move_corner(corner, dx, dy)
    }

    /// Same as [`Ring::move_fighter`], addressed by corner
    pub fn move_corner(&mut self, corner: Corner, dx: f32, dy: f32) -> Result<Location, RingError> {
        if !(dx.is_finite() && dy.is_finite()) {
            return Err(RingError::InvalidDelta { dx, dy });
        }
        let (x_size, y_size) = (self.x_size, self.y_size);
        let occupant = self.corners[corner.slot()]
            .as_mut()
            .ok_or(RingError::EmptyCorner(corner))?;

        occupant.location.translate(dx, dy);
        occupant.location = occupant.location.clamped(x_size, y_size);
        Ok(occupant.location)
    }

    /// Take a fighter (and its location) out of the ring. Its corner is
    /// free for the next [`Ring::add_fighter`].
    pub fn remove_fighter(&mut self, id: FighterId) -> Result<Fighter, RingError> {
        for corner in Corner::ALL {
            let slot = &mut self.corners[corner.slot()];
            if !slot.as_ref().is_some_and(|o| o.fighter.id() == id) {
                continue;
            }
            if let Some(occupant) = slot.take() {
                tracing::debug!(ring = %self.name, fighter = %id, %corner, "fighter left the ring");
                return Ok(occupant.fighter);
            }
        }
        Err(RingError::NotInRing(id))
    }

    pub fn fighter(&self, corner: Corner) -> Option<&Fighter> {
        self.corners[corner.slot()].as_ref().map(|o| &o.fighter)
    }

    pub fn fighter_mut(&mut self, corner: Corner) -> Option<&mut Fighter> {
        self.corners[corner.slot()].as_mut().map(|o| &mut o.fighter)
    }

    pub fn location(&self, corner: Corner) -> Option<Location> {
        self.corners[corner.slot()].as_ref().map(|o| o.location)
    }

    pub fn location_of(&self, id: FighterId) -> Option<Location> {
        self.corner_of(id).and_then(|c| self.location(c))
    }

    pub fn corner_of(&self, id: FighterId) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .find(|c| self.fighter(*c).is_some_and(|f| f.id() == id))
    }

    pub fn contains(&self, id: FighterId) -> bool {
        self.corner_of(id).is_some()
    }

    /// Occupied corners with their fighter and location, red first
    pub fn occupied(&self) -> impl Iterator<Item = (Corner, &Fighter, Location)> + '_ {
        Corner::ALL.into_iter().filter_map(move |corner| {
            self.corners[corner.slot()]
                .as_ref()
                .map(|o| (corner, &o.fighter, o.location))
        })
    }

    pub fn len(&self) -> usize {
        self.corners.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.corners.len()
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<{} : {}m x {}m", self.name, self.x_size, self.y_size)?;
        for corner in Corner::ALL {
            let label = format!("Fighter {}", corner);
            match &self.corners[corner.slot()] {
                Some(o) => writeln!(
                    f,
                    "  {:<12} : {} : {}",
                    label,
                    o.location,
                    o.fighter.first_name().unwrap_or("-")
                )?,
                None => writeln!(f, "  {:<12} : empty", label)?,
            }
        }
        write!(f, "< ---------------- >")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn ring_10() -> Ring {
        Ring::new("Test Ring", DEFAULT_RING_SIZE, DEFAULT_RING_SIZE).unwrap()
    }

    fn in_bounds(ring: &Ring, loc: Location) -> bool {
        (0.0..=ring.x_size()).contains(&loc.x) && (0.0..=ring.y_size()).contains(&loc.y)
    }

    #[test]
    fn test_rejects_bad_sizes() {
        for (x, y) in [(0.0, 10.0), (10.0, -1.0), (f32::NAN, 10.0), (f32::INFINITY, 5.0)] {
            assert!(matches!(Ring::new("bad", x, y), Err(RingError::InvalidSize { .. })));
        }
    }

    #[test]
    fn test_add_fills_red_then_blue() {
        let mut ring = ring_10();
        assert!(ring.is_empty());
        let red = Fighter::anonymous();
        let blue = Fighter::anonymous();
        let (red_id, blue_id) = (red.id(), blue.id());

        assert_eq!(ring.add_fighter(red, Location::ORIGIN), Ok(Corner::Red));
        assert_eq!(ring.add_fighter(blue, Location::ORIGIN), Ok(Corner::Blue));
        assert_eq!(ring.corner_of(red_id), Some(Corner::Red));
        assert_eq!(ring.corner_of(blue_id), Some(Corner::Blue));
        assert!(ring.is_full());
    }

    #[test]
    fn test_third_fighter_rejected() {
        let mut ring = Ring::with_fighters("Full", 20.0, 20.0, Fighter::anonymous(), Fighter::anonymous()).unwrap();
        let third = Fighter::anonymous();
        let third_id = third.id();
        assert_eq!(ring.add_fighter(third, Location::ORIGIN), Err(RingError::Full));
        assert!(!ring.contains(third_id));
        assert_eq!(ring.len(), 2);
    }

    #[test]
    fn test_same_fighter_twice_rejected() {
        let mut ring = ring_10();
        let fighter = Fighter::anonymous();
        let copy = fighter.clone();
        ring.add_fighter(fighter, Location::ORIGIN).unwrap();
        assert_eq!(
            ring.add_fighter(copy.clone(), Location::ORIGIN),
            Err(RingError::AlreadyInRing(copy.id()))
        );
    }

    #[test]
    fn test_with_fighters_starting_marks() {
        let ring = Ring::with_fighters("Square Ring 1", 20.0, 20.0, Fighter::anonymous(), Fighter::anonymous()).unwrap();
        assert_eq!(ring.location(Corner::Red), Some(Location::new(10.0, 5.0)));
        assert_eq!(ring.location(Corner::Blue), Some(Location::new(10.0, 15.0)));
    }

    #[test]
    fn test_add_clamps_location() {
        let mut ring = ring_10();
        ring.add_fighter(Fighter::anonymous(), Location::new(-4.0, 30.0)).unwrap();
        assert_eq!(ring.location(Corner::Red), Some(Location::new(0.0, 10.0)));
    }

    #[test]
    fn test_non_finite_location_rejected() {
        let mut ring = ring_10();
        let fighter = Fighter::anonymous();
        let id = fighter.id();
        assert!(matches!(
            ring.add_fighter(fighter.clone(), Location::new(f32::NAN, 5.0)),
            Err(RingError::InvalidLocation(_))
        ));
        assert!(matches!(
            ring.add_fighter(fighter.clone(), Location::new(5.0, f32::INFINITY)),
            Err(RingError::InvalidLocation(_))
        ));
        assert!(ring.is_empty());

        ring.add_fighter(fighter, Location::new(5.0, 5.0)).unwrap();
        let loc = ring.move_fighter(id, 1.0, 1.0).unwrap();
        assert!(in_bounds(&ring, loc));
    }

    #[test]
    fn test_move_saturates_at_ropes() {
        let mut ring = ring_10();
        let fighter = Fighter::anonymous();
        let id = fighter.id();
        ring.add_fighter(fighter, Location::new(9.0, 9.0)).unwrap();

        assert_eq!(ring.move_fighter(id, 5.0, 5.0), Ok(Location::new(10.0, 10.0)));
        assert_eq!(ring.move_fighter(id, -25.0, -1.0), Ok(Location::new(0.0, 9.0)));
        assert_eq!(ring.move_fighter(id, 2.5, 0.5), Ok(Location::new(2.5, 9.5)));
        assert_eq!(ring.location_of(id), Some(Location::new(2.5, 9.5)));
    }

    #[test]
    fn test_axes_clamp_independently() {
        let mut ring = Ring::new("Wide", 30.0, 5.0).unwrap();
        let fighter = Fighter::anonymous();
        let id = fighter.id();
        ring.add_fighter(fighter, Location::new(15.0, 2.5)).unwrap();
        assert_eq!(ring.move_fighter(id, 1.0, 100.0), Ok(Location::new(16.0, 5.0)));
    }

    #[test]
    fn test_random_moves_stay_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ring = Ring::new("Bounds", 12.0, 7.5).unwrap();
        let fighter = Fighter::anonymous();
        let id = fighter.id();
        ring.add_fighter(fighter, Location::new(6.0, 3.0)).unwrap();

        for _ in 0..2_000 {
            let dx = rng.gen_range(-20.0..20.0);
            let dy = rng.gen_range(-20.0..20.0);
            let loc = ring.move_fighter(id, dx, dy).unwrap();
            assert!(in_bounds(&ring, loc), "{} escaped the ring", loc);
        }
    }

    #[test]
    fn test_non_finite_delta_rejected() {
        let mut ring = ring_10();
        let fighter = Fighter::anonymous();
        let id = fighter.id();
        ring.add_fighter(fighter, Location::new(5.0, 5.0)).unwrap();
        assert!(matches!(ring.move_fighter(id, f32::NAN, 0.0), Err(RingError::InvalidDelta { .. })));
        assert!(matches!(ring.move_fighter(id, 0.0, f32::INFINITY), Err(RingError::InvalidDelta { .. })));
        assert_eq!(ring.location_of(id), Some(Location::new(5.0, 5.0)));
    }

    #[test]
    fn test_move_absent_fighter_fails() {
        let mut ring = ring_10();
        ring.add_fighter(Fighter::anonymous(), Location::ORIGIN).unwrap();
        let outsider = Fighter::anonymous();
        assert_eq!(
            ring.move_fighter(outsider.id(), 1.0, 1.0),
            Err(RingError::NotInRing(outsider.id()))
        );
        assert_eq!(ring.move_corner(Corner::Blue, 1.0, 1.0), Err(RingError::EmptyCorner(Corner::Blue)));
    }

    #[test]
    fn test_remove_fighter() {
        let red = Fighter::anonymous();
        let blue = Fighter::anonymous();
        let (red_id, blue_id) = (red.id(), blue.id());
        let mut ring = Ring::with_fighters("Remove", 10.0, 10.0, red, blue).unwrap();

        let removed = ring.remove_fighter(red_id).unwrap();
        assert_eq!(removed.id(), red_id);
        assert!(!ring.contains(red_id));
        assert_eq!(ring.location(Corner::Red), None);
        // Blue keeps its corner and position
        assert_eq!(ring.corner_of(blue_id), Some(Corner::Blue));
        assert_eq!(ring.location(Corner::Blue), Some(Location::new(5.0, 7.5)));

        // The freed corner is reused
        assert_eq!(ring.add_fighter(removed, Location::ORIGIN), Ok(Corner::Red));
    }

    #[test]
    fn test_remove_absent_fighter_fails() {
        let mut ring = ring_10();
        let outsider = Fighter::anonymous();
        assert_eq!(ring.remove_fighter(outsider.id()).unwrap_err(), RingError::NotInRing(outsider.id()));

        let fighter = Fighter::anonymous();
        let id = fighter.id();
        ring.add_fighter(fighter, Location::ORIGIN).unwrap();
        ring.remove_fighter(id).unwrap();
        assert_eq!(ring.remove_fighter(id).unwrap_err(), RingError::NotInRing(id));
    }

    #[test]
    fn test_occupied_lists_red_first() {
        let mut ring = ring_10();
        ring.add_fighter(Fighter::anonymous(), Location::ORIGIN).unwrap();
        ring.add_fighter(Fighter::anonymous(), Location::new(1.0, 1.0)).unwrap();
        let corners: Vec<Corner> = ring.occupied().map(|(c, _, _)| c).collect();
        assert_eq!(corners, vec![Corner::Red, Corner::Blue]);
    }

    #[test]
    fn test_display() {
        let mut red = Fighter::anonymous();
        red.set_first_name("John1");
        let mut ring = ring_10();
        ring.add_fighter(red, Location::new(5.0, 2.5)).unwrap();
        let text = ring.to_string();
        assert!(text.starts_with("<Test Ring : 10m x 10m"));
        assert!(text.contains("< Location: 5.00 : 2.50 > : John1"));
        assert!(text.contains("Fighter Blue : empty"));
    }
}
