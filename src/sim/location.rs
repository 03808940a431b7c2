//! Ring coordinates
//!
//! A fighter's position inside a ring, in ring units (metres).
//! Origin is the top-left corner, +X right, +Y down (matches screen space).

use std::fmt;

/// A 2D position in ring space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    pub x: f32,
    pub y: f32,
}

impl Location {
    pub const ORIGIN: Location = Location { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Move by an offset (unbounded - the ring does the clamping)
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Saturate both axes into `[0, x_max] × [0, y_max]`
    pub fn clamped(self, x_max: f32, y_max: f32) -> Self {
        Self {
            x: self.x.clamp(0.0, x_max),
            y: self.y.clamp(0.0, y_max),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "< Location: {:.2} : {:.2} >", self.x, self.y)
    }
}
