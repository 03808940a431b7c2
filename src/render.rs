//! Ring Renderer
//!
//! Draws the ring state with macroquad primitives: one filled circle per
//! fighter in its corner color, optionally with a name/gauge label.

use macroquad::prelude::*;
use crate::config::WindowSettings;
use crate::sim::{Corner, Fighter, Location, Ring};

pub const BACKGROUND: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const RED_CORNER: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const BLUE_CORNER: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);
/// Highlight for a fighter who is tired or down
pub const LABEL_WARN: Color = Color::new(1.0, 0.75, 0.2, 1.0);

const LABEL_FONT_SIZE: f32 = 14.0;

pub fn corner_color(corner: Corner) -> Color {
    match corner {
        Corner::Red => RED_CORNER,
        Corner::Blue => BLUE_CORNER,
    }
}

/// Map ring coordinates (metres) to pixels. The ring fills the whole
/// screen, so (0,0) is the top-left pixel and (x_size, y_size) the bottom-right.
pub fn ring_to_screen(location: Location, ring: &Ring, screen: Vec2) -> Vec2 {
    vec2(
        location.x * screen.x / ring.x_size(),
        location.y * screen.y / ring.y_size(),
    )
}

fn fighter_label(fighter: &Fighter) -> String {
    format!(
        "{}  L{:.0} E{:.0}",
        fighter.full_name(),
        fighter.life(),
        fighter.energy()
    )
}

/// Clear the screen and draw every fighter in the ring
pub fn draw_ring(ring: &Ring, settings: &WindowSettings) {
    clear_background(BACKGROUND);

    let screen = vec2(screen_width(), screen_height());
    let radius = settings.fighter_radius;

    for (corner, fighter, location) in ring.occupied() {
        let pos = ring_to_screen(location, ring, screen);
        draw_circle(pos.x, pos.y, radius, corner_color(corner));

        if settings.show_labels {
            let color = if fighter.is_tired() || fighter.is_ko() {
                LABEL_WARN
            } else {
                LABEL_COLOR
            };
            // Keep the label on screen near the right/bottom edges
            let text = fighter_label(fighter);
            let width = measure_text(&text, None, LABEL_FONT_SIZE as u16, 1.0).width;
            let x = (pos.x + radius + 2.0).min(screen.x - width).max(0.0);
            let y = (pos.y - radius).max(LABEL_FONT_SIZE);
            draw_text(&text, x, y, LABEL_FONT_SIZE, color);
        }
    }
}
