//! In-memory 8x8 pixel frame
//!
//! Reference [`DisplaySurface`] implementation: a plain array of colors
//! plus the rotation/low-light settings a real driver would latch. Used by
//! the tests and by hosts that render somewhere other than real hardware.

use crate::color::Rgb;
use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::traits::{DisplaySurface, Rotation};

/// Unlit pixel color.
pub const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// An 8x8 frame of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelFrame {
    pixels: [[Rgb; DISPLAY_WIDTH as usize]; DISPLAY_HEIGHT as usize],
    rotation: Rotation,
    low_light: bool,
}

impl PixelFrame {
    /// Create a blank frame with default driver settings.
    pub fn new() -> Self {
        Self {
            pixels: [[BACKGROUND; DISPLAY_WIDTH as usize]; DISPLAY_HEIGHT as usize],
            rotation: Rotation::default(),
            low_light: false,
        }
    }

    /// Color at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: u8, y: u8) -> Option<Rgb> {
        if x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT {
            Some(self.pixels[y as usize][x as usize])
        } else {
            None
        }
    }

    /// Number of pixels not at the background color.
    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .flatten()
            .filter(|p| **p != BACKGROUND)
            .count()
    }

    /// Latched rotation setting.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Latched low-light setting.
    pub fn low_light(&self) -> bool {
        self.low_light
    }
}

impl Default for PixelFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for PixelFrame {
    fn set_pixel(&mut self, x: u8, y: u8, color: Rgb) {
        if x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT {
            self.pixels[y as usize][x as usize] = color;
        }
    }

    fn clear(&mut self) {
        self.pixels = [[BACKGROUND; DISPLAY_WIDTH as usize]; DISPLAY_HEIGHT as usize];
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    fn set_low_light(&mut self, enabled: bool) {
        self.low_light = enabled;
    }
}
