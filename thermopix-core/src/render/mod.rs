//! Temperature renderers for the 8x8 LED matrix
//!
//! ## Overview
//!
//! Two ways of drawing a corrected temperature, both deterministic pure
//! functions of the current value with a defined fallback instead of an
//! error path:
//!
//! - [`binary_row`] - current mode. One row encodes the integer part as
//!   unsigned binary in the bucket color (columns 0-4) and the first
//!   fractional digit as three blue bits (columns 5-7). Magnitudes above
//!   31 °C cannot fit the integer field and fill the row white.
//! - [`glyph`] - legacy mode. The two-digit absolute temperature fills the
//!   whole grid as a pair of 4x8 digit glyphs in the bucket color.
//!   Magnitudes of 100 °C or more fill the grid solid.
//!
//! ## Contract
//!
//! Renderers only light pixels; unlit positions are left at whatever the
//! surface already holds. Callers clear the surface before each cycle so a
//! shorter pattern never shows stale bits from the previous one.

pub mod binary_row;
pub mod glyph;

pub use binary_row::draw_binary_row;
pub use glyph::draw_glyph_grid;

use crate::traits::DisplaySurface;

/// Which renderer a cycle uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderMode {
    /// Single-row binary pattern with fractional digit
    #[default]
    BinaryRow,
    /// Legacy two-digit glyph grid
    Glyphs,
}

/// Draw a corrected temperature using the selected mode.
pub fn draw<D: DisplaySurface>(display: &mut D, temperature: f32, mode: RenderMode) {
    match mode {
        RenderMode::BinaryRow => draw_binary_row(display, temperature),
        RenderMode::Glyphs => draw_glyph_grid(display, temperature),
    }
}
