//! Display backend trait
//!
//! Defines the interface for the physical panel.

use towerlight_core::traits::DisplayError;

/// Glyph cell width of the built-in font at scale 1 (pixels)
pub const CHAR_WIDTH: u8 = 6;

/// Glyph cell height of the built-in font at scale 1 (pixels)
pub const CHAR_HEIGHT: u8 = 8;

/// Display backend trait
///
/// Provides a hardware-agnostic interface for drawing text to the panel.
/// Drawing goes to the backend's own buffer until [`flush`](Self::flush).
pub trait DisplayBackend {
    /// Clear the entire display buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at a pixel position
    ///
    /// - `row`: Top edge in pixels
    /// - `col`: Left edge in pixels
    /// - `size`: Font scale (1 = 6x8 cells)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, size: u8, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (width, height) in pixels
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;

    /// Number of characters that fit on one line at `size`
    fn columns_at(&self, size: u8) -> usize {
        let cell = CHAR_WIDTH as usize * size.max(1) as usize;
        self.dimensions().0 as usize / cell
    }
}
