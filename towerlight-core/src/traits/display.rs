//! Display sink trait for the status OLED

/// Errors that can occur when pushing a frame to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus communication failed
    Communication,
    /// Display not initialized
    NotReady,
}

/// Buffered text display
///
/// Drawing calls only touch the frame buffer; nothing reaches the panel
/// until [`flush`](DisplaySink::flush). Cursor coordinates are in pixels.
pub trait DisplaySink {
    /// Clear the frame buffer
    fn clear(&mut self);

    /// Move the text cursor
    ///
    /// - `x`: Column in pixels
    /// - `y`: Row in pixels (the panel uses 0 and 16)
    fn set_cursor(&mut self, x: u8, y: u8);

    /// Set the font scale for subsequent prints
    fn set_text_size(&mut self, size: u8);

    /// Print text at the cursor and advance it
    fn print(&mut self, text: &str);

    /// Send the frame buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}

/// Helper trait for common drawing sequences
pub trait DisplayExt: DisplaySink {
    /// Move the cursor and print in one call
    fn print_at(&mut self, x: u8, y: u8, text: &str) {
        self.set_cursor(x, y);
        self.print(text);
    }

    /// Clear the buffer and push the empty frame out
    fn blank(&mut self) -> Result<(), DisplayError> {
        self.clear();
        self.flush()
    }
}

// Blanket implementation for all DisplaySink types
impl<T: DisplaySink> DisplayExt for T {}
