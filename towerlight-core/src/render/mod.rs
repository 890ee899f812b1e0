//! Two-line display rendering
//!
//! - [`format`]: value to text helpers
//! - [`table`]: which producer fills each line in each screen mode
//! - [`renderer`]: per-tick dispatch onto the display sink

pub mod format;
pub mod renderer;
pub mod table;

pub use format::{Line, LINE_LEN};
pub use renderer::{RenderState, Renderer, LARGE_TEXT, LINE_ONE_Y, LINE_TWO_Y, SMALL_TEXT};
pub use table::{line_pair, LinePair, LineProducer};
