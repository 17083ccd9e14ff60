//! Text buffer with selection and cursor arithmetic.
//!
//! Backs the widget's editable text area:
//! - `Selection` - a span in char offsets with a fixed anchor and moving end
//! - `TextBuffer` - rope-backed storage with selection replacement, relative
//!   deletion, horizontal motion, and column-stable vertical motion

mod buffer;
mod selection;

pub use buffer::TextBuffer;
pub use selection::Selection;
